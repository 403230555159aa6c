/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Loading a cluster snapshot (node inventory + scheduling hints) from YAML.
//!
//! It exists to drive the CLI demo in `main.rs`; a real deployment builds its
//! `InMemoryCapacityProbe` (or a real hypervisor-backed one) from the
//! reconciler's own state instead of a file.
//!
//! Expected YAML shape:
//! ```yaml
//! nodes:
//!   pve1:
//!     total_memory_mib: 65536
//!     used_memory_mib: 16384
//!     total_vcpus: 32
//!     used_vcpus: 8
//!   pve2:
//!     total_memory_mib: 131072
//!     total_vcpus: 64
//! hints:
//!   memory_adjustment_pct: 100
//!   cpu_adjustment_pct: 100
//!   prefer_lower_guest_count: true
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::capacity::fake::{InMemoryCapacityProbe, NodeSnapshot};
use crate::types::SchedulerHints;

/// Top-level wrapper matching the YAML file layout. Private — callers get a
/// ready-to-use [`ClusterConfig`] from [`load_cluster_config`].
#[derive(Debug, Deserialize)]
struct ClusterFile {
    nodes: HashMap<String, ClusterNodeEntry>,
    #[serde(default)]
    hints: SchedulerHints,
}

#[derive(Debug, Deserialize)]
struct ClusterNodeEntry {
    total_memory_mib: u64,
    #[serde(default)]
    used_memory_mib: u64,
    total_vcpus: u32,
    #[serde(default)]
    used_vcpus: u32,
}

const MIB: u64 = 1 << 20;

/// A cluster snapshot ready to drive [`Placer::schedule`](crate::scheduler::Placer::schedule):
/// a populated [`InMemoryCapacityProbe`], the node names in file order (used
/// as the allow-list), and the loaded [`SchedulerHints`].
pub struct ClusterConfig {
    pub probe: InMemoryCapacityProbe,
    pub allowed_nodes: Vec<String>,
    pub hints: SchedulerHints,
}

/// Parse `path` into a [`ClusterConfig`].
///
/// # Errors
/// Returns an error if the file cannot be read or the YAML is structurally
/// invalid. An empty `nodes:` map is accepted — it simply yields an empty
/// allow-list, which `Placer::schedule` rejects with `ConfigurationError`.
pub fn load_cluster_config(path: &Path) -> Result<ClusterConfig> {
    info!("loading cluster configuration from: {}", path.display());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot open cluster configuration file: {}", path.display()))?;

    let file: ClusterFile = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse cluster configuration: {}", path.display()))?;

    let mut probe = InMemoryCapacityProbe::new();
    let mut allowed_nodes = Vec::with_capacity(file.nodes.len());
    for (name, entry) in file.nodes {
        let snapshot = NodeSnapshot {
            total_memory_bytes: entry.total_memory_mib.saturating_mul(MIB),
            used_memory_bytes: entry.used_memory_mib.saturating_mul(MIB),
            total_vcpus: entry.total_vcpus,
            used_vcpus: entry.used_vcpus,
        };
        probe = probe.with_node(name.clone(), snapshot);
        allowed_nodes.push(name);
    }
    allowed_nodes.sort();

    info!(
        node_count = allowed_nodes.len(),
        "cluster configuration loaded"
    );

    Ok(ClusterConfig {
        probe,
        allowed_nodes,
        hints: file.hints,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
