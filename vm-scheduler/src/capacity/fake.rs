/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! A deterministic, in-memory [`CapacityProbe`] for tests and the CLI demo.
//!
//! A small, explicit, in-memory node inventory: no network, no async I/O,
//! fully inspectable state.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{CapacityProbe, ProbeError, ReservableCapacity};

/// One node's raw, unadjusted capacity and current usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub total_memory_bytes: u64,
    pub used_memory_bytes: u64,
    pub total_vcpus: u32,
    pub used_vcpus: u32,
}

/// In-memory [`CapacityProbe`] backed by an explicit per-node snapshot map.
///
/// Applies the same percentage-adjustment formula a real Proxmox-backed
/// probe must: `reservable = max(0, floor(total * pct / 100) - used)`. A
/// node can additionally be configured to fail with a specific
/// [`ProbeError`] on every call, to exercise the Placer's abort-on-first-
/// failure behavior.
#[derive(Debug, Default)]
pub struct InMemoryCapacityProbe {
    nodes: RwLock<HashMap<String, NodeSnapshot>>,
    failing: RwLock<HashMap<String, ProbeError>>,
}

impl InMemoryCapacityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a node's raw snapshot.
    pub fn with_node(mut self, name: impl Into<String>, snapshot: NodeSnapshot) -> Self {
        self.nodes
            .get_mut()
            .unwrap()
            .insert(name.into(), snapshot);
        self
    }

    /// Configure a node to fail every probe call with `error`, overriding
    /// any registered snapshot.
    pub fn with_failure(mut self, name: impl Into<String>, error: ProbeError) -> Self {
        self.failing.get_mut().unwrap().insert(name.into(), error);
        self
    }

    /// Mutate a node's usage in place (simulates another scheduling round
    /// placing a guest on it), without reconstructing the whole fake.
    pub fn set_used(&self, name: &str, used_memory_bytes: u64, used_vcpus: u32) {
        if let Some(snap) = self.nodes.write().unwrap().get_mut(name) {
            snap.used_memory_bytes = used_memory_bytes;
            snap.used_vcpus = used_vcpus;
        }
    }
}

/// `max(0, floor(total * pct / 100) - used)`, saturating rather than
/// panicking when usage exceeds adjusted capacity.
fn adjusted_headroom(total: u64, used: u64, pct: u32) -> u64 {
    let scaled = (total as u128 * pct as u128) / 100;
    scaled.saturating_sub(used as u128) as u64
}

#[async_trait]
impl CapacityProbe for InMemoryCapacityProbe {
    async fn reservable_resources(
        &self,
        node_name: &str,
        memory_adjustment_pct: u32,
        cpu_adjustment_pct: u32,
        cancel: &CancellationToken,
    ) -> Result<ReservableCapacity, ProbeError> {
        if cancel.is_cancelled() {
            return Err(ProbeError::Cancelled);
        }

        if let Some(err) = self.failing.read().unwrap().get(node_name) {
            return Err(err.clone());
        }

        let snapshot = self
            .nodes
            .read()
            .unwrap()
            .get(node_name)
            .copied()
            .ok_or_else(|| ProbeError::NodeNotFound {
                node: node_name.to_string(),
            })?;

        // pct == 0 is the disable-constraint sentinel; the Placer
        // substitutes its own value before filtering, so any value is
        // correct here. We report 0 rather than the raw total to make
        // probe bugs in the Placer's override logic fail loudly in tests.
        let memory_bytes = if memory_adjustment_pct == 0 {
            0
        } else {
            adjusted_headroom(
                snapshot.total_memory_bytes,
                snapshot.used_memory_bytes,
                memory_adjustment_pct,
            )
        };

        let v_cpus = if cpu_adjustment_pct == 0 {
            0
        } else {
            adjusted_headroom(
                snapshot.total_vcpus as u64,
                snapshot.used_vcpus as u64,
                cpu_adjustment_pct,
            ) as u32
        };

        Ok(ReservableCapacity {
            memory_bytes,
            v_cpus,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
