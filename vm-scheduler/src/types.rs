/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data types for the VM placement scheduler.
//!
//! ```text
//! Reconciler ──(MemoryMiB, NumCores)──► ResourceRequest ──► Placer ──► Decision
//!                         │                                    ▲
//!                         └──(allowedNodes, placements)────────┘
//! ```
//!
//! # Ownership model
//! All four types here are created fresh for a single scheduling call and
//! dropped at the end of it. None is persisted by this crate — the caller
//! (the reconciler) is responsible for writing a successful [`Decision`]
//! back into cluster status as a new [`Placement`].

use std::fmt;

/// Number of bytes in one mebibyte. Used to convert the pending machine's
/// `MemoryMiB` spec field into bytes.
pub const BYTES_PER_MIB: u64 = 1 << 20;

// ── ResourceRequest ────────────────────────────────────────────────────────────

/// The resource footprint of one pending machine.
///
/// Built once per scheduling call from the machine's spec and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceRequest {
    pub memory_bytes: u64,
    pub v_cpus: u32,
}

impl ResourceRequest {
    /// Build a request from the machine spec's native units (MiB, whole
    /// cores), converting memory to bytes (`MiB × 2²⁰`).
    pub fn from_spec(memory_mib: u64, num_cores: u32) -> Self {
        Self {
            memory_bytes: memory_mib.saturating_mul(BYTES_PER_MIB),
            v_cpus: num_cores,
        }
    }
}

impl fmt::Display for ResourceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} MiB / {} vCPU",
            self.memory_bytes / BYTES_PER_MIB,
            self.v_cpus
        )
    }
}

// ── NodeCandidate ──────────────────────────────────────────────────────────────

/// A hypervisor node's resource snapshot, as seen by one scheduling call.
///
/// `free_memory_bytes` / `free_vcpus` reflect a single, consistent
/// [`CapacityProbe`](crate::capacity::CapacityProbe) call — they are never
/// stitched together from multiple probes. `scheduled_count` is the number
/// of existing placements on this node for the machine's own role
/// (control-plane vs. worker); the caller is responsible for passing in only
/// same-role [`Placement`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCandidate {
    pub name: String,
    pub free_memory_bytes: u64,
    pub free_vcpus: u32,
    pub scheduled_count: u32,
}

// ── Placement ──────────────────────────────────────────────────────────────────

/// An existing `(machine, node)` assignment read from cluster status.
///
/// Input only — the scheduler never produces a `Placement`, only a node
/// name that the caller turns into one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub machine_name: String,
    pub node_name: String,
}

// ── SchedulerHints ─────────────────────────────────────────────────────────────

/// Cluster-spec-level placement policy.
///
/// Deserializable so a driver can load it straight out of the custom
/// resource's spec fragment (or, for the CLI demo in `main.rs`, out of a
/// YAML file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct SchedulerHints {
    /// Percentage applied to a node's raw memory capacity before
    /// subtracting in-use memory. `0` disables the memory constraint
    /// entirely (every candidate is treated as having exactly enough
    /// memory). `>100` over-provisions; `<100` reserves headroom.
    pub memory_adjustment_pct: u32,

    /// Identical semantics to `memory_adjustment_pct`, for vCPUs.
    pub cpu_adjustment_pct: u32,

    /// When `true` (the default), the Placer breaks ties by current guest
    /// count ascending (spread). When `false`, it uses the
    /// free-resources-descending ordering instead.
    pub prefer_lower_guest_count: bool,
}

impl Default for SchedulerHints {
    fn default() -> Self {
        Self {
            memory_adjustment_pct: 100,
            cpu_adjustment_pct: 100,
            prefer_lower_guest_count: true,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_request_converts_mib_to_bytes() {
        let r = ResourceRequest::from_spec(8, 2);
        assert_eq!(r.memory_bytes, 8 * BYTES_PER_MIB);
        assert_eq!(r.v_cpus, 2);
    }

    #[test]
    fn resource_request_saturates_instead_of_overflowing() {
        let r = ResourceRequest::from_spec(u64::MAX, 1);
        assert_eq!(r.memory_bytes, u64::MAX);
    }

    #[test]
    fn scheduler_hints_default_matches_canonical_policy() {
        let hints = SchedulerHints::default();
        assert_eq!(hints.memory_adjustment_pct, 100);
        assert_eq!(hints.cpu_adjustment_pct, 100);
        assert!(hints.prefer_lower_guest_count);
    }

    #[test]
    fn scheduler_hints_deserializes_partial_yaml_with_defaults() {
        let hints: SchedulerHints = serde_yaml::from_str("memory_adjustment_pct: 150\n").unwrap();
        assert_eq!(hints.memory_adjustment_pct, 150);
        assert_eq!(hints.cpu_adjustment_pct, 100);
        assert!(hints.prefer_lower_guest_count);
    }
}
