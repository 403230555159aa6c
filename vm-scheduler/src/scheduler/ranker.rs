/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure node ranking.
//!
//! [`NodeRanker`] takes the list of [`NodeCandidate`]s that have already
//! passed the Placer's feasibility filter and exposes the two total,
//! deterministic orderings the Placer chooses between. It does not choose
//! between them itself — that policy switch lives in
//! [`Placer`](super::Placer).

use crate::types::NodeCandidate;

/// Stateless ranking over a feasibility-filtered candidate list.
pub struct NodeRanker;

impl NodeRanker {
    /// Order candidates by free resources, descending: `free_memory_bytes`
    /// desc, then `free_vcpus` desc, then `scheduled_count` asc.
    pub fn by_resources(candidates: &[NodeCandidate]) -> Vec<NodeCandidate> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| {
            b.free_memory_bytes
                .cmp(&a.free_memory_bytes)
                .then_with(|| b.free_vcpus.cmp(&a.free_vcpus))
                .then_with(|| a.scheduled_count.cmp(&b.scheduled_count))
        });
        sorted
    }

    /// Order candidates by current guest count, ascending: `scheduled_count`
    /// asc, then `free_memory_bytes` desc, then `name` asc. The name
    /// tie-break guarantees a total order independent of input ordering,
    /// even when two nodes are identical in every measured dimension.
    pub fn by_guest_count(candidates: &[NodeCandidate]) -> Vec<NodeCandidate> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|a, b| {
            a.scheduled_count
                .cmp(&b.scheduled_count)
                .then_with(|| b.free_memory_bytes.cmp(&a.free_memory_bytes))
                .then_with(|| a.name.cmp(&b.name))
        });
        sorted
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
