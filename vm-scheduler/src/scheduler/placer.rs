/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The top-level scheduling entry point.
//!
//! [`Placer::schedule`] fans [`CapacityProbe`] calls out over the
//! allow-listed nodes, filters out nodes that cannot satisfy the request,
//! hands the survivors to [`NodeRanker`], applies the
//! `prefer_lower_guest_count` policy switch, and returns the chosen node
//! name or a typed [`SchedulerError`].
//!
//! Nodes are probed concurrently and merged back in allow-list order via
//! `join_all`, so the decision never depends on probe completion order.
//! Cancellation is propagated into every probe call through a
//! `CancellationToken`; there is no locking and no retry inside a single
//! `schedule()` call.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::capacity::CapacityProbe;
use crate::scheduler::error::SchedulerError;
use crate::scheduler::ranker::NodeRanker;
use crate::types::{NodeCandidate, Placement, ResourceRequest, SchedulerHints};

/// The VM placement scheduler.
///
/// Holds a shared reference to the capacity probe. All per-call state
/// (candidate list, both orderings, the decision) is allocated inside
/// `schedule()` and dropped at the end of the call — concurrent callers
/// share no mutable state beyond the probe itself, which must tolerate
/// concurrent calls from independent callers.
pub struct Placer {
    probe: Arc<dyn CapacityProbe>,
}

impl Placer {
    pub fn new(probe: Arc<dyn CapacityProbe>) -> Self {
        Self { probe }
    }

    /// Decide which allow-listed node should host a new guest with the
    /// given `request`.
    ///
    /// `placements` MUST already be filtered to the machine's own role
    /// (control-plane vs. worker) by the caller — the Placer has no notion
    /// of role, it only tallies by node name.
    ///
    /// # Errors
    /// * [`SchedulerError::ConfigurationError`] if `allowed_nodes` is empty.
    /// * [`SchedulerError::Probe`] on the first `CapacityProbe` failure,
    ///   by allow-list order — no partial-view decision is ever returned.
    /// * [`SchedulerError::InsufficientResources`] if no candidate survives
    ///   the feasibility filter.
    pub async fn schedule(
        &self,
        request: ResourceRequest,
        placements: &[Placement],
        allowed_nodes: &[String],
        hints: SchedulerHints,
        cancel: &CancellationToken,
    ) -> Result<String, SchedulerError> {
        // ── Preconditions ─────────────────────────────────────────────────────
        if allowed_nodes.is_empty() {
            return Err(SchedulerError::ConfigurationError(
                "allowedNodes is empty — no candidate node to schedule on".to_string(),
            ));
        }

        info!(
            request = %request,
            node_count = allowed_nodes.len(),
            prefer_lower_guest_count = hints.prefer_lower_guest_count,
            "=== Placer::schedule() ==="
        );

        // ── Probe fan-out, deterministically merged by allow-list index ──────
        let probed = join_all(allowed_nodes.iter().map(|name| {
            let probe = Arc::clone(&self.probe);
            let cancel = cancel.clone();
            async move {
                probe
                    .reservable_resources(
                        name,
                        hints.memory_adjustment_pct,
                        hints.cpu_adjustment_pct,
                        &cancel,
                    )
                    .await
                    .map(|cap| (name.clone(), cap))
            }
        }))
        .await;

        let mut candidates = Vec::with_capacity(allowed_nodes.len());
        for result in probed {
            let (name, capacity) = result?;

            // ── Sentinel-zero override ───────────────────────────────────────
            let free_memory_bytes = if hints.memory_adjustment_pct == 0 {
                request.memory_bytes
            } else {
                capacity.memory_bytes
            };
            let free_vcpus = if hints.cpu_adjustment_pct == 0 {
                request.v_cpus
            } else {
                capacity.v_cpus
            };

            candidates.push(NodeCandidate {
                name,
                free_memory_bytes,
                free_vcpus,
                scheduled_count: 0,
            });
        }

        // ── Scheduled-count tally ─────────────────────────────────────────────
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for placement in placements {
            *counts.entry(placement.node_name.as_str()).or_insert(0) += 1;
        }
        for candidate in &mut candidates {
            candidate.scheduled_count = counts.get(candidate.name.as_str()).copied().unwrap_or(0);
        }

        // ── Feasibility filter ────────────────────────────────────────────────
        let feasible: Vec<NodeCandidate> = candidates
            .into_iter()
            .filter(|c| {
                c.free_memory_bytes >= request.memory_bytes && c.free_vcpus >= request.v_cpus
            })
            .collect();

        if feasible.is_empty() {
            return Err(SchedulerError::InsufficientResources {
                requested_memory_bytes: request.memory_bytes,
                requested_vcpus: request.v_cpus,
            });
        }

        // ── Both orderings, policy switch ─────────────────────────────────────
        let default_choice = NodeRanker::by_resources(&feasible)
            .into_iter()
            .next()
            .expect("feasible is non-empty");
        let spread_choice = NodeRanker::by_guest_count(&feasible)
            .into_iter()
            .next()
            .expect("feasible is non-empty");

        let chosen = if hints.prefer_lower_guest_count {
            spread_choice
        } else {
            default_choice
        };

        info!(
            chosen_node = %chosen.name,
            feasible_count = feasible.len(),
            "=== Placer decision ==="
        );

        Ok(chosen.name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
