/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The CapacityProbe SPI — the single capability the [`Placer`](crate::scheduler::Placer)
//! depends on from the hypervisor side.
//!
//! # Design decision vs. a full hypervisor client
//! The real Proxmox REST client (auth, retries, the rest of the API surface)
//! is an external collaborator and out of scope for this crate. The Placer
//! is expressed against a single-method, object-safe, `Send + Sync` trait so
//! it can be driven by a deterministic in-memory fake in tests (see
//! [`fake::InMemoryCapacityProbe`]) without inheriting from — or even
//! knowing about — the full client.

pub mod fake;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// A node's reservable capacity as of one probe call.
///
/// Both fields reflect a single consistent snapshot — they are never
/// assembled from separate memory and CPU queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservableCapacity {
    pub memory_bytes: u64,
    pub v_cpus: u32,
}

/// Failures a [`CapacityProbe`] implementation can surface.
///
/// The scheduler does not interpret these — it propagates them verbatim so
/// the caller can classify retriability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("node '{node}' not found")]
    NodeNotFound { node: String },

    #[error("not authorized to query node '{node}'")]
    NotAuthorized { node: String },

    #[error("transport error querying node '{node}': {message}")]
    Transport { node: String, message: String },

    #[error("scheduling call was cancelled")]
    Cancelled,
}

/// Capability the [`Placer`](crate::scheduler::Placer) depends on: report
/// how much memory and vCPU headroom a node has left for a new guest.
///
/// # Semantics implementers MUST guarantee
/// * `reservableMemory = max(0, floor(totalMem × memory_adjustment_pct / 100) − usedMem)`,
///   where `usedMem` is the sum of `maxmem` over every non-template,
///   non-deleted guest (QEMU and container) on the node. vCPU accounting is
///   analogous.
/// * `memory_adjustment_pct == 0` (resp. `cpu_adjustment_pct == 0`) is a
///   sentinel: implementations MAY return any value for that dimension —
///   the Placer substitutes the request's own value before filtering, so
///   the constraint trivially holds regardless of what the probe reports.
/// * Safe for concurrent calls from independent callers — the Placer may
///   probe several nodes at once.
#[async_trait]
pub trait CapacityProbe: Send + Sync {
    async fn reservable_resources(
        &self,
        node_name: &str,
        memory_adjustment_pct: u32,
        cpu_adjustment_pct: u32,
        cancel: &CancellationToken,
    ) -> Result<ReservableCapacity, ProbeError>;
}
