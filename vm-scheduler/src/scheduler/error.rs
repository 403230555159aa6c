/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the VM placement scheduler.
//!
//! Two failure layers:
//!
//! * [`ProbeError`](crate::capacity::ProbeError) — why a single node could
//!   not be queried. Propagated unchanged.
//! * [`SchedulerError`] — top-level failure returned from
//!   [`Placer::schedule()`](super::Placer::schedule).
//!
//! **Do not** collapse these into a single `anyhow::Error` string in the
//! placement path — the caller needs to match on `InsufficientResources`
//! to decide whether to requeue, so the structured variants are load
//! bearing.

use thiserror::Error;

use crate::capacity::ProbeError;

/// Top-level error type returned by [`Placer::schedule()`](super::Placer::schedule).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No candidate node passed the feasibility filter. Carries the
    /// original request (not per-node residuals — the snapshot is stale
    /// the instant it's read) so the caller can render a diagnostic.
    #[error("insufficient resources for request ({requested_memory_bytes} bytes / {requested_vcpus} vCPU)")]
    InsufficientResources {
        requested_memory_bytes: u64,
        requested_vcpus: u32,
    },

    /// `allowed_nodes` was empty, or the request itself was invalid
    /// (negative values are unrepresentable in the unsigned Rust types, so
    /// this variant is reserved for the empty-allow-list case and for
    /// driver-level misconfiguration the caller chooses to surface this
    /// way).
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// A [`CapacityProbe`](crate::capacity::CapacityProbe) call failed.
    /// Propagated verbatim — the scheduler does not interpret probe
    /// failures, it aborts on the first one (no partial-view decisions).
    #[error("capacity probe failed: {0}")]
    Probe(#[from] ProbeError),
}
