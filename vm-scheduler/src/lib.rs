/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! vm-scheduler – Proxmox VM placement scheduler.
//!
//! Decides which allow-listed hypervisor node should host a pending VM or
//! container, given each node's live memory/vCPU headroom and the cluster's
//! over/under-provisioning policy.
//!
//! ```text
//! lib.rs
//! ├── types.rs     – ResourceRequest, NodeCandidate, Placement, SchedulerHints
//! ├── capacity/    – CapacityProbe SPI + InMemoryCapacityProbe fake
//! ├── scheduler/   – SchedulerError, NodeRanker, Placer
//! └── config/      – YAML cluster-snapshot loader (CLI demo only)
//! ```

pub mod capacity;
pub mod config;
pub mod scheduler;
pub mod types;
