/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! VM placement scheduling: error types, pure ranking, and the `Placer`
//! that ties them together over a [`CapacityProbe`](crate::capacity::CapacityProbe).
//!
//! ```text
//! scheduler/
//! ├── error.rs   – SchedulerError (top-level failure)
//! ├── ranker.rs  – NodeRanker (pure, total orderings)
//! └── placer.rs  – Placer (probe fan-out, feasibility filter, policy switch)
//! ```

pub mod error;
pub mod placer;
pub mod ranker;

pub use error::SchedulerError;
pub use placer::Placer;
pub use ranker::NodeRanker;
