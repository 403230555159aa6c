/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Manual smoke-test driver for [`vm_scheduler::scheduler::Placer`].
//!
//! Not part of the production path — the reconciler embeds this crate as a
//! library and calls `Placer::schedule` directly. This binary is something
//! to run by hand against a YAML cluster snapshot while developing.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use vm_scheduler::config::load_cluster_config;
use vm_scheduler::scheduler::Placer;
use vm_scheduler::types::ResourceRequest;

/// Decide which hypervisor node should host a new VM, given a YAML cluster
/// snapshot.
#[derive(Parser, Debug)]
#[command(name = "vm-scheduler", version, about)]
struct Cli {
    /// Path to a cluster snapshot YAML file (see `config` module docs).
    #[arg(long)]
    config: PathBuf,

    /// Requested memory, in MiB.
    #[arg(long)]
    memory_mib: u64,

    /// Requested vCPU count.
    #[arg(long)]
    v_cpus: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cluster = load_cluster_config(&cli.config)?;

    info!(
        memory_mib = cli.memory_mib,
        v_cpus = cli.v_cpus,
        "requesting placement"
    );

    let placer = Placer::new(Arc::new(cluster.probe));
    let request = ResourceRequest::from_spec(cli.memory_mib, cli.v_cpus);

    let decision = placer
        .schedule(
            request,
            &[],
            &cluster.allowed_nodes,
            cluster.hints,
            &CancellationToken::new(),
        )
        .await?;

    println!("{decision}");
    Ok(())
}
