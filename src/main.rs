// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::{info, warn};

use mesh_policy::config::Config;
use mesh_policy::orchestrator::CreateOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    mesh_policy::logging::init();

    info!("Starting mesh-policy");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: virtual_service_namespace={} policy={}/{} mtls_mode={}",
        config.virtual_service_namespace,
        config.policy_namespace,
        config.policy_name,
        config.mtls_mode
    );

    let report = mesh_policy::run(config).await?;

    // A failed create is reported in the log only; the exit status stays 0
    if let CreateOutcome::Failed(_) = report.create {
        warn!("Policy was not created, see error above");
    }
    info!("Finished ({} VirtualServices listed)", report.report_lines.len());
    Ok(())
}
