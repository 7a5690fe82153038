// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod logging;
pub mod orchestrator;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{build_session, ResourceGateway};
use crate::orchestrator::{Orchestrator, RunReport};

/// Build a session from the configured credentials and run the orchestrator on it.
///
/// Only setup failures (session build, VirtualService list) are returned as errors.
pub async fn run(config: Config) -> Result<RunReport> {
    let client = build_session(&config.credentials).await?;
    let gateway = ResourceGateway::new(client);
    Orchestrator::new(gateway, config).run().await
}
