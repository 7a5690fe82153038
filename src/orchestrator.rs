// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequences the VirtualService listing and the Policy creation.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::ResourceGateway;
use crate::types::{PeerAuthenticationMethod, Policy, VirtualService};
use kube::api::ListParams;
use tracing::{debug, error, info, warn};

/// Result of the Policy create, which never aborts the run
#[derive(Debug)]
pub enum CreateOutcome {
    Created(Box<Policy>),
    Failed(String),
}

#[derive(Debug)]
pub struct RunReport {
    /// One line per listed VirtualService, in list order
    pub report_lines: Vec<String>,
    pub create: CreateOutcome,
}

pub struct Orchestrator {
    gateway: ResourceGateway,
    config: Config,
}

impl Orchestrator {
    pub fn new(gateway: ResourceGateway, config: Config) -> Self {
        Self { gateway, config }
    }

    /// Build the Policy that is submitted for creation
    pub fn desired_policy(&self) -> Result<Policy> {
        Policy::builder(self.config.policy_name.as_str())
            .peer(PeerAuthenticationMethod::mtls(self.config.mtls_mode))
            .build()
    }

    /// List VirtualServices, then create the Policy.
    ///
    /// A failed list is returned as an error. A failed create is logged and reported
    /// in the returned `RunReport`.
    pub async fn run(&self) -> Result<RunReport> {
        let namespace = &self.config.virtual_service_namespace;
        let virtual_services = self
            .gateway
            .list_virtual_services(namespace, &ListParams::default())
            .await?;

        let report_lines: Vec<String> = virtual_services
            .iter()
            .enumerate()
            .map(|(index, vs)| report_line(index, vs))
            .collect();
        for line in &report_lines {
            info!("{}", line);
        }
        debug!("Listed {} VirtualServices", report_lines.len());

        let policy = self.desired_policy()?;
        let create = match self
            .gateway
            .create_policy(&self.config.policy_namespace, &policy)
            .await
        {
            Ok(created) => {
                let rendered = serde_json::to_string(&created)
                    .unwrap_or_else(|_| format!("{:?}", created));
                info!("Created Policy: {}", rendered);
                CreateOutcome::Created(Box::new(created))
            }
            Err(e) if e.is_conflict() => {
                warn!("Policy already exists: {}", e);
                CreateOutcome::Failed(e.to_string())
            }
            Err(e) => {
                error!("{}", e);
                CreateOutcome::Failed(e.to_string())
            }
        };

        Ok(RunReport {
            report_lines,
            create,
        })
    }
}

/// Format one listed VirtualService, e.g. `Index: 1 VirtualService Hosts: [a b]`
pub fn report_line(index: usize, vs: &VirtualService) -> String {
    format!(
        "Index: {} VirtualService Hosts: [{}]",
        index,
        vs.hosts().join(" ")
    )
}
