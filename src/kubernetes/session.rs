// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Control-plane session construction from ambient credentials

use crate::config::CredentialSource;
use crate::error::{MeshError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Build an authenticated client from the given credential source.
///
/// An explicit kubeconfig path is used as-is; otherwise the kubeconfig and
/// in-cluster environment are inferred.
#[instrument(skip(source), fields(kubeconfig = ?source.kubeconfig))]
pub async fn build_session(source: &CredentialSource) -> Result<Client> {
    let options = KubeConfigOptions {
        context: source.context.clone(),
        ..Default::default()
    };

    let client = match &source.kubeconfig {
        Some(path) => {
            let kubeconfig = read_kubeconfig(path)?;
            create_client_from_kubeconfig(kubeconfig, &options).await?
        }
        None if source.context.is_some() => {
            let config = kube::Config::from_kubeconfig(&options)
                .await
                .map_err(|e| MeshError::SessionBuild(format!("Failed to load kubeconfig: {}", e)))?;
            Client::try_from(config)
                .map_err(|e| MeshError::SessionBuild(format!("Failed to create client: {}", e)))?
        }
        None => {
            debug!("No kubeconfig given, inferring configuration");
            Client::try_default()
                .await
                .map_err(|e| MeshError::SessionBuild(format!("Failed to infer config: {}", e)))?
        }
    };

    info!("Connected to Kubernetes cluster");
    Ok(client)
}

/// Read and parse a kubeconfig file
fn read_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        MeshError::SessionBuild(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&raw).map_err(|e| {
        MeshError::SessionBuild(format!(
            "Failed to parse kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

async fn create_client_from_kubeconfig(
    kubeconfig: Kubeconfig,
    options: &KubeConfigOptions,
) -> Result<Client> {
    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, options)
        .await
        .map_err(|e| MeshError::SessionBuild(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| MeshError::SessionBuild(format!("Failed to create client: {}", e)))
}
