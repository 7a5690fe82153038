// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_NAMESPACE, DEFAULT_POLICY_NAME};
use crate::error::{MeshError, Result};
use crate::types::MtlsMode;
use std::env;
use std::path::PathBuf;

/// Where the control-plane credentials come from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSource {
    /// Explicit kubeconfig file; `None` falls back to kubeconfig/in-cluster inference
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: CredentialSource,
    /// Namespace whose VirtualServices are listed
    pub virtual_service_namespace: String,
    /// Namespace the Policy is created in
    pub policy_namespace: String,
    pub policy_name: String,
    pub mtls_mode: MtlsMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            credentials: CredentialSource::default(),
            virtual_service_namespace: DEFAULT_NAMESPACE.to_string(),
            policy_namespace: DEFAULT_NAMESPACE.to_string(),
            policy_name: DEFAULT_POLICY_NAME.to_string(),
            // Wire value 1 of MutualTls.Mode
            mtls_mode: MtlsMode::Permissive,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let mtls_mode = match var(vars::MTLS_MODE) {
            Some(raw) => raw.parse::<MtlsMode>().map_err(|e| {
                MeshError::Config(format!("{} is invalid: {}", vars::MTLS_MODE, e))
            })?,
            None => defaults.mtls_mode,
        };

        Ok(Config {
            credentials: CredentialSource {
                kubeconfig: var(vars::KUBECONFIG).map(PathBuf::from),
                context: var(vars::KUBE_CONTEXT),
            },
            virtual_service_namespace: var(vars::VIRTUAL_SERVICE_NAMESPACE)
                .unwrap_or(defaults.virtual_service_namespace),
            policy_namespace: var(vars::POLICY_NAMESPACE).unwrap_or(defaults.policy_namespace),
            policy_name: var(vars::POLICY_NAME).unwrap_or(defaults.policy_name),
            mtls_mode,
        })
    }
}
