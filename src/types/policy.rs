// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{MeshError, Result};
use crate::types::{null_as_default, validate_name};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Istio authentication Policy (authentication.istio.io/v1alpha1)
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "authentication.istio.io",
    version = "v1alpha1",
    kind = "Policy",
    plural = "policies"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct PolicySpec {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub targets: Vec<TargetSelector>,
    /// Evaluated in order by the server
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub peers: Vec<PeerAuthenticationMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_is_optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_binding: Option<PrincipalBinding>,
}

/// Workload a Policy applies to; an empty target list means the whole namespace
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct TargetSelector {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ports: Vec<PortSelector>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PortSelector {
    Number(u32),
    Name(String),
}

/// A single peer authentication method. Exactly one case is set per entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PeerAuthenticationMethod {
    Mtls(MutualTls),
    Jwt(Jwt),
}

impl PeerAuthenticationMethod {
    pub fn mtls(mode: MtlsMode) -> Self {
        PeerAuthenticationMethod::Mtls(MutualTls {
            mode,
            allow_tls: None,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MutualTls {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: MtlsMode,
    /// Deprecated upstream in favour of `mode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_tls: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Jwt {
    pub issuer: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub audiences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,
}

/// Mutual TLS mode, numbered as in the upstream `MutualTls.Mode` enum
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MtlsMode {
    /// Only mutual TLS connections are accepted
    #[default]
    Strict,
    /// Both plaintext and mutual TLS connections are accepted
    Permissive,
}

impl MtlsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MtlsMode::Strict => "STRICT",
            MtlsMode::Permissive => "PERMISSIVE",
        }
    }
}

impl TryFrom<i32> for MtlsMode {
    type Error = MeshError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(MtlsMode::Strict),
            1 => Ok(MtlsMode::Permissive),
            other => Err(MeshError::InvalidResource(format!(
                "unknown mutual TLS mode {}",
                other
            ))),
        }
    }
}

impl FromStr for MtlsMode {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(n) = s.trim().parse::<i32>() {
            return MtlsMode::try_from(n);
        }
        match s.trim().to_ascii_uppercase().as_str() {
            "STRICT" => Ok(MtlsMode::Strict),
            "PERMISSIVE" => Ok(MtlsMode::Permissive),
            other => Err(MeshError::InvalidResource(format!(
                "unknown mutual TLS mode {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for MtlsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalBinding {
    UsePeer,
    UseOrigin,
}

impl Policy {
    pub fn builder(name: impl Into<String>) -> PolicyBuilder {
        PolicyBuilder {
            name: name.into(),
            spec: PolicySpec::default(),
        }
    }

    /// The first mutual TLS peer method, if any
    pub fn mtls(&self) -> Option<&MutualTls> {
        self.spec.peers.iter().find_map(|peer| match peer {
            PeerAuthenticationMethod::Mtls(mtls) => Some(mtls),
            PeerAuthenticationMethod::Jwt(_) => None,
        })
    }
}

/// Builds a Policy with a validated name.
/// The namespace is not part of the object; it is given at create time.
#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    name: String,
    spec: PolicySpec,
}

impl PolicyBuilder {
    pub fn peer(mut self, peer: PeerAuthenticationMethod) -> Self {
        self.spec.peers.push(peer);
        self
    }

    pub fn target(mut self, target: TargetSelector) -> Self {
        self.spec.targets.push(target);
        self
    }

    pub fn peer_is_optional(mut self, optional: bool) -> Self {
        self.spec.peer_is_optional = Some(optional);
        self
    }

    pub fn principal_binding(mut self, binding: PrincipalBinding) -> Self {
        self.spec.principal_binding = Some(binding);
        self
    }

    pub fn build(self) -> Result<Policy> {
        validate_name("Policy", &self.name)?;
        Ok(Policy::new(&self.name, self.spec))
    }
}
