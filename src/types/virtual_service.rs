// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::types::{null_as_default, validate_name};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Read-only projection of an Istio VirtualService.
///
/// Only the routing entry points are typed; route tables are carried as raw JSON so
/// reading an object never loses fields the projection does not model.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(
    group = "networking.istio.io",
    version = "v1alpha3",
    kind = "VirtualService",
    plural = "virtualservices"
)]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hosts: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub gateways: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub export_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<serde_json::Value>,
}

/// One page of a VirtualService list call, in server order
pub type VirtualServiceList = Vec<VirtualService>;

impl VirtualService {
    /// Build a VirtualService routing the given hosts
    pub fn with_hosts<I, S>(name: &str, hosts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        validate_name("VirtualService", name)?;
        Ok(VirtualService::new(
            name,
            VirtualServiceSpec {
                hosts: hosts.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        ))
    }

    pub fn hosts(&self) -> &[String] {
        &self.spec.hosts
    }
}
