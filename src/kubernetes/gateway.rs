// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed list/create access to the Istio custom resources

use crate::error::{MeshError, Result};
use crate::types::{Policy, VirtualService, VirtualServiceList};
use kube::{
    api::{ListParams, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// Typed facade over the control-plane API, bound to one session
#[derive(Clone)]
pub struct ResourceGateway {
    client: Client,
}

impl ResourceGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List VirtualServices in a namespace.
    ///
    /// Returns a single page in server order. A continue token in the response
    /// is not followed.
    #[instrument(skip(self, params))]
    pub async fn list_virtual_services(
        &self,
        namespace: &str,
        params: &ListParams,
    ) -> Result<VirtualServiceList> {
        let api: Api<VirtualService> = Api::namespaced(self.client.clone(), namespace);

        let list = api.list(params).await.map_err(|source| MeshError::List {
            namespace: namespace.to_string(),
            source,
        })?;

        if let Some(token) = list.metadata.continue_.as_deref().filter(|t| !t.is_empty()) {
            debug!("More VirtualServices available (continue={}), not following", token);
        }
        debug!("Listed {} VirtualServices", list.items.len());

        Ok(list.items)
    }

    /// Create a Policy in a namespace and return the server's copy
    #[instrument(skip(self, policy), fields(policy = %policy.name_any()))]
    pub async fn create_policy(&self, namespace: &str, policy: &Policy) -> Result<Policy> {
        let api: Api<Policy> = Api::namespaced(self.client.clone(), namespace);

        api.create(&PostParams::default(), policy)
            .await
            .map_err(|source| MeshError::Create {
                namespace: namespace.to_string(),
                name: policy.name_any(),
                source,
            })
    }
}
