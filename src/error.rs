// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to build control-plane session: {0}")]
    SessionBuild(String),

    #[error("Failed to list VirtualServices in {namespace} namespace: {source}")]
    List {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to create Policy {namespace}/{name}: {source}")]
    Create {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),
}

impl MeshError {
    /// True when the API server rejected a create because the object already exists
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            MeshError::Create {
                source: kube::Error::Api(err),
                ..
            } if err.code == 409
        )
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
