// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed Istio custom resources read and written by mesh-policy.

pub mod policy;
pub mod virtual_service;

pub use policy::{MtlsMode, PeerAuthenticationMethod, Policy, PolicyBuilder, PolicySpec};
pub use virtual_service::{VirtualService, VirtualServiceList, VirtualServiceSpec};

use crate::error::{MeshError, Result};
use serde::{Deserialize, Deserializer};

pub(crate) fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MeshError::InvalidResource(format!(
            "{} name must not be empty",
            kind
        )));
    }
    Ok(())
}

/// Deserialize an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
