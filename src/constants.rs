// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Istio API groups and versions targeted by mesh-policy
pub mod api {
    pub const NETWORKING_GROUP: &str = "networking.istio.io";
    pub const NETWORKING_VERSION: &str = "v1alpha3";
    pub const AUTHENTICATION_GROUP: &str = "authentication.istio.io";
    pub const AUTHENTICATION_VERSION: &str = "v1alpha1";
}

/// Environment variables read at startup
pub mod env {
    /// Path to a kubeconfig file; empty or unset falls back to inference
    pub const KUBECONFIG: &str = "KUBECONFIG";
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
    pub const VIRTUAL_SERVICE_NAMESPACE: &str = "VIRTUAL_SERVICE_NAMESPACE";
    pub const POLICY_NAMESPACE: &str = "POLICY_NAMESPACE";
    pub const POLICY_NAME: &str = "POLICY_NAME";
    pub const MTLS_MODE: &str = "MTLS_MODE";
}

/// Namespace used for both the list and the create when none is configured
pub const DEFAULT_NAMESPACE: &str = "default";

/// Name of the mesh-wide Policy object
pub const DEFAULT_POLICY_NAME: &str = "default";
