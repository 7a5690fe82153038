// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes session construction and typed resource access.

pub mod gateway;
pub mod session;

pub use gateway::ResourceGateway;
pub use session::build_session;
