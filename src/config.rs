// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Resolved configuration for a single generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Registry username
    pub username: String,
    /// Registry access token
    pub token: String,
    /// Namespaces to generate a manifest for, processed in this order
    pub namespaces: Vec<String>,
    /// Output filename prefix; manifests land at `{prefix}_{namespace}.yaml`
    pub output_prefix: String,
    /// Name of the secret object embedded in every manifest
    pub secret_name: String,
}
