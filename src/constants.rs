// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Registry hostname the generated secrets authenticate against
pub const REGISTRY_HOST: &str = "ghcr.io";

/// Placeholder tokens replaced verbatim in the YAML template
pub mod placeholders {
    /// Target namespace of the secret
    pub const NAMESPACE: &str = "{NAMESPACE}";
    /// Base64-encoded Docker config JSON payload
    pub const DOCKER_CONFIG_JSON: &str = "{BASE64_ENCODED_DOCKER_CONFIG_JSON}";
    /// Name of the secret object
    pub const SECRET_NAME: &str = "{SECRET_NAME}";
}

/// Defaults for the command-line surface
pub mod defaults {
    /// Output filename prefix
    pub const OUTPUT_PREFIX: &str = "ghcr_secret";
    /// Kubernetes secret object name
    pub const SECRET_NAME: &str = "ghcr-secret";
    /// YAML template shipped alongside the tool
    pub const TEMPLATE_PATH: &str = "ghcr_secret.yaml";
}
