// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential encoding into the Docker config JSON payload.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::constants::REGISTRY_HOST;
use crate::error::Result;

/// A single registry entry in the Docker config `auths` map
#[derive(Debug, Serialize)]
struct RegistryAuth {
    auth: String,
}

/// The Docker config shape consumed by kubelet for image pulls.
/// A `BTreeMap` keeps key order stable so repeated invocations with
/// identical credentials produce byte-identical payloads.
#[derive(Debug, Serialize)]
struct DockerConfig {
    auths: BTreeMap<&'static str, RegistryAuth>,
}

/// Base64-encode `username:token` as a registry Basic-Auth payload
pub fn auth_payload(username: &str, token: &str) -> String {
    STANDARD.encode(format!("{}:{}", username, token))
}

/// Build the base64-encoded Docker config JSON embedded in the secret's
/// `.dockerconfigjson` field
pub fn docker_config_json(auth_payload: &str) -> Result<String> {
    let config = DockerConfig {
        auths: BTreeMap::from([(
            REGISTRY_HOST,
            RegistryAuth {
                auth: auth_payload.to_string(),
            },
        )]),
    };

    let json = serde_json::to_string_pretty(&config)?;
    Ok(STANDARD.encode(json))
}
