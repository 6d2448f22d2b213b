// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Template loading and placeholder substitution.
//!
//! The template is opaque text with three known placeholder tokens; no
//! YAML parsing or validation happens here. Substitution is literal
//! string replacement, so a token absent from the template is simply
//! left unsubstituted rather than treated as an error.

use std::fs;
use std::path::Path;

use crate::constants::placeholders;
use crate::error::{GhcrSecretError, Result};

/// Read the YAML template as opaque text
pub fn load(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GhcrSecretError::Template {
        path: path.to_path_buf(),
        source,
    })
}

/// Values substituted into the template for one namespace
#[derive(Debug)]
pub struct Substitutions<'a> {
    pub namespace: &'a str,
    pub docker_config_json: &'a str,
    pub secret_name: &'a str,
}

impl Substitutions<'_> {
    fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (placeholders::NAMESPACE, self.namespace),
            (placeholders::DOCKER_CONFIG_JSON, self.docker_config_json),
            (placeholders::SECRET_NAME, self.secret_name),
        ]
    }
}

/// Replace every occurrence of each placeholder token with its value
pub fn render(template: &str, subs: &Substitutions<'_>) -> String {
    subs.pairs()
        .iter()
        .fold(template.to_string(), |text, (token, value)| {
            text.replace(token, value)
        })
}
