// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Applying generated manifests through the external cluster CLI.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{GhcrSecretError, Result};

/// Default cluster CLI invoked per generated manifest
pub const DEFAULT_COMMAND: &str = "kubectl";

/// Runs the external cluster CLI against generated manifest files.
///
/// The command name is a field so tests can substitute a stub binary;
/// a non-zero exit status is fatal and carries the captured stderr.
#[derive(Debug, Clone)]
pub struct Applier {
    command: String,
}

impl Default for Applier {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl Applier {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Run `<command> apply -f <path>` and wait for it to finish
    pub fn apply(&self, manifest: &Path) -> Result<()> {
        debug!("Running {} apply -f {}", self.command, manifest.display());

        let output = Command::new(&self.command)
            .arg("apply")
            .arg("-f")
            .arg(manifest)
            .output()
            .map_err(|source| GhcrSecretError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GhcrSecretError::Apply {
                command: format!("{} apply -f {}", self.command, manifest.display()),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(())
    }
}
