// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhcrSecretError {
    #[error("Failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write manifest {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("`{command}` failed ({status}): {stderr}")]
    Apply {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to serialize Docker config: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GhcrSecretError>;
