// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghcr_secret::apply::Applier;
use ghcr_secret::config::Config;
use ghcr_secret::constants::defaults;
use ghcr_secret::{generate, template};

/// Generate Kubernetes Secret manifests for GHCR authentication
#[derive(Parser, Debug)]
#[command(name = "ghcr-secret", version, about, long_about = None)]
struct Cli {
    /// GitHub username
    #[arg(short = 'u', long)]
    user: String,

    /// GitHub token
    #[arg(short = 't', long)]
    token: String,

    /// Kubernetes namespace(s)
    #[arg(short = 'n', long = "namespace", required = true, num_args = 1..)]
    namespaces: Vec<String>,

    /// Output file prefix
    #[arg(short = 'o', long, default_value = defaults::OUTPUT_PREFIX)]
    output: String,

    /// Name of the Kubernetes secret
    #[arg(long, default_value = defaults::SECRET_NAME)]
    secret_name: String,

    /// Path to the YAML template
    #[arg(long, default_value = defaults::TEMPLATE_PATH)]
    template: PathBuf,

    /// Apply the secrets to Kubernetes using kubectl
    #[arg(long)]
    apply: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // -v surfaces the intermediate encoded values logged at debug level
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let template = template::load(&cli.template)?;

    let config = Config {
        username: cli.user,
        token: cli.token,
        namespaces: cli.namespaces,
        output_prefix: cli.output,
        secret_name: cli.secret_name,
    };

    let applier = cli.apply.then(Applier::default);
    generate::run(&config, &template, applier.as_ref())?;

    Ok(())
}
