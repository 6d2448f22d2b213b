// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequential per-namespace manifest generation.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::apply::Applier;
use crate::config::Config;
use crate::encode;
use crate::error::{GhcrSecretError, Result};
use crate::template::{render, Substitutions};

/// Path of the manifest written for a namespace
pub fn output_path(prefix: &str, namespace: &str) -> PathBuf {
    PathBuf::from(format!("{}_{}.yaml", prefix, namespace))
}

/// Generate one manifest per namespace, in input order, optionally
/// applying each to the cluster before moving on.
///
/// The credential payload is computed once and shared by every
/// namespace. The first write or apply failure aborts the remaining
/// namespaces; files already written stay on disk.
pub fn run(config: &Config, template: &str, applier: Option<&Applier>) -> Result<Vec<PathBuf>> {
    let auth = encode::auth_payload(&config.username, &config.token);
    debug!("Base64 encoded auth: {}", auth);

    let docker_config = encode::docker_config_json(&auth)?;
    debug!("Base64 encoded docker config: {}", docker_config);

    let mut written = Vec::with_capacity(config.namespaces.len());
    for namespace in &config.namespaces {
        let manifest = render(
            template,
            &Substitutions {
                namespace,
                docker_config_json: &docker_config,
                secret_name: &config.secret_name,
            },
        );

        let path = output_path(&config.output_prefix, namespace);
        fs::write(&path, &manifest).map_err(|source| GhcrSecretError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "Secret manifest for namespace {} written to {}",
            namespace,
            path.display()
        );

        if let Some(applier) = applier {
            applier.apply(&path)?;
            info!("Applied secret for namespace {} to the cluster", namespace);
        }

        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde_yaml::Value;
    use tempfile::TempDir;

    const TEMPLATE: &str = include_str!("../ghcr_secret.yaml");

    fn make_config(dir: &TempDir, namespaces: &[&str]) -> Config {
        Config {
            username: "alice".to_string(),
            token: "tok123".to_string(),
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect(),
            output_prefix: dir
                .path()
                .join("ghcr_secret")
                .to_str()
                .unwrap()
                .to_string(),
            secret_name: "ghcr-secret".to_string(),
        }
    }

    #[test]
    fn test_run_writes_one_file_per_namespace() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev", "staging", "prod"]);

        let written = run(&config, TEMPLATE, None).unwrap();

        assert_eq!(written.len(), 3);
        for (path, ns) in written.iter().zip(["dev", "staging", "prod"]) {
            assert!(path.ends_with(format!("ghcr_secret_{}.yaml", ns)));
            assert!(path.exists());
        }
    }

    #[test]
    fn test_run_substitutes_namespace_per_file() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev", "prod"]);

        let written = run(&config, TEMPLATE, None).unwrap();

        let dev = fs::read_to_string(&written[0]).unwrap();
        let prod = fs::read_to_string(&written[1]).unwrap();
        assert!(dev.contains("namespace: dev"));
        assert!(prod.contains("namespace: prod"));
    }

    #[test]
    fn test_run_shares_payload_across_namespaces() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev", "prod"]);

        let written = run(&config, TEMPLATE, None).unwrap();

        let payload = encode::docker_config_json("YWxpY2U6dG9rMTIz").unwrap();
        for path in &written {
            let content = fs::read_to_string(path).unwrap();
            assert!(content.contains(&payload));
        }
    }

    #[test]
    fn test_run_output_parses_as_secret_manifest() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev"]);

        let written = run(&config, TEMPLATE, None).unwrap();

        let manifest: Value =
            serde_yaml::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(manifest["kind"], "Secret");
        assert_eq!(manifest["type"], "kubernetes.io/dockerconfigjson");
        assert_eq!(manifest["metadata"]["namespace"], "dev");
        assert_eq!(manifest["metadata"]["name"], "ghcr-secret");

        let data = manifest["data"][".dockerconfigjson"].as_str().unwrap();
        let decoded = String::from_utf8(STANDARD.decode(data).unwrap()).unwrap();
        let config_json: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(config_json["auths"]["ghcr.io"]["auth"], "YWxpY2U6dG9rMTIz");
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev"]);

        let first = run(&config, TEMPLATE, None).unwrap();
        let first_bytes = fs::read(&first[0]).unwrap();

        let second = run(&config, TEMPLATE, None).unwrap();
        let second_bytes = fs::read(&second[0]).unwrap();

        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_run_stops_after_write_failure() {
        let dir = TempDir::new().unwrap();
        // "missing/b" lands in a directory that does not exist
        let config = make_config(&dir, &["a", "missing/b", "c"]);

        let result = run(&config, TEMPLATE, None);

        assert!(matches!(result, Err(GhcrSecretError::Write { .. })));
        assert!(output_path(&config.output_prefix, "a").exists());
        assert!(!output_path(&config.output_prefix, "c").exists());
    }

    #[test]
    fn test_run_applies_each_manifest() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["dev", "prod"]);
        let applier = Applier::new("true");

        let written = run(&config, TEMPLATE, Some(&applier)).unwrap();

        assert_eq!(written.len(), 2);
    }

    #[test]
    fn test_run_stops_after_apply_failure() {
        let dir = TempDir::new().unwrap();
        let config = make_config(&dir, &["a", "b"]);
        let applier = Applier::new("false");

        let result = run(&config, TEMPLATE, Some(&applier));

        assert!(matches!(result, Err(GhcrSecretError::Apply { .. })));
        // the first manifest was written before its apply failed,
        // the second was never generated
        assert!(output_path(&config.output_prefix, "a").exists());
        assert!(!output_path(&config.output_prefix, "b").exists());
    }
}
