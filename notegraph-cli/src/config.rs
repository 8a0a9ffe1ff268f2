use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// Pipeline configuration, loaded from `config.toml` and overridable
/// field by field from CLI flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Vault with the hand-written notes.
    pub source_dir: PathBuf,
    /// Vault the pipeline writes processed notes into.
    pub dest_dir: PathBuf,
    /// Directory scanned recursively for `.ttl` files.
    pub ttl_dir: PathBuf,
    /// Namespace for entities synthesized from note names.
    pub base_iri: String,
    /// Draft status stamped into every processed note.
    pub draft: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("content"),
            dest_dir: PathBuf::from("processed"),
            ttl_dir: PathBuf::from("triples"),
            base_iri: "https://example.org/kb/".to_string(),
            draft: false,
        }
    }
}

/// Load configuration.
///
/// An explicit `--config` path must exist; otherwise `./config.toml` is
/// used when present, and built-in defaults when not.
pub fn load(config_override: Option<&Path>) -> CliResult<Config> {
    let path = match config_override {
        Some(p) => {
            if !p.is_file() {
                return Err(CliError::Config(format!(
                    "config file does not exist: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.is_file() {
                return Ok(Config::default());
            }
            default
        }
    };

    let text = fs::read_to_string(&path)
        .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
    Ok(toml::from_str(&text)?)
}
