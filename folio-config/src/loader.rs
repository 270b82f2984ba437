//! Locate, parse and validate carousel settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

use crate::models::CarouselConfig;

pub const CONFIG_PATH_VAR: &str = "FOLIO_CAROUSEL_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "FOLIO_CAROUSEL_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CarouselConfig,
    pub source: ConfigSource,
}

/// Resolves configuration from variables and well-known files.
///
/// Evaluation order:
/// 1) `$FOLIO_CAROUSEL_CONFIG_PATH` (TOML or JSON file),
/// 2) `$FOLIO_CAROUSEL_CONFIG_JSON` (inline JSON),
/// 3) the first default file found under the search root,
/// 4) defaults.
pub struct ConfigLoader<F> {
    lookup: F,
    search_root: PathBuf,
}

impl<F> std::fmt::Debug for ConfigLoader<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("search_root", &self.search_root)
            .finish_non_exhaustive()
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl ConfigLoader<fn(&str) -> Option<String>> {
    /// Loader backed by the process environment and the working directory.
    pub fn from_env() -> Self {
        Self {
            lookup: env_lookup,
            search_root: PathBuf::from("."),
        }
    }
}

impl<F> ConfigLoader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F, search_root: impl Into<PathBuf>) -> Self {
        Self {
            lookup,
            search_root: search_root.into(),
        }
    }

    fn var(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|raw| !raw.trim().is_empty())
    }

    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        if let Some(path_str) = self.var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path_str.trim());
            let config = load_from_file(&path)?;
            return Ok(ConfigLoad {
                config,
                source: ConfigSource::EnvPath(path),
            });
        }

        if let Some(raw) = self.var(CONFIG_JSON_VAR) {
            let config = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok(ConfigLoad {
                config,
                source: ConfigSource::EnvInline,
            });
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok(ConfigLoad {
                config,
                source: ConfigSource::File(path),
            });
        }

        Ok(ConfigLoad {
            config: CarouselConfig::default(),
            source: ConfigSource::Default,
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(path: &Path) -> anyhow::Result<CarouselConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read carousel config from {}", path.display())
    })?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|err| {
            anyhow!("invalid carousel config {}: {}", path.display(), err)
        })?,
        Some("toml") | Some("tml") => toml::from_str(&contents).map_err(|err| {
            anyhow!("invalid carousel config {}: {}", path.display(), err)
        })?,
        _ => return parse_from_str(&contents, &path.display().to_string()),
    };

    checked(config, &path.display().to_string())
}

/// Parse TOML first, then JSON, and validate.
pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<CarouselConfig> {
    let config = toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse carousel config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })?;
    checked(config, origin)
}

pub fn parse_json(raw: &str) -> anyhow::Result<CarouselConfig> {
    let config = serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid carousel config json: {err}"))?;
    checked(config, "inline json")
}

fn checked(config: CarouselConfig, origin: &str) -> anyhow::Result<CarouselConfig> {
    config
        .validate()
        .with_context(|| format!("carousel config {origin} failed validation"))?;
    log::debug!("loaded carousel config from {origin}");
    Ok(config)
}
