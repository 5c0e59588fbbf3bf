//! # CLI Configuration
//!
//! Optional YAML file (`--config`, or `NATLAS_CONFIG`) supplying a catalog
//! path and default list parameters.
//!
//! ```yaml
//! catalog: data/nations.json
//! default_sort: population
//! default_order: desc
//! default_limit: 10
//! ```
//!
//! Catalog precedence: `--catalog` flag, then `NATLAS_CATALOG`, then the
//! config file, then the built-in dataset. The list defaults are injected as
//! query parameters only when the caller did not pass them, so they are
//! validated by the same parser as explicit flags.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use natlas_catalog::Catalog;
use natlas_core::NatlasError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Catalog JSON file. Relative paths resolve against the config file's
    /// directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub default_sort: Option<String>,
    #[serde(default)]
    pub default_order: Option<String>,
    #[serde(default)]
    pub default_limit: Option<usize>,
}

impl CliConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file: {}", path.display()))?;
        let mut config: CliConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file: {}", path.display()))?;

        if let Some(catalog) = config.catalog.take() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.catalog = Some(resolve_path(&catalog, base));
        }

        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` when given, otherwise use an empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Resolve `path` against `base` unless it is absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Where the active catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// Pick the catalog source. `flag` already folds in `NATLAS_CATALOG`.
    pub fn resolve(flag: Option<&Path>, config: &CliConfig) -> Self {
        match flag.map(Path::to_path_buf).or_else(|| config.catalog.clone()) {
            Some(path) => Self::File(path),
            None => Self::Builtin,
        }
    }

    pub fn load(&self) -> Result<Catalog, NatlasError> {
        let catalog = match self {
            Self::Builtin => Catalog::builtin()?,
            Self::File(path) => Catalog::from_path(path)?,
        };
        Ok(catalog)
    }
}

/// Everything a subcommand needs: the parsed config and the shared catalog.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: CliConfig,
    pub catalog: Arc<Catalog>,
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in dataset"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AppContext {
    pub fn new(config: CliConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Build the context from the global flags.
    pub fn load(config_path: Option<&Path>, catalog_flag: Option<&Path>) -> Result<Self> {
        let config = CliConfig::load_optional(config_path)?;
        let source = CatalogSource::resolve(catalog_flag, &config);
        let catalog = source
            .load()
            .with_context(|| format!("loading catalog: {source}"))?;
        tracing::info!(?source, nations = catalog.len(), "catalog ready");
        Ok(Self::new(config, catalog))
    }
}
