//! Package configuration loading.
//!
//! The packaged defaults and metadata are compiled into the crate. A user
//! settings file under the root data directory may override any subset of
//! the defaults; tables are merged key by key, so an override file only
//! needs the keys it changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toml::{Table, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::metadata::Metadata;
use crate::paths::user_config_path;
use crate::settings::Defaults;

/// Packaged settings template, as copied by `setup_config`.
pub const SETTINGS_SAMPLE: &str = include_str!("../package/settings_sample.toml");

/// Packaged survey metadata.
pub const METADATA: &str = include_str!("../package/metadata.toml");

/// Defaults and metadata the delegate is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    pub defaults: Defaults,
    pub metadata: Metadata,
}

impl PackageConfig {
    /// Packaged configuration only, ignoring any user settings file.
    pub fn packaged() -> Result<Self> {
        Ok(Self {
            defaults: parse_packaged("settings_sample.toml", SETTINGS_SAMPLE)?,
            metadata: parse_packaged("metadata.toml", METADATA)?,
        })
    }

    /// Packaged configuration with the user settings file applied, if one
    /// exists under the resolved root data directory.
    pub fn load() -> Result<Self> {
        let packaged = Self::packaged()?;
        let path = user_config_path(&packaged.defaults);
        if !path.is_file() {
            debug!(path = %path.display(), "no user settings file");
            return Ok(packaged);
        }
        Self::load_from(&path)
    }

    /// Packaged configuration with the given settings file applied on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        let base = parse_table("settings_sample.toml", SETTINGS_SAMPLE)?;
        let text = fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        let overlay = text
            .parse::<Table>()
            .map_err(|err| ConfigError::toml(path, err))?;
        let merged = merge_tables(base, overlay);
        let defaults = Value::Table(merged)
            .try_into::<Defaults>()
            .map_err(|err| ConfigError::toml(path, err))?;
        debug!(
            path = %path.display(),
            root_dir = %defaults.root_dir.display(),
            "applied user settings"
        );
        Ok(Self {
            defaults,
            metadata: parse_packaged("metadata.toml", METADATA)?,
        })
    }

    pub fn root_dir(&self) -> PathBuf {
        crate::paths::root_dir(&self.defaults)
    }

    pub fn user_config_path(&self) -> PathBuf {
        user_config_path(&self.defaults)
    }
}

fn parse_table(file: &'static str, text: &str) -> Result<Table> {
    text.parse::<Table>()
        .map_err(|source| ConfigError::Packaged { file, source })
}

fn parse_packaged<T: DeserializeOwned>(file: &'static str, text: &str) -> Result<T> {
    toml::from_str(text).map_err(|source| ConfigError::Packaged { file, source })
}

/// Recursively overlays `overlay` onto `base`. Nested tables merge; any
/// other value in `overlay` replaces the one in `base`.
pub fn merge_tables(mut base: Table, overlay: Table) -> Table {
    for (key, value) in overlay {
        let merged = match (base.remove(&key), value) {
            (Some(Value::Table(existing)), Value::Table(incoming)) => {
                Value::Table(merge_tables(existing, incoming))
            }
            (_, incoming) => incoming,
        };
        base.insert(key, merged);
    }
    base
}
