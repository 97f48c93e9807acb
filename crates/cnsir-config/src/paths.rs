//! Root data directory resolution.

use std::path::PathBuf;

use crate::settings::Defaults;

/// Environment variable for overriding the root data directory.
pub const ROOT_DIR_ENV_VAR: &str = "CNSIR_ROOT_DIR";

/// Get the root data directory.
///
/// Resolution order:
/// 1. `CNSIR_ROOT_DIR` environment variable
/// 2. `root_dir` from the package defaults
pub fn root_dir(defaults: &Defaults) -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_DIR_ENV_VAR) {
        return PathBuf::from(root);
    }
    defaults.root_dir.clone()
}

/// Location of the user settings file that `setup_config` writes.
pub fn user_config_path(defaults: &Defaults) -> PathBuf {
    root_dir(defaults).join(&defaults.user_config)
}
