#![deny(unsafe_code)]

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Package-level defaults handed to the delegate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub package_name: String,
    pub root_dir: PathBuf,
    /// File name of the packaged settings template.
    pub settings_sample: String,
    /// User settings path, relative to the root data directory.
    pub user_config: PathBuf,
    pub folders: Folders,
    pub online_dirs: OnlineDirs,
}

/// Sub-directories of the root data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folders {
    pub original: PathBuf,
    pub unpacked: PathBuf,
    pub cleaned: PathBuf,
    pub maps: PathBuf,
    pub knowledge: PathBuf,
}

/// Base URLs the delegate downloads from, one per download source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineDirs {
    pub original: String,
    pub mirror: String,
}
