#![deny(unsafe_code)]

//! Package configuration for the CNSIR census sample API.
//!
//! The delegate is built once from a [`PackageConfig`]: the packaged
//! [`Defaults`] (optionally overridden by the user settings file) and the
//! survey [`Metadata`].

pub mod error;
pub mod metadata;
pub mod package;
pub mod paths;
pub mod settings;

pub use crate::error::{ConfigError, Result};
pub use crate::metadata::{AttributeMetadata, ClassificationMetadata, Metadata};
pub use crate::package::{METADATA, PackageConfig, SETTINGS_SAMPLE, merge_tables};
pub use crate::paths::{ROOT_DIR_ENV_VAR, root_dir, user_config_path};
pub use crate::settings::{Defaults, Folders, OnlineDirs};
