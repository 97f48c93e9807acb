//! Typed parameter vocabulary for the CNSIR census sample API.
//!
//! Every entry point takes a parameters object from [`params`]. Projecting
//! it with [`ToArguments::to_arguments`] yields the [`Arguments`] that are
//! forwarded to the delegate: required values plus only the optional values
//! the caller set.

pub mod arguments;
pub mod enums;
pub mod error;
pub mod params;
pub mod selection;
pub mod years;

pub use arguments::{ArgValue, Arguments, Operation, ToArguments};
pub use enums::{Attribute, DownloadSource, Form, MapSource, OnMissing, SetupMethod, TableName};
pub use error::{ModelError, Result};
pub use params::{
    AddAttribute, AddClassification, DownloadMap, LoadKnowledge, LoadTable, Setup, SetupConfig,
};
pub use selection::{LevelSelection, TextSelection};
pub use years::Years;
