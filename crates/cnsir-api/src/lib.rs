//! CNSIR: Iran Census Sample API.
//!
//! A thin, typed façade for loading census-sample tables, fetching
//! knowledge-base artifacts and annotating tables with geographic and
//! classification attributes. The actual work is done by a [`Delegate`];
//! [`Api`] decides only what gets forwarded to it.
//!
//! # Example
//!
//! ```ignore
//! use cnsir_api::{AddAttribute, Api, Attribute, LoadTable, TableName};
//!
//! let api = Api::<MyDelegate>::from_package_config()?;
//! let table = api.load_table(&LoadTable::new(TableName::Household, 1395))?;
//! let table = api.add_attribute(table, &AddAttribute::new(Attribute::UrbanRural))?;
//! let table = api.add_attribute(
//!     table,
//!     &AddAttribute::new(Attribute::Province).with_aspects("farsi_name"),
//! )?;
//! ```

pub mod api;
pub mod delegate;
pub mod error;
pub mod location;

pub use api::Api;
pub use delegate::{Delegate, FromPackageConfig};
pub use error::{Error, Result};
pub use location::{LOCATION_CODE, add_location_key, location_keys, pack_location_key};

pub use cnsir_config::PackageConfig;
pub use cnsir_model::{
    AddAttribute, AddClassification, ArgValue, Arguments, Attribute, DownloadMap, DownloadSource,
    Form, LevelSelection, LoadKnowledge, LoadTable, MapSource, ModelError, OnMissing, Operation,
    Setup, SetupConfig, SetupMethod, TableName, TextSelection, ToArguments, Years,
};
