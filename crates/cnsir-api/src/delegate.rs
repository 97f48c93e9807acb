//! The seam between the façade and the library doing the real work.

use cnsir_config::PackageConfig;
use cnsir_model::Arguments;
use polars::prelude::DataFrame;

/// Performs all data access for the API: download, caching, normalization,
/// year resolution and classification decoding.
///
/// Each method receives only the arguments the caller actually set, plus
/// required ones. Anything missing must be filled in from the delegate's
/// own defaults.
pub trait Delegate {
    /// Artifact type served from the knowledge base.
    type Knowledge;
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_table(&self, args: &Arguments) -> Result<DataFrame, Self::Error>;

    fn load_knowledge(&self, args: &Arguments) -> Result<Self::Knowledge, Self::Error>;

    fn add_attribute(&self, table: DataFrame, args: &Arguments) -> Result<DataFrame, Self::Error>;

    fn add_classification(
        &self,
        table: DataFrame,
        args: &Arguments,
    ) -> Result<DataFrame, Self::Error>;

    fn setup(&self, args: &Arguments) -> Result<(), Self::Error>;

    /// Copies the packaged settings template into the user config path.
    fn setup_config(&self, args: &Arguments) -> Result<(), Self::Error>;

    fn download_map(&self, args: &Arguments) -> Result<(), Self::Error>;
}

/// A delegate that can be built from the package configuration.
pub trait FromPackageConfig: Delegate + Sized {
    fn from_package_config(config: &PackageConfig) -> Result<Self, Self::Error>;
}
