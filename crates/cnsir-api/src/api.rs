//! The public façade.
//!
//! Every entry point projects its parameters to the arguments the caller
//! actually set and makes exactly one delegate call. Results come back
//! untouched and delegate errors pass through unchanged.

use cnsir_config::PackageConfig;
use cnsir_model::{
    AddAttribute, AddClassification, Arguments, DownloadMap, LoadKnowledge, LoadTable, Setup,
    SetupConfig, ToArguments,
};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::delegate::{Delegate, FromPackageConfig};
use crate::error::{Error, Result};
use crate::location::add_location_key;

/// Application context owning the single delegate instance.
///
/// Build it once at program start and pass it by reference to whatever
/// needs census data.
#[derive(Debug)]
pub struct Api<D> {
    delegate: D,
}

impl<D: Delegate> Api<D> {
    pub fn new(delegate: D) -> Self {
        Self { delegate }
    }

    /// Builds the delegate from the packaged configuration with the user
    /// settings file applied.
    pub fn from_package_config() -> Result<Self, D::Error>
    where
        D: FromPackageConfig,
    {
        let config = PackageConfig::load()?;
        Self::with_config(&config)
    }

    pub fn with_config(config: &PackageConfig) -> Result<Self, D::Error>
    where
        D: FromPackageConfig,
    {
        let delegate = D::from_package_config(config).map_err(Error::Delegate)?;
        Ok(Self::new(delegate))
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn into_delegate(self) -> D {
        self.delegate
    }

    /// Load a survey table for the given year(s).
    ///
    /// Fails with the delegate's not-found error when the data is missing
    /// and `on_missing` is `error`.
    ///
    /// ```ignore
    /// let table = api.load_table(&LoadTable::new(TableName::Household, 1395))?;
    /// ```
    pub fn load_table(&self, params: &LoadTable) -> Result<DataFrame, D::Error> {
        let args = forward(params);
        self.delegate.load_table(&args).map_err(Error::Delegate)
    }

    /// Retrieve a precomputed table, graph or other artifact from the
    /// knowledge base.
    pub fn load_knowledge(&self, params: &LoadKnowledge) -> Result<D::Knowledge, D::Error> {
        let args = forward(params);
        self.delegate.load_knowledge(&args).map_err(Error::Delegate)
    }

    /// Add geographic attribute columns (province, county, urban/rural).
    ///
    /// Without `id_col`, the rows are matched on a location key built from
    /// `Urban_Rural_Code`, `Province_Code` and `County_Code`; see
    /// [`crate::location`].
    ///
    /// ```ignore
    /// let table = api.add_attribute(table, &AddAttribute::new(Attribute::Province)
    ///     .with_aspects("farsi_name"))?;
    /// ```
    pub fn add_attribute(
        &self,
        mut table: DataFrame,
        params: &AddAttribute,
    ) -> Result<DataFrame, D::Error> {
        let args = if params.id_col.is_some() {
            forward(params)
        } else {
            let id_col = add_location_key(&mut table).map_err(Error::LocationKey)?;
            forward(&params.clone().with_id_col(id_col))
        };
        self.delegate
            .add_attribute(table, &args)
            .map_err(Error::Delegate)
    }

    /// Decode ISIC industry or ISCO occupation codes into descriptive
    /// columns at the requested hierarchy levels.
    pub fn add_classification(
        &self,
        table: DataFrame,
        params: &AddClassification,
    ) -> Result<DataFrame, D::Error> {
        let args = forward(params);
        self.delegate
            .add_classification(table, &args)
            .map_err(Error::Delegate)
    }

    /// Download or generate the data needed for the given years.
    pub fn setup(&self, params: &Setup) -> Result<(), D::Error> {
        let args = forward(params);
        self.delegate.setup(&args).map_err(Error::Delegate)
    }

    /// Copy the packaged settings file into the user config directory.
    pub fn setup_config(&self, params: &SetupConfig) -> Result<(), D::Error> {
        let args = forward(params);
        self.delegate.setup_config(&args).map_err(Error::Delegate)
    }

    pub fn download_map(&self, params: &DownloadMap) -> Result<(), D::Error> {
        let args = forward(params);
        self.delegate.download_map(&args).map_err(Error::Delegate)
    }
}

fn forward<P: ToArguments>(params: &P) -> Arguments {
    let operation = P::OPERATION;
    let args = params.to_arguments();
    debug!(%operation, arguments = %args, "forwarding to delegate");
    args
}
