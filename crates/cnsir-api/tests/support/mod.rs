#![allow(dead_code)]

//! Stand-in delegates for façade tests.

use std::cell::RefCell;
use std::sync::Arc;

use cnsir_api::{
    ArgValue, Arguments, Delegate, FromPackageConfig, OnMissing, Operation, PackageConfig,
};
use polars::prelude::*;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StubError {
    #[error("table {0} is not available")]
    NotFound(String),
    #[error("rejected {0}")]
    Rejected(&'static str),
}

/// Knowledge artifact handed out by reference count, so identity can be
/// checked with `Arc::ptr_eq`.
#[derive(Debug, PartialEq)]
pub struct Artifact {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub operation: Operation,
    pub arguments: Arguments,
    pub table: Option<DataFrame>,
}

/// Records every call and returns canned results.
pub struct RecordingDelegate {
    pub calls: RefCell<Vec<Call>>,
    pub table: DataFrame,
    pub artifact: Arc<Artifact>,
    pub years: Vec<i32>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            table: df!("ID" => [1u64, 2], "Year" => [1395i32, 1395]).unwrap(),
            artifact: Arc::new(Artifact {
                name: "income_deciles".to_string(),
            }),
            years: Vec::new(),
        }
    }

    fn record(&self, operation: Operation, arguments: &Arguments, table: Option<&DataFrame>) {
        self.calls.borrow_mut().push(Call {
            operation,
            arguments: arguments.clone(),
            table: table.cloned(),
        });
    }

    /// The single recorded call; panics if there were zero or several.
    pub fn only_call(&self) -> Call {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one delegate call");
        calls[0].clone()
    }
}

impl Delegate for RecordingDelegate {
    type Knowledge = Arc<Artifact>;
    type Error = StubError;

    fn load_table(&self, args: &Arguments) -> Result<DataFrame, StubError> {
        self.record(Operation::LoadTable, args, None);
        Ok(self.table.clone())
    }

    fn load_knowledge(&self, args: &Arguments) -> Result<Arc<Artifact>, StubError> {
        self.record(Operation::LoadKnowledge, args, None);
        Ok(Arc::clone(&self.artifact))
    }

    fn add_attribute(&self, table: DataFrame, args: &Arguments) -> Result<DataFrame, StubError> {
        self.record(Operation::AddAttribute, args, Some(&table));
        Ok(table)
    }

    fn add_classification(
        &self,
        table: DataFrame,
        args: &Arguments,
    ) -> Result<DataFrame, StubError> {
        self.record(Operation::AddClassification, args, Some(&table));
        Ok(table)
    }

    fn setup(&self, args: &Arguments) -> Result<(), StubError> {
        self.record(Operation::Setup, args, None);
        Ok(())
    }

    fn setup_config(&self, args: &Arguments) -> Result<(), StubError> {
        self.record(Operation::SetupConfig, args, None);
        Ok(())
    }

    fn download_map(&self, args: &Arguments) -> Result<(), StubError> {
        self.record(Operation::DownloadMap, args, None);
        Ok(())
    }
}

impl FromPackageConfig for RecordingDelegate {
    fn from_package_config(config: &PackageConfig) -> Result<Self, StubError> {
        let mut delegate = Self::new();
        delegate.years = config.metadata.years.clone();
        Ok(delegate)
    }
}

/// Delegate with its own `on_missing` default and no data on disk.
pub struct PolicyDelegate {
    pub default_on_missing: OnMissing,
}

impl PolicyDelegate {
    fn effective_on_missing(&self, args: &Arguments) -> OnMissing {
        args.get("on_missing")
            .and_then(ArgValue::as_text)
            .and_then(|text| text.parse().ok())
            .unwrap_or(self.default_on_missing)
    }
}

impl Delegate for PolicyDelegate {
    type Knowledge = ();
    type Error = StubError;

    fn load_table(&self, args: &Arguments) -> Result<DataFrame, StubError> {
        let name = args
            .get("table_name")
            .and_then(ArgValue::as_text)
            .unwrap_or_default()
            .to_string();
        match self.effective_on_missing(args) {
            OnMissing::Error => Err(StubError::NotFound(name)),
            OnMissing::Download | OnMissing::Create => {
                Ok(df!("table" => [name.as_str()]).unwrap())
            }
        }
    }

    fn load_knowledge(&self, _args: &Arguments) -> Result<(), StubError> {
        Err(StubError::Rejected("load_knowledge"))
    }

    fn add_attribute(&self, _table: DataFrame, _args: &Arguments) -> Result<DataFrame, StubError> {
        Err(StubError::Rejected("add_attribute"))
    }

    fn add_classification(
        &self,
        _table: DataFrame,
        _args: &Arguments,
    ) -> Result<DataFrame, StubError> {
        Err(StubError::Rejected("add_classification"))
    }

    fn setup(&self, _args: &Arguments) -> Result<(), StubError> {
        Err(StubError::Rejected("setup"))
    }

    fn setup_config(&self, _args: &Arguments) -> Result<(), StubError> {
        Err(StubError::Rejected("setup_config"))
    }

    fn download_map(&self, _args: &Arguments) -> Result<(), StubError> {
        Err(StubError::Rejected("download_map"))
    }
}

/// Household rows with the three location code columns.
pub fn household_codes(
    urban_rural: &[Option<i64>],
    province: &[Option<i64>],
    county: &[Option<i64>],
) -> DataFrame {
    df!(
        "Urban_Rural_Code" => urban_rural,
        "Province_Code" => province,
        "County_Code" => county,
    )
    .unwrap()
}
