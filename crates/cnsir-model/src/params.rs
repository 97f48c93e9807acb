//! Parameter objects for each API entry point.
//!
//! Required inputs are plain fields. Optional inputs are `Option`s that
//! start out `None`; the defaults quoted in the docs below are applied by
//! the delegate, never here.

use serde::{Deserialize, Serialize};

use crate::arguments::{Arguments, Operation, ToArguments};
use crate::enums::{Attribute, DownloadSource, Form, MapSource, OnMissing, SetupMethod, TableName};
use crate::selection::{LevelSelection, TextSelection};
use crate::years::Years;

/// Parameters for `load_table`.
///
/// Original survey tables come in three [`Form`]s; package tables exist
/// only in normalized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadTable {
    pub table_name: TableName,
    pub years: Years,
    /// Delegate default: normalized.
    pub form: Option<Form>,
    /// Delegate default: download.
    pub on_missing: Option<OnMissing>,
    /// Re-download even if the table exists. Delegate default: false.
    pub redownload: Option<bool>,
    /// Keep newly downloaded data on disk. Delegate default: true.
    pub save_downloaded: Option<bool>,
    /// Rebuild even if the table exists. Delegate default: false.
    pub recreate: Option<bool>,
    /// Keep newly created data on disk. Delegate default: true.
    pub save_created: Option<bool>,
}

impl LoadTable {
    pub fn new(table_name: TableName, years: impl Into<Years>) -> Self {
        Self {
            table_name,
            years: years.into(),
            form: None,
            on_missing: None,
            redownload: None,
            save_downloaded: None,
            recreate: None,
            save_created: None,
        }
    }

    pub fn with_form(mut self, form: Form) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_on_missing(mut self, on_missing: OnMissing) -> Self {
        self.on_missing = Some(on_missing);
        self
    }

    pub fn with_redownload(mut self, redownload: bool) -> Self {
        self.redownload = Some(redownload);
        self
    }

    pub fn with_save_downloaded(mut self, save_downloaded: bool) -> Self {
        self.save_downloaded = Some(save_downloaded);
        self
    }

    pub fn with_recreate(mut self, recreate: bool) -> Self {
        self.recreate = Some(recreate);
        self
    }

    pub fn with_save_created(mut self, save_created: bool) -> Self {
        self.save_created = Some(save_created);
        self
    }
}

impl ToArguments for LoadTable {
    const OPERATION: Operation = Operation::LoadTable;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("table_name", self.table_name)
            .required("years", self.years.clone())
            .optional("form", self.form)
            .optional("on_missing", self.on_missing)
            .optional("redownload", self.redownload)
            .optional("save_downloaded", self.save_downloaded)
            .optional("recreate", self.recreate)
            .optional("save_created", self.save_created)
    }
}

/// Parameters for `load_knowledge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadKnowledge {
    pub name: String,
    /// Delegate default: last.
    pub years: Option<Years>,
}

impl LoadKnowledge {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            years: None,
        }
    }

    pub fn with_years(mut self, years: impl Into<Years>) -> Self {
        self.years = Some(years.into());
        self
    }
}

impl ToArguments for LoadKnowledge {
    const OPERATION: Operation = Operation::LoadKnowledge;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("name", self.name.as_str())
            .optional("years", self.years.clone())
    }
}

/// Parameters for `add_attribute`. The table itself is passed separately.
///
/// When `id_col` is left unset the façade derives a location key column and
/// fills `id_col` with its name before forwarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAttribute {
    pub name: Attribute,
    /// Which aspects to add, e.g. `name`, `farsi_name`. Delegate default: name.
    pub aspects: Option<TextSelection>,
    pub column_names: Option<TextSelection>,
    /// Delegate default: ID.
    pub id_col: Option<String>,
    /// Delegate default: Year.
    pub year_col: Option<String>,
}

impl AddAttribute {
    pub fn new(name: Attribute) -> Self {
        Self {
            name,
            aspects: None,
            column_names: None,
            id_col: None,
            year_col: None,
        }
    }

    pub fn with_aspects(mut self, aspects: impl Into<TextSelection>) -> Self {
        self.aspects = Some(aspects.into());
        self
    }

    pub fn with_column_names(mut self, column_names: impl Into<TextSelection>) -> Self {
        self.column_names = Some(column_names.into());
        self
    }

    pub fn with_id_col(mut self, id_col: impl Into<String>) -> Self {
        self.id_col = Some(id_col.into());
        self
    }

    pub fn with_year_col(mut self, year_col: impl Into<String>) -> Self {
        self.year_col = Some(year_col.into());
        self
    }
}

impl ToArguments for AddAttribute {
    const OPERATION: Operation = Operation::AddAttribute;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("name", self.name)
            .optional("aspects", self.aspects.clone())
            .optional("column_names", self.column_names.clone())
            .optional("id_col", self.id_col.clone())
            .optional("year_col", self.year_col.clone())
    }
}

/// Parameters for `add_classification`: decode ISIC industry or ISCO
/// occupation codes held in `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddClassification {
    pub target: String,
    /// e.g. `label`, `farsi_label`.
    pub aspects: Option<TextSelection>,
    /// Hierarchy levels to include.
    pub levels: Option<LevelSelection>,
    pub column_names: Option<TextSelection>,
    /// Used to resolve annual classification changes. Delegate default: Year.
    pub year_col: Option<String>,
}

impl AddClassification {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            aspects: None,
            levels: None,
            column_names: None,
            year_col: None,
        }
    }

    pub fn with_aspects(mut self, aspects: impl Into<TextSelection>) -> Self {
        self.aspects = Some(aspects.into());
        self
    }

    pub fn with_levels(mut self, levels: impl Into<LevelSelection>) -> Self {
        self.levels = Some(levels.into());
        self
    }

    pub fn with_column_names(mut self, column_names: impl Into<TextSelection>) -> Self {
        self.column_names = Some(column_names.into());
        self
    }

    pub fn with_year_col(mut self, year_col: impl Into<String>) -> Self {
        self.year_col = Some(year_col.into());
        self
    }
}

impl ToArguments for AddClassification {
    const OPERATION: Operation = Operation::AddClassification;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("target", self.target.as_str())
            .optional("aspects", self.aspects.clone())
            .optional("levels", self.levels.clone())
            .optional("column_names", self.column_names.clone())
            .optional("year_col", self.year_col.clone())
    }
}

/// Parameters for `setup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setup {
    pub years: Years,
    /// Redo work for data that already exists. Delegate default: false.
    pub replace: Option<bool>,
    /// Delegate default: download_cleaned.
    pub method: Option<SetupMethod>,
    /// Delegate default: mirror.
    pub download_source: Option<DownloadSource>,
}

impl Setup {
    pub fn new(years: impl Into<Years>) -> Self {
        Self {
            years: years.into(),
            replace: None,
            method: None,
            download_source: None,
        }
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn with_method(mut self, method: SetupMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_download_source(mut self, download_source: DownloadSource) -> Self {
        self.download_source = Some(download_source);
        self
    }
}

impl ToArguments for Setup {
    const OPERATION: Operation = Operation::Setup;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("years", self.years.clone())
            .optional("replace", self.replace)
            .optional("method", self.method)
            .optional("download_source", self.download_source)
    }
}

/// Parameters for `setup_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Overwrite an existing config file. Delegate default: false.
    pub replace: Option<bool>,
}

impl SetupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }
}

impl ToArguments for SetupConfig {
    const OPERATION: Operation = Operation::SetupConfig;

    fn to_arguments(&self) -> Arguments {
        Arguments::new().optional("replace", self.replace)
    }
}

/// Parameters for `download_map`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadMap {
    pub map_name: String,
    /// Delegate default: original.
    pub source: Option<MapSource>,
}

impl DownloadMap {
    pub fn new(map_name: impl Into<String>) -> Self {
        Self {
            map_name: map_name.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: MapSource) -> Self {
        self.source = Some(source);
        self
    }
}

impl ToArguments for DownloadMap {
    const OPERATION: Operation = Operation::DownloadMap;

    fn to_arguments(&self) -> Arguments {
        Arguments::new()
            .required("map_name", self.map_name.as_str())
            .optional("source", self.source)
    }
}
