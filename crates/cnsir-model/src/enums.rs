//! Closed vocabularies accepted by the API entry points.
//!
//! Each enum carries the exact spelling the delegate expects; `as_str` is
//! what gets forwarded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Implements `Display` and case-insensitive `FromStr` on top of `ALL` and
/// `as_str`.
macro_rules! text_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ModelError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $ty::ALL
                            .iter()
                            .map($ty::as_str)
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

/// Survey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableName {
    /// One record per sampled household.
    Household,
    /// One record per household member.
    Individual,
}

impl TableName {
    pub const ALL: [TableName; 2] = [TableName::Household, TableName::Individual];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Household => "household",
            TableName::Individual => "individual",
        }
    }
}

text_enum!(TableName, "table");

/// Processing stage of an original survey table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Standardized column names, encodings and structure across years,
    /// plus table name and year identifiers.
    Normalized,
    /// Raw data with labels and types applied and irrelevant values removed.
    Cleaned,
    /// Survey data as published.
    Raw,
}

impl Form {
    pub const ALL: [Form; 3] = [Form::Normalized, Form::Cleaned, Form::Raw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Normalized => "normalized",
            Form::Cleaned => "cleaned",
            Form::Raw => "raw",
        }
    }
}

text_enum!(Form, "form");

/// What the delegate does when a requested table is not on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnMissing {
    /// Fail with a not-found error.
    Error,
    /// Download the table.
    Download,
    /// Build the table from raw data.
    Create,
}

impl OnMissing {
    pub const ALL: [OnMissing; 3] = [OnMissing::Error, OnMissing::Download, OnMissing::Create];

    pub fn as_str(&self) -> &'static str {
        match self {
            OnMissing::Error => "error",
            OnMissing::Download => "download",
            OnMissing::Create => "create",
        }
    }
}

text_enum!(OnMissing, "on_missing policy");

/// Geographic attribute that can be joined onto a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Province,
    County,
    #[serde(rename = "Urban_Rural")]
    UrbanRural,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Province, Attribute::County, Attribute::UrbanRural];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Province => "Province",
            Attribute::County => "County",
            Attribute::UrbanRural => "Urban_Rural",
        }
    }
}

text_enum!(Attribute, "attribute");

/// How `setup` obtains table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupMethod {
    /// Generate tables locally from the raw survey files.
    CreateFromRaw,
    /// Download pre-cleaned tables.
    DownloadCleaned,
}

impl SetupMethod {
    pub const ALL: [SetupMethod; 2] = [SetupMethod::CreateFromRaw, SetupMethod::DownloadCleaned];

    pub fn as_str(&self) -> &'static str {
        match self {
            SetupMethod::CreateFromRaw => "create_from_raw",
            SetupMethod::DownloadCleaned => "download_cleaned",
        }
    }
}

text_enum!(SetupMethod, "setup method");

/// Where `setup` downloads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadSource {
    Original,
    Mirror,
}

impl DownloadSource {
    pub const ALL: [DownloadSource; 2] = [DownloadSource::Original, DownloadSource::Mirror];

    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadSource::Original => "original",
            DownloadSource::Mirror => "mirror",
        }
    }
}

text_enum!(DownloadSource, "download source");

/// Where `download_map` fetches map files from. Only the original
/// publisher is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapSource {
    Original,
}

impl MapSource {
    pub const ALL: [MapSource; 1] = [MapSource::Original];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapSource::Original => "original",
        }
    }
}

text_enum!(MapSource, "map source");
