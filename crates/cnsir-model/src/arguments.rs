//! Forwarded argument sets.
//!
//! An [`Arguments`] value is what actually reaches the delegate: every
//! required parameter plus only those optional parameters the caller set.
//! Anything absent is left to the delegate's own default.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::enums::{Attribute, DownloadSource, Form, MapSource, OnMissing, SetupMethod, TableName};
use crate::selection::{LevelSelection, TextSelection};
use crate::years::Years;

/// A single forwarded value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    TextList(Vec<String>),
    IntegerList(Vec<i64>),
    Years(Years),
}

impl ArgValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ArgValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ArgValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            ArgValue::TextList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_integer_list(&self) -> Option<&[i64]> {
        match self {
            ArgValue::IntegerList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_years(&self) -> Option<&Years> {
        match self {
            ArgValue::Years(years) => Some(years),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(value) => write!(f, "{value:?}"),
            ArgValue::Integer(value) => write!(f, "{value}"),
            ArgValue::Flag(value) => write!(f, "{value}"),
            ArgValue::TextList(values) => write!(f, "{values:?}"),
            ArgValue::IntegerList(values) => write!(f, "{values:?}"),
            ArgValue::Years(years) => write!(f, "{years}"),
        }
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Flag(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Integer(value)
    }
}

impl From<Years> for ArgValue {
    fn from(years: Years) -> Self {
        ArgValue::Years(years)
    }
}

impl From<TextSelection> for ArgValue {
    fn from(selection: TextSelection) -> Self {
        match selection {
            TextSelection::One(value) => ArgValue::Text(value),
            TextSelection::Many(values) => ArgValue::TextList(values),
        }
    }
}

impl From<LevelSelection> for ArgValue {
    fn from(selection: LevelSelection) -> Self {
        match selection {
            LevelSelection::One(level) => ArgValue::Integer(i64::from(level)),
            LevelSelection::Many(levels) => {
                ArgValue::IntegerList(levels.into_iter().map(i64::from).collect())
            }
        }
    }
}

macro_rules! text_arg {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    ArgValue::Text(value.as_str().to_string())
                }
            }
        )+
    };
}

text_arg!(TableName, Form, OnMissing, Attribute, SetupMethod, DownloadSource, MapSource);

/// Forwarded parameter set, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arguments {
    entries: BTreeMap<&'static str, ArgValue>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter that is always forwarded.
    pub fn required(mut self, name: &'static str, value: impl Into<ArgValue>) -> Self {
        self.entries.insert(name, value.into());
        self
    }

    /// Adds a parameter only if the caller supplied it.
    pub fn optional<T: Into<ArgValue>>(mut self, name: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.entries.insert(name, value.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ArgValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (name, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

/// API entry point an argument set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LoadTable,
    LoadKnowledge,
    AddAttribute,
    AddClassification,
    Setup,
    SetupConfig,
    DownloadMap,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::LoadTable => "load_table",
            Operation::LoadKnowledge => "load_knowledge",
            Operation::AddAttribute => "add_attribute",
            Operation::AddClassification => "add_classification",
            Operation::Setup => "setup",
            Operation::SetupConfig => "setup_config",
            Operation::DownloadMap => "download_map",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projects a parameters object to the arguments that get forwarded.
pub trait ToArguments {
    const OPERATION: Operation;

    fn to_arguments(&self) -> Arguments;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_none_is_dropped() {
        let args = Arguments::new()
            .required("name", "Province")
            .optional::<bool>("replace", None)
            .optional("year_col", Some("Year"));
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["name", "year_col"]);
        assert!(!args.contains("replace"));
    }

    #[test]
    fn false_flag_is_still_forwarded() {
        let args = Arguments::new().optional("redownload", Some(false));
        assert_eq!(args.get("redownload"), Some(&ArgValue::Flag(false)));
    }

    #[test]
    fn display_is_readable() {
        let args = Arguments::new()
            .required("table_name", TableName::Household)
            .required("years", Years::range(1390, 1395));
        assert_eq!(args.to_string(), "{table_name: \"household\", years: 1390-1395}");
    }

    #[test]
    fn levels_widen_to_integers() {
        assert_eq!(
            ArgValue::from(LevelSelection::from([1, 2])),
            ArgValue::IntegerList(vec![1, 2])
        );
        assert_eq!(ArgValue::from(LevelSelection::from(3)).as_integer(), Some(3));
    }
}
