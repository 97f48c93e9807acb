//! One-or-many parameter values.
//!
//! `aspects`, `column_names` and `levels` accept either a single value or a
//! list. The shape is preserved when forwarded, since the delegate treats a
//! lone value differently from a one-element list when naming columns.

use serde::{Deserialize, Serialize};

/// One or more strings (aspects, column names).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextSelection {
    One(String),
    Many(Vec<String>),
}

impl TextSelection {
    pub fn len(&self) -> usize {
        match self {
            TextSelection::One(_) => 1,
            TextSelection::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            TextSelection::One(value) => std::slice::from_ref(value),
            TextSelection::Many(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

impl From<&str> for TextSelection {
    fn from(value: &str) -> Self {
        TextSelection::One(value.to_string())
    }
}

impl From<String> for TextSelection {
    fn from(value: String) -> Self {
        TextSelection::One(value)
    }
}

impl From<Vec<String>> for TextSelection {
    fn from(values: Vec<String>) -> Self {
        TextSelection::Many(values)
    }
}

impl From<Vec<&str>> for TextSelection {
    fn from(values: Vec<&str>) -> Self {
        TextSelection::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TextSelection {
    fn from(values: [&str; N]) -> Self {
        TextSelection::Many(values.iter().map(|value| (*value).to_string()).collect())
    }
}

/// One or more classification hierarchy levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSelection {
    One(i32),
    Many(Vec<i32>),
}

impl From<i32> for LevelSelection {
    fn from(level: i32) -> Self {
        LevelSelection::One(level)
    }
}

impl From<Vec<i32>> for LevelSelection {
    fn from(levels: Vec<i32>) -> Self {
        LevelSelection::Many(levels)
    }
}

impl<const N: usize> From<[i32; N]> for LevelSelection {
    fn from(levels: [i32; N]) -> Self {
        LevelSelection::Many(levels.to_vec())
    }
}
