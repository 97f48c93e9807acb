#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the survey series offers. Informational for the delegate; the
/// façade never checks requests against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub years: Vec<i32>,
    pub tables: Vec<String>,
    #[serde(default)]
    pub maps: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeMetadata>,
    #[serde(default)]
    pub classifications: BTreeMap<String, ClassificationMetadata>,
}

impl Metadata {
    pub fn last_year(&self) -> Option<i32> {
        self.years.iter().copied().max()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub aspects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationMetadata {
    #[serde(default)]
    pub description: Option<String>,
    pub levels: Vec<u8>,
    pub aspects: Vec<String>,
}
