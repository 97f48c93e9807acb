//! Year selector accepted by every year-aware entry point.
//!
//! The selector is carried to the delegate as written; resolving `"last"`,
//! expanding two-digit years (`90` for `1390`) and checking availability are
//! the delegate's job.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Which survey years to operate on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Years {
    /// A single year, e.g. `1395`.
    Single(i32),
    /// An explicit list of years. A one-year list displays with a trailing
    /// comma (`"1390,"`) so it reads back as a list. An empty list has no
    /// text form.
    List(Vec<i32>),
    /// A hyphenated inclusive range, e.g. `"1390-1395"`.
    Range { start: i32, end: i32 },
    /// Every available year.
    All,
    /// The most recent available year.
    Last,
}

impl Years {
    /// Inclusive range constructor. No ordering check is done here; text
    /// input is checked by `FromStr`.
    pub fn range(start: i32, end: i32) -> Self {
        Years::Range { start, end }
    }
}

impl fmt::Display for Years {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Years::Single(year) => write!(f, "{year}"),
            Years::List(years) => {
                for (idx, year) in years.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{year}")?;
                }
                if years.len() == 1 {
                    f.write_str(",")?;
                }
                Ok(())
            }
            Years::Range { start, end } => write!(f, "{start}-{end}"),
            Years::All => f.write_str("all"),
            Years::Last => f.write_str("last"),
        }
    }
}

fn parse_year(input: &str, token: &str) -> Result<i32, ModelError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ModelError::invalid_years(input, "empty year"));
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::invalid_years(
            input,
            format!("{token:?} is not a year"),
        ));
    }
    token
        .parse::<i32>()
        .map_err(|_| ModelError::invalid_years(input, format!("{token:?} is out of range")))
}

impl FromStr for Years {
    type Err = ModelError;

    /// Parses `"1395"`, `"1390,1395"`, `"1390-1395"`, `"all"` or `"last"`.
    /// One trailing comma is allowed after a list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ModelError::invalid_years(s, "empty selector"));
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Years::All);
        }
        if trimmed.eq_ignore_ascii_case("last") {
            return Ok(Years::Last);
        }
        if let Some((start, end)) = trimmed.split_once('-') {
            let start = parse_year(s, start)?;
            let end = parse_year(s, end)?;
            if start > end {
                return Err(ModelError::invalid_years(
                    s,
                    format!("range start {start} is after end {end}"),
                ));
            }
            return Ok(Years::Range { start, end });
        }
        if trimmed.contains(',') {
            let body = trimmed.strip_suffix(',').unwrap_or(trimmed);
            let years = body
                .split(',')
                .map(|token| parse_year(s, token))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Years::List(years));
        }
        parse_year(s, trimmed).map(Years::Single)
    }
}

impl From<i32> for Years {
    fn from(year: i32) -> Self {
        Years::Single(year)
    }
}

impl From<Vec<i32>> for Years {
    fn from(years: Vec<i32>) -> Self {
        Years::List(years)
    }
}

impl<const N: usize> From<[i32; N]> for Years {
    fn from(years: [i32; N]) -> Self {
        Years::List(years.to_vec())
    }
}

impl From<&[i32]> for Years {
    fn from(years: &[i32]) -> Self {
        Years::List(years.to_vec())
    }
}

impl From<RangeInclusive<i32>> for Years {
    fn from(range: RangeInclusive<i32>) -> Self {
        let (start, end) = range.into_inner();
        Years::Range { start, end }
    }
}

impl Serialize for Years {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Years::Single(year) => serializer.serialize_i32(*year),
            Years::List(years) => {
                let mut seq = serializer.serialize_seq(Some(years.len()))?;
                for year in years {
                    seq.serialize_element(year)?;
                }
                seq.end()
            }
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYears {
    Single(i32),
    List(Vec<i32>),
    Text(String),
}

impl<'de> Deserialize<'de> for Years {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawYears::deserialize(deserializer)? {
            RawYears::Single(year) => Ok(Years::Single(year)),
            RawYears::List(years) => Ok(Years::List(years)),
            RawYears::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}
