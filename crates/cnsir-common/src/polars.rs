//! Polars helpers for coded survey columns.
//!
//! Census-sample tables store geographic and classification codes as small
//! non-negative integers, but depending on the source file they arrive as
//! signed integers, floats (when the column carries nulls) or strings. The
//! helpers here read any of those into `Option<u64>` so that a missing or
//! unrepresentable code stays `None` instead of turning into zero.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to `u64`.
///
/// Returns `None` for nulls, negative integers, non-integral or non-finite
/// floats, booleans and strings that do not parse as an unsigned integer.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use cnsir_common::any_to_u64;
///
/// assert_eq!(any_to_u64(AnyValue::Null), None);
/// assert_eq!(any_to_u64(AnyValue::Int32(23)), Some(23));
/// assert_eq!(any_to_u64(AnyValue::Int32(-1)), None);
/// assert_eq!(any_to_u64(AnyValue::Float64(7.0)), Some(7));
/// assert_eq!(any_to_u64(AnyValue::String("04")), Some(4));
/// ```
pub fn any_to_u64(value: AnyValue<'_>) -> Option<u64> {
    match value {
        AnyValue::Null => None,
        AnyValue::UInt8(v) => Some(u64::from(v)),
        AnyValue::UInt16(v) => Some(u64::from(v)),
        AnyValue::UInt32(v) => Some(u64::from(v)),
        AnyValue::UInt64(v) => Some(v),
        AnyValue::Int8(v) => u64::try_from(v).ok(),
        AnyValue::Int16(v) => u64::try_from(v).ok(),
        AnyValue::Int32(v) => u64::try_from(v).ok(),
        AnyValue::Int64(v) => u64::try_from(v).ok(),
        AnyValue::Float32(v) => float_to_u64(f64::from(v)),
        AnyValue::Float64(v) => float_to_u64(v),
        AnyValue::String(s) => parse_u64(s),
        AnyValue::StringOwned(s) => parse_u64(&s),
        _ => None,
    }
}

/// 2^64, the first float past the `u64` range. `u64::MAX as f64` rounds up
/// to this value, so the bound is exclusive.
const U64_RANGE_END: f64 = 18_446_744_073_709_551_616.0;

fn float_to_u64(v: f64) -> Option<u64> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < U64_RANGE_END {
        Some(v as u64)
    } else {
        None
    }
}

/// Parses a string as `u64`, returning `None` for invalid or empty strings.
pub fn parse_u64(value: &str) -> Option<u64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u64>().ok()
}

/// Reads a column as unsigned codes, one entry per row.
///
/// Fails only when the column does not exist.
pub fn code_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<u64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_u64(value));
    }
    Ok(values)
}

/// Adds or replaces a `UInt64` column.
pub fn set_u64_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<u64>>,
) -> PolarsResult<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}
