//! Composite location key.
//!
//! Households are located by three nested codes: urban/rural status (one
//! digit), province (two digits) and county (two digits). Packing them as
//! `UR * 10_000 + PP * 100 + CC` gives a single key that attribute tables
//! are indexed by.
//!
//! Null rule: a row with any missing or non-representable code gets a null
//! key. Substituting zero would produce a valid-looking key for the wrong
//! place.

use cnsir_common::{code_column, set_u64_column};
use polars::prelude::{DataFrame, PolarsResult};
use tracing::debug;

/// Column the synthesized key is written to.
pub const LOCATION_CODE: &str = "location_code";
pub const URBAN_RURAL_CODE: &str = "Urban_Rural_Code";
pub const PROVINCE_CODE: &str = "Province_Code";
pub const COUNTY_CODE: &str = "County_Code";

/// Packs three codes into one key, or `None` on `u64` overflow.
///
/// ```
/// use cnsir_api::location::pack_location_key;
///
/// assert_eq!(pack_location_key(1, 23, 4), Some(12_304));
/// assert_eq!(pack_location_key(9, 99, 99), Some(99_999));
/// ```
pub fn pack_location_key(urban_rural: u64, province: u64, county: u64) -> Option<u64> {
    urban_rural
        .checked_mul(10_000)?
        .checked_add(province.checked_mul(100)?)?
        .checked_add(county)
}

/// Computes the key for every row of `table`.
///
/// Fails if any of the three code columns is missing.
pub fn location_keys(table: &DataFrame) -> PolarsResult<Vec<Option<u64>>> {
    let urban_rural = code_column(table, URBAN_RURAL_CODE)?;
    let province = code_column(table, PROVINCE_CODE)?;
    let county = code_column(table, COUNTY_CODE)?;
    let keys = urban_rural
        .into_iter()
        .zip(province)
        .zip(county)
        .map(|((u, p), c)| match (u, p, c) {
            (Some(u), Some(p), Some(c)) => pack_location_key(u, p, c),
            _ => None,
        })
        .collect();
    Ok(keys)
}

/// Writes the key column into `table`, replacing any existing column of the
/// same name, and returns the column name.
pub fn add_location_key(table: &mut DataFrame) -> PolarsResult<&'static str> {
    let keys = location_keys(table)?;
    let null_keys = keys.iter().filter(|key| key.is_none()).count();
    set_u64_column(table, LOCATION_CODE, keys)?;
    debug!(
        column = LOCATION_CODE,
        rows = table.height(),
        null_keys,
        "synthesized location key"
    );
    Ok(LOCATION_CODE)
}
