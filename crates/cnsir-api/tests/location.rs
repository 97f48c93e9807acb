//! Location key packing over whole tables.

mod support;

use cnsir_api::{LOCATION_CODE, add_location_key, location_keys};
use polars::prelude::*;
use proptest::prelude::*;

use support::household_codes;

fn key_column(table: &DataFrame) -> Vec<Option<u64>> {
    table
        .column(LOCATION_CODE)
        .unwrap()
        .u64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn boundary_codes() {
    let mut table = household_codes(
        &[Some(0), Some(9)],
        &[Some(0), Some(99)],
        &[Some(0), Some(99)],
    );
    add_location_key(&mut table).unwrap();
    assert_eq!(key_column(&table), vec![Some(0), Some(99_999)]);
    assert_eq!(table.column(LOCATION_CODE).unwrap().dtype(), &DataType::UInt64);
}

#[test]
fn any_null_code_gives_null_key() {
    let table = household_codes(
        &[None, Some(1), Some(1), Some(1)],
        &[Some(23), None, Some(23), Some(23)],
        &[Some(4), Some(4), None, Some(4)],
    );
    assert_eq!(
        location_keys(&table).unwrap(),
        vec![None, None, None, Some(12_304)]
    );
}

#[test]
fn negative_code_gives_null_key() {
    let table = household_codes(&[Some(-1)], &[Some(23)], &[Some(4)]);
    assert_eq!(location_keys(&table).unwrap(), vec![None]);
}

#[test]
fn float_and_string_codes_are_read() {
    let table = df!(
        "Urban_Rural_Code" => [Some(1.0f64), None],
        "Province_Code" => ["07", "07"],
        "County_Code" => [12u32, 12],
    )
    .unwrap();
    assert_eq!(location_keys(&table).unwrap(), vec![Some(10_712), None]);
}

#[test]
fn out_of_range_float_code_gives_null_key() {
    let table = df!(
        "Urban_Rural_Code" => [0u32, 0],
        "Province_Code" => [0u32, 0],
        "County_Code" => [18_446_744_073_709_551_616.0f64, 18_446_744_073_709_549_568.0],
    )
    .unwrap();
    assert_eq!(
        location_keys(&table).unwrap(),
        vec![None, Some(18_446_744_073_709_549_568)]
    );
}

#[test]
fn existing_key_column_is_replaced() {
    let mut table = household_codes(&[Some(2)], &[Some(1)], &[Some(3)]);
    table
        .with_column(Series::new(LOCATION_CODE.into(), ["stale"]))
        .unwrap();
    let width = table.width();
    add_location_key(&mut table).unwrap();
    assert_eq!(table.width(), width);
    assert_eq!(key_column(&table), vec![Some(20_103)]);
}

#[test]
fn missing_column_is_an_error() {
    let table = df!("Urban_Rural_Code" => [1i64], "County_Code" => [1i64]).unwrap();
    assert!(location_keys(&table).is_err());
}

proptest! {
    #[test]
    fn packs_codes_in_fixed_width(
        rows in prop::collection::vec((0i64..10, 0i64..100, 0i64..100), 1..40)
    ) {
        let urban_rural: Vec<Option<i64>> = rows.iter().map(|r| Some(r.0)).collect();
        let province: Vec<Option<i64>> = rows.iter().map(|r| Some(r.1)).collect();
        let county: Vec<Option<i64>> = rows.iter().map(|r| Some(r.2)).collect();
        let table = household_codes(&urban_rural, &province, &county);

        let keys = location_keys(&table).unwrap();
        for ((u, p, c), key) in rows.iter().zip(keys) {
            let expected = (*u as u64) * 10_000 + (*p as u64) * 100 + (*c as u64);
            prop_assert_eq!(key, Some(expected));
            let key = expected;
            prop_assert_eq!(key / 10_000, *u as u64);
            prop_assert_eq!(key / 100 % 100, *p as u64);
            prop_assert_eq!(key % 100, *c as u64);
        }
    }

    #[test]
    fn nulls_poison_only_their_row(
        rows in prop::collection::vec(
            (prop::option::of(0i64..10), prop::option::of(0i64..100), prop::option::of(0i64..100)),
            1..40,
        )
    ) {
        let urban_rural: Vec<Option<i64>> = rows.iter().map(|r| r.0).collect();
        let province: Vec<Option<i64>> = rows.iter().map(|r| r.1).collect();
        let county: Vec<Option<i64>> = rows.iter().map(|r| r.2).collect();
        let table = household_codes(&urban_rural, &province, &county);

        let keys = location_keys(&table).unwrap();
        for (row, key) in rows.iter().zip(keys) {
            let complete = row.0.is_some() && row.1.is_some() && row.2.is_some();
            prop_assert_eq!(key.is_some(), complete);
        }
    }
}
