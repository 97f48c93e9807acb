//! Shared utilities for CNSIR crates.
//!
//! This crate provides common utilities used across the CNSIR workspace,
//! mainly Polars helpers for reading and writing coded survey columns.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{any_to_u64, code_column, parse_u64, set_u64_column};
