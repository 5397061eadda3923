//! Tabular demo utilities.
//!
//! A small column-oriented table with required-column validation, a
//! computed-column adder and a seeded sample generator.

mod processing;
mod table;

pub use processing::{
    add_computed_columns, sample_table, validate_columns, DEFAULT_REQUIRED_COLUMNS, SAMPLE_SEED,
};
pub use table::{Column, DatasetError, Table};
