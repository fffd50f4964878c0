//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the data engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//! The crate is pure computation over caller-supplied data sources:
//! - `totals`: column/row totals over a `TabularSource`
//! - `cumulative`: running percentage-of-total over a `KeyedSource`
//! - `convert`: primitive arrays to `Number` arrays
//! - `range`: the closed interval `Range`

pub mod logging;

pub mod convert;
pub mod cumulative;
pub mod error;
pub mod number;
pub mod range;
pub mod source;
pub mod totals;

// Re-export commonly used types at the crate root
pub use convert::{clone_matrix, matrices_equal, to_number_array, to_number_matrix};
pub use cumulative::cumulative_percentages;
pub use error::DataError;
pub use number::Number;
pub use range::Range;
pub use source::{DataTable, KeyedSource, KeyedValues, TabularSource};
pub use totals::{column_total, column_total_for_rows, row_total, row_total_for_columns};
