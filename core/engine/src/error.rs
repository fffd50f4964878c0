//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("Null source: a tabular data source is required")]
    NullSource,

    #[error("Invalid source: a keyed data source is required")]
    InvalidSource,

    #[error("Invalid input: an input array is required")]
    InvalidInput,

    #[error("Invalid range: lower bound ({lower}) must be <= upper bound ({upper})")]
    InvalidRange { lower: f64, upper: f64 },
}
