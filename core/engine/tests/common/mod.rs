//! FILENAME: tests/common/mod.rs
//! Test doubles and fixtures for data engine integration tests.
//! The stubs implement the source traits directly; a cell or value that was
//! never configured reads as absent.

#![allow(dead_code)]

use std::collections::HashMap;
use data_engine::{KeyedSource, TabularSource};

/// Tabular source whose dimensions and cells are set independently, so a
/// test can report more rows than it has cells (sparse tables).
pub struct StubTable {
    rows: usize,
    cols: usize,
    cells: HashMap<(usize, usize), f64>,
}

impl StubTable {
    pub fn new(rows: usize, cols: usize) -> Self {
        StubTable {
            rows,
            cols,
            cells: HashMap::new(),
        }
    }

    pub fn with(mut self, row: usize, col: usize, value: f64) -> Self {
        self.cells.insert((row, col), value);
        self
    }

    /// A single column (col 0) filled from `values`.
    pub fn column(values: &[f64]) -> Self {
        values
            .iter()
            .enumerate()
            .fold(StubTable::new(values.len(), 1), |t, (row, &v)| t.with(row, 0, v))
    }

    /// A single row (row 0) filled from `values`.
    pub fn row(values: &[f64]) -> Self {
        values
            .iter()
            .enumerate()
            .fold(StubTable::new(1, values.len()), |t, (col, &v)| t.with(0, col, v))
    }
}

impl TabularSource for StubTable {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.cols
    }

    fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(&(row, col)).copied()
    }
}

/// Keyed source backed by a plain vector. Unlike `KeyedValues`, duplicate
/// keys are kept as separate items.
pub struct StubKeyed {
    items: Vec<(String, Option<f64>)>,
}

impl StubKeyed {
    pub fn new(items: &[(&str, Option<f64>)]) -> Self {
        StubKeyed {
            items: items.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    /// Keys "0", "1", ... with every value present.
    pub fn from_values(values: &[f64]) -> Self {
        StubKeyed {
            items: values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i.to_string(), Some(v)))
                .collect(),
        }
    }
}

impl KeyedSource for StubKeyed {
    type Key = String;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn key_at(&self, index: usize) -> String {
        self.items[index].0.clone()
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.items[index].1
    }
}

pub const EPSILON: f64 = 1e-9;

/// Assert that two numbers are equal within `EPSILON`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}

/// Assert the cumulative values of a keyed result, in order.
pub fn assert_values<S: KeyedSource>(source: &S, expected: &[f64]) {
    assert_eq!(source.item_count(), expected.len(), "item count");
    for (i, &e) in expected.iter().enumerate() {
        match source.value_at(i) {
            Some(v) if e.is_nan() => assert!(v.is_nan(), "item {} expected NaN but got {}", i, v),
            Some(v) => assert_close(v, e),
            None => panic!("item {} expected {} but was absent", i, e),
        }
    }
}
