//! FILENAME: core/engine/src/source.rs
//! PURPOSE: Read-only data source capabilities consumed by the aggregators.
//! CONTEXT: `TabularSource` is a 2D arrangement of optional numeric cells and
//! `KeyedSource` an ordered sequence of (key, optional value) pairs. Callers
//! supply their own implementations; `DataTable` and `KeyedValues` are the
//! in-memory ones shipped with the crate. An absent cell (`None`) is a
//! distinct state from a present zero.

use serde::{Deserialize, Serialize};

// ============================================================================
// CAPABILITIES
// ============================================================================

/// A rectangular or jagged table of optional numeric cells.
/// Row and column indices are 0-based.
pub trait TabularSource {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Returns the cell at (row, col), or `None` when the cell is absent.
    /// Coordinates outside the table are absent as well.
    fn value_at(&self, row: usize, col: usize) -> Option<f64>;
}

/// An ordered sequence of (key, optional numeric value) pairs.
pub trait KeyedSource {
    type Key: Clone;

    fn item_count(&self) -> usize;

    /// Returns the key at `index`.
    ///
    /// # Panics
    /// May panic if `index >= item_count()`.
    fn key_at(&self, index: usize) -> Self::Key;

    /// Returns the value at `index`, or `None` when the value is absent.
    fn value_at(&self, index: usize) -> Option<f64>;
}

impl<T: TabularSource + ?Sized> TabularSource for &T {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        (**self).value_at(row, col)
    }
}

// ============================================================================
// DATA TABLE
// ============================================================================

/// In-memory jagged table. Rows may have different lengths; cells beyond the
/// end of a row are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    rows: Vec<Vec<Option<f64>>>,
}

impl DataTable {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        DataTable { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Self {
        DataTable { rows }
    }

    /// Builds a table where every cell is present.
    pub fn from_values<R: AsRef<[f64]>>(rows: &[R]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&v| Some(v)).collect())
            .collect();
        DataTable { rows }
    }

    pub fn push_row(&mut self, row: Vec<Option<f64>>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }
}

impl TabularSource for DataTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn value_at(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

// ============================================================================
// KEYED VALUES
// ============================================================================

/// In-memory ordered list of keyed values. Insertion order is preserved and
/// `add_value` keeps keys unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedValues<K> {
    items: Vec<(K, Option<f64>)>,
}

impl<K> Default for KeyedValues<K> {
    fn default() -> Self {
        KeyedValues { items: Vec::new() }
    }
}

impl<K> KeyedValues<K> {
    /// Appends without checking for an existing key.
    pub(crate) fn push(&mut self, key: K, value: Option<f64>) {
        self.items.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Clone + PartialEq> KeyedValues<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `key`. An existing key keeps its position and has
    /// its value replaced; a new key is appended.
    pub fn add_value(&mut self, key: K, value: Option<f64>) {
        match self.index_of(&key) {
            Some(index) => self.items[index].1 = value,
            None => self.items.push((key, value)),
        }
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }

    /// The value stored for `key`. Returns `None` both for an unknown key and
    /// for a known key whose value is absent.
    pub fn value_for_key(&self, key: &K) -> Option<f64> {
        self.index_of(key).and_then(|index| self.items[index].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(|(k, _)| k)
    }
}

impl<K: Clone + PartialEq> FromIterator<(K, Option<f64>)> for KeyedValues<K> {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        let mut values = KeyedValues::new();
        for (key, value) in iter {
            values.add_value(key, value);
        }
        values
    }
}

impl<K: Clone> KeyedSource for KeyedValues<K> {
    type Key = K;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn key_at(&self, index: usize) -> K {
        self.items[index].0.clone()
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.items.get(index).and_then(|(_, v)| *v)
    }
}
