//! FILENAME: core/engine/src/totals.rs
//! PURPOSE: Column and row totals over a tabular data source.
//! CONTEXT: A total never fails because of its index. A negative index, an
//! empty table or a column/row that does not exist all give 0, and an absent
//! cell contributes 0. Only a missing source is an error.

use crate::error::DataError;
use crate::source::TabularSource;

/// Sums column `column` over every row of the source.
///
/// # Errors
/// Returns `DataError::NullSource` if `source` is `None`.
pub fn column_total<S>(source: Option<&S>, column: isize) -> Result<f64, DataError>
where
    S: TabularSource + ?Sized,
{
    let source = source.ok_or(DataError::NullSource)?;
    let Some(col) = checked_index("column", column) else {
        return Ok(0.0);
    };
    Ok(sum_cells((0..source.row_count()).map(|row| source.value_at(row, col))))
}

/// Sums row `row` over every column of the source.
///
/// # Errors
/// Returns `DataError::NullSource` if `source` is `None`.
pub fn row_total<S>(source: Option<&S>, row: isize) -> Result<f64, DataError>
where
    S: TabularSource + ?Sized,
{
    let source = source.ok_or(DataError::NullSource)?;
    let Some(row) = checked_index("row", row) else {
        return Ok(0.0);
    };
    Ok(sum_cells((0..source.column_count()).map(|col| source.value_at(row, col))))
}

/// Sums column `column` over the listed rows only.
/// Row indices at or beyond the row count are skipped.
pub fn column_total_for_rows<S>(
    source: Option<&S>,
    column: isize,
    valid_rows: &[usize],
) -> Result<f64, DataError>
where
    S: TabularSource + ?Sized,
{
    let source = source.ok_or(DataError::NullSource)?;
    let Some(col) = checked_index("column", column) else {
        return Ok(0.0);
    };
    let row_count = source.row_count();
    Ok(sum_cells(
        valid_rows
            .iter()
            .filter(|&&row| row < row_count)
            .map(|&row| source.value_at(row, col)),
    ))
}

/// Sums row `row` over the listed columns only.
/// Column indices at or beyond the column count are skipped.
pub fn row_total_for_columns<S>(
    source: Option<&S>,
    row: isize,
    valid_columns: &[usize],
) -> Result<f64, DataError>
where
    S: TabularSource + ?Sized,
{
    let source = source.ok_or(DataError::NullSource)?;
    let Some(row) = checked_index("row", row) else {
        return Ok(0.0);
    };
    let column_count = source.column_count();
    Ok(sum_cells(
        valid_columns
            .iter()
            .filter(|&&col| col < column_count)
            .map(|&col| source.value_at(row, col)),
    ))
}

fn checked_index(axis: &str, index: isize) -> Option<usize> {
    let checked = usize::try_from(index).ok();
    if checked.is_none() {
        crate::log_debug!("TOTALS", "negative {} index {}, total is 0", axis, index);
    }
    checked
}

fn sum_cells<I>(cells: I) -> f64
where
    I: Iterator<Item = Option<f64>>,
{
    let mut total = 0.0;
    for cell in cells {
        match cell {
            Some(value) => total += value,
            // Absent cells count as zero.
            None => {}
        }
    }
    total
}
