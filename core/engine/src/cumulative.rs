//! FILENAME: core/engine/src/cumulative.rs
//! PURPOSE: Running percentage-of-total over a keyed data source.
//! CONTEXT: The value at position `i` is the running sum of values `0..=i`
//! divided by the grand total, so the last value of an all-positive series
//! is always 1.0. A zero grand total yields NaN everywhere (0/0); this is
//! not special-cased.

use crate::error::DataError;
use crate::source::{KeyedSource, KeyedValues};

/// Computes the cumulative percentages of `source`, keeping its keys and
/// their order. Absent values count as zero.
///
/// # Errors
/// Returns `DataError::InvalidSource` if `source` is `None`.
pub fn cumulative_percentages<S>(source: Option<&S>) -> Result<KeyedValues<S::Key>, DataError>
where
    S: KeyedSource + ?Sized,
{
    let source = source.ok_or(DataError::InvalidSource)?;
    let count = source.item_count();

    let total: f64 = (0..count).map(|i| source.value_at(i).unwrap_or(0.0)).sum();
    if count > 0 && total == 0.0 {
        crate::log_debug!("CUMULATIVE", "grand total is 0 over {} items, results are NaN", count);
    }

    let mut result = KeyedValues::default();
    let mut running = 0.0;
    for i in 0..count {
        running += source.value_at(i).unwrap_or(0.0);
        result.push(source.key_at(i), Some(running / total));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(values: &[Option<f64>]) -> KeyedValues<usize> {
        values.iter().copied().enumerate().collect()
    }

    #[test]
    fn test_running_sum_over_total() {
        let result = cumulative_percentages(Some(&keyed(&[Some(5.0), Some(9.0), Some(2.0)]))).unwrap();
        assert_eq!(result.value_at(0), Some(0.3125));
        assert_eq!(result.value_at(1), Some(0.875));
        assert_eq!(result.value_at(2), Some(1.0));
    }

    #[test]
    fn test_absent_value_counts_as_zero() {
        let result = cumulative_percentages(Some(&keyed(&[Some(1.0), None, Some(3.0)]))).unwrap();
        assert_eq!(result.value_at(0), Some(0.25));
        assert_eq!(result.value_at(1), Some(0.25));
        assert_eq!(result.value_at(2), Some(1.0));
    }

    #[test]
    fn test_all_absent_is_nan() {
        let result = cumulative_percentages(Some(&keyed(&[None, None]))).unwrap();
        assert_eq!(result.item_count(), 2);
        assert!(result.value_at(0).unwrap().is_nan());
        assert!(result.value_at(1).unwrap().is_nan());
    }

    #[test]
    fn test_missing_source() {
        let result = cumulative_percentages::<KeyedValues<usize>>(None);
        assert_eq!(result, Err(DataError::InvalidSource));
    }
}
