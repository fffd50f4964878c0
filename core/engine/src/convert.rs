//! FILENAME: core/engine/src/convert.rs
//! PURPOSE: Conversion of primitive f64 arrays into `Number` arrays, plus
//! small helpers for comparing and copying jagged f64 matrices.
//! CONTEXT: Output shapes mirror input shapes exactly. Jagged rows keep their
//! own lengths, zero-length rows included. Every input value produces a
//! `Number`, including NaN and the infinities.

use crate::error::DataError;
use crate::number::Number;

/// Converts a primitive array into a `Number` array of the same length.
///
/// # Errors
/// Returns `DataError::InvalidInput` if `data` is `None`.
pub fn to_number_array(data: Option<&[f64]>) -> Result<Vec<Number>, DataError> {
    let data = data.ok_or(DataError::InvalidInput)?;
    Ok(data.iter().copied().map(Number::from).collect())
}

/// Converts a (possibly jagged) primitive matrix row by row.
///
/// # Errors
/// Returns `DataError::InvalidInput` if `data` is `None`.
pub fn to_number_matrix<R>(data: Option<&[R]>) -> Result<Vec<Vec<Number>>, DataError>
where
    R: AsRef<[f64]>,
{
    let data = data.ok_or(DataError::InvalidInput)?;
    data.iter()
        .map(|row| to_number_array(Some(row.as_ref())))
        .collect()
}

/// Compares two matrices element by element. Two absent matrices are equal,
/// and NaN is equal to NaN.
pub fn matrices_equal<A, B>(a: Option<&[A]>, b: Option<&[B]>) -> bool
where
    A: AsRef<[f64]>,
    B: AsRef<[f64]>,
{
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.len() == b.len()
                && a.iter().zip(b).all(|(ra, rb)| {
                    let (ra, rb) = (ra.as_ref(), rb.as_ref());
                    ra.len() == rb.len()
                        && ra.iter().zip(rb).all(|(&x, &y)| Number(x) == Number(y))
                })
        }
        _ => false,
    }
}

/// Deep copy of a jagged matrix.
///
/// # Errors
/// Returns `DataError::InvalidInput` if `data` is `None`.
pub fn clone_matrix<R>(data: Option<&[R]>) -> Result<Vec<Vec<f64>>, DataError>
where
    R: AsRef<[f64]>,
{
    let data = data.ok_or(DataError::InvalidInput)?;
    Ok(data.iter().map(|row| row.as_ref().to_vec()).collect())
}
