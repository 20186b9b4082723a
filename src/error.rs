use thiserror::Error;

// Unified error type for cvspace

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    #[error("dimension mismatch in {op}: expected {expected}, got {found}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("matrix must be rectangular: row {row} has length {found}, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, LinalgError>;

/// Fails with `DimensionMismatch` unless `expected == found`.
pub(crate) fn check_dim(op: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch { op, expected, found })
    }
}

/// Unwraps an operator result, panicking with the error message. Backs the `+`, `-`
/// and `*` impls, which cannot return a `Result`.
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}
