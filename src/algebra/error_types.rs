use thiserror::Error;

/// Error type returned when caller supplied shape parameters, leading
/// dimensions, increments or buffer lengths are inconsistent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    /// Bandwidth reaches beyond the matrix order
    #[error("Bandwidth kd = {kd} must be smaller than the matrix order n = {n}")]
    BandWidth { n: usize, kd: usize },
    /// Leading dimension (row stride) is too small
    #[error("Leading dimension {ld} is smaller than the required {min}")]
    LeadingDimension { ld: usize, min: usize },
    /// Buffer is shorter than the extent addressed by the operation
    #[error("Buffer of length {len} is shorter than the required {min}")]
    BufferLength { len: usize, min: usize },
    /// Vector increments must be nonzero
    #[error("Vector increment must be nonzero")]
    ZeroIncrement,
    /// Operand extents do not agree with each other
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
}

/// Error type returned by band factorization routines.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandFactorizationError {
    /// Shape parameters or buffers are inconsistent
    #[error("Invalid dimension: {0}")]
    InvalidDimension(#[from] DimensionError),
    /// A pivot was not strictly positive.  Carries the (0-based) index
    /// of the offending pivot.
    #[error("Matrix is not positive definite (non-positive pivot at index {0})")]
    NotPositiveDefinite(usize),
}

impl BandFactorizationError {
    // shift a pivot index reported by a factorization of a
    // trailing diagonal block into global coordinates
    pub(crate) fn offset_pivot(self, offset: usize) -> Self {
        match self {
            Self::NotPositiveDefinite(k) => Self::NotPositiveDefinite(k + offset),
            e => e,
        }
    }
}

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}
