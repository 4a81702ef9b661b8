//! Band Cholesky factorization and band product reconstruction.
//!
//! The factorization computes, in place, a triangular band factor with
//! positive real diagonal such that `A = U^H U` (upper storage) or
//! `A = L L^H` (lower storage).  The reconstruction kernel applies the
//! reverse operation, overwriting a triangular band factor with the
//! product of the factor and its conjugate transpose.  Factoring a matrix
//! and then reconstructing it recovers the original matrix up to rounding.
//!
//! Both operations are available through the [`BandCholeskyEngine`], which
//! holds the settings, the dense kernel backend and reusable scratch space,
//! and through the convenience functions [`factorize_band_cholesky`] and
//! [`reconstruct_band_product`] operating on raw band buffers.

use crate::algebra::*;

mod cholesky;
mod engine;
mod reconstruct;
mod settings;
mod solve;
mod traits;

pub use engine::*;
pub use settings::*;
pub use traits::*;

/// Computes the band Cholesky factor of the matrix held in `ab` in place,
/// using the native kernels and default settings.
///
/// Returns `Ok(true)` on success and `Ok(false)` if a pivot was not
/// strictly positive, in which case the contents of `ab` are unspecified.
/// Inconsistent shape parameters or a short buffer are reported as a
/// [`DimensionError`].
pub fn factorize_band_cholesky<T>(
    uplo: MatrixTriangle,
    n: usize,
    kd: usize,
    ab: &mut [T],
    ldab: usize,
) -> Result<bool, DimensionError>
where
    T: BandScalar,
{
    let mut engine = BandCholeskyEngine::<T>::new(BandCholeskySettings::default());
    match engine.factor_raw(uplo, n, kd, ab, ldab) {
        Ok(()) => Ok(true),
        Err(BandFactorizationError::NotPositiveDefinite(_)) => Ok(false),
        Err(BandFactorizationError::InvalidDimension(e)) => Err(e),
    }
}

/// Overwrites the triangular band factor held in `ab` with `U^H U`
/// (`Triu`) or `L L^H` (`Tril`), using the native kernels.
pub fn reconstruct_band_product<T>(
    uplo: MatrixTriangle,
    n: usize,
    kd: usize,
    ab: &mut [T],
    ldab: usize,
) -> Result<(), DimensionError>
where
    T: BandScalar,
{
    let shape = BandShape::new(uplo, n, kd, ldab)?;
    reconstruct::reconstruct(&NativeKernels, &shape, ab)
}
