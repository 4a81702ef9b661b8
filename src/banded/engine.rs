#![allow(non_snake_case)]

use super::cholesky::{self, BandWorkspace};
use super::{reconstruct, solve, BandCholeskySettings, FactorBandCholesky, MultiplyBandProduct};
use crate::algebra::*;

/// Band Cholesky factorization engine.
///
/// Owns the factorization settings, the dense kernel backend `K` and
/// scratch space that is reused across factorizations.  The band data
/// itself is always owned by the caller and is factored in place.
///
/// ```
/// use bandchol::algebra::*;
/// use bandchol::banded::*;
///
/// // A = [4 2 0; 2 10 3; 0 3 2] in upper band storage
/// let mut A = BandMatrix::<f64>::zeros(MatrixTriangle::Triu, 3, 1).unwrap();
/// A.data.copy_from_slice(&[4., 2., 10., 3., 2., 0.]);
///
/// let mut engine = BandCholeskyEngine::new(BandCholeskySettings::default());
/// engine.factor(&mut A).unwrap();
/// assert_eq!(&A.data[..5], &[2., 1., 3., 1., 1.]);
/// ```
#[derive(Debug, Clone)]
pub struct BandCholeskyEngine<T, K = NativeKernels>
where
    T: BandScalar,
{
    /// factorization settings
    pub settings: BandCholeskySettings,
    kernels: K,
    work: BandWorkspace<T>,
}

impl<T> BandCholeskyEngine<T, NativeKernels>
where
    T: BandScalar,
{
    /// Engine using the [`NativeKernels`] backend
    pub fn new(settings: BandCholeskySettings) -> Self {
        Self::with_kernels(settings, NativeKernels)
    }
}

impl<T> Default for BandCholeskyEngine<T, NativeKernels>
where
    T: BandScalar,
{
    fn default() -> Self {
        Self::new(BandCholeskySettings::default())
    }
}

impl<T, K> BandCholeskyEngine<T, K>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    /// Engine using the dense kernel backend `kernels`
    pub fn with_kernels(settings: BandCholeskySettings, kernels: K) -> Self {
        Self {
            settings,
            kernels,
            work: BandWorkspace::new(),
        }
    }

    pub fn kernels(&self) -> &K {
        &self.kernels
    }

    /// Factors the band matrix held in `ab` in place.
    ///
    /// On success the stored triangle holds the factor U or L.  Fails with
    /// [`NotPositiveDefinite`](BandFactorizationError::NotPositiveDefinite)
    /// at the first pivot whose real part is not strictly positive (or is
    /// NaN), and with [`InvalidDimension`](BandFactorizationError::InvalidDimension)
    /// if the shape parameters are inconsistent with each other or with
    /// the length of `ab`.
    pub fn factor_raw(
        &mut self,
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        ab: &mut [T],
        ldab: usize,
    ) -> Result<(), BandFactorizationError> {
        let shape = BandShape::new(uplo, n, kd, ldab)?;
        self.factor_shaped(&shape, ab)
    }

    /// Overwrites the triangular band factor held in `ab` with
    /// `U^H U` or `L L^H`.
    pub fn reconstruct_raw(
        &self,
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        ab: &mut [T],
        ldab: usize,
    ) -> Result<(), DimensionError> {
        let shape = BandShape::new(uplo, n, kd, ldab)?;
        reconstruct::reconstruct(&self.kernels, &shape, ab)
    }

    /// Solves `A X = B` given the band factor of `A` held in `ab`.
    /// `b` is row-major `n x nrhs` with row stride `ldb`.
    #[allow(clippy::too_many_arguments)]
    pub fn solve_raw(
        &self,
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        ab: &[T],
        ldab: usize,
        b: &mut [T],
        nrhs: usize,
        ldb: usize,
    ) -> Result<(), DimensionError> {
        let shape = BandShape::new(uplo, n, kd, ldab)?;
        solve::solve(&self.kernels, &shape, ab, b, nrhs, ldb)
    }

    fn factor_shaped(&mut self, shape: &BandShape, ab: &mut [T]) -> Result<(), BandFactorizationError> {
        let nb = self.settings.effective_block_size(shape.kd);
        cholesky::factor(&self.kernels, shape, ab, nb, &mut self.work)
    }
}

impl<T, K> FactorBandCholesky for BandCholeskyEngine<T, K>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    type T = T;

    fn factor<S>(&mut self, A: &mut BandStorageMatrix<S, T>) -> Result<(), BandFactorizationError>
    where
        S: AsRef<[T]> + AsMut<[T]>,
    {
        let shape = A.shape;
        self.factor_shaped(&shape, A.data_mut())
    }

    fn solve<S>(
        &self,
        A: &BandStorageMatrix<S, T>,
        B: &mut [T],
        nrhs: usize,
        ldb: usize,
    ) -> Result<(), DimensionError>
    where
        S: AsRef<[T]>,
    {
        solve::solve(&self.kernels, &A.shape, A.data(), B, nrhs, ldb)
    }

    fn logdet<S>(&self, A: &BandStorageMatrix<S, T>) -> T::Real
    where
        S: AsRef<[T]>,
    {
        solve::logdet(&A.shape, A.data())
    }
}

impl<T, K> MultiplyBandProduct for BandCholeskyEngine<T, K>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    type T = T;

    fn reconstruct<S>(&self, A: &mut BandStorageMatrix<S, T>) -> Result<(), DimensionError>
    where
        S: AsRef<[T]> + AsMut<[T]>,
    {
        let shape = A.shape;
        reconstruct::reconstruct(&self.kernels, &shape, A.data_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_roundtrip() {
        #[rustfmt::skip]
        let A: Vec<f64> = vec![
            4., 2., 0.,
            2., 10., 3.,
            0., 3., 2.];

        let mut engine = BandCholeskyEngine::<f64>::default();
        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let mut B = BandMatrix::from_dense(uplo, 3, 1, &A).unwrap();
            engine.factor(&mut B).unwrap();
            assert!((engine.logdet(&B) - 2. * 6.0_f64.ln()).abs() < 1e-14);

            engine.reconstruct(&mut B).unwrap();
            assert_eq!(B.to_dense(), A);
        }
    }

    #[test]
    fn test_engine_dimension_errors() {
        let mut engine = BandCholeskyEngine::<f64>::default();
        let mut ab = vec![1.0; 8];

        assert_eq!(
            engine.factor_raw(MatrixTriangle::Triu, 3, 3, &mut ab, 4),
            Err(BandFactorizationError::InvalidDimension(DimensionError::BandWidth { n: 3, kd: 3 }))
        );
        assert_eq!(
            engine.reconstruct_raw(MatrixTriangle::Tril, 3, 2, &mut ab, 2),
            Err(DimensionError::LeadingDimension { ld: 2, min: 3 })
        );
        assert_eq!(
            engine.factor_raw(MatrixTriangle::Tril, 3, 2, &mut ab, 4),
            Err(BandFactorizationError::InvalidDimension(DimensionError::BufferLength {
                len: 8,
                min: 11
            }))
        );
    }
}
