#![allow(non_snake_case)]
use crate::algebra::{BandFactorizationError, BandScalar, BandStorageMatrix, DimensionError};

/// Band Cholesky factorization of a symmetric or Hermitian positive
/// definite band matrix.
pub trait FactorBandCholesky {
    type T: BandScalar;

    /// Computes the Cholesky factor in place.  Only the stored triangle
    /// of `A` is referenced, and on success it holds U with `A = U^H U`
    /// (`Triu`) or L with `A = L L^H` (`Tril`).  The contents of `A` are
    /// unspecified after a failed factorization.
    fn factor<S>(&mut self, A: &mut BandStorageMatrix<S, Self::T>) -> Result<(), BandFactorizationError>
    where
        S: AsRef<[Self::T]> + AsMut<[Self::T]>;

    /// Solve `A X = B` for a row-major `n x nrhs` matrix `B` with row
    /// stride `ldb`, where `A` holds a factor previously computed by
    /// [`factor`](Self::factor).  `B` is overwritten by `X`.
    fn solve<S>(
        &self,
        A: &BandStorageMatrix<S, Self::T>,
        B: &mut [Self::T],
        nrhs: usize,
        ldb: usize,
    ) -> Result<(), DimensionError>
    where
        S: AsRef<[Self::T]>;

    // computes log(det(X)) for the matrix X = U^H U or L L^H,
    // given the factor held in A
    fn logdet<S>(&self, A: &BandStorageMatrix<S, Self::T>) -> <Self::T as BandScalar>::Real
    where
        S: AsRef<[Self::T]>;
}

/// Product of a triangular band factor with its conjugate transpose
pub trait MultiplyBandProduct {
    type T: BandScalar;

    /// Overwrites the triangular band factor held in `A` with `U^H U`
    /// (`Triu`) or `L L^H` (`Tril`), in the same band storage.
    fn reconstruct<S>(&self, A: &mut BandStorageMatrix<S, Self::T>) -> Result<(), DimensionError>
    where
        S: AsRef<[Self::T]> + AsMut<[Self::T]>;
}
