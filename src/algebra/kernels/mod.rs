#![allow(clippy::too_many_arguments)]
//! Dense BLAS-like kernels consumed by the band factorization routines.
//!
//! All operations act on strided, row-major buffers.  Every
//! implementation validates its arguments and reports inconsistent
//! extents as a [`DimensionError`](crate::algebra::DimensionError)
//! rather than reading or writing out of bounds.  Operations with a
//! zero extent are no-ops once their arguments have been validated.
//!
//! For real element types "Hermitian" means symmetric and the
//! conjugate transpose [`MatrixShape::C`](crate::algebra::MatrixShape)
//! is the same as the transpose.

use crate::algebra::*;

pub(crate) mod checks;
mod native;
pub use native::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "blas")] {
        mod blas;
        pub use self::blas::*;
    }
}

/// Level 1, 2 and 3 primitives required by the band kernels.
///
/// The backend is passed explicitly to every band routine, so that no
/// process wide kernel selection is ever consulted.  Implementations are
/// expected to be stateless and safe to share across threads.
pub trait DenseKernels<T: BandScalar> {
    /// `x = α x`
    fn scal(&self, n: usize, α: T, x: &mut [T], incx: usize) -> Result<(), DimensionError>;

    /// `x = α x` for a real scale factor
    fn rscal(&self, n: usize, α: T::Real, x: &mut [T], incx: usize)
        -> Result<(), DimensionError>;

    /// conjugated dot product `Σ conj(x_i) y_i`
    fn dotc(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize)
        -> Result<T, DimensionError>;

    /// unconjugated dot product `Σ x_i y_i`
    fn dotu(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize)
        -> Result<T, DimensionError>;

    /// Hermitian rank-1 update `A = A + α x x^H` on the `uplo` triangle
    /// of the `n x n` matrix `A`.
    fn her(
        &self, uplo: MatrixTriangle, n: usize, α: T::Real,
        x: &[T], incx: usize, a: &mut [T], lda: usize,
    ) -> Result<(), DimensionError>;

    /// triangular matrix-vector multiply `x = op(A) x`
    fn trmv(
        &self, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag, n: usize,
        a: &[T], lda: usize, x: &mut [T], incx: usize,
    ) -> Result<(), DimensionError>;

    /// general matrix multiply `C = α op(A) op(B) + β C`, where
    /// `op(A)` is `m x k` and `op(B)` is `k x n`
    fn gemm(
        &self, transa: MatrixShape, transb: MatrixShape, m: usize, n: usize, k: usize,
        α: T, a: &[T], lda: usize, b: &[T], ldb: usize, β: T, c: &mut [T], ldc: usize,
    ) -> Result<(), DimensionError>;

    /// Hermitian rank-k update on the `uplo` triangle of the `n x n` matrix C.
    /// `C = α A A^H + β C` if `trans == N` (A is `n x k`), otherwise
    /// `C = α A^H A + β C` (A is `k x n`).
    fn herk(
        &self, uplo: MatrixTriangle, trans: MatrixShape, n: usize, k: usize,
        α: T::Real, a: &[T], lda: usize, β: T::Real, c: &mut [T], ldc: usize,
    ) -> Result<(), DimensionError>;

    /// triangular solve with multiple right hand sides.  Solves
    /// `op(A) X = α B` (Left) or `X op(A) = α B` (Right) for the
    /// `m x n` matrix X, which overwrites B.
    fn trsm(
        &self, side: MatrixSide, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag,
        m: usize, n: usize, α: T, a: &[T], lda: usize, b: &mut [T], ldb: usize,
    ) -> Result<(), DimensionError>;
}
