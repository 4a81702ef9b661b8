#![allow(clippy::too_many_arguments)]

use crate::algebra::*;

mod gemm;
mod her;
mod herk;
mod level1;
mod trmv;
mod trsm;

/// Pure Rust implementation of the [`DenseKernels`] primitives.
///
/// Available for every [`BandScalar`] element type and always compiled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NativeKernels;

impl NativeKernels {
    pub fn new() -> Self {
        Self
    }
}

// element (i,j) of op(A) for a row-major A
#[inline]
pub(super) fn op_elem<T: BandScalar>(
    trans: MatrixShape,
    a: &[T],
    lda: usize,
    i: usize,
    j: usize,
) -> T {
    match trans {
        MatrixShape::N => a[i * lda + j],
        MatrixShape::T => a[j * lda + i],
        MatrixShape::C => a[j * lda + i].conj(),
    }
}

#[rustfmt::skip]
impl<T: BandScalar> DenseKernels<T> for NativeKernels {
    fn scal(&self, n: usize, α: T, x: &mut [T], incx: usize) -> Result<(), DimensionError> {
        level1::scal(n, α, x, incx)
    }

    fn rscal(&self, n: usize, α: T::Real, x: &mut [T], incx: usize) -> Result<(), DimensionError> {
        level1::rscal(n, α, x, incx)
    }

    fn dotc(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> Result<T, DimensionError> {
        level1::dotc(n, x, incx, y, incy)
    }

    fn dotu(&self, n: usize, x: &[T], incx: usize, y: &[T], incy: usize) -> Result<T, DimensionError> {
        level1::dotu(n, x, incx, y, incy)
    }

    fn her(
        &self, uplo: MatrixTriangle, n: usize, α: T::Real,
        x: &[T], incx: usize, a: &mut [T], lda: usize,
    ) -> Result<(), DimensionError> {
        her::her(uplo, n, α, x, incx, a, lda)
    }

    fn trmv(
        &self, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag, n: usize,
        a: &[T], lda: usize, x: &mut [T], incx: usize,
    ) -> Result<(), DimensionError> {
        trmv::trmv(uplo, trans, diag, n, a, lda, x, incx)
    }

    fn gemm(
        &self, transa: MatrixShape, transb: MatrixShape, m: usize, n: usize, k: usize,
        α: T, a: &[T], lda: usize, b: &[T], ldb: usize, β: T, c: &mut [T], ldc: usize,
    ) -> Result<(), DimensionError> {
        gemm::gemm(transa, transb, m, n, k, α, a, lda, b, ldb, β, c, ldc)
    }

    fn herk(
        &self, uplo: MatrixTriangle, trans: MatrixShape, n: usize, k: usize,
        α: T::Real, a: &[T], lda: usize, β: T::Real, c: &mut [T], ldc: usize,
    ) -> Result<(), DimensionError> {
        herk::herk(uplo, trans, n, k, α, a, lda, β, c, ldc)
    }

    fn trsm(
        &self, side: MatrixSide, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag,
        m: usize, n: usize, α: T, a: &[T], lda: usize, b: &mut [T], ldb: usize,
    ) -> Result<(), DimensionError> {
        trsm::trsm(side, uplo, trans, diag, m, n, α, a, lda, b, ldb)
    }
}
