#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(clippy::too_many_arguments)]

// standard imports via blas-rs crates
extern crate blas_src;
use blas::*;

use super::checks::*;
use crate::algebra::*;

/// [`DenseKernels`] backend forwarding to a system BLAS library.
///
/// Available for `f32` and `f64` when compiled with the `blas` feature.
/// The BLAS routines are column-major, and the row-major operands used
/// throughout this crate are passed as their column-major transposes.  A
/// row-major triangle is therefore the opposite column-major triangle,
/// and the roles of the two sides in `trsm` and of the two operands in
/// `gemm` are exchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlasKernels;

impl BlasKernels {
    pub fn new() -> Self {
        Self
    }
}

fn as_blas_int(v: usize) -> Result<i32, DimensionError> {
    v.try_into().map_err(|_| DimensionError::IncompatibleDimension)
}

// BLAS only distinguishes transposition for real types
fn real_trans(trans: MatrixShape) -> u8 {
    if trans.is_transposed() { b'T' } else { b'N' }
}

macro_rules! impl_blas_kernels {
    ($T:ty, $XSCAL:path, $XDOT:path, $XSYR:path, $XTRMV:path, $XGEMM:path, $XSYRK:path, $XTRSM:path) => {
        impl DenseKernels<$T> for BlasKernels {
            fn scal(&self, n: usize, α: $T, x: &mut [$T], incx: usize) -> Result<(), DimensionError> {
                check_vec(x.len(), n, incx)?;
                if n == 0 { return Ok(()); }
                let (n, incx) = (as_blas_int(n)?, as_blas_int(incx)?);
                unsafe { $XSCAL(n, α, x, incx); }
                Ok(())
            }

            fn rscal(&self, n: usize, α: $T, x: &mut [$T], incx: usize) -> Result<(), DimensionError> {
                self.scal(n, α, x, incx)
            }

            fn dotc(&self, n: usize, x: &[$T], incx: usize, y: &[$T], incy: usize) -> Result<$T, DimensionError> {
                check_vec(x.len(), n, incx)?;
                check_vec(y.len(), n, incy)?;
                if n == 0 { return Ok(0.0); }
                let (n, incx, incy) = (as_blas_int(n)?, as_blas_int(incx)?, as_blas_int(incy)?);
                Ok(unsafe { $XDOT(n, x, incx, y, incy) })
            }

            fn dotu(&self, n: usize, x: &[$T], incx: usize, y: &[$T], incy: usize) -> Result<$T, DimensionError> {
                self.dotc(n, x, incx, y, incy)
            }

            fn her(
                &self, uplo: MatrixTriangle, n: usize, α: $T,
                x: &[$T], incx: usize, a: &mut [$T], lda: usize,
            ) -> Result<(), DimensionError> {
                check_vec(x.len(), n, incx)?;
                check_mat(a.len(), n, n, lda)?;
                if n == 0 { return Ok(()); }
                let uplo = uplo.transpose().as_blas_char();
                let (n, incx, lda) = (as_blas_int(n)?, as_blas_int(incx)?, as_blas_int(lda)?);
                unsafe { $XSYR(uplo, n, α, x, incx, a, lda); }
                Ok(())
            }

            fn trmv(
                &self, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag, n: usize,
                a: &[$T], lda: usize, x: &mut [$T], incx: usize,
            ) -> Result<(), DimensionError> {
                check_mat(a.len(), n, n, lda)?;
                check_vec(x.len(), n, incx)?;
                if n == 0 { return Ok(()); }
                let uplo  = uplo.transpose().as_blas_char();
                let trans = real_trans(trans.transpose());
                let diag  = diag.as_blas_char();
                let (n, lda, incx) = (as_blas_int(n)?, as_blas_int(lda)?, as_blas_int(incx)?);
                unsafe { $XTRMV(uplo, trans, diag, n, a, lda, x, incx); }
                Ok(())
            }

            fn gemm(
                &self, transa: MatrixShape, transb: MatrixShape, m: usize, n: usize, k: usize,
                α: $T, a: &[$T], lda: usize, b: &[$T], ldb: usize, β: $T, c: &mut [$T], ldc: usize,
            ) -> Result<(), DimensionError> {
                let (ar, ac) = stored_dims(transa.is_transposed(), m, k);
                let (br, bc) = stored_dims(transb.is_transposed(), k, n);
                check_mat(a.len(), ar, ac, lda)?;
                check_mat(b.len(), br, bc, ldb)?;
                check_mat(c.len(), m, n, ldc)?;
                if m == 0 || n == 0 { return Ok(()); }

                // C^T = op(B)^T op(A)^T in column-major terms
                let (transa, transb) = (real_trans(transa), real_trans(transb));
                let (m, n, k) = (as_blas_int(m)?, as_blas_int(n)?, as_blas_int(k)?);
                let (lda, ldb, ldc) = (as_blas_int(lda)?, as_blas_int(ldb)?, as_blas_int(ldc)?);
                unsafe { $XGEMM(transb, transa, n, m, k, α, b, ldb, a, lda, β, c, ldc); }
                Ok(())
            }

            fn herk(
                &self, uplo: MatrixTriangle, trans: MatrixShape, n: usize, k: usize,
                α: $T, a: &[$T], lda: usize, β: $T, c: &mut [$T], ldc: usize,
            ) -> Result<(), DimensionError> {
                let (ar, ac) = stored_dims(trans.is_transposed(), n, k);
                check_mat(a.len(), ar, ac, lda)?;
                check_mat(c.len(), n, n, ldc)?;
                if n == 0 { return Ok(()); }

                let uplo  = uplo.transpose().as_blas_char();
                let trans = real_trans(trans.transpose());
                let (n, k, lda, ldc) = (as_blas_int(n)?, as_blas_int(k)?, as_blas_int(lda)?, as_blas_int(ldc)?);
                unsafe { $XSYRK(uplo, trans, n, k, α, a, lda, β, c, ldc); }
                Ok(())
            }

            fn trsm(
                &self, side: MatrixSide, uplo: MatrixTriangle, trans: MatrixShape, diag: MatrixDiag,
                m: usize, n: usize, α: $T, a: &[$T], lda: usize, b: &mut [$T], ldb: usize,
            ) -> Result<(), DimensionError> {
                let ka = if side == MatrixSide::Left { m } else { n };
                check_mat(a.len(), ka, ka, lda)?;
                check_mat(b.len(), m, n, ldb)?;
                if m == 0 || n == 0 { return Ok(()); }

                let side  = side.flip().as_blas_char();
                let uplo  = uplo.transpose().as_blas_char();
                let trans = real_trans(trans);
                let diag  = diag.as_blas_char();
                let (m, n, lda, ldb) = (as_blas_int(m)?, as_blas_int(n)?, as_blas_int(lda)?, as_blas_int(ldb)?);
                unsafe { $XTRSM(side, uplo, trans, diag, n, m, α, a, lda, b, ldb); }
                Ok(())
            }
        }
    };
}

impl_blas_kernels!(f32, sscal, sdot, ssyr, strmv, sgemm, ssyrk, strsm);
impl_blas_kernels!(f64, dscal, ddot, dsyr, dtrmv, dgemm, dsyrk, dtrsm);
