use crate::algebra::kernels::checks::check_mat;
use crate::algebra::*;
use num_traits::{Float, One, Zero};

// Solves A X = B in place using a band Cholesky factor of A.  B is
// row-major `n x nrhs` with row stride `ldb`.  Each column of B is
// solved with two band triangular substitutions.
#[allow(clippy::too_many_arguments)]
pub(crate) fn solve<T, K>(
    kernels: &K,
    shape: &BandShape,
    ab: &[T],
    b: &mut [T],
    nrhs: usize,
    ldb: usize,
) -> Result<(), DimensionError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    shape.check_buffer(ab.len())?;
    check_mat(b.len(), shape.n, nrhs, ldb)?;

    let BandShape { uplo, n, kd, ldab } = *shape;
    let ld = ldab - 1;

    for col in 0..nrhs {
        match uplo {
            MatrixTriangle::Triu => {
                // U^H y = b
                for i in 0..n {
                    let m = usize::min(i, kd);
                    let s = if m > 0 {
                        let u = &ab[((i - m) * ldab + m)..];
                        kernels.dotc(m, u, ld, &b[((i - m) * ldb + col)..], ldb)?
                    } else {
                        T::zero()
                    };
                    let bi = &mut b[i * ldb + col];
                    *bi = (*bi - s) / ab[i * ldab];
                }
                // U x = y
                for i in (0..n).rev() {
                    let m = usize::min(kd, n - 1 - i);
                    let s = if m > 0 {
                        let u = &ab[(i * ldab + 1)..];
                        kernels.dotu(m, u, 1, &b[((i + 1) * ldb + col)..], ldb)?
                    } else {
                        T::zero()
                    };
                    let bi = &mut b[i * ldb + col];
                    *bi = (*bi - s) / ab[i * ldab];
                }
            }
            MatrixTriangle::Tril => {
                // L y = b
                for i in 0..n {
                    let m = usize::min(i, kd);
                    let s = if m > 0 {
                        let l = &ab[(i * ldab + kd - m)..];
                        kernels.dotu(m, l, 1, &b[((i - m) * ldb + col)..], ldb)?
                    } else {
                        T::zero()
                    };
                    let bi = &mut b[i * ldb + col];
                    *bi = (*bi - s) / ab[i * ldab + kd];
                }
                // L^H x = y
                for i in (0..n).rev() {
                    let m = usize::min(kd, n - 1 - i);
                    let s = if m > 0 {
                        let l = &ab[((i + 1) * ldab + kd - 1)..];
                        kernels.dotc(m, l, ld, &b[((i + 1) * ldb + col)..], ldb)?
                    } else {
                        T::zero()
                    };
                    let bi = &mut b[i * ldb + col];
                    *bi = (*bi - s) / ab[i * ldab + kd];
                }
            }
        }
    }
    Ok(())
}

// log(det(A)) for A = U^H U or L L^H, given the factor
pub(crate) fn logdet<T>(shape: &BandShape, ab: &[T]) -> T::Real
where
    T: BandScalar,
{
    let two = T::Real::one() + T::Real::one();
    let sum = (0..shape.n).fold(T::Real::zero(), |acc, i| acc + ab[shape.diag_index(i)].real().ln());
    two * sum
}
