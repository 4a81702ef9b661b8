#![allow(non_snake_case)]

use crate::algebra::*;
use log::{debug, trace};
use num_traits::{Float, One, Zero};

// reusable scratch for the band factorization
#[derive(Debug, Clone)]
pub(crate) struct BandWorkspace<T> {
    // strided column of a lower factor
    pub x: Vec<T>,
    // off-diagonal block A12 / A21
    pub w12: Vec<T>,
    // in-band triangle of A13 / A31
    pub w13: Vec<T>,
}

impl<T> BandWorkspace<T>
where
    T: BandScalar,
{
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            w12: Vec::new(),
            w13: Vec::new(),
        }
    }
}

fn resize_zeroed<T: BandScalar>(v: &mut Vec<T>, len: usize) {
    v.clear();
    v.resize(len, T::zero());
}

// Unblocked band Cholesky factorization.  On return the band holds U
// with A = U^H U (Triu) or L with A = L L^H (Tril).  Stops at the first
// pivot whose real part is not strictly positive.
pub(crate) fn factor_unblocked<T, K>(
    kernels: &K,
    shape: &BandShape,
    ab: &mut [T],
    work: &mut BandWorkspace<T>,
) -> Result<(), BandFactorizationError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    shape.check_buffer(ab.len())?;

    let BandShape { uplo, n, kd, ldab } = *shape;
    let ld = ldab.saturating_sub(1);
    let one = T::Real::one();

    for j in 0..n {
        let dj = shape.diag_index(j);
        let ajj = ab[dj].real();
        if !(ajj > T::Real::zero()) {
            return Err(BandFactorizationError::NotPositiveDefinite(j));
        }
        let ajj = ajj.sqrt();
        ab[dj] = T::from_real(ajj);

        let kn = usize::min(kd, n - 1 - j);
        if kn == 0 {
            continue;
        }

        match uplo {
            MatrixTriangle::Triu => {
                // scale row j, then A22 -= conj(u) conj(u)^H
                kernels.rscal(kn, one / ajj, &mut ab[(dj + 1)..], 1)?;
                let (head, tail) = ab.split_at_mut((j + 1) * ldab);
                let u = &mut head[(dj + 1)..];
                lacgv(kn, u, 1);
                kernels.her(MatrixTriangle::Triu, kn, -one, u, 1, tail, ld)?;
                lacgv(kn, u, 1);
            }
            MatrixTriangle::Tril => {
                // scale column j, then A22 -= l l^H
                let col = (j + 1) * ldab + kd - 1;
                kernels.rscal(kn, one / ajj, &mut ab[col..], ld)?;

                resize_zeroed(&mut work.x, kn);
                for (t, xt) in work.x.iter_mut().enumerate() {
                    *xt = ab[col + t * ld];
                }
                let a22 = &mut ab[((j + 1) * ldab + kd)..];
                kernels.her(MatrixTriangle::Tril, kn, -one, &work.x, 1, a22, ld)?;
            }
        }
    }
    Ok(())
}

// Blocked band Cholesky factorization with block size nb, for
// 1 < nb <= kd.  Diagonal blocks are factored with the unblocked
// kernel and the remainder of each block row is updated with level 3
// operations on dense views of the band.
pub(crate) fn factor_blocked<T, K>(
    kernels: &K,
    shape: &BandShape,
    ab: &mut [T],
    nb: usize,
    work: &mut BandWorkspace<T>,
) -> Result<(), BandFactorizationError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    shape.check_buffer(ab.len())?;

    let BandShape { uplo, n, kd, ldab } = *shape;
    if nb <= 1 || nb > kd {
        return Err(DimensionError::IncompatibleDimension.into());
    }
    let ld = ldab - 1;

    for i in (0..n).step_by(nb) {
        let ib = usize::min(nb, n - i);
        let i2 = usize::min(kd - ib, n - i - ib);
        let i3 = usize::min(ib, (n - i).saturating_sub(kd));
        trace!("[band_cholesky] block at {}: ib = {}, i2 = {}, i3 = {}", i, ib, i2, i3);

        // factor the diagonal block, a band of width ib-1 in place
        let sub = BandShape::new(uplo, ib, ib - 1, ldab)?;
        let start = match uplo {
            MatrixTriangle::Triu => i * ldab,
            MatrixTriangle::Tril => i * ldab + kd - (ib - 1),
        };
        factor_unblocked(kernels, &sub, &mut ab[start..], work).map_err(|e| e.offset_pivot(i))?;

        match uplo {
            MatrixTriangle::Triu => {
                update_upper(kernels, ab, work, i, ib, i2, i3, kd, ldab, ld)?;
            }
            MatrixTriangle::Tril => {
                update_lower(kernels, ab, work, i, ib, i2, i3, kd, ldab, ld)?;
            }
        }
    }
    Ok(())
}

// Block row update for an upper factor.  With U11 the factored
// diagonal block at row i:
//
//   A12 = U11^{-H} A12,  A22 -= A12^H A12
//   A13 = U11^{-H} A13,  A23 -= A12^H A13,  A33 -= A13^H A13
//
// where only the lower triangle of A13 lies inside the band.
#[allow(clippy::too_many_arguments)]
fn update_upper<T, K>(
    kernels: &K,
    ab: &mut [T],
    work: &mut BandWorkspace<T>,
    i: usize,
    ib: usize,
    i2: usize,
    i3: usize,
    kd: usize,
    ldab: usize,
    ld: usize,
) -> Result<(), DimensionError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    let one = T::Real::one();
    let a11 = i * ldab;

    if i2 > 0 {
        let w12 = &mut work.w12;
        resize_zeroed(w12, ib * i2);
        for ii in 0..ib {
            for jj in 0..i2 {
                w12[ii * i2 + jj] = ab[a11 + ib + ii * ld + jj];
            }
        }

        kernels.trsm(
            MatrixSide::Left,
            MatrixTriangle::Triu,
            MatrixShape::C,
            MatrixDiag::NonUnit,
            ib,
            i2,
            T::one(),
            &ab[a11..],
            ld,
            w12,
            i2,
        )?;

        for ii in 0..ib {
            for jj in 0..i2 {
                ab[a11 + ib + ii * ld + jj] = w12[ii * i2 + jj];
            }
        }

        let a22 = &mut ab[((i + ib) * ldab)..];
        kernels.herk(MatrixTriangle::Triu, MatrixShape::C, i2, ib, -one, w12, i2, one, a22, ld)?;
    }

    if i3 > 0 {
        // A13 starts at column i+kd, so that row ii holds columns 0..=ii
        let a13 = a11 + kd;
        let w13 = &mut work.w13;
        resize_zeroed(w13, ib * i3);
        for ii in 0..ib {
            for jj in 0..=usize::min(ii, i3 - 1) {
                w13[ii * i3 + jj] = ab[a13 + ii * ld + jj];
            }
        }

        kernels.trsm(
            MatrixSide::Left,
            MatrixTriangle::Triu,
            MatrixShape::C,
            MatrixDiag::NonUnit,
            ib,
            i3,
            T::one(),
            &ab[a11..],
            ld,
            w13,
            i3,
        )?;

        if i2 > 0 {
            let a23 = &mut ab[((i + ib) * ldab + kd - ib)..];
            kernels.gemm(
                MatrixShape::C,
                MatrixShape::N,
                i2,
                i3,
                ib,
                -T::one(),
                &work.w12,
                i2,
                w13,
                i3,
                T::one(),
                a23,
                ld,
            )?;
        }

        let a33 = &mut ab[((i + kd) * ldab)..];
        kernels.herk(MatrixTriangle::Triu, MatrixShape::C, i3, ib, -one, w13, i3, one, a33, ld)?;

        for ii in 0..ib {
            for jj in 0..=usize::min(ii, i3 - 1) {
                ab[a13 + ii * ld + jj] = w13[ii * i3 + jj];
            }
        }
    }
    Ok(())
}

// Block row update for a lower factor.  With L11 the factored
// diagonal block at row i:
//
//   A21 = A21 L11^{-H},  A22 -= A21 A21^H
//   A31 = A31 L11^{-H},  A32 -= A31 A21^H,  A33 -= A31 A31^H
//
// where only the upper triangle of A31 lies inside the band.
#[allow(clippy::too_many_arguments)]
fn update_lower<T, K>(
    kernels: &K,
    ab: &mut [T],
    work: &mut BandWorkspace<T>,
    i: usize,
    ib: usize,
    i2: usize,
    i3: usize,
    kd: usize,
    ldab: usize,
    ld: usize,
) -> Result<(), DimensionError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    let one = T::Real::one();
    let a11 = i * ldab + kd;

    if i2 > 0 {
        let a21 = (i + ib) * ldab + kd - ib;
        let w21 = &mut work.w12;
        resize_zeroed(w21, i2 * ib);
        for ii in 0..i2 {
            for jj in 0..ib {
                w21[ii * ib + jj] = ab[a21 + ii * ld + jj];
            }
        }

        kernels.trsm(
            MatrixSide::Right,
            MatrixTriangle::Tril,
            MatrixShape::C,
            MatrixDiag::NonUnit,
            i2,
            ib,
            T::one(),
            &ab[a11..],
            ld,
            w21,
            ib,
        )?;

        for ii in 0..i2 {
            for jj in 0..ib {
                ab[a21 + ii * ld + jj] = w21[ii * ib + jj];
            }
        }

        let a22 = &mut ab[((i + ib) * ldab + kd)..];
        kernels.herk(MatrixTriangle::Tril, MatrixShape::N, i2, ib, -one, w21, ib, one, a22, ld)?;
    }

    if i3 > 0 {
        // A31 starts at row i+kd, so that row ii holds columns ii..ib
        let a31 = (i + kd) * ldab;
        let w31 = &mut work.w13;
        resize_zeroed(w31, i3 * ib);
        for ii in 0..i3 {
            for jj in ii..ib {
                w31[ii * ib + jj] = ab[a31 + ii * ld + jj];
            }
        }

        kernels.trsm(
            MatrixSide::Right,
            MatrixTriangle::Tril,
            MatrixShape::C,
            MatrixDiag::NonUnit,
            i3,
            ib,
            T::one(),
            &ab[a11..],
            ld,
            w31,
            ib,
        )?;

        if i2 > 0 {
            let a32 = &mut ab[((i + kd) * ldab + ib)..];
            kernels.gemm(
                MatrixShape::N,
                MatrixShape::C,
                i3,
                i2,
                ib,
                -T::one(),
                w31,
                ib,
                &work.w12,
                ib,
                T::one(),
                a32,
                ld,
            )?;
        }

        let a33 = &mut ab[((i + kd) * ldab + kd)..];
        kernels.herk(MatrixTriangle::Tril, MatrixShape::N, i3, ib, -one, w31, ib, one, a33, ld)?;

        for ii in 0..i3 {
            for jj in ii..ib {
                ab[a31 + ii * ld + jj] = w31[ii * ib + jj];
            }
        }
    }
    Ok(())
}

// Selects the blocked or unblocked factorization for the shape
pub(crate) fn factor<T, K>(
    kernels: &K,
    shape: &BandShape,
    ab: &mut [T],
    nb: Option<usize>,
    work: &mut BandWorkspace<T>,
) -> Result<(), BandFactorizationError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    let BandShape { uplo, n, kd, ldab } = *shape;

    let result = match nb {
        Some(nb) => {
            debug!(
                "[band_cholesky] n = {}, kd = {}, ldab = {}, {:?}: blocked, nb = {}",
                n, kd, ldab, uplo, nb
            );
            factor_blocked(kernels, shape, ab, nb, work)
        }
        None => {
            debug!(
                "[band_cholesky] n = {}, kd = {}, ldab = {}, {:?}: unblocked",
                n, kd, ldab, uplo
            );
            factor_unblocked(kernels, shape, ab, work)
        }
    };

    if let Err(BandFactorizationError::NotPositiveDefinite(k)) = result {
        debug!("[band_cholesky] non-positive pivot at index {}", k);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_unblocked_small() {
        // A = [4 2 0; 2 10 3; 0 3 2] = U^T U, U = [2 1 0; 0 3 1; 0 0 1]
        let mut work = BandWorkspace::new();

        let shape = BandShape::new(MatrixTriangle::Triu, 3, 1, 2).unwrap();
        let mut ab = vec![4., 2., 10., 3., 2., 9.];
        factor_unblocked(&NativeKernels, &shape, &mut ab, &mut work).unwrap();
        assert_eq!(ab, vec![2., 1., 3., 1., 1., 9.]);

        let shape = BandShape::new(MatrixTriangle::Tril, 3, 1, 2).unwrap();
        let mut ab = vec![9., 4., 2., 10., 3., 2.];
        factor_unblocked(&NativeKernels, &shape, &mut ab, &mut work).unwrap();
        assert_eq!(ab, vec![9., 2., 1., 3., 1., 1.]);
    }

    #[test]
    fn test_factor_unblocked_not_posdef() {
        // A = [1 2; 2 1]
        let mut work = BandWorkspace::new();
        let shape = BandShape::new(MatrixTriangle::Triu, 2, 1, 2).unwrap();
        let mut ab = vec![1., 2., 1., 0.];
        assert_eq!(
            factor_unblocked(&NativeKernels, &shape, &mut ab, &mut work),
            Err(BandFactorizationError::NotPositiveDefinite(1))
        );

        let mut ab = vec![f64::NAN, 2., 1., 0.];
        assert_eq!(
            factor_unblocked(&NativeKernels, &shape, &mut ab, &mut work),
            Err(BandFactorizationError::NotPositiveDefinite(0))
        );
    }

    #[test]
    fn test_factor_unblocked_sqrt_pivots() {
        // A = [9 3; 3 5] = U^T U, U = [3 1; 0 2]
        let mut work = BandWorkspace::new();
        let shape = BandShape::new(MatrixTriangle::Triu, 2, 1, 2).unwrap();

        let mut ab: Vec<f32> = vec![9., 3., 5., 0.];
        factor_unblocked(&NativeKernels, &shape, &mut ab, &mut work).unwrap();
        assert_eq!(ab, vec![3., 1., 2., 0.]);

        let mut work = BandWorkspace::new();
        let mut ab: Vec<f64> = vec![9., 3., 5., 0.];
        factor(&NativeKernels, &shape, &mut ab, None, &mut work).unwrap();
        assert_eq!(ab, vec![3., 1., 2., 0.]);
    }

    #[test]
    fn test_factor_blocked_bad_block_size() {
        let mut work = BandWorkspace::new();
        let shape = BandShape::new(MatrixTriangle::Triu, 4, 2, 3).unwrap();
        let mut ab = vec![1.0; shape.required_len()];
        assert!(factor_blocked(&NativeKernels, &shape, &mut ab, 3, &mut work).is_err());
        assert!(factor_blocked(&NativeKernels, &shape, &mut ab, 1, &mut work).is_err());
    }
}
