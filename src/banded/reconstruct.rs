use crate::algebra::*;
use log::debug;
use num_traits::One;

// Overwrites a triangular band factor with U^H U (Triu) or L L^H (Tril).
// Rows are visited from last to first, so that every row is read in
// factor form exactly once before being overwritten.
pub(crate) fn reconstruct<T, K>(
    kernels: &K,
    shape: &BandShape,
    ab: &mut [T],
) -> Result<(), DimensionError>
where
    T: BandScalar,
    K: DenseKernels<T>,
{
    shape.check_buffer(ab.len())?;

    let BandShape { uplo, n, kd, ldab } = *shape;
    debug!("[band_product] n = {}, kd = {}, ldab = {}, {:?}", n, kd, ldab, uplo);

    if n == 0 {
        return Ok(());
    }
    // dense views into the band use this row stride
    let ld = ldab - 1;

    match uplo {
        MatrixTriangle::Triu => {
            for k in (0..n).rev() {
                let m = usize::min(kd, n - 1 - k);
                let d = ab[k * ldab].real();

                if m > 0 {
                    // trailing block += conj(u) conj(u)^H, with u the
                    // off-diagonal part of row k
                    let (head, tail) = ab.split_at_mut((k + 1) * ldab);
                    let u = &mut head[(k * ldab + 1)..];
                    lacgv(m, u, 1);
                    kernels.her(MatrixTriangle::Triu, m, T::Real::one(), u, 1, tail, ld)?;
                    lacgv(m, u, 1);
                }
                kernels.rscal(m + 1, d, &mut ab[(k * ldab)..], 1)?;
            }
        }
        MatrixTriangle::Tril => {
            for k in (0..n).rev() {
                let c = kd.saturating_sub(k);
                let m = kd - c;

                let (head, tail) = ab.split_at_mut(k * ldab);
                let row = &mut tail[c..(kd + 1)];

                let d = kernels.dotc(m + 1, row, 1, row, 1)?;
                row[m] = T::from_real(d.real());

                if m > 0 {
                    // row := conj(L_blk conj(row)), with L_blk the
                    // lower triangle of rows k-m..k-1
                    let l_blk = &head[((k - m) * ldab + kd)..];
                    let x = &mut row[..m];
                    lacgv(m, x, 1);
                    kernels.trmv(
                        MatrixTriangle::Tril,
                        MatrixShape::N,
                        MatrixDiag::NonUnit,
                        m,
                        l_blk,
                        ld,
                        x,
                        1,
                    )?;
                    lacgv(m, x, 1);
                }
            }
        }
    }
    Ok(())
}
