#![allow(clippy::too_many_arguments)]
use super::op_elem;
use crate::algebra::kernels::checks::*;
use crate::algebra::*;

// implements C = αop(A)op(B) + βC
pub(crate) fn gemm<T: BandScalar>(
    transa: MatrixShape,
    transb: MatrixShape,
    m: usize,
    n: usize,
    k: usize,
    α: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    β: T,
    c: &mut [T],
    ldc: usize,
) -> Result<(), DimensionError> {
    let (ar, ac) = stored_dims(transa.is_transposed(), m, k);
    let (br, bc) = stored_dims(transb.is_transposed(), k, n);
    check_mat(a.len(), ar, ac, lda)?;
    check_mat(b.len(), br, bc, ldb)?;
    check_mat(c.len(), m, n, ldc)?;

    if m == 0 || n == 0 {
        return Ok(());
    }

    for i in 0..m {
        let row = &mut c[i * ldc..(i * ldc + n)];
        for cij in row.iter_mut() {
            // NB: β = 0 overwrites C, so that NaNs in C are not propagated
            *cij = if β == T::zero() { T::zero() } else { β * *cij };
        }
    }

    if k == 0 || α == T::zero() {
        return Ok(());
    }

    for i in 0..m {
        for j in 0..n {
            let s = (0..k).fold(T::zero(), |acc, l| {
                acc + op_elem(transa, a, lda, i, l) * op_elem(transb, b, ldb, l, j)
            });
            c[i * ldc + j] += α * s;
        }
    }
    Ok(())
}

macro_rules! generate_test_gemm {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let (m, n, k) = (2, 4, 3);
            #[rustfmt::skip]
            let a: Vec<$fxx> = vec![
                1., 2., 3.,
                4., 5., 6.];
            #[rustfmt::skip]
            let b: Vec<$fxx> = vec![
                1.,  2.,  3.,  4.,
                5.,  6.,  7.,  8.,
                9., 10., 11., 12.];
            let mut c: Vec<$fxx> = vec![2., 6., 0., 4., 7., 2., 7., 2.];

            gemm(MatrixShape::N, MatrixShape::N, m, n, k, 1.0, &a, k, &b, n, 1.0, &mut c, n)
                .unwrap();
            assert_eq!(c, vec![40., 50., 50., 60., 90., 100., 120., 130.]);

            // transposed multiply, C = B^T A^T
            let mut c: Vec<$fxx> = vec![<$fxx>::NAN; 8];
            gemm(MatrixShape::T, MatrixShape::T, n, m, k, 1.0, &b, n, &a, k, 0.0, &mut c, m)
                .unwrap();
            assert_eq!(c, vec![38., 83., 44., 98., 50., 113., 56., 128.]);

            // output block too short
            let mut c: Vec<$fxx> = vec![0.; 7];
            assert_eq!(
                gemm(MatrixShape::N, MatrixShape::N, m, n, k, 1.0, &a, k, &b, n, 0.0, &mut c, n),
                Err(DimensionError::BufferLength { len: 7, min: 8 })
            );

            // inner dimensions that do not match the operand storage
            let mut c: Vec<$fxx> = vec![0.; 8];
            assert!(
                gemm(MatrixShape::N, MatrixShape::N, m, n, 4, 1.0, &a, 3, &b, n, 0.0, &mut c, n)
                    .is_err()
            );
        }
    };
}

generate_test_gemm!(f32, test_gemm_f32);
generate_test_gemm!(f64, test_gemm_f64);

#[test]
fn test_gemm_complex() {
    use num_complex::Complex64;
    let i = Complex64::new(0., 1.);
    let one = Complex64::new(1., 0.);
    let zero = Complex64::new(0., 0.);

    // A = [1 i], C = A^H A (2x2)
    let a = vec![one, i];
    let mut c = vec![zero; 4];
    gemm(MatrixShape::C, MatrixShape::N, 2, 2, 1, one, &a, 2, &a, 2, zero, &mut c, 2).unwrap();
    assert_eq!(c, vec![one, i, -i, one]);
}
