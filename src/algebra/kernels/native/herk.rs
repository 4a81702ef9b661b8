#![allow(clippy::too_many_arguments)]
use crate::algebra::kernels::checks::*;
use crate::algebra::*;
use num_traits::Zero;

// implements self = C = αA*A^H + βC, or C = αA^H*A + βC
// if A is transposed.   Writes only to the `uplo` triangle
pub(crate) fn herk<T: BandScalar>(
    uplo: MatrixTriangle,
    trans: MatrixShape,
    n: usize,
    k: usize,
    α: T::Real,
    a: &[T],
    lda: usize,
    β: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<(), DimensionError> {
    let (ar, ac) = stored_dims(trans.is_transposed(), n, k);
    check_mat(a.len(), ar, ac, lda)?;
    check_mat(c.len(), n, n, ldc)?;

    if n == 0 {
        return Ok(());
    }

    // element (i,l) of the n x k matrix op(A).  A transposed
    // operand is always taken as conjugate transposed here
    let at = |i: usize, l: usize| {
        if trans.is_transposed() {
            a[l * lda + i].conj()
        } else {
            a[i * lda + l]
        }
    };
    let update = k > 0 && α != T::Real::zero();

    for i in 0..n {
        let cols = match uplo {
            MatrixTriangle::Triu => i..n,
            MatrixTriangle::Tril => 0..(i + 1),
        };
        for j in cols {
            let cij = &mut c[i * ldc + j];
            let mut v = if β == T::Real::zero() {
                T::zero()
            } else {
                cij.scale_real(β)
            };
            if update {
                let s = (0..k).fold(T::zero(), |acc, l| acc + at(i, l) * at(j, l).conj());
                v += s.scale_real(α);
            }
            *cij = if i == j { T::from_real(v.real()) } else { v };
        }
    }
    Ok(())
}

macro_rules! generate_test_herk {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let (m, n) = (2, 3);
            #[rustfmt::skip]
            let a: Vec<$fxx> = vec![
                1., 2., 3.,
                4., 5., 6.];

            let mut aat = vec![0. as $fxx; m * m];
            herk(MatrixTriangle::Triu, MatrixShape::N, m, n, 1.0, &a, n, 0.0, &mut aat, m)
                .unwrap();

            //NB: writes to upper triangle only
            assert_eq!(aat, vec![14., 32., 0., 77.]);

            let mut ata = vec![1. as $fxx; n * n];
            herk(MatrixTriangle::Triu, MatrixShape::T, n, m, 2.0, &a, n, 1.0, &mut ata, n)
                .unwrap();

            #[rustfmt::skip]
            assert_eq!(ata, vec![
                35., 45., 55.,
                 1., 59., 73.,
                 1.,  1., 91.]);

            let mut ata = vec![1. as $fxx; n * n];
            herk(MatrixTriangle::Tril, MatrixShape::C, n, m, 2.0, &a, n, 1.0, &mut ata, n)
                .unwrap();

            #[rustfmt::skip]
            assert_eq!(ata, vec![
                35.,  1.,  1.,
                45., 59.,  1.,
                55., 73., 91.]);

            let mut c = vec![0. as $fxx; 3];
            assert!(
                herk(MatrixTriangle::Triu, MatrixShape::N, m, n, 1.0, &a, n, 0.0, &mut c, m)
                    .is_err()
            );
        }
    };
}

generate_test_herk!(f32, test_herk_f32);
generate_test_herk!(f64, test_herk_f64);

#[test]
fn test_herk_complex() {
    use num_complex::Complex64;
    let a = vec![Complex64::new(1., 1.), Complex64::new(2., 0.)];
    let mut c = vec![Complex64::new(0., 0.); 4];

    herk(MatrixTriangle::Triu, MatrixShape::C, 2, 1, 1.0, &a, 2, 0.0, &mut c, 2).unwrap();
    assert_eq!(c[0], Complex64::new(2., 0.));
    assert_eq!(c[1], Complex64::new(2., -2.));
    assert_eq!(c[2], Complex64::new(0., 0.));
    assert_eq!(c[3], Complex64::new(4., 0.));
}
