#![allow(clippy::too_many_arguments)]
use super::op_elem;
use crate::algebra::kernels::checks::*;
use crate::algebra::*;

// x = op(A) x, A triangular.  Rows are updated in an order that
// only ever reads entries of x that have not yet been overwritten.
pub(crate) fn trmv<T: BandScalar>(
    uplo: MatrixTriangle,
    trans: MatrixShape,
    diag: MatrixDiag,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: usize,
) -> Result<(), DimensionError> {
    check_mat(a.len(), n, n, lda)?;
    check_vec(x.len(), n, incx)?;

    if n == 0 {
        return Ok(());
    }

    let at = |i: usize, j: usize| op_elem(trans, a, lda, i, j);
    let unit = diag == MatrixDiag::Unit;

    // triangle of op(A) holding the nonzeros
    let upper = (uplo == MatrixTriangle::Triu) != trans.is_transposed();

    if upper {
        for i in 0..n {
            let xi = x[i * incx];
            let mut s = if unit { xi } else { at(i, i) * xi };
            for j in (i + 1)..n {
                s += at(i, j) * x[j * incx];
            }
            x[i * incx] = s;
        }
    } else {
        for i in (0..n).rev() {
            let xi = x[i * incx];
            let mut s = if unit { xi } else { at(i, i) * xi };
            for j in 0..i {
                s += at(i, j) * x[j * incx];
            }
            x[i * incx] = s;
        }
    }
    Ok(())
}

macro_rules! generate_test_trmv {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            use MatrixDiag::*;
            use MatrixShape::*;
            use MatrixTriangle::*;

            #[rustfmt::skip]
            let u: Vec<$fxx> = vec![
                2., 1.,
                0., 4.];
            #[rustfmt::skip]
            let l: Vec<$fxx> = vec![
                2., 0.,
                1., 4.];

            let mut x: Vec<$fxx> = vec![1., 1.];
            trmv(Triu, N, NonUnit, 2, &u, 2, &mut x, 1).unwrap();
            assert_eq!(x, vec![3., 4.]);

            let mut x: Vec<$fxx> = vec![1., 1.];
            trmv(Triu, T, NonUnit, 2, &u, 2, &mut x, 1).unwrap();
            assert_eq!(x, vec![2., 5.]);

            let mut x: Vec<$fxx> = vec![1., 1.];
            trmv(Triu, N, Unit, 2, &u, 2, &mut x, 1).unwrap();
            assert_eq!(x, vec![2., 1.]);

            // strided vector
            let mut x: Vec<$fxx> = vec![1., 99., 2.];
            trmv(Tril, N, NonUnit, 2, &l, 2, &mut x, 2).unwrap();
            assert_eq!(x, vec![2., 99., 9.]);

            let mut x: Vec<$fxx> = vec![1., 2.];
            trmv(Tril, C, NonUnit, 2, &l, 2, &mut x, 1).unwrap();
            assert_eq!(x, vec![4., 8.]);

            let mut x: Vec<$fxx> = vec![1.];
            assert!(trmv(Tril, N, NonUnit, 2, &l, 2, &mut x, 1).is_err());
        }
    };
}

generate_test_trmv!(f32, test_trmv_f32);
generate_test_trmv!(f64, test_trmv_f64);

#[test]
fn test_trmv_complex() {
    use num_complex::Complex64;
    let i = Complex64::new(0., 1.);
    let one = Complex64::new(1., 0.);
    let zero = Complex64::new(0., 0.);

    // U = [1 i; 0 1]
    let u = vec![one, i, zero, one];

    let mut x = vec![one, one];
    trmv(MatrixTriangle::Triu, MatrixShape::N, MatrixDiag::NonUnit, 2, &u, 2, &mut x, 1).unwrap();
    assert_eq!(x, vec![one + i, one]);

    // U^H = [1 0; -i 1]
    let mut x = vec![one, one];
    trmv(MatrixTriangle::Triu, MatrixShape::C, MatrixDiag::NonUnit, 2, &u, 2, &mut x, 1).unwrap();
    assert_eq!(x, vec![one, one - i]);

    // U^T = [1 0; i 1]
    let mut x = vec![one, one];
    trmv(MatrixTriangle::Triu, MatrixShape::T, MatrixDiag::NonUnit, 2, &u, 2, &mut x, 1).unwrap();
    assert_eq!(x, vec![one, one + i]);
}
