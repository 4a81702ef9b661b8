#![allow(clippy::too_many_arguments)]
use super::op_elem;
use crate::algebra::kernels::checks::*;
use crate::algebra::*;

// solves op(A) X = αB (Left) or X op(A) = αB (Right), with
// the solution X overwriting B
pub(crate) fn trsm<T: BandScalar>(
    side: MatrixSide,
    uplo: MatrixTriangle,
    trans: MatrixShape,
    diag: MatrixDiag,
    m: usize,
    n: usize,
    α: T,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), DimensionError> {
    let ka = match side {
        MatrixSide::Left => m,
        MatrixSide::Right => n,
    };
    check_mat(a.len(), ka, ka, lda)?;
    check_mat(b.len(), m, n, ldb)?;

    if m == 0 || n == 0 {
        return Ok(());
    }

    for i in 0..m {
        for v in b[i * ldb..(i * ldb + n)].iter_mut() {
            *v = if α == T::zero() { T::zero() } else { α * *v };
        }
    }
    if α == T::zero() {
        return Ok(());
    }

    let at = |i: usize, j: usize| op_elem(trans, a, lda, i, j);
    let unit = diag == MatrixDiag::Unit;
    let upper = (uplo == MatrixTriangle::Triu) != trans.is_transposed();

    match side {
        MatrixSide::Left => {
            // one column of B at a time.  Backward substitution
            // for upper triangular op(A), forward otherwise
            let order = |t: usize| if upper { m - 1 - t } else { t };
            for col in 0..n {
                for t in 0..m {
                    let i = order(t);
                    let others = if upper { (i + 1)..m } else { 0..i };
                    let mut s = b[i * ldb + col];
                    for j in others {
                        s -= at(i, j) * b[j * ldb + col];
                    }
                    b[i * ldb + col] = if unit { s } else { s / at(i, i) };
                }
            }
        }
        MatrixSide::Right => {
            // one row of B at a time
            let order = |t: usize| if upper { t } else { n - 1 - t };
            for r in 0..m {
                let row = &mut b[r * ldb..(r * ldb + n)];
                for t in 0..n {
                    let j = order(t);
                    let others = if upper { 0..j } else { (j + 1)..n };
                    let mut s = row[j];
                    for i in others {
                        s -= row[i] * at(i, j);
                    }
                    row[j] = if unit { s } else { s / at(j, j) };
                }
            }
        }
    }
    Ok(())
}

macro_rules! generate_test_trsm {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            use MatrixDiag::*;
            use MatrixShape::*;
            use MatrixSide::*;
            use MatrixTriangle::*;

            #[rustfmt::skip]
            let u: Vec<$fxx> = vec![
                2., 1.,
                0., 4.];
            #[rustfmt::skip]
            let l: Vec<$fxx> = vec![
                2., 0.,
                1., 4.];
            let b0: Vec<$fxx> = vec![4., 6., 8., 8.];

            let mut b = b0.clone();
            trsm(Left, Triu, N, NonUnit, 2, 2, 1.0, &u, 2, &mut b, 2).unwrap();
            assert_eq!(b, vec![1., 2., 2., 2.]);

            let mut b = b0.clone();
            trsm(Left, Triu, N, NonUnit, 2, 2, 2.0, &u, 2, &mut b, 2).unwrap();
            assert_eq!(b, vec![2., 4., 4., 4.]);

            let mut b = b0.clone();
            trsm(Left, Triu, T, NonUnit, 2, 2, 1.0, &u, 2, &mut b, 2).unwrap();
            assert_eq!(b, vec![2., 3., 1.5, 1.25]);

            let mut b = b0.clone();
            trsm(Right, Triu, N, NonUnit, 2, 2, 1.0, &u, 2, &mut b, 2).unwrap();
            assert_eq!(b, vec![2., 1., 4., 1.]);

            // X L^T = B is the same system as X U = B
            let mut b = b0.clone();
            trsm(Right, Tril, C, NonUnit, 2, 2, 1.0, &l, 2, &mut b, 2).unwrap();
            assert_eq!(b, vec![2., 1., 4., 1.]);

            // padded leading dimension on B
            let mut b: Vec<$fxx> = vec![4., 6., -1., 8., 8.];
            trsm(Left, Tril, N, Unit, 2, 2, 1.0, &l, 2, &mut b, 3).unwrap();
            assert_eq!(b, vec![4., 6., -1., 4., 2.]);

            let mut b = b0.clone();
            assert!(trsm(Left, Triu, N, NonUnit, 3, 1, 1.0, &u, 2, &mut b, 1).is_err());
        }
    };
}

generate_test_trsm!(f32, test_trsm_f32);
generate_test_trsm!(f64, test_trsm_f64);

#[test]
fn test_trsm_complex() {
    use num_complex::Complex64;
    let i = Complex64::new(0., 1.);
    let one = Complex64::new(1., 0.);
    let zero = Complex64::new(0., 0.);

    // U = [1 i; 0 2], solve U^H X = B with X = [1; 1]
    let u = vec![one, i, zero, 2. * one];
    // U^H = [1 0; -i 2], U^H X = [1; 2 - i]
    let mut b = vec![one, 2. * one - i];
    trsm(
        MatrixSide::Left,
        MatrixTriangle::Triu,
        MatrixShape::C,
        MatrixDiag::NonUnit,
        2,
        1,
        one,
        &u,
        2,
        &mut b,
        1,
    )
    .unwrap();
    assert_eq!(b, vec![one, one]);
}
