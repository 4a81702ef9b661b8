use crate::algebra::kernels::checks::*;
use crate::algebra::*;
use num_traits::Zero;

// A = A + α x x^H, touching only the `uplo` triangle.  The
// imaginary parts of the diagonal are set to zero on exit.
pub(crate) fn her<T: BandScalar>(
    uplo: MatrixTriangle,
    n: usize,
    α: T::Real,
    x: &[T],
    incx: usize,
    a: &mut [T],
    lda: usize,
) -> Result<(), DimensionError> {
    check_vec(x.len(), n, incx)?;
    check_mat(a.len(), n, n, lda)?;

    if n == 0 || α == T::Real::zero() {
        return Ok(());
    }

    for i in 0..n {
        let xi = x[i * incx];
        let axi = xi.scale_real(α);
        let cols = match uplo {
            MatrixTriangle::Triu => (i + 1)..n,
            MatrixTriangle::Tril => 0..i,
        };
        let row = &mut a[i * lda..];
        for j in cols {
            row[j] += axi * x[j * incx].conj();
        }
        row[i] = T::from_real(row[i].real() + α * xi.abs2());
    }
    Ok(())
}

macro_rules! generate_test_her {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let x: Vec<$fxx> = vec![1., 7., 2.];

            let mut a = vec![0. as $fxx; 4];
            her(MatrixTriangle::Triu, 2, 1.0, &x, 2, &mut a, 2).unwrap();
            assert_eq!(a, vec![1., 2., 0., 4.]);

            let mut a = vec![1. as $fxx; 4];
            her(MatrixTriangle::Tril, 2, -1.0, &x, 2, &mut a, 2).unwrap();
            assert_eq!(a, vec![0., 1., -1., -3.]);

            // padded leading dimension, padding untouched
            let mut a = vec![9. as $fxx; 5];
            a[0] = 0.;
            a[1] = 0.;
            a[4] = 0.;
            her(MatrixTriangle::Triu, 2, 1.0, &x, 2, &mut a, 3).unwrap();
            assert_eq!(a, vec![1., 2., 9., 9., 4.]);

            // leading dimension too small
            let mut a = vec![0. as $fxx; 4];
            assert_eq!(
                her(MatrixTriangle::Triu, 2, 1.0, &x, 2, &mut a, 1),
                Err(DimensionError::LeadingDimension { ld: 1, min: 2 })
            );
        }
    };
}

generate_test_her!(f32, test_her_f32);
generate_test_her!(f64, test_her_f64);

#[test]
fn test_her_complex() {
    use num_complex::Complex64;
    let x = vec![Complex64::new(1., 1.), Complex64::new(2., 0.)];

    let mut a = vec![Complex64::new(0., 0.); 4];
    her(MatrixTriangle::Triu, 2, 1.0, &x, 1, &mut a, 2).unwrap();
    assert_eq!(
        a,
        vec![
            Complex64::new(2., 0.),
            Complex64::new(2., 2.),
            Complex64::new(0., 0.),
            Complex64::new(4., 0.),
        ]
    );

    let mut a = vec![Complex64::new(0., 0.); 4];
    her(MatrixTriangle::Tril, 2, 1.0, &x, 1, &mut a, 2).unwrap();
    assert_eq!(a[2], Complex64::new(2., -2.));
    assert_eq!(a[1], Complex64::new(0., 0.));
}
