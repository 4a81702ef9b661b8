use crate::algebra::kernels::checks::*;
use crate::algebra::*;
use itertools::izip;

pub(crate) fn scal<T: BandScalar>(
    n: usize,
    α: T,
    x: &mut [T],
    incx: usize,
) -> Result<(), DimensionError> {
    check_vec(x.len(), n, incx)?;
    x.iter_mut().step_by(incx).take(n).for_each(|v| *v *= α);
    Ok(())
}

pub(crate) fn rscal<T: BandScalar>(
    n: usize,
    α: T::Real,
    x: &mut [T],
    incx: usize,
) -> Result<(), DimensionError> {
    check_vec(x.len(), n, incx)?;
    x.iter_mut()
        .step_by(incx)
        .take(n)
        .for_each(|v| *v = v.scale_real(α));
    Ok(())
}

pub(crate) fn dotc<T: BandScalar>(
    n: usize,
    x: &[T],
    incx: usize,
    y: &[T],
    incy: usize,
) -> Result<T, DimensionError> {
    check_vec(x.len(), n, incx)?;
    check_vec(y.len(), n, incy)?;
    let out = izip!(x.iter().step_by(incx), y.iter().step_by(incy))
        .take(n)
        .fold(T::zero(), |acc, (&x, &y)| acc + x.conj() * y);
    Ok(out)
}

pub(crate) fn dotu<T: BandScalar>(
    n: usize,
    x: &[T],
    incx: usize,
    y: &[T],
    incy: usize,
) -> Result<T, DimensionError> {
    check_vec(x.len(), n, incx)?;
    check_vec(y.len(), n, incy)?;
    let out = izip!(x.iter().step_by(incx), y.iter().step_by(incy))
        .take(n)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y);
    Ok(out)
}

macro_rules! generate_test_level1 {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let x: Vec<$fxx> = vec![1., 2., 3.];
            let y: Vec<$fxx> = vec![4., 0., 5., 0., 6.];
            assert_eq!(dotc(3, &x, 1, &y, 2).unwrap(), 32.);
            assert_eq!(dotu(3, &x, 1, &y, 2).unwrap(), 32.);

            let mut z: Vec<$fxx> = vec![1., -1., 2., -1., 3.];
            scal(3, 2.0, &mut z, 2).unwrap();
            assert_eq!(z, vec![2., -1., 4., -1., 6.]);
            rscal(2, 0.5, &mut z, 1).unwrap();
            assert_eq!(z, vec![1., -0.5, 4., -1., 6.]);

            // vector too short for the requested stride
            assert_eq!(
                dotc(3, &x, 2, &y, 1),
                Err(DimensionError::BufferLength { len: 3, min: 5 })
            );
            assert_eq!(scal(1, 2.0, &mut z, 0), Err(DimensionError::ZeroIncrement));

            // empty vectors are fine
            assert_eq!(dotu::<$fxx>(0, &[], 1, &[], 1).unwrap(), 0.);
        }
    };
}

generate_test_level1!(f32, test_level1_f32);
generate_test_level1!(f64, test_level1_f64);

#[test]
fn test_level1_complex() {
    use num_complex::Complex64;
    let x = vec![Complex64::new(1., 1.), Complex64::new(2., -1.)];
    let y = vec![Complex64::new(3., 0.), Complex64::new(0., 1.)];

    assert_eq!(dotc(2, &x, 1, &y, 1).unwrap(), Complex64::new(2., -1.));
    assert_eq!(dotu(2, &x, 1, &y, 1).unwrap(), Complex64::new(4., 5.));

    let mut z = x.clone();
    scal(2, Complex64::new(0., 1.), &mut z, 1).unwrap();
    assert_eq!(z, vec![Complex64::new(-1., 1.), Complex64::new(1., 2.)]);

    let mut z = x;
    rscal(2, 2., &mut z, 1).unwrap();
    assert_eq!(z, vec![Complex64::new(2., 2.), Complex64::new(4., -2.)]);
}
