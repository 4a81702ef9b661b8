use super::FloatT;
use num_complex::Complex;
use num_traits::{Num, NumAssign, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Element type for band matrices and the dense kernels.
///
/// Real types (`f32`, `f64`) and their complex counterparts
/// (`Complex<f32>`, `Complex<f64>`) implement this trait.  For real
/// types every "Hermitian" operation reduces to its symmetric counterpart,
/// since conjugation is the identity.
pub trait BandScalar:
    'static
    + Copy
    + Send
    + Sync
    + Default
    + Debug
    + PartialEq
    + Num
    + NumAssign
    + Neg<Output = Self>
{
    /// real type underlying the element type
    type Real: FloatT;

    /// `true` for complex element types
    const IS_COMPLEX: bool;

    /// Complex conjugate
    fn conj(self) -> Self;

    /// Real part
    fn real(self) -> Self::Real;

    /// Imaginary part.  Always zero for real types.
    fn imag(self) -> Self::Real;

    /// Embed a real value
    fn from_real(re: Self::Real) -> Self;

    /// Squared modulus `|x|^2`
    fn abs2(self) -> Self::Real;

    /// Modulus `|x|`
    fn modulus(self) -> Self::Real;

    /// Scale by a real value
    fn scale_real(self, r: Self::Real) -> Self;
}

macro_rules! impl_band_scalar_real {
    ($T:ty) => {
        impl BandScalar for $T {
            type Real = $T;
            const IS_COMPLEX: bool = false;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn real(self) -> $T {
                self
            }
            #[inline]
            fn imag(self) -> $T {
                <$T>::zero()
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                re
            }
            #[inline]
            fn abs2(self) -> $T {
                self * self
            }
            #[inline]
            fn modulus(self) -> $T {
                self.abs()
            }
            #[inline]
            fn scale_real(self, r: $T) -> Self {
                self * r
            }
        }
    };
}

impl_band_scalar_real!(f32);
impl_band_scalar_real!(f64);

impl<R> BandScalar for Complex<R>
where
    R: FloatT,
{
    type Real = R;
    const IS_COMPLEX: bool = true;

    #[inline]
    fn conj(self) -> Self {
        Complex::new(self.re, -self.im)
    }
    #[inline]
    fn real(self) -> R {
        self.re
    }
    #[inline]
    fn imag(self) -> R {
        self.im
    }
    #[inline]
    fn from_real(re: R) -> Self {
        Complex::new(re, R::zero())
    }
    #[inline]
    fn abs2(self) -> R {
        self.re * self.re + self.im * self.im
    }
    #[inline]
    fn modulus(self) -> R {
        self.re.hypot(self.im)
    }
    #[inline]
    fn scale_real(self, r: R) -> Self {
        Complex::new(self.re * r, self.im * r)
    }
}

/// Conjugate `n` entries of a strided vector in place.  A no-op for real
/// element types.
pub(crate) fn lacgv<T: BandScalar>(n: usize, x: &mut [T], incx: usize) {
    if !T::IS_COMPLEX {
        return;
    }
    for v in x.iter_mut().step_by(incx.max(1)).take(n) {
        *v = v.conj();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_scalar() {
        let x = -3.0_f64;
        assert_eq!(x.conj(), x);
        assert_eq!(x.abs2(), 9.0);
        assert_eq!(x.modulus(), 3.0);
        assert_eq!(BandScalar::imag(x), 0.0);
        assert_eq!(x.scale_real(2.0), -6.0);
    }

    #[test]
    fn test_complex_scalar() {
        let z = Complex::new(3.0_f64, -4.0);
        assert_eq!(BandScalar::conj(z), Complex::new(3.0, 4.0));
        assert_eq!(z.abs2(), 25.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(BandScalar::real(z), 3.0);
        assert_eq!(BandScalar::imag(z), -4.0);
        assert_eq!(Complex::<f64>::from_real(2.0), Complex::new(2.0, 0.0));
        assert_eq!(z.scale_real(0.5), Complex::new(1.5, -2.0));
    }

    #[test]
    fn test_lacgv() {
        let mut x = vec![
            Complex::new(1.0_f64, 1.0),
            Complex::new(2.0, 2.0),
            Complex::new(3.0, 3.0),
            Complex::new(4.0, 4.0),
        ];
        // conjugate every other entry
        lacgv(2, &mut x, 2);
        assert_eq!(x[0], Complex::new(1.0, -1.0));
        assert_eq!(x[1], Complex::new(2.0, 2.0));
        assert_eq!(x[2], Complex::new(3.0, -3.0));
        assert_eq!(x[3], Complex::new(4.0, 4.0));

        let mut y = vec![1.0_f64, -2.0];
        lacgv(2, &mut y, 1);
        assert_eq!(y, vec![1.0, -2.0]);
    }
}
