//! Scalar traits, band storage and dense kernels.
//!
//! This module defines the element types accepted by the band routines,
//! the compact band storage model shared by the factorizer and the
//! reconstructor, and the [`DenseKernels`] primitives through which all
//! numerical work is dispatched.
//!
//! Dense operands passed to the kernels are always row-major.  The
//! [`NativeKernels`] backend is always available.  A system BLAS backend
//! `BlasKernels` for `f32` and `f64` is available when compiled with the
//! `blas` feature.

mod band;
mod error_types;
mod floats;
pub mod kernels;
mod matrix_types;
mod scalar;

pub use band::*;
pub use error_types::*;
pub use floats::*;
pub use kernels::*;
pub use matrix_types::*;
pub use scalar::*;
