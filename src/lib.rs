//! __bandchol__ computes Cholesky factorizations of symmetric and Hermitian
//! positive definite band matrices held in compact band storage, and
//! reconstructs band matrices from their triangular band factors.
//!
//! For a matrix $A$ of order $n$ with bandwidth $k_d$ the factorization
//! computes, in place,
//!
//! $$
//! A = U^H U \quad \text{(upper storage)}
//! \qquad\text{or}\qquad
//! A = L L^H \quad \text{(lower storage)},
//! $$
//!
//! where $U$ ($L$) is upper (lower) triangular with bandwidth $k_d$ and
//! a strictly positive real diagonal.  The reconstruction kernel applies
//! the reverse map, and factoring followed by reconstruction recovers $A$
//! up to rounding.
//!
//! ## Features
//!
//! * __Element types__: `f32`, `f64`, `Complex<f32>` and `Complex<f64>`.
//!
//! * __Blocked and unblocked algorithms__: matrices with wide bands are
//!   factored with a blocked algorithm built on level 3 kernels.  Narrow
//!   bands use the unblocked algorithm.
//!
//! * __Pluggable kernels__: all dense numerical work is dispatched through the
//!   [`DenseKernels`](crate::algebra::DenseKernels) trait.  A pure Rust
//!   backend is always available, and a system BLAS backend for real types
//!   is enabled with the `blas` feature (`blas-openblas`, `blas-mkl`,
//!   `blas-netlib` or `blas-accelerate` select a specific library).
//!
//! ## Example
//!
//! ```
//! use bandchol::algebra::MatrixTriangle;
//! use bandchol::banded::{factorize_band_cholesky, reconstruct_band_product};
//!
//! // A = [4 2 0; 2 10 3; 0 3 2] in lower band storage with kd = 1
//! let a = vec![0., 4., 2., 10., 3., 2.];
//! let mut ab = a.clone();
//!
//! assert!(factorize_band_cholesky(MatrixTriangle::Tril, 3, 1, &mut ab, 2).unwrap());
//! assert_eq!(&ab[1..], &[2., 1., 3., 1., 1.]);
//!
//! reconstruct_band_product(MatrixTriangle::Tril, 3, 1, &mut ab, 2).unwrap();
//! assert_eq!(&ab[1..], &a[1..]);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]
#![allow(mixed_script_confusables)]

pub mod algebra;
pub mod banded;
