#![cfg(feature = "blas")]
#![allow(non_snake_case)]
use bandchol::{algebra::*, banded::*};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_blas_kernels_match_native() {
    let mut rng = StdRng::seed_from_u64(21);
    let settings = BandCholeskySettingsBuilder::default()
        .block_size(8)
        .blocked_min_bandwidth(16)
        .build()
        .unwrap();

    let mut native = BandCholeskyEngine::<f64>::new(settings.clone());
    let mut blas = BandCholeskyEngine::<f64, _>::with_kernels(settings, BlasKernels::new());

    for (n, kd) in [(10, 3), (60, 24), (75, 40)] {
        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let mut A = BandMatrix::<f64>::zeros_with_ldab(uplo, n, kd, kd + 3).unwrap();
            for i in 0..n {
                for j in A.shape.row_range(i) {
                    A[(i, j)] = if i == j {
                        (2 * kd + 1) as f64
                    } else {
                        rng.gen_range(-1.0..=1.0)
                    };
                }
            }

            let mut F1 = A.clone();
            let mut F2 = A.clone();
            native.factor(&mut F1).unwrap();
            blas.factor(&mut F2).unwrap();
            let diff = F1.data.iter().zip(&F2.data).fold(0., |m: f64, (x, y)| m.max((x - y).abs()));
            assert!(diff <= 1e-12, "uplo={:?}, n={}, kd={}", uplo, n, kd);

            blas.reconstruct(&mut F2).unwrap();
            let diff = F2.data.iter().zip(&A.data).fold(0., |m: f64, (x, y)| m.max((x - y).abs()));
            assert!(diff <= 1e-12);
        }
    }
}
