#![allow(non_snake_case)]
use bandchol::{algebra::*, banded::*};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

fn random_dominant(rng: &mut StdRng, uplo: MatrixTriangle, n: usize, kd: usize) -> BandMatrix<f64> {
    let mut A = BandMatrix::zeros(uplo, n, kd).unwrap();
    for i in 0..n {
        for j in A.shape.row_range(i) {
            A[(i, j)] = if i == j {
                (2 * kd + 1) as f64 + rng.gen::<f64>()
            } else {
                rng.gen_range(-1.0..=1.0)
            };
        }
    }
    A
}

// log determinant of a dense positive definite matrix by
// Gaussian elimination without pivoting
fn dense_logdet(mut A: Vec<f64>, n: usize) -> f64 {
    let mut ld = 0.;
    for k in 0..n {
        let p = A[k * n + k];
        ld += p.ln();
        for i in (k + 1)..n {
            let f = A[i * n + k] / p;
            for j in k..n {
                A[i * n + j] -= f * A[k * n + j];
            }
        }
    }
    ld
}

fn dense_mul(A: &[f64], n: usize, X: &[f64], nrhs: usize, ldx: usize) -> Vec<f64> {
    let mut B = vec![0.; n * ldx];
    for i in 0..n {
        for k in 0..nrhs {
            B[i * ldx + k] = (0..n).map(|j| A[i * n + j] * X[j * ldx + k]).sum();
        }
    }
    B
}

#[test]
fn test_solve_multiple_rhs() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut engine = BandCholeskyEngine::<f64>::default();

    // (40, 39) and (90, 70) factor with the blocked algorithm
    for (n, kd) in [(1, 0), (9, 0), (17, 3), (40, 39), (90, 70)] {
        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let (nrhs, ldb) = (3, 5);
            let A = random_dominant(&mut rng, uplo, n, kd);
            let X: Vec<f64> = (0..n * ldb).map(|_| rng.sample(StandardNormal)).collect();
            let mut B = dense_mul(&A.to_dense(), n, &X, nrhs, ldb);

            let mut F = A.clone();
            engine.factor(&mut F).unwrap();
            engine.solve(&F, &mut B, nrhs, ldb).unwrap();

            for i in 0..n {
                for k in 0..nrhs {
                    let (x, b) = (X[i * ldb + k], B[i * ldb + k]);
                    assert!((x - b).abs() <= 1e-12, "uplo={:?}, n={}, kd={}", uplo, n, kd);
                }
                // padding columns of B are untouched
                for k in nrhs..ldb {
                    assert_eq!(B[i * ldb + k], 0.);
                }
            }
        }
    }
}

#[test]
fn test_solve_raw() {
    // A = [4 2 0; 2 10 3; 0 3 2],  A [1 1 1]' = [6 15 5]'
    let mut ab = vec![0., 4., 2., 10., 3., 2.];
    let mut b = vec![6., 15., 5.];

    let mut engine = BandCholeskyEngine::<f64>::default();
    engine.factor_raw(MatrixTriangle::Tril, 3, 1, &mut ab, 2).unwrap();
    engine.solve_raw(MatrixTriangle::Tril, 3, 1, &ab, 2, &mut b, 1, 1).unwrap();
    assert_eq!(b, vec![1., 1., 1.]);
}

#[test]
fn test_logdet() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut engine = BandCholeskyEngine::<f64>::default();

    for (n, kd) in [(1, 0), (12, 2), (30, 12), (70, 65)] {
        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let A = random_dominant(&mut rng, uplo, n, kd);
            let expected = dense_logdet(A.to_dense(), n);

            let mut F = A.clone();
            engine.factor(&mut F).unwrap();
            let ld = engine.logdet(&F);
            assert!((ld - expected).abs() <= 1e-10 * expected.abs().max(1.));
        }
    }
}

#[test]
fn test_solve_empty() {
    let engine = BandCholeskyEngine::<f64>::default();
    let A = BandMatrix::<f64>::zeros(MatrixTriangle::Triu, 0, 0).unwrap();
    let mut B: Vec<f64> = vec![];
    engine.solve(&A, &mut B, 2, 2).unwrap();
    assert_eq!(engine.logdet(&A), 0.);
}
