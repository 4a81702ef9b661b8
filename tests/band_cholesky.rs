#![allow(non_snake_case)]
use bandchol::{algebra::*, banded::*};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

// random triangular band factor, with a sufficiently positive diagonal.
// Entries outside the band, including row padding, are also random
fn random_factor(rng: &mut StdRng, uplo: MatrixTriangle, n: usize, kd: usize, ldab: usize) -> Vec<f64> {
    let mut ab: Vec<f64> = (0..n * ldab).map(|_| rng.sample(StandardNormal)).collect();
    for i in 0..n {
        let d = match uplo {
            MatrixTriangle::Triu => i * ldab,
            MatrixTriangle::Tril => i * ldab + kd,
        };
        ab[d] = 2. + rng.gen::<f64>();
    }
    ab
}

// random positive definite band matrix U^T U or L L^T
fn random_posdef(rng: &mut StdRng, uplo: MatrixTriangle, n: usize, kd: usize, ldab: usize) -> Vec<f64> {
    let mut ab = random_factor(rng, uplo, n, kd, ldab);
    reconstruct_band_product(uplo, n, kd, &mut ab, ldab).unwrap();
    ab
}

// random diagonally dominant band matrix, with off-diagonal entries
// in [-1, 1] and diagonal 2*kd + 1
fn random_dominant(rng: &mut StdRng, uplo: MatrixTriangle, n: usize, kd: usize, ldab: usize) -> Vec<f64> {
    let mut ab = random_factor(rng, uplo, n, kd, ldab);
    let shape = BandShape::new(uplo, n, kd, ldab).unwrap();
    for i in 0..n {
        for j in shape.row_range(i) {
            ab[shape.index(i, j)] = if i == j {
                (2 * kd + 1) as f64
            } else {
                rng.gen_range(-1.0..=1.0)
            };
        }
    }
    ab
}

// largest difference over stored entries.  Panics if any buffer
// entry outside the stored band differs
fn band_diff(shape: &BandShape, a: &[f64], b: &[f64]) -> f64 {
    let mut stored = vec![false; a.len()];
    let mut diff: f64 = 0.;
    for i in 0..shape.n {
        for j in shape.row_range(i) {
            let idx = shape.index(i, j);
            stored[idx] = true;
            diff = diff.max((a[idx] - b[idx]).abs());
        }
    }
    for (idx, _) in stored.iter().enumerate().filter(|(_, &s)| !s) {
        assert_eq!(a[idx], b[idx], "entry {} outside the band was modified", idx);
    }
    diff
}

fn check_roundtrip(
    engine: &mut BandCholeskyEngine<f64>,
    rng: &mut StdRng,
    uplo: MatrixTriangle,
    n: usize,
    kd: usize,
    ldab: usize,
) {
    const TOL: f64 = 1e-12;

    let ab = random_posdef(rng, uplo, n, kd, ldab);
    let mut fac = ab.clone();

    let name = format!("uplo={:?}, n={}, kd={}, ldab={}", uplo, n, kd, ldab);
    if let Err(e) = engine.factor_raw(uplo, n, kd, &mut fac, ldab) {
        panic!("{}: bad test matrix, factorization failed: {}", name, e);
    }
    engine.reconstruct_raw(uplo, n, kd, &mut fac, ldab).unwrap();

    let shape = BandShape::new(uplo, n, kd, ldab).unwrap();
    let diff = band_diff(&shape, &fac, &ab);
    assert!(diff <= TOL, "{}: unexpected result, diff = {:e}", name, diff);
}

#[test]
fn test_band_cholesky_roundtrip() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut engine = BandCholeskyEngine::<f64>::default();

    for n in [0usize, 1, 2, 3, 4, 5, 64, 65, 66, 91, 96, 97, 101, 128, 130] {
        let maxkd = n.saturating_sub(1);
        for kd in [0, (n + 1) / 4, (3 * n).saturating_sub(1) / 4, (5 * n + 1) / 4] {
            let kd = kd.min(maxkd);
            for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                for ldab in [kd + 1, kd + 1 + 7] {
                    check_roundtrip(&mut engine, &mut rng, uplo, n, kd, ldab);
                }
            }
        }
    }
}

#[test]
fn test_band_cholesky_small_blocks() {
    let mut rng = StdRng::seed_from_u64(2);

    // nb == kd gives i2 == 0 on every full block
    for (n, kd, nb) in [(20, 4, 4), (37, 8, 8), (40, 9, 4), (50, 12, 5), (33, 32, 32), (70, 31, 16)] {
        let settings = BandCholeskySettingsBuilder::default()
            .block_size(nb)
            .blocked_min_bandwidth(0)
            .build()
            .unwrap();
        let mut blocked = BandCholeskyEngine::<f64>::new(settings);
        let mut unblocked = BandCholeskyEngine::<f64>::new(
            BandCholeskySettingsBuilder::default()
                .blocked_min_bandwidth(usize::MAX)
                .build()
                .unwrap(),
        );

        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            for ldab in [kd + 1, kd + 3] {
                check_roundtrip(&mut blocked, &mut rng, uplo, n, kd, ldab);

                // blocked and unblocked factors agree
                let ab = random_dominant(&mut rng, uplo, n, kd, ldab);
                let mut f1 = ab.clone();
                let mut f2 = ab.clone();
                blocked.factor_raw(uplo, n, kd, &mut f1, ldab).unwrap();
                unblocked.factor_raw(uplo, n, kd, &mut f2, ldab).unwrap();

                let shape = BandShape::new(uplo, n, kd, ldab).unwrap();
                assert!(band_diff(&shape, &f1, &f2) < 1e-12);
            }
        }
    }
}

#[test]
fn test_band_cholesky_scenario() {
    // n = 5, kd = 2, upper storage, factor diagonal 2.5, 2.1, 2.8, 2.3, 2.6
    let (n, kd, ldab) = (5, 2, 3);
    let mut rng = StdRng::seed_from_u64(3);

    let mut ab = vec![0.; n * ldab];
    for (i, d) in [2.5, 2.1, 2.8, 2.3, 2.6].into_iter().enumerate() {
        ab[i * ldab] = d;
        for j in 1..=usize::min(kd, n - 1 - i) {
            ab[i * ldab + j] = rng.gen_range(-1.0..=1.0);
        }
    }
    let factor = ab.clone();

    reconstruct_band_product(MatrixTriangle::Triu, n, kd, &mut ab, ldab).unwrap();
    let a = ab.clone();

    assert!(factorize_band_cholesky(MatrixTriangle::Triu, n, kd, &mut ab, ldab).unwrap());

    // the factor with positive diagonal is unique
    let shape = BandShape::new(MatrixTriangle::Triu, n, kd, ldab).unwrap();
    assert!(band_diff(&shape, &ab, &factor) < 1e-12);

    reconstruct_band_product(MatrixTriangle::Triu, n, kd, &mut ab, ldab).unwrap();
    assert!(band_diff(&shape, &ab, &a) < 1e-12);
}

#[test]
fn test_band_cholesky_empty() {
    let mut ab: Vec<f64> = vec![];
    for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        assert!(factorize_band_cholesky(uplo, 0, 0, &mut ab, 1).unwrap());
        reconstruct_band_product(uplo, 0, 0, &mut ab, 1).unwrap();
    }

    // nothing is touched for an empty matrix
    let mut ab = vec![-1.0_f64; 3];
    assert!(factorize_band_cholesky(MatrixTriangle::Tril, 0, 2, &mut ab, 3).unwrap());
    assert_eq!(ab, vec![-1.; 3]);
}

#[test]
fn test_band_cholesky_diagonal() {
    let d = vec![4., 9., 2., 0.25];
    for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        let mut ab = d.clone();
        assert!(factorize_band_cholesky(uplo, 4, 0, &mut ab, 1).unwrap());
        assert_eq!(ab, vec![2., 3., 2.0_f64.sqrt(), 0.5]);

        reconstruct_band_product(uplo, 4, 0, &mut ab, 1).unwrap();
        assert!(ab.iter().zip(&d).all(|(a, b)| (a - b).abs() < 1e-15));
    }

    let mut ab = vec![4., 0., 1.];
    assert!(!factorize_band_cholesky(MatrixTriangle::Triu, 3, 0, &mut ab, 1).unwrap());
}

#[test]
fn test_band_cholesky_not_posdef() {
    let mut rng = StdRng::seed_from_u64(4);
    let (n, kd) = (100, 70);

    for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        for k in [0, 17, 50, 99] {
            let ldab = kd + 1;
            let mut ab = random_dominant(&mut rng, uplo, n, kd, ldab);
            let shape = BandShape::new(uplo, n, kd, ldab).unwrap();
            ab[shape.diag_index(k)] = -1.;

            let mut fac = ab.clone();
            assert!(!factorize_band_cholesky(uplo, n, kd, &mut fac, ldab).unwrap());

            // both code paths report the global pivot index
            for settings in [
                BandCholeskySettings::default(),
                BandCholeskySettingsBuilder::default()
                    .blocked_min_bandwidth(usize::MAX)
                    .build()
                    .unwrap(),
            ] {
                let mut engine = BandCholeskyEngine::<f64>::new(settings);
                let mut fac = ab.clone();
                assert_eq!(
                    engine.factor_raw(uplo, n, kd, &mut fac, ldab),
                    Err(BandFactorizationError::NotPositiveDefinite(k))
                );
            }
        }
    }

    // NaN pivots are rejected
    let mut ab = vec![1., 0., f64::NAN, 0.];
    assert!(!factorize_band_cholesky(MatrixTriangle::Triu, 2, 1, &mut ab, 2).unwrap());
}

#[test]
fn test_band_cholesky_ldab_independence() {
    let mut rng = StdRng::seed_from_u64(5);

    for (n, kd) in [(12, 3), (90, 70)] {
        for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
            let shape = BandShape::new(uplo, n, kd, kd + 1).unwrap();
            let tight = BandMatrix::new(shape, random_posdef(&mut rng, uplo, n, kd, kd + 1)).unwrap();

            // the same matrix with padded rows, padding filled with a marker
            let ldab = kd + 6;
            let mut padded = BandMatrix::<f64>::zeros_with_ldab(uplo, n, kd, ldab).unwrap();
            padded.data.iter_mut().for_each(|v| *v = 123.);
            for i in 0..n {
                for j in tight.shape.row_range(i) {
                    padded[(i, j)] = tight[(i, j)];
                }
            }
            let marker = padded.clone();

            let mut engine = BandCholeskyEngine::<f64>::default();
            let mut tight = tight;
            engine.factor(&mut tight).unwrap();
            engine.factor(&mut padded).unwrap();

            for i in 0..n {
                for j in tight.shape.row_range(i) {
                    assert_eq!(tight[(i, j)], padded[(i, j)]);
                }
            }
            // padding still holds the marker
            band_diff(&padded.shape, &padded.data, &marker.data);
        }
    }
}

macro_rules! generate_test_band_cholesky {
    ($fxx:ty, $test_name:ident, $tol:expr) => {
        #[test]
        fn $test_name() {
            let mut rng = StdRng::seed_from_u64(6);

            for (n, kd) in [(1, 0), (6, 2), (15, 5), (20, 19)] {
                for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                    let mut L = BandMatrix::<$fxx>::zeros(uplo, n, kd).unwrap();
                    for i in 0..n {
                        for j in L.shape.row_range(i) {
                            L[(i, j)] = if i == j {
                                2. + rng.gen::<$fxx>()
                            } else {
                                rng.sample::<$fxx, _>(StandardNormal)
                            };
                        }
                    }

                    let mut engine = BandCholeskyEngine::<$fxx>::default();
                    let mut A = L.clone();
                    engine.reconstruct(&mut A).unwrap();

                    let mut F = A.clone();
                    engine.factor(&mut F).unwrap();
                    let scale = A.data.iter().fold(1.0 as $fxx, |m, v| m.max(v.abs()));

                    engine.reconstruct(&mut F).unwrap();
                    let diff = F.data.iter().zip(&A.data).fold(0.0 as $fxx, |m, (a, b)| m.max((a - b).abs()));
                    assert!(diff <= $tol * scale);
                }
            }
        }
    };
}

generate_test_band_cholesky!(f32, test_band_cholesky_f32, 1e-4);
generate_test_band_cholesky!(f64, test_band_cholesky_f64, 1e-12);
