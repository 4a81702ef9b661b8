#![allow(non_snake_case)]

use super::kernels::checks::{check_ld, check_len};
use crate::algebra::*;
use std::ops::{Index, IndexMut, Range};

/// Shape of a symmetric or Hermitian band matrix in compact row-wise
/// band storage.
///
/// A matrix of order `n` with bandwidth `kd` occupies `n` rows of a flat
/// buffer, with consecutive rows `ldab >= kd + 1` elements apart.  Only
/// one triangle is stored:
///
/// * `Triu`: row `i` holds the diagonal at offset 0 followed by the
///   `min(kd, n-1-i)` super-diagonal entries, so that `A[i][j]` lives at
///   `i*ldab + (j-i)`.
/// * `Tril`: row `i` holds the `min(kd, i)` sub-diagonal entries right
///   aligned against the diagonal, which sits at offset `kd`.  `A[i][j]`
///   lives at `i*ldab + kd + j - i`.
///
/// Entries of the unstored triangle and any row padding are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandShape {
    /// stored triangle
    pub uplo: MatrixTriangle,
    /// matrix order
    pub n: usize,
    /// number of super (or sub) diagonals
    pub kd: usize,
    /// row stride of the band buffer
    pub ldab: usize,
}

impl BandShape {
    /// Validated band shape.  Requires `kd < n` for nonempty matrices and
    /// `ldab >= kd + 1`.
    pub fn new(uplo: MatrixTriangle, n: usize, kd: usize, ldab: usize) -> Result<Self, DimensionError> {
        if n > 0 && kd >= n {
            return Err(DimensionError::BandWidth { n, kd });
        }
        check_ld(ldab, kd + 1)?;
        Ok(Self { uplo, n, kd, ldab })
    }

    /// Minimum buffer length, `(n-1)*ldab + kd + 1`.  The final row
    /// need not be padded.
    pub fn required_len(&self) -> usize {
        if self.n == 0 {
            0
        } else {
            (self.n - 1) * self.ldab + self.kd + 1
        }
    }

    /// Checks that a buffer of length `len` can hold the band
    pub fn check_buffer(&self, len: usize) -> Result<(), DimensionError> {
        check_len(len, self.required_len())
    }

    /// `true` if `A[i][j]` is held in the stored triangle of the band
    pub fn is_stored(&self, i: usize, j: usize) -> bool {
        if i >= self.n || j >= self.n {
            return false;
        }
        match self.uplo {
            MatrixTriangle::Triu => i <= j && j - i <= self.kd,
            MatrixTriangle::Tril => j <= i && i - j <= self.kd,
        }
    }

    /// Buffer offset of the stored entry `A[i][j]`.  The pair `(i, j)`
    /// must satisfy [`is_stored`](Self::is_stored).
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        match self.uplo {
            MatrixTriangle::Triu => i * self.ldab + (j - i),
            MatrixTriangle::Tril => i * self.ldab + self.kd - (i - j),
        }
    }

    /// Buffer offset of the diagonal entry `A[i][i]`
    #[inline]
    pub fn diag_index(&self, i: usize) -> usize {
        match self.uplo {
            MatrixTriangle::Triu => i * self.ldab,
            MatrixTriangle::Tril => i * self.ldab + self.kd,
        }
    }

    /// Columns of the entries of row `i` held in the band
    pub fn row_range(&self, i: usize) -> Range<usize> {
        match self.uplo {
            MatrixTriangle::Triu => i..usize::min(self.n, i + self.kd + 1),
            MatrixTriangle::Tril => i.saturating_sub(self.kd)..(i + 1),
        }
    }
}

/// Band matrix over owned or borrowed storage
#[derive(Debug, Clone, PartialEq)]
pub struct BandStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// band shape
    pub shape: BandShape,
    /// band buffer in row-wise band storage
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Band matrix owning its buffer
pub type BandMatrix<T> = BandStorageMatrix<Vec<T>, T>;
/// Band matrix over a borrowed buffer
pub type BorrowedBandMatrix<'a, T> = BandStorageMatrix<&'a [T], T>;
/// Band matrix over a mutably borrowed buffer
pub type BorrowedBandMatrixMut<'a, T> = BandStorageMatrix<&'a mut [T], T>;

impl<S, T> BandStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// Wraps a band buffer.  Fails if the buffer is too short for the shape.
    pub fn new(shape: BandShape, data: S) -> Result<Self, DimensionError> {
        shape.check_buffer(data.as_ref().len())?;
        Ok(Self {
            shape,
            data,
            phantom: std::marker::PhantomData,
        })
    }

    pub fn n(&self) -> usize {
        self.shape.n
    }
    pub fn kd(&self) -> usize {
        self.shape.kd
    }
    pub fn ldab(&self) -> usize {
        self.shape.ldab
    }
    pub fn uplo(&self) -> MatrixTriangle {
        self.shape.uplo
    }

    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> BandStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<'a, T> BorrowedBandMatrix<'a, T> {
    pub fn from_slice(
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        data: &'a [T],
        ldab: usize,
    ) -> Result<Self, DimensionError> {
        Self::new(BandShape::new(uplo, n, kd, ldab)?, data)
    }
}

impl<'a, T> BorrowedBandMatrixMut<'a, T> {
    pub fn from_slice_mut(
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        data: &'a mut [T],
        ldab: usize,
    ) -> Result<Self, DimensionError> {
        Self::new(BandShape::new(uplo, n, kd, ldab)?, data)
    }
}

impl<T> BandMatrix<T>
where
    T: BandScalar,
{
    /// Zero band matrix with unpadded rows
    pub fn zeros(uplo: MatrixTriangle, n: usize, kd: usize) -> Result<Self, DimensionError> {
        Self::zeros_with_ldab(uplo, n, kd, kd + 1)
    }

    /// Zero band matrix with row stride `ldab`
    pub fn zeros_with_ldab(
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        ldab: usize,
    ) -> Result<Self, DimensionError> {
        let shape = BandShape::new(uplo, n, kd, ldab)?;
        Self::new(shape, vec![T::zero(); shape.required_len()])
    }

    /// Band matrix from the `uplo` triangle of a dense row-major `n x n`
    /// matrix.  Entries outside the band are ignored.
    pub fn from_dense(
        uplo: MatrixTriangle,
        n: usize,
        kd: usize,
        A: &[T],
    ) -> Result<Self, DimensionError> {
        check_len(A.len(), n * n)?;
        let mut B = Self::zeros(uplo, n, kd)?;
        for i in 0..n {
            for j in B.shape.row_range(i) {
                B[(i, j)] = A[i * n + j];
            }
        }
        Ok(B)
    }
}

impl<S, T> BandStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: BandScalar,
{
    /// Entry `A[i][j]` of the full Hermitian matrix.  Entries of the
    /// unstored triangle are reflected and conjugated, entries outside
    /// the band are zero.
    pub fn get(&self, i: usize, j: usize) -> T {
        if self.shape.is_stored(i, j) {
            self.data()[self.shape.index(i, j)]
        } else if self.shape.is_stored(j, i) {
            self.data()[self.shape.index(j, i)].conj()
        } else {
            T::zero()
        }
    }

    /// Full Hermitian matrix as a dense row-major `n x n` buffer
    pub fn to_dense(&self) -> Vec<T> {
        let n = self.n();
        let mut A = vec![T::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                A[i * n + j] = self.get(i, j);
            }
        }
        A
    }

    /// Stored triangle only, as a dense row-major `n x n` buffer with
    /// zeros elsewhere.  For a factored matrix this is the triangular
    /// factor U or L.
    pub fn to_dense_triangle(&self) -> Vec<T> {
        let n = self.n();
        let mut A = vec![T::zero(); n * n];
        for i in 0..n {
            for j in self.shape.row_range(i) {
                A[i * n + j] = self[(i, j)];
            }
        }
        A
    }
}

impl<S, T> Index<(usize, usize)> for BandStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        assert!(self.shape.is_stored(idx.0, idx.1));
        &self.data()[self.shape.index(idx.0, idx.1)]
    }
}

impl<S, T> IndexMut<(usize, usize)> for BandStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        assert!(self.shape.is_stored(idx.0, idx.1));
        let lidx = self.shape.index(idx.0, idx.1);
        &mut self.data_mut()[lidx]
    }
}
