// All dense operands of the kernels are row-major.  Band matrices
// use the compact row-wise band storage described in `BandShape`.

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
    /// Conjugate transposed matrix orientation
    C,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

/// Side on which a triangular operand is applied
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixSide {
    /// `op(A) X`
    Left,
    /// `X op(A)`
    Right,
}

/// Diagonal marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixDiag {
    /// Diagonal entries are read from the matrix
    NonUnit,
    /// Diagonal entries are assumed to be one
    Unit,
}

impl MatrixShape {
    #[allow(dead_code)]
    pub(crate) fn transpose(&self) -> MatrixShape {
        match self {
            MatrixShape::N => MatrixShape::T,
            MatrixShape::T | MatrixShape::C => MatrixShape::N,
        }
    }
    pub(crate) fn is_transposed(&self) -> bool {
        *self != MatrixShape::N
    }
}

impl MatrixTriangle {
    #[allow(dead_code)]
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
    /// The opposite triangle
    pub fn transpose(&self) -> MatrixTriangle {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }
}

impl MatrixSide {
    #[allow(dead_code)]
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixSide::Left => b'L',
            MatrixSide::Right => b'R',
        }
    }
    #[allow(dead_code)]
    pub(crate) fn flip(&self) -> MatrixSide {
        match self {
            MatrixSide::Left => MatrixSide::Right,
            MatrixSide::Right => MatrixSide::Left,
        }
    }
}

impl MatrixDiag {
    #[allow(dead_code)]
    pub(crate) fn as_blas_char(&self) -> u8 {
        match self {
            MatrixDiag::NonUnit => b'N',
            MatrixDiag::Unit => b'U',
        }
    }
}
