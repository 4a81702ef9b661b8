// Argument validation shared by every kernel backend.  All dense
// operands are row-major, so a `rows x cols` operand with leading
// dimension `ld` addresses `(rows - 1) * ld + cols` elements.

use crate::algebra::DimensionError;

/// leading dimension of a row-major operand with `cols` columns
pub(crate) fn check_ld(ld: usize, cols: usize) -> Result<(), DimensionError> {
    let min = cols.max(1);
    if ld < min {
        return Err(DimensionError::LeadingDimension { ld, min });
    }
    Ok(())
}

pub(crate) fn check_inc(inc: usize) -> Result<(), DimensionError> {
    if inc == 0 {
        return Err(DimensionError::ZeroIncrement);
    }
    Ok(())
}

/// storage extent of a strided vector of length `n`
pub(crate) fn vec_extent(n: usize, inc: usize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc + 1
    }
}

/// storage extent of a row-major `rows x cols` operand
pub(crate) fn mat_extent(rows: usize, cols: usize, ld: usize) -> usize {
    if rows == 0 || cols == 0 {
        0
    } else {
        (rows - 1) * ld + cols
    }
}

pub(crate) fn check_len(len: usize, min: usize) -> Result<(), DimensionError> {
    if len < min {
        return Err(DimensionError::BufferLength { len, min });
    }
    Ok(())
}

pub(crate) fn check_vec(x: usize, n: usize, inc: usize) -> Result<(), DimensionError> {
    check_inc(inc)?;
    check_len(x, vec_extent(n, inc))
}

pub(crate) fn check_mat(a: usize, rows: usize, cols: usize, ld: usize) -> Result<(), DimensionError> {
    check_ld(ld, cols)?;
    check_len(a, mat_extent(rows, cols, ld))
}

// stored dimensions of op(A) when op(A) is `rows x cols`
pub(crate) fn stored_dims(transposed: bool, rows: usize, cols: usize) -> (usize, usize) {
    if transposed {
        (cols, rows)
    } else {
        (rows, cols)
    }
}
