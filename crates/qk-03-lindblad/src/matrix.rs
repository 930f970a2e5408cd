//! Bounded dense complex matrices, row-major.

use num_complex::Complex64;

use crate::error::{MatrixError, MatrixResult};

/// Hard upper bound on either matrix dimension.
pub const MAX_DIM: usize = 64;

/// Dense complex matrix with checked construction and arithmetic.
///
/// Storage is row-major. Both dimensions are bounded by [`MAX_DIM`]; every
/// operation validates shapes before touching data.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl ComplexMatrix {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        check_dim(rows)?;
        check_dim(cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![Complex64::new(0.0, 0.0); rows * cols],
        })
    }

    /// Identity matrix of dimension `dim`.
    pub fn identity(dim: usize) -> MatrixResult<Self> {
        let mut m = Self::zeros(dim, dim)?;
        for i in 0..dim {
            m.data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checked element read.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<Complex64> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: Complex64) -> MatrixResult<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Overwrites `self` with the contents of `other`. Shapes must match.
    pub fn copy_from(&mut self, other: &Self) -> MatrixResult<()> {
        self.same_shape(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        let mut data = vec![Complex64::new(0.0, 0.0); self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j].conj();
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `self · other`, `O(d³)`, into a fresh matrix.
    pub fn mul(&self, other: &Self) -> MatrixResult<Self> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.cols, other.cols),
                found: (other.rows, other.cols),
            });
        }
        let mut out = Self::zeros(self.rows, other.cols)?;
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    out.data[i * other.cols + j] += a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(out)
    }

    /// Commutator `[self, other] = self·other − other·self`. Square only.
    pub fn commutator(&self, other: &Self) -> MatrixResult<Self> {
        self.require_square()?;
        self.same_shape(other)?;
        let ab = self.mul(other)?;
        let ba = other.mul(self)?;
        ab.add_scaled(&ba, Complex64::new(-1.0, 0.0))
    }

    /// Anticommutator `{self, other} = self·other + other·self`. Square only.
    pub fn anticommutator(&self, other: &Self) -> MatrixResult<Self> {
        self.require_square()?;
        self.same_shape(other)?;
        let ab = self.mul(other)?;
        let ba = other.mul(self)?;
        ab.add(&ba)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        self.add_scaled(other, Complex64::new(1.0, 0.0))
    }

    /// `self + s·other` into a fresh matrix.
    pub fn add_scaled(&self, other: &Self, s: Complex64) -> MatrixResult<Self> {
        self.same_shape(other)?;
        let mut out = self.clone();
        out.add_assign_scaled(other, s)?;
        Ok(out)
    }

    /// `self += s·other` in place.
    pub fn add_assign_scaled(&mut self, other: &Self, s: Complex64) -> MatrixResult<()> {
        self.same_shape(other)?;
        for (dst, src) in self.data.iter_mut().zip(&other.data) {
            *dst += s * *src;
        }
        Ok(())
    }

    /// `self *= s` in place.
    pub fn scale(&mut self, s: Complex64) {
        for v in &mut self.data {
            *v *= s;
        }
    }

    /// Sum of the main diagonal (length `min(rows, cols)`).
    pub fn trace(&self) -> Complex64 {
        let mut sum = Complex64::new(0.0, 0.0);
        for i in 0..self.rows.min(self.cols) {
            sum += self.data[i * self.cols + i];
        }
        sum
    }

    /// Unchecked read for crate-internal loops that validated shapes upfront.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.cols + col]
    }

    fn check_index(&self, row: usize, col: usize) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn same_shape(&self, other: &Self) -> MatrixResult<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrixError::ShapeMismatch {
                expected: (self.rows, self.cols),
                found: (other.rows, other.cols),
            });
        }
        Ok(())
    }

    fn require_square(&self) -> MatrixResult<()> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

fn check_dim(dim: usize) -> MatrixResult<()> {
    if dim > MAX_DIM {
        return Err(MatrixError::DimensionExceeded { dim, max: MAX_DIM });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
