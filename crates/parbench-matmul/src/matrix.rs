use foundation::{BenchError, Result};

/// Row-major `rows x cols` integer matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0; len],
        })
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<i32>) -> Result<Self> {
        let len = element_count(rows, cols)?;
        if data.len() != len {
            return Err(BenchError::config(format!(
                "{rows}x{cols} matrix needs {len} elements, got {}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Zero every cell, keeping the shape.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    pub fn checksum(&self) -> i64 {
        self.data.iter().map(|&v| v as i64).sum()
    }
}

/// Number of cells of a `rows x cols` matrix, rejecting overflow.
pub fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        BenchError::config(format!("{rows}x{cols} matrix is too large to address"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Matrix::from_vec(2, 3, vec![0; 6]).is_ok());
        assert!(matches!(
            Matrix::from_vec(2, 3, vec![0; 5]),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_row_major_indexing() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.get(0, 2), 3);
        assert_eq!(m.get(1, 0), 4);
        assert_eq!(m.checksum(), 21);
    }

    #[test]
    fn test_reset_keeps_shape() {
        let mut m = Matrix::from_vec(2, 2, vec![7, 8, 9, 10]).unwrap();
        m.reset();
        assert_eq!(m, Matrix::zeros(2, 2).unwrap());
    }

    #[test]
    fn test_oversized_shape_rejected() {
        let huge = 1usize << (usize::BITS / 2 + 1);
        assert!(matches!(
            Matrix::zeros(huge, huge),
            Err(BenchError::InvalidConfig(_))
        ));
        assert!(matches!(
            Matrix::from_vec(huge, huge, Vec::new()),
            Err(BenchError::InvalidConfig(_))
        ));
        assert_eq!(element_count(3, 4).unwrap(), 12);
    }
}
