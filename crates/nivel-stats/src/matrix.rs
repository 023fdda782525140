//! Level observation sets.
//!
//! A [`LevelMatrix`] holds repeated dB observations in row-major order:
//! each row is one independent variable (a frequency band, a measurement
//! position, a repeated scalar level) and each column is one observation of
//! it. A plain vector of repeated readings is the one-row case.

use crate::error::StatsError;

/// Row-major matrix of dB level observations.
///
/// Rows are independent variables, columns are repeated observations.
/// Construction validates shape once; the statistics engine can then assume
/// a rectangular, non-empty layout. Entry values are not constrained:
/// `-inf` (zero energy) and NaN both propagate through the arithmetic
/// rather than being rejected up front.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl LevelMatrix {
    /// Build a matrix from rows of equal length.
    ///
    /// # Errors
    /// [`StatsError::EmptyInput`] if there are no rows or the rows are
    /// empty; [`StatsError::RaggedRows`] if row lengths differ.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, StatsError> {
        if rows.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(StatsError::EmptyInput);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(StatsError::RaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a one-row matrix from a vector of repeated observations.
    ///
    /// # Errors
    /// [`StatsError::EmptyInput`] if the vector is empty.
    pub fn from_vector(observations: &[f64]) -> Result<Self, StatsError> {
        if observations.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        Ok(Self {
            data: observations.to_vec(),
            rows: 1,
            cols: observations.len(),
        })
    }

    /// Number of rows (independent variables).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (observations per row).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// One row of observations.
    ///
    /// # Panics
    /// If `index >= self.rows()`.
    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterator over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_rectangular_matrix() {
        let m = LevelMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_rows_rejects_empty() {
        assert_eq!(LevelMatrix::from_rows(&[]), Err(StatsError::EmptyInput));
        assert_eq!(
            LevelMatrix::from_rows(&[vec![], vec![]]),
            Err(StatsError::EmptyInput)
        );
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = LevelMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            StatsError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn from_vector_is_one_row() {
        let m = LevelMatrix::from_vector(&[10.0, 11.0, 9.5]).unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(0), &[10.0, 11.0, 9.5]);
    }

    #[test]
    fn from_vector_rejects_empty() {
        assert_eq!(LevelMatrix::from_vector(&[]), Err(StatsError::EmptyInput));
    }

    #[test]
    fn iter_rows_yields_every_row() {
        let m = LevelMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let rows: Vec<&[f64]> = m.iter_rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], &[5.0, 6.0]);
    }

    #[test]
    fn non_finite_entries_are_accepted() {
        let m = LevelMatrix::from_vector(&[0.0, f64::NEG_INFINITY, f64::NAN]).unwrap();
        assert_eq!(m.cols(), 3);
    }
}
