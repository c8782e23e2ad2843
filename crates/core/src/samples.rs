use ndarray::{Array2, ArrayView1};
use thiserror::Error;

/// Errors that can occur when building a [`Samples`] table.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SamplesError {
    /// The x and y columns have different lengths.
    #[error("x and y columns differ in length ({xs} vs {ys})")]
    LengthMismatch { xs: usize, ys: usize },

    /// The table does not have exactly two columns.
    #[error("expected 2 columns, found {found}")]
    ColumnCount { found: usize },
}

/// An ordered table of `(x, y)` samples.
///
/// Stored as a two-column array: column 0 holds x, column 1 holds y.
/// Interpolants additionally require strictly increasing x, which they check
/// when they are constructed (see [`Samples::first_non_increasing`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct Samples {
    table: Array2<f64>,
}

impl Samples {
    /// Creates a table from separate x and y columns.
    ///
    /// # Errors
    ///
    /// Returns [`SamplesError::LengthMismatch`] if the columns differ in length.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Result<Self, SamplesError> {
        if xs.len() != ys.len() {
            return Err(SamplesError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        let table = Array2::from_shape_fn((xs.len(), 2), |(i, j)| if j == 0 { xs[i] } else { ys[i] });
        Ok(Self { table })
    }

    /// Creates a table from `(x, y)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let pairs: Vec<(f64, f64)> = pairs.into_iter().collect();
        let table = Array2::from_shape_fn((pairs.len(), 2), |(i, j)| {
            if j == 0 { pairs[i].0 } else { pairs[i].1 }
        });
        Self { table }
    }

    /// Wraps an existing two-column array.
    ///
    /// # Errors
    ///
    /// Returns [`SamplesError::ColumnCount`] unless the array has two columns.
    pub fn from_array(table: Array2<f64>) -> Result<Self, SamplesError> {
        if table.ncols() != 2 {
            return Err(SamplesError::ColumnCount {
                found: table.ncols(),
            });
        }
        Ok(Self { table })
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.nrows()
    }

    /// Returns true if the table holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the x column.
    #[must_use]
    pub fn xs(&self) -> ArrayView1<'_, f64> {
        self.table.column(0)
    }

    /// Returns the y column.
    #[must_use]
    pub fn ys(&self) -> ArrayView1<'_, f64> {
        self.table.column(1)
    }

    /// Returns the sample at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(f64, f64)> {
        (index < self.len()).then(|| (self.table[[index, 0]], self.table[[index, 1]]))
    }

    /// Iterates over the samples as `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.table.rows().into_iter().map(|row| (row[0], row[1]))
    }

    /// Returns the underlying two-column array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.table
    }

    /// Consumes the table and returns the underlying array.
    #[must_use]
    pub fn into_array(self) -> Array2<f64> {
        self.table
    }

    /// Returns true if any x or y value is NaN or infinite.
    #[must_use]
    pub fn has_non_finite(&self) -> bool {
        self.table.iter().any(|v| !v.is_finite())
    }

    /// Returns the first index whose x is not greater than its predecessor.
    ///
    /// `None` means the x column is strictly increasing.
    #[must_use]
    pub fn first_non_increasing(&self) -> Option<usize> {
        let xs = self.xs();
        (1..xs.len()).find(|&i| xs[i] <= xs[i - 1])
    }
}

impl FromIterator<(f64, f64)> for Samples {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl From<Vec<(f64, f64)>> for Samples {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self::from_pairs(pairs)
    }
}

impl From<Samples> for Vec<(f64, f64)> {
    fn from(samples: Samples) -> Self {
        samples.iter().collect()
    }
}
