//! Main Grid type

use crate::error::{Error, Result};
use crate::grid::GridElement;
use ndarray::{Array2, ArrayView2};

/// A dense 2D grid of cell values.
///
/// `Grid<T>` stores values of type `T` in row-major order. Habitat rasters
/// use `Grid<u8>` (0 = matrix, nonzero = habitat); patch label rasters use
/// `Grid<u32>` (0 = matrix, positive = patch ID).
///
/// # Example
///
/// ```ignore
/// use patchlink_core::Grid;
///
/// // Create a 100x100 grid filled with zeros
/// let mut grid: Grid<u8> = Grid::new(100, 100);
///
/// // Mark a habitat cell
/// grid.set(10, 20, 1)?;
///
/// let value = grid.get(10, 20)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: GridElement> {
    /// Cell data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: GridElement> Grid<T> {
    /// Create a new grid filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new grid filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a grid from existing row-major data
    pub fn from_vec(cells: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        let len = cells.len();
        if len != rows * cols {
            return Err(Error::InvalidDimensions { rows, cols, len });
        }

        let data = Array2::from_shape_vec((rows, cols), cells)
            .map_err(|_| Error::InvalidDimensions { rows, cols, len })?;

        Ok(Self { data })
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Resolve the cell at offset (dr, dc) from (row, col), if it is in bounds
    pub fn neighbor(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let nr = row as isize + dr;
        let nc = col as isize + dc;

        if nr < 0 || nc < 0 || nr >= self.rows() as isize || nc >= self.cols() as isize {
            None
        } else {
            Some((nr as usize, nc as usize))
        }
    }

    /// Iterate over cell values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Count cells holding a nonzero value
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }
}
