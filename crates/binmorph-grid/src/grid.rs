use crate::error::GridError;

/// A rectangular binary image represented by height, width, and cell data.
///
/// Cells are stored in row-major order and hold either 0 (background) or
/// 1 (foreground). The grid is non-empty and non-jagged by construction;
/// the validated constructors are the only way to build one.
///
/// # Examples
///
/// ```
/// use binmorph_grid::BitGrid;
///
/// let grid = BitGrid::from_rows(&[
///     vec![0, 1, 0],
///     vec![1, 1, 1],
///     vec![0, 1, 0],
/// ]).unwrap();
///
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.get(1, 1), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitGrid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl BitGrid {
    /// Creates an all-background grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSizedGrid`] if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroSizedGrid(height, width));
        }
        Ok(Self {
            height,
            width,
            cells: vec![0; height * width],
        })
    }

    /// Creates a grid from a flat vector of cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, if the data length
    /// does not equal `height * width`, or if any cell is not 0 or 1.
    pub fn from_vec(height: usize, width: usize, cells: Vec<u8>) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::ZeroSizedGrid(height, width));
        }
        if cells.len() != height * width {
            return Err(GridError::InvalidDataLength(cells.len(), height * width));
        }
        if let Some(idx) = cells.iter().position(|&c| c > 1) {
            return Err(GridError::NonBinaryCell(idx, cells[idx]));
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Creates a grid from nested rows.
    ///
    /// # Errors
    ///
    /// Returns an error on empty input, jagged rows, or non-binary cells.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(GridError::ZeroSizedGrid(height, width));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::NonRectangularRows(i, row.len(), width));
            }
        }
        let cells = rows.iter().flatten().copied().collect();
        Self::from_vec(height, width, cells)
    }

    /// Returns an all-background grid with the same dimensions as `self`.
    pub fn zeros_like(&self) -> Self {
        Self {
            height: self.height,
            width: self.width,
            cells: vec![0; self.height * self.width],
        }
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid dimensions as (height, width).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Returns the cell value at position (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col]
    }

    /// Sets the cell value at position (row, col).
    pub fn set(&mut self, row: usize, col: usize, val: u8) {
        debug_assert!(row < self.height && col < self.width);
        debug_assert!(val <= 1);
        let idx = row * self.width + col;
        self.cells[idx] = val;
    }

    /// Returns the cell data as a flat slice in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Returns a string representation of the grid using ASCII characters,
    /// `#` for foreground and `.` for background. This is useful for
    /// visualizing grid content in the terminal.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                out.push(if self.get(row, col) == 1 { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
