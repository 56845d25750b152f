//! Owned fixed-size 256×256 grid in row-major layout.
//!
//! Every stage of the pipeline works on a [`Grid`]: the loaded intensities,
//! both gradient planes and the magnitude/output plane. The side length is a
//! compile-time constant, so a grid can never be resized and all index math
//! shares the same stride.
use crate::error::{Result, SobelError};

/// Side length of every grid, in pixels.
pub const GRID_SIZE: usize = 256;
/// Number of cells in a grid.
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Integer plane: input intensities and signed gradient sums.
pub type IntensityGrid = Grid<i32>;
/// Floating-point plane: gradient magnitude, rescaled in place to output values.
pub type MagnitudeGrid = Grid<f64>;

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Construct a grid with every cell set to `T::default()`.
    pub fn new() -> Self {
        Self::filled(T::default())
    }

    /// Construct a grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: vec![value; GRID_CELLS],
        }
    }

    /// Wrap an existing row-major buffer. The buffer must hold exactly
    /// [`GRID_CELLS`] values.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.len() != GRID_CELLS {
            return Err(SobelError::GridSize {
                expected: GRID_CELLS,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    #[inline]
    /// Convert (x, y) to a linear index into the backing buffer.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * GRID_SIZE + x
    }

    #[inline]
    /// Get the value at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the value at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * GRID_SIZE;
        &self.data[start..start + GRID_SIZE]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * GRID_SIZE;
        &mut self.data[start..start + GRID_SIZE]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(GRID_SIZE)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// True when (x, y) lies on the outermost ring of a grid.
#[inline]
pub fn is_border(x: usize, y: usize) -> bool {
    x == 0 || y == 0 || x == GRID_SIZE - 1 || y == GRID_SIZE - 1
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}
