//! Sobel gradients on a fixed 256×256 intensity grid.
//!
//! - Convolves the 3×3 kernel pair (`X` and `Y`) over interior pixels only,
//!   rows and columns `1..=254`. The kernel never reads outside the grid.
//! - Border cells of `gx` and `gy` are never written and stay zero.
//! - Sums are kept as signed integers with no clamping. With 8-bit input and
//!   weights bounded by 2 the magnitude of any sum is at most 1020.
use crate::image::{IntensityGrid, GRID_SIZE};
use log::debug;

pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal derivative (responds to vertical edges).
pub const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical derivative (responds to horizontal edges).
pub const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

pub const KERNEL_RADIUS: usize = 1;

/// Per‑pixel gradient planes.
#[derive(Clone, Debug, Default)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: IntensityGrid,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: IntensityGrid,
}

fn gradients_with_kernels(input: &IntensityGrid, kernel_x: &Kernel3, kernel_y: &Kernel3) -> Grad {
    let mut gx = IntensityGrid::new();
    let mut gy = IntensityGrid::new();

    for y in KERNEL_RADIUS..GRID_SIZE - KERNEL_RADIUS {
        let rows = [input.row(y - 1), input.row(y), input.row(y + 1)];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        for x in KERNEL_RADIUS..GRID_SIZE - KERNEL_RADIUS {
            let mut sum_x = 0;
            let mut sum_y = 0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                for (kx, &pixel) in row[x - 1..=x + 1].iter().enumerate() {
                    sum_x += pixel * kx_row[kx];
                    sum_y += pixel * ky_row[kx];
                }
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
        }
    }

    Grad { gx, gy }
}

/// Compute Sobel gradients on an intensity grid.
pub fn sobel_gradients(input: &IntensityGrid) -> Grad {
    let grad = gradients_with_kernels(input, &SOBEL_KERNEL_X, &SOBEL_KERNEL_Y);
    debug!(
        "sobel gradients: |gx| max {}, |gy| max {}",
        abs_max(&grad.gx),
        abs_max(&grad.gy)
    );
    grad
}

fn abs_max(grid: &IntensityGrid) -> i32 {
    grid.as_slice().iter().map(|v| v.abs()).max().unwrap_or(0)
}
