//! Edge stages: Sobel gradients, magnitude normalization and thresholding.
//!
//! Each stage is a plain function over fixed-size grids so it can be tested
//! on its own:
//!
//! - [`sobel_gradients`] convolves the input with the two 3×3 Sobel kernels.
//! - [`gradient_magnitude`] and [`normalize`] build the magnitude plane and
//!   rescale it to the brightest pixel.
//! - [`threshold_in_place`] optionally binarizes the result.

pub mod grad;
pub mod magnitude;
pub mod threshold;

pub use grad::{sobel_gradients, Grad, Kernel3, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
pub use magnitude::{gradient_magnitude, normalize, Magnitude, OUTPUT_MAX};
pub use threshold::{apply_threshold, threshold_in_place};
