use sobel_pgm::image::{IntensityGrid, GRID_SIZE};

/// Generates a high-contrast checkerboard image.
pub fn checkerboard_u8(cell: usize) -> Vec<u8> {
    assert!(cell > 0, "cell size must be positive");

    let mut img = vec![0u8; GRID_SIZE * GRID_SIZE];
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let sum = x / cell + y / cell;
            img[y * GRID_SIZE + x] = if sum & 1 == 0 { 32 } else { 220 };
        }
    }
    img
}

/// Black left half, white right half. The step lies between columns 127 and 128.
pub fn vertical_edge_u8() -> Vec<u8> {
    let mut img = vec![0u8; GRID_SIZE * GRID_SIZE];
    for row in img.chunks_exact_mut(GRID_SIZE) {
        row[GRID_SIZE / 2..].fill(255);
    }
    img
}

/// Uniform image.
pub fn flat_u8(value: u8) -> Vec<u8> {
    vec![value; GRID_SIZE * GRID_SIZE]
}

/// Smooth radial falloff from the center, giving a spread of gradient strengths.
pub fn radial_u8() -> Vec<u8> {
    let c = (GRID_SIZE as f64 - 1.0) / 2.0;
    let mut img = vec![0u8; GRID_SIZE * GRID_SIZE];
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let d = ((x as f64 - c).powi(2) + (y as f64 - c).powi(2)).sqrt();
            img[y * GRID_SIZE + x] = (255.0 - d * 1.4).clamp(0.0, 255.0) as u8;
        }
    }
    img
}

/// Wrap raw pixels in a P5 header declaring `width`×`height`.
pub fn pgm_bytes(width: usize, height: usize, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = format!("P5\n{width} {height}\n255\n").into_bytes();
    bytes.extend_from_slice(pixels);
    bytes
}

pub fn to_grid(pixels: &[u8]) -> IntensityGrid {
    IntensityGrid::from_vec(pixels.iter().map(|&b| i32::from(b)).collect())
        .expect("synthetic image has grid size")
}
