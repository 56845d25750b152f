pub mod grid;
pub mod pgm;

pub use self::grid::{is_border, Grid, IntensityGrid, MagnitudeGrid, GRID_CELLS, GRID_SIZE};
pub use self::pgm::{load_pgm, read_pgm, save_pgm, write_pgm, PgmHeader};
