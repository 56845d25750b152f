//! Binary PGM (P5) codec for fixed-size grids.
//!
//! - `read_pgm` / `load_pgm`: parse a `P5` header and copy exactly 256×256
//!   pixel bytes into an [`IntensityGrid`].
//! - `write_pgm` / `save_pgm`: emit `P5\n256 256\n255\n` followed by one
//!   truncated byte per cell of a [`MagnitudeGrid`].
//!
//! Header tokens may be separated by any ASCII whitespace and `#` comments,
//! as netpbm allows. Exactly one whitespace byte separates `maxval` from the
//! raster.
use super::grid::{IntensityGrid, MagnitudeGrid, GRID_CELLS, GRID_SIZE};
use crate::config::HeaderPolicy;
use crate::error::{Result, SobelError};
use log::{debug, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const PGM_MAGIC: &str = "P5";
/// Each stored intensity is masked to 8 bits.
pub const PIXEL_MASK: i32 = 0xFF;
/// `maxval` written to every output image.
pub const OUTPUT_MAXVAL: u16 = 255;

/// Values parsed from a PGM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub maxval: u16,
}

impl PgmHeader {
    pub fn matches_grid(&self) -> bool {
        self.width == GRID_SIZE && self.height == GRID_SIZE
    }
}

fn next_byte<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    Ok(reader.by_ref().bytes().next().transpose()?)
}

/// Read one whitespace-delimited header token, skipping leading whitespace
/// and comments. Consumes the single delimiter byte that ends the token.
fn next_token<R: Read>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();
    while let Some(byte) = next_byte(reader)? {
        if token.is_empty() && byte == b'#' {
            while let Some(b) = next_byte(reader)? {
                if b == b'\n' || b == b'\r' {
                    break;
                }
            }
            continue;
        }
        if byte.is_ascii_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(byte);
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|_| SobelError::Format("header contains non-ASCII bytes".into()))
}

fn header_number<R: Read>(reader: &mut R, field: &str) -> Result<usize> {
    let token = next_token(reader)?
        .ok_or_else(|| SobelError::Format(format!("header ends before {field}")))?;
    token
        .parse::<usize>()
        .map_err(|_| SobelError::Format(format!("{field} is not a number: {token:?}")))
}

/// Parse the `P5 <width> <height> <maxval>` header, leaving the reader at the
/// first raster byte.
pub fn read_header<R: Read>(reader: &mut R) -> Result<PgmHeader> {
    match next_token(reader)? {
        Some(magic) if magic == PGM_MAGIC => {}
        Some(magic) => {
            return Err(SobelError::Format(format!(
                "expected magic {PGM_MAGIC}, found {magic:?}"
            )))
        }
        None => return Err(SobelError::Format("empty input".into())),
    }
    let width = header_number(reader, "width")?;
    let height = header_number(reader, "height")?;
    let maxval = header_number(reader, "maxval")?;
    if maxval == 0 || maxval > usize::from(OUTPUT_MAXVAL) {
        return Err(SobelError::Format(format!(
            "maxval must be in 1..=255, got {maxval}"
        )));
    }
    Ok(PgmHeader {
        width,
        height,
        maxval: maxval as u16,
    })
}

/// Parse a P5 image and copy its first 256×256 pixel bytes into a grid.
pub fn read_pgm<R: BufRead>(
    reader: &mut R,
    policy: HeaderPolicy,
) -> Result<(PgmHeader, IntensityGrid)> {
    let header = read_header(reader)?;
    if !header.matches_grid() {
        match policy {
            HeaderPolicy::Strict => {
                return Err(SobelError::DimensionMismatch {
                    width: header.width,
                    height: header.height,
                })
            }
            HeaderPolicy::Lenient => warn!(
                "header declares {}x{}, reading {GRID_SIZE}x{GRID_SIZE} regardless",
                header.width, header.height
            ),
        }
    }

    let mut raster = Vec::with_capacity(GRID_CELLS);
    reader
        .by_ref()
        .take(GRID_CELLS as u64)
        .read_to_end(&mut raster)?;
    if raster.len() < GRID_CELLS {
        return Err(SobelError::Format(format!(
            "truncated pixel data: expected {GRID_CELLS} bytes, got {}",
            raster.len()
        )));
    }

    let grid = IntensityGrid::from_vec(
        raster
            .into_iter()
            .map(|b| i32::from(b) & PIXEL_MASK)
            .collect(),
    )?;
    Ok((header, grid))
}

/// Open `path` and read it as a P5 image.
pub fn load_pgm(path: &Path, policy: HeaderPolicy) -> Result<(PgmHeader, IntensityGrid)> {
    let file = File::open(path).map_err(|e| SobelError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let loaded = read_pgm(&mut reader, policy).map_err(|e| e.at_path(path))?;
    debug!(
        "loaded {} ({}x{}, maxval {})",
        path.display(),
        loaded.0.width,
        loaded.0.height,
        loaded.0.maxval
    );
    Ok(loaded)
}

/// Convert an output value to a byte by truncation. Out-of-range values
/// saturate and NaN becomes 0.
#[inline]
pub fn to_output_byte(value: f64) -> u8 {
    value as u8
}

/// Serialize a grid as a 256×256 P5 image with maxval 255.
pub fn write_pgm<W: Write>(writer: &mut W, grid: &MagnitudeGrid) -> Result<()> {
    write!(
        writer,
        "{PGM_MAGIC}\n{GRID_SIZE} {GRID_SIZE}\n{OUTPUT_MAXVAL}\n"
    )?;
    let mut bytes = [0u8; GRID_SIZE];
    for row in grid.rows() {
        for (dst, &value) in bytes.iter_mut().zip(row) {
            *dst = to_output_byte(value);
        }
        writer.write_all(&bytes)?;
    }
    Ok(())
}

/// Write a grid to `path`, creating parent directories.
pub fn save_pgm(path: &Path, grid: &MagnitudeGrid) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| SobelError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_pgm(&mut writer, grid).map_err(|e| e.at_path(path))?;
    writer.flush().map_err(|e| SobelError::io(path, e))?;
    debug!("wrote {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SobelError::io(parent, e))?;
        }
    }
    Ok(())
}
