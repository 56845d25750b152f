use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SobelError>;

#[derive(Error, Debug)]
pub enum SobelError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    #[error("malformed PGM: {0}")]
    Format(String),

    #[error("grid buffer holds {actual} cells, expected {expected}")]
    GridSize { expected: usize, actual: usize },

    #[error("expected a 256x256 image, header declares {width}x{height}")]
    DimensionMismatch { width: usize, height: usize },

    #[error("gradient magnitude is zero everywhere, nothing to normalize")]
    DegenerateInput,

    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("failed to load options {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl SobelError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        SobelError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach a file path to a bare stream error. Other variants pass through.
    pub fn at_path(self, path: &Path) -> Self {
        match self {
            SobelError::Stream(source) => SobelError::io(path, source),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_errors_pick_up_the_path() {
        let err = SobelError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = err.at_path(Path::new("in.pgm"));
        assert!(matches!(err, SobelError::Io { ref path, .. } if path == Path::new("in.pgm")));
        assert!(err.to_string().contains("in.pgm"));
    }

    #[test]
    fn format_errors_keep_their_message() {
        let err = SobelError::Format("bad magic".into()).at_path(Path::new("x.pgm"));
        assert_eq!(err.to_string(), "malformed PGM: bad magic");
    }
}
