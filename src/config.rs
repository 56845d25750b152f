//! Run options: threshold, header and degenerate-input policies.
//!
//! Options can be built in code or loaded from a JSON file:
//!
//! ```json
//! {
//!   "threshold": 0.25,
//!   "header": "lenient",
//!   "degenerate": "fail",
//!   "threshold_parsing": "strict"
//! }
//! ```
//!
//! Every field is optional and falls back to [`PipelineOptions::default`].
use crate::error::{Result, SobelError};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// `low` preset threshold.
pub const THRESHOLD_LOW: f64 = 0.1568;
/// `high` preset threshold.
pub const THRESHOLD_HIGH: f64 = 0.4314;

/// How declared header dimensions are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPolicy {
    /// Reject any header that does not declare 256×256.
    #[default]
    Strict,
    /// Ignore declared dimensions and read 256×256 bytes anyway.
    Lenient,
}

/// What to do when the maximum gradient magnitude is zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Write an all-zero image.
    #[default]
    Zero,
    /// Abort with `SobelError::DegenerateInput`.
    Fail,
}

/// How threshold text is turned into a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdParsing {
    /// Presets or a float in [0, 1]; anything else is an error.
    #[default]
    Strict,
    /// C `atof` semantics: longest numeric prefix, 0.0 when there is none.
    Lenient,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Binary threshold in unit-interval terms; `None` disables thresholding.
    pub threshold: Option<f64>,
    pub header: HeaderPolicy,
    pub degenerate: DegeneratePolicy,
    pub threshold_parsing: ThresholdParsing,
}

impl PipelineOptions {
    pub fn with_threshold(mut self, threshold: Option<f64>) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_header_policy(mut self, header: HeaderPolicy) -> Self {
        self.header = header;
        self
    }

    pub fn with_degenerate_policy(mut self, degenerate: DegeneratePolicy) -> Self {
        self.degenerate = degenerate;
        self
    }

    /// Check a configured threshold against the parsing mode's rules.
    pub fn validate(&self) -> Result<()> {
        match (self.threshold, self.threshold_parsing) {
            (Some(t), ThresholdParsing::Strict) => check_unit_range(t).map(|_| ()),
            _ => Ok(()),
        }
    }
}

fn check_unit_range(value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SobelError::InvalidThreshold(format!(
            "{value} is not between 0 and 1"
        )))
    }
}

/// Parse a threshold argument.
///
/// Strict mode accepts `low`, `high` (ASCII case-insensitive) or a float in
/// [0, 1]. Lenient mode never fails.
pub fn parse_threshold(text: &str, mode: ThresholdParsing) -> Result<f64> {
    match mode {
        ThresholdParsing::Lenient => Ok(parse_float_prefix(text)),
        ThresholdParsing::Strict => {
            let trimmed = text.trim();
            if trimmed.eq_ignore_ascii_case("low") {
                return Ok(THRESHOLD_LOW);
            }
            if trimmed.eq_ignore_ascii_case("high") {
                return Ok(THRESHOLD_HIGH);
            }
            let value = trimmed.parse::<f64>().map_err(|_| {
                SobelError::InvalidThreshold(format!(
                    "could not parse {text:?} as \"low\", \"high\" or a float"
                ))
            })?;
            check_unit_range(value)
        }
    }
}

/// Parse a threshold taken straight from the command line.
///
/// Text that is not valid UTF-8 is rejected in strict mode. Lenient mode
/// parses the lossy conversion, so the numeric prefix before the first
/// invalid byte still counts.
pub fn parse_threshold_arg(arg: &OsStr, mode: ThresholdParsing) -> Result<f64> {
    match (arg.to_str(), mode) {
        (Some(text), _) => parse_threshold(text, mode),
        (None, ThresholdParsing::Lenient) => Ok(parse_float_prefix(&arg.to_string_lossy())),
        (None, ThresholdParsing::Strict) => Err(SobelError::InvalidThreshold(format!(
            "{} is not valid UTF-8",
            arg.to_string_lossy()
        ))),
    }
}

/// Longest decimal prefix of `text` after leading whitespace, or 0.0.
fn parse_float_prefix(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    let mut end = i;

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<PipelineOptions> {
    let data = fs::read_to_string(path).map_err(|e| SobelError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let options: PipelineOptions =
        serde_json::from_str(&data).map_err(|e| SobelError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    options.validate()?;
    Ok(options)
}
