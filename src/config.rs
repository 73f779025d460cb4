use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stitch width used for 24-stitch cards.
pub const STANDARD_STITCH_WIDTH: f64 = 4.5;
/// Stitch width used for 12-stitch cards.
pub const WIDE_STITCH_WIDTH: f64 = 9.0;
/// Upper bound for leader/trailer rows; keeps card size arithmetic in range.
pub const MAX_BLANK_ROWS: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Physical layout of a card. Every length is in millimetres.
///
/// The three `*_hole_radius` values are halved when drawn, so in practice
/// they describe the hole diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Fully punched leader/trailer rows above and below the pattern.
    pub blank_rows: usize,
    pub side_margin: f64,
    pub row_height: f64,
    pub stitch_width: f64,
    pub pattern_hole_radius: f64,
    pub clip_hole_radius: f64,
    pub sprocket_hole_radius: f64,
    pub stroke_width: f64,
    pub fill_color: String,
    pub stroke_color: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            blank_rows: 2,
            side_margin: 17.0,
            row_height: 5.0,
            stitch_width: STANDARD_STITCH_WIDTH,
            pattern_hole_radius: 3.5,
            clip_hole_radius: 3.0,
            sprocket_hole_radius: 3.5,
            stroke_width: 0.1,
            fill_color: "white".to_string(),
            stroke_color: "black".to_string(),
        }
    }
}

impl CardConfig {
    /// Load a JSON config. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject lengths that cannot describe a physical card.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blank_rows > MAX_BLANK_ROWS {
            return Err(ConfigError::Invalid(format!(
                "blank_rows must be at most {}, got {}",
                MAX_BLANK_ROWS, self.blank_rows
            )));
        }
        let lengths = [
            ("side_margin", self.side_margin),
            ("row_height", self.row_height),
            ("stitch_width", self.stitch_width),
            ("pattern_hole_radius", self.pattern_hole_radius),
            ("clip_hole_radius", self.clip_hole_radius),
            ("sprocket_hole_radius", self.sprocket_hole_radius),
            ("stroke_width", self.stroke_width),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive length, got {}",
                    name, value
                )));
            }
        }
        if self.fill_color.trim().is_empty() || self.stroke_color.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "fill_color and stroke_color cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fill/stroke attributes shared by the outline and every hole.
    pub fn style(&self) -> Style<'_> {
        Style {
            fill: &self.fill_color,
            stroke: &self.stroke_color,
            stroke_width: self.stroke_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style<'a> {
    pub fill: &'a str,
    pub stroke: &'a str,
    pub stroke_width: f64,
}
