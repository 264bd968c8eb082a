use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{GeneratorError, Result};

/// Width of the panel in model units. Bevel widths are given on this scale.
pub const PANEL_EXTENT: f64 = 10.0;

/// Largest accepted image side, in pixels.
pub const MAX_SIZE: u32 = 16384;

/// Which group of points sits at `z = 0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ZDir {
    /// Inner ring at `z = 0`, outer ring at `z = 1`.
    Down,
    /// Inner ring at `z = 1`, outer ring at `z = 0`.
    Up,
}

impl ZDir {
    /// Heights of the (inner, outer) point rings.
    pub fn heights(self) -> (f64, f64) {
        match self {
            ZDir::Down => (0.0, 1.0),
            ZDir::Up => (1.0, 0.0),
        }
    }
}

impl Default for ZDir {
    fn default() -> Self {
        ZDir::Down
    }
}

impl fmt::Display for ZDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZDir::Down => f.write_str("down"),
            ZDir::Up => f.write_str("up"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown z direction `{0}`, expected `down` or `up`")]
pub struct ParseZDirError(String);

impl FromStr for ZDir {
    type Err = ParseZDirError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "down" => Ok(ZDir::Down),
            "up" => Ok(ZDir::Up),
            _ => Err(ParseZDirError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ZDir {
    type Error = ParseZDirError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BevelParams {
    /// Width of the outer bevel step, on the 0..10 panel scale.
    pub d1: f64,
    /// Width of the inner bevel step.
    pub d2: f64,
    pub z_dir: ZDir,
    /// Side of the square output image, in pixels.
    pub size: u32,
}

impl Default for BevelParams {
    fn default() -> Self {
        Self {
            d1: 0.5,
            d2: 0.5,
            z_dir: ZDir::Down,
            size: 512,
        }
    }
}

impl BevelParams {
    /// Rejects anything that would produce empty, inverted or overlapping bands.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GeneratorError::RangeOverflow(
                "resolution must be at least one pixel".to_owned(),
            ));
        }

        if self.size > MAX_SIZE {
            return Err(GeneratorError::RangeOverflow(format!(
                "resolution {} exceeds the maximum of {}",
                self.size, MAX_SIZE
            )));
        }

        for (name, value) in [("d1", self.d1), ("d2", self.d2)].iter() {
            if !value.is_finite() || *value <= 0.0 {
                return Err(GeneratorError::RangeOverflow(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        // The flat top spans [d1 + d2, 10 - d1 - d2).
        if 2.0 * (self.d1 + self.d2) >= PANEL_EXTENT {
            return Err(GeneratorError::DegenerateGeometry(format!(
                "d1 + d2 = {} leaves no flat top, must be below {}",
                self.d1 + self.d2,
                PANEL_EXTENT / 2.0
            )));
        }

        Ok(())
    }
}
