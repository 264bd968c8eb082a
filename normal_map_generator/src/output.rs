use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::{GeneratorError, Result};
use crate::params::BevelParams;
use crate::raster::{Checkpoint, Generator};

pub const FILE_STEM: &str = "normal-map";

/// Where and what to write.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputOptions {
    pub dir: PathBuf,
    /// Write `normal-map-<n>.png` after the flat and bevel passes.
    pub checkpoints: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            checkpoints: true,
        }
    }
}

/// Formats a bevel width the way it appears in file names: shortest round
/// trip digits, whole numbers keep a trailing `.0`, and magnitudes below
/// `1e-4` or from `1e16` up switch to exponent form with at least two
/// exponent digits (`1e-05`, `2.5e+16`).
pub fn format_width(v: f64) -> String {
    let magnitude = v.abs();
    if magnitude != 0.0 && (magnitude < 1e-4 || magnitude >= 1e16) {
        let shortest = format!("{:e}", v);
        let split = shortest.find('e').unwrap_or(shortest.len());
        let (mantissa, exponent) = shortest.split_at(split);
        let exponent: i32 = exponent.trim_start_matches('e').parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

pub fn checkpoint_file_name(n: usize) -> String {
    format!("{}-{}.png", FILE_STEM, n)
}

pub fn parameterized_file_name(params: &BevelParams) -> String {
    format!(
        "{}&d1={}&d2={}&zDir={}.png",
        FILE_STEM,
        format_width(params.d1),
        format_width(params.d2),
        params.z_dir
    )
}

pub fn final_file_name() -> String {
    format!("{}.png", FILE_STEM)
}

fn save(img: &RgbImage, path: PathBuf) -> Result<PathBuf> {
    img.save(&path).map_err(|source| GeneratorError::Save {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Runs the generator and writes every checkpoint into `options.dir`.
/// Returns the paths written, in order.
pub fn generate_to_dir(generator: &Generator, options: &OutputOptions) -> Result<Vec<PathBuf>> {
    let dir: &Path = &options.dir;
    std::fs::create_dir_all(dir).map_err(|source| GeneratorError::Io {
        path: dir.to_owned(),
        source,
    })?;

    let mut written = Vec::new();
    let mut counter = 0;

    generator.run(|checkpoint, img| {
        if checkpoint.is_final() {
            written.push(save(img, dir.join(parameterized_file_name(&generator.params)))?);
            written.push(save(img, dir.join(final_file_name()))?);
        } else {
            counter += 1;
            if options.checkpoints {
                written.push(save(img, dir.join(checkpoint_file_name(counter)))?);
            } else {
                log::debug!("skipping {:?} checkpoint", checkpoint);
            }
        }
        Ok(())
    })?;

    Ok(written)
}
