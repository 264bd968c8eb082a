use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use normal_map_generator::{BevelParams, OutputOptions, ZDir};

#[derive(Debug, Default, Parser)]
#[command(name = "bevel-normal-map", version, about = "Renders the normal map of a bevelled panel")]
pub struct Cli {
    /// Outer bevel width, on a 0..10 panel scale [default: 0.5]
    #[arg(long)]
    pub d1: Option<f64>,

    /// Inner bevel width [default: 0.5]
    #[arg(long)]
    pub d2: Option<f64>,

    /// Whether the flat top sits below or above the rim [default: down]
    #[arg(long, value_name = "down|up")]
    pub z_dir: Option<ZDir>,

    /// Side of the square image in pixels [default: 512]
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Directory the images are written to [default: .]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML file with any of d1, d2, z_dir, size, output_dir
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only write the finished map, not the per-pass snapshots
    #[arg(long)]
    pub no_checkpoints: bool,

    /// Log debug output, including the computed points, normals and bands
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(flatten)]
    pub params: BevelParams,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub params: BevelParams,
    pub output: OutputOptions,
}

/// Command line over config file over defaults.
pub fn merge(file: FileConfig, cli: &Cli) -> Settings {
    let mut params = file.params;
    if let Some(d1) = cli.d1 {
        params.d1 = d1;
    }
    if let Some(d2) = cli.d2 {
        params.d2 = d2;
    }
    if let Some(z_dir) = cli.z_dir {
        params.z_dir = z_dir;
    }
    if let Some(size) = cli.size {
        params.size = size;
    }

    let mut output = OutputOptions::default();
    if let Some(dir) = cli.output_dir.clone().or(file.output_dir) {
        output.dir = dir;
    }
    output.checkpoints = !cli.no_checkpoints;

    Settings { params, output }
}

pub fn resolve(cli: &Cli) -> anyhow::Result<Settings> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    Ok(merge(file, cli))
}
