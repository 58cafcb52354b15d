use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Args, Parser, Subcommand, crate_version};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ramp_engine::coords::CanvasSize;
use ramp_engine::paint::{Color, palette};
use ramp_engine::{GradientAngle, GradientSpec, randomize};

/// CLI structure defining the available commands and global arguments
#[derive(Parser, Debug)]
#[command(
    author,
    version = crate_version!(),
    about = "Ramp: randomize CSS linear gradients and export them as PNG",
    long_about = "Ramp builds CSS linear-gradient declarations from a color list and an angle, \
                  randomizes them, and rasterizes them to PNG images."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit env_logger filter, overrides RUST_LOG and -v
    #[arg(long = "log-filter", global = true, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a random gradient and its CSS
    Random {
        /// Seed for a reproducible gradient
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the CSS declaration for a gradient
    Css {
        #[command(flatten)]
        spec: SpecArgs,

        /// Also copy the declaration to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Rasterize a gradient to gradient-<unix-ms>.png
    Export {
        #[command(flatten)]
        spec: SpecArgs,

        /// Image width in pixels
        #[arg(long, default_value_t = CanvasSize::EXPORT.width)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = CanvasSize::EXPORT.height)]
        height: u32,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// List the fixed swatch palette
    Palette,
}

/// Arguments that describe one gradient.
///
/// Resolution order: base spec (`--random`, `--colors` or the default),
/// then `--angle`, then every `--set`, then every `--palette-color`.
#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Colors as #rrggbb, separated by commas or spaces
    #[arg(long, value_name = "COLORS", conflicts_with = "random")]
    pub colors: Option<String>,

    /// Angle in whole degrees, 0 to 360
    #[arg(long, value_parser = parse_angle)]
    pub angle: Option<GradientAngle>,

    /// Start from a random gradient
    #[arg(long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Replace one color, e.g. --set 1=#00ff00
    #[arg(long = "set", value_name = "INDEX=COLOR", value_parser = parse_color_edit)]
    pub set: Vec<(usize, Color)>,

    /// Replace one color with a palette swatch, e.g. --palette-color 0=7
    #[arg(long = "palette-color", value_name = "INDEX=SWATCH", value_parser = parse_swatch_edit)]
    pub palette_color: Vec<(usize, Color)>,
}

impl SpecArgs {
    pub fn resolve(&self) -> anyhow::Result<GradientSpec> {
        let mut spec = if self.random {
            random_spec(self.seed)
        } else if let Some(list) = &self.colors {
            let colors = GradientSpec::parse_colors(list).context("invalid --colors")?;
            GradientSpec::new(colors, GradientSpec::default().angle)
        } else {
            GradientSpec::default()
        };

        if let Some(angle) = self.angle {
            spec = spec.with_angle(angle);
        }

        for &(index, color) in self.set.iter().chain(&self.palette_color) {
            spec = spec
                .with_color_at(index, color)
                .with_context(|| format!("cannot set color {index} to {color}"))?;
        }

        spec.validate().context("invalid --colors")?;
        Ok(spec)
    }
}

pub fn random_spec(seed: Option<u64>) -> GradientSpec {
    match seed {
        Some(seed) => randomize(&mut StdRng::seed_from_u64(seed)),
        None => GradientSpec::random(),
    }
}

fn parse_angle(s: &str) -> Result<GradientAngle, String> {
    let degrees: i64 = s.trim().parse().map_err(|_| format!("not an integer: {s:?}"))?;
    GradientAngle::new(degrees).map_err(|e| e.to_string())
}

fn split_edit(s: &str) -> Result<(usize, &str), String> {
    let (index, value) = s.split_once('=').ok_or_else(|| format!("expected INDEX=VALUE, got {s:?}"))?;
    let index = index.trim().parse().map_err(|_| format!("invalid index {index:?}"))?;
    Ok((index, value.trim()))
}

fn parse_color_edit(s: &str) -> Result<(usize, Color), String> {
    let (index, value) = split_edit(s)?;
    let color = Color::from_hex(value).map_err(|e| e.to_string())?;
    Ok((index, color))
}

fn parse_swatch_edit(s: &str) -> Result<(usize, Color), String> {
    let (index, value) = split_edit(s)?;
    let swatch: usize = value.parse().map_err(|_| format!("invalid swatch {value:?}"))?;
    let color = palette::swatch(swatch)
        .ok_or_else(|| format!("swatch {swatch} out of range (0..{})", palette::PALETTE.len()))?;
    Ok((index, color))
}

pub fn validate_canvas(width: u32, height: u32) -> anyhow::Result<CanvasSize> {
    let size = CanvasSize::new(width, height);
    if !size.is_valid() {
        bail!("canvas must be at least 1x1, got {width}x{height}");
    }
    Ok(size)
}
