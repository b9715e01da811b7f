//! Cropatlas CLI: inspect, colorize and fetch suitability rasters.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cropatlas_colormap::{grayscale_to_rgba, Ramp};
use cropatlas_core::io::{decode_png, read_geotiff};
use cropatlas_core::{ClimateModel, Crop, GrayRaster, Period, Selection, Solution, Ssp};
use cropatlas_fetch::blocking::RasterClientBlocking;
use cropatlas_fetch::ClientOptions;

/// Published dataset root used when no --data-url is given.
const DEFAULT_DATA_URL: &str = "https://data.cropatlas.org/v2";

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "cropatlas")]
#[command(author, version, about = "Crop suitability raster tools", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a raster file
    Info {
        /// Input raster (.png, .tif or .tiff)
        input: PathBuf,
    },
    /// Colorize a grayscale raster into an RGBA PNG
    Render {
        /// Input raster (.png, .tif or .tiff)
        input: PathBuf,
        /// Output PNG path
        output: PathBuf,
        /// Color ramp to apply
        #[arg(long, value_enum, default_value_t = RampArg::Suitability)]
        ramp: RampArg,
    },
    /// Download a scenario raster from the archive and colorize it
    Fetch {
        /// Root URL of the raster archive
        #[arg(long, default_value = DEFAULT_DATA_URL)]
        data_url: String,
        /// Crop token (e.g. maize)
        #[arg(long, default_value = "maize")]
        crop: Crop,
        /// Emissions scenario token (e.g. ssp245)
        #[arg(long, default_value = "ssp245")]
        ssp: Ssp,
        /// Period token (e.g. 2041_2060)
        #[arg(long, default_value = "2041_2060")]
        period: Period,
        /// Solution token (rainfed or irrigated)
        #[arg(long, default_value = "rainfed")]
        solution: Solution,
        /// Climate model token (e.g. gfdl_esm4)
        #[arg(long, default_value = "gfdl_esm4")]
        model: ClimateModel,
        /// Which raster of the comparator to fetch
        #[arg(long, value_enum, default_value_t = FetchKind::Scenario)]
        kind: FetchKind,
        /// Output PNG path
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RampArg {
    Suitability,
    Difference,
}

impl std::fmt::Display for RampArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Suitability => "suitability",
            Self::Difference => "difference",
        })
    }
}

impl From<RampArg> for Ramp {
    fn from(arg: RampArg) -> Self {
        match arg {
            RampArg::Suitability => Ramp::Suitability,
            RampArg::Difference => Ramp::Difference,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FetchKind {
    Baseline,
    Scenario,
    Difference,
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Baseline => "baseline",
            Self::Scenario => "scenario",
            Self::Difference => "difference",
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Info { input } => run_info(&input),
        Commands::Render {
            input,
            output,
            ramp,
        } => run_render(&input, &output, ramp.into()),
        Commands::Fetch {
            data_url,
            crop,
            ssp,
            period,
            solution,
            model,
            kind,
            output,
        } => {
            let selection = Selection {
                crop,
                ssp,
                period,
                solution,
                model,
            };
            run_fetch(&data_url, &selection, kind, &output)
        }
    }
}

// ─── Subcommands ────────────────────────────────────────────────────────

fn run_info(input: &Path) -> Result<()> {
    let raster = load_raster(input)?;

    println!("File:   {}", input.display());
    println!("Size:   {} x {} pixels", raster.cols(), raster.rows());

    let b = raster.bounds();
    println!(
        "Bounds: W {:.4}  S {:.4}  E {:.4}  N {:.4}",
        b.west, b.south, b.east, b.north
    );

    match raster.value_range() {
        Some((lo, hi)) => println!(
            "Range:  {} .. {} ({:.1} .. {:.1} %)",
            lo,
            hi,
            lo as f64 * 100.0 / 255.0,
            hi as f64 * 100.0 / 255.0
        ),
        None => println!("Range:  all nodata"),
    }

    Ok(())
}

fn run_render(input: &Path, output: &Path, ramp: Ramp) -> Result<()> {
    let raster = load_raster(input)?;
    write_colorized(&raster, ramp, output)?;
    println!(
        "Wrote {} ({} x {})",
        output.display(),
        raster.cols(),
        raster.rows()
    );
    Ok(())
}

fn run_fetch(data_url: &str, selection: &Selection, kind: FetchKind, output: &Path) -> Result<()> {
    let (url, ramp) = match kind {
        FetchKind::Baseline => (selection.baseline_url(data_url), Ramp::Suitability),
        FetchKind::Scenario => (selection.suitability_url(data_url), Ramp::Suitability),
        FetchKind::Difference => (selection.difference_url(data_url), Ramp::Difference),
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Fetching {}", url));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let client = RasterClientBlocking::new(ClientOptions::default())?;
    let raster = client
        .fetch_gray(&url, cropatlas_core::LatLonBounds::WORLD)
        .with_context(|| format!("fetching {}", url))?;

    spinner.finish_with_message(format!(
        "Fetched {} x {} pixels",
        raster.cols(),
        raster.rows()
    ));

    write_colorized(&raster, ramp, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn load_raster(input: &Path) -> Result<GrayRaster> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => {
            let bytes =
                std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
            decode_png(&bytes).with_context(|| format!("decoding {}", input.display()))
        }
        "tif" | "tiff" => {
            read_geotiff(input).with_context(|| format!("decoding {}", input.display()))
        }
        other => bail!("unsupported raster extension '{}'", other),
    }
}

fn write_colorized(raster: &GrayRaster, ramp: Ramp, output: &Path) -> Result<()> {
    let rgba = grayscale_to_rgba(raster, ramp);
    let image = image::RgbaImage::from_raw(raster.cols() as u32, raster.rows() as u32, rgba)
        .context("RGBA buffer does not match raster dimensions")?;
    image
        .save(output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
