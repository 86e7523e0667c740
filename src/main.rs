use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use hilbert_grid::config::{Config, OutputFormat};
use hilbert_grid::{GridOrder, render};

/// Side used when neither the command line nor the config file gives one.
const DEFAULT_SIDE: u64 = 16;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Grid(#[from] hilbert_grid::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(String),
}

#[derive(Parser)]
#[command(name = "hilbert")]
#[command(about = "Convert between Hilbert curve distances and 2D grid cells")]
struct Cli {
    /// TOML file with default settings
    #[arg(long, global = true, env = "HILBERT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "hilbert_grid=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Grid and output options shared by the conversion commands.
#[derive(clap::Args)]
struct GridArgs {
    /// Side of the square grid (power of two)
    #[arg(short, long, env = "HILBERT_SIDE")]
    side: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the curve distance of cell (X, Y)
    Encode {
        /// X coordinate (0 is the left column)
        x: u64,

        /// Y coordinate (0 is the bottom row)
        y: u64,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Print the cell at distance D along the curve
    Decode {
        /// Distance along the curve
        d: u64,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Print every cell in curve order
    Walk {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Print the smallest grid that holds CELLS items
    Fit {
        /// Number of items to place on the grid
        cells: u128,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Draw the curve with box-drawing characters
    Render {
        /// Side of the square grid (power of two, at most 128)
        #[arg(short, long, env = "HILBERT_SIDE")]
        side: Option<u64>,
    },
}

/// One cell of the curve, as printed in JSON output.
#[derive(Debug, Serialize)]
struct CellRecord {
    d: u64,
    x: u64,
    y: u64,
}

/// Result of `fit`, as printed in JSON output.
#[derive(Debug, Serialize)]
struct FitRecord {
    cells: u128,
    side: u64,
    level: u32,
}

impl GridArgs {
    fn order(&self, config: &Config) -> Result<GridOrder<u64>, AppError> {
        let side = resolve_side(self.side, config);
        tracing::debug!(side = side, "resolved grid side");
        Ok(GridOrder::new(side)?)
    }

    fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

fn resolve_side(flag: Option<u64>, config: &Config) -> u64 {
    flag.or(config.grid.side).unwrap_or(DEFAULT_SIDE)
}

fn init_logging(level: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| AppError::LogFilter(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = Config::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Encode { x, y, grid } => {
            let order = grid.order(&config)?;
            let d = order.encode(x, y)?;
            match grid.format(&config) {
                OutputFormat::Text => writeln!(out, "{d}")?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut out, &CellRecord { d, x, y })?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Decode { d, grid } => {
            let order = grid.order(&config)?;
            let point = order.decode(d)?;
            match grid.format(&config) {
                OutputFormat::Text => writeln!(out, "{} {}", point.x, point.y)?,
                OutputFormat::Json => {
                    let record = CellRecord {
                        d,
                        x: point.x,
                        y: point.y,
                    };
                    serde_json::to_writer(&mut out, &record)?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Walk { grid } => {
            let order = grid.order(&config)?;
            tracing::info!(side = order.side(), cells = order.cells(), "walking curve");
            let cells = order.iter().zip(0u64..);
            match grid.format(&config) {
                OutputFormat::Text => {
                    for (point, d) in cells {
                        writeln!(out, "{d} {} {}", point.x, point.y)?;
                    }
                }
                OutputFormat::Json => {
                    let records: Vec<CellRecord> = cells
                        .map(|(point, d)| CellRecord {
                            d,
                            x: point.x,
                            y: point.y,
                        })
                        .collect();
                    serde_json::to_writer(&mut out, &records)?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Fit { cells, format } => {
            let order = GridOrder::<u64>::fitting(cells)?;
            match format.unwrap_or(config.output.format) {
                OutputFormat::Text => writeln!(out, "{}", order.side())?,
                OutputFormat::Json => {
                    let record = FitRecord {
                        cells,
                        side: order.side(),
                        level: order.level(),
                    };
                    serde_json::to_writer(&mut out, &record)?;
                    writeln!(out)?;
                }
            }
        }
        Commands::Render { side } => {
            let side = resolve_side(side, &config);
            let side = u16::try_from(side).map_err(|_| hilbert_grid::Error::OrderTooLarge {
                side: u128::from(side),
                bits: u16::BITS,
            })?;
            let order = GridOrder::new(side)?;
            write!(out, "{}", render::ascii(&order))?;
        }
    }

    out.flush()?;
    Ok(())
}
