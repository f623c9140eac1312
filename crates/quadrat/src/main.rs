use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use quadrat_core::{Analyzer, Rect};

#[derive(Parser)]
#[command(
    name = "quadrat",
    version,
    about = "Coverage and overlap analysis for axis-aligned rectangles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Every subcommand reads a JSON array of `{x, y, width, height}`
/// objects from FILE and prints its result to stdout.
#[derive(Subcommand)]
enum Commands {
    /// List all pairs of overlapping rectangles
    Pairs { file: PathBuf },
    /// Compute the exact union area (overlaps counted once)
    Area { file: PathBuf },
    /// Compute the intersection rectangle of every overlapping pair
    Regions { file: PathBuf },
    /// Check whether a point is covered by any rectangle
    Covered {
        file: PathBuf,
        /// X coordinate of the point
        #[arg(long)]
        x: i64,
        /// Y coordinate of the point
        #[arg(long)]
        y: i64,
    },
    /// Find a point covered by the maximum number of rectangles
    Peak { file: PathBuf },
    /// Print the aggregate coverage report
    Stats { file: PathBuf },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Pairs { file } => print_json(&load(&file)?.find_overlaps()),
        Commands::Area { file } => {
            println!("{}", load(&file)?.coverage_area());
            Ok(())
        }
        Commands::Regions { file } => print_json(&load(&file)?.overlap_regions()),
        Commands::Covered { file, x, y } => {
            println!("{}", load(&file)?.is_point_covered(x, y));
            Ok(())
        }
        Commands::Peak { file } => match load(&file)?.max_overlap_point() {
            Some(peak) => print_json(&peak),
            None => Err("no rectangle with positive extent".into()),
        },
        Commands::Stats { file } => {
            let stats = load(&file)?.stats().map_err(|e| e.to_string())?;
            print_json(&stats)
        }
    }
}

/// Loads a JSON rectangle file and wraps it in an analyzer.
///
/// Returns an error string describing what went wrong (IO error,
/// parse error, etc.).
fn load(path: &Path) -> Result<Analyzer, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let rects: Vec<Rect> =
        serde_json::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(Analyzer::new(rects))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
