//! Renders the RVC attenuation curves into a PNG chart.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simple_logger::SimpleLogger;

use rvc_curves::chart::{self, ChartStyle};
use rvc_curves::CurveSet;

#[derive(Parser)]
#[command(author, version, about = "Plot the RVC attenuation curves of both modes")]
struct Cli {
    /// Output path of the PNG file.
    #[arg(default_value = "rvc_curves.png")]
    output: PathBuf,
    /// Print the computed samples as CSV before rendering.
    #[arg(long)]
    table: bool,
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    SimpleLogger::new()
        .with_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init()
        .context("failed to initialize logger")?;

    let curves = CurveSet::compute();

    if cli.table {
        println!("rvc,position,traditional_db,default_db");
        for sample in curves.samples() {
            println!(
                "{},{:.4},{},{}",
                sample.rvc, sample.position, sample.traditional_db, sample.default_db
            );
        }
    }

    let style = ChartStyle::default();
    chart::render(&curves, &style, &cli.output)
        .with_context(|| format!("failed to write chart to {}", cli.output.display()))?;

    println!(
        "Saved: {} ({}x{})",
        cli.output.display(),
        style.width,
        style.height
    );

    Ok(())
}
