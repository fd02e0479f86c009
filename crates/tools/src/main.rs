use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{MapGenerator, SeededRandom};
use std::path::PathBuf;

mod config_file;
mod preview;
mod report;

use config_file::{load_map_config, resolve_map_config};
use report::GenerationReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the map's random stream
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Map width in cells (overrides the config file)
    #[arg(long)]
    width: Option<usize>,
    /// Map height in cells (overrides the config file)
    #[arg(long)]
    height: Option<usize>,
    /// Minimum room width and height (overrides the config file)
    #[arg(long)]
    room_min: Option<usize>,
    /// Path to a TOML file with `width`, `height` and `room_min`
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
    /// Skip the terminal preview of the map
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = args.config.as_deref().map(load_map_config).transpose()?;
    let config = resolve_map_config(file_config, args.width, args.height, args.room_min);

    let dungeon = MapGenerator::new(config)
        .generate_detailed(SeededRandom::new(args.seed))
        .with_context(|| {
            format!(
                "Map generation failed for {}x{} with room_min {}",
                config.width, config.height, config.room_min
            )
        })?;

    if !args.no_preview {
        print!("{}", preview::render_ascii(&dungeon.grid));
        println!();
    }

    let report = GenerationReport::new(args.seed, config, &dungeon);
    match args.report {
        ReportFormat::Text => println!("{}", report.to_text()),
        ReportFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}
