use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use photo_prep::{manifest, run_all, run_stage, AppConfig, RunReport, StageKind};

#[derive(Parser)]
#[command(
    name = "photo-prep",
    version,
    about = "Prepare gallery assets: unzip, convert to WebP, flatten, clean up",
    after_help = "HEIC input requires a build with the `heic` cargo feature (links the system libheif)."
)]
struct Cli {
    /// Root directory to operate on, overriding the configured photos_dir.
    #[arg(long, global = true)]
    dir: Option<String>,

    /// Print the run report as JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline (the default when no subcommand is given).
    Run,
    /// Run a single stage.
    Stage {
        #[arg(value_enum)]
        stage: StageKind,
    },
    /// Print the gallery manifest as JSON on stdout.
    Manifest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::new()?;
    if let Some(dir) = cli.dir {
        config.photos_dir = dir;
    }

    // Initialize env_logger based on config.log_level
    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting photo-prep in {:?}", config.root());

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let report = run_all(&config)?;
            emit_run_report(&report, cli.json)?;
        }
        Command::Stage { stage } => {
            let report = RunReport {
                stages: vec![run_stage(stage, &config)?],
            };
            emit_run_report(&report, cli.json)?;
        }
        Command::Manifest => {
            let entries = manifest::build(&config)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    info!("Photo-prep finished");

    Ok(())
}

fn emit_run_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    for stage in &report.stages {
        if stage.skipped.is_empty() {
            continue;
        }
        eprintln!(
            "stage {}: {} file(s) skipped",
            stage.stage,
            stage.skipped.len()
        );
        for skip in &stage.skipped {
            eprintln!("  {} ({})", skip.path, skip.reason);
        }
    }
    Ok(())
}
