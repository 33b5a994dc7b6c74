// crates/reelstock-cli/src/main.rs
//
// reelstock: import local footage from the project folder (AUDIO/, IMG/,
// VIDEO/) into the project document's timeline. The document is a JSON
// file next to the footage folders; running twice imports only what
// appeared since the last run.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use reelstock_core::{Category, ImportOptions};
use reelstock_ingest::{ImportPipeline, ImportReport, ProjectDoc};

/// Import video, audio and images from the project folder to timeline strips.
#[derive(Parser, Debug)]
#[command(name = "reelstock", version, about)]
struct Args {
    /// Project document (JSON). Created on first run; its directory is
    /// the footage root.
    #[arg(value_name = "PROJECT")]
    project: PathBuf,

    /// Always reimport all local files to new strips instead of only new
    /// files.
    #[arg(long)]
    import_all: bool,

    /// Drop the audio that comes embedded in video files.
    #[arg(long = "no-audio")]
    no_audio: bool,

    /// Frames each image strip occupies.
    #[arg(long, value_name = "FRAMES", default_value_t = 96)]
    image_length: i64,

    /// Frame gap between consecutive image strips.
    #[arg(long, value_name = "FRAMES", default_value_t = 24)]
    image_padding: i64,

    /// Increase logging verbosity (-v: info, -vv: debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("reelstock: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ImportReport> {
    let mut doc = if args.project.exists() {
        ProjectDoc::load(&args.project)?
    } else {
        // Persist immediately so the document has a working directory;
        // the pipeline refuses to run against an unsaved project.
        let mut doc = ProjectDoc::new();
        doc.save(&args.project)
            .with_context(|| format!("cannot create project {}", args.project.display()))?;
        log::info!("created new project {}", args.project.display());
        doc
    };

    let options = ImportOptions {
        import_all:    args.import_all,
        keep_audio:    !args.no_audio,
        image_length:  args.image_length,
        image_padding: args.image_padding,
    };

    let report = ImportPipeline::new(&mut doc, options).run()?;
    doc.save(&args.project)?;
    Ok(report)
}

fn print_report(report: &ImportReport) {
    if report.is_empty() {
        println!("Nothing new to import.");
        return;
    }
    for category in Category::ALL {
        if let Some(paths) = report.imported.get(&category) {
            println!(
                "{:<5} {:>3} file(s) → channel {}",
                category.folder_token(),
                paths.len(),
                report.channels[&category],
            );
        }
    }
    println!(
        "{} strip(s) created, {} transform effect(s) attached.",
        report.created.len(),
        report.effects.len(),
    );
}

fn init_logger(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
