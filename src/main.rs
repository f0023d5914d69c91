use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use debchangelog::cli::orchestration::{run_workflow, Sources, WorkflowArgs};
use debchangelog::clock::SystemClock;
use debchangelog::config;
use debchangelog::git::Git2History;
use debchangelog::metadata::CargoMetadata;
use debchangelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "debchangelog",
    version,
    about = "Prepend a changelog entry built from commits since the last release tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Release version (defaults to the cargo package version)")]
    release: Option<String>,

    #[arg(short, long, help = "Changelog file to prepend to")]
    file: Option<PathBuf>,

    #[arg(long, help = "Print the entry without writing the changelog")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("debchangelog")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logger(args.debug)?;

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let maintainer = match config.resolve_maintainer() {
        Ok(maintainer) => maintainer,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let history = match Git2History::open(".") {
        Ok(history) => history,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = WorkflowArgs {
        release: args.release,
        changelog_path: args.file,
        dry_run: args.dry_run,
    };

    ui::display_status("Collecting commits since the last release...");
    let sources = Sources {
        history: &history,
        metadata: &CargoMetadata::default(),
        clock: &SystemClock,
        maintainer,
    };

    let result = match run_workflow(&workflow_args, &config, sources) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Failed to generate changelog entry: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_status(&format!(
        "{} {}: {}",
        result.package.name,
        result.package.version,
        ui::format_counts(result.change_count, result.bug_fix_count)
    ));

    if result.written {
        ui::display_success(&format!("Updated {}", result.path.display()));
    } else {
        ui::display_entry(&result.entry, "Dry run, entry not written:");
    }

    Ok(())
}
