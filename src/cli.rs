//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use marvin::config::Config;
use marvin::models::Checker;
use marvin::output::OutputMode;
use marvin::runner::CheckRunner;
use marvin::store::ResultStore;

use crate::commands;

/// marvin - Documentation quality assurance tool
#[derive(Parser, Debug)]
#[command(
    name = "marvin",
    version,
    about = "Documentation quality assurance tool",
    long_about = "Marvin runs documentation checks like prose linting and markdown\n\
                  linting, saves every run as a JSON result record, and serves the\n\
                  accumulated history for browsing and re-running."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output directory for JSON results (overrides marvin.toml)
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run Vale prose linting
    Vale {
        /// Path to check (defaults to the configured docs root)
        path: Option<String>,

        /// Vale config file (default: auto-detect .vale.ini)
        #[arg(long)]
        config: Option<String>,

        /// Minimum alert level (suggestion, warning, error)
        #[arg(long)]
        min_alert_level: Option<String>,

        /// Glob pattern to filter files (e.g. '!node_modules')
        #[arg(long)]
        glob: Option<String>,
    },

    /// Run markdownlint markdown linting
    Markdownlint {
        /// Path to check (defaults to the configured docs root)
        path: Option<String>,

        /// markdownlint config file (default: auto-detect .markdownlint.yaml)
        #[arg(long)]
        config: Option<String>,

        /// Automatically fix issues where possible
        #[arg(long)]
        fix: bool,
    },

    /// Browse stored check results
    Results {
        #[command(subcommand)]
        action: ResultsAction,
    },

    /// Show an aggregated dashboard over all recorded checks
    Dashboard,

    /// Serve the results API over HTTP
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8787)]
        port: u16,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ResultsAction {
    /// List stored results, most recent first
    List {
        /// Filter by checker: vale, markdownlint
        #[arg(short, long)]
        checker: Option<Checker>,

        /// Page size
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Records to skip
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },

    /// Show a single result by identifier
    Show {
        /// Result identifier
        id: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = Config::load();
    if let Some(dir) = cli.output_dir {
        config.results_dir = dir;
    }

    match cli.command {
        Some(Command::Vale {
            path,
            config: vale_config,
            min_alert_level,
            glob,
        }) => {
            if vale_config.is_some() {
                config.vale.config = vale_config;
            }
            if let Some(level) = min_alert_level {
                config.vale.min_alert_level = level;
            }
            if glob.is_some() {
                config.vale.glob = glob;
            }
            commands::run_check(&make_runner(config), Checker::Vale, path.as_deref(), output_mode)
        },
        Some(Command::Markdownlint {
            path,
            config: ml_config,
            fix,
        }) => {
            if ml_config.is_some() {
                config.markdownlint.config = ml_config;
            }
            if fix {
                config.markdownlint.fix = true;
            }
            commands::run_check(
                &make_runner(config),
                Checker::Markdownlint,
                path.as_deref(),
                output_mode,
            )
        },
        Some(Command::Results { action }) => {
            let store = ResultStore::new(config.results_dir.clone());
            match action {
                ResultsAction::List {
                    checker,
                    limit,
                    offset,
                } => commands::results_list(&store, checker, limit, offset, output_mode),
                ResultsAction::Show { id } => commands::results_show(&store, &id, output_mode),
            }
        },
        Some(Command::Dashboard) => {
            let store = ResultStore::new(config.results_dir.clone());
            commands::dashboard(&store, output_mode)
        },
        #[cfg(feature = "ui")]
        Some(Command::Serve { port }) => commands::serve(make_runner(config), port),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("marvin v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("marvin v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'marvin --help' for usage");
                println!("Run 'marvin vale' to check your docs");
            }
            Ok(())
        },
    }
}

fn make_runner(config: Config) -> CheckRunner {
    let store = ResultStore::new(config.results_dir.clone());
    CheckRunner::new(config, store)
}
