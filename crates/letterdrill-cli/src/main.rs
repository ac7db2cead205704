//! letterdrill CLI — the interactive terminal front end.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::Directive;

use letterdrill_core::model::{Direction, GridOrder, Mode, Unit};

mod commands;

#[derive(Parser)]
#[command(name = "letterdrill", version, about = "Letter/number alphabet drills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a drill
    Play {
        /// Quiz mode: l2n, n2l, mix, grid
        #[arg(long)]
        mode: Option<Mode>,

        /// First letter of the range
        #[arg(long)]
        start: Option<String>,

        /// Last letter of the range
        #[arg(long)]
        end: Option<String>,

        /// Number of questions, 1-1000 (ignored in grid mode)
        #[arg(long)]
        count: Option<u32>,

        /// Question unit: single, sequence
        #[arg(long)]
        unit: Option<Unit>,

        /// Letters per sequence question (clamped to 2-12)
        #[arg(long)]
        sequence_length: Option<u32>,

        /// Grid cell order: ordered, shuffled
        #[arg(long)]
        grid_order: Option<GridOrder>,

        /// What grid cells ask for: l2n, n2l
        #[arg(long)]
        grid_ask: Option<Direction>,

        /// Seed for reproducible questions
        #[arg(long)]
        seed: Option<u64>,

        /// Write a JSON report of the session to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Do not remember this configuration
        #[arg(long)]
        no_save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the A-Z index table
    Index {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show a saved session report
    Review {
        /// Report JSON
        #[arg(long)]
        report: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Forget the remembered drill settings
    Reset {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    let default_directive = match "letterdrill=warn".parse::<Directive>() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("Error: invalid log directive: {e}");
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            mode,
            start,
            end,
            count,
            unit,
            sequence_length,
            grid_order,
            grid_ask,
            seed,
            report,
            no_save,
            config,
        } => commands::play::execute(commands::play::PlayArgs {
            overrides: commands::play::Overrides {
                mode,
                start,
                end,
                count,
                unit,
                sequence_length,
                grid_order,
                grid_ask,
            },
            seed,
            report,
            no_save,
            config,
        }),
        Commands::Index { config } => commands::index::execute(config),
        Commands::Review { report, format } => commands::review::execute(report, format),
        Commands::Reset { config } => commands::reset::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
