use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use harvestnet_cli::commands::{self, inventory, report, routes};
use harvestnet_cli::output::JsonStyle;

#[derive(Parser, Debug)]
#[command(author, version, about = "Agricultural supply chain optimisation reports")]
struct Cli {
    /// JSON configuration file overriding thresholds and constants.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Write JSON to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn style(&self) -> JsonStyle {
        JsonStyle::from_compact_flag(self.compact)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the full supply chain report.
    Report {
        /// Logistics CSV (one lane plus facility attributes per row).
        #[arg(long)]
        logistics: PathBuf,
        /// Inventory CSV (one warehouse observation per row).
        #[arg(long)]
        inventory: PathBuf,
        /// Order recommendations by priority and prefix their labels.
        #[arg(long)]
        triage: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Compute all-pairs shortest routes and network topology.
    Routes {
        #[arg(long)]
        logistics: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Compute warehouse statistics and inventory policies.
    Inventory {
        #[arg(long)]
        inventory: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Report {
            logistics,
            inventory,
            triage,
            output,
        } => {
            let args = report::ReportArgs {
                logistics,
                inventory,
                output: output.output,
                compact: output.compact,
                triage,
            };
            report::handle_report(&args, &config)
        }
        Command::Routes { logistics, output } => {
            routes::handle_routes(&logistics, output.style(), output.output.as_deref())
        }
        Command::Inventory {
            inventory: path,
            output,
        } => inventory::handle_inventory(
            &path,
            &config.inventory,
            output.style(),
            output.output.as_deref(),
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
