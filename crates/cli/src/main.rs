use clap::{Parser, Subcommand};
use dns_select_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "dns-select")]
#[command(version)]
#[command(about = "dns-select - policy-driven answer selection for SELECT records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and summarize it
    Check,

    /// Resolve one SELECT record for a simulated client
    Select(commands::SelectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        log_json: cli.log_json.then_some(true),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config)?;

    info!("Starting dns-select v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Check => commands::run_check(&config),
        Command::Select(args) => commands::run_select(&config, args),
    }
}
