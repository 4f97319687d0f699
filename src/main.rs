use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tokswap::core::FormInput;
use tokswap::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging, repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List available tokens with their prices
    Tokens,
    /// Display the price table
    Prices,
    /// Convert an amount of one token into another
    Swap {
        /// Token to convert from, e.g. ETH
        #[arg(short, long)]
        from: Option<String>,

        /// Token to convert to, e.g. USDC
        #[arg(short, long)]
        to: Option<String>,

        /// Amount of the source token
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
    },
}

impl From<Commands> for tokswap::AppCommand {
    fn from(cmd: Commands) -> tokswap::AppCommand {
        match cmd {
            Commands::Tokens => tokswap::AppCommand::Tokens,
            Commands::Prices => tokswap::AppCommand::Prices,
            Commands::Swap { from, to, amount } => {
                tokswap::AppCommand::Swap(FormInput { from, to, amount })
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => tokswap::cli::setup::setup(),
        Some(cmd) => tokswap::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
