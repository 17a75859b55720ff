use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vibepay::cli::{
    handle_chat, handle_goals, handle_reset, handle_say, handle_summary, handle_transactions,
};
use vibepay::config::{Settings, VibepayPaths};
use vibepay::storage::{self, STORAGE_KEY};

#[derive(Parser)]
#[command(
    name = "vibepay",
    version,
    about = "Conversational finance log for the terminal",
    long_about = "VibePay logs income and expenses from plain Portuguese sentences \
                  like \"gastei R$75 com mercado\", keeps running totals and \
                  suggests savings tips."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat,

    /// Send a single message
    Say {
        /// The message, e.g. "gastei R$75 com mercado"
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show income, expenses and balance
    Summary,

    /// List the most recent transactions
    #[command(alias = "txn")]
    Transactions {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the active savings goals
    Goals,

    /// Clear all transactions and restore the default goals
    Reset,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let paths = VibepayPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let repo = storage::open(&paths)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Chat) => {
            let stdin = io::stdin();
            handle_chat(&repo, &settings, stdin.lock(), &mut out)?;
        }
        Some(Commands::Say { message }) => {
            handle_say(&repo, &settings, &message.join(" "), &mut out)?;
        }
        Some(Commands::Summary) => handle_summary(&repo, &settings, &mut out)?,
        Some(Commands::Transactions { limit }) => {
            handle_transactions(&repo, &settings, limit, &mut out)?;
        }
        Some(Commands::Goals) => handle_goals(&repo, &mut out)?,
        Some(Commands::Reset) => handle_reset(&repo, &mut out)?,
        Some(Commands::Config) => {
            println!("VibePay Configuration");
            println!("=====================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Session file:    {}", repo.store().path_for(STORAGE_KEY).display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!(
                "  Food alert threshold: {}",
                settings
                    .food_alert_threshold
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Reserve suggestion:   {}%", settings.reserve_percent);
            println!("  Recent transactions:  {}", settings.recent_transactions);
        }
        None => {
            println!("VibePay - conversational finance log");
            println!();
            println!("Run 'vibepay chat' to start talking.");
            println!("Run 'vibepay say \"gastei R$75 com mercado\"' to log a single message.");
            println!("Run 'vibepay --help' for usage information.");
        }
    }

    Ok(())
}
