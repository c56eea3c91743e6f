use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rivals", version, about = "Rivals Helper CLI")]
struct Cli {
    /// Roster file to use instead of the configured or built-in heroes
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend heroes for a role on a map
    Recommend(commands::recommend::RecommendArgs),
    /// Pick a game mode, map and role interactively
    Pick,
    /// List heroes in the roster
    Heroes {
        #[command(flatten)]
        args: commands::heroes::HeroesArgs,
    },
    /// List game modes and their maps
    Maps,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let roster = cli.roster.as_deref();
    let result = match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args, roster),
        Commands::Pick => commands::pick::run(roster),
        Commands::Heroes { args } => commands::heroes::run(args, roster),
        Commands::Maps => commands::maps::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
