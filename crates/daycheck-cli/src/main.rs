use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "daycheck", version, about = "Daily mood and wellbeing check-in")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer today's check-in interactively
    Run(commands::run::RunArgs),
    /// Answer a check-in from a list of option values
    Replay(commands::replay::ReplayArgs),
    /// List the questions for a time of day
    Questions(commands::questions::QuestionsArgs),
    /// Print the greeting for the current time of day
    Greet {
        /// Hour of day (0-23) instead of the local clock
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Run(args) => commands::run::run(args).map_err(Into::into),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Questions(args) => commands::questions::run(args).map_err(Into::into),
        Commands::Greet { hour } => commands::greet::run(hour),
        Commands::Config { action } => commands::config::run(action).map_err(Into::into),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
