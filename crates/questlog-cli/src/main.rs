use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "questlog", version, about = "Questlog CLI")]
struct Cli {
    /// Verbose diagnostic logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quest management
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Hero progression
    Hero {
        #[command(subcommand)]
        action: commands::hero::HeroAction,
    },
    /// Streak status
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Gaming session control
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Honesty check for unauthorized gaming
    Penalty {
        #[command(subcommand)]
        action: commands::penalty::PenaltyAction,
    },
    /// Daily progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Wipe all progress and reseed the default quests
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Quest { action } => commands::quest::run(action),
        Commands::Hero { action } => commands::hero::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Penalty { action } => commands::penalty::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => commands::reset::run(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
