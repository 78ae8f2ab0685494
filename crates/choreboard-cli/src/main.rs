use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "choreboard-cli", version, about = "Choreboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print today's date in long form
    Date,
    /// Print the current month calendar
    Calendar,
    /// Theme preference management
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Chore checklist operations
    Chore {
        #[command(subcommand)]
        action: commands::chore::ChoreAction,
    },
    /// Fetch a simulated weather forecast for a city
    Weather {
        /// City name
        city: String,
        /// Simulated network latency in milliseconds
        #[arg(long, default_value = "1000")]
        delay_ms: u64,
    },
    /// Interactive dashboard session
    Dashboard,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Date => commands::date::run(),
        Commands::Calendar => commands::calendar::run(),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Chore { action } => commands::chore::run(action),
        Commands::Weather { city, delay_ms } => commands::weather::run(&city, delay_ms),
        Commands::Dashboard => commands::dashboard::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
