//! classkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "classkit", version, about = "Coursework toolkit: maths quiz, student roster, jokes")]
struct Cli {
    /// Config file path (default: ./classkit.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an arithmetic quiz
    Quiz {
        /// Difficulty tier: beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        tier: String,

        /// Seed the problem generator (deterministic quizzes)
        #[arg(long)]
        seed: Option<u64>,

        /// Threshold the raw score instead of the percentage of maximum
        #[arg(long)]
        raw_rank: bool,

        /// Write a JSON report of the finished session
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Manage the student roster
    Roster {
        /// Roster file (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: RosterAction,
    },

    /// Tell a random joke
    Joke {
        /// Jokes file (overrides config)
        #[arg(long)]
        jokes: Option<PathBuf>,

        /// Seed the joke picker
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create starter config, roster, and jokes files
    Init,
}

#[derive(Subcommand)]
enum RosterAction {
    /// Show all records with derived totals and grades
    List {
        /// Sort key: name, total, percentage
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Show records matching a code or name
    Find { term: String },

    /// Show the student with the highest overall total
    Best,

    /// Show the student with the lowest overall total
    Worst,

    /// Add a student record
    Add {
        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        /// Three coursework marks, comma-separated (each 0-20)
        #[arg(long)]
        marks: String,

        /// Exam mark (0-100)
        #[arg(long)]
        exam: u32,
    },

    /// Update fields of the first record matching a code or name
    Update {
        term: String,

        #[arg(long)]
        name: Option<String>,

        /// Three coursework marks, comma-separated; blank fields are kept
        /// (e.g. ",15," updates only the second mark)
        #[arg(long)]
        marks: Option<String>,

        #[arg(long)]
        exam: Option<u32>,
    },

    /// Delete the first record matching a code or name
    Delete { term: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("classkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Quiz {
            tier,
            seed,
            raw_rank,
            report,
        } => commands::quiz::execute(tier, seed, raw_rank, report, config),
        Commands::Roster { file, action } => commands::roster::execute(file, action, config),
        Commands::Joke { jokes, seed } => commands::joke::execute(jokes, seed, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
