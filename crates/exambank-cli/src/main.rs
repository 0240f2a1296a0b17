//! exambank CLI — practice exams drawn from a question bank.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "exambank", version, about = "Practice exams drawn from a question bank")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a question bank for problems
    Validate {
        /// Bank file path or http(s) URL
        #[arg(long)]
        bank: String,
    },

    /// Draw a sample of questions and print it
    Draw {
        /// Exam variant from the config file
        #[arg(long, conflicts_with = "bank")]
        exam: Option<String>,

        /// Bank file path or http(s) URL (bypasses the config file)
        #[arg(long)]
        bank: Option<String>,

        /// Number of questions to draw (defaults to the variant's sample size)
        #[arg(long)]
        count: Option<usize>,

        /// Include the correct answer for each question
        #[arg(long)]
        show_answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Practice interactively, revealing answers, tips, and examples
    Practice {
        /// Exam variant from the config file
        #[arg(long, conflicts_with = "bank")]
        exam: Option<String>,

        /// Bank file path or http(s) URL (bypasses the config file)
        #[arg(long)]
        bank: Option<String>,

        /// Number of questions per draw
        #[arg(long)]
        count: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List configured exam variants
    ListExams {
        /// Load every bank and report whether it is reachable
        #[arg(long)]
        check: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Measure how evenly the sampler picks questions from a bank
    Fairness {
        /// Bank file path or http(s) URL
        #[arg(long)]
        bank: String,

        /// Questions per draw
        #[arg(long, default_value = "10")]
        count: usize,

        /// Number of draws
        #[arg(long, default_value = "10000")]
        trials: u32,
    },

    /// Create starter config and example question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("exambank=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { bank } => commands::validate::execute(bank).await,
        Commands::Draw {
            exam,
            bank,
            count,
            show_answers,
            config,
        } => commands::draw::execute(exam, bank, count, show_answers, config).await,
        Commands::Practice {
            exam,
            bank,
            count,
            config,
        } => commands::practice::execute(exam, bank, count, config).await,
        Commands::ListExams { check, config } => commands::list_exams::execute(check, config).await,
        Commands::Fairness {
            bank,
            count,
            trials,
        } => commands::fairness::execute(bank, count, trials).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
