//! CLI entry point for tally.
//!
//! Provides one subcommand per tool: a daily calorie tracker and a
//! gradebook analyzer. Both are interactive.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use tally::config::Settings;
use tally::prompt::Prompter;
use tally::session::{self, calories, gradebook};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Interactive calorie tracker and gradebook analyzer", long_about = None)]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log today's meals and compare them with a daily limit
    Calories {
        /// Directory to write calorie logs into
        #[arg(short, long, value_name = "DIR")]
        log_dir: Option<PathBuf>,
    },
    /// Analyze student marks entered by hand or loaded from a CSV file
    Gradebook,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    // Logging setup: stderr + JSON rolling log file
    let (log_dir, log_file_name) = settings.log_target();

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_level = if cli.verbose { "debug" } else { "warn" };
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(stderr_level.parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    tracing::debug!(?settings, "Settings loaded");

    let stdin = io::stdin();
    let mut p = Prompter::new(stdin.lock(), io::stdout(), settings.max_attempts);

    match cli.command {
        Commands::Calories { log_dir } => {
            let log_dir = log_dir.unwrap_or_else(|| settings.calorie_log_dir.clone());
            p.say(calories::BANNER)?;
            session::repeat(
                &mut p,
                "\nDo you want to log another day? (y/n): ",
                "Session ended.",
                |p| calories::run_once(p, &log_dir).map(|_| ()),
            )?;
        }
        Commands::Gradebook => {
            p.say(gradebook::BANNER)?;
            session::repeat(
                &mut p,
                "\nDo you want to run another analysis? (y/n): ",
                "Exiting GradeBook Analyzer. Goodbye.",
                |p| gradebook::run_once(p, &settings.gradebook_output).map(|_| ()),
            )?;
        }
    }

    Ok(())
}
