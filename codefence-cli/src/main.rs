//! codefence - detect pasted code in chat text and fence it

use anyhow::Result;
use clap::Parser;
use codefence_cli::input::read_text;
use codefence_cli::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, SummaryFormatter};
use codefence_core::CodeDetector;
use std::path::PathBuf;

/// Detect pasted source code inside chat text and reformat it with
/// Markdown fences
#[derive(Debug, Parser)]
#[command(name = "codefence", version, about)]
struct Cli {
    /// Input file (default: stdin; `-` also reads stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// The input with detected code sections wrapped in fenced blocks
    Markdown,
    /// The full detection result as JSON (`null` when no code was found)
    Json,
    /// One line of per-section counts, e.g. `2p 15c 8p`
    Summary,
}

impl Cli {
    fn execute(&self) -> Result<()> {
        self.init_logging();

        let text = read_text(self.input.as_deref())?;
        log::debug!("read {} bytes of input", text.len());

        let detector = CodeDetector::new();
        let result = detector.detect(&text);
        match &result {
            Some(result) => log::info!(
                "detected {} lines of {} across {} sections",
                result.lines_of_code(),
                result.language(),
                result.sections().len()
            ),
            None => log::info!("no code detected"),
        }

        let stdout = std::io::stdout().lock();
        match self.format {
            OutputFormat::Markdown => {
                MarkdownFormatter::new(stdout).write_result(&text, result.as_ref())
            }
            OutputFormat::Json if self.pretty => {
                JsonFormatter::pretty(stdout).write_result(&text, result.as_ref())
            }
            OutputFormat::Json => JsonFormatter::new(stdout).write_result(&text, result.as_ref()),
            OutputFormat::Summary => {
                SummaryFormatter::new(stdout).write_result(&text, result.as_ref())
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    Cli::parse().execute()
}
