//! Binary entry point for `ticket-assist`.
//!
//! This module provides the command-line interface for ticket-assist with options
//! for configuration file paths, logging verbosity, and draft refinements. It runs
//! analysis and drafting for one ticket and prints the result as JSON.

use clap::Parser;
use opentelemetry::trace::TracerProvider;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use ticket_assist::{
    assist::drafter::Refinement,
    base::{config::Config, types::Void},
};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt};

/// Ticket-assist – AI analysis and reply drafts for support tickets.
///
/// Configuration can come from `config.toml` or environment variables
/// (`TICKET_ASSIST_API_KEY`, `TICKET_ASSIST_APP__BRAND_TONE`, ...).
/// The ticket is read from a JSON file in the dashboard's format.
#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
struct Args {
    /// Path to the ticket JSON file.
    ticket: std::path::PathBuf,
    /// Override the config file path (optional).
    ///
    /// By default, the tool will look for a config file at `.hidden/config.toml`
    /// in the current directory.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
    /// Free-form instruction appended to the drafting prompt.
    #[arg(short, long, conflicts_with_all = ["shorter", "more_detail"])]
    instruction: Option<String>,
    /// Ask for a shorter, more concise draft.
    #[arg(long, conflicts_with = "more_detail")]
    shorter: bool,
    /// Ask for a draft with more detail and explanation.
    #[arg(long)]
    more_detail: bool,
    /// Only draft a reply; skip the ticket analysis.
    #[arg(long)]
    skip_analysis: bool,
    /// Increase log verbosity (-v, -vv, etc.).
    ///
    /// Use multiple times to increase verbosity:
    /// - No flag: INFO level
    /// - -v: DEBUG level
    /// - -vv or more: TRACE level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// The refinement requested on the command line, if any.
    fn refinement(&self) -> Option<Refinement> {
        if self.shorter {
            Some(Refinement::Shorter)
        } else if self.more_detail {
            Some(Refinement::MoreDetail)
        } else {
            self.instruction.clone().map(Refinement::Custom)
        }
    }
}

/// Main entry point for the ticket-assist binary.
///
/// Sets up logging based on verbosity, loads configuration, and runs the assist operations.
#[tokio::main]
async fn main() -> Void {
    let args = Args::parse();

    // Construct the level filter.

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let level_filter = tracing_subscriber::filter::LevelFilter::from_level(level);

    // Prepare the log layer.  Logs go to stderr so stdout stays valid JSON.

    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_file(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE);

    // Prepare the otlp layer.

    let exporter = opentelemetry_otlp::SpanExporter::builder().with_http().with_protocol(Protocol::HttpBinary).build()?;
    let tracer = opentelemetry_sdk::trace::SdkTracerProvider::builder().with_simple_exporter(exporter).build().tracer("ticket-assist");
    let otel = tracing_opentelemetry::layer().with_tracer(tracer);

    tracing_subscriber::registry().with(otel).with(level_filter).with(stderr).init();

    let config = Config::load(args.config.as_deref())?;
    let instruction = args.refinement().map(|r| r.instruction().to_string());

    let assistance = ticket_assist::start(config, &args.ticket, instruction, !args.skip_analysis).await?;

    println!("{}", serde_json::to_string_pretty(&assistance)?);

    Ok(())
}
