//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstat::ChatstatError;
use chatstat::cli::Args;
use chatstat::core::{Chat, apply_filters};
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::parser::ChatParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so records on stdout stay clean.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "chatstat=debug" } else { "chatstat=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let format = args.output_format()?;
    let filter = args.filter_config()?;
    let parser = ChatParser::with_config(args.parser_config()?);

    let (messages, stats) = parser.parse_with_stats(&args.input)?;
    info!(
        input = %args.input.display(),
        messages = stats.messages,
        orphaned = stats.orphaned_lines,
        "parsed"
    );

    let chat = Chat::new(messages, &args.chat_config(), &parser.config().phrases);
    let messages = apply_filters(chat.into_messages(), &filter);
    debug!(kept = messages.len(), "applied filters");

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    if args.summary {
        let summary = Chat::from_messages(messages).summary(&args.summary_options());
        match format {
            OutputFormat::Json | OutputFormat::Jsonl => {
                serde_json::to_writer_pretty(&mut out, &summary)?;
                writeln!(out)?;
            }
            _ => write!(out, "{summary}")?,
        }
    } else {
        write_to_format(&messages, &mut out, format, &args.output_config())?;
    }

    out.flush()?;
    Ok(())
}
