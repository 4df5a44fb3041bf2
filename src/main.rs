use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use boardseq::{ingest, report, sequence};

/// Generate a boarding sequence that boards the furthest seats first
#[derive(Parser)]
#[command(name = "boardseq")]
#[command(about = "Generate back-to-front boarding sequences from booking data", long_about = None)]
struct Cli {
    /// Path to the booking data file (header line + `booking_id, seat, …` rows)
    input_file: PathBuf,

    /// Optional path to also write the rendered sequence to
    output_file: Option<PathBuf>,

    /// Show only sequence numbers and booking ids
    #[arg(long)]
    simple: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let bookings = ingest::parse_booking_data(&cli.input_file)
        .with_context(|| format!("failed to read bookings from {}", cli.input_file.display()))?;
    debug!("loaded {} bookings", bookings.len());

    let sequenced = sequence::generate_boarding_sequence(bookings);

    let rendered = if cli.simple {
        report::render_simple_sequence(&sequenced)
    } else {
        report::render_sequence(&sequenced)
    };

    println!("{rendered}");

    if let Some(output_file) = &cli.output_file {
        fs::write(output_file, &rendered)
            .with_context(|| format!("failed to write {}", output_file.display()))?;
        println!("\n✓ Output saved to: {}", output_file.display());
    }

    Ok(())
}
