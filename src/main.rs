use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use telecheck::application::validator::Validator;
use telecheck::interfaces::csv::instrument_reader::InstrumentReader;
use telecheck::interfaces::report_writer::{ReportFormat, ReportWriter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file of bank instruments, one per row.
    input: PathBuf,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    format: ReportFormat,

    /// Exit with a non-zero status if any record fails validation.
    #[arg(long)]
    fail_on_invalid: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = InstrumentReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock(), cli.format).into_diagnostic()?;

    let (mut valid, mut invalid) = (0usize, 0usize);
    for (index, record) in reader.instruments().enumerate() {
        let row = index + 1;
        match record {
            Ok(record) => {
                let errors = Validator::errors(&record);
                if errors.is_empty() {
                    valid += 1;
                } else {
                    invalid += 1;
                }
                writer.write_report(row, &errors).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading record {}: {}", row, e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    info!(valid, invalid, "Validated {} records", valid + invalid);

    if cli.fail_on_invalid && invalid > 0 {
        warn!(invalid, "Invalid records found");
        std::process::exit(1);
    }

    Ok(())
}
