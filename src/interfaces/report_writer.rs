use crate::domain::field_error::ValidationErrors;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// One `row,field,message` line per failed check.
    #[default]
    Csv,
    /// One JSON object per input record.
    Json,
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    row: usize,
    field: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct RecordReport<'a> {
    row: usize,
    valid: bool,
    errors: &'a ValidationErrors,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes validation outcomes, one input record at a time.
///
/// Rows are numbered from 1 in input order, not counting the header.
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Result<Self> {
        let sink = match format {
            ReportFormat::Csv => {
                let mut csv = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                csv.write_record(["row", "field", "message"])?;
                Sink::Csv(csv)
            }
            ReportFormat::Json => Sink::Json(writer),
        };
        Ok(Self { sink })
    }

    pub fn write_report(&mut self, row: usize, errors: &ValidationErrors) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(csv) => {
                for error in errors {
                    csv.serialize(ErrorRow {
                        row,
                        field: error.field,
                        message: error.message,
                    })?;
                }
            }
            Sink::Json(out) => {
                let report = RecordReport {
                    row,
                    valid: errors.is_empty(),
                    errors,
                };
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(csv) => csv.flush()?,
            Sink::Json(out) => out.flush()?,
        }
        Ok(())
    }
}
