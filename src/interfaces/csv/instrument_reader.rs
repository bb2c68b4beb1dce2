use crate::domain::instrument::BankInstrument;
use crate::error::{Result, TelecheckError};
use std::io::Read;

/// Reads bank instruments from a CSV source.
///
/// The header row names `BankInstrument` fields in snake_case. Columns may be
/// omitted or listed in any order; missing ones are left blank.
pub struct InstrumentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InstrumentReader<R> {
    /// Creates a new `InstrumentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn instruments(self) -> impl Iterator<Item = Result<BankInstrument>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TelecheckError::from))
    }
}
