//! Adapters between the validator and the outside world: CSV input and
//! report output for batch runs.

pub mod csv;
pub mod report_writer;
