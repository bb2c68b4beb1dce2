//! Application layer containing the validation pass over a bank instrument.
//!
//! This module defines the `Validator` which runs every field check against a
//! record and reports failures into an `ErrorCollector`.

pub mod validator;
