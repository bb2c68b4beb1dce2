//! Domain layer: the bank instrument record and the closed value sets it is
//! checked against.
//!
//! Everything here is synchronous and free of I/O.

pub mod account_type;
pub mod field_error;
pub mod instrument;
pub mod ports;
pub mod region;
pub mod routing;
