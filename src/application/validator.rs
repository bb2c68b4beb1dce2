use crate::domain::account_type::AccountType;
use crate::domain::field_error::ValidationErrors;
use crate::domain::instrument::BankInstrument;
use crate::domain::ports::ErrorCollector;
use crate::domain::region::StateCode;
use crate::domain::routing;
use tracing::debug;

pub const EMPTY: &str = "cannot be empty";
pub const INVALID_STATE: &str = "must be a valid US State Code";
pub const INVALID_ROUTING: &str = "is invalid";
pub const INVALID_ACCOUNT_TYPE: &str = "must be personal or business, checking or savings";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Runs the offline structural checks required before a check payment can be
/// submitted.
///
/// Every check runs regardless of earlier failures; the caller decides what to
/// do with a non-empty collector.
pub struct Validator;

impl Validator {
    /// Validates `record`, adding one entry to `errors` per failed check.
    ///
    /// Checks run in a fixed order: required fields, region codes, routing
    /// number checksum, account type.
    pub fn validate<C: ErrorCollector + ?Sized>(record: &BankInstrument, errors: &mut C) {
        debug!("Validating {} instrument", record.kind());

        Self::check_required(record, errors);
        Self::check_regions(record, errors);
        Self::check_routing(record, errors);
        Self::check_account_type(record, errors);
    }

    /// Validates `record` into a fresh `ValidationErrors`.
    pub fn errors(record: &BankInstrument) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        Self::validate(record, &mut errors);
        errors
    }

    pub fn is_valid(record: &BankInstrument) -> bool {
        Self::errors(record).is_empty()
    }

    fn reject<C: ErrorCollector + ?Sized>(
        errors: &mut C,
        field: &'static str,
        message: &'static str,
    ) {
        debug!(field, message, "Check failed");
        errors.add(field, message);
    }

    fn check_required<C: ErrorCollector + ?Sized>(record: &BankInstrument, errors: &mut C) {
        let required: [(&'static str, &str); 14] = [
            ("first_name", record.first_name.as_str()),
            ("last_name", record.last_name.as_str()),
            ("address1", record.address1.as_str()),
            ("city", record.city.as_str()),
            ("state", record.state.as_str()),
            ("zip", record.zip.as_str()),
            ("phone", record.phone.as_str()),
            ("email", record.email.as_str()),
            ("routing_number", record.routing_number.as_str()),
            ("account_number", record.account_number.as_str()),
            ("bank_name", record.bank_name.as_str()),
            ("bank_state", record.bank_state.as_str()),
            ("driver_license", record.driver_license.as_str()),
            ("driver_license_state", record.driver_license_state.as_str()),
        ];

        for (field, value) in required {
            if is_blank(value) {
                Self::reject(errors, field, EMPTY);
            }
        }
    }

    fn check_regions<C: ErrorCollector + ?Sized>(record: &BankInstrument, errors: &mut C) {
        let regions: [(&'static str, &str); 3] = [
            ("state", record.state.as_str()),
            ("bank_state", record.bank_state.as_str()),
            ("driver_license_state", record.driver_license_state.as_str()),
        ];

        for (field, code) in regions {
            if !StateCode::is_recognized(code) {
                Self::reject(errors, field, INVALID_STATE);
            }
        }
    }

    fn check_routing<C: ErrorCollector + ?Sized>(record: &BankInstrument, errors: &mut C) {
        if !routing::is_valid(&record.routing_number) {
            Self::reject(errors, "routing_number", INVALID_ROUTING);
        }
    }

    fn check_account_type<C: ErrorCollector + ?Sized>(record: &BankInstrument, errors: &mut C) {
        if let Some(code) = record.account_type.as_deref()
            && !is_blank(code)
            && code.parse::<AccountType>().is_err()
        {
            Self::reject(errors, "account_type", INVALID_ACCOUNT_TYPE);
        }
    }
}
