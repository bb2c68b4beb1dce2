use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 15] = [
    "first_name",
    "last_name",
    "address1",
    "city",
    "state",
    "zip",
    "phone",
    "email",
    "routing_number",
    "account_number",
    "bank_name",
    "bank_state",
    "driver_license",
    "driver_license_state",
    "account_type",
];

pub fn valid_row() -> [String; 15] {
    [
        "Jane",
        "Doe",
        "1 Main St",
        "Springfield",
        "IL",
        "62701",
        "555-555-0100",
        "jane@example.com",
        "021000021",
        "123456789",
        "First Bank",
        "NY",
        "D1234567",
        "IL",
        "pc",
    ]
    .map(String::from)
}

/// Same as `valid_row` with `field` replaced by `value`.
pub fn row_with(field: &str, value: &str) -> [String; 15] {
    let mut row = valid_row();
    let index = HEADER
        .iter()
        .position(|h| *h == field)
        .expect("unknown field");
    row[index] = value.to_string();
    row
}

pub fn write_csv(path: &Path, rows: &[[String; 15]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
