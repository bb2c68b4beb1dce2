use serde::{Deserialize, Deserializer, Serialize};

/// Discriminator downstream gateways use to pick a request format.
pub const TELECHECK_TYPE: &str = "telecheck";

/// A checking or savings account offered as payment by check.
///
/// Plain value object: it is filled in, validated and then handed to a
/// gateway or dropped. Nothing here talks to a bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankInstrument {
    pub first_name: String,
    pub last_name: String,

    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    /// Two-letter US state code.
    pub state: String,
    pub zip: String,

    pub phone: String,
    pub email: String,

    /// Nine-digit ABA routing number. Separators are tolerated.
    pub routing_number: String,
    pub account_number: String,
    pub bank_name: String,
    pub bank_state: String,

    pub driver_license: String,
    pub driver_license_state: String,

    /// One of `pc`, `ps`, `bc`, `bs` when set.
    pub account_type: Option<String>,
    pub social_security_number: Option<String>,
    pub check_number: Option<String>,
    /// An empty CSV cell reads as `false`.
    #[serde(deserialize_with = "blank_as_false")]
    pub void: bool,

    /// Canadian accounts only; carried through, never validated.
    pub institution_number: Option<String>,
    pub transit_number: Option<String>,
}

fn blank_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl BankInstrument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holder name as "first last", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Splits `value` into first and last name.
    ///
    /// The last whitespace-separated token becomes the last name and the rest,
    /// joined by single spaces, the first name. Blank input is ignored.
    pub fn set_full_name(&mut self, value: &str) {
        let mut segments: Vec<&str> = value.split_whitespace().collect();
        let Some(last) = segments.pop() else {
            return;
        };
        self.last_name = last.to_string();
        self.first_name = segments.join(" ");
    }

    pub fn kind(&self) -> &'static str {
        TELECHECK_TYPE
    }

    pub fn is_canadian(&self) -> bool {
        [&self.institution_number, &self.transit_number]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}
