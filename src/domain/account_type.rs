use crate::error::TelecheckError;
use std::fmt;
use std::str::FromStr;

/// The kind of bank account a check is drawn on.
///
/// Gateways exchange this as a two-letter code (`pc`, `ps`, `bc`, `bs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    PersonalChecking,
    PersonalSavings,
    BusinessChecking,
    BusinessSavings,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::PersonalChecking,
        AccountType::PersonalSavings,
        AccountType::BusinessChecking,
        AccountType::BusinessSavings,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            AccountType::PersonalChecking => "pc",
            AccountType::PersonalSavings => "ps",
            AccountType::BusinessChecking => "bc",
            AccountType::BusinessSavings => "bs",
        }
    }
}

impl FromStr for AccountType {
    type Err = TelecheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| TelecheckError::InvalidAccountType(s.to_string()))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
