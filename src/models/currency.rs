//! Static currency table
//!
//! Every amount is converted into the base currency (TWD) by dividing by the
//! currency's rate. Rates are fixed at compile time; there is no rate history.
//!
//! Codes that are not in the table still deserialize (as
//! [`Currency::Unknown`]) so that stored data is never rejected on load. They
//! convert with rate 1, which silently mixes currencies in totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A currency code from the static table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// New Taiwan dollar, the base currency
    Twd,
    Usd,
    Eur,
    Jpy,
    Cny,
    Hkd,
    /// A code missing from the table (only reachable through stored data)
    Unknown(String),
}

/// The currency every total is expressed in
pub const BASE_CURRENCY: Currency = Currency::Twd;

/// Largest amount accepted for a record or budget, in any currency
///
/// Keeps base-currency totals far inside `Decimal`'s range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

impl Currency {
    /// All currencies in the table, base currency first
    pub const KNOWN: [Currency; 6] = [
        Currency::Twd,
        Currency::Usd,
        Currency::Eur,
        Currency::Jpy,
        Currency::Cny,
        Currency::Hkd,
    ];

    /// Look up a code; unrecognized codes become `Unknown`
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "TWD" => Self::Twd,
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "JPY" => Self::Jpy,
            "CNY" => Self::Cny,
            "HKD" => Self::Hkd,
            _ => Self::Unknown(code.trim().to_string()),
        }
    }

    /// ISO code
    pub fn code(&self) -> &str {
        match self {
            Self::Twd => "TWD",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Cny => "CNY",
            Self::Hkd => "HKD",
            Self::Unknown(code) => code,
        }
    }

    /// Units of this currency per one unit of the base currency
    pub fn rate_to_base(&self) -> Decimal {
        match self {
            Self::Twd => Decimal::ONE,
            Self::Usd => Decimal::new(32, 3),
            Self::Eur => Decimal::new(30, 3),
            Self::Jpy => Decimal::new(48, 1),
            Self::Cny => Decimal::new(23, 2),
            Self::Hkd => Decimal::new(25, 2),
            Self::Unknown(_) => Decimal::ONE,
        }
    }

    /// Display symbol; unknown currencies show their code
    pub fn symbol(&self) -> &str {
        match self {
            Self::Twd => "NT$",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Jpy | Self::Cny => "¥",
            Self::Hkd => "HK$",
            Self::Unknown(code) => code,
        }
    }

    /// Whether the code is in the static table
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Convert an amount of this currency into base-currency units
    ///
    /// Saturates at `Decimal::MAX`/`MIN` for amounts beyond [`MAX_AMOUNT`],
    /// which only stored data can hold.
    pub fn to_base(&self, amount: Decimal) -> Decimal {
        amount
            .checked_div(self.rate_to_base())
            .unwrap_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
    }

    /// Exact, case-sensitive lookup used for stored codes
    ///
    /// `"usd"` stays `Unknown("usd")` so it is written back unchanged.
    fn from_stored(code: String) -> Self {
        match code.as_str() {
            "TWD" => Self::Twd,
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "JPY" => Self::Jpy,
            "CNY" => Self::Cny,
            "HKD" => Self::Hkd,
            _ => Self::Unknown(code),
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        BASE_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from_stored(code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// Error returned when parsing a code that is not in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(pub String);

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Currency::KNOWN.iter().map(|c| c.code()).collect();
        write!(
            f,
            "Unknown currency '{}' (expected one of {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for CurrencyParseError {}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    /// Strict parse used for user input: unknown codes are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::from_code(s) {
            Self::Unknown(code) => Err(CurrencyParseError(code)),
            currency => Ok(currency),
        }
    }
}
