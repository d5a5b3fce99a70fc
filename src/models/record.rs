//! Ledger record model
//!
//! A record is a single income or expense entry. Its category is a copy of
//! the category label, not a reference; category deletion rewrites it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency::{Currency, MAX_AMOUNT};
use super::ids::RecordId;
use super::period::{validate_period, Period, PeriodValidationError};

/// Whether a record adds to or subtracts from net income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for EntryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown record type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A stored ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub year: i32,
    pub month: u32,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    pub currency: Currency,

    /// Amount in `currency`, always positive; stored as a JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,

    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Older documents call this field `date`
    #[serde(alias = "date")]
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Build a record from validated input
    pub fn new(id: RecordId, input: NewRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            year: input.year,
            month: input.month,
            entry_type: input.entry_type,
            currency: input.currency,
            amount: input.amount,
            category: input.category.trim().to_string(),
            description: input
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            created_at,
        }
    }

    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    /// Amount converted to the base currency
    pub fn base_amount(&self) -> Decimal {
        self.currency.to_base(self.amount)
    }
}

/// User-supplied fields for a new record
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub year: i32,
    pub month: u32,
    pub entry_type: EntryType,
    pub currency: Currency,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
}

impl NewRecord {
    /// Check field-level rules (registry membership is checked by the service)
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_period(self.year, self.month).map_err(RecordValidationError::Period)?;

        if self.amount <= Decimal::ZERO {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        if self.amount > Decimal::from(MAX_AMOUNT) {
            return Err(RecordValidationError::AmountTooLarge);
        }

        if !self.currency.is_known() {
            return Err(RecordValidationError::UnknownCurrency(
                self.currency.code().to_string(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }

        Ok(())
    }
}

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    Period(PeriodValidationError),
    NonPositiveAmount,
    AmountTooLarge,
    UnknownCurrency(String),
    EmptyCategory,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Period(e) => write!(f, "{}", e),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountTooLarge => write!(f, "Amount must not exceed {}", MAX_AMOUNT),
            Self::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
            Self::EmptyCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Optional filters for querying records; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub category: Option<String>,
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        if let Some(month) = self.month {
            if record.month != month {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }
        true
    }

    /// Matching records, newest first
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        let mut matched: Vec<Record> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        matched
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> NewRecord {
        NewRecord {
            year: 2024,
            month: 3,
            entry_type: EntryType::Expense,
            currency: Currency::Usd,
            amount: Decimal::from(100),
            category: "飲食".into(),
            description: None,
        }
    }

    fn record(id: i64, year: i32, month: u32, category: &str, secs: i64) -> Record {
        Record {
            id: RecordId::from_raw(id),
            year,
            month,
            entry_type: EntryType::Expense,
            currency: Currency::Twd,
            amount: Decimal::ONE,
            category: category.into(),
            description: String::new(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_valid_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut bad = input();
        bad.year = 1899;
        assert!(matches!(
            bad.validate(),
            Err(RecordValidationError::Period(_))
        ));

        let mut bad = input();
        bad.amount = Decimal::ZERO;
        assert_eq!(bad.validate(), Err(RecordValidationError::NonPositiveAmount));

        let mut bad = input();
        bad.amount = Decimal::from(MAX_AMOUNT) + Decimal::ONE;
        assert_eq!(bad.validate(), Err(RecordValidationError::AmountTooLarge));

        let mut ok = input();
        ok.amount = Decimal::from(MAX_AMOUNT);
        assert!(ok.validate().is_ok());

        let mut bad = input();
        bad.currency = Currency::from_code("GBP");
        assert_eq!(
            bad.validate(),
            Err(RecordValidationError::UnknownCurrency("GBP".into()))
        );

        let mut bad = input();
        bad.category = "   ".into();
        assert_eq!(bad.validate(), Err(RecordValidationError::EmptyCategory));
    }

    #[test]
    fn test_new_trims_text() {
        let mut raw = input();
        raw.description = Some("  lunch  ".into());
        let record = Record::new(RecordId::from_raw(1), raw, Utc::now());
        assert_eq!(record.description, "lunch");
        assert_eq!(record.category, "飲食");
    }

    #[test]
    fn test_filter_matches_all_fields() {
        let records = vec![
            record(1, 2024, 3, "飲食", 10),
            record(2, 2024, 4, "飲食", 20),
            record(3, 2023, 3, "交通", 30),
        ];

        let all = RecordFilter::default().apply(&records);
        assert_eq!(all.len(), 3);

        let filter = RecordFilter {
            year: Some(2024),
            month: Some(3),
            category: Some("飲食".into()),
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.value(), 1);
    }

    #[test]
    fn test_filter_sorts_newest_first() {
        let records = vec![
            record(1, 2024, 1, "飲食", 10),
            record(2, 2024, 1, "飲食", 30),
            record(3, 2024, 1, "飲食", 20),
        ];
        let ids: Vec<i64> = RecordFilter::default()
            .apply(&records)
            .iter()
            .map(|r| r.id.value())
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_serialized_shape() {
        let r = record(5, 2024, 3, "飲食", 0);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["currency"], "TWD");
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].to_string(), "1");
        assert!(value.get("createdAt").is_some());

        let text = serde_json::to_string(&r).unwrap();
        assert!(text.contains("\"amount\":1,"));
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_accepts_legacy_date_field() {
        let json = r#"{
            "id": 1700000000000,
            "year": 2024,
            "month": 3,
            "type": "income",
            "currency": "USD",
            "amount": 12.5,
            "category": "其他",
            "description": "",
            "date": "2024-03-01T00:00:00.000Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.is_income());
        assert_eq!(record.amount, Decimal::new(125, 1));
    }

    #[test]
    fn test_accepts_string_amount() {
        let json = r#"{
            "id": 1, "year": 2024, "month": 3, "type": "expense",
            "currency": "TWD", "amount": "99.5", "category": "飲食",
            "createdAt": "2024-03-01T00:00:00Z"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, Decimal::new(995, 1));
    }
}
