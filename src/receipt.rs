// 🧾 Receipt Model - Wire shape and typed form
// The payload is what arrives over HTTP; the Receipt is what the rules score.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

// ============================================================================
// WIRE PAYLOAD
// ============================================================================

/// Receipt exactly as submitted. Every field is optional so that presence
/// can be checked before anything is parsed; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub total: Option<String>,
    pub items: Option<Vec<ItemPayload>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: Option<String>,
    pub price: Option<String>,
}

// ============================================================================
// AMOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("expected <digits>.<two digits>, got {0:?}")]
    Format(String),

    #[error("amount out of range: {0}")]
    Range(String),
}

/// Monetary amount with exactly two fraction digits ("35.35").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when the cents part is "00".
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, cents) = s
            .split_once('.')
            .ok_or_else(|| AmountParseError::Format(s.to_string()))?;

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !digits(whole) || !digits(cents) || cents.len() != 2 {
            return Err(AmountParseError::Format(s.to_string()));
        }

        Decimal::from_str(s)
            .map(Amount)
            .map_err(|_| AmountParseError::Range(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// ============================================================================
// TYPED RECEIPT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

/// A validated receipt. Only built through `Receipt::try_from(ReceiptPayload)`
/// (see `validation`), so every field is known to be well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub total: Amount,
    pub items: Vec<Item>,
}

// ============================================================================
// IDENTIFIERS & STORED RECORDS
// ============================================================================

/// Identifier handed back on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    pub fn new() -> Self {
        ReceiptId(Uuid::new_v4())
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Receipt paired with its points, as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReceipt {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub points: u64,
}

// ============================================================================
// TESTS
// ============================================================================
