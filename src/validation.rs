// 📐 Validation - payload presence checks and typed parsing
// Nothing reaches the rules until it has passed through here.

use crate::receipt::{
    Amount, Item, ItemPayload, Receipt, ReceiptPayload, DATE_FORMAT, TIME_FORMAT,
};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: required field is missing or empty")]
    MissingField { field: String },

    #[error("{field}: {reason} (got {value:?})")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    fn invalid(field: impl Into<String>, value: &str, reason: impl ToString) -> Self {
        ValidationError::InvalidField {
            field: field.into(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::InvalidField { field, .. } => field,
        }
    }
}

// ============================================================================
// PRESENCE CHECK
// ============================================================================

/// True iff retailer, purchaseDate, purchaseTime and total are non-empty
/// text and items is present. An empty items array counts as present.
/// Formats are not checked here.
pub fn is_valid_receipt(payload: &ReceiptPayload) -> bool {
    missing_field(payload).is_none()
}

fn missing_field(payload: &ReceiptPayload) -> Option<&'static str> {
    let text_fields = [
        ("retailer", &payload.retailer),
        ("purchaseDate", &payload.purchase_date),
        ("purchaseTime", &payload.purchase_time),
        ("total", &payload.total),
    ];

    text_fields
        .into_iter()
        .find(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .or_else(|| payload.items.is_none().then_some("items"))
}

// ============================================================================
// TYPED PARSING
// ============================================================================

impl TryFrom<ReceiptPayload> for Receipt {
    type Error = ValidationError;

    fn try_from(payload: ReceiptPayload) -> Result<Self, Self::Error> {
        if let Some(field) = missing_field(&payload) {
            return Err(ValidationError::missing(field));
        }

        // Presence was checked above.
        let ReceiptPayload {
            retailer: Some(retailer),
            purchase_date: Some(purchase_date),
            purchase_time: Some(purchase_time),
            total: Some(total),
            items: Some(items),
        } = payload
        else {
            return Err(ValidationError::missing("receipt"));
        };

        let purchase_date = NaiveDate::parse_from_str(&purchase_date, DATE_FORMAT)
            .map_err(|e| ValidationError::invalid("purchaseDate", &purchase_date, e))?;
        let purchase_time = NaiveTime::parse_from_str(&purchase_time, TIME_FORMAT)
            .map_err(|e| ValidationError::invalid("purchaseTime", &purchase_time, e))?;
        let total = parse_amount("total", &total)?;

        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_item(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
    }
}

fn parse_item(index: usize, item: ItemPayload) -> Result<Item, ValidationError> {
    let short_description = item
        .short_description
        .ok_or_else(|| ValidationError::missing(format!("items[{}].shortDescription", index)))?;

    let price = match item.price.as_deref() {
        None | Some("") => {
            return Err(ValidationError::missing(format!("items[{}].price", index)));
        }
        Some(price) => parse_amount(&format!("items[{}].price", index), price)?,
    };

    Ok(Item {
        short_description,
        price,
    })
}

fn parse_amount(field: &str, value: &str) -> Result<Amount, ValidationError> {
    value
        .parse()
        .map_err(|e| ValidationError::invalid(field, value, e))
}

// ============================================================================
// TESTS
// ============================================================================
