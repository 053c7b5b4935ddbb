// Shared receipt payloads for unit tests.

use crate::receipt::{ItemPayload, ReceiptPayload};

pub fn payload(
    retailer: &str,
    date: &str,
    time: &str,
    total: &str,
    items: Vec<(&str, &str)>,
) -> ReceiptPayload {
    ReceiptPayload {
        retailer: Some(retailer.to_string()),
        purchase_date: Some(date.to_string()),
        purchase_time: Some(time.to_string()),
        total: Some(total.to_string()),
        items: Some(
            items
                .into_iter()
                .map(|(description, price)| ItemPayload {
                    short_description: Some(description.to_string()),
                    price: Some(price.to_string()),
                })
                .collect(),
        ),
    }
}

pub fn walgreens_payload() -> ReceiptPayload {
    payload(
        "Walgreens",
        "2022-01-02",
        "08:13",
        "2.65",
        vec![("Pepsi - 12-oz", "1.25"), ("Dasani", "1.40")],
    )
}

/// Scores 28.
pub fn target_payload() -> ReceiptPayload {
    payload(
        "Target",
        "2022-01-01",
        "13:01",
        "35.35",
        vec![
            ("Mountain Dew 12PK", "6.49"),
            ("Emils Cheese Pizza", "12.25"),
            ("Knorr Creamy Chicken", "1.26"),
            ("Doritos Nacho Cheese", "3.35"),
            ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    )
}

/// Scores 109.
pub fn corner_market_payload() -> ReceiptPayload {
    payload(
        "M&M Corner Market",
        "2022-03-20",
        "14:33",
        "9.00",
        vec![("Gatorade", "2.25"); 4],
    )
}

pub const TARGET_JSON: &str = r#"{
    "retailer": "Target",
    "purchaseDate": "2022-01-01",
    "purchaseTime": "13:01",
    "items": [
        {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
        {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
        {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
        {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
        {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
    ],
    "total": "35.35"
}"#;
