// Receipt Points - Core Library
// Exposes scoring, validation and storage for the CLI, the API server, and tests

pub mod config;
pub mod error;
pub mod logging;
pub mod receipt;
pub mod rules;
pub mod scoring;
pub mod store;
pub mod validation;

// Only compile the HTTP layer when the server feature is enabled
#[cfg(feature = "server")]
pub mod api;

#[cfg(test)]
mod fixtures;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::ReceiptError;
pub use receipt::{
    Amount, AmountParseError, Item, ItemPayload, Receipt, ReceiptId, ReceiptPayload,
    ScoredReceipt,
};
pub use rules::{date_points, items_points, retailer_points, time_points, total_points};
pub use scoring::{calculate_points, score_breakdown, PointsBreakdown, RuleScore, RULES};
pub use store::ReceiptStore;
pub use validation::{is_valid_receipt, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
