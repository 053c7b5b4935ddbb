// 🧮 Score Aggregator - sums every rule over a receipt
//
// The rule table is fixed and ordered: each entry names the receipt field it
// reads and the rule applied to it. Fields outside the table never score.

use crate::receipt::Receipt;
use crate::rules;
use serde::Serialize;

pub type Rule = fn(&Receipt) -> u64;

/// (field name, rule) pairs, evaluated in order.
pub const RULES: [(&str, Rule); 5] = [
    ("retailer", retailer),
    ("purchaseDate", purchase_date),
    ("purchaseTime", purchase_time),
    ("total", total),
    ("items", items),
];

fn retailer(receipt: &Receipt) -> u64 {
    rules::retailer_points(&receipt.retailer)
}

fn purchase_date(receipt: &Receipt) -> u64 {
    rules::date_points(receipt.purchase_date)
}

fn purchase_time(receipt: &Receipt) -> u64 {
    rules::time_points(receipt.purchase_time)
}

fn total(receipt: &Receipt) -> u64 {
    rules::total_points(receipt.total)
}

fn items(receipt: &Receipt) -> u64 {
    rules::items_points(&receipt.items)
}

// ============================================================================
// BREAKDOWN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleScore {
    pub field: &'static str,
    pub points: u64,
}

/// Per-field contributions for one receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub scores: Vec<RuleScore>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.scores
            .iter()
            .map(|score| score.points)
            .fold(0, u64::saturating_add)
    }

    pub fn points_for(&self, field: &str) -> Option<u64> {
        self.scores
            .iter()
            .find(|score| score.field == field)
            .map(|score| score.points)
    }
}

pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        scores: RULES
            .iter()
            .map(|&(field, rule)| RuleScore {
                field,
                points: rule(receipt),
            })
            .collect(),
    }
}

/// Total points for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

// ============================================================================
// TESTS
// ============================================================================
