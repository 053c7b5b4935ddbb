// 🏷️ Point Rules - one pure function per receipt field
// Each rule maps a single field to its point contribution.

use crate::receipt::{Amount, Item};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// ============================================================================
// POINT VALUES
// ============================================================================

pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const ROUND_DOLLAR_POINTS: u64 = 50;
pub const ITEM_PAIR_POINTS: u64 = 5;

// ============================================================================
// RULES
// ============================================================================

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 6 points when the day of the month is odd.
pub fn date_points(date: NaiveDate) -> u64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 10 points for purchases from 14:01 through 15:59.
///
/// Exactly 14:00 does not score, while the whole 15:00 hour does.
pub fn time_points(time: NaiveTime) -> u64 {
    match (time.hour(), time.minute()) {
        (14, minute) if minute > 0 => AFTERNOON_POINTS,
        (15, _) => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// 25 points for a multiple of 0.25, plus 50 for a round dollar amount.
/// The bonuses stack, so a round dollar total earns 75.
pub fn total_points(total: Amount) -> u64 {
    let mut points = 0;

    if (total.value() % Decimal::new(25, 2)).is_zero() {
        points += QUARTER_MULTIPLE_POINTS;
    }
    if total.is_round_dollar() {
        points += ROUND_DOLLAR_POINTS;
    }

    points
}

/// 5 points per pair of items, plus `ceil(price * 0.2)` for every item whose
/// trimmed description length is a multiple of 3 (including 0).
pub fn items_points(items: &[Item]) -> u64 {
    let pairs = (items.len() / 2) as u64 * ITEM_PAIR_POINTS;

    items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .map(|item| description_bonus(item.price))
        .fold(pairs, u64::saturating_add)
}

fn description_bonus(price: Amount) -> u64 {
    (price.value() * Decimal::new(2, 1))
        .ceil()
        .to_u64()
        .unwrap_or(u64::MAX)
}

// ============================================================================
// TESTS
// ============================================================================
