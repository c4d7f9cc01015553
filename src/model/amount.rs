//! Amount type for turning YNAB milliunits into dollar strings.
//!
//! YNAB represents every currency value as an integer number of milliunits, i.e. thousandths of a
//! dollar. This module provides the `Amount` type which converts to `Decimal` and knows how to
//! display itself for a human. Half a cent rounds away from zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

/// The number of decimal places between milliunits and whole currency units.
const MILLIUNIT_SCALE: u32 = 3;

/// The number of decimal places that are displayed.
const DISPLAY_SCALE: u32 = 2;

/// Represents a dollar amount that was received from YNAB in milliunits.
///
/// Displays with a dollar sign, comma thousands separators and two decimal places. A negative
/// amount puts the minus sign in front of the dollar sign.
///
/// # Examples
///
/// ```
/// # use ynab_memo::model::Amount;
/// assert_eq!(Amount::from_milliunits(1234560).to_string(), "$1,234.56");
/// assert_eq!(Amount::from_milliunits(-1234560).to_string(), "-$1,234.56");
/// assert_eq!(Amount::from_milliunits(0).to_string(), "$0.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    milliunits: i64,
}

impl Amount {
    /// Creates a new Amount from a value in milliunits.
    pub const fn from_milliunits(milliunits: i64) -> Self {
        Self { milliunits }
    }

    /// Returns the raw value in milliunits.
    pub fn milliunits(&self) -> i64 {
        self.milliunits
    }

    /// Returns the value in whole currency units, i.e. `milliunits / 1000` without truncation.
    pub fn value(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.milliunits), MILLIUNIT_SCALE)
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.milliunits == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.milliunits < 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        // Rounding stays in Decimal so that cents are exact for every i64.
        let rounded = self
            .value()
            .abs()
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let cents = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u64()
            .unwrap_or_default();
        let whole = group_thousands(&whole.to_u64().unwrap_or_default().to_string());
        write!(f, "{sign}${whole}.{cents:02}")
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Inserts a comma between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (ix, c) in digits.chars().enumerate() {
        if ix > 0 && (len - ix) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an amount in milliunits for display, e.g. `-4500` becomes `-$4.50`.
pub fn format_amount(milliunits: i64) -> String {
    Amount::from_milliunits(milliunits).to_string()
}
