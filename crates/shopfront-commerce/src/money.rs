//! Money type and price-string parsing.
//!
//! Catalog prices arrive as display strings such as `"₹1,099"`. They are
//! parsed into an integer amount of paise so that bucket comparisons never
//! touch floating point.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Rupee sign as it appears in catalog prices.
pub const RUPEE: &str = "\u{20b9}";

const PAISE_PER_RUPEE: i64 = 100;

/// A rupee amount, stored in paise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in paise.
    pub paise: i64,
}

impl Money {
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    pub fn from_rupees(rupees: i64) -> Self {
        Self::from_paise(rupees * PAISE_PER_RUPEE)
    }

    /// Parse a display string like `"₹1,099"` or `"₹12,999.50"`.
    ///
    /// The rupee sign is optional. Every `,` is treated as a grouping
    /// separator, so both `1,39,900` and `139,900` parse. Anything else that
    /// is not a digit or a single decimal point is rejected.
    pub fn parse(input: &str) -> Result<Money, CommerceError> {
        let trimmed = input.trim();
        let unsigned = trimmed.strip_prefix(RUPEE).unwrap_or(trimmed).trim_start();
        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();

        if digits.is_empty() {
            return Err(CommerceError::invalid_price(input, "no digits"));
        }

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommerceError::invalid_price(input, "not a number"));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommerceError::invalid_price(input, "bad fractional part"));
        }

        let rupees: i64 = whole
            .parse()
            .map_err(|_| CommerceError::invalid_price(input, "amount out of range"))?;
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        rupees
            .checked_mul(PAISE_PER_RUPEE)
            .and_then(|m| m.checked_add(paise))
            .map(Money::from_paise)
            .ok_or_else(|| CommerceError::invalid_price(input, "amount out of range"))
    }

    /// Whole rupees, truncated.
    pub fn rupees(&self) -> i64 {
        self.paise / PAISE_PER_RUPEE
    }

    /// Percentage saved going from `actual` down to `self`, rounded.
    ///
    /// Returns `None` when `actual` is not positive.
    pub fn discount_from(&self, actual: &Money) -> Option<i64> {
        if actual.paise <= 0 {
            return None;
        }
        let saved = (actual.paise - self.paise) as f64;
        Some((saved / actual.paise as f64 * 100.0).round() as i64)
    }
}

/// Parse a rupee price string. Shorthand for [`Money::parse`].
pub fn parse_price(input: &str) -> Result<Money, CommerceError> {
    Money::parse(input)
}

/// `24269` -> `"24,269"`.
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_rupee_price() {
        let m = parse_price("\u{20b9}1,099").unwrap();
        assert_eq!(m.paise, 109_900);
        assert_eq!(m.rupees(), 1099);
    }

    #[test]
    fn test_parse_indian_grouping() {
        assert_eq!(parse_price("\u{20b9}1,04,900").unwrap().rupees(), 104_900);
        assert_eq!(parse_price("139,900").unwrap().rupees(), 139_900);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_price("\u{20b9}12,999.5").unwrap().paise, 1_299_950);
        assert_eq!(parse_price(" \u{20b9} 99.05 ").unwrap().paise, 9905);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "\u{20b9}", "free", "$100", "\u{20b9}1.2.3", "\u{20b9}10.999", "-5"] {
            assert!(
                matches!(parse_price(bad), Err(CommerceError::InvalidPrice { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_amounts_compare_by_value() {
        let a = parse_price("\u{20b9}5,000").unwrap();
        let b = Money::from_rupees(5000);
        assert_eq!(a, b);
        let set: HashSet<Money> = [a, b, Money::from_rupees(10_000)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_discount_from() {
        let actual = Money::from_rupees(1099);
        let discounted = Money::from_rupees(399);
        assert_eq!(discounted.discount_from(&actual), Some(64));
        assert_eq!(discounted.discount_from(&Money::default()), None);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(24_269), "24,269");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
