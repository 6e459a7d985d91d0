//! Chronological sort key derived from a record's free-text date.
//!
//! Dates are entered by hand as `M/d` or `M/d/yyyy`. Anything else is not an
//! error: it becomes [`SortKey::Unparseable`], which orders after every
//! dated key so malformed entries sink to the end of the list.

use std::fmt;

/// Weights for `M/d` dates: month*100 + day.
const MONTH_WEIGHT_2: i64 = 100;

/// Weights for `M/d/y` dates: month*10000 + day*100 + year.
const MONTH_WEIGHT_3: i64 = 10_000;
const DAY_WEIGHT_3: i64 = 100;

/// Integer form of the sentinel, kept for callers that need a plain number.
/// Dated keys stay strictly below it.
pub const SENTINEL: i64 = i64::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    // Variant order matters: every Dated key sorts before Unparseable.
    Dated(i64),
    Unparseable,
}

impl SortKey {
    pub fn from_date(date: &str) -> Self {
        let mut parts = Vec::new();
        for token in date.split('/') {
            match token.parse::<i64>() {
                Ok(n) => parts.push(n),
                Err(_) => return SortKey::Unparseable,
            }
        }

        let key = match parts.as_slice() {
            [month, day] => month
                .checked_mul(MONTH_WEIGHT_2)
                .and_then(|m| m.checked_add(*day)),
            [month, day, year] => month
                .checked_mul(MONTH_WEIGHT_3)
                .zip(day.checked_mul(DAY_WEIGHT_3))
                .and_then(|(m, d)| m.checked_add(d))
                .and_then(|md| md.checked_add(*year)),
            _ => None,
        };

        key.filter(|k| *k < SENTINEL)
            .map(SortKey::Dated)
            .unwrap_or(SortKey::Unparseable)
    }

    pub fn is_dated(&self) -> bool {
        matches!(self, SortKey::Dated(_))
    }

    /// Plain integer form; the sentinel maps to [`SENTINEL`].
    pub fn value(&self) -> i64 {
        match self {
            SortKey::Dated(v) => *v,
            SortKey::Unparseable => SENTINEL,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Dated(v) => write!(f, "{v}"),
            SortKey::Unparseable => write!(f, "--"),
        }
    }
}
