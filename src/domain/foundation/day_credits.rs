//! Exact day-credit amounts for the reward ledger.

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::ValidationError;

/// A non-negative amount of remote-day credit, kept as an exact fraction.
///
/// Ratio-based accrual credits `1/ratio` of a day per office day, and those
/// slivers must add up without drift: three credits of one third make
/// exactly one whole day. Binary floating point cannot promise that, so
/// amounts are stored as a reduced numerator/denominator pair and all
/// arithmetic is exact.
///
/// # Invariants
///
/// - `den >= 1`
/// - `gcd(num, den) == 1` (zero is canonically `0/1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCredits {
    num: u64,
    den: u64,
}

impl DayCredits {
    /// Zero credit.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// Exactly one day of credit.
    pub const ONE_DAY: Self = Self { num: 1, den: 1 };

    /// Creates a whole number of days.
    pub fn whole(days: u32) -> Self {
        Self {
            num: u64::from(days),
            den: 1,
        }
    }

    /// Creates an exact fraction of a day, rejecting a zero denominator.
    pub fn fraction(num: u32, den: u32) -> Result<Self, ValidationError> {
        if den == 0 {
            return Err(ValidationError::invalid_format(
                "day_credits",
                "denominator must be positive",
            ));
        }
        Ok(Self::reduced(u128::from(num), u128::from(den)))
    }

    /// Returns true if this amount is zero.
    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Exact addition.
    pub fn plus(self, rhs: Self) -> Self {
        let num = u128::from(self.num) * u128::from(rhs.den) + u128::from(rhs.num) * u128::from(self.den);
        let den = u128::from(self.den) * u128::from(rhs.den);
        Self::reduced(num, den)
    }

    /// Exact subtraction, flooring at zero when rhs exceeds self.
    pub fn saturating_minus(self, rhs: Self) -> Self {
        if rhs >= self {
            return Self::ZERO;
        }
        let num = u128::from(self.num) * u128::from(rhs.den) - u128::from(rhs.num) * u128::from(self.den);
        let den = u128::from(self.den) * u128::from(rhs.den);
        Self::reduced(num, den)
    }

    /// Returns the smaller of the two amounts.
    pub fn min(self, rhs: Self) -> Self {
        if self <= rhs {
            self
        } else {
            rhs
        }
    }

    /// Approximate value in days, for display and reporting only.
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    fn reduced(num: u128, den: u128) -> Self {
        if num == 0 {
            return Self::ZERO;
        }
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        // No accrual policy produces amounts anywhere near these bounds;
        // saturate rather than wrap if one ever does.
        Self {
            num: num.try_into().unwrap_or(u64::MAX),
            den: den.try_into().unwrap_or(1),
        }
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Default for DayCredits {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Ord for DayCredits {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.num) * u128::from(other.den);
        let rhs = u128::from(other.num) * u128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for DayCredits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DayCredits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Deserialization re-establishes the reduced-fraction invariant, so stored
/// balances written by older code (or by hand) normalize on load.
impl<'de> Deserialize<'de> for DayCredits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            num: u64,
            den: u64,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.den == 0 {
            return Err(serde::de::Error::custom("day_credits denominator must be positive"));
        }
        Ok(Self::reduced(u128::from(raw.num), u128::from(raw.den)))
    }
}
