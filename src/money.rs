//! Exact currency values stored as integer minor units (cents).
//!
//! Amounts are only converted to floating point at presentation time, so sums
//! over any number of records are exact.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ValidationError;

const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// A non-negative amount of money in minor units.
///
/// The direction of money (earned or spent) is never carried by the amount
/// itself, see [crate::RecordKind].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// The zero amount.
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from minor units, e.g. `Amount::from_minor(1050)` is 10.50.
    pub const fn from_minor(minor_units: u64) -> Self {
        Self(minor_units)
    }

    /// Create an amount from whole major units, e.g. `Amount::from_major(450)` is 450.00.
    pub const fn from_major(major_units: u64) -> Self {
        Self(major_units * MINOR_UNITS_PER_MAJOR)
    }

    /// The amount in minor units.
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    /// Whether the amount is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The amount in major units as a float, for display and ratio calculations.
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Parse an amount typed in by a user.
    ///
    /// Accepts whole numbers and numbers with one or two decimal places,
    /// e.g. "450", "450.5" and "450.50". Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidAmount] for empty text, signs,
    /// more than two decimal places, non-digit characters or values too large
    /// to represent.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidAmount(text.to_owned());
        let trimmed = text.trim();

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());

        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(MINOR_UNITS_PER_MAJOR)
            .and_then(|minor| minor.checked_add(fraction))
            .map(Self)
            .ok_or_else(invalid)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_UNITS_PER_MAJOR,
            self.0 % MINOR_UNITS_PER_MAJOR
        )
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Sub for Amount {
    type Output = Balance;

    fn sub(self, rhs: Self) -> Self::Output {
        Balance::from(self) - Balance::from(rhs)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Amount::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// A signed amount of money in minor units, e.g. net profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Balance(i64);

impl Balance {
    /// The zero balance.
    pub const ZERO: Balance = Balance(0);

    /// Create a balance from minor units.
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// The balance in minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Whether the balance is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The magnitude of the balance as an [Amount].
    pub const fn unsigned_abs(self) -> Amount {
        Amount(self.0.unsigned_abs())
    }

    /// The balance in major units as a float, for display and ratio calculations.
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
    }
}

impl From<Amount> for Balance {
    fn from(value: Amount) -> Self {
        Balance(i64::try_from(value.0).unwrap_or(i64::MAX))
    }
}

impl Sub for Balance {
    type Output = Balance;

    fn sub(self, rhs: Self) -> Self::Output {
        Balance(self.0.saturating_sub(rhs.0))
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "-{}", self.unsigned_abs())
        } else {
            write!(f, "{}", self.unsigned_abs())
        }
    }
}
