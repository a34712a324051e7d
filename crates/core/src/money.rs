//! Non-negative currency amounts.

use core::iter::Sum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value_object::ValueObject;

/// Currency amount in smallest currency unit (e.g., cents).
///
/// On the wire an amount is a plain JSON number in major units (`1200`,
/// `99.5`), which is what the dashboard fixtures carry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Whole major units (e.g. dollars).
    pub fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub fn minor(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Text used for free-text search: `1200` for whole amounts, `1200.50` otherwise.
    pub fn to_plain_string(&self) -> String {
        let major = self.0 / 100;
        let cents = self.0 % 100;
        if cents == 0 {
            major.to_string()
        } else {
            format!("{major}.{cents:02}")
        }
    }

    fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_major_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        if !major.is_finite() || major < 0.0 {
            return Err(serde::de::Error::custom(format!(
                "amount must be a non-negative number, got {major}"
            )));
        }
        Ok(Money((major * 100.0).round() as u64))
    }
}
