use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Error;

/// Currency amount stored as integer minor units (hundredths).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const SCALE: i64 = 100; // 2 decimal places
    pub const TARGET_DECIMALS: u32 = 2;
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Whole currency units. `i32` input keeps the scaled value inside `i64`.
    pub const fn from_major(units: i32) -> Self {
        Self(units as i64 * Self::SCALE)
    }

    pub const fn as_minor(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, Self::TARGET_DECIMALS)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = Error;

    /// Rounds half-to-even to two places, then rejects values outside `i64` minor units.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        let mut rounded = value.round_dp_with_strategy(
            Self::TARGET_DECIMALS,
            RoundingStrategy::MidpointNearestEven,
        );
        rounded.rescale(Self::TARGET_DECIMALS);
        if rounded.scale() != Self::TARGET_DECIMALS {
            return Err(Error::InvalidMoney(value.to_string()));
        }

        i64::try_from(rounded.mantissa())
            .map(Money)
            .map_err(|_| Error::InvalidMoney(value.to_string()))
    }
}

impl FromStr for Money {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = Decimal::from_str(s).map_err(|_| Error::InvalidMoney(s.to_owned()))?;
        Money::try_from(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Money>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid Money format: {}", s)))
    }
}
