use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RangeError {
    #[error("Percentage must be a finite, non-negative number: {0}")]
    InvalidPercent(f64),

    #[error("Range is inverted: low {low} > high {high}")]
    Inverted { low: ThcPercent, high: ThcPercent },
}

/// A percentage with exactly two fractional digits, stored as hundredths.
///
/// Serializes as a JSON number (`20.71`), displays as `20.71`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct ThcPercent(u16);

impl ThcPercent {
    pub const fn from_hundredths(hundredths: u16) -> Self {
        ThcPercent(hundredths)
    }

    pub const fn hundredths(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<ThcPercent> for f64 {
    fn from(value: ThcPercent) -> Self {
        value.as_f64()
    }
}

impl TryFrom<f64> for ThcPercent {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let scaled = (value * 100.0).round();
        if !scaled.is_finite() || scaled < 0.0 || scaled > f64::from(u16::MAX) {
            return Err(RangeError::InvalidPercent(value));
        }
        Ok(ThcPercent(scaled as u16))
    }
}

impl fmt::Display for ThcPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// An ordered THC range. `low <= high` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr")]
pub struct ThcRange {
    low: ThcPercent,
    high: ThcPercent,
}

#[derive(Deserialize)]
struct RangeRepr {
    low: ThcPercent,
    high: ThcPercent,
}

impl TryFrom<RangeRepr> for ThcRange {
    type Error = RangeError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        if repr.low > repr.high {
            return Err(RangeError::Inverted {
                low: repr.low,
                high: repr.high,
            });
        }
        Ok(ThcRange {
            low: repr.low,
            high: repr.high,
        })
    }
}

impl ThcRange {
    /// Lower edge of every derived range, 20.50%.
    pub const FLOOR: ThcPercent = ThcPercent::from_hundredths(2050);
    /// Upper edge of every derived range, 26.50%.
    pub const CEILING: ThcPercent = ThcPercent::from_hundredths(2650);

    /// Orders the two values; argument order does not matter.
    pub fn from_unordered(a: ThcPercent, b: ThcPercent) -> Self {
        ThcRange {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> ThcPercent {
        self.low
    }

    pub fn high(&self) -> ThcPercent {
        self.high
    }

    pub fn contains(&self, value: ThcPercent) -> bool {
        self.low <= value && value <= self.high
    }
}

impl fmt::Display for ThcRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%\u{2013}{}%", self.low, self.high)
    }
}

/// What a strain card renders: the range, its rounded midpoint and the
/// preformatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    pub range: ThcRange,
    /// Midpoint rounded to one fractional digit.
    pub average: f64,
    pub display: String,
}
