use std::fmt;
use std::iter::Sum;
use std::ops::Add;

pub const DISTANCE_RATE: f64 = 15.0;
pub const DURATION_RATE: f64 = 30.0;
/// Largest edge cost whose hundredths still fit an f64 mantissa exactly.
pub const MAX_EDGE_COST: f64 = 9.0e13;

/// Monetary cost in hundredths, so that sums along a path stay exact.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Cost(u128);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// Rounds `distance * 15 + duration * 30` to two decimals from the exact
    /// binary value. Absent when the legs are negative, not finite, or the
    /// cost exceeds [`MAX_EDGE_COST`].
    pub fn from_legs(distance: f64, duration: f64) -> Option<Self> {
        let value = distance * DISTANCE_RATE + duration * DURATION_RATE;
        if !value.is_finite() || value < 0.0 || value > MAX_EDGE_COST {
            return None;
        }
        // `{:.2}` rounds the exact decimal expansion, as Python's round does
        let text = format!("{:.2}", value.abs());
        let (units, hundredths) = text.split_once('.')?;
        let units = units.parse::<u128>().ok()?;
        let hundredths = hundredths.parse::<u128>().ok()?;
        Some(Cost(units * 100 + hundredths))
    }
    pub fn from_cents(cents: u128) -> Self {
        Cost(cents)
    }
    pub fn cents(self) -> u128 {
        self.0
    }
}

impl Add for Cost {
    type Output = Cost;
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
