//! Strongly-typed value types with validation for domain primitives.
//!
//! Form input arrives as free text. These newtypes are parsed once at the
//! boundary so the schedule and pricing calculations only ever see valid
//! values.
//!
//! # Example
//!
//! ```ignore
//! use adspace_models::value_types::{MonthlyRate, TimeOfDay};
//!
//! let opens: TimeOfDay = "06:00".parse().unwrap();
//! assert_eq!(opens.minutes_since_midnight(), 360);
//!
//! let rate = MonthlyRate::new(15_000.0).unwrap();
//! assert_eq!(rate.amount(), 15_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The time of day is not `HH:MM` or is out of range.
    InvalidTime(String),
    /// The monthly rate is negative or not a finite number.
    InvalidRate(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTime(msg) => write!(f, "Invalid time: {}", msg),
            Self::InvalidRate(msg) => write!(f, "Invalid monthly rate: {}", msg),
        }
    }
}

// ============================================================================
// TimeOfDay
// ============================================================================

/// A wall-clock time of day in 24-hour format.
///
/// Parsed from `"HH:MM"`: exactly two colon-separated integer components,
/// hour `0..=23` and minute `0..=59`. Single-digit components (`"6:5"`) are
/// accepted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u32 = 24 * 60;

    /// Create a time of day, validating the hour and minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValueTypeError> {
        if hour > 23 {
            return Err(ValueTypeError::InvalidTime(format!(
                "hour must be between 0 and 23, got {}",
                hour
            )));
        }
        if minute > 59 {
            return Err(ValueTypeError::InvalidTime(format!(
                "minute must be between 0 and 59, got {}",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Parse the two numeric components without range checks.
    ///
    /// Returns `None` when the text is not two colon-separated integers; the
    /// schedule validator reports that case separately from range errors.
    pub fn parse_components(s: &str) -> Option<(u32, u32)> {
        let (hour, minute) = s.trim().split_once(':')?;
        let hour = hour.trim();
        let minute = minute.trim();
        if hour.is_empty() || minute.is_empty() {
            return None;
        }
        Some((hour.parse().ok()?, minute.parse().ok()?))
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = Self::parse_components(s).ok_or_else(|| {
            ValueTypeError::InvalidTime(format!("'{}' is not in HH:MM format", s))
        })?;
        Self::new(hour, minute)
    }
}

impl TryFrom<&str> for TimeOfDay {
    type Error = ValueTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// MonthlyRate
// ============================================================================

/// A non-negative, finite monthly rental rate.
#[derive(Clone, Copy, PartialEq, PartialOrd, Serialize, ToSchema)]
#[schema(value_type = f64, example = 15000.0)]
pub struct MonthlyRate(f64);

impl MonthlyRate {
    pub fn new(amount: f64) -> Result<Self, ValueTypeError> {
        if !amount.is_finite() {
            return Err(ValueTypeError::InvalidRate(format!(
                "{} is not a finite number",
                amount
            )));
        }
        if amount < 0.0 {
            return Err(ValueTypeError::InvalidRate(format!(
                "{} must not be negative",
                amount
            )));
        }
        Ok(Self(amount))
    }

    #[inline]
    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl fmt::Debug for MonthlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MonthlyRate({})", self.0)
    }
}

impl fmt::Display for MonthlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for MonthlyRate {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount: f64 = s.trim().replace(',', "").parse().map_err(|_| {
            ValueTypeError::InvalidRate(format!("'{}' is not a number", s))
        })?;
        Self::new(amount)
    }
}

impl TryFrom<f64> for MonthlyRate {
    type Error = ValueTypeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for MonthlyRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let amount = f64::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
