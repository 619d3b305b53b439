//! Digital-signage scheduling types.
//!
//! A display runs a fixed daily window. Content plays in loops of equally long
//! spots, and a configuration only "fits" when the window holds a whole number
//! of loops.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::value_types::TimeOfDay;

/// The hours per day a digital display is active.
///
/// When `end <= start` the window crosses midnight: 22:00-06:00 is eight
/// hours, and equal times mean a full 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyOperatingWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl DailyOperatingWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end <= self.start
    }

    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.minutes_since_midnight();
        let mut end = self.end.minutes_since_midnight();
        if self.crosses_midnight() {
            end += TimeOfDay::MINUTES_PER_DAY;
        }
        end - start
    }

    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.duration_minutes()) * 60
    }
}

/// Which half of a [`LoopConfiguration`] a suggestion changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleParameter {
    SpotDuration,
    SpotsPerLoop,
}

impl ScheduleParameter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SpotDuration => "spot duration",
            Self::SpotsPerLoop => "spots per loop",
        }
    }

    /// Render a value of this parameter with its unit, e.g. `12s` or `18 spots`.
    pub fn describe_value(&self, value: u64) -> String {
        match self {
            Self::SpotDuration => format!("{}s", value),
            Self::SpotsPerLoop if value == 1 => "1 spot".to_string(),
            Self::SpotsPerLoop => format!("{} spots", value),
        }
    }
}

/// How content is scheduled within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfiguration {
    pub spot_duration_seconds: u64,
    pub spots_per_loop: u64,
}

impl LoopConfiguration {
    pub fn new(spot_duration_seconds: u64, spots_per_loop: u64) -> Self {
        Self {
            spot_duration_seconds,
            spots_per_loop,
        }
    }

    /// Seconds one full loop takes, or `None` if the product overflows.
    pub fn loop_seconds(&self) -> Option<u64> {
        self.spot_duration_seconds.checked_mul(self.spots_per_loop)
    }

    pub fn get(&self, parameter: ScheduleParameter) -> u64 {
        match parameter {
            ScheduleParameter::SpotDuration => self.spot_duration_seconds,
            ScheduleParameter::SpotsPerLoop => self.spots_per_loop,
        }
    }

    /// A copy of this configuration with one parameter replaced.
    pub fn with(&self, parameter: ScheduleParameter, value: u64) -> Self {
        match parameter {
            ScheduleParameter::SpotDuration => Self::new(value, self.spots_per_loop),
            ScheduleParameter::SpotsPerLoop => Self::new(self.spot_duration_seconds, value),
        }
    }
}

/// A nearby value for one parameter that makes the window divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoopSuggestion {
    pub parameter: ScheduleParameter,
    pub value: u64,
    pub loops_per_day: u64,
}

/// Outcome of checking a loop configuration against an operating window.
///
/// Computed fresh for every input change and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FitResult {
    pub is_valid: bool,
    /// Whole loop count, present only when the configuration fits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loops_per_day: Option<u64>,
    /// Success summary or multi-line failure diagnostics.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_seconds: Option<u64>,
    /// Unrounded `duration_seconds / loop_seconds`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loops_exact: Option<f64>,
    #[serde(default)]
    pub spot_duration_suggestions: Vec<LoopSuggestion>,
    #[serde(default)]
    pub spots_per_loop_suggestions: Vec<LoopSuggestion>,
}

impl FitResult {
    /// An invalid result for input that never reached the fit calculation.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            loops_per_day: None,
            message: message.into(),
            duration_seconds: None,
            loop_seconds: None,
            loops_exact: None,
            spot_duration_suggestions: Vec::new(),
            spots_per_loop_suggestions: Vec::new(),
        }
    }

    /// All suggestions, spot duration first.
    pub fn suggestions(&self) -> impl Iterator<Item = &LoopSuggestion> {
        self.spot_duration_suggestions
            .iter()
            .chain(self.spots_per_loop_suggestions.iter())
    }
}

/// Format a window length as `XhYm`, or `Ym` when shorter than an hour.
pub fn format_window_duration(seconds: u64) -> String {
    let total_minutes = seconds / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{}h{}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> DailyOperatingWindow {
        DailyOperatingWindow::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn test_daytime_window() {
        let w = window("06:00", "22:00");
        assert!(!w.crosses_midnight());
        assert_eq!(w.duration_seconds(), 57_600);
    }

    #[test]
    fn test_overnight_window() {
        let w = window("22:00", "06:00");
        assert!(w.crosses_midnight());
        assert_eq!(w.duration_seconds(), 28_800);
    }

    #[test]
    fn test_equal_times_span_full_day() {
        assert_eq!(window("08:00", "08:00").duration_seconds(), 86_400);
    }

    #[test]
    fn test_loop_seconds_overflow() {
        assert_eq!(LoopConfiguration::new(10, 18).loop_seconds(), Some(180));
        assert_eq!(LoopConfiguration::new(u64::MAX, 2).loop_seconds(), None);
    }

    #[test]
    fn test_with_replaces_one_parameter() {
        let config = LoopConfiguration::new(11, 18);
        assert_eq!(
            config.with(ScheduleParameter::SpotDuration, 12),
            LoopConfiguration::new(12, 18)
        );
        assert_eq!(
            config.with(ScheduleParameter::SpotsPerLoop, 20),
            LoopConfiguration::new(11, 20)
        );
    }

    #[test]
    fn test_format_window_duration() {
        assert_eq!(format_window_duration(57_600), "16h0m");
        assert_eq!(format_window_duration(5_400), "1h30m");
        assert_eq!(format_window_duration(2_700), "45m");
    }

    #[test]
    fn test_rejected_result_serializes_without_figures() {
        let json = serde_json::to_value(FitResult::rejected("Invalid time format.")).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["message"], "Invalid time format.");
        assert!(json.get("loops_per_day").is_none());
        assert_eq!(json["spot_duration_suggestions"], serde_json::json!([]));
    }
}
