use std::fmt;
use std::num::IntErrorKind;

use tracing::{debug, instrument};

use adspace_models::schedules::format_window_duration;
use adspace_models::{
    DailyOperatingWindow, FitResult, LoopConfiguration, LoopSuggestion, ScheduleParameter,
    TimeOfDay,
};

use crate::modules::schedules::model::ScheduleFitRequest;

/// Furthest a suggested value may be from the current one.
pub const MAX_SUGGESTION_OFFSET: u64 = 5;

/// Suggestions collected per parameter before the scan stops.
pub const MAX_SUGGESTIONS_PER_PARAMETER: usize = 2;

/// Why raw schedule input never reached the fit calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleInputError {
    /// At least one of the four fields is blank.
    MissingFields,
    /// A time is not two integers separated by a colon, or is out of range.
    InvalidTimeFormat,
    /// Spot duration or spots per loop is not a number, or is zero or negative.
    NonPositiveValues,
    /// Anything else: fractional counts, values too large to compute with.
    InvalidValues,
}

impl fmt::Display for ScheduleInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MissingFields => "All dynamic content fields are required.",
            Self::InvalidTimeFormat => "Invalid time format.",
            Self::NonPositiveValues => "Spot duration and spots per loop must be positive numbers.",
            Self::InvalidValues => "Invalid time format or values.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ScheduleInputError {}

/// Checks digital-signage loop configurations against a display's daily window.
///
/// Stateless: every call is a pure function of its input, cheap enough to run
/// on each keystroke of the inventory form.
pub struct ScheduleFitService;

impl ScheduleFitService {
    /// Validate raw form input and explain the verdict.
    ///
    /// Never fails: unusable input yields `is_valid == false` with a message.
    #[instrument(level = "debug", skip_all)]
    pub fn validate(input: &ScheduleFitRequest) -> FitResult {
        match Self::parse(input) {
            Ok((window, config)) => Self::check_fit(&window, &config),
            Err(e) => {
                debug!(error = ?e, "Schedule input rejected");
                FitResult::rejected(e.to_string())
            }
        }
    }

    /// Parse the four raw fields into typed values.
    ///
    /// Checks run in a fixed order: blank fields, then times, then the two counts.
    pub fn parse(
        input: &ScheduleFitRequest,
    ) -> Result<(DailyOperatingWindow, LoopConfiguration), ScheduleInputError> {
        let fields = [
            &input.start_time,
            &input.end_time,
            &input.spot_duration_seconds,
            &input.spots_per_loop,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ScheduleInputError::MissingFields);
        }

        let start = parse_time(&input.start_time)?;
        let end = parse_time(&input.end_time)?;
        let spot_duration_seconds = parse_positive(&input.spot_duration_seconds)?;
        let spots_per_loop = parse_positive(&input.spots_per_loop)?;

        Ok((
            DailyOperatingWindow::new(start, end),
            LoopConfiguration::new(spot_duration_seconds, spots_per_loop),
        ))
    }

    /// Check whether `config` divides `window` into whole loops.
    pub fn check_fit(window: &DailyOperatingWindow, config: &LoopConfiguration) -> FitResult {
        let duration_seconds = window.duration_seconds();
        let Some(loop_seconds) = config.loop_seconds() else {
            return FitResult::rejected(ScheduleInputError::InvalidValues.to_string());
        };

        let loops_exact = duration_seconds as f64 / loop_seconds as f64;
        let fits = duration_seconds % loop_seconds == 0;

        let mut result = FitResult {
            is_valid: fits,
            loops_per_day: None,
            message: String::new(),
            duration_seconds: Some(duration_seconds),
            loop_seconds: Some(loop_seconds),
            loops_exact: Some(loops_exact),
            spot_duration_suggestions: Vec::new(),
            spots_per_loop_suggestions: Vec::new(),
        };

        if fits {
            let loops_per_day = duration_seconds / loop_seconds;
            result.loops_per_day = Some(loops_per_day);
            result.message = success_message(duration_seconds, config, loop_seconds, loops_per_day);
        } else {
            result.spot_duration_suggestions =
                Self::suggest(duration_seconds, config, ScheduleParameter::SpotDuration);
            result.spots_per_loop_suggestions =
                Self::suggest(duration_seconds, config, ScheduleParameter::SpotsPerLoop);
            result.message = failure_message(&result, config);
        }

        debug!(
            duration_seconds,
            loop_seconds,
            is_valid = result.is_valid,
            suggestions = result.suggestions().count(),
            "Schedule fit checked"
        );

        result
    }

    /// Scan nearby values of one parameter, holding the other fixed.
    ///
    /// Offsets run 1..=5; at each offset the higher value is tried before the
    /// lower one, and lower values never go below 1. The first two working
    /// values win; a value already suggested is not repeated.
    pub fn suggest(
        duration_seconds: u64,
        config: &LoopConfiguration,
        parameter: ScheduleParameter,
    ) -> Vec<LoopSuggestion> {
        let current = config.get(parameter);
        let mut found: Vec<LoopSuggestion> = Vec::with_capacity(MAX_SUGGESTIONS_PER_PARAMETER);

        for offset in 1..=MAX_SUGGESTION_OFFSET {
            let higher = current.saturating_add(offset);
            let lower = current.saturating_sub(offset).max(1);

            for candidate in [higher, lower] {
                if found.len() == MAX_SUGGESTIONS_PER_PARAMETER {
                    return found;
                }
                if candidate == current || found.iter().any(|s| s.value == candidate) {
                    continue;
                }
                if let Some(loop_seconds) = config.with(parameter, candidate).loop_seconds()
                    && duration_seconds % loop_seconds == 0
                {
                    found.push(LoopSuggestion {
                        parameter,
                        value: candidate,
                        loops_per_day: duration_seconds / loop_seconds,
                    });
                }
            }
        }

        found
    }
}

fn parse_time(raw: &str) -> Result<TimeOfDay, ScheduleInputError> {
    let (hour, minute) =
        TimeOfDay::parse_components(raw).ok_or(ScheduleInputError::InvalidTimeFormat)?;
    TimeOfDay::new(hour, minute).map_err(|_| ScheduleInputError::InvalidTimeFormat)
}

fn parse_positive(raw: &str) -> Result<u64, ScheduleInputError> {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as u64),
        Ok(_) => Err(ScheduleInputError::NonPositiveValues),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(ScheduleInputError::InvalidValues),
            IntErrorKind::NegOverflow => Err(ScheduleInputError::NonPositiveValues),
            _ => match raw.parse::<f64>() {
                // "10.5": a number, but not a whole count
                Ok(f) if f.is_finite() && f > 0.0 => Err(ScheduleInputError::InvalidValues),
                _ => Err(ScheduleInputError::NonPositiveValues),
            },
        },
    }
}

fn loop_breakdown(config: &LoopConfiguration, loop_seconds: u64) -> String {
    format!(
        "{} × {} = {}s",
        ScheduleParameter::SpotDuration.describe_value(config.spot_duration_seconds),
        ScheduleParameter::SpotsPerLoop.describe_value(config.spots_per_loop),
        loop_seconds
    )
}

fn success_message(
    duration_seconds: u64,
    config: &LoopConfiguration,
    loop_seconds: u64,
    loops_per_day: u64,
) -> String {
    format!(
        "Perfect fit: {} complete loops per day in a {} window ({} per loop).",
        loops_per_day,
        format_window_duration(duration_seconds),
        loop_breakdown(config, loop_seconds)
    )
}

fn failure_message(result: &FitResult, config: &LoopConfiguration) -> String {
    let duration_seconds = result.duration_seconds.unwrap_or_default();
    let loop_seconds = result.loop_seconds.unwrap_or_default();
    let loops_exact = result.loops_exact.unwrap_or_default();

    let mut lines = vec![
        format!(
            "Loop does not fit evenly: {:.2} loops per day (must be a whole number).",
            loops_exact
        ),
        format!(
            "Time window: {} ({}s)",
            format_window_duration(duration_seconds),
            duration_seconds
        ),
        format!("Each loop uses: {}", loop_breakdown(config, loop_seconds)),
        format!(
            "Calculation: {}s ÷ {}s = {:.2} loops",
            duration_seconds, loop_seconds, loops_exact
        ),
    ];

    let suggestions: Vec<&LoopSuggestion> = result.suggestions().collect();
    if suggestions.is_empty() {
        lines.push(
            "No spot duration or spots per loop within 5 of the current values fits this window. \
             Adjust the operating hours so the window divides evenly into whole loops."
                .to_string(),
        );
    } else {
        lines.push("Suggested corrections:".to_string());
        for (i, s) in suggestions.iter().enumerate() {
            lines.push(format!(
                "{}. Change {} to {} → {} loops per day",
                i + 1,
                s.parameter.label(),
                s.parameter.describe_value(s.value),
                s.loops_per_day
            ));
        }
    }

    lines.join("\n")
}
