//! # Adspace Models
//!
//! Domain types shared by the Adspace API and CLI.
//!
//! # Modules
//!
//! - [`value_types`]: Validated primitives (`TimeOfDay`, `MonthlyRate`)
//! - [`schedules`]: Digital-signage operating windows, loop configurations and fit results
//! - [`contracts`]: Contract periods, 30-day-month durations and prorated prices
//!
//! # Example
//!
//! ```ignore
//! use adspace_models::schedules::{DailyOperatingWindow, LoopConfiguration};
//! use adspace_models::value_types::TimeOfDay;
//!
//! let window = DailyOperatingWindow::new("06:00".parse()?, "22:00".parse()?);
//! assert_eq!(window.duration_seconds(), 57_600);
//! ```

pub mod contracts;
pub mod schedules;
pub mod value_types;

pub use contracts::{
    ContractDuration, ContractPeriod, DAYS_PER_MONTH, ProratedPrice, VAT_MULTIPLIER, VAT_RATE,
};
pub use schedules::{
    DailyOperatingWindow, FitResult, LoopConfiguration, LoopSuggestion, ScheduleParameter,
};
pub use value_types::{MonthlyRate, TimeOfDay, ValueTypeError};
