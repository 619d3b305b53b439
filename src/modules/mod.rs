pub mod pricing;
pub mod quotations;
pub mod schedules;
