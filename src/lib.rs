//! # Adspace API
//!
//! Scheduling and pricing services for an advertising-inventory and
//! sales-operations platform, built with Rust and Axum.
//!
//! ## Overview
//!
//! - **Schedule fit validation**: checks that a digital display's spot/loop
//!   configuration divides its daily operating window into whole loops, and
//!   suggests nearby spot durations or loop sizes when it does not
//! - **Contract pricing**: prorates a monthly site rate across a contract
//!   period using 30-day months, with 12% VAT
//! - **Quotations**: prices several sites at once for quotations and cost
//!   estimates
//!
//! The calculations are pure and synchronous. The HTTP layer only parses,
//! rate-limits, and serializes.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── bin/cli.rs        # adspace-cli: fit checks and pricing from the terminal
//! ├── config/           # Re-exports of adspace-config
//! ├── middleware/       # Rate limiting
//! ├── modules/          # Feature modules
//! │   ├── schedules/   # Loop fit validation
//! │   ├── pricing/     # Prorated contract pricing
//! │   └── quotations/  # Multi-line quotation totals
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validated JSON extractor
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Request and response DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! RATE_LIMIT_PER_SECOND=20
//! RATE_LIMIT_BURST_SIZE=60
//! ```
//!
//! ```bash
//! cargo run --bin adspace
//! cargo run --bin adspace-cli -- fit --start 06:00 --end 22:00 --spot-duration 10 --spots-per-loop 18
//! ```
//!
//! ### API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod config;
pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use adspace_config;
pub use adspace_core;
pub use adspace_models;
