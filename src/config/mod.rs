//! Configuration modules for the Adspace API.
//!
//! Configuration lives in the `adspace-config` crate and is re-exported here
//! under the paths the rest of the application uses.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Per-client API rate limiting
//! - [`server`]: Listener addresses for the API and metrics endpoints

pub use adspace_config::{cors, rate_limit, server};
