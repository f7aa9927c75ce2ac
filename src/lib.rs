//! Lectern configuration - typed defaults for an e-book catalog service
//!
//! This crate is the configuration layer of the Lectern digital library:
//! every default the application ships with, expressed as a typed
//! [`Config`] that deployments override from the outside.
//!
//! # Layers
//!
//! - **config**: shipped defaults, typed settings, override plumbing
//! - **cli**: command-line interface
//! - **commands**: CLI command implementations
//! - **errors**: centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the effective configuration (secrets redacted)
//! cargo run -- show
//!
//! # Validate the configuration and exit non-zero on failure
//! cargo run -- check
//!
//! # List the periodic background jobs
//! cargo run -- schedule
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{gettext, BeatSchedule, Config, Language, ScheduleEntry};
pub use errors::{ConfigError, ConfigResult};
