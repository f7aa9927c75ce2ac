//! CLI module - command-line interface definitions.

mod args;

pub use args::{Cli, Commands, ShowArgs};
