//! Application configuration module
//!
//! Shipped defaults live in `constants`; `settings` assembles them into
//! the typed [`Config`] and `overrides` layers instance-specific values
//! on top.

pub mod constants;
mod i18n;
mod overrides;
mod schedule;
mod settings;

pub use i18n::{gettext, Language};
pub use schedule::{BeatSchedule, ScheduleEntry};
pub use settings::{
    Accounts, Assets, Config, Database, DebugToolbar, Http, I18n, Indexer, JsonSchemas, Mail,
    OaiServer, PidStore, RateLimit, TaskQueue, Templates, Theme,
};
