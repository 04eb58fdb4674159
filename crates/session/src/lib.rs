//! Session workflow for Calmspace.
//!
//! This crate ties the account store and the questionnaire engine together:
//! - [`SessionContext`] executes every user-facing mutation
//! - [`AppConfig`] loads settings from defaults, file and environment
//! - [`init_tracing`] installs the logging subscriber

mod config;
mod context;
mod diary;
mod error;
mod notification;
mod statistics;
mod telemetry;

pub use config::*;
pub use context::*;
pub use diary::*;
pub use error::*;
pub use notification::*;
pub use statistics::*;
pub use telemetry::*;
