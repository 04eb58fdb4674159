//! Self-assessment questionnaires for Calmspace.
//!
//! This crate provides:
//! - The fixed anxiety, stress and burnout question sets
//! - A state machine walking a user through one questionnaire
//! - Scoring and banding of completed answers

mod engine;
mod error;
mod questions;
mod scoring;

pub use engine::*;
pub use error::*;
pub use questions::*;
pub use scoring::*;
