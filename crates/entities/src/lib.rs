//! Core entity definitions for Calmspace.
//!
//! This crate defines the data types shared across the Calmspace crates:
//! users, mood diary entries, coping techniques and questionnaire results,
//! plus the keyed ordered collection they are stored in.

mod collection;
mod diary;
mod technique;
mod test_result;
mod user;

pub use collection::*;
pub use diary::*;
pub use technique::*;
pub use test_result::*;
pub use user::*;
