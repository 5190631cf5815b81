//! Prelude module for the personal_code crate.
//!
//! Re-exports the derive macros from derive_more used across the codec types.

pub use derive_more::{Display, Into};
