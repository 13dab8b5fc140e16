//! Core infrastructure
//!
//! Cross-cutting facilities shared by the rest of the crate.

pub mod logging;
