//! Shared helpers.

pub mod debug;
pub mod time;
