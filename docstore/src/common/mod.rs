//! Shared building blocks used across the crate.

mod shared;

pub use shared::*;
