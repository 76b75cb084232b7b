//! # hd-core
//!
//! Core aliases and error definitions shared by the helgdagar crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year (proleptic Gregorian).
pub type Year = i32;

/// Signed day count, used for date serials and day offsets.
pub type Days = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result, MAX_YEAR, MIN_YEAR};
