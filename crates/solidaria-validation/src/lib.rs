//! Solidariedade Validation Core
//!
//! Pure Rust validation functions compatible with both std and no_std environments.
//! These are the document checks behind the signup form: CPF check digits and
//! the minimum-age rule. Nothing here reads a clock or touches I/O; "today"
//! is always an argument.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod cpf;
pub mod date;

#[cfg(feature = "garde")]
pub mod garde_validators;

// Re-export all validators
pub use cpf::*;
pub use date::*;

#[cfg(feature = "garde")]
pub use garde_validators::*;
