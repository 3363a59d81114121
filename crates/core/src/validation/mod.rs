//! Draft validation.
//!
//! Every step of the metadata wizard and every curriculum item type has a
//! named validator returning a [`Validation`]: `Ok(())` or the list of field
//! violations. Validators compose with [`union`] (run all, collect every
//! violation) and `Result::and_then` (stop at the first failing stage).

pub mod curriculum;
pub mod metadata;
pub mod report;

pub use report::{union, FieldErrors, FieldViolation, Validation};
