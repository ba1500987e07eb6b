//! Crate-level supporting utilities.
//!
//! - [`constraint`]: Numeric invariants checked once at construction.
//! - [`units`]: Extensions to [`uom`] used by the insulation models.

pub mod constraint;
pub mod units;
