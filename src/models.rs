//! Public Twine models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; the types a caller needs are re-exported from the
//! model module.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the core API. A single `core` may be exposed through multiple adapters,
//! as with flat and pipe insulation.

pub mod thermal;
