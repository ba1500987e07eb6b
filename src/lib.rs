//! # Twine Insulation
//!
//! Steady-state heat loss through multi-layer insulation on flat walls and
//! pipes, following the ASTM C-680 heat-balance method, as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//! Model-specific utility code lives in each model's internal `core` module
//! and is not part of the public API.

pub mod models;
pub mod support;
