//! Thermal systems models.
//!
//! This module contains heat loss models for insulated surfaces.

pub mod insulation;
