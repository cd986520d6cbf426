//! Persona domain module.
//!
//! This module contains the four coach personas, their static profiles, and
//! the response types produced when a dilemma is reflected on.
//!
//! # Module Structure
//!
//! - `model`: Core persona models (`PersonaKind`, `PersonaResponse`, `Reflection`)
//! - `preset`: Static persona profiles (display name, icon, title)
//!
//! # Usage
//!
//! ```ignore
//! use reflect_core::persona::{PersonaKind, PersonaResponse, Reflection, profile};
//! ```

mod model;
mod preset;

// Re-export public API
pub use model::{PERSONA_COUNT, PersonaKind, PersonaResponse, Reflection, ResponseSet};
pub use preset::{PersonaProfile, profile, profiles};
