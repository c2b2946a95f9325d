//! fmforge Style Model - Roles, Scales, Presets, and Generation Parameters
//!
//! This crate holds the declarative half of fmforge: the instrument roles,
//! scale/groove/phrase/contour identifiers, per-role FM synthesis constraint
//! ranges, the builtin style preset catalog, and the request type for one
//! pattern-generation call.
//!
//! Everything here is plain data. The generative algorithms that consume these
//! types live in `fmforge-backend-tracker`. All types serialize with serde so
//! presets and requests can round-trip through JSON.
//!
//! # Module Structure
//!
//! - [`role`]: Instrument roles (lead, bass, pad, ...)
//! - [`music`]: Scale, groove, phrase-form, and contour identifiers
//! - [`constraint`]: Per-operator and per-role FM parameter ranges
//! - [`style`]: Style presets and the preset registry
//! - [`params`]: Pattern-generation request parameters

pub mod constraint;
pub mod music;
pub mod params;
pub mod role;
pub mod style;

pub use constraint::{OperatorConstraints, RoleConstraints};
pub use music::{Contour, GrooveFeel, PhraseForm, Scale};
pub use params::PatternParams;
pub use role::PatchRole;
pub use style::{StylePreset, StyleRegistry, StyleRegistryError};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
