//! fmforge Tracker Backend - Deterministic FM Patch and Pattern Generation
//!
//! This crate turns a style preset, a seed, and a handful of high-level
//! parameters (role, density, complexity, scale) into a playable 4-operator
//! FM patch and a filled tracker pattern region. No composition input is
//! required; everything is derived from hand-authored constraint tables in
//! `fmforge-spec` plus a seeded random source.
//!
//! # Determinism
//!
//! All generation is fully deterministic: the same seed, parameters, and
//! prior RNG consumption produce byte-identical output. Grid regions carry a
//! BLAKE3 content hash for cheap equality checks in tests and caches.
//!
//! Callers that want reproducible-but-evolving output should advance the
//! seed themselves between calls (the conventional discipline is to
//! increment it by one); reseeding with the same value replays the same
//! material.
//!
//! # Example
//!
//! ```
//! use fmforge_backend_tracker::grid::PatternGrid;
//! use fmforge_backend_tracker::patch::PatchGenerator;
//! use fmforge_backend_tracker::pattern::PatternGenerator;
//! use fmforge_spec::{PatchRole, PatternParams, StyleRegistry};
//!
//! let registry = StyleRegistry::new();
//!
//! // An instrument for the bass role, under the active style's constraints.
//! let mut patch_gen = PatchGenerator::new();
//! patch_gen.set_seed(12345);
//! let patch = patch_gen.generate(PatchRole::Bass, &registry.role_constraints(PatchRole::Bass));
//! println!("{}", patch.describe());
//!
//! // A 64-row bassline to go with it.
//! let mut params = PatternParams {
//!     role: PatchRole::Bass,
//!     ..Default::default()
//! };
//! params.apply_style_defaults(registry.active_preset());
//! let mut grid = PatternGrid::new(64);
//! let mut pattern_gen = PatternGenerator::new();
//! pattern_gen.set_seed(12345);
//! pattern_gen.generate(&mut grid, &params, registry.active_preset());
//! ```
//!
//! # Module Structure
//!
//! - [`rng`]: Seedable xoshiro128** random source and draw helpers
//! - [`theory`]: Scale intervals, degree arithmetic, note mapping
//! - [`grid`]: The fixed-capacity pattern grid the pipeline writes into
//! - [`patch`]: Constraint-bound FM patch generation and mutation
//! - [`pattern`]: The multi-stage pattern generation pipeline

pub mod grid;
pub mod patch;
pub mod pattern;
pub mod rng;
pub mod theory;

pub use grid::PatternGrid;
pub use patch::{FmOperator, FmPatch, PatchGenerator};
pub use pattern::PatternGenerator;
pub use rng::GenRng;

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend identifier for cache keys.
pub const BACKEND_ID: &str = "fmforge-backend-tracker";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_backend_id() {
        assert_eq!(BACKEND_ID, "fmforge-backend-tracker");
    }
}
