//! Style presets and the preset registry.
//!
//! A style preset bundles everything the generators need to sound like a
//! particular catalog of FM game music: tempo range, preferred scales,
//! per-role synthesis constraints, and pattern-style coefficients. The
//! registry holds a fixed builtin catalog plus exactly one mutable "custom"
//! slot (always last) and tracks which preset is active.

mod presets;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constraint::RoleConstraints;
use crate::music::{GrooveFeel, PhraseForm, Scale};
use crate::role::PatchRole;

/// A named, immutable-once-loaded style description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Preset name.
    pub name: String,
    /// Tempo range in BPM.
    pub tempo_min: u16,
    pub tempo_max: u16,
    /// Scales this style prefers, in priority order.
    pub preferred_scales: Vec<Scale>,
    /// Patch constraints, one per role, indexed by [`PatchRole::index`].
    pub roles: Vec<RoleConstraints>,
    /// Overall rhythmic busyness, 0.0-1.0.
    pub rhythm_density: f32,
    /// Probability-like weight for off-grid onset nudges, 0.0-1.0.
    pub syncopation: f32,
    /// Probability-like weight for chromatic passing tones, 0.0-1.0.
    pub chromaticism: f32,
    /// Groove feel used when the request does not override it.
    pub default_groove: GrooveFeel,
    /// Phrase form used when the request does not override it.
    pub default_phrase_form: PhraseForm,
    /// Strong-beat chord-tone snap probability, 0.0-1.0.
    pub chord_tone_emphasis: f32,
    /// Per-role motif length hint in rows (0 = auto), indexed by role.
    pub role_motif_length: Vec<u16>,
}

impl Default for StylePreset {
    fn default() -> Self {
        Self {
            name: "Custom".to_string(),
            tempo_min: 100,
            tempo_max: 200,
            preferred_scales: Vec::new(),
            roles: vec![RoleConstraints::default(); PatchRole::COUNT],
            rhythm_density: 0.5,
            syncopation: 0.3,
            chromaticism: 0.2,
            default_groove: GrooveFeel::Straight,
            default_phrase_form: PhraseForm::Random,
            chord_tone_emphasis: 0.7,
            role_motif_length: vec![0; PatchRole::COUNT],
        }
    }
}

impl StylePreset {
    /// Constraints for one role. Presets authored with fewer role entries
    /// (e.g. loaded from a hand-written file) fall back to the lead slot,
    /// and an entirely empty table falls back to unconstrained defaults.
    pub fn role_constraints(&self, role: PatchRole) -> RoleConstraints {
        self.roles
            .get(role.index())
            .or_else(|| self.roles.first())
            .cloned()
            .unwrap_or_default()
    }

    /// Motif length hint in rows for one role (0 = auto).
    pub fn motif_length(&self, role: PatchRole) -> u16 {
        self.role_motif_length
            .get(role.index())
            .copied()
            .unwrap_or(0)
    }

    /// Check the preset for author errors.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        if self.name.is_empty() {
            return Err(StyleValidationError::EmptyName);
        }
        if self.tempo_min > self.tempo_max {
            return Err(StyleValidationError::TempoRange {
                min: self.tempo_min,
                max: self.tempo_max,
            });
        }
        for (field, value) in [
            ("rhythm_density", self.rhythm_density),
            ("syncopation", self.syncopation),
            ("chromaticism", self.chromaticism),
            ("chord_tone_emphasis", self.chord_tone_emphasis),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(StyleValidationError::CoefficientRange { field, value });
            }
        }
        for constraints in &self.roles {
            if let Some(&alg) = constraints.algorithms.iter().find(|&&a| a > 7) {
                return Err(StyleValidationError::AlgorithmIndex(alg));
            }
        }
        Ok(())
    }
}

/// Errors surfaced when validating an authored style preset.
#[derive(Debug, Error, PartialEq)]
pub enum StyleValidationError {
    /// Preset name is empty.
    #[error("preset name cannot be empty")]
    EmptyName,

    /// Tempo bounds are out of order.
    #[error("tempo range is inverted: min {min} > max {max}")]
    TempoRange { min: u16, max: u16 },

    /// A 0.0-1.0 coefficient is out of range.
    #[error("{field} must be in 0.0-1.0, got {value}")]
    CoefficientRange { field: &'static str, value: f32 },

    /// An allowed algorithm index exceeds the 4-operator limit.
    #[error("algorithm index {0} out of range (0-7)")]
    AlgorithmIndex(u8),
}

/// Kept name for the registry error alias used by downstream callers.
pub type StyleRegistryError = StyleValidationError;

/// Builtin preset catalog plus one mutable custom slot.
pub struct StyleRegistry {
    presets: Vec<StylePreset>,
    active_idx: usize,
}

impl StyleRegistry {
    /// Build the registry with the builtin catalog. The custom preset is
    /// always the last entry.
    pub fn new() -> Self {
        Self {
            presets: vec![
                presets::thunder_force(),
                presets::streets_of_rage(),
                presets::sonic(),
                presets::musha(),
                presets::custom(),
            ],
            active_idx: 0,
        }
    }

    /// Number of presets, custom slot included.
    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }

    /// Preset by index. Out-of-range indices fall back to the first preset.
    pub fn preset(&self, idx: usize) -> &StylePreset {
        self.presets.get(idx).unwrap_or(&self.presets[0])
    }

    /// The currently active preset.
    pub fn active_preset(&self) -> &StylePreset {
        self.preset(self.active_idx)
    }

    /// Index of the active preset.
    pub fn active_index(&self) -> usize {
        self.active_idx
    }

    /// Select the active preset. Out-of-range indices are ignored.
    pub fn set_active(&mut self, idx: usize) {
        if idx < self.presets.len() {
            self.active_idx = idx;
        }
    }

    /// Patch constraints for one role of the active preset.
    pub fn role_constraints(&self, role: PatchRole) -> RoleConstraints {
        self.active_preset().role_constraints(role)
    }

    /// Mutable handle to the custom preset (always the last slot).
    pub fn custom_preset_mut(&mut self) -> &mut StylePreset {
        self.presets
            .last_mut()
            .expect("registry always holds the builtin catalog")
    }

    /// Replace the custom slot with a validated preset.
    pub fn load_custom(&mut self, preset: StylePreset) -> Result<(), StyleValidationError> {
        preset.validate()?;
        *self.custom_preset_mut() = preset;
        Ok(())
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registry_has_builtin_catalog() {
        let reg = StyleRegistry::new();
        assert_eq!(reg.preset_count(), 5);
        assert_eq!(reg.preset(0).name, "Thunder Force");
        assert_eq!(reg.preset(4).name, "Custom");
    }

    #[test]
    fn test_out_of_range_preset_falls_back_to_first() {
        let reg = StyleRegistry::new();
        assert_eq!(reg.preset(99).name, reg.preset(0).name);
    }

    #[test]
    fn test_set_active_ignores_invalid_index() {
        let mut reg = StyleRegistry::new();
        reg.set_active(2);
        reg.set_active(500);
        assert_eq!(reg.active_index(), 2);
    }

    #[test]
    fn test_custom_slot_is_mutable() {
        let mut reg = StyleRegistry::new();
        reg.custom_preset_mut().syncopation = 0.9;
        assert_eq!(reg.preset(4).syncopation, 0.9);
    }

    #[test]
    fn test_builtin_presets_validate() {
        let reg = StyleRegistry::new();
        for idx in 0..reg.preset_count() {
            assert_eq!(reg.preset(idx).validate(), Ok(()));
        }
    }

    #[test]
    fn test_load_custom_rejects_bad_coefficient() {
        let mut reg = StyleRegistry::new();
        let bad = StylePreset {
            chromaticism: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            reg.load_custom(bad),
            Err(StyleValidationError::CoefficientRange { .. })
        ));
    }

    #[test]
    fn test_preset_serde_round_trip() {
        let preset = presets::streets_of_rage();
        let json = serde_json::to_string(&preset).unwrap();
        let back: StylePreset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }
}
