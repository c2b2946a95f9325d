//! Scale, groove, phrase-form, and contour identifiers.
//!
//! These enums name the musical vocabulary the pattern generator draws from.
//! The interval tables and degree arithmetic behind [`Scale`] live in the
//! backend crate; this module only carries the identifiers and their
//! catalog-order indexing with defined fallbacks.

use serde::{Deserialize, Serialize};

/// Musical scale identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Natural minor (aeolian).
    Minor,
    HarmonicMinor,
    MelodicMinor,
    Phrygian,
    PhrygianDominant,
    Dorian,
    Mixolydian,
    Major,
    PentatonicMinor,
    PentatonicMajor,
    Chromatic,
    Locrian,
    Blues,
}

impl Scale {
    /// All scales, in stable catalog order.
    pub const ALL: [Scale; 13] = [
        Scale::Minor,
        Scale::HarmonicMinor,
        Scale::MelodicMinor,
        Scale::Phrygian,
        Scale::PhrygianDominant,
        Scale::Dorian,
        Scale::Mixolydian,
        Scale::Major,
        Scale::PentatonicMinor,
        Scale::PentatonicMajor,
        Scale::Chromatic,
        Scale::Locrian,
        Scale::Blues,
    ];

    /// Stable index of this scale within [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Scale for a catalog index. Unknown indices fall back to natural minor.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or(Scale::Minor)
    }

    /// Human-readable scale name.
    pub fn name(self) -> &'static str {
        match self {
            Scale::Minor => "Minor (Natural)",
            Scale::HarmonicMinor => "Harmonic Minor",
            Scale::MelodicMinor => "Melodic Minor",
            Scale::Phrygian => "Phrygian",
            Scale::PhrygianDominant => "Phrygian Dominant",
            Scale::Dorian => "Dorian",
            Scale::Mixolydian => "Mixolydian",
            Scale::Major => "Major",
            Scale::PentatonicMinor => "Pentatonic Minor",
            Scale::PentatonicMajor => "Pentatonic Major",
            Scale::Chromatic => "Chromatic",
            Scale::Locrian => "Locrian",
            Scale::Blues => "Blues",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Groove feel: selects a fixed 16-step velocity accent contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrooveFeel {
    /// Even accents on the beat grid.
    Straight,
    /// Strong on-beats, weak off-beats.
    Shuffle,
    /// Sparse heavy accents with quiet ghost rows.
    Funk,
    /// Loud throughout, relentless.
    Driving,
    /// Accent weight shifted to beat 3.
    HalfTime,
}

impl GrooveFeel {
    /// All groove feels, in stable catalog order.
    pub const ALL: [GrooveFeel; 5] = [
        GrooveFeel::Straight,
        GrooveFeel::Shuffle,
        GrooveFeel::Funk,
        GrooveFeel::Driving,
        GrooveFeel::HalfTime,
    ];

    /// Groove for a catalog index. Unknown indices fall back to straight.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or(GrooveFeel::Straight)
    }
}

/// Bar-level phrase arrangement form: which motif plays in which bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseForm {
    Aaba,
    Abab,
    Aaab,
    /// The C slot is realized as motif A transposed up two degrees.
    Abac,
    /// Resolved once per generation call to one of the concrete forms.
    Random,
}

impl PhraseForm {
    /// Concrete (non-random) forms, in stable catalog order.
    pub const CONCRETE: [PhraseForm; 4] = [
        PhraseForm::Aaba,
        PhraseForm::Abab,
        PhraseForm::Aaab,
        PhraseForm::Abac,
    ];
}

/// Melodic contour shape applied over a motif's note positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contour {
    /// Sine bump: rise then fall.
    Arch,
    /// Negative sine bump: fall then rise.
    InvArch,
    /// Linear upward ramp.
    Ascending,
    /// Linear downward ramp.
    Descending,
    /// Stay level with +/-1 degree jitter.
    Flat,
    /// Resolved once per generation call to one of the concrete shapes.
    Random,
}

impl Contour {
    /// Concrete (non-random) contours, in stable catalog order.
    pub const CONCRETE: [Contour; 5] = [
        Contour::Arch,
        Contour::InvArch,
        Contour::Ascending,
        Contour::Descending,
        Contour::Flat,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_index_round_trip() {
        for scale in Scale::ALL {
            assert_eq!(Scale::from_index(scale.index()), scale);
        }
    }

    #[test]
    fn test_unknown_scale_falls_back_to_minor() {
        assert_eq!(Scale::from_index(1000), Scale::Minor);
    }

    #[test]
    fn test_groove_fallback() {
        assert_eq!(GrooveFeel::from_index(42), GrooveFeel::Straight);
    }

    #[test]
    fn test_scale_serde_round_trip() {
        let json = serde_json::to_string(&Scale::PhrygianDominant).unwrap();
        assert_eq!(json, "\"phrygian_dominant\"");
        let back: Scale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Scale::PhrygianDominant);
    }
}
