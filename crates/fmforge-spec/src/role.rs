//! Instrument roles.
//!
//! A role is an instrumental function within the arrangement. It selects both
//! the synthesis constraint ranges used by the patch generator and the motif
//! algorithm used by the pattern generator.

use serde::{Deserialize, Serialize};

/// Instrumental function of a generated patch/pattern pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchRole {
    /// Melodic lead voice.
    Lead,
    /// Bassline.
    Bass,
    /// Sustained harmonic pad.
    Pad,
    /// Percussive rhythm voice.
    Rhythm,
    /// Sound-effect bursts.
    Sfx,
    /// Slap bass with ghost notes and octave pops.
    SlapBass,
    /// Distorted rhythm guitar.
    DistGuitar,
}

impl PatchRole {
    /// All roles, in stable catalog order.
    pub const ALL: [PatchRole; 7] = [
        PatchRole::Lead,
        PatchRole::Bass,
        PatchRole::Pad,
        PatchRole::Rhythm,
        PatchRole::Sfx,
        PatchRole::SlapBass,
        PatchRole::DistGuitar,
    ];

    /// Number of roles.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index of this role within [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Role for a catalog index. Unknown indices fall back to [`PatchRole::Lead`].
    pub fn from_index(idx: usize) -> Self {
        Self::ALL.get(idx).copied().unwrap_or(PatchRole::Lead)
    }

    /// Human-readable role name.
    pub fn name(self) -> &'static str {
        match self {
            PatchRole::Lead => "Lead",
            PatchRole::Bass => "Bass",
            PatchRole::Pad => "Pad",
            PatchRole::Rhythm => "Rhythm",
            PatchRole::Sfx => "SFX",
            PatchRole::SlapBass => "Slap Bass",
            PatchRole::DistGuitar => "Dist. Guitar",
        }
    }
}

impl std::fmt::Display for PatchRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
