//! Pattern-generation request parameters.

use serde::{Deserialize, Serialize};

use crate::music::{Contour, GrooveFeel, PhraseForm, Scale};
use crate::role::PatchRole;
use crate::style::StylePreset;

/// Everything describing one pattern-generation call.
///
/// Transient: built per call, never persisted. Defaults mirror a plain
/// 4-bar, 64-row request for an A-minor lead line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternParams {
    /// Target channel (informational; the grid region is caller-supplied).
    pub channel: u8,
    /// Instrument index written into every generated note cell.
    pub instrument: u8,
    /// Role selecting the motif algorithm and articulation defaults.
    pub role: PatchRole,
    /// Scale root pitch class, 0-11 (C=0 ... B=11).
    pub scale_root: u8,
    /// Scale type.
    pub scale: Scale,
    /// How many candidate onsets survive, 0-100.
    pub density: u8,
    /// Melodic/harmonic elaboration, 0-100.
    pub complexity: u8,
    /// Lowest octave the pattern may reach.
    pub octave_min: i32,
    /// Highest octave the pattern may reach.
    pub octave_max: i32,
    /// Declared pattern length in rows; `generate` fills `[0, pattern_length)`.
    pub pattern_length: i32,
    /// Whether the effects post-pass runs.
    pub allow_effects: bool,
    /// Metric grid: rows per beat.
    pub rows_per_beat: i32,
    /// Metric grid: rows per bar.
    pub rows_per_bar: i32,
    /// Groove feel for the velocity template.
    pub groove: GrooveFeel,
    /// Phrase form for motif arrangement.
    pub phrase_form: PhraseForm,
    /// Contour hint applied to each motif.
    pub contour: Contour,
    /// Motif length hint in rows (0 = auto).
    pub motif_length_hint: u16,
    /// Rows of silence before the next onset. `None` uses the role default
    /// table; `Some(0)` forces legato (no note-off insertion).
    pub articulation_gap: Option<u32>,
    /// Strong-beat chord-tone snap probability, 0.0-1.0.
    pub chord_tone_emphasis: f32,
}

impl Default for PatternParams {
    fn default() -> Self {
        Self {
            channel: 0,
            instrument: 0,
            role: PatchRole::Lead,
            scale_root: 9, // A
            scale: Scale::Minor,
            density: 60,
            complexity: 50,
            octave_min: 3,
            octave_max: 5,
            pattern_length: 64,
            allow_effects: true,
            rows_per_beat: 4,
            rows_per_bar: 16,
            groove: GrooveFeel::Straight,
            phrase_form: PhraseForm::Random,
            contour: Contour::Random,
            motif_length_hint: 0,
            articulation_gap: None,
            chord_tone_emphasis: 0.7,
        }
    }
}

impl PatternParams {
    /// Pull style-level defaults into this request: groove, phrase form,
    /// chord-tone emphasis, and the role's motif-length hint.
    ///
    /// Callers that want to override any of these should do so after this
    /// call.
    pub fn apply_style_defaults(&mut self, style: &StylePreset) {
        self.groove = style.default_groove;
        self.phrase_form = style.default_phrase_form;
        self.chord_tone_emphasis = style.chord_tone_emphasis;
        self.motif_length_hint = style.motif_length(self.role);
    }
}
