//! Chord progressions and chord-tone gravity.

use fmforge_spec::Scale;

use crate::pattern::motif::Motif;
use crate::rng::GenRng;
use crate::theory;

/// The chord backing one bar, expressed in scale degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarChord {
    /// Scale degree of the chord root.
    pub root_degree: i32,
    /// Chord-tone degree offsets from the root. Slot 3 is the seventh and
    /// only counts when `chord_tone_count` is 4.
    pub chord_tones: [i32; 4],
    /// Active chord tones, 3 (triad) or 4 (seventh chord).
    pub chord_tone_count: usize,
}

impl BarChord {
    /// Whether a scale degree lands on this chord, octave-insensitive.
    pub fn is_chord_tone(&self, scale_degree: i32, scale_len: i32) -> bool {
        let scale_len = if scale_len <= 0 { 7 } else { scale_len };
        let sd = ((scale_degree % scale_len) + scale_len) % scale_len;
        self.chord_tones[..self.chord_tone_count].iter().any(|&ct| {
            let tone = (((self.root_degree + ct) % scale_len) + scale_len) % scale_len;
            sd == tone
        })
    }
}

const MINOR_PROGRESSIONS: [[i32; 4]; 5] = [
    [0, 3, 4, 0], // i-iv-v-i
    [0, 5, 2, 6], // i-VI-III-VII
    [0, 3, 6, 2], // i-iv-VII-III
    [0, 4, 5, 4], // i-v-VI-v
    [0, 3, 4, 3], // i-iv-v-iv
];

const MAJOR_PROGRESSIONS: [[i32; 4]; 5] = [
    [0, 3, 4, 0], // I-IV-V-I
    [0, 5, 3, 4], // I-vi-IV-V
    [0, 2, 5, 1], // I-iii-vi-ii
    [0, 3, 1, 4], // I-IV-ii-V
    [0, 4, 3, 4], // I-V-IV-V
];

/// Pick a 4-chord progression and stamp it across the bars, cycling every
/// 4 bars. Progressions are ordered simplest first; low complexity biases the
/// weighted pick toward the front of the table. High complexity also upgrades
/// individual bars to seventh chords.
pub fn generate_progression(
    rng: &mut GenRng,
    bar_count: i32,
    scale: Scale,
    complexity: i32,
) -> Vec<BarChord> {
    let table = if theory::is_minor_family(scale) {
        &MINOR_PROGRESSIONS
    } else {
        &MAJOR_PROGRESSIONS
    };

    let cf = complexity as f32 / 100.0;
    let mut weights = [0.0f32; 5];
    for (i, w) in weights.iter_mut().enumerate() {
        *w = (1.0 - i as f32 * (1.0 - cf) * 0.25).max(0.1);
    }
    let prog = &table[rng.weighted_pick(&weights)];

    let mut chords = Vec::with_capacity(bar_count.max(0) as usize);
    for b in 0..bar_count.max(0) {
        let mut chord = BarChord {
            root_degree: prog[(b % 4) as usize],
            chord_tones: [0, 2, 4, 6],
            chord_tone_count: 3,
        };
        if cf > 0.6 && rng.rand_float() < cf * 0.4 {
            chord.chord_tone_count = 4;
        }
        chords.push(chord);
    }
    chords
}

/// Snap strong-beat notes toward the bar's chord. Each non-rest note on a
/// beat boundary is pulled, with probability `emphasis`, to the nearest chord
/// tone searched across the adjacent octaves.
pub fn apply_chord_tone_gravity(
    rng: &mut GenRng,
    motif: &mut Motif,
    chord: &BarChord,
    scale_len: i32,
    rows_per_beat: i32,
    emphasis: f32,
) {
    let scale_len = if scale_len <= 0 { 7 } else { scale_len };
    for note in &mut motif.notes {
        if note.is_rest {
            continue;
        }
        let strong_beat = note.row_offset % rows_per_beat == 0;
        if strong_beat && rng.rand_float() < emphasis {
            let degree = note.relative_degree;
            if chord.is_chord_tone(degree, scale_len) {
                continue;
            }
            let mut best_dist = 999;
            let mut best_degree = degree;
            for &ct in &chord.chord_tones[..chord.chord_tone_count] {
                let chord_degree = chord.root_degree + ct;
                for oct in -1..=1 {
                    let candidate = chord_degree + oct * scale_len;
                    let dist = (candidate - degree).abs();
                    if dist < best_dist {
                        best_dist = dist;
                        best_degree = candidate;
                    }
                }
            }
            note.relative_degree = best_degree;
        }
    }
}
