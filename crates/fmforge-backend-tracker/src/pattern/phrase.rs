//! Phrase forms: arranging two motifs across the bars of a pattern.

use fmforge_spec::PhraseForm;

use crate::rng::GenRng;

/// Upper bound on placements per phrase, one per bar.
pub const MAX_PLACEMENTS: usize = 16;

/// One bar's worth of arrangement: which motif plays and how it is altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifPlacement {
    /// Bar this placement covers.
    pub bar_index: i32,
    /// Index into the motif pool.
    pub motif_index: usize,
    /// Diatonic transposition applied on top of the motif's degrees.
    pub transpose_degrees: i32,
    /// Mirror the motif's degrees around the range center.
    pub invert_contour: bool,
}

/// A bar-by-bar arrangement plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub placements: Vec<MotifPlacement>,
    pub total_bars: i32,
}

// bar slot -> motif index per concrete form; -1 marks the C slot,
// realized as motif A transposed up two degrees
const FORM_MAP: [[i32; 4]; 4] = [
    [0, 0, 1, 0],  // AABA
    [0, 1, 0, 1],  // ABAB
    [0, 0, 0, 1],  // AAAB
    [0, 1, 0, -1], // ABAC
];

/// Lay motifs across `bar_count` bars following a phrase form. A random form
/// resolves to one concrete form for the whole phrase. Patterns longer than
/// 4 bars pick up a cumulative per-cycle transposition drift so later cycles
/// are not literal repeats.
pub fn build_phrase(
    rng: &mut GenRng,
    form: PhraseForm,
    bar_count: i32,
    motif_count: usize,
) -> Phrase {
    let form = match form {
        PhraseForm::Random => {
            PhraseForm::CONCRETE[rng.rand_int(0, PhraseForm::CONCRETE.len() as i32 - 1) as usize]
        }
        concrete => concrete,
    };
    let form_idx = PhraseForm::CONCRETE
        .iter()
        .position(|&f| f == form)
        .unwrap_or(0);

    let motif_count = motif_count.max(1);
    let mut placements = Vec::new();
    for b in 0..bar_count {
        if placements.len() >= MAX_PLACEMENTS {
            break;
        }
        let map_val = FORM_MAP[form_idx][(b % 4) as usize];
        let mut mp = if map_val == -1 {
            MotifPlacement {
                bar_index: b,
                motif_index: 0,
                transpose_degrees: 2,
                invert_contour: false,
            }
        } else {
            MotifPlacement {
                bar_index: b,
                motif_index: map_val as usize % motif_count,
                transpose_degrees: 0,
                invert_contour: false,
            }
        };

        if b >= 4 {
            let cycle = b / 4;
            mp.transpose_degrees += cycle * rng.rand_int(-1, 2);
        }

        placements.push(mp);
    }

    Phrase {
        placements,
        total_bars: bar_count,
    }
}
