//! Rendering a placed motif into grid cells.

use fmforge_spec::PatternParams;

use crate::grid::{PatternGrid, VOLUME_MAX, VOLUME_MIN};
use crate::pattern::groove::GrooveTemplate;
use crate::pattern::harmony::BarChord;
use crate::pattern::motif::Motif;
use crate::pattern::phrase::MotifPlacement;
use crate::theory::NOTE_SPACE_MAX;

/// Write one bar's motif into the grid.
///
/// Degrees resolve against an anchor at the center of the octave window
/// (`degree_range_base`), shifted by the placement transpose and the bar
/// chord's root, then folded back into the window one octave at a time.
/// Velocity is the groove template at the note's bar offset plus the note's
/// own offset, clamped into the audible volume range.
#[allow(clippy::too_many_arguments)]
pub fn write_motif(
    grid: &mut PatternGrid,
    motif: &Motif,
    placement: &MotifPlacement,
    chord: &BarChord,
    groove: &GrooveTemplate,
    params: &PatternParams,
    scale_len: i32,
    intervals: &[i32],
    bar_start_row: i32,
    degree_range_base: i32,
) {
    let oct_min = params.octave_min.clamp(0, 9);
    let oct_max = params.octave_max.clamp(0, 9);
    let mut degree_range = (oct_max - oct_min + 1) * scale_len;
    if degree_range <= 0 {
        degree_range = scale_len;
    }

    for note in &motif.notes {
        if note.is_rest {
            continue;
        }

        let note_row = bar_start_row + note.row_offset;

        let mut degree = degree_range_base + note.relative_degree + placement.transpose_degrees;
        if placement.invert_contour {
            degree = degree_range_base - (note.relative_degree + placement.transpose_degrees)
                + degree_range_base;
        }
        degree += chord.root_degree;

        while degree < 0 {
            degree += scale_len;
        }
        while degree >= degree_range {
            degree -= scale_len;
        }

        let mut octave = oct_min + degree / scale_len;
        let deg_in_scale = ((degree % scale_len) + scale_len) % scale_len;
        let mut semitone = params.scale_root as i32 + intervals[deg_in_scale as usize];

        while semitone >= 12 {
            semitone -= 12;
            octave += 1;
        }
        while semitone < 0 {
            semitone += 12;
            octave -= 1;
        }
        octave = octave.clamp(0, 9);

        let pitch = ((octave + 5) * 12 + semitone).clamp(0, NOTE_SPACE_MAX);

        let groove_row = (note.row_offset % 16) as usize;
        let vel = (groove.velocity[groove_row] as i32 + note.vel_offset)
            .clamp(VOLUME_MIN as i32, VOLUME_MAX as i32);

        grid.set_note(note_row, pitch as i16, params.instrument as i16, vel as i16);
    }
}
