//! Post-processing passes: effects, note-offs, chromatic passing tones.
//!
//! All three walk the generated region row by row after the motifs are down.
//! Random draws are gated so that a pass over an unchanged region consumes an
//! unchanged slice of the RNG stream.

use fmforge_spec::{PatchRole, PatternParams};

use crate::grid::{effects, PatternGrid, CELL_EMPTY};
use crate::rng::GenRng;
use crate::theory::NOTE_SPACE_MAX;

/// Decorate notes with role-appropriate effect commands.
///
/// Leads slide into large intervals and add vibrato on held notes, basses
/// get occasional downbeat pitch dives, pads shimmer with slow vibrato, and
/// distorted guitar fades its off-beat chugs. Probabilities scale with
/// complexity.
pub fn apply_effects(
    rng: &mut GenRng,
    grid: &mut PatternGrid,
    params: &PatternParams,
    start_row: i32,
    end_row: i32,
) {
    let cf = params.complexity as f32 / 100.0;

    for row in start_row..end_row {
        if !grid.is_note(row) {
            continue;
        }

        let mut prev_row = None;
        for r in (start_row..row).rev() {
            if grid.is_note(r) {
                prev_row = Some(r);
                break;
            }
        }
        let large_interval =
            prev_row.is_some_and(|p| (grid.note(row) - grid.note(p)).abs() > 4);

        let mut long_note = true;
        for r in row + 1..(row + 3).min(end_row) {
            if grid.note(r) != CELL_EMPTY {
                long_note = false;
                break;
            }
        }

        match params.role {
            PatchRole::Lead => {
                if large_interval && rng.rand_float() < 0.4 * cf {
                    let val = rng.rand_int(0x10, 0x30);
                    grid.set_effect(row, effects::TONE_PORTA, val as i16);
                } else if long_note && rng.rand_float() < 0.3 * cf {
                    let speed = rng.rand_int(3, 5);
                    let depth = rng.rand_int(2, 4);
                    grid.set_effect(row, effects::VIBRATO, ((speed << 4) | depth) as i16);
                }
            }
            PatchRole::Bass | PatchRole::SlapBass => {
                if (row - start_row) % params.rows_per_bar == 0 && rng.rand_float() < 0.2 * cf {
                    let val = rng.rand_int(0x08, 0x18);
                    grid.set_effect(row, effects::PORTA_DOWN, val as i16);
                }
            }
            PatchRole::Pad => {
                if rng.rand_float() < 0.5 {
                    let speed = rng.rand_int(2, 3);
                    let depth = rng.rand_int(1, 3);
                    grid.set_effect(row, effects::VIBRATO, ((speed << 4) | depth) as i16);
                }
            }
            PatchRole::DistGuitar => {
                if (row - start_row) % params.rows_per_beat != 0 && rng.rand_float() < 0.3 * cf {
                    grid.set_effect(row, effects::VOL_SLIDE, 0x08);
                }
            }
            PatchRole::Rhythm | PatchRole::Sfx => {
                if large_interval && rng.rand_float() < 0.15 * cf {
                    let val = rng.rand_int(0x10, 0x28);
                    grid.set_effect(row, effects::TONE_PORTA, val as i16);
                }
            }
        }
    }
}

fn default_gap(role: PatchRole) -> i32 {
    match role {
        PatchRole::Bass => 1,
        PatchRole::SlapBass => 2,
        PatchRole::Lead => 0,
        PatchRole::Pad => 0,
        PatchRole::Rhythm => 2,
        PatchRole::Sfx => 3,
        PatchRole::DistGuitar => 1,
    }
}

/// Insert note-off events `gap` rows before each following note onset.
///
/// `None` uses the role's articulation table; `Some(0)` (and the table's
/// zero entries for lead and pad) means full legato, inserting nothing.
/// Existing events are never overwritten.
pub fn apply_note_offs(
    grid: &mut PatternGrid,
    start_row: i32,
    end_row: i32,
    articulation_gap: Option<u32>,
    role: PatchRole,
) {
    let gap = match articulation_gap {
        Some(g) => g as i32,
        None => default_gap(role),
    };
    if gap <= 0 {
        return;
    }

    for row in start_row..end_row {
        if !grid.is_note(row) {
            continue;
        }

        let mut next_row = end_row;
        for r in row + 1..end_row {
            if grid.has_event(r) {
                next_row = r;
                break;
            }
        }

        let off_row = next_row - gap;
        if off_row <= row || off_row >= end_row {
            continue;
        }
        if grid.note(off_row) == CELL_EMPTY {
            grid.set_note_off(off_row);
        }
    }
}

/// Sprinkle chromatic passing tones into short gaps between nearby notes.
///
/// Only rows off the 4-row grid are candidates, and only when the
/// surrounding interval is between a whole step and a fourth, so the
/// approach tone leads into the next note by a semitone.
pub fn apply_chromatic_passing(
    rng: &mut GenRng,
    grid: &mut PatternGrid,
    params: &PatternParams,
    chromaticism: f32,
    start_row: i32,
    end_row: i32,
) {
    for i in 1..end_row - start_row - 1 {
        let row = start_row + i;
        if grid.cell(row).is_none() {
            continue;
        }
        if grid.note(row) != CELL_EMPTY {
            continue;
        }
        if i % 4 == 0 {
            continue;
        }

        let mut prev_note = None;
        for r in (start_row..row).rev() {
            if grid.is_note(r) {
                prev_note = Some(grid.note(r));
                break;
            }
        }
        let mut next_note = None;
        for r in row + 1..end_row {
            if grid.is_note(r) {
                next_note = Some(grid.note(r));
                break;
            }
        }
        let (Some(prev), Some(next)) = (prev_note, next_note) else {
            continue;
        };

        if rng.rand_float() < chromaticism * 0.25 {
            let diff = (next - prev) as i32;
            if diff.abs() < 2 || diff.abs() > 6 {
                continue;
            }
            let passing = (next as i32 + if diff > 0 { -1 } else { 1 }).clamp(0, NOTE_SPACE_MAX);
            let vol = rng.rand_int(0x30, 0x50);
            grid.set_note(row, passing as i16, params.instrument as i16, vol as i16);
        }
    }
}
