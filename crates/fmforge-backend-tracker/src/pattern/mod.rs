//! The multi-stage pattern generation pipeline.
//!
//! One `generate` call runs a fixed sequence of stages over a shared RNG:
//! bar segmentation, chord progression, groove lookup, two role motifs,
//! contour shaping, phrase arrangement, chord-tone gravity, grid writing,
//! then the effects, note-off, and chromatic post-passes. The stage order and
//! each stage's draw pattern are fixed; together with the seed they fully
//! determine the output.

pub mod groove;
pub mod harmony;
pub mod motif;
pub mod passes;
pub mod phrase;
pub mod writer;

use fmforge_spec::{Contour, PatternParams, StylePreset};

use crate::grid::{PatternGrid, MAX_ROWS};
use crate::rng::GenRng;
use crate::theory;

use groove::GrooveTemplate;

/// Upper bound on bars per generated region.
pub const MAX_BARS: i32 = 16;

/// Number of bars a region spans, clamped to `1..=MAX_BARS`.
pub fn compute_bar_count(length: i32, rows_per_bar: i32) -> i32 {
    let rows_per_bar = if rows_per_bar <= 0 { 16 } else { rows_per_bar };
    (length / rows_per_bar).clamp(1, MAX_BARS)
}

/// Seeded generator for tracker pattern regions.
pub struct PatternGenerator {
    rng: GenRng,
}

impl PatternGenerator {
    pub fn new() -> Self {
        Self { rng: GenRng::new() }
    }

    /// Reset the RNG. Equal seeds with equal inputs replay equal patterns.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng.seed(seed);
    }

    /// Fill rows `[0, params.pattern_length)` of the grid.
    pub fn generate(&mut self, grid: &mut PatternGrid, params: &PatternParams, style: &StylePreset) {
        self.generate_fill(grid, params, style, 0, params.pattern_length);
    }

    /// Fill an arbitrary row span `[start_row, end_row)`. Spans that are
    /// empty or longer than the grid capacity generate nothing.
    pub fn generate_fill(
        &mut self,
        grid: &mut PatternGrid,
        params: &PatternParams,
        style: &StylePreset,
        start_row: i32,
        end_row: i32,
    ) {
        let len = end_row - start_row;
        if len <= 0 || len > MAX_ROWS as i32 {
            return;
        }

        // normalize the metric grid once so every stage divides safely
        let mut params = params.clone();
        if params.rows_per_bar <= 0 {
            params.rows_per_bar = 16;
        }
        if params.rows_per_beat <= 0 {
            params.rows_per_beat = 4;
        }
        let rows_per_bar = params.rows_per_bar;
        let rows_per_beat = params.rows_per_beat;

        let bar_count = compute_bar_count(len, rows_per_bar);
        let intervals = theory::intervals(params.scale);
        let scale_len = intervals.len() as i32;

        let chords = harmony::generate_progression(
            &mut self.rng,
            bar_count,
            params.scale,
            params.complexity as i32,
        );
        let groove = GrooveTemplate::for_feel(params.groove);

        let motif_a = motif::generate_role_motif(
            &mut self.rng,
            params.role,
            params.density as i32,
            params.complexity as i32,
            style.syncopation,
            rows_per_bar,
            params.motif_length_hint,
            scale_len,
        );
        let motif_b = motif::generate_role_motif(
            &mut self.rng,
            params.role,
            params.density as i32,
            params.complexity as i32,
            style.syncopation,
            rows_per_bar,
            params.motif_length_hint,
            scale_len,
        );

        let contour_a = self.resolve_contour(params.contour);
        let contour_b = self.resolve_contour(params.contour);
        let mut pool = [motif_a, motif_b];
        motif::apply_melodic_contour(
            &mut self.rng,
            &mut pool[0],
            contour_a,
            params.complexity as i32,
        );
        motif::apply_melodic_contour(
            &mut self.rng,
            &mut pool[1],
            contour_b,
            params.complexity as i32,
        );

        let phrase = phrase::build_phrase(&mut self.rng, params.phrase_form, bar_count, 2);

        let oct_min = params.octave_min.clamp(0, 9);
        let oct_max = params.octave_max.clamp(0, 9).max(oct_min);
        let degree_range = ((oct_max - oct_min + 1) * scale_len).max(scale_len);
        let degree_range_base = degree_range / 2;

        for placement in &phrase.placements {
            if placement.bar_index >= bar_count {
                continue;
            }
            let bar_start_row = start_row + placement.bar_index * rows_per_bar;
            if bar_start_row >= end_row {
                continue;
            }

            let chord = &chords[placement.bar_index as usize];
            let mut bar_motif = pool[placement.motif_index % 2].clone();
            harmony::apply_chord_tone_gravity(
                &mut self.rng,
                &mut bar_motif,
                chord,
                scale_len,
                rows_per_beat,
                params.chord_tone_emphasis,
            );

            writer::write_motif(
                grid,
                &bar_motif,
                placement,
                chord,
                &groove,
                &params,
                scale_len,
                intervals,
                bar_start_row,
                degree_range_base,
            );
        }

        if params.allow_effects {
            passes::apply_effects(&mut self.rng, grid, &params, start_row, end_row);
        }

        passes::apply_note_offs(grid, start_row, end_row, params.articulation_gap, params.role);

        if style.chromaticism > 0.0 {
            passes::apply_chromatic_passing(
                &mut self.rng,
                grid,
                &params,
                style.chromaticism,
                start_row,
                end_row,
            );
        }
    }

    fn resolve_contour(&mut self, contour: Contour) -> Contour {
        match contour {
            Contour::Random => {
                Contour::CONCRETE[self.rng.rand_int(0, Contour::CONCRETE.len() as i32 - 1) as usize]
            }
            concrete => concrete,
        }
    }
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self::new()
    }
}
