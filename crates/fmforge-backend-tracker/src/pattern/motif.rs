//! Role-specific one-bar motif generators and the melodic contour pass.
//!
//! A motif is an abstract bar of music: row offsets plus scale degrees
//! relative to an anchor the writer picks later. Each role has its own
//! generator, most of them switching shape on a complexity or density band.
//! All random draws go through the shared RNG in a fixed order, so a motif is
//! a pure function of the RNG state and its arguments.

use fmforge_spec::{Contour, PatchRole};

use crate::rng::GenRng;

/// Upper bound on notes per motif.
pub const MAX_MOTIF_NOTES: usize = 8;

/// One abstract note within a motif.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotifNote {
    /// Row offset from the start of the bar.
    pub row_offset: i32,
    /// Scale degree relative to the motif anchor.
    pub relative_degree: i32,
    /// Velocity offset added on top of the groove template.
    pub vel_offset: i32,
    /// Intended sustain in rows (0 = until the next event).
    pub duration: i32,
    /// Rests occupy a slot but never reach the grid.
    pub is_rest: bool,
}

/// An abstract bar of notes, reusable across bars via placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motif {
    pub notes: Vec<MotifNote>,
    /// Nominal length in rows.
    pub length_in_rows: i32,
}

impl Motif {
    pub fn new(length_in_rows: i32) -> Self {
        Self {
            notes: Vec::with_capacity(MAX_MOTIF_NOTES),
            length_in_rows,
        }
    }

    fn push(&mut self, row_offset: i32, relative_degree: i32, vel_offset: i32, duration: i32) {
        self.notes.push(MotifNote {
            row_offset,
            relative_degree,
            vel_offset,
            duration,
            is_rest: false,
        });
    }
}

/// Generate one bar of material for a role. A non-zero length hint overrides
/// the motif's nominal row length.
#[allow(clippy::too_many_arguments)]
pub fn generate_role_motif(
    rng: &mut GenRng,
    role: PatchRole,
    density: i32,
    complexity: i32,
    syncopation: f32,
    rows_per_bar: i32,
    motif_length_hint: u16,
    scale_len: i32,
) -> Motif {
    let mut m = match role {
        PatchRole::Bass => bass(rng, density, complexity, syncopation, rows_per_bar, scale_len),
        PatchRole::Lead => lead(rng, complexity, syncopation, rows_per_bar),
        PatchRole::Pad => pad(rng, complexity, rows_per_bar),
        PatchRole::Rhythm => rhythm(rng, density, syncopation, rows_per_bar),
        PatchRole::Sfx => sfx(rng, rows_per_bar),
        PatchRole::SlapBass => slap_bass(rng, density, syncopation, rows_per_bar, scale_len),
        PatchRole::DistGuitar => dist_guitar(rng, complexity, rows_per_bar),
    };
    if motif_length_hint > 0 {
        m.length_in_rows = motif_length_hint as i32;
    }
    m
}

fn bass(
    rng: &mut GenRng,
    density: i32,
    complexity: i32,
    syncopation: f32,
    rows_per_bar: i32,
    scale_len: i32,
) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let cf = complexity as f32 / 100.0;

    if cf < 0.34 {
        // root-fifth ostinato
        m.push(0, 0, 10, 0);

        let mut fifth_pos = rows_per_bar / 2;
        if syncopation > 0.3 && rng.rand_float() < syncopation {
            fifth_pos += if rng.rand_float() < 0.5 { -1 } else { 1 };
        }
        m.push(fifth_pos, 4, 0, 0);

        if syncopation > 0.5 && rng.rand_float() < 0.5 {
            m.push(rows_per_bar * 3 / 4, scale_len, -5, 0);
        }
    } else if cf < 0.67 {
        // walking bass
        let beat_step = rows_per_bar / 4;
        m.push(0, 0, 8, 0);
        m.push(beat_step, 2, 0, 0);
        m.push(beat_step * 2, 4, 0, 0);
        let approach = if rng.rand_float() < 0.5 { -1 } else { scale_len - 1 };
        m.push(beat_step * 3, approach, -3, 0);
    } else {
        // syncopated funk
        let candidates: Vec<i32> = [0, 3, 6, 8, 11, 14]
            .iter()
            .map(|c| c * rows_per_bar / 16)
            .collect();
        let beat = (rows_per_bar / 4).max(1);
        let df = density as f32 / 100.0;
        for (c, &pos) in candidates.iter().enumerate() {
            if m.notes.len() >= MAX_MOTIF_NOTES {
                break;
            }
            if rng.rand_float() < df {
                let mut degree = if c % 2 == 0 { 0 } else { 4 };
                if rng.rand_float() < 0.2 {
                    degree -= scale_len;
                }
                let vel = if pos % beat != 0 { -15 } else { 5 };
                m.push(pos, degree, vel, 0);
            }
        }
        if m.notes.len() < 2 {
            m.notes.clear();
            m.push(0, 0, 8, 0);
            m.push(rows_per_bar / 2, 4, 0, 0);
        }
    }
    m
}

fn lead(rng: &mut GenRng, complexity: i32, syncopation: f32, rows_per_bar: i32) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let cf = complexity as f32 / 100.0;

    if cf < 0.34 {
        // stepwise melody
        let beat_step = (rows_per_bar / 4).max(1);
        let note_count = (3 + rng.rand_int(0, 2)) as usize;
        let beat_positions = [
            0,
            beat_step,
            beat_step * 2,
            beat_step * 3,
            beat_step * 3 + beat_step / 2,
        ];
        let mut deg = 0;
        for i in 0..note_count {
            let mut row = beat_positions[i % 5];
            if syncopation > 0.2 && rng.rand_float() < syncopation && i > 0 {
                row += if rng.rand_float() < 0.5 { -1 } else { 1 };
                row = row.clamp(0, rows_per_bar - 1);
            }
            if i == note_count / 2 {
                let leap = rng.rand_int(1, 2);
                deg += leap * if rng.rand_float() < 0.5 { 1 } else { -1 };
            } else {
                deg += if rng.rand_float() < 0.5 { 1 } else { -1 };
            }
            m.push(row, deg, 0, 0);
        }
    } else if cf < 0.67 {
        // sequential motif: a 3-note kernel stated twice, the repeat up a third
        let kernel = [0, rng.rand_int(1, 2), rng.rand_int(-1, 1)];
        let step = (rows_per_bar / 8).max(1);
        for (i, &k) in kernel.iter().enumerate() {
            m.push(i as i32 * step, k, if i == 0 { 5 } else { 0 }, 0);
        }
        let half_bar = rows_per_bar / 2;
        for (i, &k) in kernel.iter().enumerate() {
            m.push(half_bar + i as i32 * step, k + 2, if i == 0 { 5 } else { 0 }, 0);
        }
    } else {
        // arpeggiated run
        let note_count = ((5 + rng.rand_int(0, 3)) as usize).min(MAX_MOTIF_NOTES);
        let start = if rng.rand_float() < 0.5 { 0 } else { rows_per_bar / 2 };
        for i in 0..note_count {
            let row = (start + i as i32).min(rows_per_bar - 1);
            let vel = -5 + if i == 0 { 10 } else { 0 };
            m.push(row, i as i32, vel, 0);
        }
    }
    m
}

fn pad(rng: &mut GenRng, complexity: i32, rows_per_bar: i32) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let cf = complexity as f32 / 100.0;

    m.push(0, 0, 5, 0);

    if cf > 0.3 && rng.rand_float() < cf {
        m.push(rows_per_bar / 2, 2, 0, 0);
    }
    if cf > 0.6 && rng.rand_float() < cf * 0.5 && m.notes.len() < MAX_MOTIF_NOTES {
        m.push(rows_per_bar / 4, 4, -5, 0);
    }
    m
}

fn rhythm(rng: &mut GenRng, density: i32, syncopation: f32, rows_per_bar: i32) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let df = density as f32 / 100.0;

    let subdivision = if df < 0.33 {
        4
    } else if df < 0.66 {
        8
    } else {
        16
    };
    let step = (rows_per_bar / subdivision).max(1);
    let beat = (rows_per_bar / 4).max(1);

    for s in 0..subdivision {
        if m.notes.len() >= MAX_MOTIF_NOTES {
            break;
        }
        let pos = s * step;
        // syncopation thins out on-beat hits past the downbeat
        if syncopation > 0.3 && rng.rand_float() < syncopation * 0.3 && pos % beat == 0 && pos != 0
        {
            continue;
        }
        let vel = if pos == 0 {
            15
        } else if pos == rows_per_bar / 2 {
            8
        } else if pos % beat == 0 {
            3
        } else {
            -10
        };
        m.push(pos, 0, vel, if step > 1 { step - 1 } else { 1 });
    }
    m
}

fn sfx(rng: &mut GenRng, rows_per_bar: i32) -> Motif {
    let mut m = Motif::new(rows_per_bar);

    let burst_start = if rng.rand_float() < 0.5 {
        0
    } else {
        (rows_per_bar - 4).max(0)
    };
    let note_count = (rng.rand_int(2, 4) as usize).min(MAX_MOTIF_NOTES);
    for i in 0..note_count {
        let row = (burst_start + i as i32).min(rows_per_bar - 1);
        let degree = rng.rand_int(-3, 3);
        m.push(row, degree, 10 - i as i32 * 5, 1);
    }
    m
}

fn slap_bass(
    rng: &mut GenRng,
    density: i32,
    syncopation: f32,
    rows_per_bar: i32,
    scale_len: i32,
) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let df = density as f32 / 100.0;

    // thumb hit on the downbeat
    m.push(0, 0, 15, 2);

    let ghost_positions = [3, 5, 7, 11, 13, 15];
    for &g in &ghost_positions {
        if m.notes.len() >= 7 {
            break;
        }
        if rng.rand_float() < df * 0.7 {
            let mut pos = g * rows_per_bar / 16;
            if syncopation > 0.3 {
                pos += if rng.rand_float() < 0.5 { -1 } else { 0 };
            }
            pos = pos.clamp(1, rows_per_bar - 1);
            m.push(pos, 0, -20, 1);
        }
    }

    // octave pop
    if rng.rand_float() < 0.7 && m.notes.len() < MAX_MOTIF_NOTES {
        let pop_pos = if rng.rand_float() < 0.5 {
            rows_per_bar * 3 / 8
        } else {
            rows_per_bar * 5 / 8
        };
        m.push(pop_pos, scale_len, 5, 2);
    }
    m
}

fn dist_guitar(rng: &mut GenRng, complexity: i32, rows_per_bar: i32) -> Motif {
    let mut m = Motif::new(rows_per_bar);
    let cf = complexity as f32 / 100.0;

    if cf < 0.5 {
        // eighth-note chug on the root
        let step = (rows_per_bar / 8).max(1);
        let half = (rows_per_bar / 2).max(1);
        let mut r = 0;
        while r < rows_per_bar && m.notes.len() < MAX_MOTIF_NOTES {
            let vel = if r % half == 0 { 10 } else { -5 };
            m.push(r, 0, vel, 1);
            r += step;
        }
    } else {
        // gated riff alternating root and fifth
        let pattern = [0, 3, 6, 8, 11];
        let degrees = [0, 4, 0, 4, 0];
        for i in 0..5 {
            if m.notes.len() >= MAX_MOTIF_NOTES {
                break;
            }
            if rng.rand_float() < 0.7 {
                let vel = if pattern[i] % 4 != 0 { 5 } else { -3 };
                m.push(pattern[i] * rows_per_bar / 16, degrees[i], vel, 1);
            }
        }
        if m.notes.len() < 2 {
            m.notes.clear();
            m.push(0, 0, 10, 0);
            m.push(rows_per_bar / 2, 0, 5, 0);
        }
    }
    m
}

/// Bend a motif's degrees along a contour shape. Amplitude scales with
/// complexity; position runs 0..1 over the note slots, rests included.
/// Motifs with fewer than two notes are left untouched.
pub fn apply_melodic_contour(rng: &mut GenRng, motif: &mut Motif, contour: Contour, complexity: i32) {
    if motif.notes.len() < 2 {
        return;
    }
    let cf = complexity as f32 / 100.0;
    let amplitude = 2 + (cf * 5.0) as i32;
    let last = (motif.notes.len() - 1) as f32;

    for (i, note) in motif.notes.iter_mut().enumerate() {
        if note.is_rest {
            continue;
        }
        let position = i as f32 / last;
        let offset = match contour {
            Contour::Arch => ((std::f32::consts::PI * position).sin() * amplitude as f32) as i32,
            Contour::InvArch => {
                -(((std::f32::consts::PI * position).sin() * amplitude as f32) as i32)
            }
            Contour::Ascending => (position * amplitude as f32) as i32,
            Contour::Descending => ((1.0 - position) * amplitude as f32) as i32,
            Contour::Flat => rng.rand_int(-1, 1),
            Contour::Random => 0,
        };
        note.relative_degree += offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(
        rng: &mut GenRng,
        role: PatchRole,
        density: i32,
        complexity: i32,
        syncopation: f32,
    ) -> Motif {
        generate_role_motif(rng, role, density, complexity, syncopation, 16, 0, 7)
    }

    #[test]
    fn test_motifs_stay_within_the_bar() {
        let mut rng = GenRng::new();
        rng.seed(17);
        for role in PatchRole::ALL {
            for complexity in [10, 50, 90] {
                for _ in 0..20 {
                    let m = gen(&mut rng, role, 60, complexity, 0.5);
                    assert!(!m.notes.is_empty(), "{role:?} c{complexity}");
                    assert!(m.notes.len() <= MAX_MOTIF_NOTES);
                    for n in &m.notes {
                        assert!(
                            (0..16).contains(&n.row_offset),
                            "{role:?} c{complexity} row {}",
                            n.row_offset
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_bass_ostinato_shape_at_low_complexity() {
        let mut rng = GenRng::new();
        rng.seed(1);
        // no syncopation: positions are fixed
        let m = gen(&mut rng, PatchRole::Bass, 60, 20, 0.0);
        assert_eq!(m.notes.len(), 2);
        assert_eq!(m.notes[0].row_offset, 0);
        assert_eq!(m.notes[0].relative_degree, 0);
        assert_eq!(m.notes[0].vel_offset, 10);
        assert_eq!(m.notes[1].row_offset, 8);
        assert_eq!(m.notes[1].relative_degree, 4);
    }

    #[test]
    fn test_walking_bass_hits_every_beat() {
        let mut rng = GenRng::new();
        rng.seed(2);
        let m = gen(&mut rng, PatchRole::Bass, 60, 50, 0.0);
        assert_eq!(m.notes.len(), 4);
        let rows: Vec<i32> = m.notes.iter().map(|n| n.row_offset).collect();
        assert_eq!(rows, vec![0, 4, 8, 12]);
        assert!(m.notes[3].relative_degree == -1 || m.notes[3].relative_degree == 6);
    }

    #[test]
    fn test_funk_bass_has_at_least_two_notes() {
        let mut rng = GenRng::new();
        rng.seed(3);
        // density 0 keeps all gates shut, forcing the fallback
        let m = gen(&mut rng, PatchRole::Bass, 0, 80, 0.5);
        assert_eq!(m.notes.len(), 2);
        assert_eq!(m.notes[0].row_offset, 0);
        assert_eq!(m.notes[1].row_offset, 8);
    }

    #[test]
    fn test_pad_is_sparse_at_low_complexity() {
        let mut rng = GenRng::new();
        rng.seed(4);
        let m = gen(&mut rng, PatchRole::Pad, 60, 20, 0.3);
        assert_eq!(m.notes.len(), 1);
        assert_eq!(m.notes[0].row_offset, 0);
        assert_eq!(m.notes[0].relative_degree, 0);
    }

    #[test]
    fn test_rhythm_subdivision_tracks_density() {
        let mut rng = GenRng::new();
        rng.seed(5);
        // no syncopation drops, so count equals the subdivision (capped)
        let sparse = gen(&mut rng, PatchRole::Rhythm, 20, 50, 0.0);
        assert_eq!(sparse.notes.len(), 4);
        let medium = gen(&mut rng, PatchRole::Rhythm, 50, 50, 0.0);
        assert_eq!(medium.notes.len(), 8);
        let busy = gen(&mut rng, PatchRole::Rhythm, 90, 50, 0.0);
        assert_eq!(busy.notes.len(), MAX_MOTIF_NOTES);
    }

    #[test]
    fn test_rhythm_accents_the_downbeat() {
        let mut rng = GenRng::new();
        rng.seed(6);
        let m = gen(&mut rng, PatchRole::Rhythm, 50, 50, 0.0);
        assert_eq!(m.notes[0].row_offset, 0);
        assert_eq!(m.notes[0].vel_offset, 15);
    }

    #[test]
    fn test_sfx_burst_is_contiguous_and_fading() {
        let mut rng = GenRng::new();
        rng.seed(7);
        for _ in 0..20 {
            let m = gen(&mut rng, PatchRole::Sfx, 60, 50, 0.0);
            assert!((2..=4).contains(&m.notes.len()));
            for (i, n) in m.notes.iter().enumerate() {
                assert!((-3..=3).contains(&n.relative_degree));
                assert_eq!(n.vel_offset, 10 - i as i32 * 5);
            }
        }
    }

    #[test]
    fn test_slap_bass_downbeat_thumb() {
        let mut rng = GenRng::new();
        rng.seed(8);
        let m = gen(&mut rng, PatchRole::SlapBass, 70, 50, 0.5);
        assert_eq!(m.notes[0].row_offset, 0);
        assert_eq!(m.notes[0].vel_offset, 15);
        assert_eq!(m.notes[0].duration, 2);
        // ghosts never land back on the downbeat
        for n in &m.notes[1..] {
            assert!(n.row_offset >= 1);
        }
    }

    #[test]
    fn test_dist_guitar_chug_at_low_complexity() {
        let mut rng = GenRng::new();
        rng.seed(9);
        let m = gen(&mut rng, PatchRole::DistGuitar, 60, 30, 0.0);
        assert_eq!(m.notes.len(), 8);
        for (i, n) in m.notes.iter().enumerate() {
            assert_eq!(n.row_offset, i as i32 * 2);
            assert_eq!(n.relative_degree, 0);
        }
        assert_eq!(m.notes[0].vel_offset, 10);
        assert_eq!(m.notes[1].vel_offset, -5);
    }

    #[test]
    fn test_length_hint_overrides_nominal_length() {
        let mut rng = GenRng::new();
        rng.seed(10);
        let m = generate_role_motif(&mut rng, PatchRole::Lead, 60, 50, 0.0, 16, 32, 7);
        assert_eq!(m.length_in_rows, 32);
    }

    #[test]
    fn test_contour_ascending_raises_later_notes() {
        let mut rng = GenRng::new();
        let mut motif = Motif::new(16);
        for i in 0..4 {
            motif.push(i * 4, 0, 0, 0);
        }
        apply_melodic_contour(&mut rng, &mut motif, Contour::Ascending, 100);
        let degrees: Vec<i32> = motif.notes.iter().map(|n| n.relative_degree).collect();
        // amplitude 7: 0, 2, 4, 7
        assert_eq!(degrees, vec![0, 2, 4, 7]);
    }

    #[test]
    fn test_contour_arch_peaks_in_the_middle() {
        let mut rng = GenRng::new();
        let mut motif = Motif::new(16);
        for i in 0..5 {
            motif.push(i * 3, 0, 0, 0);
        }
        apply_melodic_contour(&mut rng, &mut motif, Contour::Arch, 50);
        let degrees: Vec<i32> = motif.notes.iter().map(|n| n.relative_degree).collect();
        assert_eq!(degrees[0], 0);
        assert_eq!(degrees[4], 0);
        assert!(degrees[2] >= degrees[1]);
        assert!(degrees[2] > degrees[0]);
    }

    #[test]
    fn test_contour_skips_single_note_motifs() {
        let mut rng = GenRng::new();
        let mut motif = Motif::new(16);
        motif.push(0, 3, 0, 0);
        apply_melodic_contour(&mut rng, &mut motif, Contour::Descending, 100);
        assert_eq!(motif.notes[0].relative_degree, 3);
    }

    #[test]
    fn test_flat_contour_jitters_by_at_most_one() {
        let mut rng = GenRng::new();
        rng.seed(12);
        let mut motif = Motif::new(16);
        for i in 0..6 {
            motif.push(i * 2, 0, 0, 0);
        }
        apply_melodic_contour(&mut rng, &mut motif, Contour::Flat, 100);
        for n in &motif.notes {
            assert!((-1..=1).contains(&n.relative_degree));
        }
    }
}
