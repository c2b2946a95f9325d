//! Scale intervals, degree arithmetic, and note mapping.
//!
//! Notes live in a fixed 180-value space: value 0 is C five octaves below the
//! reference octave, value 179 is B nine octaves above it. Degrees are indices
//! into a scale's interval table; values outside `[0, len)` wrap with an
//! implicit octave shift so that degree `d + len` is always exactly one octave
//! above degree `d`.

use fmforge_spec::Scale;

/// Highest representable note value.
pub const NOTE_SPACE_MAX: i32 = 179;

const MINOR: [i32; 7] = [0, 2, 3, 5, 7, 8, 10];
const HARMONIC_MINOR: [i32; 7] = [0, 2, 3, 5, 7, 8, 11];
const MELODIC_MINOR: [i32; 7] = [0, 2, 3, 5, 7, 9, 11];
const PHRYGIAN: [i32; 7] = [0, 1, 3, 5, 7, 8, 10];
const PHRYGIAN_DOMINANT: [i32; 7] = [0, 1, 4, 5, 7, 8, 10];
const DORIAN: [i32; 7] = [0, 2, 3, 5, 7, 9, 10];
const MIXOLYDIAN: [i32; 7] = [0, 2, 4, 5, 7, 9, 10];
const MAJOR: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];
const PENTATONIC_MINOR: [i32; 5] = [0, 3, 5, 7, 10];
const PENTATONIC_MAJOR: [i32; 5] = [0, 2, 4, 7, 9];
const CHROMATIC: [i32; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
const LOCRIAN: [i32; 7] = [0, 1, 3, 5, 6, 8, 10];
const BLUES: [i32; 6] = [0, 3, 5, 6, 7, 10];

/// Semitone offsets from the root for a scale. The first element is always 0.
pub fn intervals(scale: Scale) -> &'static [i32] {
    match scale {
        Scale::Minor => &MINOR,
        Scale::HarmonicMinor => &HARMONIC_MINOR,
        Scale::MelodicMinor => &MELODIC_MINOR,
        Scale::Phrygian => &PHRYGIAN,
        Scale::PhrygianDominant => &PHRYGIAN_DOMINANT,
        Scale::Dorian => &DORIAN,
        Scale::Mixolydian => &MIXOLYDIAN,
        Scale::Major => &MAJOR,
        Scale::PentatonicMinor => &PENTATONIC_MINOR,
        Scale::PentatonicMajor => &PENTATONIC_MAJOR,
        Scale::Chromatic => &CHROMATIC,
        Scale::Locrian => &LOCRIAN,
        Scale::Blues => &BLUES,
    }
}

/// Resolve any integer degree to `(index within the scale, octave offset)`.
fn wrap_degree(degree: i32, scale_len: i32) -> (i32, i32) {
    let mut degree = degree;
    let mut octave_offset = 0;
    while degree < 0 {
        degree += scale_len;
        octave_offset -= 1;
    }
    octave_offset += degree / scale_len;
    (degree % scale_len, octave_offset)
}

/// Semitone offset from the root for any integer degree, octave-wrapped:
/// `degrees_to_semitones(d + len, s) == degrees_to_semitones(d, s) + 12`.
pub fn degrees_to_semitones(degree: i32, scale: Scale) -> i32 {
    let table = intervals(scale);
    let (idx, octave_offset) = wrap_degree(degree, table.len() as i32);
    table[idx as usize] + octave_offset * 12
}

/// Map a root pitch class (0-11), scale degree, and octave to a note value in
/// the 180-value space. Out-of-space results are clamped, never wrapped.
pub fn note_from_degree(root: i32, scale: Scale, degree: i32, octave: i32) -> i32 {
    let table = intervals(scale);
    let (idx, octave_offset) = wrap_degree(degree, table.len() as i32);

    // note 0 = C five octaves below octave 0
    let note = root + table[idx as usize] + (octave + octave_offset + 5) * 12;
    note.clamp(0, NOTE_SPACE_MAX)
}

/// Whether a scale is minor-flavored, for chord-progression table selection.
pub fn is_minor_family(scale: Scale) -> bool {
    matches!(
        scale,
        Scale::Minor
            | Scale::HarmonicMinor
            | Scale::MelodicMinor
            | Scale::Phrygian
            | Scale::PhrygianDominant
            | Scale::Dorian
            | Scale::Locrian
            | Scale::Blues
            | Scale::PentatonicMinor
    )
}

/// Approximate tracker tick rate in Hz for a BPM and speed (ticks per row).
/// Non-positive speed falls back to the conventional 6.
pub fn bpm_to_hz(bpm: i32, speed: i32) -> f32 {
    let speed = if speed <= 0 { 6 } else { speed };
    (bpm * speed) as f32 / 150.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_interval_is_root() {
        for scale in Scale::ALL {
            assert_eq!(intervals(scale)[0], 0, "{scale}");
        }
    }

    #[test]
    fn test_scale_lengths() {
        assert_eq!(intervals(Scale::Minor).len(), 7);
        assert_eq!(intervals(Scale::PentatonicMinor).len(), 5);
        assert_eq!(intervals(Scale::Blues).len(), 6);
        assert_eq!(intervals(Scale::Chromatic).len(), 12);
    }

    #[test]
    fn test_octave_wrap_law() {
        for scale in Scale::ALL {
            let len = intervals(scale).len() as i32;
            for degree in -30..30 {
                assert_eq!(
                    degrees_to_semitones(degree + len, scale),
                    degrees_to_semitones(degree, scale) + 12,
                    "scale {scale} degree {degree}"
                );
            }
        }
    }

    #[test]
    fn test_negative_degree_resolution() {
        // one step below the root of A minor is G, two semitones down
        assert_eq!(degrees_to_semitones(-1, Scale::Minor), -2);
        assert_eq!(degrees_to_semitones(-7, Scale::Minor), -12);
    }

    #[test]
    fn test_note_from_degree_reference_points() {
        // C at octave 0 sits at the bottom of the playable middle: (0+5)*12
        assert_eq!(note_from_degree(0, Scale::Major, 0, 0), 60);
        // A minor root at octave 3: 9 + (3+5)*12
        assert_eq!(note_from_degree(9, Scale::Minor, 0, 3), 105);
        // fifth degree of A minor (E), +7 semitones
        assert_eq!(note_from_degree(9, Scale::Minor, 4, 3), 112);
    }

    #[test]
    fn test_note_from_degree_clamps_not_wraps() {
        assert_eq!(note_from_degree(0, Scale::Major, 0, -20), 0);
        assert_eq!(note_from_degree(11, Scale::Major, 6, 20), NOTE_SPACE_MAX);
    }

    #[test]
    fn test_minor_family_classification() {
        assert!(is_minor_family(Scale::Minor));
        assert!(is_minor_family(Scale::Blues));
        assert!(!is_minor_family(Scale::Major));
        assert!(!is_minor_family(Scale::Mixolydian));
        assert!(!is_minor_family(Scale::Chromatic));
    }

    #[test]
    fn test_bpm_to_hz() {
        assert_eq!(bpm_to_hz(150, 6), 6.0);
        // non-positive speed falls back to 6
        assert_eq!(bpm_to_hz(150, 0), 6.0);
    }
}
