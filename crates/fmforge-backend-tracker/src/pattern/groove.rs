//! Groove velocity templates.
//!
//! Each feel is a fixed 16-step accent contour indexed by a note's row offset
//! within its bar modulo 16. Step 0 is always the loudest so downbeats read
//! clearly even after per-note offsets.

use fmforge_spec::GrooveFeel;

/// A 16-step velocity accent contour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrooveTemplate {
    pub velocity: [i16; 16],
}

impl GrooveTemplate {
    /// The fixed template for a groove feel.
    pub fn for_feel(feel: GrooveFeel) -> Self {
        let velocity = match feel {
            GrooveFeel::Straight => [
                0x7F, 0x50, 0x58, 0x48, 0x6C, 0x50, 0x58, 0x48, 0x74, 0x50, 0x58, 0x48, 0x6C,
                0x50, 0x58, 0x48,
            ],
            GrooveFeel::Shuffle => [
                0x7F, 0x40, 0x68, 0x38, 0x6C, 0x40, 0x68, 0x38, 0x74, 0x40, 0x68, 0x38, 0x6C,
                0x40, 0x68, 0x38,
            ],
            GrooveFeel::Funk => [
                0x7F, 0x30, 0x58, 0x30, 0x60, 0x30, 0x6A, 0x30, 0x70, 0x30, 0x58, 0x30, 0x60,
                0x30, 0x6A, 0x30,
            ],
            GrooveFeel::Driving => [
                0x7F, 0x55, 0x60, 0x55, 0x70, 0x55, 0x60, 0x55, 0x7A, 0x55, 0x60, 0x55, 0x70,
                0x55, 0x60, 0x55,
            ],
            GrooveFeel::HalfTime => [
                0x7F, 0x48, 0x50, 0x48, 0x58, 0x48, 0x50, 0x48, 0x78, 0x48, 0x50, 0x48, 0x58,
                0x48, 0x50, 0x48,
            ],
        };
        Self { velocity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downbeat_is_loudest() {
        for feel in GrooveFeel::ALL {
            let g = GrooveTemplate::for_feel(feel);
            assert_eq!(g.velocity[0], 0x7F, "{feel:?}");
            for step in 1..16 {
                assert!(g.velocity[step] < 0x7F, "{feel:?} step {step}");
            }
        }
    }

    #[test]
    fn test_velocities_in_volume_range() {
        use crate::grid::{VOLUME_MAX, VOLUME_MIN};
        for feel in GrooveFeel::ALL {
            let g = GrooveTemplate::for_feel(feel);
            for v in g.velocity {
                assert!((VOLUME_MIN..=VOLUME_MAX).contains(&v));
            }
        }
    }

    #[test]
    fn test_halftime_accents_beat_three() {
        let g = GrooveTemplate::for_feel(GrooveFeel::HalfTime);
        // beat 3 (step 8) carries the secondary accent
        assert!(g.velocity[8] > g.velocity[4]);
        assert!(g.velocity[8] > g.velocity[12]);
    }
}
