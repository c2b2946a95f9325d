//! Builtin style preset tables.
//!
//! Each preset is hand-authored after a recognizable Mega Drive-era FM sound.
//! The numbers are tuning data, not derived values; adjust them here rather
//! than in the generators.

use crate::constraint::{OperatorConstraints, RoleConstraints};
use crate::music::{GrooveFeel, PhraseForm, Scale};
use crate::role::PatchRole;
use crate::style::StylePreset;

/// Constraint defaults for a carrier operator (audible output).
fn carrier_defaults(op: &mut OperatorConstraints) {
    op.tl_min = 0;
    op.tl_max = 20; // carriers should be loud
    op.ar_min = 25;
    op.ar_max = 31; // fast attack
    op.dr_min = 4;
    op.dr_max = 15;
    op.sl_min = 2;
    op.sl_max = 12;
    op.rr_min = 3;
    op.rr_max = 10;
    op.mult_min = 0;
    op.mult_max = 4;
    op.dt_min = 0;
    op.dt_max = 3;
    op.d2r_min = 0;
    op.d2r_max = 8;
    op.rs_min = 0;
    op.rs_max = 2;
}

/// Constraint defaults for a modulator operator.
fn modulator_defaults(op: &mut OperatorConstraints) {
    op.tl_min = 15;
    op.tl_max = 90; // modulators need headroom
    op.ar_min = 20;
    op.ar_max = 31;
    op.dr_min = 3;
    op.dr_max = 20;
    op.sl_min = 0;
    op.sl_max = 15;
    op.rr_min = 1;
    op.rr_max = 12;
    op.mult_min = 1;
    op.mult_max = 10;
    op.dt_min = 0;
    op.dt_max = 7;
    op.d2r_min = 0;
    op.d2r_max = 15;
    op.rs_min = 0;
    op.rs_max = 3;
}

fn role_slot(preset: &mut StylePreset, role: PatchRole) -> &mut RoleConstraints {
    &mut preset.roles[role.index()]
}

/// Thunder Force III/IV style: aggressive leads, driving bass, 150+ BPM,
/// minor/harmonic minor.
pub(super) fn thunder_force() -> StylePreset {
    let mut p = StylePreset {
        name: "Thunder Force".to_string(),
        tempo_min: 148,
        tempo_max: 180,
        preferred_scales: vec![
            Scale::Minor,
            Scale::HarmonicMinor,
            Scale::PhrygianDominant,
        ],
        rhythm_density: 0.8,
        syncopation: 0.4,
        chromaticism: 0.35,
        default_groove: GrooveFeel::Driving,
        default_phrase_form: PhraseForm::Abab,
        chord_tone_emphasis: 0.6,
        ..Default::default()
    };
    p.role_motif_length[PatchRole::Lead.index()] = 16;
    p.role_motif_length[PatchRole::Bass.index()] = 16;

    {
        let r = role_slot(&mut p, PatchRole::Lead);
        r.algorithms = vec![0, 1, 2];
        r.feedback_min = 4;
        r.feedback_max = 7;
        // OP1: main modulator (high feedback, creates grit)
        r.ops[0].tl_min = 30;
        r.ops[0].tl_max = 60;
        r.ops[0].ar_min = 28;
        r.ops[0].ar_max = 31;
        r.ops[0].dr_min = 5;
        r.ops[0].dr_max = 12;
        r.ops[0].sl_min = 3;
        r.ops[0].sl_max = 10;
        r.ops[0].rr_min = 3;
        r.ops[0].rr_max = 8;
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 3;
        r.ops[0].dt_min = 3;
        r.ops[0].dt_max = 6;
        // OP2: secondary modulator
        r.ops[1].tl_min = 35;
        r.ops[1].tl_max = 70;
        r.ops[1].ar_min = 25;
        r.ops[1].ar_max = 31;
        r.ops[1].dr_min = 5;
        r.ops[1].dr_max = 15;
        r.ops[1].sl_min = 2;
        r.ops[1].sl_max = 12;
        r.ops[1].rr_min = 2;
        r.ops[1].rr_max = 8;
        r.ops[1].mult_min = 2;
        r.ops[1].mult_max = 7;
        r.ops[1].dt_min = 0;
        r.ops[1].dt_max = 5;
        // OP3: modulator/carrier depending on algo
        modulator_defaults(&mut r.ops[2]);
        r.ops[2].mult_min = 1;
        r.ops[2].mult_max = 4;
        // OP4: main carrier
        carrier_defaults(&mut r.ops[3]);
    }

    {
        let r = role_slot(&mut p, PatchRole::Bass);
        r.algorithms = vec![0, 4];
        r.feedback_min = 3;
        r.feedback_max = 6;
        // low MUL ratios across the board
        for op in &mut r.ops {
            op.mult_min = 0;
            op.mult_max = 3;
        }
        r.ops[0].tl_min = 25;
        r.ops[0].tl_max = 55;
        r.ops[0].ar_min = 28;
        r.ops[0].ar_max = 31;
        r.ops[0].dr_min = 8;
        r.ops[0].dr_max = 18;
        r.ops[0].sl_min = 2;
        r.ops[0].sl_max = 8;
        r.ops[0].rr_min = 5;
        r.ops[0].rr_max = 10;
        // carrier: punchy
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 28;
        r.ops[3].ar_max = 31;
        r.ops[3].dr_min = 6;
        r.ops[3].dr_max = 14;
    }

    {
        let r = role_slot(&mut p, PatchRole::Pad);
        r.algorithms = vec![2, 4, 5];
        r.feedback_min = 0;
        r.feedback_max = 3;
        for op in &mut r.ops {
            op.ar_min = 8;
            op.ar_max = 22;
            op.dr_min = 2;
            op.dr_max = 10;
            op.sl_min = 5;
            op.sl_max = 14;
            op.rr_min = 4;
            op.rr_max = 12;
            op.mult_min = 0;
            op.mult_max = 4;
        }
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 10;
        r.ops[3].ar_max = 20;
    }

    {
        let r = role_slot(&mut p, PatchRole::Rhythm);
        r.algorithms = vec![5, 6, 7];
        r.feedback_min = 2;
        r.feedback_max = 6;
        for op in &mut r.ops {
            op.ar_min = 28;
            op.ar_max = 31;
            op.dr_min = 12;
            op.dr_max = 25;
            op.sl_min = 0;
            op.sl_max = 5;
            op.rr_min = 8;
            op.rr_max = 15;
            op.mult_min = 1;
            op.mult_max = 14;
            op.dt_min = 0;
            op.dt_max = 7;
        }
    }

    {
        let r = role_slot(&mut p, PatchRole::Sfx);
        r.algorithms = vec![0, 1, 2, 3, 4, 5, 6, 7];
        r.feedback_min = 3;
        r.feedback_max = 7;
        for op in &mut r.ops {
            op.tl_min = 0;
            op.tl_max = 127;
            op.ar_min = 20;
            op.ar_max = 31;
            op.dr_min = 5;
            op.dr_max = 31;
            op.mult_min = 0;
            op.mult_max = 15;
            op.dt_min = 0;
            op.dt_max = 7;
        }
    }

    {
        let r = role_slot(&mut p, PatchRole::SlapBass);
        r.algorithms = vec![0, 4];
        r.feedback_min = 4;
        r.feedback_max = 7;
        // OP1: high-mul modulator with fast decay = the "pop"
        r.ops[0].tl_min = 20;
        r.ops[0].tl_max = 50;
        r.ops[0].ar_min = 30;
        r.ops[0].ar_max = 31;
        r.ops[0].dr_min = 15;
        r.ops[0].dr_max = 25;
        r.ops[0].sl_min = 0;
        r.ops[0].sl_max = 3;
        r.ops[0].rr_min = 8;
        r.ops[0].rr_max = 15;
        r.ops[0].mult_min = 4;
        r.ops[0].mult_max = 8;
        // OP2: supporting mod
        modulator_defaults(&mut r.ops[1]);
        r.ops[1].mult_min = 1;
        r.ops[1].mult_max = 3;
        // OP3
        modulator_defaults(&mut r.ops[2]);
        r.ops[2].mult_min = 0;
        r.ops[2].mult_max = 2;
        // OP4: carrier, punchy
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 30;
        r.ops[3].ar_max = 31;
        r.ops[3].dr_min = 10;
        r.ops[3].dr_max = 18;
        r.ops[3].mult_min = 0;
        r.ops[3].mult_max = 2;
    }

    {
        let r = role_slot(&mut p, PatchRole::DistGuitar);
        r.algorithms = vec![0, 1];
        r.feedback_min = 5;
        r.feedback_max = 7;
        r.ops[0].tl_min = 25;
        r.ops[0].tl_max = 50;
        r.ops[0].ar_min = 28;
        r.ops[0].ar_max = 31;
        r.ops[0].dr_min = 6;
        r.ops[0].dr_max = 12;
        r.ops[0].sl_min = 4;
        r.ops[0].sl_max = 10;
        r.ops[0].rr_min = 3;
        r.ops[0].rr_max = 8;
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 2;
        r.ops[0].dt_min = 3;
        r.ops[0].dt_max = 6;
        r.ops[1].tl_min = 30;
        r.ops[1].tl_max = 65;
        r.ops[1].ar_min = 26;
        r.ops[1].ar_max = 31;
        r.ops[1].dr_min = 5;
        r.ops[1].dr_max = 14;
        r.ops[1].mult_min = 1;
        r.ops[1].mult_max = 5;
        modulator_defaults(&mut r.ops[2]);
        carrier_defaults(&mut r.ops[3]);
    }

    p
}

/// Streets of Rage style: funky bass, groovier rhythms, soul/jazz scales,
/// moderate tempo.
pub(super) fn streets_of_rage() -> StylePreset {
    let mut p = StylePreset {
        name: "Streets of Rage".to_string(),
        tempo_min: 100,
        tempo_max: 130,
        preferred_scales: vec![
            Scale::Dorian,
            Scale::Minor,
            Scale::Blues,
            Scale::PentatonicMinor,
        ],
        rhythm_density: 0.6,
        syncopation: 0.65,
        chromaticism: 0.2,
        default_groove: GrooveFeel::Funk,
        default_phrase_form: PhraseForm::Aaba,
        chord_tone_emphasis: 0.75,
        ..Default::default()
    };
    p.role_motif_length[PatchRole::Bass.index()] = 16;
    p.role_motif_length[PatchRole::SlapBass.index()] = 16;

    // Lead: smoother, jazzy FM
    {
        let r = role_slot(&mut p, PatchRole::Lead);
        r.algorithms = vec![2, 4, 5];
        r.feedback_min = 2;
        r.feedback_max = 5;
        modulator_defaults(&mut r.ops[0]);
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 4;
        modulator_defaults(&mut r.ops[1]);
        modulator_defaults(&mut r.ops[2]);
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 20;
        r.ops[3].ar_max = 28;
    }

    // Bass: funky, round
    {
        let r = role_slot(&mut p, PatchRole::Bass);
        r.algorithms = vec![0, 4];
        r.feedback_min = 2;
        r.feedback_max = 5;
        for op in &mut r.ops {
            op.mult_min = 0;
            op.mult_max = 3;
        }
        modulator_defaults(&mut r.ops[0]);
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 26;
        r.ops[3].ar_max = 31;
        r.ops[3].dr_min = 8;
        r.ops[3].dr_max = 16;
    }

    {
        let r = role_slot(&mut p, PatchRole::Pad);
        r.algorithms = vec![4, 5, 7];
        r.feedback_min = 0;
        r.feedback_max = 2;
        for op in &mut r.ops {
            op.ar_min = 10;
            op.ar_max = 20;
            op.sl_min = 6;
            op.sl_max = 14;
        }
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 10;
        r.ops[3].ar_max = 18;
    }

    {
        let r = role_slot(&mut p, PatchRole::Rhythm);
        r.algorithms = vec![5, 6, 7];
        r.feedback_min = 1;
        r.feedback_max = 4;
        for op in &mut r.ops {
            op.ar_min = 28;
            op.ar_max = 31;
            op.dr_min = 10;
            op.dr_max = 22;
            op.sl_min = 0;
            op.sl_max = 4;
            op.rr_min = 7;
            op.rr_max = 14;
        }
    }

    // SFX, slap bass, dist guitar: unconstrained defaults
    p
}

/// Sonic style: bright FM, major/mixolydian, bouncy rhythms.
pub(super) fn sonic() -> StylePreset {
    let mut p = StylePreset {
        name: "Sonic".to_string(),
        tempo_min: 120,
        tempo_max: 160,
        preferred_scales: vec![Scale::Major, Scale::Mixolydian, Scale::PentatonicMajor],
        rhythm_density: 0.65,
        syncopation: 0.5,
        chromaticism: 0.15,
        default_groove: GrooveFeel::Straight,
        default_phrase_form: PhraseForm::Abab,
        chord_tone_emphasis: 0.8,
        ..Default::default()
    };
    p.role_motif_length[PatchRole::Lead.index()] = 16;

    // Lead: bright, bouncy
    {
        let r = role_slot(&mut p, PatchRole::Lead);
        r.algorithms = vec![2, 3, 4];
        r.feedback_min = 2;
        r.feedback_max = 5;
        modulator_defaults(&mut r.ops[0]);
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 5;
        modulator_defaults(&mut r.ops[1]);
        r.ops[1].mult_min = 1;
        r.ops[1].mult_max = 4;
        modulator_defaults(&mut r.ops[2]);
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].ar_min = 26;
        r.ops[3].ar_max = 31;
    }

    // Bass: clean, round
    {
        let r = role_slot(&mut p, PatchRole::Bass);
        r.algorithms = vec![0, 4];
        r.feedback_min = 1;
        r.feedback_max = 4;
        for op in &mut r.ops {
            op.mult_min = 0;
            op.mult_max = 3;
        }
        carrier_defaults(&mut r.ops[3]);
    }

    p
}

/// M.U.S.H.A. style: dark, atmospheric, phrygian/locrian, complex operator
/// routing.
pub(super) fn musha() -> StylePreset {
    let mut p = StylePreset {
        name: "M.U.S.H.A.".to_string(),
        tempo_min: 130,
        tempo_max: 165,
        preferred_scales: vec![
            Scale::Phrygian,
            Scale::Locrian,
            Scale::HarmonicMinor,
            Scale::PhrygianDominant,
        ],
        rhythm_density: 0.7,
        syncopation: 0.35,
        chromaticism: 0.45,
        default_groove: GrooveFeel::Driving,
        default_phrase_form: PhraseForm::Aaab,
        chord_tone_emphasis: 0.5,
        ..Default::default()
    };
    p.role_motif_length[PatchRole::Lead.index()] = 16;

    // Lead: dark, complex
    {
        let r = role_slot(&mut p, PatchRole::Lead);
        r.algorithms = vec![0, 1, 3];
        r.feedback_min = 3;
        r.feedback_max = 7;
        modulator_defaults(&mut r.ops[0]);
        r.ops[0].dt_min = 3;
        r.ops[0].dt_max = 7;
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 6;
        modulator_defaults(&mut r.ops[1]);
        r.ops[1].mult_min = 2;
        r.ops[1].mult_max = 8;
        modulator_defaults(&mut r.ops[2]);
        carrier_defaults(&mut r.ops[3]);
    }

    // Bass: heavy
    {
        let r = role_slot(&mut p, PatchRole::Bass);
        r.algorithms = vec![0, 1];
        r.feedback_min = 4;
        r.feedback_max = 7;
        modulator_defaults(&mut r.ops[0]);
        r.ops[0].mult_min = 1;
        r.ops[0].mult_max = 3;
        modulator_defaults(&mut r.ops[1]);
        modulator_defaults(&mut r.ops[2]);
        carrier_defaults(&mut r.ops[3]);
        r.ops[3].mult_min = 0;
        r.ops[3].mult_max = 2;
    }

    p
}

/// Custom preset: wide-open defaults for user editing.
pub(super) fn custom() -> StylePreset {
    let mut p = StylePreset {
        name: "Custom".to_string(),
        tempo_min: 80,
        tempo_max: 220,
        preferred_scales: vec![Scale::Minor, Scale::Major, Scale::Chromatic],
        rhythm_density: 0.5,
        syncopation: 0.3,
        chromaticism: 0.2,
        default_groove: GrooveFeel::Straight,
        default_phrase_form: PhraseForm::Random,
        chord_tone_emphasis: 0.7,
        ..Default::default()
    };

    for r in &mut p.roles {
        r.algorithms = vec![0, 1, 2, 3, 4, 5, 6, 7];
        r.feedback_min = 0;
        r.feedback_max = 7;
        // operators keep default full-range constraints
    }

    p
}
