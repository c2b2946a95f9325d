//! Constraint-bound FM patch generation.
//!
//! Draws a complete 4-operator patch from a role's constraint ranges, or
//! performs bounded mutation of an existing patch. Deterministic given RNG
//! state.

use serde::{Deserialize, Serialize};

use fmforge_spec::{OperatorConstraints, PatchRole, RoleConstraints};

use crate::rng::GenRng;

/// One FM operator's parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmOperator {
    /// Total level (attenuation).
    pub tl: u8,
    /// Attack rate.
    pub ar: u8,
    /// Decay rate.
    pub dr: u8,
    /// Sustain level.
    pub sl: u8,
    /// Release rate.
    pub rr: u8,
    /// Frequency multiplier.
    pub mult: u8,
    /// Detune.
    pub dt: u8,
    /// Secondary decay rate.
    pub d2r: u8,
    /// Rate scaling.
    pub rs: u8,
    /// Amplitude modulation enable.
    pub am: u8,
    /// Operator enable.
    pub enabled: bool,
}

/// A complete 4-operator FM patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FmPatch {
    /// Patch name.
    pub name: String,
    /// Routing algorithm, 0-7.
    pub algorithm: u8,
    /// Operator 1 self-feedback, 0-7.
    pub feedback: u8,
    /// The four operator slots.
    pub ops: [FmOperator; 4],
}

impl FmPatch {
    /// Fixed-format one-line summary: algorithm, feedback, per-operator
    /// multiplier and level. Pure formatting, no randomness.
    pub fn describe(&self) -> String {
        format!(
            "Algo {} | FB {} | MUL {},{},{},{} | TL {},{},{},{}",
            self.algorithm,
            self.feedback,
            self.ops[0].mult,
            self.ops[1].mult,
            self.ops[2].mult,
            self.ops[3].mult,
            self.ops[0].tl,
            self.ops[1].tl,
            self.ops[2].tl,
            self.ops[3].tl,
        )
    }
}

/// Seeded generator for FM patches.
pub struct PatchGenerator {
    rng: GenRng,
}

impl PatchGenerator {
    pub fn new() -> Self {
        Self { rng: GenRng::new() }
    }

    /// Reset the RNG. Equal seeds replay equal patches.
    pub fn set_seed(&mut self, seed: u32) {
        self.rng.seed(seed);
    }

    /// Generate a fresh patch for a role, every parameter drawn uniformly
    /// from its constraint range. An empty algorithm list falls back to the
    /// full 0-7 range.
    pub fn generate(&mut self, role: PatchRole, constraints: &RoleConstraints) -> FmPatch {
        let algorithm = if constraints.algorithms.is_empty() {
            self.rng.rand_int(0, 7) as u8
        } else {
            self.rng.pick(&constraints.algorithms)
        };
        let feedback = self
            .rng
            .rand_int(constraints.feedback_min, constraints.feedback_max) as u8;

        let mut ops = [FmOperator::default(); 4];
        for (op, c) in ops.iter_mut().zip(constraints.ops.iter()) {
            *op = draw_operator(&mut self.rng, c);
        }

        FmPatch {
            name: format!("Gen {}", role.name()),
            algorithm,
            feedback,
            ops,
        }
    }

    /// Mutate an existing patch: `mutations` independent single-value
    /// redraws, each targeting the algorithm, the feedback, or one parameter
    /// of one operator. Targets may repeat, so a high mutation count does not
    /// guarantee every parameter moves.
    pub fn mutate(
        &mut self,
        source: &FmPatch,
        _role: PatchRole,
        constraints: &RoleConstraints,
        mutations: u32,
    ) -> FmPatch {
        let mut patch = source.clone();

        for _ in 0..mutations {
            match self.rng.rand_int(0, 5) {
                0 => {
                    if !constraints.algorithms.is_empty() {
                        patch.algorithm = self.rng.pick(&constraints.algorithms);
                    }
                }
                1 => {
                    patch.feedback = self
                        .rng
                        .rand_int(constraints.feedback_min, constraints.feedback_max)
                        as u8;
                }
                _ => {
                    let op_idx = self.rng.rand_int(0, 3) as usize;
                    let c = &constraints.ops[op_idx];
                    let op = &mut patch.ops[op_idx];
                    match self.rng.rand_int(0, 7) {
                        0 => op.tl = self.rng.rand_int(c.tl_min, c.tl_max) as u8,
                        1 => op.ar = self.rng.rand_int(c.ar_min, c.ar_max) as u8,
                        2 => op.dr = self.rng.rand_int(c.dr_min, c.dr_max) as u8,
                        3 => op.sl = self.rng.rand_int(c.sl_min, c.sl_max) as u8,
                        4 => op.rr = self.rng.rand_int(c.rr_min, c.rr_max) as u8,
                        5 => op.mult = self.rng.rand_int(c.mult_min, c.mult_max) as u8,
                        6 => op.dt = self.rng.rand_int(c.dt_min, c.dt_max) as u8,
                        _ => op.d2r = self.rng.rand_int(c.d2r_min, c.d2r_max) as u8,
                    }
                }
            }
        }

        patch
    }
}

impl Default for PatchGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_operator(rng: &mut GenRng, c: &OperatorConstraints) -> FmOperator {
    FmOperator {
        tl: rng.rand_int(c.tl_min, c.tl_max) as u8,
        ar: rng.rand_int(c.ar_min, c.ar_max) as u8,
        dr: rng.rand_int(c.dr_min, c.dr_max) as u8,
        sl: rng.rand_int(c.sl_min, c.sl_max) as u8,
        rr: rng.rand_int(c.rr_min, c.rr_max) as u8,
        mult: rng.rand_int(c.mult_min, c.mult_max) as u8,
        dt: rng.rand_int(c.dt_min, c.dt_max) as u8,
        d2r: rng.rand_int(c.d2r_min, c.d2r_max) as u8,
        rs: rng.rand_int(c.rs_min, c.rs_max) as u8,
        am: rng.rand_int(c.am_min, c.am_max) as u8,
        enabled: true,
    }
}
