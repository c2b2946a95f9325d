//! FM synthesis parameter constraint ranges.
//!
//! A style preset constrains the patch generator per role: which 4-operator
//! algorithms are allowed, the feedback range, and an inclusive (min, max)
//! range for every parameter of every operator slot. Bound ordering is the
//! preset author's responsibility; an inverted range is not an error, a draw
//! over it returns the lower bound.

use serde::{Deserialize, Serialize};

/// Inclusive (min, max) ranges for the ten parameters of one FM operator.
///
/// Defaults cover the full legal range of each YM2612 register field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConstraints {
    /// Total level (attenuation), 0-127.
    pub tl_min: i32,
    pub tl_max: i32,
    /// Attack rate, 0-31.
    pub ar_min: i32,
    pub ar_max: i32,
    /// Decay rate, 0-31.
    pub dr_min: i32,
    pub dr_max: i32,
    /// Sustain level, 0-15.
    pub sl_min: i32,
    pub sl_max: i32,
    /// Release rate, 0-15.
    pub rr_min: i32,
    pub rr_max: i32,
    /// Frequency multiplier, 0-15.
    pub mult_min: i32,
    pub mult_max: i32,
    /// Detune, 0-7.
    pub dt_min: i32,
    pub dt_max: i32,
    /// Secondary decay rate, 0-31.
    pub d2r_min: i32,
    pub d2r_max: i32,
    /// Rate scaling, 0-3.
    pub rs_min: i32,
    pub rs_max: i32,
    /// Amplitude modulation enable, 0-1.
    pub am_min: i32,
    pub am_max: i32,
}

impl Default for OperatorConstraints {
    fn default() -> Self {
        Self {
            tl_min: 0,
            tl_max: 127,
            ar_min: 0,
            ar_max: 31,
            dr_min: 0,
            dr_max: 31,
            sl_min: 0,
            sl_max: 15,
            rr_min: 0,
            rr_max: 15,
            mult_min: 0,
            mult_max: 15,
            dt_min: 0,
            dt_max: 7,
            d2r_min: 0,
            d2r_max: 31,
            rs_min: 0,
            rs_max: 3,
            am_min: 0,
            am_max: 1,
        }
    }
}

/// Patch-synthesis constraints for one instrument role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleConstraints {
    /// Allowed 4-operator algorithm indices (0-7). Empty means unconstrained:
    /// the generator falls back to the full 0-7 range.
    #[serde(default)]
    pub algorithms: Vec<u8>,
    /// Feedback range, 0-7.
    pub feedback_min: i32,
    pub feedback_max: i32,
    /// One constraint set per operator slot.
    pub ops: [OperatorConstraints; 4],
}

impl Default for RoleConstraints {
    fn default() -> Self {
        Self {
            algorithms: Vec::new(),
            feedback_min: 0,
            feedback_max: 7,
            ops: [OperatorConstraints::default(); 4],
        }
    }
}
