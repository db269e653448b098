//! Decide whether an IEEE-754 binary32 value is a whole integer using only
//! integer arithmetic on its encoding.
//!
//! ```
//! use wholefloat::{is_whole_integer, to_bits};
//!
//! assert!(is_whole_integer(to_bits(-3.0)));
//! assert!(!is_whole_integer(to_bits(2.5)));
//! ```

pub mod bits;
pub mod classify;
pub mod constant;
pub mod disagreement;
pub mod format;
pub mod oracle;
pub mod sweep;

pub use bits::{from_bits, to_bits};
pub use classify::{checked_is_whole_integer, is_whole_integer, is_whole_integer_f32, Excluded};
pub use disagreement::Disagreement;
pub use format::FloatFormat;
pub use sweep::{Mismatch, Sweep};

use constant::*;

/// A binary32 pattern split into its three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Float {
    pub sign: bool,
    pub exp: u32,
    pub sig: u32,
}

impl Float {
    pub fn new(value: u32) -> Float {
        let sign = (value & SIGN_MASK_F32) != 0;
        let exp = (value >> EXP_SHIFT_F32) & EXP_MASK_F32;
        let sig = value & SIG_MASK_F32;

        Float { sign, exp, sig }
    }

    /// Builds from fields; out-of-range bits in `exp` and `sig` are dropped.
    pub fn from_fields(sign: bool, exp: u32, sig: u32) -> Float {
        Float {
            sign,
            exp: exp & EXP_MASK_F32,
            sig: sig & SIG_MASK_F32,
        }
    }

    pub fn bits(self) -> u32 {
        ((self.sign as u32) << SIGN_SHIFT_F32) | (self.exp << EXP_SHIFT_F32) | self.sig
    }

    pub fn unbiased_exp(self) -> i32 {
        self.exp as i32 - BIAS_F32
    }
}

impl From<f32> for Float {
    fn from(f: f32) -> Float {
        Float::new(to_bits(f))
    }
}

impl From<Float> for f32 {
    fn from(f: Float) -> f32 {
        from_bits(f.bits())
    }
}
