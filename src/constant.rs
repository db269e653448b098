// IEEE-754 binary32 layout.

pub const SIG_WIDTH_F32: u32 = 23;
pub const EXP_WIDTH_F32: u32 = 8;

pub const EXP_SHIFT_F32: u32 = SIG_WIDTH_F32;
pub const SIGN_SHIFT_F32: u32 = SIG_WIDTH_F32 + EXP_WIDTH_F32;

pub const SIG_MASK_F32: u32 = (1 << SIG_WIDTH_F32) - 1;
pub const EXP_MASK_F32: u32 = 0xFF;
pub const SIGN_MASK_F32: u32 = 1 << SIGN_SHIFT_F32;

pub const HIDDEN_SIGNIFICAND: u32 = 1 << SIG_WIDTH_F32;
pub const QUIET_NAN_BIT: u32 = 1 << (SIG_WIDTH_F32 - 1);

pub const BIAS_F32: i32 = 127;
pub const EXP_MAX_F32: u32 = 0xFF;

// unbiased exponents of the reserved encodings
pub const EXP_ZERO_F32: i32 = -BIAS_F32;
pub const EXP_INF_OR_NAN_F32: i32 = BIAS_F32 + 1;
