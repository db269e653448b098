//! Bit-for-bit reinterpretation between `f32` and its `u32` encoding.
//!
//! Neither direction performs a numeric conversion: every one of the
//! 2^32 patterns survives the trip, NaN payloads and signed zeros included.

#[inline]
pub fn to_bits(f: f32) -> u32 {
    f.to_bits()
}

#[inline]
pub fn from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}
