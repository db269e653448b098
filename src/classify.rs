//! Whole-integer test on the raw binary32 encoding.
//!
//! A normal value is `1.fraction * 2^e`. Moving the binary point `e`
//! places to the right swallows `e` fraction bits into the integer part,
//! so the value is whole exactly when the fraction has no set bit beyond
//! position `e`.

use either::Either;
use log::trace;

use crate::bits::to_bits;
use crate::constant::*;
use crate::format::FloatFormat;
use crate::Float;

/// Inputs the classifier is not defined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Excluded {
    Nan,
    Zero,
}

/// Number of fraction bits, counted from the top of the 23-bit field,
/// needed to hold the fraction exactly. Zero for an empty fraction.
pub fn significant_fraction_bits(sig: u32) -> u32 {
    let sig = sig & SIG_MASK_F32;
    let mut nz_bits = SIG_WIDTH_F32;

    while nz_bits > 0 {
        let mask = HIDDEN_SIGNIFICAND >> nz_bits;
        if mask & sig != 0 {
            break;
        }
        nz_bits -= 1;
    }

    nz_bits
}

/// Returns true if the binary32 value encoded by `bits` is a whole integer.
///
/// Only meaningful for finite, non-zero values. Outside that domain the
/// answer is whatever the exponent comparison gives: zeros and subnormals
/// report `false`, infinities and NaNs report `true`.
pub fn is_whole_integer(bits: u32) -> bool {
    let f = Float::new(bits);
    let nz_bits = significant_fraction_bits(f.sig) as i32;

    nz_bits <= f.unbiased_exp()
}

pub fn is_whole_integer_f32(f: f32) -> bool {
    is_whole_integer(to_bits(f))
}

/// Like [`is_whole_integer_f32`] but refuses NaN and signed zero.
pub fn checked_is_whole_integer(f: f32) -> Option<bool> {
    match admit(f) {
        Either::Left(excluded) => {
            trace!("refusing to classify {:?} (0x{:08x})", excluded, to_bits(f));
            None
        }
        Either::Right(bits) => Some(is_whole_integer(bits)),
    }
}

pub(crate) fn admit(f: f32) -> Either<Excluded, u32> {
    let bits = to_bits(f);
    let float = Float::new(bits);

    if float.is_nan() {
        Either::Left(Excluded::Nan)
    } else if float.is_zero() {
        Either::Left(Excluded::Zero)
    } else {
        Either::Right(bits)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bits::from_bits;
    use rand::Rng;
    use regex::Regex;

    // pattern, expected, comment
    const VECTORS: &str = "
        40000000 1  2.0
        40200000 0  2.5
        4B000000 1  8388608.0
        3F000000 0  0.5
        C0400000 1  -3.0
        3F800000 1  1.0
        BF800000 1  -1.0
        4B7FFFFF 1  16777215.0
        3F7FFFFF 0  0.99999994
        BF400000 0  -0.75
        4AFFFFFF 0  8388607.5
        4B000001 1  8388609.0
        7F7FFFFF 1  f32::MAX
        FF7FFFFF 1  f32::MIN
        00800000 0  f32::MIN_POSITIVE
        00000001 0  smallest subnormal
        807FFFFF 0  largest negative subnormal
    ";

    fn vectors() -> Vec<(u32, bool)> {
        let re = Regex::new(r"([0-9A-Fa-f]{8}) ([01])").unwrap();

        VECTORS
            .lines()
            .filter_map(|line| re.captures(line))
            .map(|caps| {
                let bits = u32::from_str_radix(caps.get(1).unwrap().as_str(), 16).unwrap();
                let expect = caps.get(2).unwrap().as_str() == "1";
                (bits, expect)
            })
            .collect()
    }

    fn reference(f: f32) -> bool {
        f.floor() == f
    }

    #[test]
    fn vector_table() {
        let vectors = vectors();
        assert_eq!(vectors.len(), 17);

        let failed = vectors
            .into_iter()
            .filter(|&(bits, expect)| is_whole_integer(bits) != expect)
            .collect::<Vec<(u32, bool)>>();

        if !failed.is_empty() {
            failed.iter().for_each(|(bits, expect)| {
                println!("0x{:08x}: expect {}, actual {}", bits, expect, !expect)
            });
            panic!("whole integer vectors failed({} failed)", failed.len());
        }
    }

    #[test]
    fn fraction_bit_count() {
        assert_eq!(significant_fraction_bits(0), 0);
        assert_eq!(significant_fraction_bits(0x40_0000), 1);
        assert_eq!(significant_fraction_bits(0x60_0000), 2);
        assert_eq!(significant_fraction_bits(0x00_0001), 23);
        assert_eq!(significant_fraction_bits(0x7F_FFFF), 23);
        assert_eq!(significant_fraction_bits(0x00_0100), 15);
        // bits above the fraction field are ignored
        assert_eq!(significant_fraction_bits(0xFF80_0000), 0);
    }

    #[test]
    fn boundaries() {
        // 2^24 - 1: exponent 23, every fraction bit set
        assert!(is_whole_integer(Float::from_fields(false, 150, 0x7F_FFFF).bits()));
        // [0.5, 1) never whole
        for &sig in [0, 1, 0x40_0000, 0x7F_FFFF].iter() {
            assert!(!is_whole_integer(Float::from_fields(false, 126, sig).bits()));
            assert!(!is_whole_integer(Float::from_fields(true, 126, sig).bits()));
        }
        assert!(is_whole_integer_f32(1.0));
        assert!(is_whole_integer_f32(-1.0));
    }

    #[test]
    fn every_exponent_against_floor() {
        let sigs = [0x00_0000, 0x00_0001, 0x40_0000, 0x7F_FFFF];

        for exp in 1..=254 {
            for &sig in sigs.iter() {
                for &sign in [false, true].iter() {
                    let bits = Float::from_fields(sign, exp, sig).bits();
                    let f = from_bits(bits);
                    assert_eq!(is_whole_integer(bits), reference(f), "0x{:08x}", bits);
                }
            }
        }
    }

    #[test]
    fn subnormals_are_never_whole() {
        for &sig in [1, 2, 0x40_0000, 0x55_5555, 0x7F_FFFF].iter() {
            for &sign in [false, true].iter() {
                let bits = Float::from_fields(sign, 0, sig).bits();
                assert!(!is_whole_integer(bits), "0x{:08x}", bits);
                assert!(!reference(from_bits(bits)));
            }
        }
    }

    #[test]
    fn random_against_floor() {
        let mut rng = rand::thread_rng();
        let mut checked = 0;

        while checked < 200_000 {
            let bits: u32 = rng.gen();
            let f = from_bits(bits);
            if f.is_nan() || f == 0.0 {
                continue;
            }
            assert_eq!(is_whole_integer(bits), reference(f), "0x{:08x}", bits);
            checked += 1;
        }
    }

    #[test]
    fn infinities_agree_with_floor() {
        assert!(is_whole_integer_f32(std::f32::INFINITY));
        assert!(is_whole_integer_f32(std::f32::NEG_INFINITY));
    }

    #[test]
    fn checked_refuses_nan_and_zero() {
        assert_eq!(checked_is_whole_integer(std::f32::NAN), None);
        assert_eq!(checked_is_whole_integer(0.0), None);
        assert_eq!(checked_is_whole_integer(-0.0), None);
        assert_eq!(checked_is_whole_integer(from_bits(0xFFC0_0001)), None);
        assert_eq!(checked_is_whole_integer(3.0), Some(true));
        assert_eq!(checked_is_whole_integer(0.25), Some(false));
        assert_eq!(checked_is_whole_integer(1.0e-45), Some(false));
    }

    #[test]
    #[ignore]
    fn exhaustive_against_floor() {
        for bits in 0..=u32::MAX {
            let f = from_bits(bits);
            if f.is_nan() || f == 0.0 {
                continue;
            }
            assert_eq!(is_whole_integer(bits), reference(f), "0x{:08x}", bits);
        }
    }
}
