//! Reference whole-integer checks built on the standard rounding routines.
//! Each one answers the same question as the classifier by a different road.

use crate::disagreement::Disagreement;

pub fn check_ceil(f: f32) -> bool {
    f.ceil() == f
}

pub fn check_floor(f: f32) -> bool {
    f.floor() == f
}

/// Truncating round trip through `i64`. Only trusted inside the `u32`
/// magnitude range, `None` elsewhere.
pub fn check_cast(f: f32) -> Option<bool> {
    let limit = u32::MAX as f32;
    if f > -limit && f < limit {
        let n = f as i64;
        Some(n as f32 == f)
    } else {
        None
    }
}

/// Nearest integer, ties to even, computed in double precision.
pub fn check_nearby(f: f32) -> bool {
    let d = f as f64;
    d.round_ties_even() == d
}

/// Nearest integer, ties to even, computed in single precision.
pub fn check_rint(f: f32) -> bool {
    f.round_ties_even() == f
}

/// Runs every oracle on `f` and flags the ones whose answer differs
/// from `whole`.
pub fn disagreements(f: f32, whole: bool) -> Disagreement {
    let mut d = Disagreement::none();

    if check_ceil(f) != whole {
        d = d | Disagreement::ceil();
    }
    if check_floor(f) != whole {
        d = d | Disagreement::floor();
    }
    if let Some(cast) = check_cast(f) {
        if cast != whole {
            d = d | Disagreement::cast();
        }
    }
    if check_nearby(f) != whole {
        d = d | Disagreement::nearby();
    }
    if check_rint(f) != whole {
        d = d | Disagreement::rint();
    }

    d
}
