use std::fmt;
use std::ops::BitOr;

/// Set of reference checks that answered differently from the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disagreement(pub u8);
pub const DISAGREE_NONE: u8 = 0;
pub const DISAGREE_CEIL: u8 = 1 << 0;
pub const DISAGREE_FLOOR: u8 = 1 << 1;
pub const DISAGREE_CAST: u8 = 1 << 2;
pub const DISAGREE_NEARBY: u8 = 1 << 3;
pub const DISAGREE_RINT: u8 = 1 << 4;

const NAMES: [(u8, &str); 5] = [
    (DISAGREE_CEIL, "ceil"),
    (DISAGREE_FLOOR, "floor"),
    (DISAGREE_CAST, "cast"),
    (DISAGREE_NEARBY, "nearby"),
    (DISAGREE_RINT, "rint"),
];

impl Disagreement {
    pub fn none() -> Disagreement {
        Disagreement(DISAGREE_NONE)
    }

    pub fn ceil() -> Disagreement {
        Disagreement(DISAGREE_CEIL)
    }

    pub fn floor() -> Disagreement {
        Disagreement(DISAGREE_FLOOR)
    }

    pub fn cast() -> Disagreement {
        Disagreement(DISAGREE_CAST)
    }

    pub fn nearby() -> Disagreement {
        Disagreement(DISAGREE_NEARBY)
    }

    pub fn rint() -> Disagreement {
        Disagreement(DISAGREE_RINT)
    }

    pub fn is_none(self) -> bool {
        self.0 == DISAGREE_NONE
    }

    pub fn contains(self, other: Disagreement) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Disagreement {
    type Output = Disagreement;

    fn bitor(self, other: Disagreement) -> Disagreement {
        Disagreement(self.0 | other.0)
    }
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "none");
        }

        let mut first = true;
        for &(flag, name) in NAMES.iter() {
            if self.0 & flag != 0 {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }

        Ok(())
    }
}
