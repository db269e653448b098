use crate::Float;
use crate::constant::*;

pub trait FloatFormat {
  fn is_nan(self) -> bool;
  fn is_signal_nan(self) -> bool;
  fn is_inf(self) -> bool;
  fn is_zero(self) -> bool;
  fn is_subnormal(self) -> bool;
  fn is_normal(self) -> bool;
}

impl FloatFormat for Float {
  fn is_nan(self) -> bool {
    self.unbiased_exp() == EXP_INF_OR_NAN_F32 && self.sig != 0
  }

  fn is_signal_nan(self) -> bool {
    self.is_nan() && (self.sig & QUIET_NAN_BIT == 0)
  }

  fn is_inf(self) -> bool {
    self.unbiased_exp() == EXP_INF_OR_NAN_F32 && self.sig == 0
  }

  fn is_zero(self) -> bool {
    self.unbiased_exp() == EXP_ZERO_F32 && self.sig == 0
  }

  fn is_subnormal(self) -> bool {
    self.unbiased_exp() == EXP_ZERO_F32 && self.sig != 0
  }

  fn is_normal(self) -> bool {
    self.exp != 0 && self.exp != EXP_MAX_F32
  }
}
