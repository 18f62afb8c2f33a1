use super::*;

impl<D: Dimension> Quantity<D> {
  /// A [proptest Strategy](proptest::strategy::Strategy) that yields quantities with any finite
  /// value (including zeros and subnormals).
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    (POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO).prop_map(Self::new)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields non-zero quantities whose
  /// magnitude is between 1e-100 and 1e100, so that products and squares of them neither overflow
  /// nor underflow.
  pub(crate) fn cases_proptest_moderate() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (any::<bool>(), 1.0f64 .. 10.0, -100i32 ..= 99).prop_map(|(negative, mantissa, exp)| {
      let abs = mantissa * 10f64.powi(exp);
      Self::new(if negative {-abs} else {abs})
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Length;
  use proptest::prelude::*;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn cases_are_finite(a in Length::cases_proptest()) {
      prop_assert!(a.is_finite());
    }

    #[test]
    fn moderate_cases_are_moderate(a in Length::cases_proptest_moderate()) {
      let abs = a.abs().canonical_value();
      prop_assert!(abs > 1e-101 && abs < 1e101);
    }
  }
}
