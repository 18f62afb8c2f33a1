use super::*;

impl DimensionVector {
  /// A [proptest Strategy](proptest::strategy::Strategy) that yields vectors with small rational
  /// exponents, of the kind found in real formulas.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let exponent = (-12i64 ..= 12, 1i64 ..= 6).prop_map(|(n, d)| Ratio::new(n, d));
    proptest::array::uniform9(exponent).prop_map(Self::new)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields vectors with small integer
  /// exponents.
  pub(crate) fn cases_proptest_integer() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    proptest::array::uniform9(-12i64 ..= 12).prop_map(Self::from_integers)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn integer_cases_are_integers(v in DimensionVector::cases_proptest_integer()) {
      prop_assert!(v.exponents().iter().all(|e| e.is_integer()));
    }
  }
}
