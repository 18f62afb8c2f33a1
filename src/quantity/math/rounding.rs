use super::*;

impl<D: Dimension> Quantity<D> {
  /// Absolute value, same dimension.
  #[inline]
  pub fn abs(self) -> Self {
    Self::new(self.0.abs())
  }

  /// Largest integer multiple of the canonical unit less than or equal to `self`.
  ///
  /// Note that the result depends on the canonical unit: `floor` of 1.5 km is 1500 m, but `floor`
  /// of 1.5 ms is 0 s.
  #[inline]
  pub fn floor(self) -> Self {
    Self::new(self.0.floor())
  }

  /// Smallest integer multiple of the canonical unit greater than or equal to `self`.
  #[inline]
  pub fn ceil(self) -> Self {
    Self::new(self.0.ceil())
  }

  /// Nearest integer multiple of the canonical unit, rounding half-way cases away from zero.
  #[inline]
  pub fn round(self) -> Self {
    Self::new(self.0.round())
  }

  /// Integer part, in the canonical unit.
  #[inline]
  pub fn trunc(self) -> Self {
    Self::new(self.0.trunc())
  }

  /// Floating-point remainder of `self / other`, with the sign of `self`. `other` must have the
  /// same dimension as `self`; this is the same as `self % other`.
  ///
  /// # Example
  ///
  /// ```
  /// # use astro_units::literal::*;
  /// assert_eq!(m(7.0).fmod(m(2.5)), m(2.0));
  /// assert_eq!(m(-7.0).fmod(m(2.5)), m(-2.0));
  /// ```
  #[inline]
  pub fn fmod<E: Dimension>(self, other: Quantity<E>) -> Self {
    let () = SameDimension::<D, E>::OK;
    Self::new(self.0 % other.0)
  }

  /// The smaller of `self` and `other`; if one is NaN, the other.
  #[inline]
  pub fn min(self, other: Self) -> Self {
    Self::new(self.0.min(other.0))
  }

  /// The larger of `self` and `other`; if one is NaN, the other.
  #[inline]
  pub fn max(self, other: Self) -> Self {
    Self::new(self.0.max(other.0))
  }

  /// Restrict `self` to `[lo, hi]`.
  ///
  /// # Panics
  ///
  /// If `lo > hi`, or either is NaN, like [`f64::clamp`].
  #[inline]
  pub fn clamp(self, lo: Self, hi: Self) -> Self {
    Self::new(self.0.clamp(lo.0, hi.0))
  }

  /// `1` if `self` is positive (including `+0` and `+∞`), `-1` if negative, NaN if NaN.
  #[inline]
  pub fn signum(self) -> Quantity<Dimensionless> {
    Quantity::new(self.0.signum())
  }

  #[inline]
  pub fn is_finite(self) -> bool {
    self.0.is_finite()
  }

  #[inline]
  pub fn is_nan(self) -> bool {
    self.0.is_nan()
  }

  #[inline]
  pub fn is_sign_negative(self) -> bool {
    self.0.is_sign_negative()
  }
}

#[cfg(test)]
mod tests {
  use crate::{Length, Number, Time};
  use proptest::prelude::*;

  #[test]
  fn rounding() {
    assert_eq!(Length::new(-2.5).abs(), Length::new(2.5));
    assert_eq!(Length::new(2.5).floor(), Length::new(2.0));
    assert_eq!(Length::new(2.5).ceil(), Length::new(3.0));
    assert_eq!(Length::new(2.5).round(), Length::new(3.0));
    assert_eq!(Length::new(-2.5).round(), Length::new(-3.0));
    assert_eq!(Length::new(-2.7).trunc(), Length::new(-2.0));
  }

  #[test]
  fn fmod() {
    assert_eq!(Time::new(10.0).fmod(Time::new(3.0)), Time::new(1.0));
    assert_eq!(Time::new(-10.0).fmod(Time::new(3.0)), Time::new(-1.0));
    assert!(Time::new(1.0).fmod(Time::ZERO).is_nan());
  }

  #[test]
  fn min_max_clamp() {
    let (a, b) = (Length::new(1.0), Length::new(2.0));
    assert_eq!(a.min(b), a);
    assert_eq!(a.max(b), b);
    assert_eq!(a.min(Length::new(f64::NAN)), a);
    assert_eq!(Length::new(5.0).clamp(a, b), b);
    assert_eq!(Length::new(-5.0).clamp(a, b), a);
  }

  #[test]
  #[should_panic]
  fn clamp_bad_bounds() {
    let _ = Length::new(0.0).clamp(Length::new(2.0), Length::new(1.0));
  }

  #[test]
  fn signum() {
    assert_eq!(Length::new(-3.0).signum(), Number::new(-1.0));
    assert_eq!(Length::new(3.0).signum(), Number::new(1.0));
    assert!(Length::new(f64::NAN).signum().is_nan());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn fmod_is_rem(a in Length::cases_proptest(), b in Length::cases_proptest()) {
      let x = a.fmod(b).canonical_value();
      let y = (a % b).canonical_value();
      prop_assert!(x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan()));
    }

    #[test]
    fn abs_is_non_negative(a in Length::cases_proptest()) {
      prop_assert!(a.abs() >= Length::ZERO);
      prop_assert_eq!(a.abs(), (-a).abs());
    }
  }
}
