use super::*;
use crate::dims::Angle;

impl Quantity<Angle> {
  /// Sine of an angle.
  #[inline]
  pub fn sin(self) -> Quantity<Dimensionless> {
    Quantity::new(self.0.sin())
  }

  /// Cosine of an angle.
  #[inline]
  pub fn cos(self) -> Quantity<Dimensionless> {
    Quantity::new(self.0.cos())
  }

  /// Tangent of an angle.
  #[inline]
  pub fn tan(self) -> Quantity<Dimensionless> {
    Quantity::new(self.0.tan())
  }
}

impl<D: Dimension> Quantity<D> {
  /// The angle of the point `(x, self)` from the positive `x` axis, in `[-π, π]`. `self` and `x`
  /// must have the same dimension.
  ///
  /// ```
  /// # use astro_units::literal::*;
  /// let angle = kpc(1.0).atan2(kpc(1.0));
  /// assert!((angle.convert_to(deg(1.0)) - 45.0).abs() < 1e-12);
  /// ```
  #[inline]
  pub fn atan2<E: Dimension>(self, x: Quantity<E>) -> Quantity<Angle> {
    let () = SameDimension::<D, E>::OK;
    Quantity::new(self.0.atan2(x.0))
  }
}

// Transcendental functions only make sense on pure numbers (an angle is not one here, having its
// own base axis).

impl Quantity<Dimensionless> {
  #[inline]
  pub fn asin(self) -> Quantity<Angle> {
    Quantity::new(self.0.asin())
  }

  #[inline]
  pub fn acos(self) -> Quantity<Angle> {
    Quantity::new(self.0.acos())
  }

  #[inline]
  pub fn atan(self) -> Quantity<Angle> {
    Quantity::new(self.0.atan())
  }

  /// `e^self`.
  #[inline]
  pub fn exp(self) -> Self {
    Self::new(self.0.exp())
  }

  /// `e^self - 1`, accurate even when `self` is close to zero.
  #[inline]
  pub fn exp_m1(self) -> Self {
    Self::new(self.0.exp_m1())
  }

  /// Natural logarithm.
  #[inline]
  pub fn ln(self) -> Self {
    Self::new(self.0.ln())
  }

  #[inline]
  pub fn sinh(self) -> Self {
    Self::new(self.0.sinh())
  }

  #[inline]
  pub fn cosh(self) -> Self {
    Self::new(self.0.cosh())
  }

  #[inline]
  pub fn tanh(self) -> Self {
    Self::new(self.0.tanh())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{units, Length, Number};
  use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

  #[test]
  fn trig() {
    let right = Quantity::<Angle>::new(FRAC_PI_2);
    assert_eq!(right.sin(), Number::new(1.0));
    assert!(right.cos().get().abs() < 1e-15);
    assert!((Quantity::<Angle>::new(FRAC_PI_4).tan().get() - 1.0).abs() < 1e-15);
    assert!(((units::DEGREE * 180.0).cos().get() + 1.0).abs() < 1e-15);
  }

  #[test]
  fn inverse_trig() {
    let close = |a: Quantity<Angle>, b: f64| (a.canonical_value() - b).abs() < 1e-15;
    assert!(close(Number::new(1.0).asin(), FRAC_PI_2));
    assert!(close(Number::new(-1.0).acos(), PI));
    assert_eq!(Number::new(0.0).atan(), Quantity::<Angle>::ZERO);
    assert!(Number::new(2.0).asin().is_nan());
    assert!(close(Length::new(1.0).atan2(Length::new(-1.0)), 3.0 * FRAC_PI_4));
  }

  #[test]
  fn exp_log() {
    assert_eq!(Number::new(0.0).exp(), Number::new(1.0));
    assert_eq!(Number::new(1.0).ln(), Number::ZERO);
    assert!((Number::new(2.0).exp().ln().get() - 2.0).abs() < 1e-15);
    assert_eq!(Number::new(1e-20).exp_m1(), Number::new(1e-20));
  }

  #[test]
  fn hyperbolic() {
    assert_eq!(Number::ZERO.sinh(), Number::ZERO);
    assert_eq!(Number::ZERO.cosh(), Number::new(1.0));
    assert_eq!(Number::ZERO.tanh(), Number::ZERO);
    assert_eq!(Number::new(1000.0).tanh(), Number::new(1.0));
  }
}
