use super::*;

impl<D: Dimension> Quantity<D> {
  /// Returns the square root of `self`; every exponent of the dimension is halved.
  ///
  /// This only compiles if every exponent of `D` has an even numerator (`m^2`, `kg m^-4`, ...), so
  /// that the result stays within the integer-numerator dimensions the catalog is made of. For a
  /// genuinely fractional dimension, ask for it explicitly with
  /// [`pow_ratio::<1, 2>`](Self::pow_ratio).
  ///
  /// As for `f64`, the square root of a negative quantity is NaN.
  ///
  /// # Example
  ///
  /// ```
  /// # use astro_units::{Length, literal::*};
  /// let side: Length = m2(16.0).sqrt().cast();
  /// assert_eq!(side, m(4.0));
  /// ```
  ///
  /// ```compile_fail
  /// # use astro_units::literal::*;
  /// let nonsense = m(16.0).sqrt();  // error: square root of [m] is undefined
  /// ```
  #[inline]
  pub fn sqrt(self) -> Quantity<Raised<D, 1, 2>> {
    let () = EvenRoot::<D>::OK;
    let () = Evaluated::<Raised<D, 1, 2>>::OK;
    Quantity::new(self.0.sqrt())
  }

  /// Returns `self` raised to the integer power `N`; every exponent is multiplied by `N`.
  ///
  /// # Example
  ///
  /// ```
  /// # use astro_units::{Volume, literal::*};
  /// let v: Volume = cm(2.0).pow::<3>().cast();
  /// assert!((v.convert_to(cm3(1.0)) - 8.0).abs() < 1e-12);
  /// ```
  #[inline]
  pub fn pow<const N: i64>(self) -> Quantity<Raised<D, N, 1>> {
    let () = Evaluated::<Raised<D, N, 1>>::OK;
    let value = match i32::try_from(N) {
      Ok(n) => self.0.powi(n),
      Err(_) => self.0.powf(N as f64),
    };
    Quantity::new(value)
  }

  /// Returns `self` raised to the rational power `NUM / DEN`; every exponent is multiplied by
  /// `NUM / DEN`.
  ///
  /// Unlike [`sqrt`](Self::sqrt), any exponent is accepted, so this is the way into fractional
  /// dimensions (e.g. the `kg^1/2` of Gaussian units). A zero `DEN` does not compile.
  ///
  /// # Example
  ///
  /// ```
  /// # use astro_units::dimension::{BaseDimension, Ratio};
  /// # use astro_units::literal::*;
  /// let q = kg(8.0).pow_ratio::<2, 3>();
  /// assert!((q.canonical_value() - 4.0).abs() < 1e-12);
  /// assert_eq!(q.dimension()[BaseDimension::Mass], Ratio::new(2, 3));
  /// ```
  #[inline]
  pub fn pow_ratio<const NUM: i64, const DEN: i64>(self) -> Quantity<Raised<D, NUM, DEN>> {
    let () = Evaluated::<Raised<D, NUM, DEN>>::OK;
    Quantity::new(self.0.powf(NUM as f64 / DEN as f64))
  }

  /// `self * self`; `const`, so usable in constant definitions.
  #[inline]
  pub const fn squared(self) -> Quantity<Raised<D, 2, 1>> {
    let () = Evaluated::<Raised<D, 2, 1>>::OK;
    Quantity::new(self.0 * self.0)
  }
}

#[cfg(test)]
mod tests {
  use crate::dimension::{BaseDimension, Ratio};
  use crate::{Area, Energy, Length, Mass, Number, Speed, Volume};
  use proptest::prelude::*;

  #[test]
  fn sqrt() {
    let a = Area::new(9.0);
    let side = a.sqrt();
    assert_eq!(side.canonical_value(), 3.0);
    assert_eq!(side.dimension(), Length::DIMENSION);
    assert!(Area::new(-1.0).sqrt().is_nan());
  }

  #[test]
  fn sqrt_of_energy_squared() {
    let e2 = Energy::new(2.0).squared();
    assert_eq!(e2.canonical_value(), 4.0);
    assert_eq!(e2.sqrt(), Energy::new(2.0));
    assert_eq!(Energy::new(-3.0).squared().sqrt(), Energy::new(3.0));
  }

  #[test]
  fn pow() {
    let v = Length::new(2.0).pow::<3>();
    assert_eq!(v, Volume::new(8.0));
    let inv = Length::new(2.0).pow::<-2>();
    assert_eq!(inv.canonical_value(), 0.25);
    assert_eq!(inv.dimension()[BaseDimension::Length], Ratio::integer(-2));
    let one = Length::new(5.0).pow::<0>();
    assert_eq!(one.dimension(), Number::DIMENSION);
    assert_eq!(one.canonical_value(), 1.0);
  }

  #[test]
  fn pow_ratio() {
    let q = Length::new(4.0).pow_ratio::<1, 2>();
    assert_eq!(q.canonical_value(), 2.0);
    assert_eq!(q.dimension()[BaseDimension::Length], Ratio::HALF);
    let back = q.squared();
    assert_eq!(back, Length::new(4.0));
    let cube_root = Volume::new(27.0).pow_ratio::<1, 3>();
    assert!((cube_root.canonical_value() - 3.0).abs() < 1e-12);
    assert_eq!(cube_root.dimension(), Length::DIMENSION);
  }

  #[test]
  fn energy_dimension() {
    let e = Mass::new(2.0) * Speed::new(3.0).squared();
    assert_eq!(e.dimension(), Energy::DIMENSION);
    assert_eq!(e, Energy::new(18.0));
  }

  #[test]
  fn const_squared() {
    const A: Area = Length::new(3.0).squared().cast();
    assert_eq!(A, Area::new(9.0));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn sqrt_of_square_is_abs(a in Length::cases_proptest_moderate()) {
      let root = (a * a).sqrt();
      prop_assert_eq!(root.dimension(), Length::DIMENSION);
      prop_assert_eq!(root, a.abs());
    }

    #[test]
    fn pow_2_is_squared(a in Length::cases_proptest()) {
      let x = a.pow::<2>().canonical_value();
      let y = a.squared().canonical_value();
      prop_assert!(x == y || (x.is_infinite() && y.is_infinite()));
    }
  }
}
