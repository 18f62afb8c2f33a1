use super::*;

impl<D: Dimension> Quantity<D> {
  /// The dimension vector of this type (same as [`Self::dimension`]).
  pub const DIMENSION: DimensionVector = D::VECTOR;

  /// Zero, in any dimension.
  pub const ZERO: Self = Self(0.0, PhantomData);

  /// Construct a quantity whose value **in canonical units** is `value`.
  ///
  /// The canonical system is SI: `Length::new(2.0)` is 2 metres, `Energy::new(2.0)` is 2 joules,
  /// `MagneticField::new(2.0)` is 2 tesla. To construct from other units, multiply by a unit
  /// constant or use the [literal](crate::literal) functions.
  #[inline]
  pub const fn new(value: f64) -> Self {
    Self(value, PhantomData)
  }

  /// Check that `self` can serve as a unit: its scale factor must be finite and strictly positive.
  ///
  /// All unit constants in the catalog are defined through this, so a bad definition (a zero or
  /// infinite scale, say from a mistyped exponent) fails to compile.
  ///
  /// ```compile_fail
  /// # use astro_units::Length;
  /// const BROKEN: Length = Length::new(1e300 * 1e300).as_unit();
  /// ```
  pub const fn as_unit(self) -> Self {
    assert!(
      self.0.is_finite() && self.0 > 0.0,
      "A unit must have a finite, strictly positive scale factor",
    );
    self
  }

  /// Return the scalar value in canonical units.
  ///
  /// Besides [`convert_to`](Self::convert_to), this is the only way to get at the raw number of a
  /// dimensionful quantity; there is no `From`/`Into` conversion to `f64`.
  #[inline]
  pub const fn canonical_value(self) -> f64 {
    self.0
  }

  /// The dimension vector of `self`.
  #[inline]
  pub const fn dimension(self) -> DimensionVector {
    D::VECTOR
  }

  /// Re-tag `self` as a quantity of type `E`, which must have exactly the same dimension vector.
  /// The value is untouched.
  ///
  /// Arithmetic yields structural types (`Product<Length, Length>`, ...); this turns them into
  /// the named catalog types:
  ///
  /// ```
  /// # use astro_units::{Area, literal::*};
  /// let side = m(3.0);
  /// let area: Area = (side * side).cast();
  /// assert_eq!(area.convert_to(m2(1.0)), 9.0);
  /// ```
  ///
  /// ```compile_fail
  /// # use astro_units::{Volume, literal::*};
  /// let side = m(3.0);
  /// let volume: Volume = (side * side).cast();
  /// ```
  #[inline]
  pub const fn cast<E: Dimension>(self) -> Quantity<E> {
    let () = SameDimension::<D, E>::OK;
    Quantity(self.0, PhantomData)
  }

  /// The value of `self` in multiples of `unit`, i.e. `self / unit` as a plain number. `unit`
  /// must have the same dimension as `self`.
  ///
  /// This is the sanctioned way out of the dimension-checked world, right before writing a
  /// number to a file or a log:
  ///
  /// ```
  /// # use astro_units::units::{KILOPARSEC, PARSEC};
  /// assert!((KILOPARSEC.convert_to(PARSEC) - 1000.0).abs() < 1e-9);
  /// ```
  #[inline]
  pub const fn convert_to<E: Dimension>(self, unit: Quantity<E>) -> f64 {
    let () = SameDimension::<D, E>::OK;
    self.0 / unit.0
  }

  /// Multiply by a bare number; `const` version of `self * factor`.
  #[inline]
  pub const fn scale(self, factor: f64) -> Self {
    Self(self.0 * factor, PhantomData)
  }

  /// `const` version of `self * rhs`.
  #[inline]
  pub const fn times<E: Dimension>(self, rhs: Quantity<E>) -> Quantity<Product<D, E>> {
    let () = Evaluated::<Product<D, E>>::OK;
    Quantity(self.0 * rhs.0, PhantomData)
  }

  /// `const` version of `self / rhs`.
  #[inline]
  pub const fn per<E: Dimension>(self, rhs: Quantity<E>) -> Quantity<Quotient<D, E>> {
    let () = Evaluated::<Quotient<D, E>>::OK;
    Quantity(self.0 / rhs.0, PhantomData)
  }

  /// `const` version of `1.0 / self`.
  #[inline]
  pub const fn recip(self) -> Quantity<Inverse<D>> {
    let () = Evaluated::<Inverse<D>>::OK;
    Quantity(1.0 / self.0, PhantomData)
  }
}

impl Quantity<Dimensionless> {
  /// The bare number, for a dimensionless quantity. Same as `f64::from(self)`.
  #[inline]
  pub const fn get(self) -> f64 {
    self.0
  }
}
