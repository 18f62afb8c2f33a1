use super::*;

use core::fmt::{Debug, Display};

/// The nine base axes of a [`DimensionVector`], in storage order.
#[derive(Clone, Copy, Debug)]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BaseDimension {
  Length,
  Time,
  Mass,
  Current,
  Temperature,
  Substance,
  LuminousIntensity,
  Angle,
  SolidAngle,
}

impl BaseDimension {
  /// The number of base axes.
  pub const COUNT: usize = 9;

  /// All axes, in storage order.
  pub const ALL: [Self; Self::COUNT] = [
    Self::Length,
    Self::Time,
    Self::Mass,
    Self::Current,
    Self::Temperature,
    Self::Substance,
    Self::LuminousIntensity,
    Self::Angle,
    Self::SolidAngle,
  ];

  /// Position of this axis in a [`DimensionVector`].
  #[inline]
  pub const fn index(self) -> usize {
    self as usize
  }

  /// Symbol of the canonical (SI) unit of this axis, used when printing dimensions.
  pub const fn symbol(self) -> &'static str {
    match self {
      Self::Length => "m",
      Self::Time => "s",
      Self::Mass => "kg",
      Self::Current => "A",
      Self::Temperature => "K",
      Self::Substance => "mol",
      Self::LuminousIntensity => "cd",
      Self::Angle => "rad",
      Self::SolidAngle => "sr",
    }
  }
}

/// The dimension of a quantity: one exact rational exponent per [`BaseDimension`].
///
/// Two vectors are equal only if all nine exponents are exactly equal. This is the one and only
/// test that decides whether two quantities may be added, subtracted, compared, or reduced
/// modulo each other.
///
/// The arithmetic mirrors what the corresponding quantity operation does to dimensions:
///
/// | Quantity operation | Vector operation |
/// |---|---|
/// | `a * b` | [`a.strict_add(b)`](Self::strict_add) |
/// | `a / b` | [`a.strict_sub(b)`](Self::strict_sub) |
/// | `1 / a` | [`a.strict_neg()`](Self::strict_neg) |
/// | `a.pow::<N>()`, `a.pow_ratio::<N, D>()`, `a.sqrt()` | [`a.strict_scale(N/D)`](Self::strict_scale) |
///
/// Like [`Ratio`], every operation has a `checked_*` variant returning `None` when an exponent
/// cannot be represented, and a `strict_*` variant that panics (a compile-time error when it
/// runs in a const context, which is where the type-level engine runs it).
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct DimensionVector([Ratio; BaseDimension::COUNT]);

/// Generates a component-wise `checked_*`/`strict_*` pair for a binary `Ratio` operation.
macro_rules! mk_zip {
  ($checked:ident, $strict:ident, $ratio_op:ident, $doc:literal) => {
    #[doc = $doc]
    pub const fn $checked(&self, other: &Self) -> Option<Self> {
      let mut out = [Ratio::ZERO; BaseDimension::COUNT];
      let mut i = 0;
      while i < BaseDimension::COUNT {
        match self.0[i].$ratio_op(other.0[i]) {
          Some(r) => out[i] = r,
          None => return None,
        }
        i += 1;
      }
      Some(Self(out))
    }

    #[doc = $doc]
    ///
    /// # Panics
    ///
    /// If some exponent overflows.
    pub const fn $strict(&self, other: &Self) -> Self {
      match self.$checked(other) {
        Some(v) => v,
        None => panic!("Dimension exponent overflow"),
      }
    }
  };
}

impl DimensionVector {
  /// The dimension of a pure number: all exponents zero.
  pub const DIMENSIONLESS: Self = Self([Ratio::ZERO; BaseDimension::COUNT]);

  /// Construct a vector from its exponents, in [`BaseDimension::ALL`] order.
  pub const fn new(exponents: [Ratio; BaseDimension::COUNT]) -> Self {
    Self(exponents)
  }

  /// Construct a vector from integer exponents, in [`BaseDimension::ALL`] order.
  pub const fn from_integers(exponents: [i64; BaseDimension::COUNT]) -> Self {
    let mut out = [Ratio::ZERO; BaseDimension::COUNT];
    let mut i = 0;
    while i < BaseDimension::COUNT {
      out[i] = Ratio::integer(exponents[i]);
      i += 1;
    }
    Self(out)
  }

  /// The vector with exponent 1 on `axis` and 0 everywhere else.
  pub const fn base(axis: BaseDimension) -> Self {
    let mut out = [Ratio::ZERO; BaseDimension::COUNT];
    out[axis.index()] = Ratio::ONE;
    Self(out)
  }

  /// The exponent of `axis`.
  #[inline]
  pub const fn get(&self, axis: BaseDimension) -> Ratio {
    self.0[axis.index()]
  }

  #[inline]
  pub const fn exponents(&self) -> [Ratio; BaseDimension::COUNT] {
    self.0
  }

  pub const fn is_dimensionless(&self) -> bool {
    self.same_as(&Self::DIMENSIONLESS)
  }

  /// Exact equality, usable in `const` contexts (where `==` is not).
  pub const fn same_as(&self, other: &Self) -> bool {
    let mut i = 0;
    while i < BaseDimension::COUNT {
      if !self.0[i].same_as(other.0[i]) {
        return false
      }
      i += 1;
    }
    true
  }

  /// Whether every exponent has an even numerator (in lowest terms), i.e. whether a square root
  /// of a quantity with this dimension is defined.
  pub const fn has_even_numerators(&self) -> bool {
    let mut i = 0;
    while i < BaseDimension::COUNT {
      if self.0[i].num() % 2 != 0 {
        return false
      }
      i += 1;
    }
    true
  }

  mk_zip!{checked_add, strict_add, checked_add, "Component-wise sum (dimension of a product)."}
  mk_zip!{checked_sub, strict_sub, checked_sub, "Component-wise difference (dimension of a quotient)."}

  /// Component-wise negation (dimension of a reciprocal).
  pub const fn checked_neg(&self) -> Option<Self> {
    Self::DIMENSIONLESS.checked_sub(self)
  }

  /// Component-wise negation (dimension of a reciprocal).
  ///
  /// # Panics
  ///
  /// If some exponent overflows.
  pub const fn strict_neg(&self) -> Self {
    Self::DIMENSIONLESS.strict_sub(self)
  }

  /// Multiply every exponent by `factor` (dimension of a power).
  pub const fn checked_scale(&self, factor: Ratio) -> Option<Self> {
    let mut out = [Ratio::ZERO; BaseDimension::COUNT];
    let mut i = 0;
    while i < BaseDimension::COUNT {
      match self.0[i].checked_mul(factor) {
        Some(r) => out[i] = r,
        None => return None,
      }
      i += 1;
    }
    Some(Self(out))
  }

  /// Multiply every exponent by `factor` (dimension of a power).
  ///
  /// # Panics
  ///
  /// If some exponent overflows.
  pub const fn strict_scale(&self, factor: Ratio) -> Self {
    match self.checked_scale(factor) {
      Some(v) => v,
      None => panic!("Dimension exponent overflow in power"),
    }
  }

  /// Render the vector as SI unit symbols in storage order, e.g. `m^2 s^-2 kg` for an energy.
  /// A dimensionless vector renders as `1`.
  pub const fn label(&self) -> Label {
    let mut label = Label::new();
    label.push_vector(self);
    label
  }
}

impl Default for DimensionVector {
  fn default() -> Self {
    Self::DIMENSIONLESS
  }
}

impl core::ops::Index<BaseDimension> for DimensionVector {
  type Output = Ratio;

  #[inline]
  fn index(&self, axis: BaseDimension) -> &Ratio {
    &self.0[axis.index()]
  }
}

impl Display for DimensionVector {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.label().as_str())
  }
}

impl Debug for DimensionVector {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "DimensionVector[{self}]")
  }
}
