//! Quantities whose dimension is only known at runtime.
//!
//! The static [`Quantity`] is what code should use. [`DynQuantity`] is for the edges: values on
//! their way to or from a file, a table of heterogeneous columns, a user-supplied unit. It carries
//! its [`DimensionVector`] alongside the value and checks it on every operation, reporting a
//! [`DimensionError`] instead of failing to compile.
//!
//! ```
//! # use astro_units::dynamic::{DynQuantity, DimensionError};
//! # use astro_units::literal::*;
//! # use astro_units::Length;
//! let column = [DynQuantity::from(kpc(1.0)), DynQuantity::from(s(2.0))];
//! assert!(matches!(column[0].try_add(column[1]), Err(DimensionError::Mismatch { .. })));
//! let back: Length = column[0].try_into_quantity().unwrap();
//! assert_eq!(back, kpc(1.0));
//! ```

use crate::dimension::{Dimension, DimensionVector, Ratio};
use crate::Quantity;

use core::cmp::Ordering;

/// An `f64` in canonical (SI) units, tagged at runtime with its dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynQuantity {
  value: f64,
  dimension: DimensionVector,
}

/// A dimension check that failed at runtime.
///
/// These are programming (or input) errors: retrying the same operation gives the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionError {
  /// The operation needs both operands to have the same dimension, and they don't.
  Mismatch { lhs: DimensionVector, rhs: DimensionVector },
  /// Some exponent of the result does not fit in a [`Ratio`].
  ExponentOverflow,
  /// Square root of a dimension with an exponent whose numerator is odd.
  OddRoot(DimensionVector),
}

impl core::fmt::Display for DimensionError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::Mismatch { lhs, rhs } => write!(f, "dimension mismatch: [{lhs}] vs [{rhs}]"),
      Self::ExponentOverflow => write!(f, "dimension exponent overflow"),
      Self::OddRoot(v) => write!(f, "square root of [{v}] is undefined"),
    }
  }
}

impl core::error::Error for DimensionError {}

impl DynQuantity {
  /// A quantity with canonical value `value` and dimension `dimension`.
  pub const fn new(value: f64, dimension: DimensionVector) -> Self {
    Self { value, dimension }
  }

  /// A dimensionless quantity.
  pub const fn number(value: f64) -> Self {
    Self::new(value, DimensionVector::DIMENSIONLESS)
  }

  pub const fn canonical_value(self) -> f64 {
    self.value
  }

  pub const fn dimension(self) -> DimensionVector {
    self.dimension
  }

  fn check_same(self, other: Self) -> Result<(), DimensionError> {
    if self.dimension == other.dimension {
      Ok(())
    } else {
      Err(DimensionError::Mismatch { lhs: self.dimension, rhs: other.dimension })
    }
  }

  /// Back into the static world: succeeds iff `self` has exactly the dimension of `D`.
  pub fn try_into_quantity<D: Dimension>(self) -> Result<Quantity<D>, DimensionError> {
    if self.dimension == D::VECTOR {
      Ok(Quantity::new(self.value))
    } else {
      Err(DimensionError::Mismatch { lhs: self.dimension, rhs: D::VECTOR })
    }
  }

  pub fn try_add(self, other: Self) -> Result<Self, DimensionError> {
    self.check_same(other)?;
    Ok(Self::new(self.value + other.value, self.dimension))
  }

  pub fn try_sub(self, other: Self) -> Result<Self, DimensionError> {
    self.check_same(other)?;
    Ok(Self::new(self.value - other.value, self.dimension))
  }

  /// Remainder with the sign of `self`, like [`Quantity::fmod`].
  pub fn try_rem(self, other: Self) -> Result<Self, DimensionError> {
    self.check_same(other)?;
    Ok(Self::new(self.value % other.value, self.dimension))
  }

  /// Compare two quantities of the same dimension; `Ok(None)` if either is NaN.
  pub fn try_cmp(self, other: Self) -> Result<Option<Ordering>, DimensionError> {
    self.check_same(other)?;
    Ok(self.value.partial_cmp(&other.value))
  }

  /// The value of `self` in multiples of `unit`, like [`Quantity::convert_to`].
  pub fn try_convert_to(self, unit: Self) -> Result<f64, DimensionError> {
    self.check_same(unit)?;
    Ok(self.value / unit.value)
  }

  pub fn checked_mul(self, other: Self) -> Result<Self, DimensionError> {
    let dimension = self.dimension.checked_add(&other.dimension)
      .ok_or(DimensionError::ExponentOverflow)?;
    Ok(Self::new(self.value * other.value, dimension))
  }

  pub fn checked_div(self, other: Self) -> Result<Self, DimensionError> {
    let dimension = self.dimension.checked_sub(&other.dimension)
      .ok_or(DimensionError::ExponentOverflow)?;
    Ok(Self::new(self.value / other.value, dimension))
  }

  /// `self` to the rational power `exponent`.
  pub fn checked_pow(self, exponent: Ratio) -> Result<Self, DimensionError> {
    let dimension = self.dimension.checked_scale(exponent)
      .ok_or(DimensionError::ExponentOverflow)?;
    let value = if exponent.is_integer() && i32::try_from(exponent.num()).is_ok() {
      self.value.powi(exponent.num() as i32)
    } else {
      self.value.powf(exponent.to_f64())
    };
    Ok(Self::new(value, dimension))
  }

  /// Square root, under the same rule as [`Quantity::sqrt`]: every exponent needs an even
  /// numerator.
  pub fn checked_sqrt(self) -> Result<Self, DimensionError> {
    if !self.dimension.has_even_numerators() {
      return Err(DimensionError::OddRoot(self.dimension))
    }
    let dimension = self.dimension.checked_scale(Ratio::HALF)
      .ok_or(DimensionError::ExponentOverflow)?;
    Ok(Self::new(self.value.sqrt(), dimension))
  }

  /// Multiply by a bare number.
  pub fn scale(self, factor: f64) -> Self {
    Self::new(self.value * factor, self.dimension)
  }
}

impl<D: Dimension> From<Quantity<D>> for DynQuantity {
  fn from(q: Quantity<D>) -> Self {
    Self::new(q.canonical_value(), D::VECTOR)
  }
}

/// The value, then the dimension in brackets: `2.5 [m s^-1]`. Formatting options apply to the
/// value.
impl core::fmt::Display for DynQuantity {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Display::fmt(&self.value, f)?;
    write!(f, " [{}]", self.dimension)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::ENTRIES;
  use crate::dimension::BaseDimension;
  use crate::literal::*;
  use crate::{Area, Energy, Length, Time};

  #[test]
  fn round_trip() {
    let d = DynQuantity::from(km(2.0));
    assert_eq!(d.canonical_value(), 2000.0);
    assert_eq!(d.dimension(), Length::DIMENSION);
    assert_eq!(d.try_into_quantity::<crate::dims::Length>(), Ok(km(2.0)));
    assert_eq!(
      d.try_into_quantity::<crate::dims::Time>(),
      Err(DimensionError::Mismatch { lhs: Length::DIMENSION, rhs: Time::DIMENSION }),
    );
  }

  #[test]
  fn rejects_every_mismatched_catalog_pair() {
    for a in ENTRIES {
      for b in ENTRIES {
        let x = DynQuantity::new(1.0, a.vector);
        let y = DynQuantity::new(2.0, b.vector);
        if a.vector == b.vector {
          assert_eq!(x.try_add(y).map(DynQuantity::canonical_value), Ok(3.0));
          assert_eq!(x.try_cmp(y), Ok(Some(Ordering::Less)));
        } else {
          let mismatch = Err(DimensionError::Mismatch { lhs: a.vector, rhs: b.vector });
          assert_eq!(x.try_add(y), mismatch, "{} + {}", a.name, b.name);
          assert_eq!(x.try_sub(y), mismatch, "{} - {}", a.name, b.name);
          assert_eq!(x.try_rem(y), mismatch, "{} % {}", a.name, b.name);
          assert_eq!(x.try_cmp(y), mismatch.map(|_: DynQuantity| None), "{} < {}", a.name, b.name);
          assert!(x.try_convert_to(y).is_err());
        }
      }
    }
  }

  #[test]
  fn mul_div() {
    let e = DynQuantity::from(kg(2.0)).checked_mul(DynQuantity::from(mps(3.0))).unwrap();
    let e = e.checked_mul(DynQuantity::from(mps(3.0))).unwrap();
    assert_eq!(e.try_into_quantity::<crate::dims::Energy>(), Ok(Energy::new(18.0)));
    let v = DynQuantity::from(m(6.0)).checked_div(DynQuantity::from(s(2.0))).unwrap();
    assert_eq!(v.try_convert_to(DynQuantity::from(mps(1.0))), Ok(3.0));
  }

  #[test]
  fn pow_and_sqrt() {
    let a = DynQuantity::from(Area::new(9.0));
    let side = a.checked_sqrt().unwrap();
    assert_eq!(side, DynQuantity::from(Length::new(3.0)));
    assert_eq!(
      side.checked_sqrt(),
      Err(DimensionError::OddRoot(Length::DIMENSION)),
    );
    let root = side.checked_pow(Ratio::HALF).unwrap();
    assert_eq!(root.dimension()[BaseDimension::Length], Ratio::HALF);
    let cube = side.checked_pow(Ratio::integer(3)).unwrap();
    assert_eq!(cube.canonical_value(), 27.0);
  }

  #[test]
  fn overflow() {
    let huge = DimensionVector::from_integers([i64::MAX, 0, 0, 0, 0, 0, 0, 0, 0]);
    let q = DynQuantity::new(1.0, huge);
    assert_eq!(q.checked_mul(q), Err(DimensionError::ExponentOverflow));
    assert_eq!(q.checked_pow(Ratio::integer(2)), Err(DimensionError::ExponentOverflow));
    assert!(q.checked_div(q).is_ok());
  }

  #[test]
  fn display() {
    assert_eq!(format!("{}", DynQuantity::from(mps(2.5))).as_str(), "2.5 [m s^-1]");
    assert_eq!(format!("{:.2}", DynQuantity::number(0.3)).as_str(), "0.30 [1]");
    let err = DynQuantity::from(m(1.0)).try_add(DynQuantity::from(s(1.0))).unwrap_err();
    assert_eq!(err.to_string().as_str(), "dimension mismatch: [m] vs [s]");
  }
}
