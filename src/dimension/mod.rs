//! The dimension engine: exact rational exponent vectors, and the type-level machinery that
//! attaches them to [`Quantity`](crate::Quantity).
//!
//! A dimension is a zero-sized *type* implementing [`Dimension`], whose associated const
//! [`Dimension::VECTOR`] is its exponent vector. Because the vector is a const, everything done to
//! it happens at compile time: at runtime a quantity carries nothing but its `f64`.
//!
//! There are two kinds of dimension types:
//!
//!   - [`Dim`], which spells out nine integer exponents. All the named catalog types (`Length`,
//!     `Energy`, ...) are `Dim`s, so two catalog entries with the same exponents (`Torque` and
//!     `Energy`) are literally the same type.
//!   - The combinators [`Product`], [`Quotient`], [`Inverse`] and [`Raised`], which are what
//!     arithmetic on quantities produces. Their vectors are computed from their operands' by the
//!     `const fn`s on [`DimensionVector`].
//!
//! Stable Rust cannot normalise `Product<Length, Length>` into `Dim<2, 0, ..>` at the type level,
//! so the two are different types with the same `VECTOR`. Wherever that matters, operations
//! compare **vectors**, not types: `a + b` compiles whenever `a` and `b` have equal vectors
//! whatever their types, and [`Quantity::cast`](crate::Quantity::cast) re-tags a value with an
//! equal-vector type, e.g. to store a product in a variable declared as `Area`.
//!
//! Every build-time check and every exponent computation panics in const evaluation on failure,
//! which makes a dimension error a build error.

use core::marker::PhantomData;

/// Exact rational exponents.
mod ratio;
pub use ratio::Ratio;

/// Exponent vectors and their base axes.
mod vector;
pub use vector::{BaseDimension, DimensionVector};

/// Const-buildable text, for compile-time diagnostics.
mod label;
pub use label::Label;

/// Compile-time assertions.
pub(crate) mod check;

/// Proptest strategies.
#[cfg(test)]
mod test;

/// A type-level dimension. See the [module documentation](self).
///
/// Implementing this for your own marker type is one way of declaring a new dimension; the
/// simpler way is a type alias of [`Dim`]. An invalid `VECTOR` (e.g. built with
/// `Ratio::new(1, 0)`) fails to compile as soon as it is used.
pub trait Dimension: 'static {
  /// The exponent vector.
  const VECTOR: DimensionVector;
}

/// The dimension with integer exponents `L` (length), `T` (time), `M` (mass), `I` (electric
/// current), `TH` (temperature), `N` (amount of substance), `J` (luminous intensity), `A` (plane
/// angle), and `SA` (solid angle).
///
/// ```
/// # use astro_units::dimension::{Dim, Dimension, BaseDimension, Ratio};
/// type Speed = Dim<1, -1, 0, 0, 0, 0, 0, 0, 0>;
/// assert_eq!(Speed::VECTOR[BaseDimension::Time], Ratio::integer(-1));
/// ```
pub struct Dim<
  const L: i64,
  const T: i64,
  const M: i64,
  const I: i64,
  const TH: i64,
  const N: i64,
  const J: i64,
  const A: i64,
  const SA: i64,
>;

impl<
  const L: i64,
  const T: i64,
  const M: i64,
  const I: i64,
  const TH: i64,
  const N: i64,
  const J: i64,
  const A: i64,
  const SA: i64,
> Dimension for Dim<L, T, M, I, TH, N, J, A, SA> {
  const VECTOR: DimensionVector = DimensionVector::from_integers([L, T, M, I, TH, N, J, A, SA]);
}

/// The dimension of a pure number.
pub type Dimensionless = Dim<0, 0, 0, 0, 0, 0, 0, 0, 0>;

/// The dimension of `A * B`: exponents added.
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Dimension, B: Dimension> Dimension for Product<A, B> {
  const VECTOR: DimensionVector = check::product(&A::VECTOR, &B::VECTOR);
}

/// The dimension of `A / B`: exponents subtracted.
pub struct Quotient<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Dimension, B: Dimension> Dimension for Quotient<A, B> {
  const VECTOR: DimensionVector = check::quotient(&A::VECTOR, &B::VECTOR);
}

/// The dimension of `1 / A`: exponents negated.
pub struct Inverse<A>(PhantomData<fn() -> A>);

impl<A: Dimension> Dimension for Inverse<A> {
  const VECTOR: DimensionVector = check::quotient(&DimensionVector::DIMENSIONLESS, &A::VECTOR);
}

/// The dimension of `A` to the power `N / D`: exponents multiplied by `N / D`.
///
/// `D == 0`, or a resulting exponent that does not fit [`Ratio`], is a compile-time error.
pub struct Raised<A, const N: i64, const D: i64>(PhantomData<fn() -> A>);

impl<A: Dimension, const N: i64, const D: i64> Dimension for Raised<A, N, D> {
  const VECTOR: DimensionVector = check::raised(&A::VECTOR, N, D);
}

#[cfg(test)]
mod tests {
  use super::*;

  type Length = Dim<1, 0, 0, 0, 0, 0, 0, 0, 0>;
  type Time = Dim<0, 1, 0, 0, 0, 0, 0, 0, 0>;
  type Mass = Dim<0, 0, 1, 0, 0, 0, 0, 0, 0>;
  type Energy = Dim<2, -2, 1, 0, 0, 0, 0, 0, 0>;

  #[test]
  fn dim() {
    assert_eq!(Length::VECTOR, DimensionVector::base(BaseDimension::Length));
    assert!(Dimensionless::VECTOR.is_dimensionless());
    assert_eq!(
      <Dim<0, 0, 0, 0, 0, 0, 0, 0, -1>>::VECTOR[BaseDimension::SolidAngle],
      Ratio::integer(-1),
    );
  }

  #[test]
  fn combinators() {
    type Speed = Quotient<Length, Time>;
    type Area = Product<Length, Length>;
    assert_eq!(Speed::VECTOR, <Dim<1, -1, 0, 0, 0, 0, 0, 0, 0>>::VECTOR);
    assert_eq!(Area::VECTOR, <Dim<2, 0, 0, 0, 0, 0, 0, 0, 0>>::VECTOR);
    assert_eq!(Inverse::<Time>::VECTOR, <Dim<0, -1, 0, 0, 0, 0, 0, 0, 0>>::VECTOR);
    assert_eq!(Raised::<Length, 3, 1>::VECTOR, <Dim<3, 0, 0, 0, 0, 0, 0, 0, 0>>::VECTOR);
    assert_eq!(Raised::<Area, 1, 2>::VECTOR, Length::VECTOR);
    assert_eq!(Raised::<Length, -3, 6>::VECTOR[BaseDimension::Length], Ratio::new(-1, 2));
  }

  #[test]
  fn energy_from_base_dimensions() {
    type Derived = Product<Mass, Raised<Quotient<Length, Time>, 2, 1>>;
    assert_eq!(Derived::VECTOR, Energy::VECTOR);
  }
}
