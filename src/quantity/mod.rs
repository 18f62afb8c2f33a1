//! This module and its submodules implement [`Quantity`], a `f64` tagged at the type level with a
//! [`Dimension`], and all the arithmetic on it.
//!
//! The rules, in one place:
//!
//!   - `+`, `-`, `%`, `==`, `<` (and friends), [`fmod`](Quantity::fmod),
//!     [`cast`](Quantity::cast) and [`convert_to`](Quantity::convert_to) need both operands to
//!     have **exactly** the same dimension vector. Anything else does not compile.
//!   - `*` and `/` between quantities always compile; the result's dimension is the sum or the
//!     difference of the operands' ([`Product`], [`Quotient`]).
//!   - `*` and `/` by a bare `f64` keep the dimension, except `f64 / q` which inverts it
//!     ([`Inverse`]).
//!   - Powers multiply every exponent: [`pow`](Quantity::pow), [`pow_ratio`](Quantity::pow_ratio),
//!     [`squared`](Quantity::squared), [`sqrt`](Quantity::sqrt).
//!
//! None of this ever changes the number: the scalar of a result is exactly what plain `f64`
//! arithmetic on the operands' scalars gives.

use crate::dimension::{Dimension, DimensionVector, Dimensionless, Inverse, Product, Quotient, Raised};
use crate::dimension::check::{Evaluated, EvenRoot, SameDimension};

use core::marker::PhantomData;

/// A physical quantity: a single `f64` in canonical (SI) units, whose dimension `D` is part of its
/// type.
///
/// A `Quantity` has exactly the size and layout of an `f64`; the dimension exists only at compile
/// time. Operations that would mix incompatible dimensions are rejected by the compiler:
///
/// ```
/// use astro_units::{Length, Time, Speed, literal::*};
///
/// let d: Length = km(2.3) + m(3.2);
/// let t: Time = s(4.0);
/// let v: Speed = (d / t).cast();
/// assert!((v.convert_to(m(1.0) / s(1.0)) - 575.8).abs() < 1e-9);
/// ```
///
/// ```compile_fail
/// use astro_units::literal::*;
///
/// let nonsense = km(2.3) + s(4.0);  // error: dimension mismatch: [m] vs [s]
/// ```
///
/// Comparisons accept any right-hand dimension type with an equal vector, so the right-hand
/// side must have a known type: `q == Quantity::new(1.0)` or `q == Default::default()` need an
/// annotation.
///
/// ```
/// use astro_units::{Area, Length, Quantity};
///
/// let q = Length::new(1.0);
/// assert!(q == Length::new(1.0));
/// assert!(q > Length::ZERO);
/// assert!(q == Quantity::<astro_units::dims::Length>::default() + q);
/// assert!(q * q == Area::new(1.0));
/// ```
//
// `PhantomData<fn() -> D>` rather than `PhantomData<D>`, so that `Quantity<D>` is `Send`, `Sync`,
// etc. whatever the marker type `D` is.
#[repr(transparent)]
pub struct Quantity<D: Dimension>(f64, PhantomData<fn() -> D>);

/// Construction, dimension introspection, re-tagging, unit conversion, and the `const` arithmetic
/// used to build unit constants.
mod basics;

/// Manual impls of `Clone`, `PartialEq`, etc.
mod traits;

/// Display and Debug.
mod fmt;

/// Negation.
mod unary;

/// Binary operators.
mod ops;

/// Rounding, powers and roots, and elementary functions.
mod math;

/// Proptest strategies.
#[cfg(test)]
mod test;
