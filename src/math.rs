//! Free-function forms of the math on [`Quantity`], for formulas that read better that way:
//! `sqrt(b.squared() - 4.0 * a * c)` rather than `(b.squared() - 4.0 * a * c).sqrt()`.
//!
//! Each function is the method of the same (or the C) name; see there for details.

use crate::dimension::{Dimension, Dimensionless, Raised};
use crate::dims::Angle;
use crate::Quantity;

pub fn fabs<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
  q.abs()
}

pub fn floor<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
  q.floor()
}

pub fn ceil<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
  q.ceil()
}

pub fn round<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
  q.round()
}

pub fn fmod<D: Dimension, E: Dimension>(a: Quantity<D>, b: Quantity<E>) -> Quantity<D> {
  a.fmod(b)
}

pub fn sqrt<D: Dimension>(q: Quantity<D>) -> Quantity<Raised<D, 1, 2>> {
  q.sqrt()
}

/// `q` to the integer power `N`. Call as `pow::<3, _>(q)`.
pub fn pow<const N: i64, D: Dimension>(q: Quantity<D>) -> Quantity<Raised<D, N, 1>> {
  q.pow::<N>()
}

/// `q` to the rational power `NUM / DEN`. Call as `pow_ratio::<1, 3, _>(q)`.
pub fn pow_ratio<
  const NUM: i64,
  const DEN: i64,
  D: Dimension,
>(q: Quantity<D>) -> Quantity<Raised<D, NUM, DEN>> {
  q.pow_ratio::<NUM, DEN>()
}

pub const fn squared<D: Dimension>(q: Quantity<D>) -> Quantity<Raised<D, 2, 1>> {
  q.squared()
}

pub fn sin(a: Quantity<Angle>) -> Quantity<Dimensionless> {
  a.sin()
}

pub fn cos(a: Quantity<Angle>) -> Quantity<Dimensionless> {
  a.cos()
}

pub fn tan(a: Quantity<Angle>) -> Quantity<Dimensionless> {
  a.tan()
}

pub fn asin(x: Quantity<Dimensionless>) -> Quantity<Angle> {
  x.asin()
}

pub fn acos(x: Quantity<Dimensionless>) -> Quantity<Angle> {
  x.acos()
}

pub fn atan(x: Quantity<Dimensionless>) -> Quantity<Angle> {
  x.atan()
}

pub fn atan2<D: Dimension, E: Dimension>(y: Quantity<D>, x: Quantity<E>) -> Quantity<Angle> {
  y.atan2(x)
}

pub fn exp(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.exp()
}

pub fn expm1(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.exp_m1()
}

pub fn log(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.ln()
}

pub fn sinh(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.sinh()
}

pub fn cosh(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.cosh()
}

pub fn tanh(x: Quantity<Dimensionless>) -> Quantity<Dimensionless> {
  x.tanh()
}

/// The Heaviside step: `1` if `q >= 0`, else `0`. NaN gives `0`.
pub fn step_function<D: Dimension>(q: Quantity<D>) -> Quantity<Dimensionless> {
  Quantity::new(if q.canonical_value() >= 0.0 {1.0} else {0.0})
}
