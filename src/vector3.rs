//! Three-vectors of quantities, e.g. positions (`Vector3<dims::Length>`) or magnetic fields
//! (`Vector3<dims::MagneticField>`).
//!
//! Angles follow the physics convention: `phi` in `[-π, π]` is the azimuth in the `x`-`y` plane
//! (`0` along `x`), and `theta` in `[0, π]` is the zenith angle (`0` along `z`).

use crate::dimension::{Dimension, Dimensionless, Product};
use crate::dims::Angle;
use crate::Quantity;

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// Three quantities of the same dimension `D`.
pub struct Vector3<D: Dimension> {
  pub x: Quantity<D>,
  pub y: Quantity<D>,
  pub z: Quantity<D>,
}

// Manual impls: no bounds on the marker `D`.

impl<D: Dimension> Clone for Vector3<D> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<D: Dimension> Copy for Vector3<D> {}

impl<D: Dimension> PartialEq for Vector3<D> {
  fn eq(&self, other: &Self) -> bool {
    self.x == other.x && self.y == other.y && self.z == other.z
  }
}

impl<D: Dimension> Default for Vector3<D> {
  fn default() -> Self {
    Self::ZERO
  }
}

impl<D: Dimension> core::fmt::Debug for Vector3<D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Vector3")
      .field("x", &self.x.canonical_value())
      .field("y", &self.y.canonical_value())
      .field("z", &self.z.canonical_value())
      .field("dimension", &format_args!("{}", D::VECTOR))
      .finish()
  }
}

impl<D: Dimension> Vector3<D> {
  pub const ZERO: Self = Self::splat(Quantity::ZERO);

  pub const fn new(x: Quantity<D>, y: Quantity<D>, z: Quantity<D>) -> Self {
    Self { x, y, z }
  }

  /// All three components equal to `q`.
  pub const fn splat(q: Quantity<D>) -> Self {
    Self::new(q, q, q)
  }

  /// The vector with norm `r`, zenith angle `theta` and azimuth `phi`.
  pub fn from_spherical(r: Quantity<D>, theta: Quantity<Angle>, phi: Quantity<Angle>) -> Self {
    let (sin_theta, cos_theta) = theta.canonical_value().sin_cos();
    let (sin_phi, cos_phi) = phi.canonical_value().sin_cos();
    Self::new(r * (sin_theta * cos_phi), r * (sin_theta * sin_phi), r * cos_theta)
  }

  /// The canonical values of the components.
  pub fn canonical_value(self) -> [f64; 3] {
    [self.x.canonical_value(), self.y.canonical_value(), self.z.canonical_value()]
  }

  fn from_values([x, y, z]: [f64; 3]) -> Self {
    Self::new(Quantity::new(x), Quantity::new(y), Quantity::new(z))
  }

  fn map(self, f: impl Fn(Quantity<D>) -> Quantity<D>) -> Self {
    Self::new(f(self.x), f(self.y), f(self.z))
  }

  /// The Euclidean norm.
  pub fn r(self) -> Quantity<D> {
    let [x, y, z] = self.canonical_value();
    Quantity::new((x * x + y * y + z * z).sqrt())
  }

  /// The azimuth, in `[-π, π]`; `0` on the `z` axis.
  pub fn phi(self) -> Quantity<Angle> {
    let [x, y, _] = self.canonical_value();
    if x.abs() < f64::MIN_POSITIVE && y.abs() < f64::MIN_POSITIVE {
      Quantity::ZERO
    } else {
      Quantity::new(y.atan2(x))
    }
  }

  /// The zenith angle, in `[0, π]`; `0` for the zero vector.
  pub fn theta(self) -> Quantity<Angle> {
    let [x, y, z] = self.canonical_value();
    if x.abs() < f64::MIN_POSITIVE && y.abs() < f64::MIN_POSITIVE && z.abs() < f64::MIN_POSITIVE {
      Quantity::ZERO
    } else {
      Quantity::new((x * x + y * y).sqrt().atan2(z))
    }
  }

  /// The unit vector in the direction of increasing `theta` at `self`.
  pub fn unit_vector_theta(self) -> Vector3<Dimensionless> {
    let (sin_theta, cos_theta) = self.theta().canonical_value().sin_cos();
    let (sin_phi, cos_phi) = self.phi().canonical_value().sin_cos();
    Vector3::from_values([cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta])
  }

  /// The unit vector in the direction of increasing `phi` at `self`.
  pub fn unit_vector_phi(self) -> Vector3<Dimensionless> {
    let (sin_phi, cos_phi) = self.phi().canonical_value().sin_cos();
    Vector3::from_values([-sin_phi, cos_phi, 0.0])
  }

  /// The angle between `self` and `other`, in `[0, π]`.
  pub fn angle_to<E: Dimension>(self, other: Vector3<E>) -> Quantity<Angle> {
    let cos = self.dot(other).canonical_value()
      / (self.r().canonical_value() * other.r().canonical_value());
    if cos >= 1.0 {
      Quantity::ZERO
    } else if cos <= -1.0 {
      Quantity::new(core::f64::consts::PI)
    } else {
      Quantity::new(cos.acos())
    }
  }

  /// `self` rotated by `angle` around `axis` (right-handed). `axis` need not be normalised.
  pub fn rotated<E: Dimension>(self, axis: Vector3<E>, angle: Quantity<Angle>) -> Self {
    let norm = axis.r().canonical_value();
    let [kx, ky, kz] = axis.canonical_value().map(|c| c / norm);
    let k = Vector3::<Dimensionless>::from_values([kx, ky, kz]);
    let (sin, cos) = angle.canonical_value().sin_cos();
    let [vx, vy, vz] = self.canonical_value();
    let [cx, cy, cz] = k.cross(self).canonical_value();
    let along = k.dot(self).canonical_value() * (1.0 - cos);
    Self::from_values([
      vx * cos + cx * sin + kx * along,
      vy * cos + cy * sin + ky * along,
      vz * cos + cz * sin + kz * along,
    ])
  }

  pub fn dot<E: Dimension>(self, other: Vector3<E>) -> Quantity<Product<D, E>> {
    self.x * other.x + self.y * other.y + self.z * other.z
  }

  pub fn cross<E: Dimension>(self, other: Vector3<E>) -> Vector3<Product<D, E>> {
    Vector3::new(
      self.y * other.z - other.y * self.z,
      self.z * other.x - other.z * self.x,
      self.x * other.y - other.x * self.y,
    )
  }

  /// Every component restricted to `[lower, upper]`.
  pub fn clip(self, lower: Quantity<D>, upper: Quantity<D>) -> Self {
    self.map(|c| c.min(upper).max(lower))
  }

  pub fn abs(self) -> Self {
    self.map(Quantity::abs)
  }

  pub fn floor(self) -> Self {
    self.map(Quantity::floor)
  }

  pub fn ceil(self) -> Self {
    self.map(Quantity::ceil)
  }

  /// The smallest component.
  pub fn min_element(self) -> Quantity<D> {
    self.x.min(self.y).min(self.z)
  }

  /// The largest component.
  pub fn max_element(self) -> Quantity<D> {
    self.x.max(self.y).max(self.z)
  }
}

impl<D: Dimension> Add for Vector3<D> {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}

impl<D: Dimension> Sub for Vector3<D> {
  type Output = Self;

  fn sub(self, rhs: Self) -> Self {
    Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}

impl<D: Dimension> Neg for Vector3<D> {
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|c| -c)
  }
}

/// Component-wise remainder, with the sign of `self`.
impl<D: Dimension> Rem for Vector3<D> {
  type Output = Self;

  fn rem(self, rhs: Self) -> Self {
    Self::new(self.x % rhs.x, self.y % rhs.y, self.z % rhs.z)
  }
}

/// Remainder of every component by `rhs`.
impl<D: Dimension> Rem<Quantity<D>> for Vector3<D> {
  type Output = Self;

  fn rem(self, rhs: Quantity<D>) -> Self {
    self.map(|c| c % rhs)
  }
}

impl<D: Dimension> Mul<f64> for Vector3<D> {
  type Output = Self;

  fn mul(self, rhs: f64) -> Self {
    self.map(|c| c * rhs)
  }
}

impl<D: Dimension> Mul<Vector3<D>> for f64 {
  type Output = Vector3<D>;

  fn mul(self, rhs: Vector3<D>) -> Vector3<D> {
    rhs * self
  }
}

/// Every component times a quantity.
impl<D: Dimension, E: Dimension> Mul<Quantity<E>> for Vector3<D> {
  type Output = Vector3<Product<D, E>>;

  fn mul(self, rhs: Quantity<E>) -> Self::Output {
    Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
  }
}

impl<D: Dimension> Div<f64> for Vector3<D> {
  type Output = Self;

  fn div(self, rhs: f64) -> Self {
    self.map(|c| c / rhs)
  }
}

impl<D: Dimension> AddAssign for Vector3<D> {
  fn add_assign(&mut self, rhs: Self) {
    *self = *self + rhs
  }
}

impl<D: Dimension> SubAssign for Vector3<D> {
  fn sub_assign(&mut self, rhs: Self) {
    *self = *self - rhs
  }
}

impl<D: Dimension> MulAssign<f64> for Vector3<D> {
  fn mul_assign(&mut self, rhs: f64) {
    *self = *self * rhs
  }
}

impl<D: Dimension> DivAssign<f64> for Vector3<D> {
  fn div_assign(&mut self, rhs: f64) {
    *self = *self / rhs
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::literal::*;
  use crate::{dims, Length, MagneticField, Number};
  use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

  type Position = Vector3<dims::Length>;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
  }

  fn close_vec<D: Dimension>(a: Vector3<D>, b: [f64; 3]) -> bool {
    a.canonical_value().iter().zip(b).all(|(&x, y)| close(x, y))
  }

  #[test]
  fn norm_and_angles() {
    let v = Position::new(m(3.0), m(4.0), m(0.0));
    assert_eq!(v.r(), m(5.0));
    assert!(close(v.theta().canonical_value(), FRAC_PI_2));
    assert!(close(v.phi().canonical_value(), 4.0f64.atan2(3.0)));
    assert_eq!(Position::ZERO.phi(), rad(0.0));
    assert_eq!(Position::ZERO.theta(), rad(0.0));
    assert_eq!(Position::new(m(0.0), m(0.0), m(-1.0)).theta(), rad(PI));
  }

  #[test]
  fn spherical_round_trip() {
    let v = Position::from_spherical(kpc(8.5), rad(1.0), rad(-2.0));
    assert!((v.r().convert_to(kpc(1.0)) - 8.5).abs() < 1e-12);
    assert!(close(v.theta().canonical_value(), 1.0));
    assert!(close(v.phi().canonical_value(), -2.0));
  }

  #[test]
  fn unit_vectors() {
    let v = Position::new(m(1.0), m(0.0), m(0.0));
    assert!(close_vec(v.unit_vector_theta(), [0.0, 0.0, -1.0]));
    assert!(close_vec(v.unit_vector_phi(), [0.0, 1.0, 0.0]));
  }

  #[test]
  fn dot_cross() {
    let a = Position::new(m(1.0), m(0.0), m(0.0));
    let b = Position::new(m(0.0), m(2.0), m(0.0));
    assert_eq!(a.dot(b), m2(0.0));
    assert_eq!(a.dot(a), m2(1.0));
    let c = a.cross(b);
    assert_eq!(c.canonical_value(), [0.0, 0.0, 2.0]);
    assert_eq!(c.z.dimension(), crate::Area::DIMENSION);
  }

  #[test]
  fn angle_to() {
    let a = Position::new(m(1.0), m(0.0), m(0.0));
    let b = Position::new(m(1.0), m(1.0), m(0.0));
    assert!(close(a.angle_to(b).canonical_value(), FRAC_PI_4));
    assert_eq!(a.angle_to(a), rad(0.0));
    assert_eq!(a.angle_to(-a), rad(PI));
  }

  #[test]
  fn rotated() {
    let v = Position::new(m(1.0), m(0.0), m(0.0));
    let z = Vector3::<dims::Number>::new(Number::ZERO, Number::ZERO, Number::new(2.0));
    assert!(close_vec(v.rotated(z, rad(FRAC_PI_2)), [0.0, 1.0, 0.0]));
    assert!(close_vec(v.rotated(z, rad(PI)), [-1.0, 0.0, 0.0]));
  }

  #[test]
  fn elementwise() {
    let v = Position::new(m(-1.5), m(2.5), m(7.0));
    assert_eq!(v.abs().canonical_value(), [1.5, 2.5, 7.0]);
    assert_eq!(v.floor().canonical_value(), [-2.0, 2.0, 7.0]);
    assert_eq!(v.ceil().canonical_value(), [-1.0, 3.0, 7.0]);
    assert_eq!(v.clip(m(-1.0), m(3.0)).canonical_value(), [-1.0, 2.5, 3.0]);
    assert_eq!(v.min_element(), m(-1.5));
    assert_eq!(v.max_element(), m(7.0));
    assert_eq!((v % m(2.0)).canonical_value(), [-1.5, 0.5, 1.0]);
    assert_eq!((v % Position::splat(m(3.0))).canonical_value(), [-1.5, 2.5, 1.0]);
  }

  #[test]
  fn arithmetic() {
    let mut v = Position::splat(m(1.0));
    v += Position::new(m(1.0), m(2.0), m(3.0));
    v -= Position::splat(m(0.5));
    assert_eq!(v.canonical_value(), [1.5, 2.5, 3.5]);
    v *= 2.0;
    v /= 0.5;
    assert_eq!((2.0 * v).canonical_value(), [12.0, 20.0, 28.0]);
    let b: Vector3<dims::MagneticField> = Vector3::splat(muG(1.0));
    let flux = b * m2(2.0);
    assert_eq!(flux.x.dimension(), (MagneticField::new(1.0) * m2(1.0)).dimension());
    assert_eq!(Length::new(1.0) * 0.0, Position::default().x);
  }
}
