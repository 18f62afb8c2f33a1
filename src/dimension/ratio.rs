use core::fmt::{Debug, Display};

/// An exact rational number `num / den`, used for the exponent of one base dimension.
///
/// A `Ratio` is always kept in lowest terms with a strictly positive denominator, so that the
/// derived `PartialEq` (field by field) is exactly rational equality; there is no tolerance
/// anywhere. Zero is represented as `0 / 1`.
///
/// All arithmetic is `const`, so that it can run inside the associated consts of the type-level
/// dimension engine. Every operation comes in two flavours:
///
///   - `checked_*`, which returns `None` if the exact result is not representable (the reduced
///     numerator or denominator does not fit in an `i64`, or a division by zero);
///   - `strict_*`, which panics instead. Evaluated in a const context, this panic is a
///     compile-time error.
///
/// Intermediate results are computed in `i128`, where the products of two `i64` cannot
/// overflow, and only then reduced and narrowed back. So e.g. `(2^62 / 3) * (3 / 2)` succeeds
/// even though the unreduced numerator would overflow an `i64`.
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct Ratio {
  num: i64,
  den: i64,
}

/// Greatest common divisor, by Euclid's algorithm. `gcd(0, b) == b`.
const fn gcd(mut a: u128, mut b: u128) -> u128 {
  while b != 0 {
    let t = a % b;
    a = b;
    b = t;
  }
  a
}

impl Ratio {
  /// Zero, the exponent of every axis a quantity does not depend on.
  pub const ZERO: Self = Self { num: 0, den: 1 };

  /// One.
  pub const ONE: Self = Self { num: 1, den: 1 };

  /// One half, the factor applied by a square root.
  pub const HALF: Self = Self { num: 1, den: 2 };

  /// Reduce `num / den` to lowest terms with a positive denominator, and narrow it to `i64`s.
  /// Returns `None` on a zero denominator or if the reduced fraction does not fit.
  const fn from_wide(num: i128, den: i128) -> Option<Self> {
    if den == 0 {
      return None
    }
    // `den != 0`, so `g >= 1`. Callers never pass magnitudes above 2^127 - 2^64, so `g` fits an
    // `i128` as well.
    let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
    let (mut num, mut den) = (num / g, den / g);
    if den < 0 {
      num = -num;
      den = -den;
    }
    if num < i64::MIN as i128 || num > i64::MAX as i128 || den > i64::MAX as i128 {
      return None
    }
    Some(Self { num: num as i64, den: den as i64 })
  }

  /// Construct the ratio `num / den`, reducing it to lowest terms. Returns `None` if `den` is
  /// zero, or in the single case `i64::MIN / -1`, whose normal form is not representable.
  pub const fn checked_new(num: i64, den: i64) -> Option<Self> {
    Self::from_wide(num as i128, den as i128)
  }

  /// Construct the ratio `num / den`, reducing it to lowest terms.
  ///
  /// # Panics
  ///
  /// If `den` is zero, or `num / den` is `i64::MIN / -1`.
  pub const fn new(num: i64, den: i64) -> Self {
    match Self::checked_new(num, den) {
      Some(ratio) => ratio,
      None => panic!("Invalid dimension exponent: zero denominator or out of range"),
    }
  }

  /// The ratio `n / 1`.
  pub const fn integer(n: i64) -> Self {
    Self { num: n, den: 1 }
  }

  /// Numerator, in lowest terms (carries the sign).
  #[inline]
  pub const fn num(self) -> i64 {
    self.num
  }

  /// Denominator, in lowest terms (always `>= 1`).
  #[inline]
  pub const fn den(self) -> i64 {
    self.den
  }

  #[inline]
  pub const fn is_zero(self) -> bool {
    self.num == 0
  }

  #[inline]
  pub const fn is_integer(self) -> bool {
    self.den == 1
  }

  /// Exact equality, usable in `const` contexts (where `==` is not).
  #[inline]
  pub const fn same_as(self, other: Self) -> bool {
    self.num == other.num && self.den == other.den
  }

  /// The nearest `f64`; used to compute the scalar part of rational powers.
  #[inline]
  pub fn to_f64(self) -> f64 {
    self.num as f64 / self.den as f64
  }

  pub const fn checked_add(self, other: Self) -> Option<Self> {
    // Each product is below 2^126 in absolute value, so neither they nor their sum overflow.
    let num = self.num as i128 * other.den as i128 + other.num as i128 * self.den as i128;
    let den = self.den as i128 * other.den as i128;
    Self::from_wide(num, den)
  }

  pub const fn checked_sub(self, other: Self) -> Option<Self> {
    let num = self.num as i128 * other.den as i128 - other.num as i128 * self.den as i128;
    let den = self.den as i128 * other.den as i128;
    Self::from_wide(num, den)
  }

  pub const fn checked_mul(self, other: Self) -> Option<Self> {
    Self::from_wide(
      self.num as i128 * other.num as i128,
      self.den as i128 * other.den as i128,
    )
  }

  /// Returns `None` also if `other` is zero.
  pub const fn checked_div(self, other: Self) -> Option<Self> {
    Self::from_wide(
      self.num as i128 * other.den as i128,
      self.den as i128 * other.num as i128,
    )
  }

  pub const fn checked_neg(self) -> Option<Self> {
    Self::from_wide(-(self.num as i128), self.den as i128)
  }

  /// As [`Self::checked_add`], but panics if the result is not representable.
  pub const fn strict_add(self, other: Self) -> Self {
    match self.checked_add(other) {
      Some(ratio) => ratio,
      None => panic!("Dimension exponent overflow in addition"),
    }
  }

  /// As [`Self::checked_sub`], but panics if the result is not representable.
  pub const fn strict_sub(self, other: Self) -> Self {
    match self.checked_sub(other) {
      Some(ratio) => ratio,
      None => panic!("Dimension exponent overflow in subtraction"),
    }
  }

  /// As [`Self::checked_mul`], but panics if the result is not representable.
  pub const fn strict_mul(self, other: Self) -> Self {
    match self.checked_mul(other) {
      Some(ratio) => ratio,
      None => panic!("Dimension exponent overflow in multiplication"),
    }
  }

  /// As [`Self::checked_div`], but panics if the result is not representable or `other` is
  /// zero.
  pub const fn strict_div(self, other: Self) -> Self {
    match self.checked_div(other) {
      Some(ratio) => ratio,
      None => panic!("Dimension exponent overflow or division by zero"),
    }
  }

  /// As [`Self::checked_neg`], but panics if the result is not representable.
  pub const fn strict_neg(self) -> Self {
    match self.checked_neg() {
      Some(ratio) => ratio,
      None => panic!("Dimension exponent overflow in negation"),
    }
  }
}

impl Default for Ratio {
  fn default() -> Self {
    Self::ZERO
  }
}

impl Display for Ratio {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if self.is_integer() {
      write!(f, "{}", self.num)
    } else {
      write!(f, "{}/{}", self.num, self.den)
    }
  }
}

impl Debug for Ratio {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Ratio({self})")
  }
}
