use super::*;

// `derive` would put a `D: Clone` (etc.) bound on the marker type, which is never satisfied by
// the combinator types and is irrelevant anyway, since a `Quantity` only holds an `f64`. So we
// implement everything explicitly here.
//
// Equality and ordering are between any two quantities whose dimension *vectors* agree, not only
// between identical types, so that e.g. `Product<Length, Length>` can be compared with `Area`.

impl<D: Dimension> Clone for Quantity<D> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<
  D: Dimension,
  E: Dimension,
> PartialEq<Quantity<E>> for Quantity<D> {
  #[inline]
  fn eq(&self, other: &Quantity<E>) -> bool {
    let () = SameDimension::<D, E>::OK;
    self.0 == other.0
  }
}

impl<
  D: Dimension,
  E: Dimension,
> PartialOrd<Quantity<E>> for Quantity<D> {
  #[inline]
  fn partial_cmp(&self, other: &Quantity<E>) -> Option<core::cmp::Ordering> {
    let () = SameDimension::<D, E>::OK;
    self.0.partial_cmp(&other.0)
  }
}

impl<D: Dimension> core::iter::Sum for Quantity<D> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    Self::new(iter.map(|q| q.0).sum())
  }
}

impl<'a, D: Dimension> core::iter::Sum<&'a Quantity<D>> for Quantity<D> {
  fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.copied().sum()
  }
}

// Plain numbers get in and out of the dimensionless type freely; every other dimension has to go
// through `new` and `canonical_value`/`convert_to`.

impl From<f64> for Quantity<Dimensionless> {
  #[inline]
  fn from(value: f64) -> Self {
    Self::new(value)
  }
}

impl From<i32> for Quantity<Dimensionless> {
  #[inline]
  fn from(value: i32) -> Self {
    Self::new(value.into())
  }
}

impl From<Quantity<Dimensionless>> for f64 {
  #[inline]
  fn from(value: Quantity<Dimensionless>) -> Self {
    value.0
  }
}
