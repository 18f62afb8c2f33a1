use super::*;

use core::ops::Neg;

impl<D: Dimension> Neg for Quantity<D> {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    Self::new(-self.0)
  }
}

impl<D: Dimension> Neg for &Quantity<D> {
  type Output = Quantity<D>;

  #[inline]
  fn neg(self) -> Quantity<D> {
    -*self
  }
}

#[cfg(test)]
mod tests {
  use crate::Energy;

  #[test]
  fn neg() {
    let e = Energy::new(3.0);
    assert_eq!(-e, Energy::new(-3.0));
    assert_eq!(-&e, Energy::new(-3.0));
    assert_eq!(-(-e), e);
    assert!((-Energy::ZERO).canonical_value().is_sign_negative());
  }
}
