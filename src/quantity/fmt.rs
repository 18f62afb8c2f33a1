use super::*;

use core::fmt::{Debug, Display, LowerExp, UpperExp};

/// Just the scalar in canonical units, formatted like an `f64` (precision, width, etc. apply).
impl<D: Dimension> Display for Quantity<D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    Display::fmt(&self.0, f)
  }
}

impl<D: Dimension> LowerExp for Quantity<D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    LowerExp::fmt(&self.0, f)
  }
}

impl<D: Dimension> UpperExp for Quantity<D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    UpperExp::fmt(&self.0, f)
  }
}

/// The scalar and the dimension, e.g. `Quantity(2.5, m s^-1)`.
impl<D: Dimension> Debug for Quantity<D> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Quantity")
      .field(&self.0)
      .field(&format_args!("{}", D::VECTOR))
      .finish()
  }
}
