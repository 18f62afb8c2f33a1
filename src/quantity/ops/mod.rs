use super::*;

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

/// Addition, subtraction, and remainder (all of which need equal dimensions).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing an operator between two quantities of the same dimension, for all
/// combinations of value and reference. The right operand may be any type with an equal dimension
/// vector; the result has the left operand's type.
macro_rules! mk_same_dim_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $op:tt) => {
    impl<D: Dimension, E: Dimension>
    $trait<Quantity<E>> for Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: Quantity<E>) -> Self::Output {
        let () = SameDimension::<D, E>::OK;
        Quantity::new(self.0 $op rhs.0)
      }
    }

    impl<D: Dimension, E: Dimension>
    $trait<&Quantity<E>> for Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: &Quantity<E>) -> Self::Output { self.$name(*rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait<Quantity<E>> for &Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: Quantity<E>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait<&Quantity<E>> for &Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: &Quantity<E>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait_assign<Quantity<E>> for Quantity<D> {
      #[inline]
      fn $name_assign(&mut self, rhs: Quantity<E>) { *self = (*self).$name(rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait_assign<&Quantity<E>> for Quantity<D> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Quantity<E>) { *self = (*self).$name(*rhs) }
    }
  }
}

pub(crate) use mk_same_dim_ops;

/// Helper macro for implementing an operator between two quantities of arbitrary dimensions, whose
/// result has the dimension `$combinator<D, E>`, for all combinations of value and reference.
macro_rules! mk_combinator_ops {
  ($trait:ident, $name:ident, $combinator:ident, $op:tt) => {
    impl<D: Dimension, E: Dimension>
    $trait<Quantity<E>> for Quantity<D> {
      type Output = Quantity<$combinator<D, E>>;

      #[inline]
      fn $name(self, rhs: Quantity<E>) -> Self::Output {
        let () = Evaluated::<$combinator<D, E>>::OK;
        Quantity::new(self.0 $op rhs.0)
      }
    }

    impl<D: Dimension, E: Dimension>
    $trait<&Quantity<E>> for Quantity<D> {
      type Output = Quantity<$combinator<D, E>>;

      #[inline]
      fn $name(self, rhs: &Quantity<E>) -> Self::Output { self.$name(*rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait<Quantity<E>> for &Quantity<D> {
      type Output = Quantity<$combinator<D, E>>;

      #[inline]
      fn $name(self, rhs: Quantity<E>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<D: Dimension, E: Dimension>
    $trait<&Quantity<E>> for &Quantity<D> {
      type Output = Quantity<$combinator<D, E>>;

      #[inline]
      fn $name(self, rhs: &Quantity<E>) -> Self::Output { (*self).$name(*rhs) }
    }
  }
}

pub(crate) use mk_combinator_ops;

/// Helper macro for implementing an operator between a quantity and a bare `f64`, on either side
/// of the quantity, which keeps the dimension `D` (or turns it into `$lhs_dim` when the `f64` is
/// on the left), plus the corresponding assignment operator.
macro_rules! mk_scalar_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $op:tt, $lhs_dim:ty) => {
    impl<D: Dimension>
    $trait<f64> for Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { Quantity::new(self.0 $op rhs) }
    }

    impl<D: Dimension>
    $trait<f64> for &Quantity<D> {
      type Output = Quantity<D>;

      #[inline]
      fn $name(self, rhs: f64) -> Self::Output { (*self).$name(rhs) }
    }

    impl<D: Dimension>
    $trait<Quantity<D>> for f64 {
      type Output = Quantity<$lhs_dim>;

      #[inline]
      fn $name(self, rhs: Quantity<D>) -> Self::Output {
        let () = Evaluated::<$lhs_dim>::OK;
        Quantity::new(self $op rhs.0)
      }
    }

    impl<D: Dimension>
    $trait<&Quantity<D>> for f64 {
      type Output = Quantity<$lhs_dim>;

      #[inline]
      fn $name(self, rhs: &Quantity<D>) -> Self::Output { self.$name(*rhs) }
    }

    impl<D: Dimension>
    $trait_assign<f64> for Quantity<D> {
      #[inline]
      fn $name_assign(&mut self, rhs: f64) { *self = (*self).$name(rhs) }
    }
  }
}

pub(crate) use mk_scalar_ops;

/// Macro for instantiating the suite of tests for a binary operator between two quantities: the
/// scalar of the result is exactly what `f64` arithmetic gives, whatever the operands'
/// dimensions.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $lhs:ty, $rhs:ty) => {
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let a = <$lhs>::new(1.0);
      let b = <$rhs>::new(-1.0);
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      let _ = a $op 2.0;
      let _ = &a $op 2.0;
      let _ = 2.0 $op a;
      let _ = 2.0 $op &a;
    }

    /// Aux function: `x` and `y` are the same `f64`, counting all NaNs as equal.
    fn same_f64(x: f64, y: f64) -> bool {
      x.to_bits() == y.to_bits() || (x.is_nan() && y.is_nan())
    }

    proptest!{
      #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

      #[test]
      fn quantity_quantity(a in <$lhs>::cases_proptest(), b in <$rhs>::cases_proptest()) {
        let result = a $op b;
        prop_assert!(same_f64(
          result.canonical_value(),
          a.canonical_value() $op b.canonical_value(),
        ), "{:?} ⋅ {:?}", a, b);
      }

      #[test]
      fn quantity_scalar(a in <$lhs>::cases_proptest(), s in any::<f64>()) {
        prop_assert!(same_f64((a $op s).canonical_value(), a.canonical_value() $op s));
        prop_assert!(same_f64((s $op a).canonical_value(), s $op a.canonical_value()));
      }
    }
  };
}

#[cfg(test)]
pub(crate) use mk_tests;
