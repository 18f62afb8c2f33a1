use super::*;

mk_same_dim_ops!{Add, AddAssign, add, add_assign, +}
mk_same_dim_ops!{Sub, SubAssign, sub, sub_assign, -}
mk_same_dim_ops!{Rem, RemAssign, rem, rem_assign, %}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{dims, Area, Length, Time};
  use proptest::prelude::*;

  #[allow(dead_code)]
  fn ops() {
    let mut a = Length::new(1.0);
    let b = Length::new(-1.0);
    let _ = a + b;
    let _ = &a - b;
    let _ = a % &b;
    let _ = &a + &b;
    a += b;
    a -= &b;
    a %= b;
  }

  #[test]
  fn add_sub() {
    assert_eq!(Length::new(1.5) + Length::new(2.0), Length::new(3.5));
    assert_eq!(Time::new(1.5) - Time::new(2.0), Time::new(-0.5));
    let mut t = Time::new(1.0);
    t += Time::new(1.0);
    t -= &Time::new(0.5);
    assert_eq!(t, Time::new(1.5));
  }

  #[test]
  fn structural_operands() {
    let side = Length::new(2.0);
    let sum: Area = Area::new(1.0) + side * side;
    assert_eq!(sum, Area::new(5.0));
    let diff: Quantity<Product<dims::Length, dims::Length>> = side * side - Area::new(1.0);
    assert_eq!(diff, Area::new(3.0));
  }

  #[test]
  fn rem_is_fmod() {
    assert_eq!(Length::new(7.5) % Length::new(2.0), Length::new(1.5));
    assert_eq!(Length::new(-7.5) % Length::new(2.0), Length::new(-1.5));
    assert_eq!(Length::new(7.5) % Length::new(-2.0), Length::new(1.5));
    assert!((Length::new(1.0) % Length::ZERO).canonical_value().is_nan());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn exact(a in Length::cases_proptest(), b in Length::cases_proptest()) {
      let (x, y) = (a.canonical_value(), b.canonical_value());
      prop_assert_eq!((a + b).canonical_value().to_bits(), (x + y).to_bits());
      prop_assert_eq!((a - b).canonical_value().to_bits(), (x - y).to_bits());
      let rem = (a % b).canonical_value();
      prop_assert!(rem.to_bits() == (x % y).to_bits() || (rem.is_nan() && (x % y).is_nan()));
    }

    #[test]
    fn sub_is_add_neg(a in Length::cases_proptest(), b in Length::cases_proptest()) {
      let lhs = (a - b).canonical_value();
      let rhs = (a + -b).canonical_value();
      prop_assert!(lhs == rhs || (lhs.is_nan() && rhs.is_nan()));
    }
  }
}
