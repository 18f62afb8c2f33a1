//! Build-time assertions on type-level dimensions.
//!
//! Each check is an associated const of unit type that panics while being evaluated if the
//! check fails. A function that mentions `Check::<..>::OK` in its body forces that evaluation
//! whenever it is instantiated with concrete types, so a failing check is a compile error at the
//! offending call site, carrying our message. This happens during monomorphisation, so only
//! builds that generate code report it; `cargo check` does not:
//!
//! ```text
//! error[E0080]: evaluation of `SameDimension::<Dim<1, ..>, Dim<0, 1, ..>>::OK` failed
//!   = note: the evaluated program panicked at 'dimension mismatch: [m] vs [s]'
//! ```

use super::*;

use core::marker::PhantomData;

/// Asserts that `A` and `B` have exactly equal dimension vectors.
pub(crate) struct SameDimension<A, B>(PhantomData<(A, B)>);

impl<A: Dimension, B: Dimension> SameDimension<A, B> {
  pub(crate) const OK: () = {
    if !A::VECTOR.same_as(&B::VECTOR) {
      let mut msg = Label::new();
      msg.push_str("dimension mismatch: [");
      msg.push_vector(&A::VECTOR);
      msg.push_str("] vs [");
      msg.push_vector(&B::VECTOR);
      msg.push_str("]");
      panic!("{}", msg.as_str());
    }
  };
}

/// Asserts that the square root of `A` has a defined dimension, i.e. that every exponent of `A`
/// has an even numerator.
pub(crate) struct EvenRoot<A>(PhantomData<A>);

impl<A: Dimension> EvenRoot<A> {
  pub(crate) const OK: () = {
    if !A::VECTOR.has_even_numerators() {
      let mut msg = Label::new();
      msg.push_str("square root of [");
      msg.push_vector(&A::VECTOR);
      msg.push_str("] is undefined: every exponent needs an even numerator (use pow_ratio)");
      panic!("{}", msg.as_str());
    }
  };
}

/// Forces the evaluation of `A::VECTOR`, so that an exponent overflow inside a combinator is
/// reported where the combinator is produced, not where its vector is first looked at.
pub(crate) struct Evaluated<A>(PhantomData<A>);

impl<A: Dimension> Evaluated<A> {
  pub(crate) const OK: () = {
    let _vector = A::VECTOR;
  };
}

/// `vector` raised to the power `num / den`, or a compile-time panic naming it if some
/// exponent overflows or `den` is zero.
pub(crate) const fn raised(vector: &DimensionVector, num: i64, den: i64) -> DimensionVector {
  let scaled = match Ratio::checked_new(num, den) {
    Some(factor) => vector.checked_scale(factor),
    None => None,
  };
  match scaled {
    Some(v) => v,
    None => {
      let mut msg = Label::new();
      msg.push_str("cannot raise [");
      msg.push_vector(vector);
      msg.push_str("] to the power ");
      msg.push_i64(num);
      msg.push_str("/");
      msg.push_i64(den);
      msg.push_str(": exponent overflow or zero denominator");
      panic!("{}", msg.as_str());
    }
  }
}

/// The sum of two dimensions, or a compile-time panic naming both if some exponent overflows.
pub(crate) const fn product(a: &DimensionVector, b: &DimensionVector) -> DimensionVector {
  match a.checked_add(b) {
    Some(v) => v,
    None => {
      let mut msg = Label::new();
      msg.push_str("dimension exponent overflow in [");
      msg.push_vector(a);
      msg.push_str("] * [");
      msg.push_vector(b);
      msg.push_str("]");
      panic!("{}", msg.as_str());
    }
  }
}

/// The difference of two dimensions, or a compile-time panic naming both if some exponent
/// overflows.
pub(crate) const fn quotient(a: &DimensionVector, b: &DimensionVector) -> DimensionVector {
  match a.checked_sub(b) {
    Some(v) => v,
    None => {
      let mut msg = Label::new();
      msg.push_str("dimension exponent overflow in [");
      msg.push_vector(a);
      msg.push_str("] / [");
      msg.push_vector(b);
      msg.push_str("]");
      panic!("{}", msg.as_str());
    }
  }
}
