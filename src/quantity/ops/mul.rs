use super::*;

mk_combinator_ops!{Mul, mul, Product, *}
mk_scalar_ops!{Mul, MulAssign, mul, mul_assign, *, D}
