use super::*;

mk_combinator_ops!{Div, div, Quotient, /}
mk_scalar_ops!{Div, DivAssign, div, div_assign, /, Inverse<D>}
