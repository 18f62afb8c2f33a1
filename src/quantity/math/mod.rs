use super::*;

/// Absolute value, rounding, remainder, min/max.
mod rounding;

/// Powers and roots.
mod power;

/// Trigonometric, exponential, and hyperbolic functions.
mod trig;
