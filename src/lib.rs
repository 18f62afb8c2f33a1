//! This crate provides physical quantities whose dimensions are checked at *build time*, with
//! exact rational exponents, at the runtime cost of a bare `f64`.
//!
//! # Introduction
//!
//! A [`Quantity<D>`](Quantity) is one `f64`, in canonical SI units, tagged with a zero-sized type
//! `D` whose associated const is a vector of nine rational exponents: length, time, mass,
//! current, temperature, amount of substance, luminous intensity, angle, and solid angle. Adding
//! a length to a time, taking the square root of a length, or overflowing an exponent are all
//! compile errors; multiplying, dividing, and raising to powers compute the result's dimension
//! in const evaluation.
//!
//! The catalog covers SI and a set of astrophysical quantity types (number densities, rotation
//! and dispersion measures, differential fluxes, ...), with units from nanometres to gigaparsecs
//! and from electronvolts to exa-electronvolts.
//!
//! # Usage
//!
//! ```
//! use astro_units::literal::*;
//! use astro_units::units::{KILOPARSEC, PARSEC};
//! use astro_units::{Area, Energy, Length, Speed};
//!
//! // Build quantities from literals or unit constants; both are `const`.
//! const R_SUN: Length = kpc(8.5);
//! let d = km(2.3) + m(3.2);
//!
//! // Arithmetic computes dimensions; `cast` names the result with a catalog type.
//! let v: Speed = (km(1.0) / s(2.0)).cast();
//! let e: Energy = (kg(2.0) * v * v / 2.0).cast();
//! let a: Area = m(3.0).squared().cast();
//! assert_eq!(a.sqrt(), m(3.0));
//!
//! // Convert out by dividing by a unit.
//! assert!((R_SUN.convert_to(PARSEC) - 8500.0).abs() < 1e-9);
//! assert!((KILOPARSEC.convert_to(PARSEC) - 1000.0).abs() < 1e-9);
//! # let _ = (d, e);
//! ```
//!
//! Dimension errors do not compile:
//!
//! ```compile_fail
//! # use astro_units::literal::*;
//! let nonsense = m(1.0) + s(1.0);
//! ```
//!
//! The checks are evaluated when generic code is monomorphised, so `cargo check` and IDEs accept
//! such code; `cargo build` (or `cargo test`) is what reports the error.
//!
//! Values whose dimension is only known at runtime go through [`dynamic::DynQuantity`], which
//! checks the same rules and returns a [`DimensionError`](dynamic::DimensionError) instead.
//!
//! # Performance
//!
//! `Quantity` is `#[repr(transparent)]` over `f64`, and every check is a const: arithmetic on
//! quantities compiles to the same instructions as on `f64`. This crate includes benchmarks
//! comparing the two; run them with `cargo bench`.

pub mod dimension;

mod quantity;
pub use quantity::Quantity;

pub mod catalog;
pub use catalog::*;

pub mod math;

pub mod dynamic;

pub mod vector3;
pub use vector3::Vector3;

pub mod particle;
pub use particle::ParticleId;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};
