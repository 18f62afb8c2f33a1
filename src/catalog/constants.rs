//! Physical constants (CODATA 2006) and mathematical constants.

use super::*;
use super::units::{AMPERE, COULOMB, JOULE, KELVIN, KILOGRAM, METRE, NEWTON, SECOND};

pub const PI: f64 = core::f64::consts::PI;
/// The Euler–Mascheroni constant γ.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// The elementary charge.
pub const E_PLUS: Charge = COULOMB.scale(1.602176487e-19);
/// The speed of light in vacuum.
pub const C_LIGHT: Speed = METRE.per(SECOND).cast().scale(2.99792458e8);
pub const C_SQUARED: SpeedSquared = C_LIGHT.squared().cast();

/// The atomic mass unit.
pub const AMU: Mass = KILOGRAM.scale(1.660538921e-27);
pub const M_PROTON: Mass = KILOGRAM.scale(1.67262158e-27);
pub const M_NEUTRON: Mass = KILOGRAM.scale(1.67492735e-27);
pub const M_ELECTRON: Mass = KILOGRAM.scale(9.10938291e-31);

pub const H_PLANCK: Action = JOULE.times(SECOND).cast().scale(6.62606957e-34);
/// The reduced Planck constant, `h / 2π`.
pub const H_PLANCK_BAR: Action = H_PLANCK.scale(1.0 / (2.0 * PI));
pub const K_BOLTZMANN: Entropy = JOULE.per(KELVIN).cast().scale(1.3806488e-23);

/// The magnetic permeability of vacuum.
pub const MU0: Permeability = NEWTON.per(AMPERE.squared()).cast().scale(4.0 * PI * 1e-7);
/// The electric permittivity of vacuum, `1 / (µ0 c²)`.
pub const EPSILON0: Permittivity = MU0.times(C_SQUARED).recip().cast();

/// The classical electron radius, `e² / (4π ε0 m_e c²)`.
pub const R_ELECTRON: Length =
  E_PLUS.squared().per(EPSILON0.scale(4.0 * PI).times(M_ELECTRON.times(C_SQUARED))).cast();
/// The Thomson cross section, `8π/3 r_e²`.
pub const SIGMA_THOMSON: Area = R_ELECTRON.squared().scale(8.0 * PI / 3.0).cast();
/// The fine-structure constant, `µ0 e² c / (4π ħ)`.
pub const ALPHA_FINE: Number =
  MU0.times(E_PLUS.squared()).times(C_LIGHT).per(H_PLANCK_BAR.scale(4.0 * PI)).cast();
