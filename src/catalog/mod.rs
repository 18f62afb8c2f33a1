//! The catalog of named quantity types, units, SI prefixes, literal constructors, and physical
//! constants.
//!
//! Every named type is declared once, by its nine integer exponents, in the table at the bottom
//! of this file. Each row produces:
//!
//!   - a dimension type in [`dims`] (e.g. `dims::Speed`), and its squared companion
//!     (`dims::SpeedSquared`);
//!   - the quantity types `Speed = Quantity<dims::Speed>` and `SpeedSquared`;
//!   - entries in [`ENTRIES`], the runtime registry of names and vectors.
//!
//! Rows with identical exponents (`Energy` and `Torque`, `Pressure` and `Emissivity`, ...) name
//! the very same Rust type.

use crate::dimension::{Dimension, DimensionVector};
use crate::Quantity;

/// Unit constants.
pub mod units;

/// SI prefix factors.
pub mod prefix;

/// `const fn` unit literals.
pub mod literal;

/// Physical and mathematical constants.
pub mod constants;

/// A named catalog dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
  pub name: &'static str,
  pub vector: DimensionVector,
}

/// The catalog name of `vector`: the first row of the table with exactly that vector.
///
/// ```
/// # use astro_units::catalog::name_of;
/// # use astro_units::{Length, Time};
/// assert_eq!(name_of(&(Length::new(1.0) / Time::new(1.0)).dimension()), Some("Speed"));
/// assert_eq!(name_of(&(Length::new(1.0) * Time::new(1.0)).dimension()), None);
/// ```
pub fn name_of(vector: &DimensionVector) -> Option<&'static str> {
  ENTRIES.iter().find(|entry| entry.vector == *vector).map(|entry| entry.name)
}

/// The entry (a row or a squared companion) called `name`.
pub fn lookup(name: &str) -> Option<&'static Entry> {
  ENTRIES.iter().find(|entry| entry.name == name)
}

macro_rules! quantity_types {
  ($(
    $(#[$attr:meta])*
    $name:ident, $squared:ident = [
      $l:literal, $t:literal, $m:literal, $i:literal, $th:literal,
      $n:literal, $j:literal, $a:literal, $sa:literal $(,)?
    ];
  )*) => {
    /// The dimension types of the catalog, as aliases of [`Dim`](crate::dimension::Dim).
    ///
    /// These are what goes inside `Quantity<..>` and the combinators: e.g.
    /// `Quantity<Quotient<dims::Energy, dims::Time>>`.
    #[allow(unused_braces)]
    pub mod dims {
      use crate::dimension::Dim;

      $(
        $(#[$attr])*
        pub type $name = Dim<{$l}, {$t}, {$m}, {$i}, {$th}, {$n}, {$j}, {$a}, {$sa}>;
        #[doc = concat!("The square of [`", stringify!($name), "`].")]
        pub type $squared = Dim<
          {2 * $l}, {2 * $t}, {2 * $m}, {2 * $i}, {2 * $th},
          {2 * $n}, {2 * $j}, {2 * $a}, {2 * $sa},
        >;
      )*
    }

    $(
      $(#[$attr])*
      pub type $name = Quantity<dims::$name>;
      #[doc = concat!("The square of [`", stringify!($name), "`].")]
      pub type $squared = Quantity<dims::$squared>;
    )*

    /// Every catalog type and squared companion, in table order.
    pub static ENTRIES: &[Entry] = &[
      $(
        Entry { name: stringify!($name), vector: <dims::$name as Dimension>::VECTOR },
        Entry { name: stringify!($squared), vector: <dims::$squared as Dimension>::VECTOR },
      )*
    ];
  };
}

quantity_types!{
  //                                L   T   M   I   Θ   N   J   A  SA

  /// A pure number.
  Number, NumberSquared                       = [ 0,  0,  0,  0,  0,  0,  0,  0,  0];

  // Base

  Length, LengthSquared                       = [ 1,  0,  0,  0,  0,  0,  0,  0,  0];
  Time, TimeSquared                           = [ 0,  1,  0,  0,  0,  0,  0,  0,  0];
  Mass, MassSquared                           = [ 0,  0,  1,  0,  0,  0,  0,  0,  0];
  /// Electric current.
  Current, CurrentSquared                     = [ 0,  0,  0,  1,  0,  0,  0,  0,  0];
  Temperature, TemperatureSquared             = [ 0,  0,  0,  0,  1,  0,  0,  0,  0];
  /// Amount of substance.
  Substance, SubstanceSquared                 = [ 0,  0,  0,  0,  0,  1,  0,  0,  0];
  LuminousIntensity, LuminousIntensitySquared = [ 0,  0,  0,  0,  0,  0,  1,  0,  0];
  /// Plane angle.
  Angle, AngleSquared                         = [ 0,  0,  0,  0,  0,  0,  0,  1,  0];
  SolidAngle, SolidAngleSquared               = [ 0,  0,  0,  0,  0,  0,  0,  0,  1];

  // Derived

  Force, ForceSquared                         = [ 1, -2,  1,  0,  0,  0,  0,  0,  0];
  Pressure, PressureSquared                   = [-1, -2,  1,  0,  0,  0,  0,  0,  0];
  Energy, EnergySquared                       = [ 2, -2,  1,  0,  0,  0,  0,  0,  0];
  Torque, TorqueSquared                       = [ 2, -2,  1,  0,  0,  0,  0,  0,  0];
  EnergyDensity, EnergyDensitySquared         = [-1, -2,  1,  0,  0,  0,  0,  0,  0];
  /// Electric charge.
  Charge, ChargeSquared                       = [ 0,  1,  0,  1,  0,  0,  0,  0,  0];
  MagneticField, MagneticFieldSquared         = [ 0, -2,  1, -1,  0,  0,  0,  0,  0];
  ElectricPotential, ElectricPotentialSquared = [ 2, -3,  1, -1,  0,  0,  0,  0,  0];
  Frequency, FrequencySquared                 = [ 0, -1,  0,  0,  0,  0,  0,  0,  0];
  Power, PowerSquared                         = [ 2, -3,  1,  0,  0,  0,  0,  0,  0];
  /// Electric resistance.
  Resistance, ResistanceSquared               = [ 2, -3,  1, -2,  0,  0,  0,  0,  0];
  /// Electric capacitance.
  Capacitance, CapacitanceSquared             = [-2,  4, -1,  2,  0,  0,  0,  0,  0];
  Area, AreaSquared                           = [ 2,  0,  0,  0,  0,  0,  0,  0,  0];
  Volume, VolumeSquared                       = [ 3,  0,  0,  0,  0,  0,  0,  0,  0];
  Speed, SpeedSquared                         = [ 1, -1,  0,  0,  0,  0,  0,  0,  0];
  Acceleration, AccelerationSquared           = [ 1, -2,  0,  0,  0,  0,  0,  0,  0];
  /// Energy times time, e.g. Planck's constant.
  Action, ActionSquared                       = [ 2, -1,  1,  0,  0,  0,  0,  0,  0];
  /// Energy per temperature, e.g. Boltzmann's constant.
  Entropy, EntropySquared                     = [ 2, -2,  1,  0, -1,  0,  0,  0,  0];
  /// Magnetic permeability, e.g. of the vacuum.
  Permeability, PermeabilitySquared           = [ 1, -2,  1, -2,  0,  0,  0,  0,  0];
  /// Electric permittivity, e.g. of the vacuum.
  Permittivity, PermittivitySquared           = [-3,  4, -1,  2,  0,  0,  0,  0,  0];

  // Astrophysics

  /// Particles per volume.
  NumberDensity, NumberDensitySquared         = [-3,  0,  0,  0,  0,  0,  0,  0,  0];
  /// Particles per area, e.g. integrated along a line of sight.
  ColumnDensity, ColumnDensitySquared         = [-2,  0,  0,  0,  0,  0,  0,  0,  0];
  /// Faraday rotation, in radians per area.
  RotationMeasure, RotationMeasureSquared     = [-2,  0,  0,  0,  0,  0,  0,  1,  0];
  NumberDensityPerEnergy, NumberDensityPerEnergySquared
                                              = [-5,  2, -1,  0,  0,  0,  0,  0,  0];
  Emissivity, EmissivitySquared               = [-1, -2,  1,  0,  0,  0,  0,  0,  0];
  /// Energy per area.
  Intensity, IntensitySquared                 = [ 0, -2,  1,  0,  0,  0,  0,  0,  0];
  /// Particles per energy per area per time.
  DifferentialFlux, DifferentialFluxSquared   = [-4,  1, -1,  0,  0,  0,  0,  0,  0];
  /// Particles per energy per area per time per solid angle.
  DifferentialIntensity, DifferentialIntensitySquared
                                              = [-4,  1, -1,  0,  0,  0,  0,  0, -1];
  InverseLength, InverseLengthSquared         = [-1,  0,  0,  0,  0,  0,  0,  0,  0];
  /// Cross section per energy.
  DiffCrossSection, DiffCrossSectionSquared   = [ 0,  2, -1,  0,  0,  0,  0,  0,  0];
  /// Free electrons integrated along a line of sight.
  DispersionMeasure, DispersionMeasureSquared = [-2,  0,  0,  0,  0,  0,  0,  0,  0];
  /// Energy loss per length.
  StoppingPower, StoppingPowerSquared         = [ 1, -2,  1,  0,  0,  0,  0,  0,  0];
  SynchroConstant, SynchroConstantSquared     = [ 2,  0,  0,  1,  0,  0,  0,  0,  0];
  PiZeroIntegral, PiZeroIntegralSquared       = [-2,  1, -1,  0,  0,  0,  0,  0,  0];
}
