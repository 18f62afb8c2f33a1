//! Unit literals: `const fn`s that turn a bare number into a quantity, `kpc(8.5)` being
//! 8.5 kiloparsecs (stored, like every quantity, in metres).
//!
//! ```
//! use astro_units::literal::*;
//!
//! let r = kpc(8.5);
//! let b = muG(6.0);
//! assert!((r.convert_to(pc(1.0)) - 8500.0).abs() < 1e-9);
//! assert!((b.canonical_value() - 6e-10).abs() < 1e-24);
//! ```

#![allow(non_snake_case)]

use super::*;
use super::units::*;

macro_rules! literals {
  ($(
    $(#[$attr:meta])*
    $name:ident: $ty:ty = $unit:expr;
  )*) => {
    $(
      $(#[$attr])*
      #[inline]
      pub const fn $name(value: f64) -> $ty {
        $unit.scale(value)
      }
    )*
  };
}

literals!{
  // Angle

  rad: Angle = RADIAN;
  deg: Angle = DEGREE;
  sr: SolidAngle = STERADIAN;

  // Length

  m: Length = METRE;
  mm: Length = MILLIMETRE;
  cm: Length = CENTIMETRE;
  km: Length = KILOMETRE;
  mi: Length = MILE;
  yd: Length = YARD;
  /// Inches (`in` being a keyword).
  inch: Length = INCH;
  pc: Length = PARSEC;
  kpc: Length = KILOPARSEC;
  Mpc: Length = MEGAPARSEC;

  // Area

  m2: Area = SQUARE_METRE;
  cm2: Area = SQUARE_CENTIMETRE;
  barn: Area = BARN;
  mbarn: Area = MILLIBARN;

  // Volume

  cm3: Volume = CUBIC_CENTIMETRE;
  m3: Volume = CUBIC_METRE;

  // Energy

  J: Energy = JOULE;
  erg: Energy = ERG;
  eV: Energy = ELECTRONVOLT;
  keV: Energy = KILOELECTRONVOLT;
  MeV: Energy = MEGAELECTRONVOLT;
  GeV: Energy = GIGAELECTRONVOLT;
  TeV: Energy = TERAELECTRONVOLT;
  PeV: Energy = PETAELECTRONVOLT;
  EeV: Energy = EXAELECTRONVOLT;

  // Speed

  mps: Speed = METRE_PER_SECOND;
  miph: Speed = MILE_PER_HOUR;
  kmph: Speed = KILOMETRE_PER_HOUR;

  // Frequency

  Hz: Frequency = HERTZ;
  kHz: Frequency = KILOHERTZ;
  MHz: Frequency = MEGAHERTZ;
  GHz: Frequency = GIGAHERTZ;
  THz: Frequency = TERAHERTZ;

  // Magnetic field

  T: MagneticField = TESLA;
  nG: MagneticField = NANOGAUSS;
  muG: MagneticField = MICROGAUSS;

  // Temperature

  K: Temperature = KELVIN;
  muK: Temperature = MICROKELVIN;

  // Time

  s: Time = SECOND;
  ns: Time = NANOSECOND;
  /// Microseconds.
  mus: Time = MICROSECOND;
  /// Milliseconds.
  ms: Time = MILLISECOND;
  min: Time = MINUTE;
  h: Time = HOUR;
  day: Time = DAY;
  yr: Time = YEAR;

  // Mass

  kg: Mass = KILOGRAM;
  g: Mass = GRAM;
  t: Mass = TONNE;
  oz: Mass = OUNCE;
  lb: Mass = POUND;
  st: Mass = STONE;

  // Acceleration

  mps2: Acceleration = METRE_PER_SECOND_SQUARED;
  /// Multiples of standard gravity.
  G: Acceleration = STANDARD_GRAVITY;

  // Force

  N: Force = NEWTON;
  lbf: Force = POUNDFORCE;
  kp: Force = KILOPOND;

  // Pressure

  Pa: Pressure = PASCAL;
  bar: Pressure = BAR;
  psi: Pressure = PSI;
}
