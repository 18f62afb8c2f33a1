//! Unit constants. Each is a [`Quantity`] whose canonical value is the unit's scale factor in SI,
//! so `x * unit` is "x of that unit", and `q.convert_to(unit)` is "q in that unit".
//!
//! Every constant is checked by [`Quantity::as_unit`] at compile time.

use super::*;
use super::prefix::*;
use super::constants::{C_LIGHT, E_PLUS, PI};

// SI base units

pub const METRE: Length = Length::new(1.0).as_unit();
pub const SECOND: Time = Time::new(1.0).as_unit();
pub const KILOGRAM: Mass = Mass::new(1.0).as_unit();
pub const AMPERE: Current = Current::new(1.0).as_unit();
pub const KELVIN: Temperature = Temperature::new(1.0).as_unit();
pub const MOLE: Substance = Substance::new(1.0).as_unit();
pub const CANDELA: LuminousIntensity = LuminousIntensity::new(1.0).as_unit();
pub const RADIAN: Angle = Angle::new(1.0).as_unit();
pub const STERADIAN: SolidAngle = SolidAngle::new(1.0).as_unit();

pub const GRAM: Mass = KILOGRAM.scale(MILLI).as_unit();

// SI derived units

pub const SQUARE_METRE: Area = METRE.squared().cast().as_unit();
pub const CUBIC_METRE: Volume = METRE.squared().times(METRE).cast().as_unit();
pub const METRE_PER_SECOND: Speed = METRE.per(SECOND).cast().as_unit();
pub const METRE_PER_SECOND_SQUARED: Acceleration = METRE.per(SECOND.squared()).cast().as_unit();
pub const NEWTON: Force = KILOGRAM.times(METRE_PER_SECOND_SQUARED).cast().as_unit();
pub const PASCAL: Pressure = NEWTON.per(SQUARE_METRE).cast().as_unit();
pub const JOULE: Energy = NEWTON.times(METRE).cast().as_unit();
pub const WATT: Power = JOULE.per(SECOND).cast().as_unit();
pub const COULOMB: Charge = AMPERE.times(SECOND).cast().as_unit();
pub const VOLT: ElectricPotential = WATT.per(AMPERE).cast().as_unit();
pub const OHM: Resistance = VOLT.per(AMPERE).cast().as_unit();
pub const FARAD: Capacitance = COULOMB.per(VOLT).cast().as_unit();
pub const TESLA: MagneticField = VOLT.times(SECOND).per(SQUARE_METRE).cast().as_unit();
pub const HERTZ: Frequency = SECOND.recip().cast().as_unit();

/// Every SI-prefixed form of a unit, given their names from yocto to yotta; `_` skips one.
macro_rules! si_prefixed {
  ($ty:ty, $base:ident: [
    $yocto:tt, $zepto:tt, $atto:tt, $femto:tt, $pico:tt,
    $nano:tt, $micro:tt, $milli:tt, $centi:tt, $deci:tt,
    $deca:tt, $hecto:tt, $kilo:tt, $mega:tt, $giga:tt,
    $tera:tt, $peta:tt, $exa:tt, $zetta:tt, $yotta:tt $(,)?
  ]) => {
    si_prefixed!(@one $ty, $base, YOCTO, $yocto);
    si_prefixed!(@one $ty, $base, ZEPTO, $zepto);
    si_prefixed!(@one $ty, $base, ATTO, $atto);
    si_prefixed!(@one $ty, $base, FEMTO, $femto);
    si_prefixed!(@one $ty, $base, PICO, $pico);
    si_prefixed!(@one $ty, $base, NANO, $nano);
    si_prefixed!(@one $ty, $base, MICRO, $micro);
    si_prefixed!(@one $ty, $base, MILLI, $milli);
    si_prefixed!(@one $ty, $base, CENTI, $centi);
    si_prefixed!(@one $ty, $base, DECI, $deci);
    si_prefixed!(@one $ty, $base, DECA, $deca);
    si_prefixed!(@one $ty, $base, HECTO, $hecto);
    si_prefixed!(@one $ty, $base, KILO, $kilo);
    si_prefixed!(@one $ty, $base, MEGA, $mega);
    si_prefixed!(@one $ty, $base, GIGA, $giga);
    si_prefixed!(@one $ty, $base, TERA, $tera);
    si_prefixed!(@one $ty, $base, PETA, $peta);
    si_prefixed!(@one $ty, $base, EXA, $exa);
    si_prefixed!(@one $ty, $base, ZETTA, $zetta);
    si_prefixed!(@one $ty, $base, YOTTA, $yotta);
  };
  (@one $ty:ty, $base:ident, $prefix:ident, _) => {};
  (@one $ty:ty, $base:ident, $prefix:ident, $name:ident) => {
    pub const $name: $ty = $base.scale($prefix).as_unit();
  };
}

// Prefixed SI units

si_prefixed!{Length, METRE: [
  YOCTOMETRE, ZEPTOMETRE, ATTOMETRE, FEMTOMETRE, PICOMETRE,
  NANOMETRE, MICROMETRE, MILLIMETRE, CENTIMETRE, DECIMETRE,
  DECAMETRE, HECTOMETRE, KILOMETRE, MEGAMETRE, GIGAMETRE,
  TERAMETRE, PETAMETRE, EXAMETRE, ZETTAMETRE, YOTTAMETRE,
]}

si_prefixed!{Time, SECOND: [
  YOCTOSECOND, ZEPTOSECOND, ATTOSECOND, FEMTOSECOND, PICOSECOND,
  NANOSECOND, MICROSECOND, MILLISECOND, CENTISECOND, DECISECOND,
  DECASECOND, HECTOSECOND, KILOSECOND, MEGASECOND, GIGASECOND,
  TERASECOND, PETASECOND, EXASECOND, ZETTASECOND, YOTTASECOND,
]}

si_prefixed!{Mass, GRAM: [
  YOCTOGRAM, ZEPTOGRAM, ATTOGRAM, FEMTOGRAM, PICOGRAM,
  NANOGRAM, MICROGRAM, MILLIGRAM, CENTIGRAM, DECIGRAM,
  DECAGRAM, HECTOGRAM, _, MEGAGRAM, GIGAGRAM,
  TERAGRAM, PETAGRAM, EXAGRAM, ZETTAGRAM, YOTTAGRAM,
]}

si_prefixed!{Current, AMPERE: [
  YOCTOAMPERE, ZEPTOAMPERE, ATTOAMPERE, FEMTOAMPERE, PICOAMPERE,
  NANOAMPERE, MICROAMPERE, MILLIAMPERE, CENTIAMPERE, DECIAMPERE,
  DECAAMPERE, HECTOAMPERE, KILOAMPERE, MEGAAMPERE, GIGAAMPERE,
  TERAAMPERE, PETAAMPERE, EXAAMPERE, ZETTAAMPERE, YOTTAAMPERE,
]}

si_prefixed!{Temperature, KELVIN: [
  YOCTOKELVIN, ZEPTOKELVIN, ATTOKELVIN, FEMTOKELVIN, PICOKELVIN,
  NANOKELVIN, MICROKELVIN, MILLIKELVIN, CENTIKELVIN, DECIKELVIN,
  DECAKELVIN, HECTOKELVIN, KILOKELVIN, MEGAKELVIN, GIGAKELVIN,
  TERAKELVIN, PETAKELVIN, EXAKELVIN, ZETTAKELVIN, YOTTAKELVIN,
]}

si_prefixed!{Substance, MOLE: [
  YOCTOMOLE, ZEPTOMOLE, ATTOMOLE, FEMTOMOLE, PICOMOLE,
  NANOMOLE, MICROMOLE, MILLIMOLE, CENTIMOLE, DECIMOLE,
  DECAMOLE, HECTOMOLE, KILOMOLE, MEGAMOLE, GIGAMOLE,
  TERAMOLE, PETAMOLE, EXAMOLE, ZETTAMOLE, YOTTAMOLE,
]}

si_prefixed!{LuminousIntensity, CANDELA: [
  YOCTOCANDELA, ZEPTOCANDELA, ATTOCANDELA, FEMTOCANDELA, PICOCANDELA,
  NANOCANDELA, MICROCANDELA, MILLICANDELA, CENTICANDELA, DECICANDELA,
  DECACANDELA, HECTOCANDELA, KILOCANDELA, MEGACANDELA, GIGACANDELA,
  TERACANDELA, PETACANDELA, EXACANDELA, ZETTACANDELA, YOTTACANDELA,
]}

pub const KILOHERTZ: Frequency = HERTZ.scale(KILO).as_unit();
pub const MEGAHERTZ: Frequency = HERTZ.scale(MEGA).as_unit();
pub const GIGAHERTZ: Frequency = HERTZ.scale(GIGA).as_unit();
pub const TERAHERTZ: Frequency = HERTZ.scale(TERA).as_unit();

// Time

pub const MINUTE: Time = SECOND.scale(60.0).as_unit();
pub const HOUR: Time = MINUTE.scale(60.0).as_unit();
pub const DAY: Time = HOUR.scale(24.0).as_unit();
pub const WEEK: Time = DAY.scale(7.0).as_unit();
/// The Julian year.
pub const YEAR: Time = DAY.scale(365.25).as_unit();

// Mass

pub const TONNE: Mass = KILOGRAM.scale(1000.0).as_unit();
pub const OUNCE: Mass = KILOGRAM.scale(0.028349523125).as_unit();
pub const POUND: Mass = OUNCE.scale(16.0).as_unit();
pub const STONE: Mass = POUND.scale(14.0).as_unit();

// Length

pub const INCH: Length = CENTIMETRE.scale(2.54).as_unit();
pub const FOOT: Length = INCH.scale(12.0).as_unit();
pub const YARD: Length = FOOT.scale(3.0).as_unit();
pub const MILE: Length = FOOT.scale(5280.0).as_unit();

// Astronomical lengths (IAU 2012 and 2015)

pub const ASTRONOMICAL_UNIT: Length = METRE.scale(149597870700.0).as_unit();
/// The distance light travels in vacuum in one Julian [`YEAR`].
pub const LIGHTYEAR: Length = C_LIGHT.times(YEAR).cast().as_unit();
/// The distance at which one astronomical unit subtends one arcsecond.
pub const PARSEC: Length = ASTRONOMICAL_UNIT.scale(648000.0 / PI).as_unit();

si_prefixed!{Length, PARSEC: [
  YOCTOPARSEC, ZEPTOPARSEC, ATTOPARSEC, FEMTOPARSEC, PICOPARSEC,
  NANOPARSEC, MICROPARSEC, MILLIPARSEC, CENTIPARSEC, DECIPARSEC,
  DECAPARSEC, HECTOPARSEC, KILOPARSEC, MEGAPARSEC, GIGAPARSEC,
  TERAPARSEC, PETAPARSEC, EXAPARSEC, ZETTAPARSEC, YOTTAPARSEC,
]}

// Area

pub const SQUARE_CENTIMETRE: Area = CENTIMETRE.squared().cast().as_unit();
pub const HECTARE: Area = SQUARE_METRE.scale(1e4).as_unit();
pub const BARN: Area = SQUARE_METRE.scale(1e-28).as_unit();
pub const MILLIBARN: Area = BARN.scale(MILLI).as_unit();

// Volume

pub const CUBIC_CENTIMETRE: Volume = CENTIMETRE.squared().times(CENTIMETRE).cast().as_unit();
pub const CUBIC_KILOMETRE: Volume = KILOMETRE.squared().times(KILOMETRE).cast().as_unit();

// Energy

pub const ERG: Energy = JOULE.scale(1e-7).as_unit();
/// The energy gained by an elementary charge across one volt.
pub const ELECTRONVOLT: Energy = E_PLUS.times(VOLT).cast().as_unit();
pub const KILOELECTRONVOLT: Energy = ELECTRONVOLT.scale(KILO).as_unit();
pub const MEGAELECTRONVOLT: Energy = ELECTRONVOLT.scale(MEGA).as_unit();
pub const GIGAELECTRONVOLT: Energy = ELECTRONVOLT.scale(GIGA).as_unit();
pub const TERAELECTRONVOLT: Energy = ELECTRONVOLT.scale(TERA).as_unit();
pub const PETAELECTRONVOLT: Energy = ELECTRONVOLT.scale(PETA).as_unit();
pub const EXAELECTRONVOLT: Energy = ELECTRONVOLT.scale(EXA).as_unit();

// Mixed

pub const KILOMETRE_PER_HOUR: Speed = KILOMETRE.per(HOUR).cast().as_unit();
pub const MILE_PER_HOUR: Speed = MILE.per(HOUR).cast().as_unit();
/// Standard gravity, the nominal acceleration of free fall at the Earth's surface.
pub const STANDARD_GRAVITY: Acceleration = METRE_PER_SECOND_SQUARED.scale(9.80665).as_unit();
pub const POUNDFORCE: Force = POUND.times(STANDARD_GRAVITY).cast().as_unit();
pub const KILOPOND: Force = KILOGRAM.times(STANDARD_GRAVITY).cast().as_unit();
pub const BAR: Pressure = PASCAL.scale(100000.0).as_unit();
/// Pound-force per square inch.
pub const PSI: Pressure = POUNDFORCE.per(INCH.squared()).cast().as_unit();
pub const GAUSS: MagneticField = TESLA.scale(1e-4).as_unit();
pub const NANOGAUSS: MagneticField = GAUSS.scale(NANO).as_unit();
pub const MICROGAUSS: MagneticField = GAUSS.scale(MICRO).as_unit();

// Angle

pub const DEGREE: Angle = RADIAN.scale(PI / 180.0).as_unit();
pub const ARCMINUTE: Angle = DEGREE.scale(1.0 / 60.0).as_unit();
pub const ARCSECOND: Angle = ARCMINUTE.scale(1.0 / 60.0).as_unit();
