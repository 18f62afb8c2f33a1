//! SI prefix factors, as bare numbers: `units::METRE.scale(prefix::KILO)`.

pub const YOCTO: f64 = 1e-24;
pub const ZEPTO: f64 = 1e-21;
pub const ATTO: f64 = 1e-18;
pub const FEMTO: f64 = 1e-15;
pub const PICO: f64 = 1e-12;
pub const NANO: f64 = 1e-9;
pub const MICRO: f64 = 1e-6;
pub const MILLI: f64 = 1e-3;
pub const CENTI: f64 = 1e-2;
pub const DECI: f64 = 1e-1;
pub const DECA: f64 = 1e1;
pub const HECTO: f64 = 1e2;
pub const KILO: f64 = 1e3;
pub const MEGA: f64 = 1e6;
pub const GIGA: f64 = 1e9;
pub const TERA: f64 = 1e12;
pub const PETA: f64 = 1e15;
pub const EXA: f64 = 1e18;
pub const ZETTA: f64 = 1e21;
pub const YOTTA: f64 = 1e24;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ladder() {
    let ladder = [
      YOCTO, ZEPTO, ATTO, FEMTO, PICO, NANO, MICRO, MILLI, 1.0, KILO, MEGA, GIGA, TERA, PETA, EXA,
      ZETTA, YOTTA,
    ];
    for pair in ladder.windows(2) {
      assert!((pair[1] / pair[0] - 1e3).abs() < 1e-9, "{pair:?}");
    }
    assert_eq!(CENTI * HECTO, 1.0);
    assert_eq!(DECI * DECA, 1.0);
  }
}
