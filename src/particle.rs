//! Particle identifiers: atomic number `Z` and mass number `A`, packed into one integer id
//! `100 · Z + A` that orders them.

/// A particle species by atomic number `z` and mass number `a`.
///
/// Leptons have `a == 0` and `z` equal to their charge; nuclei have `a > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId {
  z: i32,
  a: i32,
}

impl ParticleId {
  pub const ELECTRON: Self = Self::new(-1, 0);
  pub const POSITRON: Self = Self::new(1, 0);
  pub const PROTON: Self = Self::new(1, 1);
  pub const HELIUM: Self = Self::new(2, 4);

  /// The particle with atomic number `z` and mass number `a`.
  ///
  /// # Panics
  ///
  /// If `a` is negative, or if the id `100 · z + a` does not fit an `i32`. In a `const` this is a
  /// build failure:
  ///
  /// ```compile_fail
  /// # use astro_units::ParticleId;
  /// const BAD: ParticleId = ParticleId::new(1, -1);
  /// ```
  pub const fn new(z: i32, a: i32) -> Self {
    assert!(a >= 0, "negative mass number");
    assert!(packed(z, a).is_some(), "particle id out of range");
    Self { z, a }
  }

  /// Like [`Self::new`], but `None` instead of panicking.
  pub const fn try_new(z: i32, a: i32) -> Option<Self> {
    if a >= 0 && packed(z, a).is_some() {Some(Self { z, a })} else {None}
  }

  /// The packed id, `100 · Z + A`.
  pub const fn id(self) -> i32 {
    self.z * 100 + self.a
  }

  pub const fn is_nucleus(self) -> bool {
    self.a > 0
  }

  pub const fn atomic_number(self) -> i32 {
    self.z
  }

  pub const fn mass_number(self) -> i32 {
    self.a
  }
}

/// `100 · z + a`, if it fits.
const fn packed(z: i32, a: i32) -> Option<i32> {
  match z.checked_mul(100) {
    Some(hundreds) => hundreds.checked_add(a),
    None => None,
  }
}

impl PartialOrd for ParticleId {
  fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for ParticleId {
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.id().cmp(&other.id()).then(self.a.cmp(&other.a))
  }
}

impl core::fmt::Display for ParticleId {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{}", self.id())
  }
}
