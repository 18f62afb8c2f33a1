use super::*;

/// A fixed-capacity, `const`-buildable string.
///
/// Build-time dimension errors are panics inside associated consts, and the only way to get a
/// non-literal message out of a const panic is `panic!("{}", some_str)`. So we need to format
/// dimension vectors into text *in const fn*, without an allocator: that's what this is.
///
/// Text beyond [`Label::CAPACITY`] bytes is silently dropped; the capacity comfortably fits two
/// worst-case vectors (nine `i64 / i64` exponents each) plus the surrounding message.
#[derive(Clone, Copy)]
pub struct Label {
  buf: [u8; Label::CAPACITY],
  len: usize,
}

impl Label {
  pub const CAPACITY: usize = 1024;

  pub const fn new() -> Self {
    Self { buf: [0; Self::CAPACITY], len: 0 }
  }

  #[inline]
  const fn push_byte(&mut self, byte: u8) {
    if self.len < Self::CAPACITY {
      self.buf[self.len] = byte;
      self.len += 1;
    }
  }

  /// Append `s`. Only ASCII is ever pushed, which keeps [`Self::as_str`] valid after truncation.
  pub const fn push_str(&mut self, s: &str) {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
      self.push_byte(bytes[i]);
      i += 1;
    }
  }

  /// Append the decimal representation of `n`.
  pub const fn push_i64(&mut self, n: i64) {
    if n < 0 {
      self.push_byte(b'-');
    }
    let mut digits = [0u8; 20];
    let mut count = 0;
    let mut rest = n.unsigned_abs();
    loop {
      digits[count] = b'0' + (rest % 10) as u8;
      rest /= 10;
      count += 1;
      if rest == 0 {
        break
      }
    }
    while count > 0 {
      count -= 1;
      self.push_byte(digits[count]);
    }
  }

  /// Append `n` or `n/d`.
  pub const fn push_ratio(&mut self, r: Ratio) {
    self.push_i64(r.num());
    if !r.is_integer() {
      self.push_byte(b'/');
      self.push_i64(r.den());
    }
  }

  /// Append the space-separated non-zero factors of `v`, e.g. `m s^-1`, or `1` if there are none.
  pub const fn push_vector(&mut self, v: &DimensionVector) {
    let mut first = true;
    let mut i = 0;
    while i < BaseDimension::COUNT {
      let axis = BaseDimension::ALL[i];
      let exp = v.get(axis);
      if !exp.is_zero() {
        if !first {
          self.push_byte(b' ');
        }
        first = false;
        self.push_str(axis.symbol());
        if !exp.same_as(Ratio::ONE) {
          self.push_byte(b'^');
          self.push_ratio(exp);
        }
      }
      i += 1;
    }
    if first {
      self.push_byte(b'1');
    }
  }

  pub const fn len(&self) -> usize {
    self.len
  }

  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub const fn as_str(&self) -> &str {
    match core::str::from_utf8(self.buf.split_at(self.len).0) {
      Ok(s) => s,
      Err(_) => panic!("Label only ever holds ASCII"),
    }
  }
}

impl Default for Label {
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Debug for Label {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Label").field(&self.as_str()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn integers() {
    for n in [0, 1, -1, 9, 10, -10, 1234567, i64::MAX, i64::MIN] {
      let mut label = Label::new();
      label.push_i64(n);
      assert_eq!(label.as_str(), n.to_string());
    }
  }

  #[test]
  fn ratios() {
    let mut label = Label::new();
    label.push_ratio(Ratio::new(-6, 4));
    label.push_str(" ");
    label.push_ratio(Ratio::integer(7));
    assert_eq!(label.as_str(), "-3/2 7");
  }

  #[test]
  fn truncates_at_capacity() {
    let mut label = Label::new();
    for _ in 0 .. Label::CAPACITY + 10 {
      label.push_str("x");
    }
    assert_eq!(label.len(), Label::CAPACITY);
  }

  #[test]
  fn worst_case_fits() {
    let worst = DimensionVector::new([Ratio::new(i64::MIN, i64::MAX); BaseDimension::COUNT]);
    let mut label = Label::new();
    label.push_str("dimension mismatch: [");
    label.push_vector(&worst);
    label.push_str("] vs [");
    label.push_vector(&worst);
    label.push_str("]");
    assert!(label.as_str().ends_with(']'));
  }

  #[test]
  fn const_built() {
    const LABEL: Label = DimensionVector::from_integers([1, -2, 0, 0, 0, 0, 0, 0, 0]).label();
    assert_eq!(LABEL.as_str(), "m s^-2");
  }
}
