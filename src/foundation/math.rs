/// Clamp `n` into `[lo, hi]`.
///
/// NaN clamps to `lo`; infinities clamp to the nearest bound. Callers guarantee `lo <= hi`.
pub fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    if n.is_nan() {
        return lo;
    }
    n.max(lo).min(hi)
}

/// Clamp an optional value, substituting `default` when absent or NaN.
pub(crate) fn clamp_or(n: Option<f64>, default: f64, lo: f64, hi: f64) -> f64 {
    match n {
        Some(v) if !v.is_nan() => clamp(v, lo, hi),
        _ => default,
    }
}

/// Map non-finite or negative values to zero.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Format a number for CSS/SVG output: at most three decimals, no trailing zeros.
pub(crate) fn fmt_num(v: f64) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
