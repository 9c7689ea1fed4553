use super::*;

#[test]
fn clamp_stays_in_bounds() {
    let bounds = [(0.0, 1.0), (-3.0, 3.0), (0.7, 1.4), (2.0, 2.0)];
    let samples = [-100.0, -1.0, 0.0, 0.5, 0.7, 1.0, 1.4, 2.0, 99.0, f64::INFINITY];
    for (lo, hi) in bounds {
        for n in samples {
            let v = clamp(n, lo, hi);
            assert!(v >= lo && v <= hi, "clamp({n}, {lo}, {hi}) = {v}");
            if n >= lo && n <= hi {
                assert_eq!(v, n);
            }
        }
    }
}

#[test]
fn clamp_nan_goes_to_lower_bound() {
    assert_eq!(clamp(f64::NAN, 0.7, 1.4), 0.7);
}

#[test]
fn clamp_infinities_go_to_nearest_bound() {
    assert_eq!(clamp(f64::INFINITY, 0.0, 1.0), 1.0);
    assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
}

#[test]
fn clamp_or_defaults_missing_and_nan() {
    assert_eq!(clamp_or(None, 1.0, 0.0, 1.6), 1.0);
    assert_eq!(clamp_or(Some(f64::NAN), 1.0, 0.0, 1.6), 1.0);
    assert_eq!(clamp_or(Some(5.0), 1.0, 0.0, 1.6), 1.6);
}

#[test]
fn non_negative_filters_garbage() {
    assert_eq!(non_negative(-4.0), 0.0);
    assert_eq!(non_negative(f64::NAN), 0.0);
    assert_eq!(non_negative(f64::INFINITY), 0.0);
    assert_eq!(non_negative(12.5), 12.5);
}

#[test]
fn fnv_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"hyper");
    a.write_bytes(b"blog");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"hyperblog");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::OFFSET_BASIS);
}

#[test]
fn fmt_num_trims_trailing_zeros() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(0.95), "0.95");
    assert_eq!(fmt_num(1.52), "1.52");
    assert_eq!(fmt_num(2.6666666), "2.667");
    assert_eq!(fmt_num(-0.0001), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
}
