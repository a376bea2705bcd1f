use super::*;
use crate::errors::{ErrorCode, FuzzErrorKind};

#[test]
fn test_bounds_are_inclusive() {
    assert_eq!(MembershipValue::new(0.0), Ok(MembershipValue::ZERO));
    assert_eq!(MembershipValue::new(1.0), Ok(MembershipValue::ONE));
    assert_eq!(MembershipValue::new(0.25).map(MembershipValue::get), Ok(0.25));
}

#[test]
fn test_rejects_out_of_range() {
    for bad in [-0.1, 1.000_001, f64::INFINITY, f64::NEG_INFINITY] {
        let err = MembershipValue::new(bad).unwrap_err();
        assert_eq!(err.code(), ErrorCode::E7001, "value {bad}");
    }
}

#[test]
fn test_rejects_nan() {
    let err = MembershipValue::new(f64::NAN).unwrap_err();
    assert!(matches!(err.kind, FuzzErrorKind::OutOfRange { value, .. } if value.is_nan()));
}

#[test]
fn test_negative_zero_is_zero() {
    let value = MembershipValue::new(-0.0).unwrap();
    assert!(value.get().is_sign_positive());
    assert_eq!(value.cmp(&MembershipValue::ZERO), Ordering::Equal);
}

#[test]
fn test_saturating_clamps() {
    assert_eq!(MembershipValue::saturating(1.7), MembershipValue::ONE);
    assert_eq!(MembershipValue::saturating(-3.0), MembershipValue::ZERO);
    assert_eq!(MembershipValue::saturating(f64::NAN), MembershipValue::ZERO);
    assert_eq!(MembershipValue::saturating(0.5).get(), 0.5);
}

#[test]
fn test_ordering() {
    let low = MembershipValue::new(0.2).unwrap();
    let high = MembershipValue::new(0.8).unwrap();
    assert!(low < high);
    assert_eq!(low.max(high), high);
    assert_eq!(MembershipValue::default(), MembershipValue::ZERO);
}

#[test]
fn test_conversions() {
    let value = MembershipValue::try_from(0.75).unwrap();
    assert_eq!(f64::from(value), 0.75);
    assert_eq!(MembershipValue::from(true), MembershipValue::ONE);
    assert_eq!(MembershipValue::from(false), MembershipValue::ZERO);
    assert!(MembershipValue::try_from(2.0).is_err());
    assert_eq!(value.to_string(), "0.75");
}

#[test]
fn test_full_and_empty() {
    assert!(MembershipValue::ONE.is_full());
    assert!(MembershipValue::ZERO.is_empty());
    let half = MembershipValue::new(0.5).unwrap();
    assert!(!half.is_full());
    assert!(!half.is_empty());
}
