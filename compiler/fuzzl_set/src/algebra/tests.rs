use super::*;

fn m(value: f64) -> MembershipValue {
    MembershipValue::new(value).unwrap()
}

#[test]
fn test_union_is_max() {
    assert_eq!(evaluate_binary(BinaryOp::Union, m(0.25), m(0.75)), m(0.75));
}

#[test]
fn test_intersection_is_min() {
    assert_eq!(
        evaluate_binary(BinaryOp::Intersection, m(0.25), m(0.75)),
        m(0.25)
    );
}

#[test]
fn test_add_saturates() {
    assert_eq!(evaluate_binary(BinaryOp::Add, m(0.25), m(0.5)), m(0.75));
    assert_eq!(evaluate_binary(BinaryOp::Add, m(0.75), m(0.5)), MembershipValue::ONE);
}

#[test]
fn test_multiply() {
    assert_eq!(evaluate_binary(BinaryOp::Multiply, m(0.5), m(0.5)), m(0.25));
    assert_eq!(
        evaluate_binary(BinaryOp::Multiply, MembershipValue::ONE, m(0.5)),
        m(0.5)
    );
}

#[test]
fn test_difference_is_bounded() {
    assert_eq!(evaluate_binary(BinaryOp::Difference, m(0.75), m(0.25)), m(0.5));
    assert_eq!(
        evaluate_binary(BinaryOp::Difference, m(0.25), m(0.75)),
        MembershipValue::ZERO
    );
}

#[test]
fn test_complement() {
    assert_eq!(evaluate_unary(UnaryOp::Complement, m(0.25)), m(0.75));
    assert_eq!(
        evaluate_unary(UnaryOp::Complement, MembershipValue::ONE),
        MembershipValue::ZERO
    );
}

#[test]
fn test_alpha_cut_is_inclusive() {
    let cut = UnaryOp::AlphaCut(m(0.5));
    assert_eq!(evaluate_unary(cut, m(0.5)), MembershipValue::ONE);
    assert_eq!(evaluate_unary(cut, m(0.49)), MembershipValue::ZERO);
    assert_eq!(evaluate_unary(cut, m(0.9)), MembershipValue::ONE);
}

#[test]
fn test_alpha_cut_at_extremes() {
    let at_zero = UnaryOp::AlphaCut(MembershipValue::ZERO);
    assert_eq!(evaluate_unary(at_zero, MembershipValue::ZERO), MembershipValue::ONE);

    let at_one = UnaryOp::AlphaCut(MembershipValue::ONE);
    assert_eq!(evaluate_unary(at_one, m(0.999)), MembershipValue::ZERO);
    assert_eq!(evaluate_unary(at_one, MembershipValue::ONE), MembershipValue::ONE);
}
