use super::*;

#[test]
fn test_arity_table() {
    let binary: Vec<Operator> = Operator::ALL
        .into_iter()
        .filter(|op| op.arity() == Arity::Binary)
        .collect();
    assert_eq!(
        binary,
        vec![
            Operator::Union,
            Operator::Intersection,
            Operator::Add,
            Operator::Multiply,
            Operator::Difference,
        ]
    );
    assert_eq!(Operator::Complement.arity(), Arity::Unary);
    assert_eq!(Operator::AlphaCut.arity(), Arity::Unary);
}

#[test]
fn test_only_alpha_cut_takes_threshold() {
    for op in Operator::ALL {
        assert_eq!(op.takes_threshold(), op == Operator::AlphaCut, "{op}");
    }
}

#[test]
fn test_lower_matches_arity() {
    for op in Operator::ALL {
        let lowered = BinaryOp::lower(op);
        assert_eq!(lowered.is_some(), op.arity() == Arity::Binary, "{op}");
        assert_eq!(lowered.map_or(op, BinaryOp::operator), op);
    }
}

#[test]
fn test_lowered_ops_map_back() {
    assert_eq!(BinaryOp::Difference.operator(), Operator::Difference);
    assert_eq!(UnaryOp::Complement.operator(), Operator::Complement);
    let t = MembershipValue::new(0.4).unwrap();
    assert_eq!(UnaryOp::AlphaCut(t).operator(), Operator::AlphaCut);
    assert_eq!(UnaryOp::AlphaCut(t).threshold(), Some(t));
    assert_eq!(UnaryOp::Complement.threshold(), None);
}

#[test]
fn test_display_uses_name() {
    assert_eq!(Operator::AlphaCut.to_string(), "alpha_cut");
    assert_eq!(Operator::Intersection.to_string(), "intersection");
}
