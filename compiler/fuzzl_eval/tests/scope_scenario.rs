//! End-to-end runs through the evaluation gate: build sets, bind them in
//! nested scopes, fetch them back and test membership, the way a front
//! end would drive the core.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use fuzzl_eval::{
    combine, init_tracing, EvaluationGate, FuzzErrorKind, FuzzySet, Instruction, Operator,
    ScopeStack,
};
use pretty_assertions::assert_eq;

fn fetch(gate: &mut EvaluationGate<'_>, name: &str) -> FuzzySet<f64> {
    gate.evaluate(Instruction::get(name))
        .unwrap()
        .into_set()
        .unwrap()
        .downcast::<f64>(name)
        .unwrap()
}

fn test_at(gate: &mut EvaluationGate<'_>, set: FuzzySet<f64>, x: f64) -> f64 {
    gate.evaluate(Instruction::test_gate(set, x))
        .unwrap()
        .as_membership()
        .unwrap()
        .get()
}

#[test]
fn crisp_halves_through_the_gate() {
    init_tracing();
    let mut scopes = ScopeStack::new();
    let mut gate = EvaluationGate::new(&mut scopes);

    let a = FuzzySet::named("a", |x: &f64| if *x > 0.5 { 1.0 } else { 0.0 });
    let b = FuzzySet::named("b", |x: &f64| if *x < 0.5 { 1.0 } else { 0.0 });
    gate.evaluate(Instruction::assign("a", a)).unwrap();
    gate.evaluate(Instruction::assign("b", b)).unwrap();

    let a = fetch(&mut gate, "a");
    let b = fetch(&mut gate, "b");
    let either = combine(a.clone(), Operator::Union, Some(b.clone()), None).unwrap();
    let both = combine(a.clone(), Operator::Intersection, Some(b.clone()), None).unwrap();
    let neither = combine(either.clone(), Operator::Complement, None, None).unwrap();
    let not_a = combine(a, Operator::Complement, None, None).unwrap();
    let not_b = combine(b, Operator::Complement, None, None).unwrap();
    let dual = combine(not_a, Operator::Intersection, Some(not_b), None).unwrap();
    gate.evaluate(Instruction::assign("neither", neither)).unwrap();

    assert_eq!(test_at(&mut gate, either, 0.3), 1.0);
    assert_eq!(test_at(&mut gate, both, 0.3), 0.0);
    let neither = fetch(&mut gate, "neither");
    assert_eq!(neither.to_string(), "complement(union(a, b))");
    assert_eq!(test_at(&mut gate, neither, 0.3), 0.0);
    assert_eq!(test_at(&mut gate, dual, 0.3), 0.0);
}

#[test]
fn nested_scopes_shadow_and_restore() {
    let a = FuzzySet::primitive(|_: &f64| 0.25);
    let b = FuzzySet::primitive(|_: &f64| 0.75);
    let mut scopes = ScopeStack::new();
    let mut gate = EvaluationGate::new(&mut scopes);

    gate.scopes().enter_scope();
    gate.evaluate(Instruction::assign("v", a.clone())).unwrap();
    gate.scopes().enter_scope();
    gate.evaluate(Instruction::assign("v", b.clone())).unwrap();

    let inner = fetch(&mut gate, "v");
    assert!(inner.ptr_eq(&b));
    assert_eq!(test_at(&mut gate, inner, 0.0), 0.75);

    gate.scopes().exit_scope().unwrap();
    let outer = fetch(&mut gate, "v");
    assert!(outer.ptr_eq(&a));
    assert_eq!(test_at(&mut gate, outer, 0.0), 0.25);

    gate.scopes().exit_scope().unwrap();
    assert_eq!(
        gate.scopes().exit_scope().unwrap_err().kind,
        FuzzErrorKind::CannotExitRootScope
    );
    assert_eq!(
        gate.evaluate(Instruction::get("v")).unwrap_err().kind,
        FuzzErrorKind::UndefinedVariable {
            name: "v".to_string()
        }
    );
}

#[test]
fn bound_set_is_also_an_operand() {
    let mut scopes = ScopeStack::new();
    let base = FuzzySet::primitive(|x: &f64| x.clamp(0.0, 1.0));
    scopes.assign("base", base.clone());

    let cut = base.alpha_cut(0.6).unwrap();
    scopes.enter_scope();
    scopes.assign("cut", cut);

    let mut gate = EvaluationGate::new(&mut scopes);
    let cut = fetch(&mut gate, "cut");
    let base = fetch(&mut gate, "base");
    assert_eq!(test_at(&mut gate, cut.clone(), 0.6), 1.0);
    assert_eq!(test_at(&mut gate, cut, 0.59), 0.0);
    assert_eq!(test_at(&mut gate, base, 0.59), 0.59);
}
