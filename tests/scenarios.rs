//! End-to-end scenarios through the library API

use boolproof::ir::Symbol;
use boolproof::rewrite::{apply_law, Bindings, Law};
use boolproof::search::{search_fixed_length, search_up_to_length, SearchOutcome};
use boolproof::semantics::{classify, Assignment, Classification, Goal};
use boolproof::{verify_proof, Formula};

fn parse(text: &str) -> Formula {
    text.parse().unwrap()
}

fn proof_of(text: &str, goal: Goal) -> String {
    match search_up_to_length(&parse(text), goal, 5) {
        SearchOutcome::Proved(proof) => proof.to_string(),
        other => panic!("no proof for {}: {:?}", text, other),
    }
}

#[test]
fn excluded_middle_is_proved_by_complement() {
    let formula = parse("+ x0 - x0");
    assert_eq!(classify(&formula, Goal::Tautology), Classification::Tautology);
    assert_eq!(proof_of("+ x0 - x0", Goal::Tautology), "complement@0");
}

#[test]
fn contradiction_is_proved_by_complement() {
    let formula = parse("* x0 - x0");
    assert_eq!(
        classify(&formula, Goal::Contradiction),
        Classification::Contradiction
    );
    assert_eq!(proof_of("* x0 - x0", Goal::Contradiction), "complement@0");
}

#[test]
fn or_with_false_is_neither() {
    let formula = parse("+ x0 F");
    assert_eq!(
        classify(&formula, Goal::Tautology),
        Classification::Neither(Assignment::new(0, 1))
    );
    assert_eq!(
        Assignment::new(0, 1).to_string(),
        "x0 = false"
    );
}

#[test]
fn double_negation_of_true_takes_one_step() {
    // Double negation shares a law index with associativity.
    assert_eq!(proof_of("- - T", Goal::Tautology), "associative@0");
}

#[test]
fn triple_negation_needs_double_negation_then_negation() {
    let formula = parse("- - - F");
    assert_eq!(search_fixed_length(&formula, 1, Goal::Tautology, 10), None);
    assert_eq!(
        proof_of("- - - F", Goal::Tautology),
        "commutative@2, associative@0"
    );
    let proof: boolproof::ProofSequence = "commutative@2, associative@0".parse().unwrap();
    let trace = verify_proof(&formula, proof.steps(), Goal::Tautology).unwrap();
    assert_eq!(trace.steps[0].1.to_string(), "[- - T]");
    assert_eq!(trace.steps[1].1.to_string(), "[T]");
}

#[test]
fn idempotent_or_round_trip_restores_buffer_and_count() {
    let original = parse("* x0 - x1");
    let mut formula = original.clone();
    let mut bindings = Bindings::from_formula(&formula);
    let x0 = Symbol::var(0);

    assert!(apply_law(&mut formula, &mut bindings, Law::IdempotentOr, 1));
    assert_eq!(formula.to_string(), "[* + x0 x0 - x1]");
    assert_eq!(bindings.count(x0), 2);

    assert!(apply_law(&mut formula, &mut bindings, Law::IdempotentOr, 1));
    assert_eq!(formula, original);
    assert_eq!(bindings.count(x0), 1);
    assert_eq!(bindings, Bindings::from_formula(&original));
}

#[test]
fn non_matching_goal_is_not_searched_to_success() {
    assert_eq!(
        search_up_to_length(&parse("+ x0 - x0"), Goal::Contradiction, 2),
        SearchOutcome::NotFound
    );
}
