//! Fixture-driven proof evaluation tests.
//!
//! Each fixture is an ordered list of `(formula, rule, cited lines)`
//! triples; the final triple's formula doubles as the intended conclusion,
//! mirroring the external proof-input contract.

use natded::{Proof, RuleName};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProofFixture {
    name: String,
    lines: Vec<(String, String, Vec<usize>)>,
    valid: bool,
}

fn load_fixtures() -> Vec<ProofFixture> {
    serde_json::from_str(include_str!("fixtures/proofs.json"))
        .expect("proof fixtures should deserialize")
}

fn build_proof(fixture: &ProofFixture) -> Proof {
    let mut proof = Proof::new();
    for (formula, rule, cited) in &fixture.lines {
        proof
            .add_line_str(formula, rule, cited.clone())
            .unwrap_or_else(|e| panic!("fixture `{}`: {e}", fixture.name));
    }
    let (conclusion, _, _) = fixture.lines.last().expect("fixture should have lines");
    proof
        .set_conclusion_str(conclusion)
        .unwrap_or_else(|e| panic!("fixture `{}`: {e}", fixture.name));
    proof
}

#[test]
fn fixtures_evaluate_to_their_expected_scores() {
    for fixture in load_fixtures() {
        let proof = build_proof(&fixture);
        let evaluation = proof.evaluate();
        assert_eq!(
            evaluation.is_valid(),
            fixture.valid,
            "fixture `{}`: score {}, invalid lines {:?}, conclusion reached: {}, open assumptions {:?}",
            fixture.name,
            evaluation.score,
            evaluation.invalid_lines(),
            evaluation.last_line_is_conclusion,
            evaluation.open_assumptions,
        );
    }
}

#[test]
fn evaluation_reports_on_every_line() {
    for fixture in load_fixtures() {
        let proof = build_proof(&fixture);
        let evaluation = proof.evaluate();
        assert_eq!(
            evaluation.line_validity.len(),
            fixture.lines.len(),
            "fixture `{}` should report on all lines",
            fixture.name
        );
    }
}

#[test]
fn premise_lines_are_always_valid() {
    for fixture in load_fixtures() {
        let proof = build_proof(&fixture);
        let evaluation = proof.evaluate();
        for (line, valid) in proof.lines().iter().zip(&evaluation.line_validity) {
            if line.rule() == RuleName::Premise {
                assert!(
                    *valid,
                    "fixture `{}`: premise line {} should be valid",
                    fixture.name,
                    line.line_number()
                );
            }
        }
    }
}

#[test]
fn assumption_sets_match_the_discharge_rules() {
    let fixtures = load_fixtures();
    let indirect = fixtures
        .iter()
        .find(|fixture| fixture.name == "indirect proof")
        .expect("indirect proof fixture should exist");
    let proof = build_proof(indirect);

    // The assumption rests on itself and flows through Modus Ponens and
    // Conjunction; Indirect Proof discharges it.
    assert_eq!(
        proof.line(3).map(|line| line.assumptions().clone()),
        Some(std::collections::BTreeSet::from([3]))
    );
    assert_eq!(
        proof.line(5).map(|line| line.assumptions().clone()),
        Some(std::collections::BTreeSet::from([3]))
    );
    assert_eq!(
        proof.line(6).map(|line| line.assumptions().clone()),
        Some(std::collections::BTreeSet::new())
    );
}
