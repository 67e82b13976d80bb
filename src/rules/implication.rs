//! Rules of implication.
//!
//! These are one-directional and apply at the main operator only: each
//! predicate inspects the shape of the target and its cited sources
//! directly, with no recursion into sub-formulas.

use super::by_canonical_length;
use crate::formula::{BinaryOp, Formula};
use crate::proof::LineOfProof;
use crate::rules::RuleName;

/// Addition: from `p`, infer `p V q` (either disjunct may be the source).
pub(crate) fn addition(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [source] = sources else { return false };
    match target.proposition().binary_parts() {
        Some((BinaryOp::Or, left, right)) => {
            *left == *source.proposition() || *right == *source.proposition()
        }
        _ => false,
    }
}

/// Simplification: from `p & q`, infer either conjunct.
pub(crate) fn simplification(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [source] = sources else { return false };
    match source.proposition().binary_parts() {
        Some((BinaryOp::And, left, right)) => {
            *left == *target.proposition() || *right == *target.proposition()
        }
        _ => false,
    }
}

/// Conjunction: from `p` and `q`, infer `p & q`.
///
/// Each conjunct must match one of the cited lines; the permissive reading
/// accepts `p & p` from two distinct citations of `p`.
pub(crate) fn conjunction(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [first, second] = sources else { return false };
    match target.proposition().binary_parts() {
        Some((BinaryOp::And, left, right)) => {
            (*left == *first.proposition() || *right == *first.proposition())
                && (*left == *second.proposition() || *right == *second.proposition())
        }
        _ => false,
    }
}

/// Modus Ponens: from `p` and `p -> q`, infer `q`.
///
/// The conditional is identified as the longer cited formula; its
/// canonical string strictly contains the antecedent's.
pub(crate) fn modus_ponens(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (longer, shorter) = by_canonical_length(a.proposition(), b.proposition());
    match longer.binary_parts() {
        Some((BinaryOp::Implies, antecedent, consequent)) => {
            *antecedent == *shorter && *consequent == *target.proposition()
        }
        _ => false,
    }
}

/// Modus Tollens: from `~q` and `p -> q`, infer `~p`.
pub(crate) fn modus_tollens(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (longer, shorter) = by_canonical_length(a.proposition(), b.proposition());
    match longer.binary_parts() {
        Some((BinaryOp::Implies, antecedent, consequent)) => {
            consequent.is_negation_of(shorter) && antecedent.is_negation_of(target.proposition())
        }
        _ => false,
    }
}

fn chains_through(target: &Formula, first: &Formula, second: &Formula) -> bool {
    match (
        target.binary_parts(),
        first.binary_parts(),
        second.binary_parts(),
    ) {
        (
            Some((BinaryOp::Implies, t_ant, t_cons)),
            Some((BinaryOp::Implies, f_ant, f_cons)),
            Some((BinaryOp::Implies, s_ant, s_cons)),
        ) => f_cons == s_ant && t_ant == f_ant && t_cons == s_cons,
        _ => false,
    }
}

/// Hypothetical Syllogism: from `p -> q` and `q -> r`, infer `p -> r`.
/// The cited conditionals may arrive in either order.
pub(crate) fn hypothetical_syllogism(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    chains_through(target.proposition(), a.proposition(), b.proposition())
        || chains_through(target.proposition(), b.proposition(), a.proposition())
}

/// Disjunctive Syllogism: from `p V q` and `~p`, infer `q`.
///
/// The disjunction is the longer cited formula.  One disjunct must negate
/// the other source, the other disjunct must be the target.
pub(crate) fn disjunctive_syllogism(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (disjunction, other) = by_canonical_length(a.proposition(), b.proposition());
    match disjunction.binary_parts() {
        Some((BinaryOp::Or, left, right)) => {
            (left.is_negation_of(other) && *right == *target.proposition())
                || (right.is_negation_of(other) && *left == *target.proposition())
        }
        _ => false,
    }
}

/// Constructive Dilemma: from `p V q` and `(p -> r) & (q -> s)`, infer
/// `r V s`.
///
/// The conjunction of conditionals is the longer cited formula.  This is
/// the loose reading: every antecedent of the conjunction must appear
/// among the disjuncts, in any order.
pub(crate) fn constructive_dilemma(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (conjunction, disjunction) = by_canonical_length(a.proposition(), b.proposition());
    if !matches!(
        target.proposition().binary_parts(),
        Some((BinaryOp::Or, ..))
    ) {
        return false;
    }
    let Some((BinaryOp::And, first, second)) = conjunction.binary_parts() else {
        return false;
    };
    let Some((BinaryOp::Or, d1, d2)) = disjunction.binary_parts() else {
        return false;
    };
    let (Some((BinaryOp::Implies, ant1, _)), Some((BinaryOp::Implies, ant2, _))) =
        (first.binary_parts(), second.binary_parts())
    else {
        return false;
    };
    (ant1 == d1 || ant1 == d2) && (ant2 == d1 || ant2 == d2)
}

/// Conditional Proof: discharge an assumption `p` and a goal `q` derived
/// from it as the conditional `p -> q`.
pub(crate) fn conditional_proof(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (assumption, goal) = if a.rule() == RuleName::Assumption {
        (a, b)
    } else {
        (b, a)
    };
    match target.proposition().binary_parts() {
        Some((BinaryOp::Implies, antecedent, consequent)) => {
            *antecedent == *assumption.proposition() && *consequent == *goal.proposition()
        }
        _ => false,
    }
}

/// Indirect Proof: an assumption that led to a contradiction `q & ~q`
/// licenses the negation of the assumption.
pub(crate) fn indirect_proof(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [a, b] = sources else { return false };
    let (assumption, contradiction) = if a.proposition().is_negation_of(target.proposition()) {
        (a, b)
    } else {
        (b, a)
    };
    if !target.proposition().is_negation_of(assumption.proposition()) {
        return false;
    }
    match contradiction.proposition().binary_parts() {
        Some((BinaryOp::And, left, right)) => left.is_negation_of(right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::LineOfProof;
    use std::collections::BTreeSet;

    fn line(number: usize, s: &str, rule: RuleName) -> LineOfProof {
        LineOfProof::new(
            number,
            Formula::parse(s).expect("test formula should parse"),
            rule,
            Vec::new(),
            BTreeSet::new(),
        )
    }

    fn premise(number: usize, s: &str) -> LineOfProof {
        line(number, s, RuleName::Premise)
    }

    #[test]
    fn addition_accepts_either_disjunct() {
        let source = premise(1, "p");
        assert!(addition(&premise(2, "p V q"), &[&source]));
        assert!(addition(&premise(2, "q V p"), &[&source]));
        assert!(!addition(&premise(2, "q V r"), &[&source]));
        assert!(!addition(&premise(2, "p & q"), &[&source]));
    }

    #[test]
    fn simplification_extracts_a_conjunct() {
        let source = premise(1, "p & q");
        assert!(simplification(&premise(2, "p"), &[&source]));
        assert!(simplification(&premise(2, "q"), &[&source]));
        assert!(!simplification(&premise(2, "r"), &[&source]));
        let disj = premise(1, "p V q");
        assert!(!simplification(&premise(2, "p"), &[&disj]));
    }

    #[test]
    fn conjunction_joins_cited_lines() {
        let p = premise(1, "p");
        let q = premise(2, "q");
        assert!(conjunction(&premise(3, "p & q"), &[&p, &q]));
        assert!(conjunction(&premise(3, "q & p"), &[&p, &q]));
        assert!(!conjunction(&premise(3, "p & r"), &[&p, &q]));
        // Permissive reading: duplicate conjuncts are accepted.
        assert!(conjunction(&premise(3, "p & p"), &[&p, &q]));
    }

    #[test]
    fn modus_ponens_detaches_the_consequent() {
        let minor = premise(1, "p");
        let major = premise(2, "p -> q");
        assert!(modus_ponens(&premise(3, "q"), &[&minor, &major]));
        assert!(modus_ponens(&premise(3, "q"), &[&major, &minor]));
        assert!(!modus_ponens(&premise(3, "p"), &[&minor, &major]));
        assert!(!modus_ponens(&premise(3, "r"), &[&minor, &major]));
    }

    #[test]
    fn modus_ponens_with_complex_antecedent() {
        let minor = premise(1, "p & r");
        let major = premise(2, "(p & r) -> q");
        assert!(modus_ponens(&premise(3, "q"), &[&minor, &major]));
    }

    #[test]
    fn modus_tollens_negates_the_antecedent() {
        let denial = premise(1, "~q");
        let major = premise(2, "p -> q");
        assert!(modus_tollens(&premise(3, "~p"), &[&denial, &major]));
        assert!(!modus_tollens(&premise(3, "p"), &[&denial, &major]));
        let affirm = premise(1, "q");
        assert!(!modus_tollens(&premise(3, "~p"), &[&affirm, &major]));
    }

    #[test]
    fn hypothetical_syllogism_chains_conditionals() {
        let first = premise(1, "p -> q");
        let second = premise(2, "q -> r");
        assert!(hypothetical_syllogism(&premise(3, "p -> r"), &[&first, &second]));
        assert!(hypothetical_syllogism(&premise(3, "p -> r"), &[&second, &first]));
        assert!(!hypothetical_syllogism(&premise(3, "r -> p"), &[&first, &second]));
    }

    #[test]
    fn disjunctive_syllogism_eliminates_a_disjunct() {
        let disj = premise(1, "p V q");
        let denial = premise(2, "~p");
        assert!(disjunctive_syllogism(&premise(3, "q"), &[&disj, &denial]));
        assert!(!disjunctive_syllogism(&premise(3, "p"), &[&disj, &denial]));
        let denial_q = premise(2, "~q");
        assert!(disjunctive_syllogism(&premise(3, "p"), &[&disj, &denial_q]));
    }

    #[test]
    fn constructive_dilemma_matches_antecedents() {
        let disj = premise(1, "p V q");
        let conj = premise(2, "(p -> r) & (q -> s)");
        assert!(constructive_dilemma(&premise(3, "r V s"), &[&disj, &conj]));
        // Loose reading ignores disjunct order.
        let swapped = premise(1, "q V p");
        assert!(constructive_dilemma(&premise(3, "r V s"), &[&swapped, &conj]));
        let wrong = premise(1, "p V t");
        assert!(!constructive_dilemma(&premise(3, "r V s"), &[&wrong, &conj]));
        assert!(!constructive_dilemma(&premise(3, "r & s"), &[&disj, &conj]));
    }

    #[test]
    fn conditional_proof_discharges_the_assumption() {
        let assumption = line(1, "p", RuleName::Assumption);
        let goal = premise(2, "q");
        assert!(conditional_proof(&premise(3, "p -> q"), &[&assumption, &goal]));
        assert!(conditional_proof(&premise(3, "p -> q"), &[&goal, &assumption]));
        assert!(!conditional_proof(&premise(3, "q -> p"), &[&assumption, &goal]));
        assert!(!conditional_proof(&premise(3, "p & q"), &[&assumption, &goal]));
    }

    #[test]
    fn indirect_proof_requires_a_contradiction() {
        let assumption = line(1, "p", RuleName::Assumption);
        let contradiction = premise(2, "q & ~q");
        assert!(indirect_proof(&premise(3, "~p"), &[&assumption, &contradiction]));
        let no_contradiction = premise(2, "q & r");
        assert!(!indirect_proof(&premise(3, "~p"), &[&assumption, &no_contradiction]));
        assert!(!indirect_proof(&premise(3, "p"), &[&assumption, &contradiction]));
    }
}
