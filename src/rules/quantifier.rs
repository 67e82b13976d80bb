//! Quantifier rules: Existential Generalization, Universal Instantiation,
//! and Quantifier Negation.
//!
//! Generalization and instantiation match by positional substitution over
//! canonical strings: the quantified variable is replaced throughout the
//! scope by whatever term sits at the corresponding position in the other
//! formula, and the results are compared verbatim.

use super::replacement::check_rule_recursively;
use crate::formula::{Formula, Quantifier};
use crate::proof::LineOfProof;

/// Substitute the quantified variable through `scope` with the character
/// occupying the same position in `other`, then compare.
///
/// A scope that never mentions the variable quantifies vacuously and must
/// match `other` verbatim.
fn substitution_matches(scope: &str, quantified_var: char, other: &str) -> bool {
    match scope.find(quantified_var) {
        None => scope == other,
        Some(index) => {
            let Some(&byte) = other.as_bytes().get(index) else {
                return false;
            };
            let bound = byte as char;
            let substituted: String = scope
                .chars()
                .map(|c| if c == quantified_var { bound } else { c })
                .collect();
            substituted == other
        }
    }
}

/// Existential Generalization at the main operator: `F(a)` generalizes to
/// `Ex(F(x))`.  The quantified variable must not occur free in the source.
fn simple_existential_generalization(t: &Formula, s: &Formula) -> bool {
    let Some((Quantifier::Existential, var, scope)) = t.quantified_parts() else {
        return false;
    };
    if s.atomic_variables().contains(&var) {
        return false;
    }
    substitution_matches(scope.canonical(), var, s.canonical())
}

/// Existential Generalization, lifted to sub-formula positions.
pub(crate) fn existential_generalization(
    target: &LineOfProof,
    sources: &[&LineOfProof],
) -> bool {
    let [source] = sources else { return false };
    check_rule_recursively(
        simple_existential_generalization,
        target.proposition(),
        source.proposition(),
    )
}

/// Universal Instantiation: `Ax(F(x))` instantiates to `F(a)` for any
/// term `a` (checked at the top level only).
pub(crate) fn universal_instantiation(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [source] = sources else { return false };
    let Some((Quantifier::Universal, var, scope)) = source.proposition().quantified_parts()
    else {
        return false;
    };
    substitution_matches(scope.canonical(), var, target.proposition().canonical())
}

/// Peel the leading quantifier chain off a formula.
fn quantifier_chain(formula: &Formula) -> (Vec<(Quantifier, char)>, &Formula) {
    let mut chain = Vec::new();
    let mut current = formula;
    while let Some((quantifier, var, scope)) = current.quantified_parts() {
        chain.push((quantifier, var));
        current = scope;
    }
    (chain, current)
}

/// Quantifier Negation at the main operator: `~(Ex(...))` against
/// `Ax(~...)` and duals.  The negated side's whole quantifier chain is
/// flipped `E`<->`A` and compared against the other side's chain; the
/// quantifier-free bodies must be negations of each other.
fn simple_quantifier_negation(t: &Formula, s: &Formula) -> bool {
    fn negated_quantifier(f: &Formula) -> Option<&Formula> {
        f.negated_operand()
            .filter(|inner| inner.quantified_parts().is_some())
    }
    let (negated_inner, other) = if let Some(inner) = negated_quantifier(t) {
        (inner, s)
    } else if let Some(inner) = negated_quantifier(s) {
        (inner, t)
    } else {
        return false;
    };
    let (negated_chain, negated_body) = quantifier_chain(negated_inner);
    let (other_chain, other_body) = quantifier_chain(other);
    if negated_chain.is_empty() || other_chain.is_empty() {
        return false;
    }
    let flipped: Vec<(Quantifier, char)> = negated_chain
        .iter()
        .map(|&(quantifier, var)| (quantifier.flipped(), var))
        .collect();
    flipped == other_chain && negated_body.is_negation_of(other_body)
}

/// Quantifier Negation, lifted to sub-formula positions.
pub(crate) fn quantifier_negation(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
    let [source] = sources else { return false };
    check_rule_recursively(
        simple_quantifier_negation,
        target.proposition(),
        source.proposition(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proof::LineOfProof;
    use crate::rules::RuleName;
    use std::collections::BTreeSet;

    fn f(s: &str) -> Formula {
        Formula::parse(s).expect("test formula should parse")
    }

    fn premise(number: usize, s: &str) -> LineOfProof {
        LineOfProof::new(number, f(s), RuleName::Premise, Vec::new(), BTreeSet::new())
    }

    #[test]
    fn substitution_positions() {
        assert!(substitution_matches("F(x)", 'x', "F(a)"));
        assert!(substitution_matches("F(x,x)", 'x', "F(a,a)"));
        assert!(!substitution_matches("F(x,x)", 'x', "F(a,b)"));
        // Vacuous quantification: scope must match verbatim.
        assert!(substitution_matches("F(a)", 'x', "F(a)"));
        assert!(!substitution_matches("F(a)", 'x', "F(b)"));
    }

    #[test]
    fn existential_generalization_from_an_instance() {
        let instance = premise(1, "F(a)");
        let target = premise(2, "Ex(F(x))");
        assert!(existential_generalization(&target, &[&instance]));

        let wrong = premise(2, "Ex(G(x))");
        assert!(!existential_generalization(&wrong, &[&instance]));
    }

    #[test]
    fn existential_generalization_rejects_captured_variables() {
        // The quantified variable may not already occur in the source.
        let instance = premise(1, "F(x)");
        let target = premise(2, "Ex(F(x))");
        assert!(!existential_generalization(&target, &[&instance]));
    }

    #[test]
    fn universal_instantiation_substitutes_a_term() {
        let universal = premise(1, "Ax(F(x))");
        assert!(universal_instantiation(&premise(2, "F(a)"), &[&universal]));
        assert!(universal_instantiation(&premise(2, "F(b)"), &[&universal]));
        assert!(!universal_instantiation(&premise(2, "G(a)"), &[&universal]));

        let not_universal = premise(1, "Ex(F(x))");
        assert!(!universal_instantiation(&premise(2, "F(a)"), &[&not_universal]));
    }

    #[test]
    fn universal_instantiation_consistent_substitution() {
        let universal = premise(1, "Ax(F(x,x))");
        assert!(universal_instantiation(&premise(2, "F(a,a)"), &[&universal]));
        assert!(!universal_instantiation(&premise(2, "F(a,b)"), &[&universal]));
    }

    #[test]
    fn quantifier_negation_flips_the_prefix() {
        let negated = premise(1, "~(Ex(F(x)))");
        assert!(quantifier_negation(&premise(2, "Ax(~(F(x)))"), &[&negated]));

        let negated_universal = premise(1, "~(Ax(F(x)))");
        assert!(quantifier_negation(
            &premise(2, "Ex(~(F(x)))"),
            &[&negated_universal]
        ));

        // Same quantifier on both sides is not a negation move.
        assert!(!quantifier_negation(&premise(2, "Ex(~(F(x)))"), &[&negated]));
    }

    #[test]
    fn quantifier_negation_nested_chain() {
        let negated = premise(1, "~(Ex(Ay(F(x,y))))");
        assert!(quantifier_negation(
            &premise(2, "Ax(Ey(~(F(x,y))))"),
            &[&negated]
        ));
        assert!(!quantifier_negation(
            &premise(2, "Ax(Ay(~(F(x,y))))"),
            &[&negated]
        ));
    }
}
