//! The deduction-rule catalog and rule-matching engine.
//!
//! Every rule is a predicate over a target line and its cited source
//! lines.  Rules of implication ([`implication`]) apply one-directionally
//! at the main operator only; rules of replacement ([`replacement`]) are
//! bidirectional and are lifted to sub-formula positions by
//! [`replacement::check_rule_recursively`]; the quantifier rules
//! ([`quantifier`]) match by positional variable substitution.

mod implication;
mod quantifier;
mod replacement;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::formula::Formula;
use crate::proof::{LineOfProof, Proof};

/// Raised when an external rule name fails to parse.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unknown deduction rule: `{0}`")]
    UnknownRule(String),
}

/// The closed set of deduction rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleName {
    Premise,
    Assumption,
    Addition,
    Simplification,
    Conjunction,
    ModusPonens,
    ModusTollens,
    HypotheticalSyllogism,
    DisjunctiveSyllogism,
    ConstructiveDilemma,
    ConditionalProof,
    IndirectProof,
    Associativity,
    Commutativity,
    DoubleNegation,
    DeMorgans,
    Distribution,
    Transposition,
    MaterialImplication,
    MaterialEquivalence,
    Exportation,
    Tautology,
    ExistentialGeneralization,
    UniversalInstantiation,
    QuantifierNegation,
}

/// Uniform signature shared by every rule predicate.
pub type DeductionCheck = fn(&LineOfProof, &[&LineOfProof]) -> bool;

fn always_valid(_target: &LineOfProof, _sources: &[&LineOfProof]) -> bool {
    true
}

impl RuleName {
    /// Every rule, in catalog order.
    pub const ALL: [RuleName; 25] = [
        RuleName::Premise,
        RuleName::Assumption,
        RuleName::Addition,
        RuleName::Simplification,
        RuleName::Conjunction,
        RuleName::ModusPonens,
        RuleName::ModusTollens,
        RuleName::HypotheticalSyllogism,
        RuleName::DisjunctiveSyllogism,
        RuleName::ConstructiveDilemma,
        RuleName::ConditionalProof,
        RuleName::IndirectProof,
        RuleName::Associativity,
        RuleName::Commutativity,
        RuleName::DoubleNegation,
        RuleName::DeMorgans,
        RuleName::Distribution,
        RuleName::Transposition,
        RuleName::MaterialImplication,
        RuleName::MaterialEquivalence,
        RuleName::Exportation,
        RuleName::Tautology,
        RuleName::ExistentialGeneralization,
        RuleName::UniversalInstantiation,
        RuleName::QuantifierNegation,
    ];

    /// Display name, as it appears in proofs and fixtures.
    pub const fn label(self) -> &'static str {
        match self {
            RuleName::Premise => "Premise",
            RuleName::Assumption => "Assumption",
            RuleName::Addition => "Addition",
            RuleName::Simplification => "Simplification",
            RuleName::Conjunction => "Conjunction",
            RuleName::ModusPonens => "Modus Ponens",
            RuleName::ModusTollens => "Modus Tollens",
            RuleName::HypotheticalSyllogism => "Hypothetical Syllogism",
            RuleName::DisjunctiveSyllogism => "Disjunctive Syllogism",
            RuleName::ConstructiveDilemma => "Constructive Dilemma",
            RuleName::ConditionalProof => "Conditional Proof",
            RuleName::IndirectProof => "Indirect Proof",
            RuleName::Associativity => "Associativity",
            RuleName::Commutativity => "Commutativity",
            RuleName::DoubleNegation => "Double Negation",
            RuleName::DeMorgans => "De Morgan's",
            RuleName::Distribution => "Distribution",
            RuleName::Transposition => "Transposition",
            RuleName::MaterialImplication => "Material Implication",
            RuleName::MaterialEquivalence => "Material Equivalence",
            RuleName::Exportation => "Exportation",
            RuleName::Tautology => "Tautology",
            RuleName::ExistentialGeneralization => "Existential Generalization",
            RuleName::UniversalInstantiation => "Universal Instantiation",
            RuleName::QuantifierNegation => "Quantifier Negation",
        }
    }

    /// How many cited lines an application of this rule requires.
    pub const fn cited_lines_count(self) -> usize {
        match self {
            RuleName::Premise | RuleName::Assumption => 0,
            RuleName::Conjunction
            | RuleName::ModusPonens
            | RuleName::ModusTollens
            | RuleName::HypotheticalSyllogism
            | RuleName::DisjunctiveSyllogism
            | RuleName::ConstructiveDilemma
            | RuleName::ConditionalProof
            | RuleName::IndirectProof => 2,
            _ => 1,
        }
    }

    /// The predicate that checks an application of this rule.
    pub fn check(self) -> DeductionCheck {
        match self {
            RuleName::Premise | RuleName::Assumption => always_valid,
            RuleName::Addition => implication::addition,
            RuleName::Simplification => implication::simplification,
            RuleName::Conjunction => implication::conjunction,
            RuleName::ModusPonens => implication::modus_ponens,
            RuleName::ModusTollens => implication::modus_tollens,
            RuleName::HypotheticalSyllogism => implication::hypothetical_syllogism,
            RuleName::DisjunctiveSyllogism => implication::disjunctive_syllogism,
            RuleName::ConstructiveDilemma => implication::constructive_dilemma,
            RuleName::ConditionalProof => implication::conditional_proof,
            RuleName::IndirectProof => implication::indirect_proof,
            RuleName::Associativity => replacement::associativity,
            RuleName::Commutativity => replacement::commutativity,
            RuleName::DoubleNegation => replacement::double_negation,
            RuleName::DeMorgans => replacement::de_morgans,
            RuleName::Distribution => replacement::distribution,
            RuleName::Transposition => replacement::transposition,
            RuleName::MaterialImplication => replacement::material_implication,
            RuleName::MaterialEquivalence => replacement::material_equivalence,
            RuleName::Exportation => replacement::exportation,
            RuleName::Tautology => replacement::tautology,
            RuleName::ExistentialGeneralization => quantifier::existential_generalization,
            RuleName::UniversalInstantiation => quantifier::universal_instantiation,
            RuleName::QuantifierNegation => quantifier::quantifier_negation,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuleName {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.label() == trimmed)
            .ok_or_else(|| RuleError::UnknownRule(s.to_string()))
    }
}

/// Is `line` a valid application of its cited rule within `proof`?
///
/// Fails (returns false) when the cited-line count does not match the
/// catalog, when a cited line number is out of range, or when the rule
/// predicate rejects the move.
pub fn evaluate_move(line: &LineOfProof, proof: &Proof) -> bool {
    if line.rule().cited_lines_count() != line.cited_lines().len() {
        trace!(
            line = line.line_number(),
            rule = %line.rule(),
            cited = line.cited_lines().len(),
            required = line.rule().cited_lines_count(),
            "cited-line count mismatch"
        );
        return false;
    }
    let mut sources = Vec::with_capacity(line.cited_lines().len());
    for &number in line.cited_lines() {
        match proof.line(number) {
            Some(cited) => sources.push(cited),
            None => {
                trace!(
                    line = line.line_number(),
                    cited = number,
                    "cited line out of range"
                );
                return false;
            }
        }
    }
    (line.rule().check())(line, &sources)
}

/// Order two formulas by canonical-string length, longer first.
///
/// Several rules identify "the more complex side" this way: the formula
/// containing the other as a proper sub-structure is always strictly
/// longer.  Ties give the second argument first, matching the reference
/// behavior.
pub(crate) fn by_canonical_length<'a>(
    a: &'a Formula,
    b: &'a Formula,
) -> (&'a Formula, &'a Formula) {
    if a.canonical().len() > b.canonical().len() {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for rule in RuleName::ALL {
            assert_eq!(rule.label().parse::<RuleName>(), Ok(rule));
        }
    }

    #[test]
    fn unknown_rule_is_rejected() {
        assert_eq!(
            "Wishful Thinking".parse::<RuleName>(),
            Err(RuleError::UnknownRule("Wishful Thinking".to_string()))
        );
    }

    #[test]
    fn cited_line_counts() {
        assert_eq!(RuleName::Premise.cited_lines_count(), 0);
        assert_eq!(RuleName::Assumption.cited_lines_count(), 0);
        assert_eq!(RuleName::Addition.cited_lines_count(), 1);
        assert_eq!(RuleName::Commutativity.cited_lines_count(), 1);
        assert_eq!(RuleName::ModusPonens.cited_lines_count(), 2);
        assert_eq!(RuleName::ConditionalProof.cited_lines_count(), 2);
        assert_eq!(RuleName::UniversalInstantiation.cited_lines_count(), 1);
    }
}
