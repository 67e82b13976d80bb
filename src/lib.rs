//! Natural-deduction proof checking for propositional and predicate logic.
//!
//! The crate is organized around three layers.  [`formula`] parses strings
//! into canonical [`Formula`] trees and provides structural equality,
//! negation testing, and truth-table semantics (via [`semantics`]).
//! [`rules`] implements the catalog of deduction rules as structural
//! predicates over formulas, including the recursive rule-of-replacement
//! search.  [`proof`] sequences lines, tracks undischarged assumptions,
//! and scores complete proofs.

pub mod formula;
pub mod generate;
pub mod proof;
pub mod rules;
pub mod semantics;
pub mod translate;

pub use formula::{
    BinaryOp, Formula, FormulaKind, Operator, ParseError, Quantifier, MAX_FORMULA_LEN,
    MAX_NESTING_DEPTH,
};
pub use generate::{random_formula, seeded_formula, GeneratorConfig};
pub use proof::{LineOfProof, Proof, ProofError, ProofEvaluation};
pub use rules::{evaluate_move, DeductionCheck, RuleError, RuleName};
pub use semantics::{
    evaluate_formula, evaluate_formula_string, generate_truth_table, truth_table_headers,
    Assignment, TruthTable, TruthValue,
};
pub use translate::translate_english_to_symbolic;
