//! Three-valued truth evaluation.
//!
//! An unassigned variable evaluates to [`TruthValue::Indeterminate`], but
//! the connectives themselves are strict: they compare operands against
//! literal true/false, so indeterminacy never propagates past a connective
//! (`False & Indeterminate` is `False`, and so is `Indeterminate & True`).
//! This mirrors the reference semantics and is deliberately preserved,
//! asymmetries included.

use std::collections::HashMap;

use crate::formula::{Formula, FormulaKind, ParseError};

/// Truth-value assignment for atomic formulas, keyed by their canonical
/// string (`"p"`, `"F(a,b)"`).
pub type Assignment = HashMap<String, bool>;

/// Outcome of evaluating a formula under an assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TruthValue {
    True,
    False,
    /// The formula contains an unassigned atom (or a quantified scope,
    /// which has no truth-functional value).
    Indeterminate,
}

impl TruthValue {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            TruthValue::True => Some(true),
            TruthValue::False => Some(false),
            TruthValue::Indeterminate => None,
        }
    }

    pub fn is_true(self) -> bool {
        self == TruthValue::True
    }

    pub fn is_false(self) -> bool {
        self == TruthValue::False
    }
}

impl From<bool> for TruthValue {
    fn from(value: bool) -> Self {
        if value {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }
}

impl From<Option<bool>> for TruthValue {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(b) => b.into(),
            None => TruthValue::Indeterminate,
        }
    }
}

/// Evaluate a formula tree under an assignment.
pub fn evaluate_formula(formula: &Formula, assignment: &Assignment) -> TruthValue {
    match formula.kind() {
        FormulaKind::Atom(name) => assignment.get(name).copied().into(),
        FormulaKind::Not(operand) => {
            // `~p` is true iff `p` is exactly false.
            evaluate_formula(operand, assignment).is_false().into()
        }
        FormulaKind::Binary { op, left, right } => {
            let p = evaluate_formula(left, assignment);
            let q = evaluate_formula(right, assignment);
            use crate::formula::BinaryOp::*;
            match op {
                And => (p.is_true() && q.is_true()).into(),
                Or => (p.is_true() || q.is_true()).into(),
                Implies => (p.is_false() || q.is_true()).into(),
                Iff => ((p.is_true() && q.is_true()) || (p.is_false() && q.is_false())).into(),
            }
        }
        // Quantified formulas have no truth-functional value.
        FormulaKind::Quantified { .. } => TruthValue::Indeterminate,
    }
}

/// Evaluate a formula string under an assignment, rejecting non-wffs.
pub fn evaluate_formula_string(
    source: &str,
    assignment: &Assignment,
) -> Result<TruthValue, ParseError> {
    let formula = Formula::parse(source)?;
    Ok(evaluate_formula(&formula, assignment))
}
