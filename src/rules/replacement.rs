//! Rules of replacement.
//!
//! Each rule is first written as a "simple" predicate that only recognizes
//! an application at the main operator.  [`check_rule_recursively`] lifts
//! the simple predicate to sub-formula positions: it drills into the one
//! operand that differs while the rest of the structure matches exactly.
//! Replacement rules are bidirectional, so target and source are
//! interchangeable throughout.

use super::by_canonical_length;
use crate::formula::{Formula, FormulaKind};
use crate::proof::LineOfProof;

pub(crate) type SimpleRule = fn(&Formula, &Formula) -> bool;

/// Lift a top-level rule check to sub-formula positions.
///
/// The search is bounded, not exhaustive: after failing at the top level
/// it recurses into both operands of a shared negation, or into one
/// operand of a shared binary operator whose other operand is identical
/// on both sides.  Applications nested behind two differing operands are
/// out of reach; that limitation is part of the rule-matching contract.
pub(crate) fn check_rule_recursively(rule: SimpleRule, target: &Formula, source: &Formula) -> bool {
    if rule(target, source) {
        return true;
    }

    // Shared negation: recurse inwards on both operands.
    if let (Some(t_inner), Some(s_inner)) =
        (target.negated_operand(), source.negated_operand())
    {
        return check_rule_recursively(rule, t_inner, s_inner);
    }

    if let (Some((t_op, t_left, t_right)), Some((s_op, s_left, s_right))) =
        (target.binary_parts(), source.binary_parts())
    {
        if t_op == s_op {
            // Left operands match: the application must be on the right.
            if t_left == s_left && check_rule_recursively(rule, t_right, s_right) {
                return true;
            }
            // Right operands match: the application must be on the left.
            if t_right == s_right && check_rule_recursively(rule, t_left, s_left) {
                return true;
            }
        }
    }
    false
}

/// Commutativity at the main operator: same `&`/`V` connective, operands
/// swapped.
fn simple_commutativity(t: &Formula, s: &Formula) -> bool {
    match (t.binary_parts(), s.binary_parts()) {
        (Some((t_op, t_left, t_right)), Some((s_op, s_left, s_right))) => {
            t_op == s_op
                && t_op.is_conjunction_or_disjunction()
                && t_left == s_right
                && t_right == s_left
        }
        _ => false,
    }
}

/// Associativity at the main operator: regroup `(a op b) op c` as
/// `a op (b op c)` (or the mirror image) and compare canonically.
fn simple_associativity(t: &Formula, s: &Formula) -> bool {
    let Some((op, t_left, t_right)) = t.binary_parts() else {
        return false;
    };
    if !op.is_conjunction_or_disjunction() {
        return false;
    }
    match s.binary_parts() {
        Some((s_op, ..)) if s_op == op => {}
        _ => return false,
    }

    // Left-nested: (a op b) op c  =>  a op (b op c).
    if let Some((inner_op, a, b)) = t_left.binary_parts() {
        if inner_op == op {
            let regrouped = Formula::binary(
                op,
                a.clone(),
                Formula::binary(op, b.clone(), t_right.clone()),
            );
            if regrouped == *s {
                return true;
            }
        }
    }

    // Right-nested: a op (b op c)  =>  (a op b) op c.
    if let Some((inner_op, b, c)) = t_right.binary_parts() {
        if inner_op == op {
            let regrouped = Formula::binary(
                op,
                Formula::binary(op, t_left.clone(), b.clone()),
                c.clone(),
            );
            return regrouped == *s;
        }
    }
    false
}

/// Double Negation at the main operator.  The side carrying the extra
/// `~~` is identified by canonical-string length.
fn simple_double_negation(t: &Formula, s: &Formula) -> bool {
    let (doubled, plain) = by_canonical_length(t, s);
    match doubled
        .negated_operand()
        .and_then(Formula::negated_operand)
    {
        Some(inner) => inner == plain,
        None => false,
    }
}

/// De Morgan's at the main operator: `~(p & q)` against `~p V ~q` (and
/// the `V`/`&` dual), order-preserving.
fn simple_de_morgans(t: &Formula, s: &Formula) -> bool {
    let (negated, other) = if matches!(t.kind(), FormulaKind::Not(_)) {
        (t, s)
    } else {
        (s, t)
    };
    let Some(inner) = negated.negated_operand() else {
        return false;
    };
    let Some((other_op, other_left, other_right)) = other.binary_parts() else {
        return false;
    };
    let Some(flipped) = other_op.flipped() else {
        return false;
    };
    match inner.binary_parts() {
        Some((inner_op, inner_left, inner_right)) => {
            inner_op == flipped
                && inner_left.is_negation_of(other_left)
                && inner_right.is_negation_of(other_right)
        }
        _ => false,
    }
}

/// Distribution at the main operator: `p op1 (q op2 r)` against
/// `(p op1 q) op2 (p op1 r)`, the distributed side being the longer one.
fn simple_distribution(t: &Formula, s: &Formula) -> bool {
    let (longer, shorter) = by_canonical_length(s, t);
    let Some((short_op, short_left, short_right)) = shorter.binary_parts() else {
        return false;
    };
    if !short_op.is_conjunction_or_disjunction() {
        return false;
    }
    let Some(flipped) = short_op.flipped() else {
        return false;
    };
    let Some((inner_op, inner_left, inner_right)) = short_right.binary_parts() else {
        return false;
    };
    if inner_op != flipped {
        return false;
    }
    let Some((long_op, long_left, long_right)) = longer.binary_parts() else {
        return false;
    };
    if long_op != flipped {
        return false;
    }
    match (long_left.binary_parts(), long_right.binary_parts()) {
        (Some((op1, ..)), Some((op2, ..))) if op1 == short_op && op2 == short_op => {}
        _ => return false,
    }
    let expected_left = Formula::binary(short_op, short_left.clone(), inner_left.clone());
    let expected_right = Formula::binary(short_op, short_left.clone(), inner_right.clone());
    expected_left == *long_left && expected_right == *long_right
}

/// Transposition at the main operator: `p -> q` against `~q -> ~p`.
fn simple_transposition(t: &Formula, s: &Formula) -> bool {
    match (t.binary_parts(), s.binary_parts()) {
        (
            Some((crate::formula::BinaryOp::Implies, t_ant, t_cons)),
            Some((crate::formula::BinaryOp::Implies, s_ant, s_cons)),
        ) => t_ant.is_negation_of(s_cons) && t_cons.is_negation_of(s_ant),
        _ => false,
    }
}

/// Material Implication at the main operator: `p -> q` against `~p V q`.
fn simple_material_implication(t: &Formula, s: &Formula) -> bool {
    use crate::formula::BinaryOp::{Implies, Or};
    let (conditional, disjunction) =
        if matches!(t.binary_parts(), Some((Implies, ..))) {
            (t, s)
        } else {
            (s, t)
        };
    let (Some((Implies, cond_ant, cond_cons)), Some((Or, disj_left, disj_right))) =
        (conditional.binary_parts(), disjunction.binary_parts())
    else {
        return false;
    };
    cond_ant.is_negation_of(disj_left) && cond_cons == disj_right
}

/// Material Equivalence at the main operator: the longer side is either
/// `(p -> q) & (q -> p)` or `(p & q) V (~p & ~q)`; the shorter side's two
/// operands supply `p` and `q`.
fn simple_material_equivalence(t: &Formula, s: &Formula) -> bool {
    use crate::formula::BinaryOp::{And, Implies, Or};
    let (longer, shorter) = by_canonical_length(t, s);
    let Some((_, short_left, short_right)) = shorter.binary_parts() else {
        return false;
    };
    match longer.binary_parts() {
        Some((And, first, second)) => {
            match (first.binary_parts(), second.binary_parts()) {
                (
                    Some((Implies, fwd_ant, fwd_cons)),
                    Some((Implies, bwd_ant, bwd_cons)),
                ) => {
                    fwd_ant == short_left
                        && fwd_cons == short_right
                        && bwd_ant == short_right
                        && bwd_cons == short_left
                }
                _ => false,
            }
        }
        Some((Or, first, second)) => {
            match (first.binary_parts(), second.binary_parts()) {
                (Some((_, both_left, both_right)), Some((_, neg_left, neg_right))) => {
                    both_left == short_left
                        && both_right == short_right
                        && neg_left.is_negation_of(short_left)
                        && neg_right.is_negation_of(short_right)
                }
                _ => false,
            }
        }
        _ => false,
    }
}

/// Exportation at the main operator: `(p & q) -> r` against
/// `p -> (q -> r)`.
fn simple_exportation(t: &Formula, s: &Formula) -> bool {
    use crate::formula::BinaryOp::{And, Implies};
    let (Some((Implies, _, t_cons)), Some((Implies, ..))) =
        (t.binary_parts(), s.binary_parts())
    else {
        return false;
    };
    let (exported, unexported) =
        if matches!(t_cons.binary_parts(), Some((Implies, ..))) {
            (t, s)
        } else {
            (s, t)
        };
    let Some((_, exp_ant, exp_cons)) = exported.binary_parts() else {
        return false;
    };
    let Some((Implies, inner_ant, inner_cons)) = exp_cons.binary_parts() else {
        return false;
    };
    let Some((_, unexp_ant, unexp_cons)) = unexported.binary_parts() else {
        return false;
    };
    let Some((And, conj_left, conj_right)) = unexp_ant.binary_parts() else {
        return false;
    };
    exp_ant == conj_left && inner_ant == conj_right && inner_cons == unexp_cons
}

/// Tautology at the main operator: `p V p` against `p`.
fn simple_tautology(t: &Formula, s: &Formula) -> bool {
    use crate::formula::BinaryOp::Or;
    let collapses = |doubled: &Formula, single: &Formula| match doubled.binary_parts() {
        Some((Or, left, right)) => left == right && *left == *single,
        _ => false,
    };
    collapses(s, t) || collapses(t, s)
}

macro_rules! recursive_replacement_rule {
    ($(#[$doc:meta])* $name:ident, $simple:ident) => {
        $(#[$doc])*
        pub(crate) fn $name(target: &LineOfProof, sources: &[&LineOfProof]) -> bool {
            let [source] = sources else { return false };
            check_rule_recursively($simple, target.proposition(), source.proposition())
        }
    };
}

recursive_replacement_rule!(commutativity, simple_commutativity);
recursive_replacement_rule!(associativity, simple_associativity);
recursive_replacement_rule!(double_negation, simple_double_negation);
recursive_replacement_rule!(de_morgans, simple_de_morgans);
recursive_replacement_rule!(distribution, simple_distribution);
recursive_replacement_rule!(transposition, simple_transposition);
recursive_replacement_rule!(material_implication, simple_material_implication);
recursive_replacement_rule!(material_equivalence, simple_material_equivalence);
recursive_replacement_rule!(exportation, simple_exportation);
recursive_replacement_rule!(tautology, simple_tautology);
