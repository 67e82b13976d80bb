//! Operator grammar: connective tokens, quantifier prefixes, and the
//! regular expressions that classify atomic formulas.
//!
//! The token set is fixed: `~`, `&`, `V`, `->`, `<->`, plus the quantifier
//! prefixes `E<var>` and `A<var>`.  Because `A`, `E`, and `V` are claimed by
//! the grammar, predicate symbols are uppercase letters outside that set.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// A binary connective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Iff,
}

impl BinaryOp {
    /// The token as it appears in a formula string.
    pub const fn token(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "V",
            BinaryOp::Implies => "->",
            BinaryOp::Iff => "<->",
        }
    }

    /// Swap `&` with `V`.  The dual operator drives De Morgan's and
    /// Distribution checks; conditionals and biconditionals have no dual.
    pub const fn flipped(self) -> Option<BinaryOp> {
        match self {
            BinaryOp::And => Some(BinaryOp::Or),
            BinaryOp::Or => Some(BinaryOp::And),
            _ => None,
        }
    }

    /// Is this `&` or `V`?
    pub const fn is_conjunction_or_disjunction(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    /// Match a binary-operator token at the start of `s`.
    ///
    /// `<->` must be attempted before `->`: both begin at the same index
    /// when the main operator is a biconditional.
    pub fn match_prefix(s: &str) -> Option<BinaryOp> {
        if s.starts_with("<->") {
            Some(BinaryOp::Iff)
        } else if s.starts_with("->") {
            Some(BinaryOp::Implies)
        } else if s.starts_with('V') {
            Some(BinaryOp::Or)
        } else if s.starts_with('&') {
            Some(BinaryOp::And)
        } else {
            None
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A quantifier prefix letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Existential,
    Universal,
}

impl Quantifier {
    pub const fn token(self) -> char {
        match self {
            Quantifier::Existential => 'E',
            Quantifier::Universal => 'A',
        }
    }

    /// Swap `E` with `A` (Quantifier Negation).
    pub const fn flipped(self) -> Quantifier {
        match self {
            Quantifier::Existential => Quantifier::Universal,
            Quantifier::Universal => Quantifier::Existential,
        }
    }

    /// Match a quantifier prefix (`E<var>` or `A<var>`) at the start of
    /// `s`, returning the quantifier and its bound variable.
    pub fn match_prefix(s: &str) -> Option<(Quantifier, char)> {
        let mut chars = s.chars();
        let quantifier = match chars.next() {
            Some('E') => Quantifier::Existential,
            Some('A') => Quantifier::Universal,
            _ => return None,
        };
        match chars.next() {
            Some(var) if var.is_ascii_lowercase() => Some((quantifier, var)),
            _ => None,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The main operator of a complex formula.  Atomic formulas have none.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    Binary(BinaryOp),
    Quantified(Quantifier, char),
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Not => f.write_str("~"),
            Operator::Binary(op) => f.write_str(op.token()),
            Operator::Quantified(q, var) => write!(f, "{}{}", q.token(), var),
        }
    }
}

/// A single lowercase letter: an atomic propositional variable (or a term
/// inside a predicate's argument list).
static ATOMIC_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]$").expect("valid regex"));

/// An atomic predicate application such as `F(a)` or `G(a,b)`.  The
/// predicate letter must stay clear of the reserved `A`, `E`, and `V`.
static ATOMIC_PREDICATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[B-DF-UW-Z]\([a-z](,[a-z])*\)$").expect("valid regex"));

/// Does `s` (already whitespace-free and paren-trimmed) name an atomic
/// propositional variable?
pub fn is_atomic_variable(s: &str) -> bool {
    ATOMIC_VARIABLE.is_match(s)
}

/// Does `s` name an atomic predicate application?
pub fn is_atomic_predicate(s: &str) -> bool {
    ATOMIC_PREDICATE.is_match(s)
}

/// Atomic formulas are single propositional variables or whole predicate
/// applications; everything else needs a main operator.
pub fn is_atomic_string(s: &str) -> bool {
    is_atomic_variable(s) || is_atomic_predicate(s)
}
