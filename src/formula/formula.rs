//! The [`Formula`] tree: an immutable, canonically-stringified parse tree
//! for propositional and predicate formulas.
//!
//! Two formulas are structurally identical iff their canonical strings are
//! identical, so equality, hashing, and the longer/shorter heuristics used
//! by the deduction rules all run on the canonical form.  A formula is
//! constructed once (from a string or from parts) and never mutated.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::operator::{is_atomic_string, BinaryOp, Operator, Quantifier};
use super::parser::{self, ParseError};

/// The shape of a formula node.
#[derive(Clone, Debug)]
pub enum FormulaKind {
    /// A propositional variable (`p`) or predicate application (`F(a,b)`).
    Atom(String),
    /// Negation.
    Not(Box<Formula>),
    /// A binary connective with its two operands.
    Binary {
        op: BinaryOp,
        left: Box<Formula>,
        right: Box<Formula>,
    },
    /// A quantifier prefix (`Ex`, `Ay`) over a scope.
    Quantified {
        quantifier: Quantifier,
        var: char,
        scope: Box<Formula>,
    },
}

/// An immutable logical formula.
#[derive(Clone, Debug)]
pub struct Formula {
    source: String,
    canonical: String,
    kind: FormulaKind,
}

impl Formula {
    /// Parse a formula string.  Whitespace and redundant parentheses are
    /// ignored; strings that are not well formed are rejected.
    pub fn parse(source: &str) -> Result<Formula, ParseError> {
        parser::parse_formula(source)
    }

    /// Does `source` represent a well-formed formula?
    pub fn is_wff_string(source: &str) -> bool {
        Self::parse(source).is_ok()
    }

    /// Construct an atomic formula from its name (`"p"`, `"F(a,b)"`).
    pub fn atom(name: &str) -> Result<Formula, ParseError> {
        let name = parser::remove_whitespace(name);
        if !is_atomic_string(&name) {
            return Err(ParseError::NotWellFormed(name));
        }
        Ok(Self::from_parts(FormulaKind::Atom(name)))
    }

    /// Wrap a formula in a negation (no double-negation collapsing; see
    /// [`Formula::negate`] for the collapsing version).
    pub fn not(operand: Formula) -> Formula {
        Self::from_parts(FormulaKind::Not(Box::new(operand)))
    }

    /// Join two formulas with a binary connective.
    pub fn binary(op: BinaryOp, left: Formula, right: Formula) -> Formula {
        Self::from_parts(FormulaKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Quantify a scope with `E<var>` or `A<var>`.
    pub fn quantified(quantifier: Quantifier, var: char, scope: Formula) -> Formula {
        Self::from_parts(FormulaKind::Quantified {
            quantifier,
            var,
            scope: Box::new(scope),
        })
    }

    /// Build a node whose `source` is its own canonical string.
    fn from_parts(kind: FormulaKind) -> Formula {
        let canonical = canonical_of(&kind);
        Formula {
            source: canonical.clone(),
            canonical,
            kind,
        }
    }

    /// Build a node from a parsed substring, computing the canonical form
    /// bottom-up from the operands' canonical forms.
    pub(crate) fn from_kind(source: &str, kind: FormulaKind) -> Formula {
        let canonical = canonical_of(&kind);
        Formula {
            source: source.to_string(),
            canonical,
            kind,
        }
    }

    /// Replace the recorded source string (used so the root of a parse
    /// keeps the caller's original text).
    pub(crate) fn with_source(mut self, source: &str) -> Formula {
        self.source = source.to_string();
        self
    }

    /// The original input text, untouched.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The whitespace-free, minimally-parenthesized canonical string.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }

    /// The main operator, or `None` for an atomic formula.
    pub fn operator(&self) -> Option<Operator> {
        match &self.kind {
            FormulaKind::Atom(_) => None,
            FormulaKind::Not(_) => Some(Operator::Not),
            FormulaKind::Binary { op, .. } => Some(Operator::Binary(*op)),
            FormulaKind::Quantified { quantifier, var, .. } => {
                Some(Operator::Quantified(*quantifier, *var))
            }
        }
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.kind, FormulaKind::Atom(_))
    }

    /// The immediate sub-formulas, outermost first.
    pub fn operands(&self) -> Vec<&Formula> {
        match &self.kind {
            FormulaKind::Atom(_) => Vec::new(),
            FormulaKind::Not(operand) => vec![operand],
            FormulaKind::Binary { left, right, .. } => vec![left, right],
            FormulaKind::Quantified { scope, .. } => vec![scope],
        }
    }

    /// The connective and both operands of a binary formula.
    pub fn binary_parts(&self) -> Option<(BinaryOp, &Formula, &Formula)> {
        match &self.kind {
            FormulaKind::Binary { op, left, right } => Some((*op, left, right)),
            _ => None,
        }
    }

    /// The operand of a negation.
    pub fn negated_operand(&self) -> Option<&Formula> {
        match &self.kind {
            FormulaKind::Not(operand) => Some(operand),
            _ => None,
        }
    }

    /// The quantifier, bound variable, and scope of a quantified formula.
    pub fn quantified_parts(&self) -> Option<(Quantifier, char, &Formula)> {
        match &self.kind {
            FormulaKind::Quantified { quantifier, var, scope } => {
                Some((*quantifier, *var, scope))
            }
            _ => None,
        }
    }

    /// Is one of `self`/`other` exactly the negation of the other?
    pub fn is_negation_of(&self, other: &Formula) -> bool {
        let negates = |plain: &Formula, negated: &Formula| match &negated.kind {
            FormulaKind::Not(operand) => **operand == *plain,
            _ => false,
        };
        negates(self, other) || negates(other, self)
    }

    /// Negate the formula.  Negating a negation strips it instead of
    /// stacking a second `~`, making this an involution at the top level.
    pub fn negate(&self) -> Formula {
        match &self.kind {
            FormulaKind::Not(operand) => (**operand).clone(),
            _ => Formula::not(self.clone()),
        }
    }

    /// Distinct atomic variables (lowercase letters) appearing anywhere in
    /// the canonical string, sorted alphabetically.
    pub fn atomic_variables(&self) -> Vec<char> {
        let mut vars: Vec<char> = self
            .canonical
            .chars()
            .filter(char::is_ascii_lowercase)
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    /// Pretty rendering: one space around each binary connective, prefixes
    /// attached, parentheses only where the canonical form has them.
    pub fn pretty(&self) -> String {
        fn wrapped(f: &Formula) -> String {
            if f.canonical.len() > 1 {
                format!("({})", f.pretty())
            } else {
                f.pretty()
            }
        }
        match &self.kind {
            FormulaKind::Atom(name) => name.clone(),
            FormulaKind::Not(operand) => format!("~{}", wrapped(operand)),
            FormulaKind::Binary { op, left, right } => {
                format!("{} {} {}", wrapped(left), op, wrapped(right))
            }
            FormulaKind::Quantified { quantifier, var, scope } => {
                format!("{}{}{}", quantifier, var, wrapped(scope))
            }
        }
    }

    /// Every node of the tree (the formula itself and all sub-formulas),
    /// in prefix order.
    pub(crate) fn collect_subformulas<'a>(&'a self, out: &mut Vec<&'a Formula>) {
        out.push(self);
        for operand in self.operands() {
            operand.collect_subformulas(out);
        }
    }
}

/// Compose the canonical string of a node from its operands' canonical
/// strings, parenthesizing any operand longer than one character.
fn canonical_of(kind: &FormulaKind) -> String {
    fn wrap(canonical: &str) -> String {
        if canonical.len() > 1 {
            format!("({canonical})")
        } else {
            canonical.to_string()
        }
    }
    match kind {
        FormulaKind::Atom(name) => name.clone(),
        FormulaKind::Not(operand) => format!("~{}", wrap(operand.canonical())),
        FormulaKind::Binary { op, left, right } => format!(
            "{}{}{}",
            wrap(left.canonical()),
            op.token(),
            wrap(right.canonical())
        ),
        FormulaKind::Quantified { quantifier, var, scope } => {
            format!("{}{}{}", quantifier.token(), var, wrap(scope.canonical()))
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl std::str::FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}
