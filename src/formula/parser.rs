//! Scan-based construction of [`Formula`](super::Formula) trees.
//!
//! The grammar has no precedence levels; structure comes entirely from
//! parentheses.  Construction therefore works directly on the character
//! stream: strip whitespace, repeatedly trim redundant outer parentheses,
//! locate the main operator by a depth-0 scan, and recurse on the operand
//! substrings.  Binary operators are searched before the unary prefixes so
//! that `~p V q` parses as `(~p) V q` rather than `~(p V q)`.

use thiserror::Error;

use super::formula::{Formula, FormulaKind};
use super::operator::{is_atomic_string, BinaryOp, Quantifier};

/// Hard cap on the (whitespace-free) length of a parsed formula string.
pub const MAX_FORMULA_LEN: usize = 512;

/// Hard cap on operator nesting, guarding the recursive parse against
/// pathologically deep input.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Rejection reasons for strings that do not construct a [`Formula`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or all whitespace.
    #[error("empty formula string")]
    EmptyFormula,

    /// No grammar rule matched: the string is not atomic, has no depth-0
    /// binary operator, and does not start with `~` or a quantifier.
    #[error("not a well-formed formula: `{0}`")]
    NotWellFormed(String),

    /// Length guard tripped (`MAX_FORMULA_LEN`).
    #[error("formula too complex: longer than {0} characters")]
    TooLong(usize),

    /// Nesting guard tripped (`MAX_NESTING_DEPTH`).
    #[error("formula too complex: nested deeper than {0} operators")]
    TooDeep(usize),
}

/// Remove every whitespace character.
pub fn remove_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip redundant outer parentheses, repeatedly.
///
/// A leading/trailing pair is redundant iff the running paren count never
/// returns to zero strictly inside the string.  Interior parentheses are
/// left alone; they are consumed later by the recursive operand parse.
pub fn trim_outer_parens(s: &str) -> &str {
    let bytes = s.as_bytes();
    let len = bytes.len();
    if len < 2 || bytes[0] != b'(' || bytes[len - 1] != b')' {
        return s;
    }
    let mut count = 1i32;
    for &b in &bytes[1..len - 1] {
        count += (b == b'(') as i32;
        count -= (b == b')') as i32;
        if count == 0 {
            // The leading paren closes before the end; the pair is real.
            return s;
        }
    }
    trim_outer_parens(&s[1..len - 1])
}

/// Locate the main binary operator of a trimmed formula string.
///
/// The main operator is the first binary-operator token encountered while
/// the paren depth is zero.  Returns the byte index and the operator, or
/// `None` when the formula is atomic, a negation/quantification, or not
/// well formed.
pub fn find_main_binary_operator(s: &str) -> Option<(usize, BinaryOp)> {
    let bytes = s.as_bytes();
    let mut depth = 0i32;
    for i in 0..bytes.len() {
        if depth == 0 {
            if let Some(op) = BinaryOp::match_prefix(&s[i..]) {
                return Some((i, op));
            }
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Parse `source` into a [`Formula`], or reject it with a [`ParseError`].
pub fn parse_formula(source: &str) -> Result<Formula, ParseError> {
    let cleansed = remove_whitespace(source);
    if cleansed.is_empty() {
        return Err(ParseError::EmptyFormula);
    }
    if !cleansed.is_ascii() {
        return Err(ParseError::NotWellFormed(source.to_string()));
    }
    if cleansed.len() > MAX_FORMULA_LEN {
        return Err(ParseError::TooLong(MAX_FORMULA_LEN));
    }
    let parsed = parse_node(&cleansed, 0)?;
    // The root keeps the caller's original string; operands keep their
    // substrings.
    Ok(parsed.with_source(source))
}

fn parse_node(s: &str, depth: usize) -> Result<Formula, ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::TooDeep(MAX_NESTING_DEPTH));
    }
    let trimmed = trim_outer_parens(s);

    if is_atomic_string(trimmed) {
        return Ok(Formula::from_kind(s, FormulaKind::Atom(trimmed.to_string())));
    }

    // Binary operators take priority over the unary prefixes: a depth-0
    // connective means the leading `~`/quantifier only governs the left
    // operand.
    if let Some((index, op)) = find_main_binary_operator(trimmed) {
        let left = &trimmed[..index];
        let right = &trimmed[index + op.token().len()..];
        if left.is_empty() || right.is_empty() {
            return Err(ParseError::NotWellFormed(s.to_string()));
        }
        let left = parse_node(left, depth + 1)?;
        let right = parse_node(right, depth + 1)?;
        return Ok(Formula::from_kind(
            s,
            FormulaKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        ));
    }

    if let Some(rest) = trimmed.strip_prefix('~') {
        let operand = parse_node(rest, depth + 1)?;
        return Ok(Formula::from_kind(s, FormulaKind::Not(Box::new(operand))));
    }

    if let Some((quantifier, var)) = Quantifier::match_prefix(trimmed) {
        let scope = parse_node(&trimmed[2..], depth + 1)?;
        return Ok(Formula::from_kind(
            s,
            FormulaKind::Quantified {
                quantifier,
                var,
                scope: Box::new(scope),
            },
        ));
    }

    Err(ParseError::NotWellFormed(s.to_string()))
}
