//! Rough English-to-symbolic translation.
//!
//! A convenience layer over the parser: connective words and phrases are
//! rewritten to their symbolic tokens so that input like
//! `"if p then q and not r"` can be handed to [`Formula::parse`].  The
//! rewrites run in a fixed order; "if and only if" must be consumed before
//! "only if", which must be consumed before the bare "if" of an
//! "if...then".
//!
//! [`Formula::parse`]: crate::formula::Formula::parse

use once_cell::sync::Lazy;
use regex::Regex;

static IF_AND_ONLY_IF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\bif and only if\b\s*").expect("valid regex"));
static ONLY_IF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\bonly if\b\s*").expect("valid regex"));
static OR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\bor\b\s*").expect("valid regex"));
static AND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\band\b\s*").expect("valid regex"));
static THEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\bthen\b\s*").expect("valid regex"));
// `not` fuses with a preceding open paren (or the start of the string);
// elsewhere it keeps a single leading space.
static NOT_AFTER_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*not\b\s*").expect("valid regex"));
static NOT_AT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*not\b\s*").expect("valid regex"));
static NOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\bnot\b\s*").expect("valid regex"));
static IMPLIES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\bimplies\b\s*").expect("valid regex"));
// Any `if` still standing belongs to an `if...then` and carries no symbol.
static REMAINING_IF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\bif\b\s*").expect("valid regex"));

/// Rewrite English connective words in `source` to symbolic notation.
/// Already-symbolic input passes through unchanged.
pub fn translate_english_to_symbolic(source: &str) -> String {
    let s = IF_AND_ONLY_IF.replace_all(source, " <-> ");
    let s = ONLY_IF.replace_all(&s, " -> ");
    let s = OR.replace_all(&s, " V ");
    let s = AND.replace_all(&s, " & ");
    let s = THEN.replace_all(&s, " -> ");
    let s = NOT_AFTER_PAREN.replace_all(&s, "(~");
    let s = NOT_AT_START.replace_all(&s, "~");
    let s = NOT.replace_all(&s, " ~");
    let s = IMPLIES.replace_all(&s, " -> ");
    let s = REMAINING_IF.replace_all(&s, "");
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::translate_english_to_symbolic;
    use crate::formula::Formula;

    fn canonical(english: &str) -> String {
        let symbolic = translate_english_to_symbolic(english);
        Formula::parse(&symbolic)
            .unwrap_or_else(|e| panic!("`{symbolic}` should parse: {e}"))
            .canonical()
            .to_string()
    }

    #[test]
    fn basic_connectives() {
        assert_eq!(canonical("p and q"), "p&q");
        assert_eq!(canonical("p or q"), "pVq");
        assert_eq!(canonical("not p"), "~p");
        assert_eq!(canonical("p implies q"), "p->q");
    }

    #[test]
    fn conditional_phrasings() {
        assert_eq!(canonical("if p then q"), "p->q");
        assert_eq!(canonical("p only if q"), "p->q");
        assert_eq!(canonical("p if and only if q"), "p<->q");
    }

    #[test]
    fn negation_placement() {
        assert_eq!(canonical("not (p or q)"), "~(pVq)");
        assert_eq!(canonical("p and not q"), "p&(~q)");
        assert_eq!(canonical("(not p) and q"), "(~p)&q");
    }

    #[test]
    fn nested_phrasing() {
        assert_eq!(canonical("if p and q then r"), "(p&q)->r");
    }

    #[test]
    fn symbolic_input_passes_through() {
        assert_eq!(canonical("p & (q -> r)"), "p&(q->r)");
    }
}
