//! End-to-end tests for formula parsing, canonicalization, and the
//! truth-table surface.

use natded::{
    generate_truth_table, truth_table_headers, Formula, ParseError, TruthValue,
};

fn f(s: &str) -> Formula {
    Formula::parse(s).expect("formula should parse")
}

#[test]
fn canonicalization_is_idempotent_on_examples() {
    for source in [
        "p",
        "~p",
        "p & q",
        "~p V q",
        "(p & q) -> r",
        "((p) & ((q)))",
        "p <-> (q V (r & s))",
        "~(~(p & q))",
        "Ex(F(x))",
        "Ax(F(x) -> G(x))",
    ] {
        let once = f(source);
        let twice = f(once.canonical());
        assert_eq!(once.canonical(), twice.canonical(), "source: {source}");
    }
}

#[test]
fn equality_is_an_equivalence() {
    let a = f("p & (q V r)");
    let b = f("(p & (q V r))");
    let c = f(" p&(qVr) ");
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

#[test]
fn paren_and_whitespace_insensitivity() {
    assert_eq!(f("p & q"), f("(p & q)"));
    assert_eq!(f("p & q"), f("((p&q))"));
    assert_eq!(f("p & q"), f("p    &  q"));
}

#[test]
fn main_operator_tie_break() {
    // `~p V q` is a disjunction, not a negation of `p V q`.
    let g = f("~p V q");
    let (op, left, _) = g.binary_parts().expect("should be binary");
    assert_eq!(op, natded::BinaryOp::Or);
    assert_eq!(left.canonical(), "~p");
    assert_ne!(g, f("~(p V q)"));
}

#[test]
fn negation_involution() {
    for source in ["p", "p & q", "~p", "~(p V q)", "p -> (q & r)"] {
        let g = f(source);
        assert_eq!(g.negate().negate(), g, "source: {source}");
    }
}

#[test]
fn wff_recognition_cases() {
    for good in ["p", "~p", "(p V q) -> (r & s)"] {
        assert!(Formula::is_wff_string(good), "{good} should be a wff");
    }
    for bad in ["p->", "(p -> q))", "p & 1", "p (-> q)"] {
        assert!(!Formula::is_wff_string(bad), "{bad} should not be a wff");
    }
}

#[test]
fn formula_too_complex_is_a_dedicated_error() {
    let long = format!("p{}", " & p".repeat(300));
    assert_eq!(Formula::parse(&long), Err(ParseError::TooLong(natded::MAX_FORMULA_LEN)));
}

#[test]
fn disjunction_truth_table() {
    let table = generate_truth_table(&f("p V q"), false);
    assert_eq!(table.headers, vec!["p", "q", "p V q"]);
    assert_eq!(
        table.rows,
        vec![
            vec![Some(true), Some(true), Some(true)],
            vec![Some(true), Some(false), Some(true)],
            vec![Some(false), Some(true), Some(true)],
            vec![Some(false), Some(false), Some(false)],
        ]
    );
}

#[test]
fn headers_are_pretty_printed_and_sorted() {
    assert_eq!(
        truth_table_headers(&f("(q&p) V ~r")),
        vec!["p", "q", "r", "~r", "q & p", "(q & p) V (~r)"]
    );
}

#[test]
fn three_valued_evaluation_surface() {
    let mut assignment = natded::Assignment::new();
    assignment.insert("p".to_string(), true);
    assert_eq!(
        natded::evaluate_formula_string("p V q", &assignment).expect("wff"),
        TruthValue::True
    );
    assert_eq!(
        natded::evaluate_formula_string("q", &assignment).expect("wff"),
        TruthValue::Indeterminate
    );
    assert!(natded::evaluate_formula_string("q V", &assignment).is_err());
}
