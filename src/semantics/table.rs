//! Truth-table generation.
//!
//! Headers are the formula and all of its distinct sub-formulas, sorted by
//! canonical-string length and then lexicographically, which places the
//! atomic variables (alphabetically) in the leftmost columns.  Rows follow
//! the standard block pattern: column `i` alternates true/false in blocks
//! of `rows / 2^(i+1)`, most-significant variable leftmost.

use std::collections::HashSet;

use super::eval::{evaluate_formula, Assignment};
use crate::formula::Formula;

/// A generated truth table.  `rows[j][i]` is the value of the `i`-th header
/// in the `j`-th row; `None` marks a cell left blank (partial tables) or an
/// indeterminate evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<bool>>>,
}

/// The formula's distinct sub-formulas, stably deduplicated and sorted by
/// (canonical length, canonical string).
fn header_formulas(formula: &Formula) -> Vec<&Formula> {
    let mut subformulas = Vec::new();
    formula.collect_subformulas(&mut subformulas);
    let mut seen = HashSet::new();
    subformulas.retain(|f| seen.insert(f.canonical().to_string()));
    subformulas.sort_by(|a, b| {
        a.canonical()
            .len()
            .cmp(&b.canonical().len())
            .then_with(|| a.canonical().cmp(b.canonical()))
    });
    subformulas
}

/// Pretty-printed truth-table headers for a formula.
pub fn truth_table_headers(formula: &Formula) -> Vec<String> {
    header_formulas(formula).iter().map(|f| f.pretty()).collect()
}

/// Generate the truth table for a formula.
///
/// With `partial` set, only the atomic-variable columns are filled in; the
/// remaining cells stay `None` for the caller to complete.
pub fn generate_truth_table(formula: &Formula, partial: bool) -> TruthTable {
    let subformulas = header_formulas(formula);
    let headers: Vec<String> = subformulas.iter().map(|f| f.pretty()).collect();
    let width = headers.len();

    let variables = formula.atomic_variables();
    let n_rows = 1usize << variables.len();
    let var_columns = variables.len().min(width);

    let mut rows = vec![vec![None; width]; n_rows];
    for i in 0..var_columns {
        // Block size halves with each column to the right.
        let segment = n_rows >> i;
        for (j, row) in rows.iter_mut().enumerate() {
            row[i] = Some(j % segment < segment / 2);
        }
    }

    if partial {
        return TruthTable { headers, rows };
    }

    for row in rows.iter_mut() {
        let mut assignment = Assignment::new();
        for (i, var) in variables.iter().enumerate().take(var_columns) {
            if let Some(value) = row[i] {
                assignment.insert(var.to_string(), value);
            }
        }
        for i in var_columns..width {
            row[i] = evaluate_formula(subformulas[i], &assignment).as_bool();
        }
    }

    TruthTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> Formula {
        Formula::parse(s).expect("formula should parse")
    }

    #[test]
    fn headers_sorted_by_length_then_lexicographically() {
        assert_eq!(truth_table_headers(&f("p V q")), vec!["p", "q", "p V q"]);
        assert_eq!(
            truth_table_headers(&f("q V (p & q)")),
            vec!["p", "q", "p & q", "q V (p & q)"]
        );
    }

    #[test]
    fn duplicate_subformulas_are_deduplicated() {
        assert_eq!(truth_table_headers(&f("p V p")), vec!["p", "p V p"]);
    }

    #[test]
    fn disjunction_table() {
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
    fn partial_table_leaves_complex_columns_blank() {
        let table = generate_truth_table(&f("p V q"), true);
        assert_eq!(
            table.rows,
            vec![
                vec![Some(true), Some(true), None],
                vec![Some(true), Some(false), None],
                vec![Some(false), Some(true), None],
                vec![Some(false), Some(false), None],
            ]
        );
    }

    #[test]
    fn single_variable_table() {
        let table = generate_truth_table(&f("~p"), false);
        assert_eq!(table.headers, vec!["p", "~p"]);
        assert_eq!(
            table.rows,
            vec![
                vec![Some(true), Some(false)],
                vec![Some(false), Some(true)],
            ]
        );
    }

    #[test]
    fn conditional_table_column_values() {
        let table = generate_truth_table(&f("p -> q"), false);
        let final_column: Vec<Option<bool>> =
            table.rows.iter().map(|row| row[2]).collect();
        assert_eq!(
            final_column,
            vec![Some(true), Some(false), Some(true), Some(true)]
        );
    }
}
