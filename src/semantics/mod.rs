//! Truth-functional semantics: three-valued evaluation and truth tables.

mod eval;
mod table;

pub use eval::{evaluate_formula, evaluate_formula_string, Assignment, TruthValue};
pub use table::{generate_truth_table, truth_table_headers, TruthTable};
