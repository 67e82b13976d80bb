//! Proof sequencing and scoring.
//!
//! A [`Proof`] is an append-only list of [`LineOfProof`]s plus a
//! conclusion.  Each appended line immediately records the set of
//! undischarged assumptions it rests on; evaluation then checks every
//! line's rule application, whether the final line reaches the
//! conclusion, and whether any assumptions remain open.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::formula::{Formula, ParseError};
use crate::rules::{evaluate_move, RuleError, RuleName};

/// Errors raised while assembling a proof from external input.
#[derive(Debug, Error)]
pub enum ProofError {
    /// A line's formula string failed to parse.
    #[error("invalid formula: {0}")]
    Formula(#[from] ParseError),

    /// A line's rule name was not recognized.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// The conclusion string failed to parse.
    #[error("invalid conclusion: {0}")]
    Conclusion(ParseError),
}

/// One step of a proof: a proposition, the rule that licenses it, and the
/// lines cited as justification.
#[derive(Clone, Debug)]
pub struct LineOfProof {
    line_number: usize,
    proposition: Formula,
    rule: RuleName,
    cited_lines: Vec<usize>,
    assumptions: BTreeSet<usize>,
}

impl LineOfProof {
    pub(crate) fn new(
        line_number: usize,
        proposition: Formula,
        rule: RuleName,
        cited_lines: Vec<usize>,
        assumptions: BTreeSet<usize>,
    ) -> Self {
        Self {
            line_number,
            proposition,
            rule,
            cited_lines,
            assumptions,
        }
    }

    /// 1-based position of this line within its proof.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn proposition(&self) -> &Formula {
        &self.proposition
    }

    pub fn rule(&self) -> RuleName {
        self.rule
    }

    /// 1-based numbers of the lines cited as justification.
    pub fn cited_lines(&self) -> &[usize] {
        &self.cited_lines
    }

    /// Line numbers of the assumptions this line transitively depends on
    /// and that have not been discharged.
    pub fn assumptions(&self) -> &BTreeSet<usize> {
        &self.assumptions
    }
}

/// Verdict and per-line diagnostics from [`Proof::evaluate`].
#[derive(Clone, Debug, Serialize)]
pub struct ProofEvaluation {
    /// 1 when the proof is valid, 0 otherwise.
    pub score: u8,
    /// Validity of each line's rule application, index 0 = line 1.
    pub line_validity: Vec<bool>,
    /// Does the final line match the stored conclusion canonically?
    pub last_line_is_conclusion: bool,
    /// Assumptions still open at the final line.
    pub open_assumptions: Vec<usize>,
}

impl ProofEvaluation {
    pub fn is_valid(&self) -> bool {
        self.score == 1
    }

    /// 1-based numbers of the lines whose rule applications failed.
    pub fn invalid_lines(&self) -> Vec<usize> {
        self.line_validity
            .iter()
            .enumerate()
            .filter(|(_, valid)| !**valid)
            .map(|(index, _)| index + 1)
            .collect()
    }
}

/// A natural-deduction proof under construction.
#[derive(Clone, Debug, Default)]
pub struct Proof {
    premises: Vec<Formula>,
    conclusion: Option<Formula>,
    lines: Vec<LineOfProof>,
}

impl Proof {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> Option<&Formula> {
        self.conclusion.as_ref()
    }

    pub fn lines(&self) -> &[LineOfProof] {
        &self.lines
    }

    /// Look up a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&LineOfProof> {
        number.checked_sub(1).and_then(|index| self.lines.get(index))
    }

    /// Parse a premise string and append it as a `Premise` line.
    pub fn add_premise(&mut self, source: &str) -> Result<(), ProofError> {
        let proposition = Formula::parse(source)?;
        self.premises.push(proposition.clone());
        self.add_line(proposition, RuleName::Premise, Vec::new());
        Ok(())
    }

    /// Append a line, computing its assumption set from the lines it
    /// cites.
    ///
    /// An `Assumption` rests on itself.  `Premise`, `Conditional Proof`,
    /// and `Indirect Proof` lines carry no assumptions (the latter two
    /// discharge them).  Every other rule inherits the union of its cited
    /// lines' assumption sets.
    pub fn add_line(&mut self, proposition: Formula, rule: RuleName, cited_lines: Vec<usize>) {
        let line_number = self.lines.len() + 1;
        let assumptions = match rule {
            RuleName::Assumption => BTreeSet::from([line_number]),
            RuleName::Premise | RuleName::ConditionalProof | RuleName::IndirectProof => {
                BTreeSet::new()
            }
            _ => cited_lines
                .iter()
                .filter_map(|&number| self.line(number))
                .flat_map(|cited| cited.assumptions.iter().copied())
                .collect(),
        };
        self.lines.push(LineOfProof::new(
            line_number,
            proposition,
            rule,
            cited_lines,
            assumptions,
        ));
    }

    /// Parse and append a line from external strings (fixture or CLI
    /// input).
    pub fn add_line_str(
        &mut self,
        source: &str,
        rule: &str,
        cited_lines: Vec<usize>,
    ) -> Result<(), ProofError> {
        let proposition = Formula::parse(source)?;
        let rule: RuleName = rule.parse()?;
        self.add_line(proposition, rule, cited_lines);
        Ok(())
    }

    /// Store the conclusion the proof is expected to reach.
    pub fn set_conclusion(&mut self, conclusion: Formula) {
        self.conclusion = Some(conclusion);
    }

    /// Parse and store the conclusion from a string.
    pub fn set_conclusion_str(&mut self, source: &str) -> Result<(), ProofError> {
        let conclusion = Formula::parse(source).map_err(ProofError::Conclusion)?;
        self.set_conclusion(conclusion);
        Ok(())
    }

    /// Check every line and combine the results into a verdict.
    ///
    /// Evaluation always runs to completion: a bad line is recorded as
    /// invalid and does not stop the remaining lines from being checked.
    pub fn evaluate(&self) -> ProofEvaluation {
        let mut line_validity = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let valid = evaluate_move(line, self);
            debug!(
                line = line.line_number,
                proposition = %line.proposition,
                rule = %line.rule,
                valid,
                "evaluated line"
            );
            line_validity.push(valid);
        }

        let last_line_is_conclusion = match (self.lines.last(), &self.conclusion) {
            (Some(last), Some(conclusion)) => last.proposition == *conclusion,
            _ => false,
        };
        let open_assumptions: Vec<usize> = self
            .lines
            .last()
            .map(|last| last.assumptions.iter().copied().collect())
            .unwrap_or_default();

        let all_valid = line_validity.iter().all(|&valid| valid);
        let score =
            u8::from(all_valid && last_line_is_conclusion && open_assumptions.is_empty());

        debug!(score, last_line_is_conclusion, "evaluated proof");
        ProofEvaluation {
            score,
            line_validity,
            last_line_is_conclusion,
            open_assumptions,
        }
    }
}
