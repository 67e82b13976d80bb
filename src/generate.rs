//! Random formula generation.
//!
//! A small recursive generator over a configurable variable pool, used by
//! the property tests to exercise the parser and canonicalizer.  Pass a
//! seeded [`StdRng`] for reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::formula::{BinaryOp, Formula, FormulaKind};

/// Shape parameters for generated formulas.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Maximum operator nesting depth.
    pub max_depth: usize,
    /// Atomic variables to draw from; non-lowercase entries are ignored.
    pub variables: Vec<char>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            variables: vec!['p', 'q', 'r', 's'],
        }
    }
}

impl GeneratorConfig {
    fn variable_pool(&self) -> Vec<char> {
        let pool: Vec<char> = self
            .variables
            .iter()
            .copied()
            .filter(char::is_ascii_lowercase)
            .collect();
        if pool.is_empty() {
            vec!['p']
        } else {
            pool
        }
    }
}

/// Generate a random formula using the supplied RNG.
pub fn random_formula<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> Formula {
    let pool = config.variable_pool();
    build(rng, &pool, config.max_depth)
}

/// Generate a random formula from a fixed seed (deterministic).
pub fn seeded_formula(seed: u64, config: &GeneratorConfig) -> Formula {
    let mut rng = StdRng::seed_from_u64(seed);
    random_formula(&mut rng, config)
}

fn atom<R: Rng>(rng: &mut R, pool: &[char]) -> Formula {
    let var = pool[rng.gen_range(0..pool.len())];
    Formula::from_kind(&var.to_string(), FormulaKind::Atom(var.to_string()))
}

fn build<R: Rng>(rng: &mut R, pool: &[char], depth: usize) -> Formula {
    if depth == 0 || rng.gen_bool(0.3) {
        return atom(rng, pool);
    }
    match rng.gen_range(0..5u8) {
        0 => Formula::not(build(rng, pool, depth - 1)),
        1 => binary(rng, pool, depth, BinaryOp::And),
        2 => binary(rng, pool, depth, BinaryOp::Or),
        3 => binary(rng, pool, depth, BinaryOp::Implies),
        _ => binary(rng, pool, depth, BinaryOp::Iff),
    }
}

fn binary<R: Rng>(rng: &mut R, pool: &[char], depth: usize, op: BinaryOp) -> Formula {
    let left = build(rng, pool, depth - 1);
    let right = build(rng, pool, depth - 1);
    Formula::binary(op, left, right)
}
