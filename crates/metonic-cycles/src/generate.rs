use metonic_core::{Cycle, MetonicError, Symbol};
use tracing::debug;

use crate::rules::{CycleSource, Rules};

/// Lexicographic enumeration of `k`-element position sets drawn from `0..n`.
#[derive(Debug, Clone)]
pub struct PositionChoices {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl PositionChoices {
    /// Starts the enumeration at `{0, 1, .., k - 1}`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k > n,
        }
    }

    fn advance(&mut self) {
        let k = self.indices.len();
        let pivot = (0..k)
            .rev()
            .find(|&slot| self.indices[slot] < self.n - k + slot);
        match pivot {
            Some(slot) => {
                self.indices[slot] += 1;
                for next in slot + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
            }
            None => self.exhausted = true,
        }
    }
}

impl Iterator for PositionChoices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();
        self.advance();
        Some(current)
    }
}

/// Length of the longest run of `target`, treating the symbols as a ring.
///
/// A ring made only of `target` has a run equal to its length.
pub fn longest_cyclic_run(symbols: &[Symbol], target: Symbol) -> usize {
    let Some(anchor) = symbols.iter().position(|symbol| *symbol != target) else {
        return symbols.len();
    };
    // Reading from a foreign symbol means a wrapping run is seen whole, once.
    let mut longest = 0;
    let mut current = 0;
    for offset in 1..=symbols.len() {
        if symbols[(anchor + offset) % symbols.len()] == target {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Returns true when no cyclic run exceeds the limits of `rules`.
pub fn within_run_limits(cycle: &Cycle, rules: &Rules) -> bool {
    longest_cyclic_run(cycle.symbols(), Symbol::Intercalary) <= rules.max_i
        && longest_cyclic_run(cycle.symbols(), Symbol::Ordinary) <= rules.max_o
}

fn materialise(n: usize, positions: &[usize]) -> Result<Cycle, MetonicError> {
    let mut symbols = vec![Symbol::Ordinary; n];
    for &position in positions {
        symbols[position] = Symbol::Intercalary;
    }
    Cycle::from_symbols(symbols)
}

/// Generates every cycle satisfying `rules`.
///
/// Results are grouped by ascending intercalary count; within a count they
/// are sorted ascending. Rotations of the same ring are all listed.
pub fn generate(rules: &Rules) -> Result<Vec<Cycle>, MetonicError> {
    rules.validate()?;
    let mut cycles = Vec::new();
    for count in rules.i_count.iter() {
        let mut candidates = 0usize;
        let mut accepted = Vec::new();
        for positions in PositionChoices::new(rules.n, count) {
            candidates += 1;
            let cycle = materialise(rules.n, &positions)?;
            if within_run_limits(&cycle, rules) {
                accepted.push(cycle);
            }
        }
        accepted.sort_unstable();
        debug!(
            n = rules.n,
            count,
            candidates,
            accepted = accepted.len(),
            "enumerated intercalary placements"
        );
        cycles.extend(accepted);
    }
    Ok(cycles)
}

/// Resolves a [`CycleSource`] into raw cycles.
///
/// Rules are generated with [`generate`]; a supplied collection is returned
/// unchanged.
pub fn combinations(source: impl Into<CycleSource>) -> Result<Vec<Cycle>, MetonicError> {
    match source.into() {
        CycleSource::Rules(rules) => generate(&rules),
        CycleSource::Cycles(cycles) => Ok(cycles),
    }
}
