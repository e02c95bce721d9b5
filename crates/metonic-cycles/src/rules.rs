use std::collections::BTreeSet;

use metonic_core::{Cycle, ErrorInfo, MetonicError};
use serde::{Deserialize, Serialize};

/// Normalised set of admissible intercalary-year counts.
///
/// Counts are deduplicated and iterate in ascending order. Deserialises from
/// either a single integer or a list of integers. Negative values survive
/// deserialisation so that [`Rules::validate`] can reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CountsValue", into = "Vec<i64>")]
pub struct IntercalaryCounts(BTreeSet<i64>);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountsValue {
    One(i64),
    Many(Vec<i64>),
}

impl From<CountsValue> for IntercalaryCounts {
    fn from(value: CountsValue) -> Self {
        match value {
            CountsValue::One(count) => Self(BTreeSet::from([count])),
            CountsValue::Many(counts) => Self(counts.into_iter().collect()),
        }
    }
}

impl From<IntercalaryCounts> for Vec<i64> {
    fn from(counts: IntercalaryCounts) -> Self {
        counts.0.into_iter().collect()
    }
}

fn negative_count(count: i64) -> MetonicError {
    MetonicError::Constraint(
        ErrorInfo::new("negative-count", "intercalary counts cannot be negative")
            .with_context("i_count", count),
    )
}

impl IntercalaryCounts {
    /// Normalises signed counts, rejecting negative values.
    pub fn from_signed(counts: &[i64]) -> Result<Self, MetonicError> {
        match counts.iter().find(|count| **count < 0) {
            Some(&count) => Err(negative_count(count)),
            None => Ok(Self(counts.iter().copied().collect())),
        }
    }

    /// Iterates the non-negative counts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .filter_map(|&count| usize::try_from(count).ok())
    }

    /// Returns the number of distinct counts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no count is admissible.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the smallest negative count, if any was supplied.
    pub fn negative(&self) -> Option<i64> {
        self.0.first().copied().filter(|count| *count < 0)
    }

    /// Returns the largest admissible count.
    pub fn max(&self) -> Option<usize> {
        self.iter().last()
    }
}

impl From<usize> for IntercalaryCounts {
    fn from(count: usize) -> Self {
        std::iter::once(count).collect()
    }
}

impl FromIterator<usize> for IntercalaryCounts {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|count| i64::try_from(count).unwrap_or(i64::MAX))
                .collect(),
        )
    }
}

/// Generation rules for intercalation cycles.
///
/// Run limits are measured cyclically: a run may straddle the end of the
/// cycle and continue at its start. The defaults are the classical Metonic
/// rules: 19 years, 7 intercalary, no two intercalary years in a row and at
/// most two ordinary years in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Length of every generated cycle.
    pub n: usize,
    /// Admissible numbers of intercalary years.
    pub i_count: IntercalaryCounts,
    /// Longest permitted run of intercalary years.
    pub max_i: usize,
    /// Longest permitted run of ordinary years.
    pub max_o: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            n: 19,
            i_count: IntercalaryCounts::from(7),
            max_i: 1,
            max_o: 2,
        }
    }
}

impl Rules {
    /// Creates a rule set admitting a single intercalary count.
    pub fn new(n: usize, i_count: usize, max_i: usize, max_o: usize) -> Self {
        Self {
            n,
            i_count: IntercalaryCounts::from(i_count),
            max_i,
            max_o,
        }
    }

    /// Replaces the cycle length.
    pub fn with_length(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Replaces the admissible intercalary counts.
    pub fn with_counts(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.i_count = counts.into_iter().collect();
        self
    }

    /// Replaces the intercalary run limit.
    pub fn with_max_intercalary(mut self, max_i: usize) -> Self {
        self.max_i = max_i;
        self
    }

    /// Replaces the ordinary run limit.
    pub fn with_max_ordinary(mut self, max_o: usize) -> Self {
        self.max_o = max_o;
        self
    }

    /// Checks that the rules are internally consistent.
    ///
    /// Rules that are consistent but admit no cycle are valid; generation
    /// simply yields nothing for them.
    pub fn validate(&self) -> Result<(), MetonicError> {
        if self.n == 0 {
            return Err(MetonicError::Constraint(
                ErrorInfo::new("empty-cycle", "cycle length must be at least one")
                    .with_context("n", self.n),
            ));
        }
        if let Some(count) = self.i_count.negative() {
            return Err(negative_count(count));
        }
        if let Some(count) = self.i_count.max().filter(|count| *count > self.n) {
            return Err(MetonicError::Constraint(
                ErrorInfo::new(
                    "count-exceeds-length",
                    "intercalary count exceeds the cycle length",
                )
                .with_context("i_count", count)
                .with_context("n", self.n),
            ));
        }
        if self.max_i == 0 {
            return Err(MetonicError::Constraint(
                ErrorInfo::new(
                    "max-intercalary-run",
                    "intercalary run limit must be at least one",
                )
                .with_context("max_i", self.max_i)
                .with_hint("use i_count = 0 to forbid intercalary years"),
            ));
        }
        if self.max_o == 0 {
            return Err(MetonicError::Constraint(
                ErrorInfo::new("max-ordinary-run", "ordinary run limit must be at least one")
                    .with_context("max_o", self.max_o)
                    .with_hint("use i_count = n to forbid ordinary years"),
            ));
        }
        Ok(())
    }
}

/// Input accepted by the generation entry points.
///
/// Either rules to generate from, or an already built collection of cycles
/// that is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleSource {
    /// Generate every cycle satisfying the rules.
    Rules(Rules),
    /// Use the supplied cycles in the given order.
    Cycles(Vec<Cycle>),
}

impl From<Rules> for CycleSource {
    fn from(rules: Rules) -> Self {
        CycleSource::Rules(rules)
    }
}

impl From<&Rules> for CycleSource {
    fn from(rules: &Rules) -> Self {
        CycleSource::Rules(rules.clone())
    }
}

impl From<Vec<Cycle>> for CycleSource {
    fn from(cycles: Vec<Cycle>) -> Self {
        CycleSource::Cycles(cycles)
    }
}

impl From<&[Cycle]> for CycleSource {
    fn from(cycles: &[Cycle]) -> Self {
        CycleSource::Cycles(cycles.to_vec())
    }
}
