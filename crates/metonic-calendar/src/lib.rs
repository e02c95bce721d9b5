#![deny(missing_docs)]
//! Mapping between astronomical years and positions within numbered Metonic
//! cycles.
//!
//! Years use astronomical numbering: 1 BCE is year `0`, 2 BCE is `-1`.
//! Cycle 1 starts in year `-431` (432 BCE). Years before the epoch fall into
//! cycle `0`, `-1`, and so on; positions always run from 1 to the cycle length.

use metonic_core::{ErrorInfo, MetonicError};
use serde::{Deserialize, Serialize};

/// First year of cycle 1.
pub const METONIC_EPOCH: i64 = -431;

/// Years per Metonic cycle.
pub const METONIC_CYCLE_LENGTH: u32 = 19;

/// Position of a year within the numbered cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MetonicPosition {
    /// Cycle number, 1 for the cycle starting at the epoch.
    pub cycle: i64,
    /// One-based position within the cycle.
    pub position: u32,
}

impl MetonicPosition {
    /// Returns the position as a `(cycle, position)` pair.
    pub fn as_tuple(&self) -> (i64, u32) {
        (self.cycle, self.position)
    }
}

impl From<MetonicPosition> for (i64, u32) {
    fn from(position: MetonicPosition) -> Self {
        position.as_tuple()
    }
}

/// Epoch and length defining a cycle numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAnchor {
    /// Astronomical year at position 1 of cycle 1.
    pub epoch_year: i64,
    /// Years per cycle; must be at least one.
    pub cycle_length: u32,
}

impl Default for CalendarAnchor {
    fn default() -> Self {
        Self {
            epoch_year: METONIC_EPOCH,
            cycle_length: METONIC_CYCLE_LENGTH,
        }
    }
}

fn year_out_of_range(key: &str, value: impl ToString) -> MetonicError {
    MetonicError::Argument(
        ErrorInfo::new("year-out-of-range", "result does not fit an astronomical year")
            .with_context(key, value),
    )
}

impl CalendarAnchor {
    fn length(&self) -> Result<i128, MetonicError> {
        if self.cycle_length == 0 {
            return Err(MetonicError::Argument(
                ErrorInfo::new("cycle-length", "calendar cycles need at least one year")
                    .with_context("cycle_length", self.cycle_length),
            ));
        }
        Ok(i128::from(self.cycle_length))
    }

    /// Locates `year` within the numbered cycles.
    pub fn to_position(&self, year: i64) -> Result<MetonicPosition, MetonicError> {
        let (cycle, position) = locate(
            i128::from(year) - i128::from(self.epoch_year),
            self.length()?,
        );
        Ok(MetonicPosition {
            cycle: i64::try_from(cycle).map_err(|_| year_out_of_range("year", year))?,
            position,
        })
    }

    /// Returns the year at `position` of `cycle`.
    pub fn to_year(&self, cycle: i64, position: u32) -> Result<i64, MetonicError> {
        let length = self.length()?;
        if position == 0 || position > self.cycle_length {
            return Err(MetonicError::Argument(
                ErrorInfo::new("position-out-of-range", "position lies outside the cycle")
                    .with_context("position", position)
                    .with_context("cycle_length", self.cycle_length),
            ));
        }
        let year = (i128::from(cycle) - 1) * length
            + i128::from(self.epoch_year)
            + i128::from(position)
            - 1;
        i64::try_from(year).map_err(|_| year_out_of_range("cycle", cycle))
    }
}

// `length` comes from a `u32`, so the remainder always fits.
fn locate(offset: i128, length: i128) -> (i128, u32) {
    (
        offset.div_euclid(length) + 1,
        offset.rem_euclid(length) as u32 + 1,
    )
}

/// Metonic cycle and position of an astronomical year.
pub fn to_metonic(year: i64) -> MetonicPosition {
    let (cycle, position) = locate(
        i128::from(year) - i128::from(METONIC_EPOCH),
        i128::from(METONIC_CYCLE_LENGTH),
    );
    // Dividing any i64 offset by 19 stays well inside i64.
    MetonicPosition {
        cycle: cycle as i64,
        position,
    }
}

/// Astronomical year at `position` (1 to 19) of Metonic `cycle`.
pub fn from_metonic(cycle: i64, position: u32) -> Result<i64, MetonicError> {
    CalendarAnchor::default().to_year(cycle, position)
}
