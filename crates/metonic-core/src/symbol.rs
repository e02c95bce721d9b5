use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MetonicError};

/// Year type occupying one slot of a cycle.
///
/// The derived ordering places [`Symbol::Ordinary`] before
/// [`Symbol::Intercalary`], matching the `'0' < '1'` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Twelve month year, rendered `'0'`.
    Ordinary,
    /// Thirteen month year, rendered `'1'`.
    Intercalary,
}

impl Symbol {
    /// Parses a `'0'`/`'1'` character.
    pub fn from_char(ch: char) -> Result<Self, MetonicError> {
        match ch {
            '0' => Ok(Symbol::Ordinary),
            '1' => Ok(Symbol::Intercalary),
            other => Err(MetonicError::Argument(
                ErrorInfo::new("invalid-symbol", "cycles are written with '0' and '1' only")
                    .with_context("symbol", other),
            )),
        }
    }

    /// Returns the `'0'`/`'1'` rendering.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Ordinary => '0',
            Symbol::Intercalary => '1',
        }
    }

    /// Returns the `'O'`/`'I'` rendering.
    pub fn as_letter(self) -> char {
        match self {
            Symbol::Ordinary => 'O',
            Symbol::Intercalary => 'I',
        }
    }

    /// Returns the symbol as an integer bit.
    pub fn as_bit(self) -> u8 {
        match self {
            Symbol::Ordinary => 0,
            Symbol::Intercalary => 1,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
