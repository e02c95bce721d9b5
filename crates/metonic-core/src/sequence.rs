use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MetonicError};
use crate::symbol::Symbol;
use crate::window::CyclicWindow;

fn empty_sequence(kind: &str) -> MetonicError {
    MetonicError::Argument(
        ErrorInfo::new("empty-sequence", format!("a {kind} needs at least one year"))
            .with_context("kind", kind),
    )
}

fn parse_symbols(text: &str, kind: &str) -> Result<Box<[Symbol]>, MetonicError> {
    if text.is_empty() {
        return Err(empty_sequence(kind));
    }
    text.chars()
        .enumerate()
        .map(|(offset, ch)| {
            Symbol::from_char(ch).map_err(|err| {
                MetonicError::Argument(
                    err.info()
                        .clone()
                        .with_context("offset", offset)
                        .with_context("kind", kind),
                )
            })
        })
        .collect()
}

fn render(symbols: &[Symbol], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for symbol in symbols {
        write!(f, "{}", symbol.as_char())?;
    }
    Ok(())
}

/// Fixed-length ring of year symbols.
///
/// Equality and ordering are positional; use the canonicaliser in
/// `metonic-cycles` to compare cycles up to rotation. Ordering matches the
/// ordering of the `'0'`/`'1'` renderings.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cycle {
    symbols: Box<[Symbol]>,
}

impl Cycle {
    /// Builds a cycle from its symbols. Cycles are never empty.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, MetonicError> {
        if symbols.is_empty() {
            return Err(empty_sequence("cycle"));
        }
        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    pub(crate) fn from_static(symbols: &[Symbol]) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Returns the number of years in the cycle.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in positional order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Counts the occurrences of `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.symbols.iter().filter(|s| **s == symbol).count()
    }

    /// Number of intercalary years in the cycle.
    pub fn intercalary_count(&self) -> usize {
        self.count(Symbol::Intercalary)
    }

    /// Iterates `len` symbols starting at `start`, wrapping around the ring.
    pub fn window(&self, start: usize, len: usize) -> CyclicWindow<'_> {
        CyclicWindow::new(&self.symbols, start, len)
    }

    /// Returns the cycle read from position `shift` onwards.
    pub fn rotate(&self, shift: usize) -> Cycle {
        Self {
            symbols: self.window(shift, self.len()).collect(),
        }
    }

    /// Renders the cycle with `'O'` for ordinary and `'I'` for intercalary years.
    pub fn to_letters(&self) -> String {
        self.symbols.iter().map(|s| s.as_letter()).collect()
    }

    /// Returns the cycle as integer bits.
    pub fn to_bits(&self) -> Vec<u8> {
        self.symbols.iter().map(|s| s.as_bit()).collect()
    }

    /// Reinterprets the whole cycle as a segment of the same length.
    pub fn as_segment(&self) -> Segment {
        Segment {
            symbols: self.symbols.clone(),
        }
    }
}

impl FromStr for Cycle {
    type Err = MetonicError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            symbols: parse_symbols(text, "cycle")?,
        })
    }
}

impl TryFrom<String> for Cycle {
    type Error = MetonicError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Cycle> for String {
    fn from(cycle: Cycle) -> Self {
        cycle.to_string()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(&self.symbols, f)
    }
}

impl fmt::Debug for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cycle(\"{self}\")")
    }
}

/// Contiguous run of symbols read out of a cycle.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Segment {
    symbols: Box<[Symbol]>,
}

impl Segment {
    /// Builds a segment from its symbols. Segments are never empty.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self, MetonicError> {
        if symbols.is_empty() {
            return Err(empty_sequence("segment"));
        }
        Ok(Self {
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Returns the segment length.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbols in order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl FromStr for Segment {
    type Err = MetonicError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            symbols: parse_symbols(text, "segment")?,
        })
    }
}

impl TryFrom<String> for Segment {
    type Error = MetonicError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.to_string()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(&self.symbols, f)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment(\"{self}\")")
    }
}
