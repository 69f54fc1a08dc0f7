use std::{collections::HashMap, fmt, str::FromStr};

use bitvec::{order::Msb0, vec::BitVec};

use crate::{FrequencyTable, Symbol};

/// A root-to-leaf path: `0` for each step left, `1` for each step right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(BitVec<u8, Msb0>);

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this code, one bit longer.
    pub fn with_bit(&self, bit: bool) -> Self {
        let mut bits = self.0.clone();
        bits.push(bit);
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }

    /// True if `other` starts with this code (including when they're equal).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(self.0.as_bitslice())
    }
}

impl FromIterator<bool> for Code {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid bit {0:?} in code; expected '0' or '1'")]
pub struct ParseCodeError(char);

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(ParseCodeError(other)),
            })
            .collect()
    }
}

/// The mapping from symbol to code. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    pub(crate) fn new(codes: HashMap<S, Code>) -> Self {
        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All entries, ordered by symbol label.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        let mut entries: Vec<_> = self
            .codes
            .iter()
            .map(|(symbol, code)| (symbol.label(), symbol, code))
            .collect();
        entries.sort_by(|(a, ..), (b, ..)| a.cmp(b));
        entries.into_iter().map(|(_, symbol, code)| (symbol, code))
    }

    /// Check that no code is a prefix of another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Code> = self.codes.values().collect();
        codes.sort();

        // After sorting, any code that prefixes another also prefixes its
        // immediate successor.
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// The encoded length in bits: the sum of `count * code length` over every
    /// symbol with a positive count.
    pub fn weighted_length(&self, frequencies: &FrequencyTable<S>) -> u128 {
        frequencies
            .iter()
            .filter(|&(_, &n)| n > 0)
            .filter_map(|(symbol, &n)| {
                let code = self.codes.get(symbol)?;
                Some(n as u128 * code.len() as u128)
            })
            .sum()
    }

    pub fn into_inner(self) -> HashMap<S, Code> {
        self.codes
    }
}

/// One `label<TAB>code` line per symbol, ordered by label. Labels are escaped so
/// that whitespace symbols stay on one line.
impl<S: Symbol> fmt::Display for CodeTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{}\t{code}", symbol.label().escape_debug())?;
        }
        Ok(())
    }
}
