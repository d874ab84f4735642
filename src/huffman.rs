use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;
use itertools::Itertools;
use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;

/// A Huffman codeword, most significant (first emitted) bit first.
pub type Codeword = BitVec<u8, Msb0>;

/// Render bits as a `0`/`1` string for logs and messages.
pub(crate) fn bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

type Counts<S> = BTreeMap<S, u64>;
type Codes<S> = BTreeMap<S, Codeword>;

/// Occurrence count for every distinct symbol of an input.
///
/// Iteration is always in ascending symbol order. That order is the
/// canonical order the tree builder assigns insertion indices from, and the
/// order the container header lists entries in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: Counts<S>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol of `input` in a single pass.
    pub fn analyze(input: &[S]) -> Result<Self> {
        if input.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let counts: Counts<S> = input
            .iter()
            .copied()
            .counts()
            .into_iter()
            .map(|(symbol, count)| (symbol, count as u64))
            .collect();

        debug!(
            symbols = input.len(),
            alphabet = counts.len(),
            "analyzed symbol frequencies"
        );

        Ok(Self { counts })
    }

    /// Rebuild a table from transmitted `(symbol, count)` pairs.
    ///
    /// The pairs may arrive in any order; they are re-canonicalized here.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (S, u64)>) -> Result<Self> {
        let pairs = pairs.into_iter().collect_vec();

        if pairs.is_empty() {
            return Err(HuffmanError::format("frequency table is empty"));
        }
        if let Some(symbol) = pairs.iter().map(|(symbol, _)| symbol).duplicates().next() {
            return Err(HuffmanError::format(format!(
                "symbol {:?} listed twice in frequency table",
                symbol
            )));
        }
        if let Some((symbol, _)) = pairs.iter().find(|(_, count)| *count == 0) {
            return Err(HuffmanError::format(format!(
                "symbol {:?} has a zero count",
                symbol
            )));
        }
        pairs
            .iter()
            .try_fold(0u64, |total, (_, count)| total.checked_add(*count))
            .ok_or_else(|| HuffmanError::format("frequency counts overflow"))?;

        Ok(Self {
            counts: pairs.into_iter().collect(),
        })
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the input the table describes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in canonical (ascending symbol) order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }
}

/// Symbol to codeword mapping derived from a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: Codes<S>,
}

impl<S: Symbol> CodeTable<S> {
    pub(crate) fn new(codes: Codes<S>) -> Self {
        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &BitSlice<u8, Msb0>)> + '_ {
        self.codes
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_bitslice()))
    }

    /// Length in bits of the longest codeword.
    pub fn longest(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }

    /// Codeword to symbol lookup used by the decoder.
    pub fn inverse(&self) -> HashMap<Codeword, S> {
        self.codes
            .iter()
            .map(|(symbol, code)| (code.clone(), *symbol))
            .collect()
    }

    /// True when no codeword is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        self.codes
            .values()
            .tuple_combinations()
            .all(|(a, b)| !a.starts_with(b.as_bitslice()) && !b.starts_with(a.as_bitslice()))
    }

    /// Total payload bits needed to encode an input with these frequencies.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable<S>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| {
                self.codes
                    .get(&symbol)
                    .map(|code| code.len() as u64 * count)
            })
            .sum()
    }
}
