use std::collections::HashMap;

use bitvec::prelude::*;
use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::huffman::{bit_string, CodeTable, Codeword};
use crate::huffman_encoder::MAX_PADDING;
use crate::symbol::Symbol;

/// Turns a padded payload back into symbols by matching codewords.
pub struct HuffmanDecoder<S: Symbol> {
    table: HashMap<Codeword, S>,
    longest: usize,
    limit: Option<usize>,
}

impl<S: Symbol> HuffmanDecoder<S> {
    pub fn new(codes: &CodeTable<S>) -> Self {
        Self {
            table: codes.inverse(),
            longest: codes.longest(),
            limit: None,
        }
    }

    /// Fail as soon as more than `limit` symbols would be produced.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Strip `padding` trailing bits from `payload` and decode the rest.
    ///
    /// Bits are read most significant first. A candidate is checked against
    /// the codeword table after every bit; since the codes are prefix-free
    /// the first match is the only one.
    pub fn unpack(&self, payload: &[u8], padding: u8) -> Result<Vec<S>> {
        if padding > MAX_PADDING {
            return Err(HuffmanError::decode(format!(
                "padding {} outside 0..={}",
                padding, MAX_PADDING
            )));
        }

        let bits = payload.view_bits::<Msb0>();
        let len = bits.len().checked_sub(padding as usize).ok_or_else(|| {
            HuffmanError::decode(format!(
                "padding {} exceeds payload of {} bits",
                padding,
                bits.len()
            ))
        })?;

        let mut unpacked = Vec::with_capacity(self.limit.unwrap_or(0).min(len));
        let mut candidate = Codeword::with_capacity(self.longest);

        for (offset, bit) in bits[..len].iter().by_vals().enumerate() {
            candidate.push(bit);

            if let Some(symbol) = self.table.get(&candidate) {
                if self.limit.is_some_and(|limit| unpacked.len() >= limit) {
                    return Err(HuffmanError::decode(format!(
                        "more than {} symbols in payload, next one ends at offset {}",
                        unpacked.len(),
                        offset
                    )));
                }
                unpacked.push(*symbol);
                candidate.clear();
            } else if candidate.len() >= self.longest {
                return Err(HuffmanError::decode(format!(
                    "bits {} ending at offset {} match no codeword",
                    bit_string(&candidate),
                    offset
                )));
            }
        }

        if !candidate.is_empty() {
            return Err(HuffmanError::decode(format!(
                "stream ends inside a codeword ({} dangling bits)",
                candidate.len()
            )));
        }

        debug!(bits = len, symbols = unpacked.len(), "unpacked payload");

        Ok(unpacked)
    }
}
