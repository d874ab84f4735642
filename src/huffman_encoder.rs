use bitvec::prelude::*;
use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::huffman::CodeTable;
use crate::symbol::Symbol;

/// Largest number of zero bits ever appended to reach a byte boundary.
pub const MAX_PADDING: u8 = 7;

/// Packs symbols into a byte stream by concatenating their codewords.
pub struct HuffmanEncoder<'a, S: Symbol> {
    codes: &'a CodeTable<S>,
    compressed: BitVec<u8, Msb0>,
}

impl<'a, S: Symbol> HuffmanEncoder<'a, S> {
    pub fn new(codes: &'a CodeTable<S>) -> Self {
        Self {
            codes,
            compressed: BitVec::new(),
        }
    }

    /// Append the codeword of every symbol of `data`, in order.
    pub fn pack(&mut self, data: &[S]) -> Result<()> {
        for symbol in data {
            let code = self
                .codes
                .get(symbol)
                .ok_or_else(|| HuffmanError::unknown_symbol(symbol))?;
            self.compressed.extend_from_bitslice(code);
        }

        Ok(())
    }

    /// Number of code bits packed so far, before padding.
    pub fn bit_len(&self) -> usize {
        self.compressed.len()
    }

    /// Zero-pad to a byte boundary and return `(payload, padding)`.
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let bits = self.compressed.len();
        let padding = (8 - bits % 8) % 8;
        self.compressed.resize(bits + padding, false);

        debug!(bits, padding, "packed payload");

        (self.compressed.into_vec(), padding as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::FrequencyTable;
    use crate::huffman_tree::HuffmanTree;

    fn codes_for(data: &[u8]) -> CodeTable<u8> {
        let table = FrequencyTable::analyze(data).unwrap();
        HuffmanTree::build(&table).unwrap().code_table()
    }

    #[test]
    fn test_huffman_encoder() {
        let data = b"aaaabbbccd";
        let codes = codes_for(data);

        let mut encoder = HuffmanEncoder::new(&codes);
        encoder.pack(data).unwrap();
        assert_eq!(encoder.bit_len(), 19);

        let (packed, padding) = encoder.finish();
        // 0000 10 10 10 111 111 110 + 00000
        assert_eq!(packed, vec![0b0000_1010, 0b1011_1111, 0b1100_0000]);
        assert_eq!(padding, 5);
    }

    #[test]
    fn test_byte_aligned_stream_needs_no_padding() {
        let data = b"abababab";
        let codes = codes_for(data);

        let mut encoder = HuffmanEncoder::new(&codes);
        encoder.pack(data).unwrap();
        let (packed, padding) = encoder.finish();

        assert_eq!(padding, 0);
        assert_eq!(packed, vec![0b0101_0101]);
    }

    #[test]
    fn test_single_symbol_uses_one_bit_each() {
        let data = b"aaaa";
        let codes = codes_for(data);

        let mut encoder = HuffmanEncoder::new(&codes);
        encoder.pack(data).unwrap();
        let (packed, padding) = encoder.finish();

        assert_eq!(packed, vec![0]);
        assert_eq!(padding, 4);
    }

    #[test]
    fn test_pack_is_appendable() {
        let data = b"hello world";
        let codes = codes_for(data);

        let mut whole = HuffmanEncoder::new(&codes);
        whole.pack(data).unwrap();

        let mut split = HuffmanEncoder::new(&codes);
        split.pack(&data[..4]).unwrap();
        split.pack(&data[4..]).unwrap();

        assert_eq!(whole.finish(), split.finish());
    }

    #[test]
    fn test_unknown_symbol() {
        let codes = codes_for(b"abc");
        let mut encoder = HuffmanEncoder::new(&codes);

        let err = encoder.pack(b"abz").unwrap_err();
        assert!(matches!(err, HuffmanError::UnknownSymbol(_)));
    }
}
