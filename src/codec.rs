//! Compress and decompress pipelines.
//!
//! compress: analyze -> build tree -> code table -> pack -> container.
//! decompress: container -> rebuild tree from the header -> code table -> unpack.

use tracing::debug;

use crate::container::CompressedArtifact;
use crate::error::{HuffmanError, Result};
use crate::huffman::FrequencyTable;
use crate::huffman_decoder::HuffmanDecoder;
use crate::huffman_encoder::HuffmanEncoder;
use crate::huffman_tree::HuffmanTree;
use crate::symbol::Symbol;

/// Encode `input` into an in-memory artifact.
pub fn encode<S: Symbol>(input: &[S]) -> Result<CompressedArtifact<S>> {
    let freq_table = FrequencyTable::analyze(input)?;
    let codes = HuffmanTree::build(&freq_table)?.code_table();

    let mut encoder = HuffmanEncoder::new(&codes);
    encoder.pack(input)?;
    let (payload, padding) = encoder.finish();

    Ok(CompressedArtifact {
        freq_table,
        padding,
        payload,
    })
}

/// Decode an artifact back into the symbols it was built from.
pub fn decode<S: Symbol>(artifact: &CompressedArtifact<S>) -> Result<Vec<S>> {
    let codes = HuffmanTree::build(&artifact.freq_table)?.code_table();
    let expected = artifact.freq_table.total();
    let decoder =
        HuffmanDecoder::new(&codes).with_limit(usize::try_from(expected).unwrap_or(usize::MAX));
    let symbols = decoder.unpack(&artifact.payload, artifact.padding)?;

    if symbols.len() as u64 != expected {
        return Err(HuffmanError::decode(format!(
            "decoded {} symbols but the frequency table accounts for {}",
            symbols.len(),
            expected
        )));
    }

    Ok(symbols)
}

pub fn compress_symbols<S: Symbol>(input: &[S]) -> Result<Vec<u8>> {
    let bytes = encode(input)?.serialize()?;
    debug!(
        symbols = input.len(),
        compressed = bytes.len(),
        "compressed"
    );
    Ok(bytes)
}

pub fn decompress_symbols<S: Symbol>(bytes: &[u8]) -> Result<Vec<S>> {
    let symbols = decode(&CompressedArtifact::<S>::deserialize(bytes)?)?;
    debug!(
        compressed = bytes.len(),
        symbols = symbols.len(),
        "decompressed"
    );
    Ok(symbols)
}

/// Compress raw bytes, one symbol per byte.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    compress_symbols(input)
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    decompress_symbols(bytes)
}

/// Compress text, one symbol per Unicode scalar value.
pub fn compress_text(text: &str) -> Result<Vec<u8>> {
    compress_symbols(&text.chars().collect::<Vec<_>>())
}

pub fn decompress_text(bytes: &[u8]) -> Result<String> {
    Ok(decompress_symbols::<char>(bytes)?.into_iter().collect())
}
