//! # huffpack
//!
//! Lossless Huffman prefix-coding compressor. An artifact carries the
//! frequency table and padding in a small JSON header so the decoder can
//! rebuild the exact same tree.
//!
//! ```rust
//! let artifact = huffpack::compress_text("aaaabbbccd")?;
//! assert_eq!(huffpack::decompress_text(&artifact)?, "aaaabbbccd");
//!
//! let bytes = huffpack::compress(&[0, 0, 0, 1, 2])?;
//! assert_eq!(huffpack::decompress(&bytes)?, vec![0, 0, 0, 1, 2]);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod codec;
pub mod container;
pub mod error;
pub mod huffman;
pub mod huffman_decoder;
pub mod huffman_encoder;
pub mod huffman_tree;
pub mod io;
pub mod symbol;

pub use codec::{
    compress, compress_symbols, compress_text, decode, decompress, decompress_symbols,
    decompress_text, encode,
};
pub use container::CompressedArtifact;
pub use error::{HuffmanError, Result};
pub use huffman::{CodeTable, FrequencyTable};
pub use huffman_tree::HuffmanTree;
pub use symbol::Symbol;
