//! The `.huff` container: a length-prefixed JSON header followed by the
//! packed payload.
//!
//! ```text
//! bytes[0..4)    u32 little-endian header length H
//! bytes[4..4+H)  UTF-8 JSON {"freqTable": [[symbol, count], ...], "padding": n}
//! bytes[4+H..)   payload
//! ```

use std::io::{Cursor, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HuffmanError, Result};
use crate::huffman::FrequencyTable;
use crate::huffman_encoder::MAX_PADDING;
use crate::symbol::Symbol;

/// Width of the header length field.
pub const HEADER_LENGTH_BYTES: usize = 4;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "S: Symbol")]
struct Header<S> {
    freq_table: Vec<(S, u64)>,
    padding: u8,
}

/// Everything the decoder needs to rebuild the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact<S: Symbol> {
    pub freq_table: FrequencyTable<S>,
    /// Zero bits appended to the payload, `0..=7`.
    pub padding: u8,
    pub payload: Vec<u8>,
}

impl<S: Symbol> CompressedArtifact<S> {
    pub fn serialize(&self) -> Result<Vec<u8>> {
        if self.padding > MAX_PADDING {
            return Err(HuffmanError::format(format!(
                "padding {} outside 0..={}",
                self.padding, MAX_PADDING
            )));
        }

        let header = Header {
            freq_table: self.freq_table.iter().collect(),
            padding: self.padding,
        };
        let header = serde_json::to_vec(&header)
            .map_err(|e| HuffmanError::format(format!("cannot encode header: {}", e)))?;
        let header_len = u32::try_from(header.len())
            .map_err(|_| HuffmanError::format("header longer than u32::MAX bytes"))?;

        let mut bytes =
            Vec::with_capacity(HEADER_LENGTH_BYTES + header.len() + self.payload.len());
        bytes.write_u32::<LittleEndian>(header_len)?;
        bytes.write_all(&header)?;
        bytes.write_all(&self.payload)?;

        debug!(
            header_len,
            payload_len = self.payload.len(),
            "serialized container"
        );

        Ok(bytes)
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);
        let header_len = cursor.read_u32::<LittleEndian>().map_err(|_| {
            HuffmanError::format(format!(
                "{} bytes is too short for the header length field",
                bytes.len()
            ))
        })? as usize;

        let header_end = HEADER_LENGTH_BYTES
            .checked_add(header_len)
            .filter(|end| *end <= bytes.len())
            .ok_or_else(|| {
                HuffmanError::format(format!(
                    "header length {} runs past the end of a {} byte buffer",
                    header_len,
                    bytes.len()
                ))
            })?;

        let header = std::str::from_utf8(&bytes[HEADER_LENGTH_BYTES..header_end])
            .map_err(|e| HuffmanError::format(format!("header is not UTF-8: {}", e)))?;
        let header: Header<S> = serde_json::from_str(header)
            .map_err(|e| HuffmanError::format(format!("unparsable header: {}", e)))?;

        if header.padding > MAX_PADDING {
            return Err(HuffmanError::format(format!(
                "padding {} outside 0..={}",
                header.padding, MAX_PADDING
            )));
        }

        let freq_table = FrequencyTable::from_pairs(header.freq_table)?;
        let payload = bytes[header_end..].to_vec();

        debug!(
            header_len,
            alphabet = freq_table.len(),
            payload_len = payload.len(),
            "deserialized container"
        );

        Ok(Self {
            freq_table,
            padding: header.padding,
            payload,
        })
    }
}
