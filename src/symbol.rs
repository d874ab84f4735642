use std::{fmt::Debug, hash::Hash};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// One unit of input the codec can count, code and carry in a container header.
///
/// `Ord` fixes the canonical order used to build the tree, so encoder and
/// decoder agree on leaf insertion indices.
pub trait Symbol: Copy + Ord + Hash + Debug + Serialize + DeserializeOwned + 'static {
    /// Split raw input bytes into symbols.
    fn from_input(bytes: &[u8]) -> Result<Vec<Self>>;

    /// Join symbols back into raw output bytes.
    fn to_output(symbols: &[Self]) -> Vec<u8>;
}

impl Symbol for u8 {
    fn from_input(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(bytes.to_vec())
    }

    fn to_output(symbols: &[Self]) -> Vec<u8> {
        symbols.to_vec()
    }
}

impl Symbol for char {
    fn from_input(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(std::str::from_utf8(bytes)?.chars().collect())
    }

    fn to_output(symbols: &[Self]) -> Vec<u8> {
        symbols.iter().collect::<String>().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HuffmanError;

    #[test]
    fn test_text_symbols_are_scalar_values() {
        let symbols = char::from_input("héllo ✓".as_bytes()).unwrap();
        assert_eq!(symbols, vec!['h', 'é', 'l', 'l', 'o', ' ', '✓']);
        assert_eq!(char::to_output(&symbols), "héllo ✓".as_bytes());
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = char::from_input(&[0x61, 0xff, 0x62]).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidText(_)));
    }

    #[test]
    fn test_bytes_pass_through() {
        let data = [0u8, 255, 7, 0];
        assert_eq!(u8::from_input(&data).unwrap(), data);
        assert_eq!(u8::to_output(&data), data);
    }
}
