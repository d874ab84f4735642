#![no_main]

use huffpack::huffman::FrequencyTable;
use huffpack::huffman_decoder::HuffmanDecoder;
use huffpack::huffman_encoder::HuffmanEncoder;
use huffpack::huffman_tree::HuffmanTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let table = FrequencyTable::analyze(data).unwrap();
    let codes = HuffmanTree::build(&table).unwrap().code_table();
    assert!(codes.is_prefix_free());

    let mut encoder = HuffmanEncoder::new(&codes);
    encoder.pack(data).unwrap();
    let (compressed, padding) = encoder.finish();
    assert!(padding <= 7);

    let decoder = HuffmanDecoder::new(&codes);
    assert_eq!(data, decoder.unpack(&compressed, padding).unwrap());

    assert_eq!(data, huffpack::decompress(&huffpack::compress(data).unwrap()).unwrap());
});
