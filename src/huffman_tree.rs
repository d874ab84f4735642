use std::{
    cmp::Reverse,
    collections::{BTreeMap, BinaryHeap},
};

use bitvec::prelude::*;
use tracing::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::huffman::{bit_string, CodeTable, Codeword, FrequencyTable};
use crate::symbol::Symbol;

/// Index of a node in the tree's arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<S> {
    Leaf(S),
    Internal { left: NodeId, right: NodeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<S> {
    /// Sum of leaf counts beneath this node.
    pub weight: u64,
    pub kind: NodeKind<S>,
}

/// A Huffman tree stored as an arena.
///
/// Leaves occupy indices `0..alphabet` in canonical symbol order. Every
/// merge appends its internal node, so a node's arena index doubles as its
/// insertion index for tie-breaking. The root is always the last node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    nodes: Vec<Node<S>>,
    root: NodeId,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree by repeatedly merging the two lowest `(weight, index)`
    /// nodes. The first node removed becomes the left child.
    pub fn build(table: &FrequencyTable<S>) -> Result<Self> {
        let mut nodes: Vec<Node<S>> = table
            .iter()
            .map(|(symbol, count)| Node {
                weight: count,
                kind: NodeKind::Leaf(symbol),
            })
            .collect();

        let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
            .iter()
            .enumerate()
            .map(|(id, node)| Reverse((node.weight, id)))
            .collect();

        let root = loop {
            let Some(Reverse((left_weight, left))) = heap.pop() else {
                return Err(HuffmanError::EmptyInput);
            };
            let Some(Reverse((right_weight, right))) = heap.pop() else {
                break left;
            };

            let weight = left_weight + right_weight;
            let id = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Internal { left, right },
            });
            heap.push(Reverse((weight, id)));
        };

        debug!(
            leaves = table.len(),
            nodes = nodes.len(),
            "built huffman tree"
        );

        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    /// Walk every root-to-leaf path, `0` for left and `1` for right.
    ///
    /// A lone leaf gets the one-bit codeword `0`.
    pub fn code_table(&self) -> CodeTable<S> {
        let mut codes = BTreeMap::new();

        if let NodeKind::Leaf(symbol) = self.nodes[self.root].kind {
            codes.insert(symbol, bitvec![u8, Msb0; 0]);
            return CodeTable::new(codes);
        }

        let mut pending: Vec<(NodeId, Codeword)> = vec![(self.root, Codeword::new())];
        while let Some((id, prefix)) = pending.pop() {
            match self.nodes[id].kind {
                NodeKind::Leaf(symbol) => {
                    trace!(?symbol, code = %bit_string(&prefix), "assigned codeword");
                    codes.insert(symbol, prefix);
                }
                NodeKind::Internal { left, right } => {
                    let mut right_code = prefix.clone();
                    right_code.push(true);
                    pending.push((right, right_code));

                    let mut left_code = prefix;
                    left_code.push(false);
                    pending.push((left, left_code));
                }
            }
        }

        CodeTable::new(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_of(input: &str) -> Vec<(char, String)> {
        let symbols: Vec<char> = input.chars().collect();
        let table = FrequencyTable::analyze(&symbols).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        tree.code_table()
            .iter()
            .map(|(symbol, code)| (symbol, bit_string(code)))
            .collect()
    }

    #[test]
    fn test_classic_codes() {
        // a:4 b:3 c:2 d:1 -> (d,c) merge first, then (b, dc), then (a, bdc)
        assert_eq!(
            codes_of("aaaabbbccd"),
            vec![
                ('a', "0".to_string()),
                ('b', "10".to_string()),
                ('c', "111".to_string()),
                ('d', "110".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_weights_prefer_leaves_over_new_internals() {
        // a+b merge to weight 2, which then ties with leaf c and sorts after it
        assert_eq!(
            codes_of("abcc"),
            vec![
                ('a', "10".to_string()),
                ('b', "11".to_string()),
                ('c', "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_equal_weights_follow_symbol_order() {
        assert_eq!(
            codes_of("dcba"),
            vec![
                ('a', "00".to_string()),
                ('b', "01".to_string()),
                ('c', "10".to_string()),
                ('d', "11".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_symbol_is_lone_leaf() {
        let table = FrequencyTable::analyze(b"aaaa").unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert_eq!(tree.nodes().len(), 1);
        assert!(tree.node(1).is_none());
        assert_eq!(tree.node(tree.root()).unwrap().kind, NodeKind::Leaf(b'a'));
        assert_eq!(codes_of("aaaa"), vec![('a', "0".to_string())]);
    }

    #[test]
    fn test_zero_byte_is_a_leaf() {
        let table = FrequencyTable::analyze(&[0u8, 0, 1]).unwrap();
        let tree = HuffmanTree::build(&table).unwrap();
        let codes = tree.code_table();

        assert_eq!(codes.len(), 2);
        assert!(codes.get(&0).is_some());
    }

    #[test]
    fn test_weights_sum_to_root() {
        let table = FrequencyTable::analyze(b"the quick brown fox").unwrap();
        let tree = HuffmanTree::build(&table).unwrap();

        assert_eq!(tree.root(), tree.nodes().len() - 1);
        assert_eq!(tree.node(tree.root()).unwrap().weight, table.total());
        assert_eq!(tree.nodes().len(), 2 * table.len() - 1);
        for node in tree.nodes() {
            if let NodeKind::Internal { left, right } = node.kind {
                let children = tree.node(left).unwrap().weight + tree.node(right).unwrap().weight;
                assert_eq!(node.weight, children);
            }
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let table = FrequencyTable::analyze(b"mississippi river banks").unwrap();
        let first = HuffmanTree::build(&table).unwrap();
        let second = HuffmanTree::build(&table.clone()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.code_table(), second.code_table());
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = FrequencyTable::analyze(b"abracadabra alakazam").unwrap();
        let codes = HuffmanTree::build(&table).unwrap().code_table();
        assert_eq!(codes.len(), table.len());
        assert!(codes.is_prefix_free());
        assert!(codes.iter().all(|(_, code)| !code.is_empty()));
    }
}
