//! Prefix-code tree construction.
//!
//! Two builders are provided. [`TreeMode::LevelPaired`] reproduces the
//! historical rule this tool is defined by: every round re-sorts the node
//! list descending and pairs neighbors from the low end, so the whole level
//! merges at once. [`TreeMode::Canonical`] is textbook Huffman over a
//! min-heap. The two modes give different trees; only the level-paired one
//! matches the documented table output.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::freq::FrequencyEntry;

#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        character: char,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeMode {
    /// Level-synchronous pairing from the low end, re-sorted every round.
    #[default]
    LevelPaired,
    /// Global-minimum merging via a min-heap.
    Canonical,
}

/// Builds the code tree from a descending-sorted frequency table.
/// Returns `None` for an empty table.
pub fn build_tree(entries: &[FrequencyEntry], mode: TreeMode) -> Option<Box<Node>> {
    let leaves: Vec<Box<Node>> = entries
        .iter()
        .map(|e| {
            Box::new(Node::Leaf {
                character: e.character,
                freq: e.count,
            })
        })
        .collect();

    debug!("Building tree from {} leaves ({:?})", leaves.len(), mode);
    match mode {
        TreeMode::LevelPaired => build_level_paired(leaves),
        TreeMode::Canonical => build_canonical(leaves),
    }
}

/// Descending selection sort that swaps only on strict `>`, mirroring the
/// frequency-table sort. Equal frequencies are never swapped with each
/// other, though a larger node swapping past them can reorder a run of ties.
fn sort_nodes_descending(nodes: &mut [Box<Node>]) {
    for i in 0..nodes.len() {
        for j in i..nodes.len() {
            if nodes[j].freq() > nodes[i].freq() {
                nodes.swap(i, j);
            }
        }
    }
}

fn build_level_paired(mut nodes: Vec<Box<Node>>) -> Option<Box<Node>> {
    if nodes.is_empty() {
        return None;
    }

    // A single leaf is already the root; the merge loop only runs for 2+.
    while nodes.len() != 1 {
        sort_nodes_descending(&mut nodes);

        let mut next: Vec<Box<Node>> = Vec::with_capacity(nodes.len() / 2 + 1);

        // Pair neighbors from the low end: (n-1, n-2), (n-3, n-4), ...
        // Each merged node is prepended, so merges of larger frequencies
        // end up ordered before earlier ones.
        while nodes.len() >= 2 {
            let lowest = nodes.pop().unwrap();
            let above = nodes.pop().unwrap();

            let (high, low) = if lowest.freq() > above.freq() {
                (lowest, above)
            } else {
                // Ties put the higher-positioned node on the right.
                (above, lowest)
            };

            let merged = Node::Internal {
                freq: high.freq() + low.freq(),
                left: low,
                right: high,
            };
            next.insert(0, Box::new(merged));
        }

        // Odd count: the highest-frequency node is left unpaired and
        // carries over in front of this round's merges.
        if let Some(leftover) = nodes.pop() {
            next.insert(0, leftover);
        }

        nodes = next;
        debug!("Merge round complete, {} nodes remain", nodes.len());
    }

    nodes.pop()
}

#[derive(Eq, PartialEq)]
struct HeapNode {
    freq: u64,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the default max-heap behaves as a min-heap.
        other.freq.cmp(&self.freq)
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn build_canonical(leaves: Vec<Box<Node>>) -> Option<Box<Node>> {
    let mut heap = BinaryHeap::new();
    for node in leaves {
        heap.push(HeapNode {
            freq: node.freq(),
            node,
        });
    }

    while heap.len() > 1 {
        let left = heap.pop().unwrap();
        let right = heap.pop().unwrap();
        let freq = left.freq + right.freq;
        heap.push(HeapNode {
            freq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
    }

    heap.pop().map(|n| n.node)
}
