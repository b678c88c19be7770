//! Code derivation: recovering each character's bit-string from the tree.

use std::collections::HashMap;

use log::debug;

use crate::freq::FrequencyEntry;
use crate::tree::Node;

/// Character to bit-string code, one entry per distinct sample character.
pub type CodeTable = HashMap<char, String>;

/// Depth-first walk of the tree, left (`'0'`) before right (`'1'`),
/// returning the path to the first leaf carrying `target`. `None` if the
/// character is absent from the tree.
///
/// A single-leaf tree has a root-to-leaf path of length zero; its lone
/// character gets the reserved one-bit code `"0"` so no code is empty.
pub fn derive_code(root: &Node, target: char) -> Option<String> {
    if let Node::Leaf { character, .. } = root {
        return (*character == target).then(|| "0".to_string());
    }
    walk(root, target, String::new())
}

fn walk(node: &Node, target: char, prefix: String) -> Option<String> {
    match node {
        Node::Leaf { character, .. } => (*character == target).then_some(prefix),
        Node::Internal { left, right, .. } => walk(left, target, format!("{prefix}0"))
            .or_else(|| walk(right, target, format!("{prefix}1"))),
    }
}

/// Derives the code of every frequency-table entry. Entries all come from
/// the same sample the tree was built from, so each lookup succeeds.
pub fn build_code_table(root: &Node, entries: &[FrequencyEntry]) -> CodeTable {
    let mut table = CodeTable::new();
    for entry in entries {
        if let Some(code) = derive_code(root, entry.character) {
            debug!("Assigned code to {:?}: {}", entry.character, code);
            table.insert(entry.character, code);
        }
    }
    table
}
