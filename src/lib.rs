//! Static prefix coding from sample-file character statistics.
//!
//! A sample file's character frequencies drive the construction of a binary
//! prefix-code tree; the derived codes re-express a target file as a textual
//! `'0'`/`'1'` stream with before/after bit statistics. The default tree
//! builder is the level-synchronous pairing rule this tool has always used;
//! canonical min-heap Huffman is available as a separate mode.

pub mod code;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod run;
pub mod tree;

pub use code::{CodeTable, build_code_table, derive_code};
pub use decode::{decode_bits, parse_table, read_table_file};
pub use encode::{EncodeStats, encode_text};
pub use error::{Error, Result};
pub use freq::FrequencyEntry;
pub use run::{RunReport, run_encode};
pub use tree::{Node, TreeMode, build_tree};
