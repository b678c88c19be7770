//! Applies a code table to a target text, producing the textual bitstream
//! and before/after bit statistics.

use log::debug;

use crate::code::CodeTable;
use crate::error::{Error, Result};

/// Bit counts of one encode pass. The original count assumes a fixed 8 bits
/// per character regardless of actual character width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeStats {
    pub original_bits: u64,
    pub encoded_bits: u64,
}

impl EncodeStats {
    /// May be negative: pathological frequency distributions can produce
    /// codes longer than 8 bits.
    pub fn saved_bits(&self) -> i64 {
        self.original_bits as i64 - self.encoded_bits as i64
    }

    /// Percentage of bits saved, `0.0` for an empty input (the ratio is
    /// undefined when no bits were processed).
    pub fn savings_percent(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        self.saved_bits() as f64 / self.original_bits as f64 * 100.0
    }
}

/// Encodes every character of `text` as its code string, concatenated with
/// no separators. Fails on the first character with no table entry.
pub fn encode_text(text: &str, table: &CodeTable) -> Result<(String, EncodeStats)> {
    let mut bits = String::new();
    let mut stats = EncodeStats {
        original_bits: 0,
        encoded_bits: 0,
    };

    for ch in text.chars() {
        let code = table.get(&ch).ok_or(Error::UnknownCharacter(ch))?;
        bits.push_str(code);
        stats.original_bits += 8;
        stats.encoded_bits += code.len() as u64;
    }

    debug!(
        "Encoded {} bits down to {} bits",
        stats.original_bits, stats.encoded_bits
    );
    Ok((bits, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::build_code_table;
    use crate::freq::{count_frequencies, sort_descending};
    use crate::tree::{TreeMode, build_tree};

    fn table_for(text: &str) -> CodeTable {
        let mut entries = count_frequencies(text);
        sort_descending(&mut entries);
        let root = build_tree(&entries, TreeMode::LevelPaired).unwrap();
        build_code_table(&root, &entries)
    }

    #[test]
    fn aaab_bitstream() {
        let table = table_for("aaab");
        let (bits, stats) = encode_text("aaab", &table).unwrap();
        assert_eq!(bits, "1110");
        assert_eq!(stats.original_bits, 32);
        assert_eq!(stats.encoded_bits, 4);
        assert_eq!(stats.saved_bits(), 28);
        assert_eq!(stats.savings_percent(), 87.5);
    }

    #[test]
    fn empty_target_is_zero_bits_zero_percent() {
        let table = table_for("aaab");
        let (bits, stats) = encode_text("", &table).unwrap();
        assert!(bits.is_empty());
        assert_eq!(stats.original_bits, 0);
        assert_eq!(stats.encoded_bits, 0);
        assert_eq!(stats.savings_percent(), 0.0);
    }

    #[test]
    fn unknown_character_names_the_offender() {
        let table = table_for("aaab");
        let err = encode_text("abq", &table).unwrap_err();
        assert!(matches!(err, Error::UnknownCharacter('q')));
    }

    #[test]
    fn encoded_bits_match_summed_code_lengths() {
        let sample = "abracadabra";
        let table = table_for(sample);
        let (bits, stats) = encode_text(sample, &table).unwrap();
        assert_eq!(bits.len() as u64, stats.encoded_bits);
        let expected: u64 = sample.chars().map(|c| table[&c].len() as u64).sum();
        assert_eq!(stats.encoded_bits, expected);
        assert_eq!(stats.original_bits, 8 * sample.chars().count() as u64);
    }

    #[test]
    fn savings_may_be_negative() {
        // A single-character alphabet encodes each char as one bit; that
        // still saves bits, so force the other direction with a stats value
        // directly to pin the formula rather than the sign.
        let stats = EncodeStats {
            original_bits: 8,
            encoded_bits: 12,
        };
        assert_eq!(stats.saved_bits(), -4);
        assert_eq!(stats.savings_percent(), -50.0);
    }
}
