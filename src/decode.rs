//! Decoding of a textual bitstream against a code table.
//!
//! The encoder's counterpart: reads the table file back, inverts it, and
//! consumes the `'0'`/`'1'` stream greedily. The prefix property of the
//! code makes the greedy match unambiguous.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::code::CodeTable;
use crate::error::{Error, Result};

/// Parses a table file of `<char> : <frequency> : <code>` lines back into a
/// code table. The frequency column is ignored; only the code matters for
/// decoding.
pub fn read_table_file<P: AsRef<Path>>(path: P) -> Result<CodeTable> {
    let text = fs::read_to_string(path)?;
    parse_table(&text)
}

pub fn parse_table(text: &str) -> Result<CodeTable> {
    let mut table = CodeTable::new();

    // A newline character in the sample alphabet splits its own table line
    // into an empty line plus a remainder whose char field is empty. The
    // empty line marks the entry so the remainder can be re-attributed.
    let mut pending_newline = false;

    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() {
            pending_newline = true;
            continue;
        }

        let mut fields = line.splitn(3, " : ");
        let entry = (fields.next(), fields.next(), fields.next());
        let (Some(char_field), Some(_freq_field), Some(code_field)) = entry else {
            return Err(Error::TableParse {
                lineno: lineno + 1,
                line: line.to_string(),
            });
        };

        let mut chars = char_field.chars();
        let character = match chars.next() {
            Some(ch) if chars.next().is_none() => ch,
            None if pending_newline => {
                debug!("Recovered newline-character entry at line {}", lineno + 1);
                '\n'
            }
            _ => {
                return Err(Error::TableParse {
                    lineno: lineno + 1,
                    line: line.to_string(),
                });
            }
        };
        pending_newline = false;

        if !code_field.chars().all(|c| c == '0' || c == '1') {
            return Err(Error::TableParse {
                lineno: lineno + 1,
                line: line.to_string(),
            });
        }

        table.insert(character, code_field.to_string());
    }

    debug!("Parsed table with {} entries", table.len());
    Ok(table)
}

/// Walks the bitstream, emitting a character each time the accumulated bits
/// match a code. Stops cleanly at the first non-bit character (the stats
/// block follows the bitstream in an encoded file). Fails if the stream
/// ends mid-code.
pub fn decode_bits(bits: &str, table: &CodeTable) -> Result<String> {
    let reverse: HashMap<&str, char> = table.iter().map(|(&ch, code)| (code.as_str(), ch)).collect();

    let mut out = String::new();
    let mut current = String::new();

    for bit in bits.chars() {
        if bit != '0' && bit != '1' {
            break;
        }
        current.push(bit);
        if let Some(&ch) = reverse.get(current.as_str()) {
            out.push(ch);
            current.clear();
        }
    }

    if !current.is_empty() {
        return Err(Error::DanglingBits(current));
    }

    debug!("Decoded {} characters", out.chars().count());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::build_code_table;
    use crate::encode::encode_text;
    use crate::freq::{count_frequencies, sort_descending};
    use crate::tree::{TreeMode, build_tree};

    fn table_for(text: &str) -> CodeTable {
        let mut entries = count_frequencies(text);
        sort_descending(&mut entries);
        let root = build_tree(&entries, TreeMode::LevelPaired).unwrap();
        build_code_table(&root, &entries)
    }

    #[test]
    fn round_trip_reproduces_the_target() {
        let sample = "the quick brown fox jumps over the lazy dog";
        let table = table_for(sample);
        for target in ["the fox", "quick quick", "", "lazy dog over the moon "] {
            if target.chars().all(|c| table.contains_key(&c)) {
                let (bits, _) = encode_text(target, &table).unwrap();
                assert_eq!(decode_bits(&bits, &table).unwrap(), target);
            }
        }
    }

    #[test]
    fn decoding_stops_at_stats_block() {
        let table = table_for("aaab");
        // "1110" = aaab, then the newline starts the stats lines.
        let stream = "1110\nOriginal Bit Count: 32";
        assert_eq!(decode_bits(stream, &table).unwrap(), "aaab");
    }

    #[test]
    fn dangling_bits_are_an_error() {
        // Codes here are a="00", b="01", c="1"; "abcb" encodes to
        // "0001101", so dropping the final bit strands a lone "0" that
        // cannot complete any code.
        let table = table_for("abbccc");
        let (bits, _) = encode_text("abcb", &table).unwrap();
        let truncated = &bits[..bits.len() - 1];
        match decode_bits(truncated, &table) {
            Err(Error::DanglingBits(rest)) => assert_eq!(rest, "0"),
            other => panic!("expected dangling bits, got {other:?}"),
        }
    }

    #[test]
    fn parses_table_lines() {
        let table = parse_table("a : 3 : 1\nb : 1 : 0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[&'a'], "1");
        assert_eq!(table[&'b'], "0");
    }

    #[test]
    fn space_character_entries_parse() {
        let text = "  : 5 : 01\na : 3 : 1\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table[&' '], "01");
    }

    #[test]
    fn newline_character_entry_is_recovered() {
        // The encoder writes the '\n' entry as "\n : 2 : 000\n", which
        // reads back as an empty line plus a remainder line.
        let text = "e : 3 : 1\n\n : 2 : 000\na : 1 : 001\n";
        let table = parse_table(text).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[&'\n'], "000");
        assert_eq!(table[&'e'], "1");
        assert_eq!(table[&'a'], "001");
    }

    #[test]
    fn empty_char_field_without_marker_line_is_malformed() {
        let err = parse_table(" : 2 : 000\n").unwrap_err();
        assert!(matches!(err, Error::TableParse { lineno: 1, .. }));
    }

    #[test]
    fn malformed_line_is_reported_with_its_number() {
        let err = parse_table("a : 3 : 1\nbroken\n").unwrap_err();
        match err {
            Error::TableParse { lineno, line } => {
                assert_eq!(lineno, 2);
                assert_eq!(line, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
