//! The one-shot encoding pipeline: sample file in, table file and encoded
//! output file out.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::code::{CodeTable, build_code_table};
use crate::encode::{EncodeStats, encode_text};
use crate::error::{Error, Result};
use crate::freq::{self, FrequencyEntry};
use crate::tree::{TreeMode, build_tree};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub distinct_characters: usize,
    pub stats: EncodeStats,
}

/// Writes the table file: one `<char> : <frequency> : <code>` line per
/// entry, in the descending-frequency order the tree was built from.
/// Failure here aborts the run; an incomplete table would corrupt the
/// encode phase.
pub fn write_table_file<P: AsRef<Path>>(
    path: P,
    entries: &[FrequencyEntry],
    table: &CodeTable,
) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::new();
    for entry in entries {
        let code = table.get(&entry.character).map(String::as_str).unwrap_or("");
        out.push_str(&format!("{} : {} : {}\n", entry.character, entry.count, code));
    }

    fs::write(path, out).map_err(|source| Error::TableWrite {
        path: path.display().to_string(),
        source,
    })?;
    debug!("Wrote table file {} ({} entries)", path.display(), entries.len());
    Ok(())
}

/// Runs the whole pipeline: derive the code from `sample`, write the table
/// to `table_path`, encode `target` into `output`.
///
/// The table file is written before the target is opened, so an
/// `InputFile` failure can leave a valid table file behind. The encoded
/// output file is only created after the entire target encodes cleanly.
pub fn run_encode(
    target: impl AsRef<Path>,
    sample: impl AsRef<Path>,
    output: impl AsRef<Path>,
    table_path: impl AsRef<Path>,
    mode: TreeMode,
) -> Result<RunReport> {
    let entries = freq::from_sample_file(&sample)?;
    info!(
        "Sample {} has {} distinct characters",
        sample.as_ref().display(),
        entries.len()
    );

    let root = build_tree(&entries, mode);
    let table = match &root {
        Some(root) => build_code_table(root, &entries),
        // Empty sample: no alphabet, so only an empty target can encode.
        None => CodeTable::new(),
    };

    write_table_file(&table_path, &entries, &table)?;

    let target = target.as_ref();
    let text = fs::read_to_string(target).map_err(|source| Error::InputFile {
        path: target.display().to_string(),
        source,
    })?;

    let (bits, stats) = encode_text(&text, &table)?;

    let output = output.as_ref();
    let mut contents = bits;
    contents.push('\n');
    contents.push_str(&format!("Original Bit Count: {}\n", stats.original_bits));
    contents.push_str(&format!("Encoded Bit Count: {}\n", stats.encoded_bits));
    contents.push_str(&format!("This results in {} fewer bits\n", stats.saved_bits()));
    contents.push_str(&format!("... or {}% savings!\n", stats.savings_percent()));
    fs::write(output, contents)?;

    info!(
        "Encoded {} -> {} ({} bits to {} bits)",
        target.display(),
        output.display(),
        stats.original_bits,
        stats.encoded_bits
    );

    Ok(RunReport {
        distinct_characters: entries.len(),
        stats,
    })
}
