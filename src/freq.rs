//! Character frequency statistics over a sample file.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// One distinct character of the sample file and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub character: char,
    pub count: u64,
}

/// Counts every distinct character of `text`, entries in first-seen order.
pub fn count_frequencies(text: &str) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for ch in text.chars() {
        match entries.iter_mut().find(|e| e.character == ch) {
            Some(entry) => entry.count += 1,
            None => entries.push(FrequencyEntry {
                character: ch,
                count: 1,
            }),
        }
    }
    debug!("Counted {} distinct characters", entries.len());
    entries
}

/// Orders entries by descending count. Swaps only on strict `>`, so equal
/// counts are never swapped with each other; a larger count swapping past a
/// run of ties can still reorder them, so ties are only locally stable.
pub fn sort_descending(entries: &mut [FrequencyEntry]) {
    for i in 0..entries.len() {
        for j in i..entries.len() {
            if entries[j].count > entries[i].count {
                entries.swap(i, j);
            }
        }
    }
}

/// Reads the sample file and produces its descending-sorted frequency table.
pub fn from_sample_file<P: AsRef<Path>>(path: P) -> Result<Vec<FrequencyEntry>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::EncodingFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut entries = count_frequencies(&text);
    sort_descending(&mut entries);
    Ok(entries)
}
