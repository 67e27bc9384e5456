mod types;

pub use types::*;

use crate::extensions::ExtensionFilter;
use crate::scanner::FileEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

// Sequence member: <base><digits>.<extension>
// The lazy prefix leaves the longest possible trailing digit run to the
// frame group; the extension is everything after the final dot.
static SEQUENCE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)([0-9]+)\.([^.]+)$").unwrap());

/// Split a filename into base name, trailing frame number, and extension.
///
/// Returns `None` for names that cannot belong to a sequence: no extension,
/// no digit run directly before the extension, or a digit run too large to
/// represent. Pure string function, no filesystem access.
pub fn parse_filename(name: &str) -> Option<ParsedFilename> {
    let captures = SEQUENCE_NAME_REGEX.captures(name)?;

    let base = captures.get(1)?.as_str().to_string();
    let digits = captures.get(2)?.as_str();
    let extension = captures.get(3)?.as_str().to_string();

    let frame: u64 = digits.parse().ok()?;

    Some(ParsedFilename {
        base,
        frame,
        frame_width: digits.len(),
        extension,
    })
}

/// Group a directory listing into sequences, applying the extension filter.
///
/// Groups come back in a stable order (sorted by key), entries by ascending
/// frame number. Two files mapping to the same `(base, extension, frame)`
/// make the sequence ambiguous and fail classification.
pub fn classify(
    files: &[FileEntry],
    filter: &ExtensionFilter,
) -> Result<Vec<SequenceGroup>, ClassifyError> {
    let mut groups: BTreeMap<SequenceKey, Vec<SequenceEntry>> = BTreeMap::new();

    for file in files {
        let parsed = match parse_filename(&file.name) {
            Some(p) => p,
            None => {
                trace!(name = %file.name, "Not a sequence member");
                continue;
            }
        };

        if !filter.matches(&parsed.extension) {
            trace!(name = %file.name, ext = %parsed.extension, "Extension filtered out");
            continue;
        }

        let entry = SequenceEntry {
            base_name: parsed.base,
            frame: parsed.frame,
            frame_width: parsed.frame_width,
            extension: parsed.extension,
            original_name: file.name.clone(),
        };

        debug!(name = %file.name, frame = entry.frame, "Classified");
        groups.entry(entry.key()).or_default().push(entry);
    }

    let mut result = Vec::with_capacity(groups.len());

    for (key, mut entries) in groups {
        entries.sort_by_key(|e| e.frame);

        for pair in entries.windows(2) {
            if pair[0].frame == pair[1].frame {
                return Err(ClassifyError::AmbiguousFrame {
                    sequence: key.signature(),
                    frame: pair[0].frame,
                    first: pair[0].original_name.clone(),
                    second: pair[1].original_name.clone(),
                });
            }
        }

        info!(
            sequence = %key.signature(),
            count = entries.len(),
            "Found sequence"
        );
        result.push(SequenceGroup { key, entries });
    }

    Ok(result)
}
