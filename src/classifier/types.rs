use thiserror::Error;

/// Pieces of a sequence-member filename: `<base><digits>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Everything before the trailing digit run, separators included.
    pub base: String,
    /// The trailing digit run, parsed.
    pub frame: u64,
    /// Width of the digit run as written (leading zeros count).
    pub frame_width: usize,
    /// Extension as written on disk, without the dot.
    pub extension: String,
}

/// One on-disk file eligible for renumbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceEntry {
    pub base_name: String,
    pub frame: u64,
    pub frame_width: usize,
    /// Extension as written on disk; grouping uses its lowercase form.
    pub extension: String,
    /// Exact on-disk name, immutable once classified.
    pub original_name: String,
}

impl SequenceEntry {
    /// Grouping key: base name plus lowercased extension. Lowercasing guards
    /// against case-insensitive filesystems producing colliding new names.
    pub fn key(&self) -> SequenceKey {
        SequenceKey {
            base_name: self.base_name.clone(),
            extension: self.extension.to_lowercase(),
        }
    }
}

/// Identity of one sequence within a directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceKey {
    pub base_name: String,
    pub extension: String,
}

impl SequenceKey {
    /// Human-readable signature, e.g. `shot_#.png`.
    pub fn signature(&self) -> String {
        format!("{}#.{}", self.base_name, self.extension)
    }
}

/// All classified members of one sequence, ordered by ascending frame number.
#[derive(Debug, Clone)]
pub struct SequenceGroup {
    pub key: SequenceKey,
    pub entries: Vec<SequenceEntry>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Sequence {sequence} has multiple files sharing frame {frame}: {first} and {second}")]
    AmbiguousFrame {
        sequence: String,
        frame: u64,
        first: String,
        second: String,
    },
}
