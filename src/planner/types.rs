use crate::classifier::SequenceEntry;
use thiserror::Error;

/// One planned rename: a classified file and the name it will receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub entry: SequenceEntry,
    pub new_name: String,
}

/// The full set of renames for one invocation, in execution order:
/// sequences in stable key order, frames ascending within each sequence.
/// Contains only files whose name actually changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    pub ops: Vec<RenameOp>,
}

impl RenamePlan {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// `(old, new)` name pairs in plan order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.ops
            .iter()
            .map(|op| (op.entry.original_name.clone(), op.new_name.clone()))
            .collect()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("Computed name {new_name} already exists on disk and is not part of the plan")]
    ExistingFile { new_name: String },

    #[error("Files {first} and {second} would both be renamed to {new_name}")]
    DuplicateTarget {
        new_name: String,
        first: String,
        second: String,
    },

    #[error("Sequence {sequence} cannot be renumbered within the representable frame range")]
    FrameRangeOverflow { sequence: String },
}
