use crate::planner::RenameOp;

/// Where one plan entry sits in the two-phase protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingStatus {
    /// Still at its original name in the target directory.
    Pending,
    /// Moved into the staging folder, not yet renamed back.
    Staged,
    /// Renamed back into the target directory under its new name.
    Committed,
    /// Restored to its original name after a failed isolation.
    RolledBack,
}

/// Recovery ledger entry: at any failure point, the records that are
/// `Staged` but not `Committed` are exactly the files still inside the
/// staging folder.
#[derive(Debug, Clone)]
pub struct StagingRecord {
    pub op: RenameOp,
    pub status: StagingStatus,
}

impl StagingRecord {
    pub fn new(op: RenameOp) -> Self {
        Self {
            op,
            status: StagingStatus::Pending,
        }
    }
}
