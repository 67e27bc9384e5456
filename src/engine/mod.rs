mod types;

pub use types::*;

use crate::planner::RenamePlan;
use crate::progress::Progress;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Cannot create a staging folder in {}", directory.display())]
    StagingFolder {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to isolate {file}; all files were restored to their original names")]
    Isolation {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rollback incomplete: {} file(s) remain in {}", remaining.len(), staging_dir.display())]
    RollbackFailed {
        staging_dir: PathBuf,
        remaining: Vec<String>,
    },

    #[error(
        "Renaming aborted partway: {} file(s) committed, {} still staged in {}",
        committed.len(),
        remaining.len(),
        staging_dir.display()
    )]
    PartialCommit {
        staging_dir: PathBuf,
        committed: Vec<(String, String)>,
        remaining: Vec<String>,
    },
}

/// Apply a rename plan with the two-phase isolate-then-restore protocol.
///
/// Phase one moves every plan file into a fresh staging folder inside the
/// target directory; any failure there rolls the staged files back and the
/// directory is exactly as it was. Phase two moves the staged files back out
/// under their new names. Only a phase-two failure can leave visible partial
/// effects, and those are reported file by file.
///
/// Returns the applied `(old, new)` pairs in plan order.
pub fn execute_plan(
    directory: &Path,
    plan: &RenamePlan,
    progress: &mut Progress,
) -> Result<Vec<(String, String)>, EngineError> {
    let staging_dir = create_staging_folder(directory)?;
    debug!(path = ?staging_dir, "Created staging folder");

    let mut records: Vec<StagingRecord> =
        plan.ops.iter().cloned().map(StagingRecord::new).collect();

    if let Err((file, source)) = isolate(directory, &staging_dir, &mut records) {
        debug!(file = %file, "Isolation failed, rolling back");
        let remaining = roll_back(directory, &staging_dir, &mut records);

        if !remaining.is_empty() {
            return Err(EngineError::RollbackFailed {
                staging_dir,
                remaining,
            });
        }

        debug!("All staged files restored");
        remove_staging_folder(&staging_dir, progress);
        return Err(EngineError::Isolation { file, source });
    }

    debug!(count = records.len(), "All files isolated");

    commit(directory, &staging_dir, &mut records, progress)?;

    remove_staging_folder(&staging_dir, progress);
    info!(count = records.len(), "All files renumbered");

    Ok(records
        .iter()
        .map(|r| (r.op.entry.original_name.clone(), r.op.new_name.clone()))
        .collect())
}

/// Make a uniquely-named staging folder inside the target directory.
///
/// The handle is released from automatic cleanup right away: plan files are
/// about to move inside, and after a partial failure the folder must survive
/// for recovery.
fn create_staging_folder(directory: &Path) -> Result<PathBuf, EngineError> {
    let temp = tempfile::Builder::new()
        .prefix(".seqcompact-")
        .tempdir_in(directory)
        .map_err(|e| EngineError::StagingFolder {
            directory: directory.to_path_buf(),
            source: e,
        })?;

    Ok(temp.keep())
}

/// Move every plan file into the staging folder, in plan order, under its
/// original name. Stops at the first failure and reports which file refused
/// to move.
fn isolate(
    directory: &Path,
    staging_dir: &Path,
    records: &mut [StagingRecord],
) -> Result<(), (String, std::io::Error)> {
    for record in records.iter_mut() {
        let name = &record.op.entry.original_name;
        let src = directory.join(name);
        let dst = staging_dir.join(name);

        match fs::rename(&src, &dst) {
            Ok(()) => {
                debug!(file = %name, "Isolated");
                record.status = StagingStatus::Staged;
            }
            Err(e) => {
                warn!(file = %name, error = %e, "Failed to isolate file");
                return Err((name.clone(), e));
            }
        }
    }

    Ok(())
}

/// Restore staged files to their original names, in reverse staging order.
/// Returns the names of files that could not be restored and therefore
/// remain inside the staging folder.
fn roll_back(directory: &Path, staging_dir: &Path, records: &mut [StagingRecord]) -> Vec<String> {
    let mut remaining = Vec::new();

    for record in records.iter_mut().rev() {
        if record.status != StagingStatus::Staged {
            continue;
        }

        let name = &record.op.entry.original_name;
        let src = staging_dir.join(name);
        let dst = directory.join(name);

        match fs::rename(&src, &dst) {
            Ok(()) => {
                debug!(file = %name, "Restored");
                record.status = StagingStatus::RolledBack;
            }
            Err(e) => {
                warn!(file = %name, error = %e, "Failed to restore file");
                remaining.push(name.clone());
            }
        }
    }

    remaining
}

/// Move staged files back into the target directory under their new names.
///
/// Every move is attempted even after a failure, so the partial-commit
/// report describes the final state rather than the first error. Committed
/// files are never touched again; failed ones stay safely in the staging
/// folder.
fn commit(
    directory: &Path,
    staging_dir: &Path,
    records: &mut [StagingRecord],
    progress: &mut Progress,
) -> Result<(), EngineError> {
    let total = records.len();
    let mut failed = false;

    for (i, record) in records.iter_mut().enumerate() {
        let old_name = record.op.entry.original_name.clone();
        let new_name = record.op.new_name.clone();
        let src = staging_dir.join(&old_name);
        let dst = directory.join(&new_name);

        match fs::rename(&src, &dst) {
            Ok(()) => {
                debug!(from = %old_name, to = %new_name, "Renamed");
                record.status = StagingStatus::Committed;
                progress.rename_progress(i + 1, total, &old_name, &new_name);
            }
            Err(e) => {
                warn!(from = %old_name, to = %new_name, error = %e, "Failed to rename staged file");
                failed = true;
            }
        }
    }

    if failed {
        let committed = records
            .iter()
            .filter(|r| r.status == StagingStatus::Committed)
            .map(|r| (r.op.entry.original_name.clone(), r.op.new_name.clone()))
            .collect();
        let remaining = records
            .iter()
            .filter(|r| r.status == StagingStatus::Staged)
            .map(|r| r.op.entry.original_name.clone())
            .collect();

        return Err(EngineError::PartialCommit {
            staging_dir: staging_dir.to_path_buf(),
            committed,
            remaining,
        });
    }

    Ok(())
}

/// The staging folder should be empty by now; a leftover folder is untidy
/// but harmless, so removal failure only warns.
fn remove_staging_folder(staging_dir: &Path, progress: &mut Progress) {
    if let Err(e) = fs::remove_dir(staging_dir) {
        warn!(path = ?staging_dir, error = %e, "Could not remove staging folder");
        progress.warn(&format!(
            "could not remove staging folder {}: {}",
            staging_dir.display(),
            e
        ));
    } else {
        debug!(path = ?staging_dir, "Removed staging folder");
    }
}
