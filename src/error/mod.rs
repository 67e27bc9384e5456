mod codes;

pub use codes::ExitCode;

use crate::classifier::ClassifyError;
use crate::engine::EngineError;
use crate::planner::PlanError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Target directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Sequence {sequence} is ambiguous: {first} and {second} share frame {frame}")]
    AmbiguousSequence {
        sequence: String,
        frame: u64,
        first: String,
        second: String,
    },

    #[error("Name collision on {new_name}")]
    NameCollision { new_name: String, detail: String },

    #[error("Cannot create a staging folder in {}", directory.display())]
    StagingFolder {
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Renaming aborted while isolating {file}; the folder was restored")]
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

    #[error("Renaming partially completed; {} file(s) remain in {}", remaining.len(), staging_dir.display())]
    PartialCommit {
        staging_dir: PathBuf,
        committed: Vec<(String, String)>,
        remaining: Vec<String>,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::AmbiguousSequence { .. } => ExitCode::AmbiguousSequence,
            AppError::NameCollision { .. } => ExitCode::NameCollision,
            AppError::StagingFolder { .. } => ExitCode::StagingFolder,
            AppError::Isolation { .. } => ExitCode::Isolation,
            AppError::RollbackFailed { .. } => ExitCode::RollbackFailed,
            AppError::PartialCommit { .. } => ExitCode::PartialCommit,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    /// True when the error guarantees the target directory was left exactly
    /// as it was found.
    pub fn no_effect(&self) -> bool {
        !matches!(
            self,
            AppError::RollbackFailed { .. } | AppError::PartialCommit { .. }
        )
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified directory does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide a valid directory path.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::AmbiguousSequence {
                sequence,
                frame,
                first,
                second,
            } => {
                format!(
                    "Sequence {} cannot be renumbered: {} and {} both carry \
                     frame number {}.\n\n\
                     The sequence has inconsistent frame padding. Rename one \
                     of the files by hand and run again. No files were changed.",
                    sequence, first, second, frame
                )
            }

            AppError::NameCollision { new_name, detail } => {
                format!(
                    "Renumbering would overwrite an existing file:\n  {}\n\n\
                     {}\n\n\
                     Move the conflicting entry out of the way and run again. \
                     No files were changed.",
                    new_name, detail
                )
            }

            AppError::StagingFolder { directory, source } => {
                format!(
                    "Could not create a temporary staging folder inside:\n  {}\n\
                     Error: {}\n\n\
                     Check that the folder is writable and not full. \
                     No files were changed.",
                    directory.display(),
                    source
                )
            }

            AppError::Isolation { file, source } => {
                format!(
                    "Could not move {} into the staging folder:\n  Error: {}\n\n\
                     All files were restored to their original names; the \
                     folder is unchanged.",
                    file, source
                )
            }

            AppError::RollbackFailed {
                staging_dir,
                remaining,
            } => {
                let mut msg = format!(
                    "The operation failed and rollback could not restore \
                     every file. These files remain in the staging folder:\n  {}\n",
                    staging_dir.display()
                );
                for name in remaining {
                    msg.push_str(&format!("  - {}\n", name));
                }
                msg.push_str(
                    "\nMove them back into the parent folder by hand to \
                     recover the original state.",
                );
                msg
            }

            AppError::PartialCommit {
                staging_dir,
                committed,
                remaining,
            } => {
                let mut msg = String::from("Renaming stopped partway through.\n");

                if !committed.is_empty() {
                    msg.push_str("\nAlready renamed:\n");
                    for (old, new) in committed {
                        msg.push_str(&format!("  {} -> {}\n", old, new));
                    }
                }

                msg.push_str(&format!(
                    "\nStill waiting in the staging folder {}:\n",
                    staging_dir.display()
                ));
                for name in remaining {
                    msg.push_str(&format!("  - {}\n", name));
                }

                msg.push_str(
                    "\nNo file was lost. Move the staged files out by hand, \
                     or clear the obstruction and re-run on the folder.",
                );
                msg
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<ClassifyError> for AppError {
    fn from(err: ClassifyError) -> Self {
        match err {
            ClassifyError::AmbiguousFrame {
                sequence,
                frame,
                first,
                second,
            } => AppError::AmbiguousSequence {
                sequence,
                frame,
                first,
                second,
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        let detail = err.to_string();
        match err {
            PlanError::ExistingFile { new_name } => AppError::NameCollision { new_name, detail },
            PlanError::DuplicateTarget { new_name, .. } => {
                AppError::NameCollision { new_name, detail }
            }
            PlanError::FrameRangeOverflow { .. } => AppError::Other(detail),
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::StagingFolder { directory, source } => {
                AppError::StagingFolder { directory, source }
            }
            EngineError::Isolation { file, source } => AppError::Isolation { file, source },
            EngineError::RollbackFailed {
                staging_dir,
                remaining,
            } => AppError::RollbackFailed {
                staging_dir,
                remaining,
            },
            EngineError::PartialCommit {
                staging_dir,
                committed,
                remaining,
            } => AppError::PartialCommit {
                staging_dir,
                committed,
                remaining,
            },
        }
    }
}
