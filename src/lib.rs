pub mod classifier;
pub mod cli;
pub mod compact;
pub mod engine;
pub mod error;
pub mod extensions;
pub mod logging;
pub mod output;
pub mod planner;
pub mod progress;
pub mod scanner;

pub use classifier::{classify, parse_filename, ClassifyError, SequenceEntry, SequenceGroup};
pub use compact::{CompactOptions, CompactReport};
pub use engine::{execute_plan, EngineError, StagingRecord, StagingStatus};
pub use error::{AppError, ExitCode};
pub use extensions::{ExtensionFilter, DEFAULT_IMAGE_EXTENSIONS};
pub use planner::{build_plan, PlanError, RenameOp, RenamePlan};
pub use scanner::{scan_directory, FileEntry, ScannerError};
