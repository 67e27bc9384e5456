use crate::classifier::classify;
use crate::engine::execute_plan;
use crate::error::AppError;
use crate::extensions::ExtensionFilter;
use crate::planner::build_plan;
use crate::progress::Progress;
use crate::scanner::scan_directory;
use std::path::PathBuf;
use tracing::{debug, info};

/// Configuration for one compaction run.
#[derive(Debug, Clone)]
pub struct CompactOptions {
    pub directory: PathBuf,
    pub filter: ExtensionFilter,
    /// Compute and validate only; never touch the filesystem.
    pub preview: bool,
}

/// Outcome of one run: the rename pairs in plan order, and whether they
/// were actually applied (false in preview mode and when nothing needed
/// renaming).
#[derive(Debug, Clone)]
pub struct CompactReport {
    pub pairs: Vec<(String, String)>,
    pub applied: bool,
}

/// Renumber every image sequence in the target folder so its frame numbers
/// are contiguous.
///
/// Classification and planning never mutate the filesystem; validation
/// errors therefore leave the directory untouched, as does preview mode and
/// any isolation failure (rolled back). See [`crate::engine::execute_plan`]
/// for the two failure modes that can leave documented partial state.
pub fn run(options: &CompactOptions, progress: &mut Progress) -> Result<CompactReport, AppError> {
    info!(path = ?options.directory, "Compacting image sequences");

    progress.scan_start(&options.directory);
    let files = scan_directory(&options.directory)?;
    debug!(count = files.len(), "Files scanned");

    let groups = classify(&files, &options.filter)?;
    let plan = build_plan(&options.directory, &groups)?;
    progress.plan_summary(groups.len(), plan.len());

    if plan.is_empty() {
        info!("Nothing to renumber");
        return Ok(CompactReport {
            pairs: Vec::new(),
            applied: false,
        });
    }

    if options.preview {
        info!("Preview mode, not renaming");
        return Ok(CompactReport {
            pairs: plan.pairs(),
            applied: false,
        });
    }

    let pairs = execute_plan(&options.directory, &plan, progress)?;

    Ok(CompactReport {
        pairs,
        applied: true,
    })
}
