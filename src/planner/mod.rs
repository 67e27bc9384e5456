mod types;

pub use types::*;

use crate::classifier::SequenceGroup;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

fn decimal_width(n: u64) -> usize {
    n.to_string().len()
}

/// Compute the compacted numbering for every sequence group and produce the
/// rename plan.
///
/// New frame numbers start at the group's lowest existing frame and run
/// contiguously upward, preserving the original order. The rendered padding
/// is wide enough for both the largest new frame and the widest original
/// digit run, so numbers are never truncated. Groups that are already
/// contiguous contribute nothing.
///
/// Reads the directory only to check for collisions; performs no mutation.
pub fn build_plan(directory: &Path, groups: &[SequenceGroup]) -> Result<RenamePlan, PlanError> {
    let classified_names: HashSet<&str> = groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .map(|e| e.original_name.as_str())
        .collect();

    let mut plan = RenamePlan::default();
    let mut producers: HashMap<String, String> = HashMap::new();

    for group in groups {
        let lowest = match group.entries.first() {
            Some(e) => e.frame,
            None => continue,
        };

        let count = group.entries.len() as u64;
        // Distinct frames bound the count, so this cannot exceed u64::MAX;
        // checked arithmetic still keeps a 20-digit frame number from
        // overflowing the intermediate sum.
        let largest_new =
            lowest
                .checked_add(count - 1)
                .ok_or_else(|| PlanError::FrameRangeOverflow {
                    sequence: group.key.signature(),
                })?;
        let widest_original = group
            .entries
            .iter()
            .map(|e| e.frame_width)
            .max()
            .unwrap_or(0);
        let padding = decimal_width(largest_new).max(widest_original);

        debug!(
            sequence = %group.key.signature(),
            lowest,
            padding,
            "Planning sequence"
        );

        let mut renamed_in_group = 0usize;

        for (i, entry) in group.entries.iter().enumerate() {
            let new_frame = lowest + i as u64;
            let new_name = format!(
                "{}{:0width$}.{}",
                entry.base_name,
                new_frame,
                entry.extension,
                width = padding
            );

            if new_name == entry.original_name {
                continue;
            }

            if let Some(first) = producers.insert(new_name.clone(), entry.original_name.clone()) {
                return Err(PlanError::DuplicateTarget {
                    new_name,
                    first,
                    second: entry.original_name.clone(),
                });
            }

            // A new name may only take over a slot that the plan itself
            // vacates. Anything else on disk under that name (a file outside
            // the filter, a subdirectory, a case-insensitive twin) is a hard
            // failure rather than a silent overwrite.
            if !classified_names.contains(new_name.as_str())
                && directory.join(&new_name).exists()
            {
                return Err(PlanError::ExistingFile { new_name });
            }

            plan.ops.push(RenameOp {
                entry: entry.clone(),
                new_name,
            });
            renamed_in_group += 1;
        }

        if renamed_in_group == 0 {
            debug!(sequence = %group.key.signature(), "Already contiguous");
        }
    }

    info!(renames = plan.len(), "Plan complete");

    Ok(plan)
}
