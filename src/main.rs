use clap::Parser;
use seqcompact::cli::Args;
use seqcompact::compact::{self, CompactOptions};
use seqcompact::error::AppError;
use seqcompact::extensions::ExtensionFilter;
use seqcompact::progress::Progress;
use seqcompact::{logging, output};
use tracing::{error, info};

fn main() {
    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    if args.list_extensions {
        return output::write_default_extensions(&mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to write extension list: {}", e)));
    }

    // Guarded by clap's required_unless_present.
    let folder = match args.folder {
        Some(f) => f,
        None => return Ok(()),
    };

    let filter = if args.all_images {
        ExtensionFilter::All
    } else {
        ExtensionFilter::default_set(&args.add_extension)
    };

    let mut progress =
        Progress::new_with_ui(args.verbose > 0, seqcompact::progress::should_use_colors());

    let options = CompactOptions {
        directory: folder,
        filter,
        preview: args.preview,
    };

    let report = compact::run(&options, &mut progress)?;

    // Preview always reports; there is nothing else to show.
    if args.report || args.preview {
        info!("Writing renaming report");
        output::write_report(&report.pairs, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to write report: {}", e)))?;
    }

    progress.complete(report.pairs.len(), args.preview);

    Ok(())
}
