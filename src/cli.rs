use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seqcompact")]
#[command(author, version, about, long_about = None)]
#[command(about = "Renumber image sequences in a folder into a contiguous numbering")]
pub struct Args {
    /// Folder containing the image sequences to renumber
    #[arg(required_unless_present = "list_extensions")]
    pub folder: Option<PathBuf>,

    /// Compute and report the renaming plan without touching the filesystem
    #[arg(short, long)]
    pub preview: bool,

    /// Write one "<old>><new>" line per renamed file to standard output
    #[arg(short, long)]
    pub report: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat every filename extension as an image format
    #[arg(short, long)]
    pub all_images: bool,

    /// Add an extension to the recognized image formats (repeatable, case-insensitive)
    #[arg(short = 'e', long, value_name = "EXT")]
    pub add_extension: Vec<String>,

    /// Print the default image extensions, one per line, and exit
    #[arg(long)]
    pub list_extensions: bool,
}
