use crate::extensions::DEFAULT_IMAGE_EXTENSIONS;
use std::io::{self, Write};

/// Write the machine-parseable renaming report: one `<old>><new>` line per
/// renamed (or to-be-renamed) file, in plan order.
pub fn write_report(pairs: &[(String, String)], writer: &mut impl Write) -> io::Result<()> {
    for (old, new) in pairs {
        writeln!(writer, "{}>{}", old, new)?;
    }
    Ok(())
}

/// Write the default image extensions, one per line.
pub fn write_default_extensions(writer: &mut impl Write) -> io::Result<()> {
    for ext in DEFAULT_IMAGE_EXTENSIONS {
        writeln!(writer, "{}", ext)?;
    }
    Ok(())
}
