use std::collections::HashSet;

/// Image formats recognized out of the box. Extendable from the CLI with
/// `--add-extension`, or bypassed entirely with `--all-images`.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &[
    "bmp", "dpx", "exr", "gif", "hdr", "jpeg", "jpg", "pbm", "pgm", "ppm", "pcx", "pic", "png",
    "psd", "sgi", "tga", "tif", "tiff", "xbm",
];

/// Which filename extensions qualify a file as a sequence member.
///
/// Matching is case-insensitive. This is an explicit configuration value
/// threaded into the classifier, never process-global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// Every extension is accepted.
    All,
    /// Only the listed extensions (stored lowercase) are accepted.
    Set(HashSet<String>),
}

impl ExtensionFilter {
    /// The default image-format set, optionally extended with extra entries.
    pub fn default_set<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set: HashSet<String> = DEFAULT_IMAGE_EXTENSIONS
            .iter()
            .map(|e| (*e).to_string())
            .collect();
        for ext in extra {
            set.insert(ext.as_ref().trim_start_matches('.').to_lowercase());
        }
        ExtensionFilter::Set(set)
    }

    pub fn matches(&self, extension: &str) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Set(set) => set.contains(&extension.to_lowercase()),
        }
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        ExtensionFilter::default_set(std::iter::empty::<&str>())
    }
}
