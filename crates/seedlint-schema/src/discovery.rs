//! # Discovery
//!
//! Lists the content files directly inside the configured directory. The
//! result is the universe every topic reference is resolved against.

use std::path::Path;

use seedlint_core::{FileName, LintError, TopicRef};

/// The `.yml`/`.yaml` files directly inside a directory, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverySet {
    files: Vec<FileName>,
}

impl DiscoverySet {
    /// Build a set from names, keeping only document files. Used by tests
    /// and by callers that already hold a listing.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut files: Vec<FileName> = names
            .into_iter()
            .map(|n| FileName::new(n))
            .filter(FileName::has_document_extension)
            .collect();
        files.sort();
        files.dedup();
        Self { files }
    }

    /// Number of discovered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the directory held no content files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Discovered files in run order.
    pub fn files(&self) -> &[FileName] {
        &self.files
    }

    /// The discovered file a topic reference points at, `.yaml` first.
    pub fn resolve(&self, topic: &TopicRef) -> Option<&FileName> {
        topic.candidates().find_map(|candidate| {
            self.files
                .binary_search(&candidate)
                .ok()
                .map(|idx| &self.files[idx])
        })
    }
}

/// List the content files directly inside `root`.
///
/// Subdirectories are not entered, and directories whose names happen to
/// end in `.yaml` are skipped.
///
/// # Errors
///
/// Returns [`LintError::Discovery`] if `root` cannot be read, or if a
/// `.yaml`/`.yml` file name is not valid UTF-8.
pub fn discover(root: &Path) -> Result<DiscoverySet, LintError> {
    let entries = std::fs::read_dir(root).map_err(|source| LintError::Discovery {
        path: root.display().to_string(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LintError::Discovery {
            path: root.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                let lossy = FileName::new(raw.to_string_lossy());
                if lossy.has_document_extension() {
                    return Err(LintError::Discovery {
                        path: path.display().to_string(),
                        source: std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            "file name is not valid UTF-8",
                        ),
                    });
                }
                tracing::debug!(name = %lossy, "skipping non UTF-8 file name");
            }
        }
    }

    let set = DiscoverySet::from_names(names);
    tracing::info!(
        root = %root.display(),
        count = set.len(),
        "discovered content files"
    );
    Ok(set)
}
