use miette::Diagnostic;
use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};
use thiserror::Error;

/// Directory used when no project directory is given on the command line.
pub const DEFAULT_PROJECT_DIR: &str = "dog-walk-tracker";

/// Placeholder files of the Dog Walk Tracker PWA, in reporting order.
pub const PWA_FILES: [&str; 8] = [
    "index.html",
    "style.css",
    "app.js",
    "manifest.json",
    "service-worker.js",
    "paw-icon.png",
    "paw-icon-512.png",
    "README.md",
];

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("manifest does not list any files")]
    #[diagnostic(code(dogwalk::manifest::empty))]
    Empty,

    #[error("manifest entry '{}' is not a plain file name", entry.display())]
    #[diagnostic(
        code(dogwalk::manifest::invalid_entry),
        help("Entries must be a single relative path component, e.g. 'index.html'")
    )]
    InvalidEntry { entry: PathBuf },

    #[error("manifest entry '{}' is listed more than once", entry.display())]
    #[diagnostic(code(dogwalk::manifest::duplicate_entry))]
    DuplicateEntry { entry: PathBuf },
}

/// An ordered, non-empty list of file names created directly under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<PathBuf>,
}
impl Manifest {
    /// Builds a manifest, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if the list is empty, if an entry is anything other than
    /// a single normal path component, or if an entry repeats.
    pub fn new<I, P>(entries: I) -> Result<Self, ManifestError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let entries: Vec<PathBuf> = entries.into_iter().map(Into::into).collect();

        if entries.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_plain_file_name(entry) {
                return Err(ManifestError::InvalidEntry {
                    entry: entry.clone(),
                });
            }
            if !seen.insert(entry) {
                return Err(ManifestError::DuplicateEntry {
                    entry: entry.clone(),
                });
            }
        }

        Ok(Self { entries })
    }
    /// The Dog Walk Tracker file list.
    pub fn pwa() -> Self {
        Self {
            entries: PWA_FILES.iter().map(PathBuf::from).collect(),
        }
    }
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl Default for Manifest {
    fn default() -> Self {
        Self::pwa()
    }
}

fn is_plain_file_name(entry: &Path) -> bool {
    let mut components = entry.components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pwa_manifest_keeps_declaration_order() {
        let manifest = Manifest::pwa();

        let names: Vec<_> = manifest
            .entries()
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, PWA_FILES);
        assert_eq!(manifest.len(), 8);
    }

    #[test]
    fn pwa_manifest_satisfies_its_own_invariants() {
        assert_eq!(Manifest::new(PWA_FILES).unwrap(), Manifest::pwa());
    }

    #[test]
    fn rejects_empty_manifest() {
        let result = Manifest::new(Vec::<&str>::new());

        assert!(matches!(result, Err(ManifestError::Empty)));
    }

    #[test]
    fn rejects_entries_that_leave_the_root() {
        for entry in ["../escape.txt", "/etc/passwd", "nested/file.txt", ".", ""] {
            let result = Manifest::new([entry]);

            assert!(
                matches!(result, Err(ManifestError::InvalidEntry { .. })),
                "expected '{entry}' to be rejected"
            );
        }
    }

    #[test]
    fn rejects_duplicate_entries() {
        let result = Manifest::new(["app.js", "style.css", "app.js"]);

        assert!(matches!(
            result,
            Err(ManifestError::DuplicateEntry { entry }) if entry == Path::new("app.js")
        ));
    }
}
