use std::{
    fmt,
    path::{Path, PathBuf},
};

/// What happened to a single manifest entry during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An empty file was created at the path.
    Created(PathBuf),
    /// Something already existed at the path and was left untouched.
    Skipped(PathBuf),
}
impl Outcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Skipped(path) => path,
        }
    }
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created(path) => write!(f, "Created {}", path.display()),
            Self::Skipped(path) => write!(f, "{} already exists, skipping", path.display()),
        }
    }
}

/// Ordered outcomes of one run together with the absolute project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub root: PathBuf,
    pub outcomes: Vec<Outcome>,
}
impl Report {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            outcomes: Vec::new(),
        }
    }
    pub fn created(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_created())
    }
    pub fn skipped(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_created())
    }
}

/// A manifest entry as it would be handled by a run, without touching the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub path: PathBuf,
    pub exists: bool,
}

/// Dry-run counterpart of [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub root: PathBuf,
    pub root_exists: bool,
    pub entries: Vec<PlannedEntry>,
}
impl Plan {
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| !e.exists).count()
    }
}
