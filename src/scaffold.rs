use crate::{
    errors::{FileOperation, IoError},
    manifest::Manifest,
    report::{Outcome, Plan, PlannedEntry, Report},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("project directory must not be empty")]
    #[diagnostic(
        code(dogwalk::scaffold::empty_project_dir),
        help("Pass a directory name, or omit the argument to use the default")
    )]
    EmptyProjectDir,

    #[error("unable to resolve absolute path of '{}'", .0.path.display())]
    #[diagnostic(code(dogwalk::scaffold::resolve_path))]
    ResolvePath(#[source] IoError),

    #[error("unable to create project directory '{}'", .0.path.display())]
    #[diagnostic(
        code(dogwalk::scaffold::directory_creation),
        help("Make sure the parent is writable and no regular file occupies that path")
    )]
    DirectoryCreation(#[source] IoError),

    #[error("unable to create placeholder file '{}'", .0.path.display())]
    #[diagnostic(
        code(dogwalk::scaffold::file_creation),
        help("Files created before this one were kept; re-running skips them")
    )]
    FileCreation(#[source] IoError),

    #[error("unable to inspect '{}'", .0.path.display())]
    #[diagnostic(code(dogwalk::scaffold::inspect))]
    Inspect(#[source] IoError),

    #[error(
        "{} placeholder file(s) could not be created under '{}'",
        .failures.len(),
        .report.root.display()
    )]
    #[diagnostic(code(dogwalk::scaffold::incomplete))]
    Incomplete {
        report: Report,
        #[related]
        failures: Vec<ScaffoldError>,
    },
}

/// What a run does when a placeholder file cannot be created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failure. Files created so far are kept.
    #[default]
    AbortOnFirst,
    /// Try every entry, then report all failures together.
    ContinueOnError,
}

/// Creates the empty files of a [`Manifest`] under a project root, never touching files
/// that already exist.
#[derive(Debug, Clone, Default)]
pub struct Scaffolder {
    manifest: Manifest,
    policy: ErrorPolicy,
}
impl Scaffolder {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            policy: ErrorPolicy::default(),
        }
    }
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
    /// Ensures `project_dir` exists and creates every missing manifest entry inside it,
    /// printing one line per entry as it goes.
    ///
    /// Entries are visited in manifest order. An entry that already exists, whatever its
    /// kind, is reported as [`Outcome::Skipped`] and left as is.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldError`] if:
    ///
    /// - `project_dir` is empty or cannot be made absolute.
    /// - The directory cannot be created.
    /// - A file cannot be created. Under [`ErrorPolicy::ContinueOnError`] this is deferred
    ///   and surfaces as [`ScaffoldError::Incomplete`] once every entry has been tried.
    pub fn scaffold(&self, project_dir: &Path) -> Result<Report, ScaffoldError> {
        let root = resolve_root(project_dir)?;

        log::debug!(
            "scaffolding {} file(s) into {} ({:?})",
            self.manifest.len(),
            root.display(),
            self.policy
        );

        create_directory(project_dir)?;

        let mut report = Report::new(root);
        let mut failures = Vec::new();

        for name in self.manifest.entries() {
            let path = project_dir.join(name);

            match touch(&path) {
                Ok(outcome) => {
                    announce(&outcome);
                    report.outcomes.push(outcome);
                }
                Err(error) => match self.policy {
                    ErrorPolicy::AbortOnFirst => return Err(error),
                    ErrorPolicy::ContinueOnError => {
                        log::warn!("{}, continuing", error);
                        failures.push(error);
                    }
                },
            }
        }

        if !failures.is_empty() {
            return Err(ScaffoldError::Incomplete { report, failures });
        }

        Ok(report)
    }
    /// Describes what [`Scaffolder::scaffold`] would do for `project_dir` without writing
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns a [`ScaffoldError`] if the root cannot be resolved, if a non-directory
    /// occupies it, or if an entry cannot be inspected.
    pub fn plan(&self, project_dir: &Path) -> Result<Plan, ScaffoldError> {
        let root = resolve_root(project_dir)?;

        let root_exists = match path_exists(project_dir)? {
            true if !project_dir.is_dir() => {
                return Err(ScaffoldError::DirectoryCreation(IoError::new(
                    FileOperation::Mkdir,
                    project_dir.to_path_buf(),
                    io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        "a non-directory already occupies this path",
                    ),
                )));
            }
            exists => exists,
        };

        let mut entries = Vec::with_capacity(self.manifest.len());
        for name in self.manifest.entries() {
            let path = project_dir.join(name);
            let exists = root_exists && path_exists(&path)?;

            entries.push(PlannedEntry { path, exists });
        }

        Ok(Plan {
            root,
            root_exists,
            entries,
        })
    }
}

fn resolve_root(project_dir: &Path) -> Result<PathBuf, ScaffoldError> {
    if project_dir.as_os_str().is_empty() {
        return Err(ScaffoldError::EmptyProjectDir);
    }

    std::path::absolute(project_dir).map_err(|error| {
        ScaffoldError::ResolvePath(IoError::new(
            FileOperation::Resolve,
            project_dir.to_path_buf(),
            error,
        ))
    })
}
/// Creates all directories in the specified path if they do not exist.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path).map_err(|error| {
        ScaffoldError::DirectoryCreation(IoError::new(
            FileOperation::Mkdir,
            path.to_path_buf(),
            error,
        ))
    })?;

    log::debug!("directory ready: {}", path.display());

    Ok(())
}
/// Creates an empty file at `path` unless something is already there.
///
/// The existence check and the creation are a single exclusive open, so a file that
/// appears concurrently is skipped rather than truncated.
fn touch(path: &Path) -> Result<Outcome, ScaffoldError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(Outcome::Created(path.to_path_buf())),
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            Ok(Outcome::Skipped(path.to_path_buf()))
        }
        Err(error) => Err(ScaffoldError::FileCreation(IoError::new(
            FileOperation::Create,
            path.to_path_buf(),
            error,
        ))),
    }
}

fn path_exists(path: &Path) -> Result<bool, ScaffoldError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(ScaffoldError::Inspect(IoError::new(
            FileOperation::Stat,
            path.to_path_buf(),
            error,
        ))),
    }
}

fn announce(outcome: &Outcome) {
    let line = outcome.to_string();

    match outcome {
        Outcome::Created(_) => println!("{}", line.green()),
        Outcome::Skipped(_) => println!("{}", line.yellow()),
    }
}
