use crate::{
    manifest::{Manifest, DEFAULT_PROJECT_DIR},
    preview::preview_as_tree,
    report::{Plan, Report},
    scaffold::{self, ErrorPolicy, Scaffolder},
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SetupError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Scaffolds the Dog Walk Tracker files into `project_dir`, or into
/// [`DEFAULT_PROJECT_DIR`] when none is given.
///
/// # Errors
///
/// Returns a [`SetupError`] if:
///
/// - The project directory is empty or cannot be created.
/// - A placeholder file cannot be created.
pub fn scaffold(project_dir: Option<&str>, policy: ErrorPolicy) -> Result<Report, SetupError> {
    let project_dir = project_dir.unwrap_or(DEFAULT_PROJECT_DIR);

    log::debug!("project directory: {}", project_dir);

    let report = Scaffolder::new(Manifest::pwa())
        .with_policy(policy)
        .scaffold(Path::new(project_dir))?;

    println!("\nProject scaffolded at: {}", report.root.display());

    Ok(report)
}

/// Prints what [`scaffold`] would do, without creating anything.
///
/// # Errors
///
/// Returns a [`SetupError`] if the project directory is empty, is occupied by a
/// non-directory, or cannot be inspected.
pub fn preview(project_dir: Option<&str>) -> Result<Plan, SetupError> {
    let project_dir = project_dir.unwrap_or(DEFAULT_PROJECT_DIR);

    let plan = Scaffolder::new(Manifest::pwa()).plan(Path::new(project_dir))?;

    preview_as_tree(&plan);

    Ok(plan)
}
