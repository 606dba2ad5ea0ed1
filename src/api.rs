use crate::{
    errors::{FileOperation, IoError},
    layout::{DEFAULT_PROJECT_NAME, NEXT_APP_LAYOUT},
    preview::preview_as_tree,
    prompt,
    scaffold::{self, Scaffolder},
    utils::normalize_path,
    vfs::VirtualFS,
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SkeletonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Turns user input into the project base path.
///
/// Empty input selects [`DEFAULT_PROJECT_NAME`] inside the current working directory; anything
/// else is used verbatim, relative or absolute.
///
/// # Errors
///
/// Returns a [`SkeletonError`] if the input is empty and the current directory is unavailable.
pub fn resolve_destination(input: &str) -> Result<PathBuf, SkeletonError> {
    if !input.is_empty() {
        return Ok(PathBuf::from(input));
    }

    let cwd = std::env::current_dir()
        .map_err(|error| IoError::new(FileOperation::Resolve, PathBuf::from("."), error))?;

    Ok(cwd.join(DEFAULT_PROJECT_NAME))
}

/// Creates the Next.js skeleton under `destination` and returns its absolute path.
///
/// The returned path has `.` and `..` collapsed lexically; symlinks are left unresolved.
///
/// # Errors
///
/// Returns a [`SkeletonError`] if:
///
/// - The destination cannot be resolved.
/// - A directory or file cannot be created. Entries created before the failure are kept.
pub fn create_project(destination: &str) -> Result<PathBuf, SkeletonError> {
    let base = resolve_destination(destination)?;

    log::debug!("building project skeleton at: {}", base.display());

    let mut scaffolder = Scaffolder::new();
    scaffolder.build_project_skeleton(&base)?;

    let absolute = std::path::absolute(&base)
        .map(|path| normalize_path(&path))
        .map_err(|error| IoError::new(FileOperation::Resolve, base.clone(), error))?;

    println!("Project structure created at: {}", absolute.display());

    Ok(absolute)
}

/// Prompts for the base path, then behaves like [`create_project`].
///
/// # Errors
///
/// Returns a [`SkeletonError`] if the prompt fails or the skeleton cannot be created.
pub fn create_project_interactively() -> Result<PathBuf, SkeletonError> {
    let destination = prompt::get_destination()?;

    create_project(&destination)
}

/// Prints the tree that [`create_project`] would build, without touching the filesystem.
pub fn preview_project(destination: &str) -> Result<(), SkeletonError> {
    let base = resolve_destination(destination)?;

    let vfs = VirtualFS::from_layout(NEXT_APP_LAYOUT);

    preview_as_tree(&vfs, &base);

    Ok(())
}
