pub mod api;
pub mod errors;
pub mod layout;
pub mod preview;
pub mod prompt;
pub mod scaffold;
pub mod utils;
pub mod vfs;

pub use api::{
    create_project, create_project_interactively, preview_project, resolve_destination,
    SkeletonError,
};
pub use scaffold::{Creation, ScaffoldError, Scaffolder};
