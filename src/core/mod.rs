// Public modules
pub mod command;
pub mod defaults;
pub mod error;
pub mod files;
pub mod manifest;
pub mod prompt;
pub mod scaffold;
pub mod scripts;
pub mod slugify;
pub mod template;
pub mod uv;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use scaffold::{generate, ProjectSpec, ScaffoldOutput};
