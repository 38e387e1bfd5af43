//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compile;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compile::{execute_compile, validate_args};
pub use models::CompileArgs;
pub use utils::{display_schema, display_version, validate_report_file};
