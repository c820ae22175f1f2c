//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and performs the operation.

pub mod check;
pub mod config;
pub mod run;

// Re-export execute functions for convenience
pub use check::execute as check;
pub use config::execute as config;
pub use run::execute as run;
