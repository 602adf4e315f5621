//! CLI command handlers, one per file.

mod check;
mod features;
mod interactive;
mod train;

pub use check::run_check;
pub use features::run_features;
pub use interactive::run_interactive;
pub use train::run_train;
