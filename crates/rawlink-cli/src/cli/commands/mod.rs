//! CLI command handlers.

mod convert;
mod interactive;

pub use convert::run_convert;
pub use interactive::run_interactive;
