//! CLI commands
//!
//! Command implementations for the `tripflow` binary.

mod dates;
mod progress;
mod submit;
mod style;

pub use dates::run_dates;
pub use submit::{run_submit, run_validate};
