//! Console walkthroughs, one per pattern

mod errors;
mod runner;

pub use errors::DemoError;
pub use runner::{Demo, run_demo};
