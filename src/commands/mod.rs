#[allow(clippy::module_inception)]
mod commands;

pub use commands::*;
