#[allow(clippy::module_inception)]
mod history;

pub use history::*;
