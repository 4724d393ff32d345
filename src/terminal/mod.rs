#[allow(clippy::module_inception)]
mod terminal;

pub use terminal::*;
