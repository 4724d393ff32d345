#[allow(clippy::module_inception)]
mod output;
mod scrollback;

pub use output::*;
pub use scrollback::*;
