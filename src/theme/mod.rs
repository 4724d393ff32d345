mod preferences;
#[allow(clippy::module_inception)]
mod theme;

pub use preferences::*;
pub use theme::*;
