#[allow(clippy::module_inception)]
mod completer;
mod keys;

pub use completer::*;
pub use keys::*;
