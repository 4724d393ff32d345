#[allow(clippy::module_inception)]
mod preview;

pub use preview::*;
