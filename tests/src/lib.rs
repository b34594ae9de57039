//! Cross-crate checks of the inventory model against the sample data.

pub mod util;
