//! # hwtree common
//!
//! Inventory model and the ASCII tree renderer shared by the driver and the
//! command line tool.

pub mod config;
pub mod error;
pub mod inventory;
pub mod tree;

pub use error::InventoryError;
pub use tree::RenderTree;
