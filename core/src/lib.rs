//! # hwtree core
//!
//! Ready-made inventory data and the self check built on top of
//! [`hwtree_common`].
//!
//! * **[`sample`]**: the sample network and its expected trees.
//! * **[`scenario`]**: builds, copies, mutates and verifies the sample.

pub mod error;
pub mod sample;
pub mod scenario;

pub use error::ScenarioError;
