//! # Inventory Model
//!
//! Value types describing a network, its hosts and their hardware.
//!
//! * **[`Network`]**: ordered hosts plus a name index into them.
//! * **[`Host`]**: addresses and owned [`Component`]s.
//! * **[`Component`]**: [`Cpu`], [`Memory`] or [`Disk`].
//!
//! Every type owns its children outright. `clone()` anywhere in the
//! hierarchy produces a fully independent copy.

pub mod component;
pub mod disk;
pub mod host;
pub mod network;

pub use component::{Component, Cpu, Memory};
pub use disk::{Disk, DiskKind, Partition};
pub use host::Host;
pub use network::Network;
