use std::collections::HashMap;
use std::fmt::{self, Display, Write};

use tracing::{debug, trace};

use crate::error::InventoryError;
use crate::inventory::host::Host;
use crate::tree::{self, Branch, RenderTree};

/// A named collection of hosts.
///
/// Hosts live in one ordered vector (print order). The name index only stores
/// slots into that vector, so a host reached through [`Network::find_mut`] is
/// the very host that gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    name: String,
    hosts: Vec<Host>,
    index: HashMap<String, usize>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hosts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stores a copy of `host`. A host with an already known name replaces
    /// the previous lookup entry but both stay in the printed list.
    pub fn add_host(&mut self, host: &Host) -> &mut Self {
        self.insert(host.clone());
        self
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.insert(host);
        self
    }

    fn insert(&mut self, host: Host) {
        let slot: usize = self.hosts.len();
        let name: String = host.name().to_string();
        self.hosts.push(host);

        if let Some(previous) = self.index.insert(name, slot) {
            debug!(
                network = %self.name,
                host = %self.hosts[slot].name(),
                previous,
                slot,
                "host name already indexed, lookup now points at the newer host"
            );
        } else {
            debug!(network = %self.name, host = %self.hosts[slot].name(), slot, "host added");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Host> {
        match self.index.get(name) {
            Some(&slot) => self.hosts.get(slot),
            None => {
                trace!(network = %self.name, host = name, "host not found");
                None
            }
        }
    }

    /// Mutable handle into the stored host; changes show up in [`Display`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Host> {
        match self.index.get(name) {
            Some(&slot) => self.hosts.get_mut(slot),
            None => {
                trace!(network = %self.name, host = name, "host not found");
                None
            }
        }
    }

    /// Like [`Network::find`], but a miss becomes [`InventoryError::HostNotFound`].
    pub fn require(&self, name: &str) -> Result<&Host, InventoryError> {
        let network: &str = &self.name;
        self.find(name).ok_or_else(|| InventoryError::HostNotFound {
            network: network.to_string(),
            name: name.to_string(),
        })
    }

    pub fn require_mut(&mut self, name: &str) -> Result<&mut Host, InventoryError> {
        let network: String = self.name.clone();
        self.find_mut(name).ok_or_else(|| InventoryError::HostNotFound {
            network,
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hosts in insertion order, duplicates included.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl RenderTree for Network {
    fn render_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        branch: Option<Branch>,
    ) -> fmt::Result {
        tree::write_line(out, prefix, branch, format_args!("Network: {}", self.name))?;

        let child_prefix: String = tree::child_prefix(prefix, branch);
        let len: usize = self.hosts.len();
        for (idx, host) in self.hosts.iter().enumerate() {
            host.render_tree(out, &child_prefix, Some(Branch::for_position(idx, len)))?;
        }
        Ok(())
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_tree(f, "", None)
    }
}
