use std::fmt::{self, Display, Write};

use crate::inventory::component::Component;
use crate::tree::{self, Branch, RenderTree};

/// A named computer with its addresses and hardware.
///
/// `Host` is a plain value: `clone()` duplicates every owned component, so a
/// copy can be grown independently of the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    name: String,
    addresses: Vec<String>,
    components: Vec<Component>,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addresses: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn add_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.addresses.push(address.into());
        self
    }

    /// Appends a component. References are cloned, so the caller's value
    /// stays detached from the one stored here.
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.add_address(address);
        self
    }

    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.add_component(component);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// In-place access to the stored components.
    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }

    pub fn component_mut(&mut self, idx: usize) -> Option<&mut Component> {
        self.components.get_mut(idx)
    }
}

impl RenderTree for Host {
    fn render_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        branch: Option<Branch>,
    ) -> fmt::Result {
        tree::write_line(out, prefix, branch, format_args!("Host: {}", self.name))?;

        let child_prefix: String = tree::child_prefix(prefix, branch);

        // Addresses never close the list, components always follow them.
        for address in &self.addresses {
            tree::write_line(out, &child_prefix, Some(Branch::Middle), address)?;
        }

        let len: usize = self.components.len();
        for (idx, component) in self.components.iter().enumerate() {
            component.render_tree(out, &child_prefix, Some(Branch::for_position(idx, len)))?;
        }
        Ok(())
    }
}

impl Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_tree(f, "", None)
    }
}
