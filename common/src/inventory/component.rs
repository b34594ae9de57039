use std::fmt::{self, Display, Write};

use crate::inventory::disk::Disk;
use crate::tree::{self, Branch, RenderTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    pub cores: i32,
    pub frequency_mhz: i32,
}

impl Cpu {
    pub fn new(cores: i32, frequency_mhz: i32) -> Self {
        Self {
            cores,
            frequency_mhz,
        }
    }
}

impl Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPU, {} cores @ {}MHz", self.cores, self.frequency_mhz)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory {
    pub size_mib: i32,
}

impl Memory {
    pub fn new(size_mib: i32) -> Self {
        Self { size_mib }
    }
}

impl Display for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory, {} MiB", self.size_mib)
    }
}

/// A piece of hardware owned by a host.
///
/// The set of kinds is closed, so a plain enum carries them; cloning a
/// `Component` always yields an independent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Disk(Disk),
}

impl Component {
    pub fn as_disk(&self) -> Option<&Disk> {
        match self {
            Component::Disk(disk) => Some(disk),
            _ => None,
        }
    }

    pub fn as_disk_mut(&mut self) -> Option<&mut Disk> {
        match self {
            Component::Disk(disk) => Some(disk),
            _ => None,
        }
    }
}

impl RenderTree for Component {
    fn render_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        branch: Option<Branch>,
    ) -> fmt::Result {
        match self {
            Component::Cpu(cpu) => tree::write_line(out, prefix, branch, cpu),
            Component::Memory(memory) => tree::write_line(out, prefix, branch, memory),
            Component::Disk(disk) => disk.render_tree(out, prefix, branch),
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_tree(f, "", None)
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Disk> for Component {
    fn from(disk: Disk) -> Self {
        Component::Disk(disk)
    }
}

impl From<&Cpu> for Component {
    fn from(cpu: &Cpu) -> Self {
        Component::Cpu(*cpu)
    }
}

impl From<&Memory> for Component {
    fn from(memory: &Memory) -> Self {
        Component::Memory(*memory)
    }
}

impl From<&Disk> for Component {
    fn from(disk: &Disk) -> Self {
        Component::Disk(disk.clone())
    }
}
