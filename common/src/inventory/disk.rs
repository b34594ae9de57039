use std::fmt::{self, Display, Write};

use crate::tree::{self, Branch, RenderTree};

/// Storage technology of a [`Disk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskKind {
    Magnetic,
    SolidState,
}

impl Display for DiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskKind::Magnetic => f.write_str("HDD"),
            DiskKind::SolidState => f.write_str("SSD"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub size_gib: i32,
    pub label: String,
}

impl Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} GiB, {}", self.size_gib, self.label)
    }
}

/// A storage device with an ordered partition table.
///
/// Partitions can be appended at any time; once the disk is handed to a
/// [`crate::inventory::Host`] only the host's stored copy is affected by
/// further appends made through the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    kind: DiskKind,
    size_gib: i32,
    partitions: Vec<Partition>,
}

impl Disk {
    pub fn new(kind: DiskKind, size_gib: i32) -> Self {
        Self {
            kind,
            size_gib,
            partitions: Vec::new(),
        }
    }

    pub fn magnetic(size_gib: i32) -> Self {
        Self::new(DiskKind::Magnetic, size_gib)
    }

    pub fn solid_state(size_gib: i32) -> Self {
        Self::new(DiskKind::SolidState, size_gib)
    }

    pub fn add_partition(&mut self, size_gib: i32, label: impl Into<String>) -> &mut Self {
        self.partitions.push(Partition {
            size_gib,
            label: label.into(),
        });
        self
    }

    /// By-value twin of [`Disk::add_partition`] for building temporaries.
    pub fn with_partition(mut self, size_gib: i32, label: impl Into<String>) -> Self {
        self.add_partition(size_gib, label);
        self
    }

    pub fn kind(&self) -> DiskKind {
        self.kind
    }

    pub fn size_gib(&self) -> i32 {
        self.size_gib
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// One-line description, e.g. `HDD, 1500 GiB`.
    pub fn summary(&self) -> String {
        format!("{}, {} GiB", self.kind, self.size_gib)
    }
}

impl RenderTree for Disk {
    fn render_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        branch: Option<Branch>,
    ) -> fmt::Result {
        tree::write_line(out, prefix, branch, self.summary())?;

        let child_prefix: String = tree::child_prefix(prefix, branch);
        let len: usize = self.partitions.len();
        for (idx, partition) in self.partitions.iter().enumerate() {
            let text: String = format!("[{idx}]: {partition}");
            tree::write_line(out, &child_prefix, Some(Branch::for_position(idx, len)), text)?;
        }
        Ok(())
    }
}

impl Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_tree(f, "", None)
    }
}
