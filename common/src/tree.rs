//! # Tree Drawing
//!
//! Primitives shared by every inventory item that prints itself as part of
//! the ASCII tree.
//!
//! A line is always `prefix + glyph + text`:
//! * **prefix**: accumulated indentation of all ancestors, two characters per
//!   level (`"| "` below a non-final ancestor, `"  "` below a final one).
//! * **glyph**: `"+-"` for a non-final sibling, `"\-"` for the final one, or
//!   nothing for a root that is rendered on its own.

use std::fmt::{self, Display, Write};

pub const MIDDLE_GLYPH: &str = "+-";
pub const LAST_GLYPH: &str = "\\-";
pub const PIPE_INDENT: &str = "| ";
pub const BLANK_INDENT: &str = "  ";

/// Position of a node among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Middle,
    Last,
}

impl Branch {
    /// Branch for the element at `idx` in a list of `len` siblings.
    pub fn for_position(idx: usize, len: usize) -> Self {
        if idx + 1 == len {
            Branch::Last
        } else {
            Branch::Middle
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Branch::Middle => MIDDLE_GLYPH,
            Branch::Last => LAST_GLYPH,
        }
    }

    /// Indentation this branch contributes to its children's prefix.
    pub fn indent(self) -> &'static str {
        match self {
            Branch::Middle => PIPE_INDENT,
            Branch::Last => BLANK_INDENT,
        }
    }
}

/// Writes one newline-terminated tree line.
pub fn write_line<W, T>(out: &mut W, prefix: &str, branch: Option<Branch>, text: T) -> fmt::Result
where
    W: Write + ?Sized,
    T: Display,
{
    let glyph: &str = branch.map(Branch::glyph).unwrap_or("");
    writeln!(out, "{prefix}{glyph}{text}")
}

/// Prefix for the children of a node drawn at `prefix` with `branch`.
pub fn child_prefix(prefix: &str, branch: Option<Branch>) -> String {
    let indent: &str = branch.map(Branch::indent).unwrap_or("");
    format!("{prefix}{indent}")
}

/// Anything that can draw itself (and its subtree) into a tree diagram.
pub trait RenderTree {
    /// Draws this node at `prefix` using `branch`, then its children.
    fn render_tree<W: Write + ?Sized>(
        &self,
        out: &mut W,
        prefix: &str,
        branch: Option<Branch>,
    ) -> fmt::Result;

    /// Renders the node as a root into a fresh string.
    fn to_tree_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_tree(&mut out, "", None);
        out
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
