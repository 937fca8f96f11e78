//! Connector glyphs and the per-line left margin.
//!
//! Every ancestor of a node owns one four-column slot in the node's margin.
//! The slot holds a vertical connector when that ancestor still has a sibling
//! below it, and is blank otherwise. The node's own connector column follows.

/// Ancestor column where the vertical line continues
pub const BRANCH_FRAGMENT: &str = "   #";

/// Ancestor column with nothing left to connect
pub const BLANK_FRAGMENT: &str = "    ";

/// Marker placed between the margin and a node's label
pub const LABEL_MARKER: &str = "#### ";

/// Number of stem lines drawn above every non-root label
pub const PADDING_LINES: usize = 4;

/// "Has a right-hand sibling" flags for each ancestor, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AncestorPath {
    flags: Vec<bool>,
}

impl AncestorPath {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of ancestors currently on the path
    pub(crate) fn depth(&self) -> usize {
        self.flags.len()
    }

    pub(crate) fn push(&mut self, has_right_sibling: bool) {
        self.flags.push(has_right_sibling);
    }

    /// Drop every entry deeper than `depth`.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.flags.truncate(depth);
    }

    /// Left margin for a node whose ancestors are exactly this path.
    pub(crate) fn line_prefix(&self) -> String {
        let mut prefix = String::with_capacity((self.flags.len() + 1) * BRANCH_FRAGMENT.len());
        for &has_right_sibling in &self.flags {
            prefix.push_str(if has_right_sibling {
                BRANCH_FRAGMENT
            } else {
                BLANK_FRAGMENT
            });
        }
        prefix.push_str(BRANCH_FRAGMENT);
        prefix
    }
}
