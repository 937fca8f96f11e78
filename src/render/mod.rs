mod formatter;
mod layout;
mod node;

pub(crate) use formatter::{push_line, walk, write_line};
pub use formatter::{print, render, try_render, write_tree};
pub use layout::{BLANK_FRAGMENT, BRANCH_FRAGMENT, LABEL_MARKER, PADDING_LINES};
pub use node::{print_node, render_node, Node, TreeNode};
