//! Directory hierarchies as a tree source

mod options;
mod tree;

pub use options::{DirOptions, SortOrder};
pub use tree::DirTree;
