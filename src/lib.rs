//! printtree - Render any tree as an indented ASCII diagram
//!
//! This crate provides functionality for:
//! - Rendering caller-owned trees through two accessors (children, label)
//! - Streaming the same rendering to any writer or standard output
//! - Rendering directory hierarchies from the filesystem

pub mod cli;
pub mod commands;
pub mod config;
pub mod dirtree;
pub mod error;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use render::{
    print, print_node, render, render_node, try_render, write_tree, Node, TreeNode,
};
