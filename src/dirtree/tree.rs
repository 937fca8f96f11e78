use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::options::{DirOptions, SortOrder};
use crate::error::{Result, TreeError};
use crate::render::{push_line, walk, write_line};

/// One file or directory on the way through the hierarchy
#[derive(Debug, Clone)]
struct DirNode {
    path: PathBuf,
    name: String,
    is_dir: bool,
    size: u64,
    depth: usize,
    /// Canonical paths from the root down to this directory (symlink mode only)
    lineage: Vec<PathBuf>,
    /// False for a directory already open higher up the same branch
    expandable: bool,
}

/// Renders a directory hierarchy, listing each directory only when the
/// renderer reaches it.
#[derive(Debug, Clone)]
pub struct DirTree {
    root: PathBuf,
    options: DirOptions,
}

impl DirTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: DirOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DirOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the whole hierarchy into a string
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        self.walk_with(|line| {
            push_line(&mut output, line);
            Ok(())
        })?;
        Ok(output)
    }

    /// Stream the hierarchy to `out`, one line at a time
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        self.walk_with(|line| write_line(out, line).map_err(TreeError::Write))?;
        out.flush()?;
        Ok(())
    }

    fn walk_with<F>(&self, emit: F) -> Result<usize>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let root = self.root_node()?;
        let nodes = walk(
            root,
            |node| self.list_children(node),
            |node| Ok(self.label(node)),
            emit,
        )?;

        tracing::debug!(root = %self.root.display(), nodes, "Rendered directory tree");
        Ok(nodes)
    }

    fn root_node(&self) -> Result<DirNode> {
        let metadata = fs::metadata(&self.root).map_err(|source| TreeError::Io {
            path: self.root.clone(),
            source,
        })?;
        let lineage = if self.options.follow_symlinks && metadata.is_dir() {
            vec![canonical(&self.root)?]
        } else {
            Vec::new()
        };

        Ok(DirNode {
            path: self.root.clone(),
            name: self.root.display().to_string(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            depth: 0,
            lineage,
            expandable: true,
        })
    }

    fn list_children(&self, node: &DirNode) -> Result<Vec<DirNode>> {
        if !node.is_dir || !node.expandable || !self.options.expands(node.depth) {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&node.path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.options.follow_symlinks);

        let mut children = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let Some(path) = dangling_symlink(&node.path, &err).map(Path::to_path_buf)
                    else {
                        return Err(listing_error(&node.path, err));
                    };
                    tracing::debug!(path = %path.display(), "Dangling symlink, not following");
                    if let Some(leaf) = self.dangling_leaf(node, path) {
                        children.push(leaf);
                    }
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.options.show_hidden && name.starts_with('.') {
                continue;
            }

            let is_dir = entry.file_type().is_dir();
            let size = if self.options.show_sizes && !is_dir {
                entry
                    .metadata()
                    .map_err(|err| listing_error(&node.path, err))?
                    .len()
            } else {
                0
            };

            let mut lineage = Vec::new();
            let mut expandable = true;
            if is_dir && self.options.follow_symlinks {
                let resolved = canonical(entry.path())?;
                if node.lineage.contains(&resolved) {
                    tracing::warn!(path = %entry.path().display(), "Directory loop, not descending");
                    expandable = false;
                }
                lineage = node.lineage.clone();
                lineage.push(resolved);
            }

            children.push(DirNode {
                path: entry.into_path(),
                name,
                is_dir,
                size,
                depth: node.depth + 1,
                lineage,
                expandable,
            });
        }

        match self.options.sort {
            SortOrder::Name => children.sort_by(by_name),
            SortOrder::DirsFirst => children.sort_by(dirs_first),
        }

        tracing::trace!(path = %node.path.display(), entries = children.len(), "Listed directory");
        Ok(children)
    }

    /// Leaf for a symlink whose target is missing, unless it is hidden
    fn dangling_leaf(&self, parent: &DirNode, path: PathBuf) -> Option<DirNode> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        if !self.options.show_hidden && name.starts_with('.') {
            return None;
        }

        Some(DirNode {
            path,
            name,
            is_dir: false,
            size: 0,
            depth: parent.depth + 1,
            lineage: Vec::new(),
            expandable: false,
        })
    }

    fn label(&self, node: &DirNode) -> String {
        let mut label = node.name.clone();
        if node.is_dir {
            if !label.ends_with('/') {
                label.push('/');
            }
        } else if self.options.show_sizes {
            label.push_str(&format!(
                " ({})",
                humansize::format_size(node.size, humansize::BINARY)
            ));
        }
        label
    }
}

fn by_name(a: &DirNode, b: &DirNode) -> Ordering {
    a.path.file_name().cmp(&b.path.file_name())
}

fn dirs_first(a: &DirNode, b: &DirNode) -> Ordering {
    b.is_dir.cmp(&a.is_dir).then_with(|| by_name(a, b))
}

/// Path of an entry that only failed because its symlink target is missing.
///
/// Failures to read the directory itself are not dangling links.
fn dangling_symlink<'a>(dir: &Path, err: &'a walkdir::Error) -> Option<&'a Path> {
    let path = err.path()?;
    let not_found = err
        .io_error()
        .map_or(false, |io| io.kind() == io::ErrorKind::NotFound);
    let is_link = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);

    (not_found && is_link && path != dir).then_some(path)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn listing_error(dir: &Path, err: walkdir::Error) -> TreeError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    tracing::warn!(path = %path.display(), error = %err, "Failed to list directory");
    TreeError::Io {
        path,
        source: err.into(),
    }
}
