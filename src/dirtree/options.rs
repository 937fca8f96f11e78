use serde::{Deserialize, Serialize};

/// Order of entries within one directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// By file name
    #[default]
    Name,
    /// Directories before files, each group by file name
    DirsFirst,
}

/// Configuration options for rendering a directory hierarchy.
#[derive(Debug, Clone, Default)]
pub struct DirOptions {
    /// Include hidden entries (starting with .)
    pub show_hidden: bool,

    /// Deepest level whose directories are expanded (None = unlimited)
    pub max_depth: Option<usize>,

    /// Entry order within a directory
    pub sort: SortOrder,

    /// Append human-readable sizes to file labels
    pub show_sizes: bool,

    /// Follow symbolic links
    pub follow_symlinks: bool,
}

impl DirOptions {
    /// Create a new DirOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to include hidden entries
    pub fn with_hidden(mut self, include: bool) -> Self {
        self.show_hidden = include;
        self
    }

    /// Set maximum depth
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set entry order
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set whether to show file sizes
    pub fn with_sizes(mut self, show: bool) -> Self {
        self.show_sizes = show;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Whether a directory at `depth` should list its entries
    pub fn expands(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DirOptions::default();
        assert!(!opts.show_hidden);
        assert_eq!(opts.max_depth, None);
        assert_eq!(opts.sort, SortOrder::Name);
        assert!(!opts.show_sizes);
        assert!(!opts.follow_symlinks);
    }

    #[test]
    fn test_dir_options_chaining() {
        let opts = DirOptions::new()
            .with_hidden(true)
            .with_max_depth(Some(2))
            .with_sort(SortOrder::DirsFirst)
            .with_sizes(true)
            .with_follow_symlinks(true);

        assert!(opts.show_hidden);
        assert_eq!(opts.max_depth, Some(2));
        assert_eq!(opts.sort, SortOrder::DirsFirst);
        assert!(opts.show_sizes);
        assert!(opts.follow_symlinks);
    }

    #[test]
    fn test_expands_respects_max_depth() {
        let unlimited = DirOptions::new();
        assert!(unlimited.expands(0));
        assert!(unlimited.expands(1000));

        let limited = DirOptions::new().with_max_depth(Some(2));
        assert!(limited.expands(0));
        assert!(limited.expands(1));
        assert!(!limited.expands(2));
    }

    #[test]
    fn test_sort_order_names() {
        use clap::ValueEnum;

        assert_eq!(SortOrder::from_str("name", true), Ok(SortOrder::Name));
        assert_eq!(SortOrder::from_str("dirs-first", true), Ok(SortOrder::DirsFirst));
        assert!(SortOrder::from_str("mtime", true).is_err());
    }
}
