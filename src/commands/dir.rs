//! Dir command implementation

use std::io;

use crate::cli::DirArgs;
use crate::config::DirConfig;
use crate::dirtree::{DirOptions, DirTree};
use crate::error::Result;

/// Merge command-line flags over configured defaults
pub fn options_from(args: &DirArgs, config: &DirConfig) -> DirOptions {
    let mut options = DirOptions::from(config);
    if args.all {
        options = options.with_hidden(true);
    }
    if args.max_depth.is_some() {
        options = options.with_max_depth(args.max_depth);
    }
    if let Some(sort) = args.sort {
        options = options.with_sort(sort);
    }
    if args.sizes {
        options = options.with_sizes(true);
    }
    if args.follow_links {
        options = options.with_follow_symlinks(true);
    }
    options
}

/// Run the dir command
pub fn run(args: DirArgs, config: &DirConfig) -> Result<()> {
    let options = options_from(&args, config);
    tracing::info!(path = %args.path.display(), ?options, "Rendering directory");

    let tree = DirTree::new(args.path).with_options(options);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    super::ignore_broken_pipe(tree.write_to(&mut out))
}
