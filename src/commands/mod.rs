//! Subcommand implementations

use std::io;

use crate::error::{Result, TreeError};

pub mod demo;
pub mod dir;

/// Treat a closed stdout (`printtree demo | head -1`) as a normal exit
pub fn ignore_broken_pipe(result: Result<()>) -> Result<()> {
    match result {
        Err(TreeError::Write(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed early, stopping");
            Ok(())
        }
        other => other,
    }
}
