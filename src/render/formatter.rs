use std::convert::Infallible;
use std::io::{self, Write};

use super::layout::{AncestorPath, LABEL_MARKER, PADDING_LINES};
use crate::error::{BoxError, Result, TreeError};

/// A node waiting on the work stack
struct Frame<N> {
    node: N,
    depth: usize,
    has_right_sibling: bool,
}

/// Walk the tree in pre-order and hand every output line to `emit`.
///
/// The traversal uses an explicit stack, so tree depth is bounded by memory
/// rather than by the call stack. Each node's children are requested exactly
/// once, and last-child status is decided by position within that one answer.
///
/// Returns the number of nodes rendered.
pub(crate) fn walk<N, I, E, C, L, F>(
    root: N,
    mut children: C,
    mut label: L,
    mut emit: F,
) -> std::result::Result<usize, E>
where
    I: IntoIterator<Item = N>,
    C: FnMut(&N) -> std::result::Result<I, E>,
    L: FnMut(&N) -> std::result::Result<String, E>,
    F: FnMut(&str) -> std::result::Result<(), E>,
{
    let mut path = AncestorPath::new();
    let mut stack = vec![Frame {
        node: root,
        depth: 0,
        has_right_sibling: false,
    }];
    let mut rendered = 0;

    while let Some(Frame {
        node,
        depth,
        has_right_sibling,
    }) = stack.pop()
    {
        path.truncate(depth);

        if depth == 0 {
            let text = label(&node)?;
            emit(&format!("{LABEL_MARKER}{text}"))?;
        } else {
            let prefix = path.line_prefix();
            for _ in 0..PADDING_LINES {
                emit(&prefix)?;
            }
            let text = label(&node)?;
            emit(&format!("{prefix}{LABEL_MARKER}{text}"))?;
        }
        rendered += 1;

        let kids: Vec<N> = children(&node)?.into_iter().collect();
        let Some(last) = kids.len().checked_sub(1) else {
            continue;
        };

        path.push(has_right_sibling);
        let child_depth = path.depth();
        // Pushed in reverse so the first child is popped next
        for (index, child) in kids.into_iter().enumerate().rev() {
            stack.push(Frame {
                node: child,
                depth: child_depth,
                has_right_sibling: index != last,
            });
        }
    }

    Ok(rendered)
}

pub(crate) fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

pub(crate) fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

fn require_root<N>(root: Option<N>) -> Result<N> {
    root.ok_or_else(|| TreeError::InvalidArgument("root node is absent".to_string()))
}

/// Render a tree into a string, one line per `\n`, including a trailing newline.
///
/// `children` must answer with the same ordered sequence for a node for the
/// whole call. Labels are emitted verbatim.
///
/// ```
/// let output = printtree::render(
///     ("root", 1),
///     |&(_, n)| if n > 0 { vec![("leaf", 0)] } else { vec![] },
///     |&(name, _)| name.to_string(),
/// );
/// assert!(output.starts_with("#### root\n"));
/// assert!(output.ends_with("       ##### leaf\n"));
/// ```
pub fn render<N, I, C, L>(root: N, mut children: C, mut label: L) -> String
where
    I: IntoIterator<Item = N>,
    C: FnMut(&N) -> I,
    L: FnMut(&N) -> String,
{
    let mut output = String::new();
    let result: std::result::Result<usize, Infallible> = walk(
        root,
        |node| Ok(children(node)),
        |node| Ok(label(node)),
        |line| {
            push_line(&mut output, line);
            Ok(())
        },
    );
    let nodes = match result {
        Ok(nodes) => nodes,
        Err(never) => match never {},
    };

    tracing::debug!(nodes, bytes = output.len(), "Rendered tree");
    output
}

/// Render a tree whose accessors can fail.
///
/// An absent root is an [`TreeError::InvalidArgument`]. The first accessor
/// failure aborts the render as [`TreeError::Accessor`]; no partial output is
/// returned.
pub fn try_render<N, I, E, C, L>(root: Option<N>, mut children: C, mut label: L) -> Result<String>
where
    I: IntoIterator<Item = N>,
    E: Into<BoxError>,
    C: FnMut(&N) -> std::result::Result<I, E>,
    L: FnMut(&N) -> std::result::Result<String, E>,
{
    let root = require_root(root)?;
    let mut output = String::new();
    let nodes = walk(
        root,
        |node| children(node).map_err(TreeError::accessor),
        |node| label(node).map_err(TreeError::accessor),
        |line| {
            push_line(&mut output, line);
            Ok(())
        },
    )?;

    tracing::debug!(nodes, bytes = output.len(), "Rendered tree");
    Ok(output)
}

/// Stream a tree to `out` line by line.
///
/// Lines already written stay written when a later accessor or write fails.
pub fn write_tree<W, N, I, E, C, L>(
    out: &mut W,
    root: Option<N>,
    mut children: C,
    mut label: L,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = N>,
    E: Into<BoxError>,
    C: FnMut(&N) -> std::result::Result<I, E>,
    L: FnMut(&N) -> std::result::Result<String, E>,
{
    let root = require_root(root)?;
    let nodes = walk(
        root,
        |node| children(node).map_err(TreeError::accessor),
        |node| label(node).map_err(TreeError::accessor),
        |line| write_line(out, line).map_err(TreeError::Write),
    )?;
    out.flush()?;

    tracing::debug!(nodes, "Wrote tree");
    Ok(())
}

/// Print a tree to standard output.
pub fn print<N, I, C, L>(root: N, mut children: C, mut label: L) -> Result<()>
where
    I: IntoIterator<Item = N>,
    C: FnMut(&N) -> I,
    L: FnMut(&N) -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(
        &mut out,
        Some(root),
        |node| Ok::<_, Infallible>(children(node)),
        |node| Ok(label(node)),
    )
}
