//! Demo command implementation

use crate::error::Result;
use crate::render::{print_node, Node};

/// The example tree printed by `printtree demo`
pub fn demo_tree() -> Node {
    Node::new("root").with_child(Node::new("child1").with_children([
        Node::new("child1.1")
            .with_children([Node::new("child1.1.1"), Node::new("child1.1.2")]),
        Node::new("child1.2")
            .with_children([Node::new("child1.2.1"), Node::new("child1.2.2")]),
    ]))
}

/// Run the demo command
pub fn run() -> Result<()> {
    let tree = demo_tree();
    tracing::info!(nodes = tree.node_count(), "Printing demo tree");
    super::ignore_broken_pipe(print_node(&tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_node;

    #[test]
    fn test_demo_tree_shape() {
        let tree = demo_tree();
        assert_eq!(tree.node_count(), 8);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].children.len(), 2);
    }

    #[test]
    fn test_demo_tree_rendering() {
        let output = render_node(&demo_tree());

        assert!(output.starts_with("#### root\n"));
        // child1.1 has a right sibling, so its children keep the column open
        assert!(output.contains("\n           #   ##### child1.1.1\n"));
        assert!(output.contains("\n               ##### child1.2.2\n"));
    }
}
