use std::borrow::Cow;

use super::formatter::{print, render};
use crate::error::Result;

/// A tree node that knows its own label and children.
///
/// Implementing this trait is an alternative to passing accessor closures to
/// [`render`](super::render).
pub trait TreeNode: Sized {
    /// Text shown on the node's label line
    fn label(&self) -> Cow<'_, str>;

    /// Ordered children, empty for a leaf
    fn children(&self) -> &[Self];
}

/// Render any [`TreeNode`] tree into a string.
pub fn render_node<T: TreeNode>(root: &T) -> String {
    render(
        root,
        |node| T::children(*node).iter(),
        |node| T::label(*node).into_owned(),
    )
}

/// Print any [`TreeNode`] tree to standard output.
pub fn print_node<T: TreeNode>(root: &T) -> Result<()> {
    print(
        root,
        |node| T::children(*node).iter(),
        |node| T::label(*node).into_owned(),
    )
}

/// Owned label-and-children tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

impl TreeNode for Node {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Borrowed-label node, to exercise the trait outside `Node`
    struct Category {
        name: &'static str,
        id: u32,
        subcategories: Vec<Category>,
    }

    impl TreeNode for Category {
        fn label(&self) -> Cow<'_, str> {
            Cow::Owned(format!("{} #{}", self.name, self.id))
        }

        fn children(&self) -> &[Self] {
            &self.subcategories
        }
    }

    #[test]
    fn test_node_builder() {
        let root = Node::new("root")
            .with_child(Node::new("a"))
            .with_children([Node::new("b"), Node::new("c").with_child(Node::new("d"))]);

        assert_eq!(root.children.len(), 3);
        assert!(!root.is_leaf());
        assert!(root.children[0].is_leaf());
        assert_eq!(root.node_count(), 5);
    }

    #[test]
    fn test_render_node_matches_closures() {
        let root = Node::new("root").with_children([Node::new("child1"), Node::new("child2")]);
        let via_closures = render(&root, |node| node.children.iter(), |node| node.label.clone());

        assert_eq!(render_node(&root), via_closures);
    }

    #[test]
    fn test_render_custom_tree_node() {
        let root = Category {
            name: "tools",
            id: 1,
            subcategories: vec![Category {
                name: "hammers",
                id: 7,
                subcategories: vec![],
            }],
        };
        let output = render_node(&root);

        assert!(output.starts_with("#### tools #1\n"));
        assert!(output.ends_with("       ##### hammers #7\n"));
    }
}
