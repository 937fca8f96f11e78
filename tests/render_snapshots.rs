//! Snapshot tests for tree rendering.
//!
//! Inline snapshots pin the exact glyph layout. Any visual change requires
//! explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use printtree::commands::demo::demo_tree;
use printtree::{render, render_node, Node};

#[test]
fn test_three_levels_snapshot() {
    let root = Node::new("root").with_children([
        Node::new("child1").with_children([Node::new("grandchild1"), Node::new("grandchild2")]),
        Node::new("child2"),
    ]);

    assert_snapshot!(render_node(&root), @r"
#### root
       #
       #
       #
       #
       ##### child1
       #   #
       #   #
       #   #
       #   #
       #   ##### grandchild1
       #   #
       #   #
       #   #
       #   #
       #   ##### grandchild2
       #
       #
       #
       #
       ##### child2
");
}

#[test]
fn test_demo_tree_snapshot() {
    assert_snapshot!(render_node(&demo_tree()), @r"
#### root
       #
       #
       #
       #
       ##### child1
           #
           #
           #
           #
           ##### child1.1
           #   #
           #   #
           #   #
           #   #
           #   ##### child1.1.1
           #   #
           #   #
           #   #
           #   #
           #   ##### child1.1.2
           #
           #
           #
           #
           ##### child1.2
               #
               #
               #
               #
               ##### child1.2.1
               #
               #
               #
               #
               ##### child1.2.2
");
}

#[test]
fn test_single_node_snapshot() {
    let output = render(
        "root",
        |_| Vec::<&str>::new(),
        |label| label.to_string(),
    );
    assert_snapshot!(output, @"#### root");
}
