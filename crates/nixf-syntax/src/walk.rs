//! Tree traversal.
//! 语法树遍历。

use crate::{Node, NodeRef};
use nixf_common::BytePos;

/// Preorder iterator over a node and everything below it.
///
/// A subtree shared by two parents is yielded once per path that reaches it.
pub struct Descendants<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse so the leftmost child is popped first.
        self.stack.extend(node.children().into_iter().rev());
        Some(node)
    }
}

impl<'a> NodeRef<'a> {
    /// This node followed by all of its descendants, in preorder.
    pub fn descendants(self) -> Descendants<'a> {
        Descendants { stack: vec![self] }
    }
}

/// The innermost node under `root` whose range contains `pos`.
/// 返回 `root` 下范围包含 `pos` 的最内层节点。
pub fn node_at<'a>(root: NodeRef<'a>, pos: BytePos) -> Option<NodeRef<'a>> {
    if !root.range().contains(pos) {
        return None;
    }
    let mut current = root;
    while let Some(child) = current
        .children()
        .into_iter()
        .find(|child| child.range().contains(pos))
    {
        current = child;
    }
    Some(current)
}
