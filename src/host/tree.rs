use crate::actions::action_model::NodeAction;
use crate::host::dump::RawNode;
use crate::node::node_model::{AccessibilityNode, Rect};

// ============================================================================
// NodeTree — arena over a captured tree, with parent links
// ============================================================================

#[derive(Debug)]
struct TreeEntry {
    /// Node fields; `children` is emptied when the entry is built.
    node: RawNode,
    parent: Option<usize>,
    children: Vec<Option<usize>>,
}

/// In-memory host tree. Index 0 is the root.
#[derive(Debug)]
pub struct NodeTree {
    entries: Vec<TreeEntry>,
}

impl NodeTree {
    pub fn from_root(root: RawNode) -> Self {
        let mut tree = NodeTree { entries: vec![] };
        // (node, parent index and position in the parent's child list)
        let mut pending = vec![(root, None::<(usize, usize)>)];

        while let Some((mut node, slot)) = pending.pop() {
            let index = tree.entries.len();
            let raw_children = std::mem::take(&mut node.children);

            if let Some((parent, position)) = slot {
                tree.entries[parent].children[position] = Some(index);
            }

            tree.entries.push(TreeEntry {
                node,
                parent: slot.map(|(parent, _)| parent),
                children: vec![None; raw_children.len()],
            });

            for (position, child) in raw_children.into_iter().enumerate().rev() {
                if let Some(child) = child {
                    pending.push((child, Some((index, position))));
                }
            }
        }

        tree
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// NodeRef — handle into a NodeTree
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a NodeTree,
    index: usize,
}

impl<'a> NodeRef<'a> {
    /// Arena index; pre-order position of the node in the captured tree.
    pub fn index(&self) -> usize {
        self.index
    }

    fn entry(&self) -> &'a TreeEntry {
        &self.tree.entries[self.index]
    }

    fn at(&self, index: usize) -> NodeRef<'a> {
        NodeRef {
            tree: self.tree,
            index,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

impl AccessibilityNode for NodeRef<'_> {
    fn class_name(&self) -> Option<&str> {
        self.entry().node.class_name.as_deref()
    }

    fn text(&self) -> Option<&str> {
        self.entry().node.text.as_deref()
    }

    fn content_description(&self) -> Option<&str> {
        self.entry().node.content_description.as_deref()
    }

    fn view_id(&self) -> Option<&str> {
        self.entry().node.view_id.as_deref()
    }

    fn package_name(&self) -> Option<&str> {
        self.entry().node.package_name.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.entry().node.bounds
    }

    fn is_clickable(&self) -> bool {
        self.entry().node.clickable
    }

    fn is_focusable(&self) -> bool {
        self.entry().node.focusable
    }

    fn is_enabled(&self) -> bool {
        self.entry().node.enabled
    }

    fn is_visible_to_user(&self) -> bool {
        self.entry().node.visible_to_user
    }

    fn is_checkable(&self) -> bool {
        self.entry().node.checkable
    }

    fn is_checked(&self) -> bool {
        self.entry().node.checked
    }

    fn is_scrollable(&self) -> bool {
        self.entry().node.scrollable
    }

    fn is_long_clickable(&self) -> bool {
        self.entry().node.long_clickable
    }

    fn is_password(&self) -> bool {
        self.entry().node.password
    }

    fn is_selected(&self) -> bool {
        self.entry().node.selected
    }

    fn actions(&self) -> Vec<NodeAction> {
        self.entry().node.actions.clone()
    }

    fn child_count(&self) -> usize {
        self.entry().children.len()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.entry()
            .children
            .get(index)
            .copied()
            .flatten()
            .map(|child| self.at(child))
    }

    fn parent(&self) -> Option<Self> {
        self.entry().parent.map(|parent| self.at(parent))
    }
}
