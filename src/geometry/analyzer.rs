use crate::node::node_model::{AccessibilityNode, Point, Rect};
use crate::query::search::MAX_TREE_DEPTH;

// ============================================================================
// Ancestor path and depth
// ============================================================================

/// Slash-separated path from the root down to `node`.
///
/// Each level is rendered as `Class[@id='x']` when the node has a resource
/// id, `Class[@text='y']` when it has text, or the bare class name.
pub fn element_path<N: AccessibilityNode>(node: &N) -> String {
    let mut segments = vec![path_segment(node)];

    let mut current = node.parent();
    while let Some(ancestor) = current {
        if segments.len() > MAX_TREE_DEPTH {
            tracing::warn!("parent chain exceeds depth bound, path truncated");
            ancestor.release();
            break;
        }
        segments.push(path_segment(&ancestor));
        current = ancestor.parent();
        ancestor.release();
    }

    segments.reverse();
    segments.join("/")
}

fn path_segment<N: AccessibilityNode>(node: &N) -> String {
    let class_name = node.class_name().unwrap_or("Unknown");

    match (node.view_id(), node.text()) {
        (Some(id), _) if !id.is_empty() => format!("{class_name}[@id='{id}']"),
        (_, Some(text)) if !text.is_empty() => format!("{class_name}[@text='{text}']"),
        _ => class_name.to_string(),
    }
}

/// Number of parent hops from `node` to the root.
pub fn element_depth<N: AccessibilityNode>(node: &N) -> usize {
    let mut depth = 0;

    let mut current = node.parent();
    while let Some(ancestor) = current {
        depth += 1;
        if depth > MAX_TREE_DEPTH {
            tracing::warn!("parent chain exceeds depth bound, depth clamped");
            ancestor.release();
            return MAX_TREE_DEPTH;
        }
        current = ancestor.parent();
        ancestor.release();
    }

    depth
}

// ============================================================================
// Screen geometry
// ============================================================================

/// A node is visible when it has a positive area and the host says the
/// user can see it.
pub fn is_element_visible<N: AccessibilityNode>(node: &N) -> bool {
    if node.bounds().is_degenerate() {
        return false;
    }
    node.is_visible_to_user()
}

pub fn element_bounds<N: AccessibilityNode>(node: &N) -> Rect {
    node.bounds()
}

pub fn element_center<N: AccessibilityNode>(node: &N) -> Point {
    node.bounds().center()
}
