use serde::{Deserialize, Serialize};

use crate::actions::action_model::NodeAction;

// ============================================================================
// Screen geometry
// ============================================================================

/// Screen-space rectangle of a node, exactly as reported by the host.
///
/// No clipping or validation is applied: a rectangle may be degenerate
/// (zero or negative width/height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Floor of the horizontal midpoint.
    pub fn center_x(&self) -> i32 {
        midpoint(self.left, self.right)
    }

    /// Floor of the vertical midpoint.
    pub fn center_y(&self) -> i32 {
        midpoint(self.top, self.bottom)
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    /// True when width or height is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) >> 1) as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

// ============================================================================
// AccessibilityNode trait — read-only view of a host-owned node
// ============================================================================

/// Read-only capability surface over one node of a host accessibility tree.
///
/// Implementors are short-lived handles into a tree the host owns. Handles
/// obtained through [`child`](Self::child) or [`parent`](Self::parent) must be
/// given back with [`release`](Self::release) once the caller is done with
/// them. Traversals in this crate release every handle they obtain; nodes
/// they return to the caller are fresh clones the caller then owns.
pub trait AccessibilityNode: Clone {
    fn class_name(&self) -> Option<&str>;
    fn text(&self) -> Option<&str>;
    fn content_description(&self) -> Option<&str>;
    fn view_id(&self) -> Option<&str>;

    /// Identifier of the application that owns the window.
    fn package_name(&self) -> Option<&str>;

    fn bounds(&self) -> Rect;

    fn is_clickable(&self) -> bool;
    fn is_focusable(&self) -> bool;
    fn is_enabled(&self) -> bool;
    fn is_visible_to_user(&self) -> bool;
    fn is_checkable(&self) -> bool;
    fn is_checked(&self) -> bool;
    fn is_scrollable(&self) -> bool;
    fn is_long_clickable(&self) -> bool;
    fn is_password(&self) -> bool;
    fn is_selected(&self) -> bool;

    /// Actions the node exposes, in the host's declared order.
    fn actions(&self) -> Vec<NodeAction>;

    fn child_count(&self) -> usize;

    /// `None` when the host cannot produce the child (stale or invalid).
    fn child(&self, index: usize) -> Option<Self>;

    fn parent(&self) -> Option<Self>;

    /// Hand the handle back to the host.
    fn release(self) {}
}
