use serde::Serialize;

use crate::node::node_model::Rect;

/// `yyyy-MM-dd HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Document — one complete snapshot of a tree
// ============================================================================

/// Immutable result of one snapshot: page metadata, the element hierarchy
/// and whole-tree statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub page_info: PageInfo,
    pub hierarchy: Element,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Formatted with [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
    pub package_name: String,
    pub class_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_elements: usize,
    pub clickable_elements: usize,
    pub text_elements: usize,
}

// ============================================================================
// Element — sparse representation of one node
// ============================================================================

/// One serialized node. Every attribute is present only when it carries
/// information: strings when non-empty, flags when `true`, except
/// `enabled` and `visible` which are recorded only when `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_id: Option<String>,

    #[serde(flatten)]
    pub bounds: Option<ElementBounds>,

    #[serde(skip_serializing_if = "is_false")]
    pub clickable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub focusable: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub checkable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub scrollable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub long_clickable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub password: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,

    /// Names of the meaningful actions, in the node's order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_true(value: &bool) -> bool {
    *value
}

impl Default for Element {
    fn default() -> Self {
        Self {
            class_name: None,
            text: None,
            content_description: None,
            view_id: None,
            bounds: None,
            clickable: false,
            focusable: false,
            enabled: true,
            visible: true,
            checkable: false,
            checked: false,
            scrollable: false,
            long_clickable: false,
            password: false,
            selected: false,
            actions: vec![],
            children: vec![],
        }
    }
}

impl Element {
    /// Present attributes as `(name, value)` pairs in output order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();

        let strings = [
            ("className", &self.class_name),
            ("text", &self.text),
            ("contentDescription", &self.content_description),
            ("viewId", &self.view_id),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                attrs.push((name, value.clone()));
            }
        }

        if let Some(bounds) = &self.bounds {
            attrs.extend(bounds.attributes());
        }

        let raised = [
            ("clickable", self.clickable),
            ("focusable", self.focusable),
        ];
        attrs.extend(raised.iter().filter(|(_, v)| *v).map(|(n, _)| (*n, "true".to_string())));

        let lowered = [("enabled", self.enabled), ("visible", self.visible)];
        attrs.extend(lowered.iter().filter(|(_, v)| !*v).map(|(n, _)| (*n, "false".to_string())));

        let raised = [
            ("checkable", self.checkable),
            ("checked", self.checked),
            ("scrollable", self.scrollable),
            ("longClickable", self.long_clickable),
            ("password", self.password),
            ("selected", self.selected),
        ];
        attrs.extend(raised.iter().filter(|(_, v)| *v).map(|(n, _)| (*n, "true".to_string())));

        attrs
    }

    /// Value of a present attribute, by its output name.
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Number of elements in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Element::subtree_len).sum::<usize>()
    }
}

// ============================================================================
// ElementBounds — the eight bound attributes, present together or not at all
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
    pub center_x: i32,
    pub center_y: i32,
}

impl ElementBounds {
    /// `None` for a degenerate rectangle.
    pub fn from_rect(rect: Rect) -> Option<Self> {
        if rect.is_degenerate() {
            return None;
        }

        Some(Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
            width: rect.width(),
            height: rect.height(),
            center_x: rect.center_x(),
            center_y: rect.center_y(),
        })
    }

    fn attributes(&self) -> [(&'static str, String); 8] {
        [
            ("left", self.left.to_string()),
            ("top", self.top.to_string()),
            ("right", self.right.to_string()),
            ("bottom", self.bottom.to_string()),
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
            ("centerX", self.center_x.to_string()),
            ("centerY", self.center_y.to_string()),
        ]
    }
}
