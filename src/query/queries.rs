use crate::node::node_model::AccessibilityNode;
use crate::query::search::{find_all, find_first};
use crate::snapshot::error::SnapshotError;

/// Class-name fragment identifying text input fields.
pub const INPUT_CLASS_MARKER: &str = "EditText";

/// Class-name fragment identifying buttons.
pub const BUTTON_CLASS_MARKER: &str = "Button";

// ============================================================================
// Predicates
// ============================================================================

pub fn is_clickable<N: AccessibilityNode>(node: &N) -> bool {
    node.is_clickable()
}

pub fn has_text<N: AccessibilityNode>(node: &N) -> bool {
    node.text().is_some_and(|t| !t.is_empty())
}

pub fn is_input<N: AccessibilityNode>(node: &N) -> bool {
    node.class_name()
        .is_some_and(|c| c.contains(INPUT_CLASS_MARKER))
}

/// Anything that looks like a button or reacts to a click.
pub fn is_button<N: AccessibilityNode>(node: &N) -> bool {
    node.class_name()
        .is_some_and(|c| c.contains(BUTTON_CLASS_MARKER))
        || node.is_clickable()
}

// ============================================================================
// Lookups
// ============================================================================

pub fn find_clickable_elements<N: AccessibilityNode>(root: &N) -> Vec<N> {
    find_all(root, is_clickable::<N>)
}

pub fn find_text_elements<N: AccessibilityNode>(root: &N) -> Vec<N> {
    find_all(root, has_text::<N>)
}

pub fn find_input_elements<N: AccessibilityNode>(root: &N) -> Vec<N> {
    find_all(root, is_input::<N>)
}

pub fn find_button_elements<N: AccessibilityNode>(root: &N) -> Vec<N> {
    find_all(root, is_button::<N>)
}

/// Exact match on the resource identifier.
pub fn find_element_by_id<N: AccessibilityNode>(root: &N, view_id: &str) -> Option<N> {
    find_first(root, |n: &N| n.view_id() == Some(view_id))
}

/// Exact match on the node text.
pub fn find_element_by_text<N: AccessibilityNode>(root: &N, text: &str) -> Option<N> {
    find_first(root, |n: &N| n.text() == Some(text))
}

/// Exact match on the content description.
pub fn find_element_by_content_description<N: AccessibilityNode>(
    root: &N,
    description: &str,
) -> Option<N> {
    find_first(root, |n: &N| n.content_description() == Some(description))
}

// ============================================================================
// Query — a named lookup, as chosen on the command line
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Clickable,
    Text,
    Input,
    Button,
    ById(String),
    ByText(String),
    ByDescription(String),
}

impl Query {
    /// Build a query from its name; the `by-*` lookups need a `value`.
    pub fn parse(name: &str, value: Option<&str>) -> Result<Query, SnapshotError> {
        let needs_value = |build: fn(String) -> Query| {
            value
                .map(|v| build(v.to_string()))
                .ok_or_else(|| SnapshotError::MissingQueryValue(name.to_string()))
        };

        match name {
            "clickable" => Ok(Query::Clickable),
            "text" => Ok(Query::Text),
            "input" => Ok(Query::Input),
            "button" => Ok(Query::Button),
            "id" => needs_value(Query::ById),
            "text-eq" => needs_value(Query::ByText),
            "description" => needs_value(Query::ByDescription),
            other => Err(SnapshotError::UnknownQuery(other.to_string())),
        }
    }

    /// Lookups by value return at most one node, the first in pre-order.
    pub fn run<N: AccessibilityNode>(&self, root: &N) -> Vec<N> {
        match self {
            Query::Clickable => find_clickable_elements(root),
            Query::Text => find_text_elements(root),
            Query::Input => find_input_elements(root),
            Query::Button => find_button_elements(root),
            Query::ById(id) => find_element_by_id(root, id).into_iter().collect(),
            Query::ByText(text) => find_element_by_text(root, text).into_iter().collect(),
            Query::ByDescription(description) => {
                find_element_by_content_description(root, description)
                    .into_iter()
                    .collect()
            }
        }
    }
}
