use std::ops::ControlFlow;

use chrono::{Local, NaiveDateTime};

use crate::actions::classifier::meaningful_actions;
use crate::node::node_model::AccessibilityNode;
use crate::query::search::for_each_child;
use crate::snapshot::document::{
    Document, Element, ElementBounds, PageInfo, Statistics, TIMESTAMP_FORMAT,
};
use crate::snapshot::error::SnapshotError;

// ============================================================================
// Snapshot entry points
// ============================================================================

/// Snapshot the tree under a root the host may not have been able to
/// produce. The root handle is released once the document is built.
pub fn take_snapshot<N: AccessibilityNode>(root: Option<N>) -> Result<Document, SnapshotError> {
    let root = root.ok_or(SnapshotError::RootUnavailable)?;
    let document = serialize(&root);
    root.release();
    Ok(document)
}

/// Snapshot stamped with the current local time.
pub fn serialize<N: AccessibilityNode>(root: &N) -> Document {
    serialize_at(root, Local::now().naive_local())
}

pub fn serialize_at<N: AccessibilityNode>(root: &N, timestamp: NaiveDateTime) -> Document {
    tracing::debug!(class_name = ?root.class_name(), "building snapshot");

    let page_info = PageInfo {
        timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        package_name: root.package_name().unwrap_or_default().to_string(),
        class_name: root.class_name().unwrap_or_default().to_string(),
    };

    let hierarchy = build_element(root, 0);
    let statistics = Statistics::collect(root);

    tracing::debug!(
        total = statistics.total_elements,
        clickable = statistics.clickable_elements,
        text = statistics.text_elements,
        "snapshot built"
    );

    Document {
        page_info,
        hierarchy,
        statistics,
    }
}

// ============================================================================
// Hierarchy
// ============================================================================

/// Serialize `node` and its subtree, children in declared order.
pub fn build_element<N: AccessibilityNode>(node: &N, depth: usize) -> Element {
    let actions = meaningful_actions(&node.actions())
        .iter()
        .map(|a| a.name().to_string())
        .collect();

    let mut element = Element {
        class_name: non_empty(node.class_name()),
        text: non_empty(node.text()),
        content_description: non_empty(node.content_description()),
        view_id: non_empty(node.view_id()),
        bounds: ElementBounds::from_rect(node.bounds()),
        clickable: node.is_clickable(),
        focusable: node.is_focusable(),
        enabled: node.is_enabled(),
        visible: node.is_visible_to_user(),
        checkable: node.is_checkable(),
        checked: node.is_checked(),
        scrollable: node.is_scrollable(),
        long_clickable: node.is_long_clickable(),
        password: node.is_password(),
        selected: node.is_selected(),
        actions,
        children: Vec::with_capacity(node.child_count()),
    };

    let _ = for_each_child::<N, (), _>(node, depth, |child| {
        element.children.push(build_element(child, depth + 1));
        ControlFlow::Continue(())
    });

    element
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
