use std::cell::Cell;

use a11y_snapshot::host::dump::RawNode;
use a11y_snapshot::host::tree::{NodeRef, NodeTree};
use a11y_snapshot::node::node_model::AccessibilityNode;
use a11y_snapshot::query::queries::{
    Query, find_button_elements, find_clickable_elements, find_element_by_content_description,
    find_element_by_id, find_element_by_text, find_input_elements, find_text_elements,
};
use a11y_snapshot::query::search::{count_matching, find_all, find_first};
use a11y_snapshot::snapshot::document::Statistics;
use a11y_snapshot::snapshot::error::SnapshotError;

use crate::common::{
    counting_host::{CountingNode, HandleLedger},
    fixtures::settings_screen,
};

mod common;

fn indices(nodes: &[NodeRef<'_>]) -> Vec<usize> {
    nodes.iter().map(|n| n.index()).collect()
}

fn classes(nodes: &[NodeRef<'_>]) -> Vec<String> {
    nodes
        .iter()
        .map(|n| {
            n.class_name()
                .unwrap_or("")
                .trim_start_matches("android.widget.")
                .to_string()
        })
        .collect()
}

// ============================================================================
// find_all
// ============================================================================

#[test]
fn find_all_always_true_visits_every_node_in_pre_order() {
    let tree = NodeTree::from_root(settings_screen());
    let all = find_all(&tree.root(), |_: &NodeRef<'_>| true);

    assert_eq!(indices(&all), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        classes(&all),
        vec![
            "FrameLayout",
            "LinearLayout",
            "ImageButton",
            "TextView",
            "ScrollView",
            "EditText",
            "CheckBox",
            "Button"
        ]
    );
}

#[test]
fn find_all_length_matches_total_statistic() {
    let tree = NodeTree::from_root(settings_screen());
    let all = find_all(&tree.root(), |_: &NodeRef<'_>| true);
    let stats = Statistics::collect(&tree.root());

    assert_eq!(all.len(), stats.total_elements);
}

#[test]
fn find_all_keeps_matches_nested_under_matches() {
    let inner = RawNode {
        clickable: true,
        ..RawNode::new("Button")
    };
    let outer = RawNode {
        clickable: true,
        ..RawNode::new("Card")
    }
    .with_child(inner);
    let tree = NodeTree::from_root(RawNode::new("Root").with_child(outer));

    let found = find_all(&tree.root(), |n: &NodeRef<'_>| n.is_clickable());
    assert_eq!(indices(&found), vec![1, 2]);
}

#[test]
fn find_all_on_childless_root() {
    let tree = NodeTree::from_root(RawNode::new("Solo"));
    assert_eq!(find_all(&tree.root(), |_: &NodeRef<'_>| true).len(), 1);
    assert!(find_all(&tree.root(), |_: &NodeRef<'_>| false).is_empty());
}

#[test]
fn unavailable_children_are_skipped() {
    let mut root = RawNode::new("Root");
    root.children.push(None);
    root.children.push(Some(RawNode::new("Leaf")));
    root.children.push(None);
    let tree = NodeTree::from_root(root);

    assert_eq!(tree.root().child_count(), 3);
    let all = find_all(&tree.root(), |_: &NodeRef<'_>| true);
    assert_eq!(classes(&all), vec!["Root", "Leaf"]);
}

// ============================================================================
// find_first
// ============================================================================

#[test]
fn find_first_agrees_with_find_all() {
    let tree = NodeTree::from_root(settings_screen());
    let predicates: Vec<Box<dyn Fn(&NodeRef<'_>) -> bool>> = vec![
        Box::new(|n: &NodeRef<'_>| n.is_clickable()),
        Box::new(|n: &NodeRef<'_>| n.text().is_some()),
        Box::new(|n: &NodeRef<'_>| n.is_scrollable()),
        Box::new(|n: &NodeRef<'_>| n.is_password()),
    ];

    for predicate in &predicates {
        let all = find_all(&tree.root(), |n: &NodeRef<'_>| predicate(n));
        let first = find_first(&tree.root(), |n: &NodeRef<'_>| predicate(n));
        assert_eq!(first, all.first().copied());
    }
}

#[test]
fn find_first_returns_none_without_match() {
    let tree = NodeTree::from_root(settings_screen());
    assert!(find_first(&tree.root(), |n: &NodeRef<'_>| n.is_password()).is_none());
}

#[test]
fn find_first_stops_scanning_after_match() {
    let tree = NodeTree::from_root(settings_screen());
    let visited = Cell::new(0);

    let found = find_first(&tree.root(), |n: &NodeRef<'_>| {
        visited.set(visited.get() + 1);
        n.content_description() == Some("Back")
    });

    assert_eq!(found.map(|n| n.index()), Some(2));
    assert_eq!(visited.get(), 3, "root, toolbar, back button only");
}

// ============================================================================
// Derived queries
// ============================================================================

#[test]
fn clickable_query() {
    let tree = NodeTree::from_root(settings_screen());
    let found = find_clickable_elements(&tree.root());
    assert_eq!(classes(&found), vec!["ImageButton", "CheckBox", "Button"]);
}

#[test]
fn text_query_ignores_empty_text() {
    let mut root = settings_screen();
    root.text = Some(String::new());
    let tree = NodeTree::from_root(root);

    let found = find_text_elements(&tree.root());
    assert_eq!(classes(&found), vec!["TextView", "EditText", "CheckBox", "Button"]);
}

#[test]
fn input_query_matches_edit_text_class() {
    let tree = NodeTree::from_root(settings_screen());
    let found = find_input_elements(&tree.root());
    assert_eq!(classes(&found), vec!["EditText"]);
}

#[test]
fn button_query_includes_clickable_non_buttons() {
    let tree = NodeTree::from_root(settings_screen());
    let found = find_button_elements(&tree.root());
    assert_eq!(classes(&found), vec!["ImageButton", "CheckBox", "Button"]);
}

#[test]
fn lookups_use_exact_match() {
    let tree = NodeTree::from_root(settings_screen());
    let root = tree.root();

    let email = find_element_by_id(&root, "com.example.app:id/email");
    assert_eq!(email.map(|n| n.index()), Some(5));
    assert!(find_element_by_id(&root, "email").is_none());

    assert_eq!(
        find_element_by_text(&root, "Sign in").map(|n| n.index()),
        Some(7)
    );
    assert!(find_element_by_text(&root, "Sign").is_none());

    assert_eq!(
        find_element_by_content_description(&root, "Back").map(|n| n.index()),
        Some(2)
    );
    assert!(find_element_by_content_description(&root, "back").is_none());
}

#[test]
fn count_matching_counts_flagged_nodes() {
    let tree = NodeTree::from_root(settings_screen());
    assert_eq!(count_matching(&tree.root(), |n: &NodeRef<'_>| n.is_checkable()), 1);
}

// ============================================================================
// Query
// ============================================================================

#[test]
fn query_parse_names() {
    assert_eq!(Query::parse("clickable", None).unwrap(), Query::Clickable);
    assert_eq!(Query::parse("button", Some("ignored")).unwrap(), Query::Button);
    assert_eq!(
        Query::parse("id", Some("input1")).unwrap(),
        Query::ById("input1".into())
    );
    assert_eq!(
        Query::parse("description", Some("Back")).unwrap(),
        Query::ByDescription("Back".into())
    );
}

#[test]
fn query_parse_rejects_unknown_and_missing_value() {
    assert!(matches!(
        Query::parse("visible", None),
        Err(SnapshotError::UnknownQuery(name)) if name == "visible"
    ));
    assert!(matches!(
        Query::parse("text-eq", None),
        Err(SnapshotError::MissingQueryValue(name)) if name == "text-eq"
    ));
}

#[test]
fn query_run_returns_single_node_for_lookups() {
    let tree = NodeTree::from_root(settings_screen());
    let found = Query::ByText("Remember me".into()).run(&tree.root());
    assert_eq!(indices(&found), vec![6]);

    let none = Query::ById("missing".into()).run(&tree.root());
    assert!(none.is_empty());
}

// ============================================================================
// Handle release
// ============================================================================

#[test]
fn find_all_releases_every_handle_it_keeps_no_reference_to() {
    let tree = NodeTree::from_root(settings_screen());
    let ledger = HandleLedger::default();
    let root = CountingNode::root(tree.root(), &ledger);

    let found = find_all(&root, |n: &CountingNode<'_>| n.is_clickable());

    assert_eq!(found.len(), 3);
    assert_eq!(ledger.outstanding(), 3, "only the returned handles stay live");

    for node in found {
        node.release();
    }
    assert_eq!(ledger.outstanding(), 0);
}

#[test]
fn find_first_releases_handles_on_the_way_out() {
    let tree = NodeTree::from_root(settings_screen());
    let ledger = HandleLedger::default();
    let root = CountingNode::root(tree.root(), &ledger);

    let found = find_first(&root, |n: &CountingNode<'_>| n.text() == Some("Sign in"));

    assert_eq!(found.as_ref().map(|n| n.inner().index()), Some(7));
    assert_eq!(ledger.outstanding(), 1);
}
