use std::ops::ControlFlow;

use crate::node::node_model::AccessibilityNode;

/// Deepest level any walk descends to. Nodes below it are treated like
/// children the host could not produce, which also bounds walks over a
/// host tree whose parent/child links form a cycle.
pub const MAX_TREE_DEPTH: usize = 512;

// ============================================================================
// Child iteration with handle release
// ============================================================================

/// Visit the obtainable children of `node` in declared order.
///
/// Each child handle is released as soon as `visit` returns for it.
/// Unobtainable children are skipped. Returns early with the value carried
/// by the first `ControlFlow::Break`.
pub fn for_each_child<N, B, F>(node: &N, depth: usize, mut visit: F) -> ControlFlow<B>
where
    N: AccessibilityNode,
    F: FnMut(&N) -> ControlFlow<B>,
{
    let count = node.child_count();
    if count == 0 {
        return ControlFlow::Continue(());
    }

    if depth >= MAX_TREE_DEPTH {
        tracing::warn!(
            depth,
            skipped = count,
            "tree depth bound reached, children not visited"
        );
        return ControlFlow::Continue(());
    }

    for index in 0..count {
        let Some(child) = node.child(index) else {
            tracing::trace!(index, "child unavailable, skipped");
            continue;
        };

        let flow = visit(&child);
        child.release();
        if let ControlFlow::Break(value) = flow {
            return ControlFlow::Break(value);
        }
    }

    ControlFlow::Continue(())
}

// ============================================================================
// Predicate search — pre-order depth-first
// ============================================================================

/// Every node for which `predicate` holds, in pre-order.
///
/// A match does not stop the descent into its subtree.
pub fn find_all<N, P>(root: &N, predicate: P) -> Vec<N>
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    let mut found = Vec::new();
    collect_matching(root, &predicate, 0, &mut found);
    found
}

fn collect_matching<N, P>(node: &N, predicate: &P, depth: usize, found: &mut Vec<N>)
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    if predicate(node) {
        found.push(node.clone());
    }

    let _ = for_each_child::<N, (), _>(node, depth, |child| {
        collect_matching(child, predicate, depth + 1, found);
        ControlFlow::Continue(())
    });
}

/// The first node in pre-order for which `predicate` holds.
pub fn find_first<N, P>(root: &N, predicate: P) -> Option<N>
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    match first_matching(root, &predicate, 0) {
        ControlFlow::Break(found) => Some(found),
        ControlFlow::Continue(()) => None,
    }
}

fn first_matching<N, P>(node: &N, predicate: &P, depth: usize) -> ControlFlow<N>
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    if predicate(node) {
        return ControlFlow::Break(node.clone());
    }

    for_each_child(node, depth, |child| first_matching(child, predicate, depth + 1))
}

/// Number of nodes for which `predicate` holds.
pub fn count_matching<N, P>(root: &N, predicate: P) -> usize
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    count_from(root, &predicate, 0)
}

fn count_from<N, P>(node: &N, predicate: &P, depth: usize) -> usize
where
    N: AccessibilityNode,
    P: Fn(&N) -> bool,
{
    let mut count = usize::from(predicate(node));

    let _ = for_each_child::<N, (), _>(node, depth, |child| {
        count += count_from(child, predicate, depth + 1);
        ControlFlow::Continue(())
    });

    count
}
