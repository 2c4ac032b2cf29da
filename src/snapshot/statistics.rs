use crate::node::node_model::AccessibilityNode;
use crate::query::queries::{has_text, is_clickable};
use crate::query::search::count_matching;
use crate::snapshot::document::Statistics;

pub fn count_all_elements<N: AccessibilityNode>(root: &N) -> usize {
    count_matching(root, |_: &N| true)
}

pub fn count_clickable_elements<N: AccessibilityNode>(root: &N) -> usize {
    count_matching(root, is_clickable::<N>)
}

pub fn count_text_elements<N: AccessibilityNode>(root: &N) -> usize {
    count_matching(root, has_text::<N>)
}

impl Statistics {
    /// Three independent walks over the tree under `root`.
    pub fn collect<N: AccessibilityNode>(root: &N) -> Self {
        Self {
            total_elements: count_all_elements(root),
            clickable_elements: count_clickable_elements(root),
            text_elements: count_text_elements(root),
        }
    }
}
