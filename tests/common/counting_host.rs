use std::cell::Cell;

use a11y_snapshot::actions::action_model::NodeAction;
use a11y_snapshot::host::tree::NodeRef;
use a11y_snapshot::node::node_model::{AccessibilityNode, Rect};

/// Handle bookkeeping shared by every `CountingNode` of one tree.
#[derive(Debug, Default)]
pub struct HandleLedger {
    pub obtained: Cell<usize>,
    pub released: Cell<usize>,
}

impl HandleLedger {
    pub fn outstanding(&self) -> usize {
        self.obtained.get() - self.released.get()
    }

    fn obtain(&self) {
        self.obtained.set(self.obtained.get() + 1);
    }
}

/// Host whose handles record when they are obtained and released.
/// The root handle handed in by the test is not counted.
#[derive(Debug)]
pub struct CountingNode<'a> {
    inner: NodeRef<'a>,
    ledger: &'a HandleLedger,
}

impl<'a> CountingNode<'a> {
    pub fn root(inner: NodeRef<'a>, ledger: &'a HandleLedger) -> Self {
        Self { inner, ledger }
    }

    pub fn inner(&self) -> NodeRef<'a> {
        self.inner
    }

    fn wrap(&self, inner: NodeRef<'a>) -> Self {
        self.ledger.obtain();
        Self {
            inner,
            ledger: self.ledger,
        }
    }
}

impl Clone for CountingNode<'_> {
    fn clone(&self) -> Self {
        self.wrap(self.inner)
    }
}

impl AccessibilityNode for CountingNode<'_> {
    fn class_name(&self) -> Option<&str> {
        self.inner.class_name()
    }

    fn text(&self) -> Option<&str> {
        self.inner.text()
    }

    fn content_description(&self) -> Option<&str> {
        self.inner.content_description()
    }

    fn view_id(&self) -> Option<&str> {
        self.inner.view_id()
    }

    fn package_name(&self) -> Option<&str> {
        self.inner.package_name()
    }

    fn bounds(&self) -> Rect {
        self.inner.bounds()
    }

    fn is_clickable(&self) -> bool {
        self.inner.is_clickable()
    }

    fn is_focusable(&self) -> bool {
        self.inner.is_focusable()
    }

    fn is_enabled(&self) -> bool {
        self.inner.is_enabled()
    }

    fn is_visible_to_user(&self) -> bool {
        self.inner.is_visible_to_user()
    }

    fn is_checkable(&self) -> bool {
        self.inner.is_checkable()
    }

    fn is_checked(&self) -> bool {
        self.inner.is_checked()
    }

    fn is_scrollable(&self) -> bool {
        self.inner.is_scrollable()
    }

    fn is_long_clickable(&self) -> bool {
        self.inner.is_long_clickable()
    }

    fn is_password(&self) -> bool {
        self.inner.is_password()
    }

    fn is_selected(&self) -> bool {
        self.inner.is_selected()
    }

    fn actions(&self) -> Vec<NodeAction> {
        self.inner.actions()
    }

    fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.inner.child(index).map(|c| self.wrap(c))
    }

    fn parent(&self) -> Option<Self> {
        self.inner.parent().map(|p| self.wrap(p))
    }

    fn release(self) {
        self.ledger.released.set(self.ledger.released.get() + 1);
    }
}
