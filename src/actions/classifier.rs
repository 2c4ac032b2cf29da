use crate::actions::action_model::{NodeAction, StandardAction};

// ============================================================================
// Action classifier — which actions are worth recording
// ============================================================================

/// Low-information platform actions: focus, selection, scrolling, paging,
/// clipboard, navigation and editing primitives, plus plain clicks.
pub const LOW_INFORMATION_ACTIONS: [StandardAction; 44] = [
    StandardAction::Focus,
    StandardAction::ClearFocus,
    StandardAction::AccessibilityFocus,
    StandardAction::ClearAccessibilityFocus,
    StandardAction::Select,
    StandardAction::ClearSelection,
    StandardAction::ShowOnScreen,
    StandardAction::ScrollForward,
    StandardAction::ScrollBackward,
    StandardAction::ScrollLeft,
    StandardAction::ScrollRight,
    StandardAction::ScrollUp,
    StandardAction::ScrollDown,
    StandardAction::ScrollInDirection,
    StandardAction::PageLeft,
    StandardAction::PageRight,
    StandardAction::PageUp,
    StandardAction::PageDown,
    StandardAction::Click,
    StandardAction::LongClick,
    StandardAction::ContextClick,
    StandardAction::SetProgress,
    StandardAction::MoveWindow,
    StandardAction::SetText,
    StandardAction::ImeEnter,
    StandardAction::DragStart,
    StandardAction::DragDrop,
    StandardAction::DragCancel,
    StandardAction::SetSelection,
    StandardAction::ExtendSelection,
    StandardAction::Expand,
    StandardAction::Collapse,
    StandardAction::Dismiss,
    StandardAction::SetInputFocus,
    StandardAction::ClearInputFocus,
    StandardAction::NextAtMovementGranularity,
    StandardAction::PreviousAtMovementGranularity,
    StandardAction::NextHtmlElement,
    StandardAction::PreviousHtmlElement,
    StandardAction::Copy,
    StandardAction::Paste,
    StandardAction::Cut,
    StandardAction::Undo,
    StandardAction::Redo,
];

impl StandardAction {
    pub fn is_low_information(&self) -> bool {
        LOW_INFORMATION_ACTIONS.contains(self)
    }
}

/// Decide whether an action should be recorded in a snapshot.
///
/// Custom actions are denied when their name merely contains a
/// low-information symbolic name, e.g. `ACTION_CLICK_THROUGH`.
pub fn is_meaningful(action: &NodeAction) -> bool {
    match action {
        NodeAction::Standard(standard) => !standard.is_low_information(),
        NodeAction::Custom(name) => !LOW_INFORMATION_ACTIONS
            .iter()
            .any(|denied| name.contains(denied.symbolic_name())),
        NodeAction::Unrecognized(_) => false,
    }
}

/// Keep the meaningful actions, preserving the node's order.
pub fn meaningful_actions(actions: &[NodeAction]) -> Vec<NodeAction> {
    actions.iter().filter(|a| is_meaningful(a)).cloned().collect()
}
