use std::fmt;

use serde::{Deserialize, Serialize};

/// Markers that identify a host-supplied name as an action, wherever they
/// occur in it (`AccessibilityAction: ACTION_ZOOM - Zoom`).
pub const ACTION_MARKERS: [&str; 2] = ["ACTION_", "CUSTOM_"];

// ============================================================================
// Platform-defined actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardAction {
    Focus,
    ClearFocus,
    AccessibilityFocus,
    ClearAccessibilityFocus,
    Select,
    ClearSelection,
    ShowOnScreen,
    ScrollForward,
    ScrollBackward,
    ScrollLeft,
    ScrollRight,
    ScrollUp,
    ScrollDown,
    ScrollInDirection,
    ScrollToPosition,
    PageLeft,
    PageRight,
    PageUp,
    PageDown,
    Click,
    LongClick,
    ContextClick,
    SetProgress,
    MoveWindow,
    SetText,
    ImeEnter,
    DragStart,
    DragDrop,
    DragCancel,
    SetSelection,
    ExtendSelection,
    Expand,
    Collapse,
    Dismiss,
    SetInputFocus,
    ClearInputFocus,
    NextAtMovementGranularity,
    PreviousAtMovementGranularity,
    NextHtmlElement,
    PreviousHtmlElement,
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
    ShowTooltip,
    HideTooltip,
    PressAndHold,
    ShowTextSuggestions,
}

impl StandardAction {
    pub const ALL: [StandardAction; 49] = [
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
        StandardAction::ScrollToPosition,
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
        StandardAction::ShowTooltip,
        StandardAction::HideTooltip,
        StandardAction::PressAndHold,
        StandardAction::ShowTextSuggestions,
    ];

    pub fn symbolic_name(&self) -> &'static str {
        match self {
            StandardAction::Focus => "ACTION_FOCUS",
            StandardAction::ClearFocus => "ACTION_CLEAR_FOCUS",
            StandardAction::AccessibilityFocus => "ACTION_ACCESSIBILITY_FOCUS",
            StandardAction::ClearAccessibilityFocus => "ACTION_CLEAR_ACCESSIBILITY_FOCUS",
            StandardAction::Select => "ACTION_SELECT",
            StandardAction::ClearSelection => "ACTION_CLEAR_SELECTION",
            StandardAction::ShowOnScreen => "ACTION_SHOW_ON_SCREEN",
            StandardAction::ScrollForward => "ACTION_SCROLL_FORWARD",
            StandardAction::ScrollBackward => "ACTION_SCROLL_BACKWARD",
            StandardAction::ScrollLeft => "ACTION_SCROLL_LEFT",
            StandardAction::ScrollRight => "ACTION_SCROLL_RIGHT",
            StandardAction::ScrollUp => "ACTION_SCROLL_UP",
            StandardAction::ScrollDown => "ACTION_SCROLL_DOWN",
            StandardAction::ScrollInDirection => "ACTION_SCROLL_IN_DIRECTION",
            StandardAction::ScrollToPosition => "ACTION_SCROLL_TO_POSITION",
            StandardAction::PageLeft => "ACTION_PAGE_LEFT",
            StandardAction::PageRight => "ACTION_PAGE_RIGHT",
            StandardAction::PageUp => "ACTION_PAGE_UP",
            StandardAction::PageDown => "ACTION_PAGE_DOWN",
            StandardAction::Click => "ACTION_CLICK",
            StandardAction::LongClick => "ACTION_LONG_CLICK",
            StandardAction::ContextClick => "ACTION_CONTEXT_CLICK",
            StandardAction::SetProgress => "ACTION_SET_PROGRESS",
            StandardAction::MoveWindow => "ACTION_MOVE_WINDOW",
            StandardAction::SetText => "ACTION_SET_TEXT",
            StandardAction::ImeEnter => "ACTION_IME_ENTER",
            StandardAction::DragStart => "ACTION_DRAG_START",
            StandardAction::DragDrop => "ACTION_DRAG_DROP",
            StandardAction::DragCancel => "ACTION_DRAG_CANCEL",
            StandardAction::SetSelection => "ACTION_SET_SELECTION",
            StandardAction::ExtendSelection => "ACTION_EXTEND_SELECTION",
            StandardAction::Expand => "ACTION_EXPAND",
            StandardAction::Collapse => "ACTION_COLLAPSE",
            StandardAction::Dismiss => "ACTION_DISMISS",
            StandardAction::SetInputFocus => "ACTION_SET_INPUT_FOCUS",
            StandardAction::ClearInputFocus => "ACTION_CLEAR_INPUT_FOCUS",
            StandardAction::NextAtMovementGranularity => "ACTION_NEXT_AT_MOVEMENT_GRANULARITY",
            StandardAction::PreviousAtMovementGranularity => {
                "ACTION_PREVIOUS_AT_MOVEMENT_GRANULARITY"
            }
            StandardAction::NextHtmlElement => "ACTION_NEXT_HTML_ELEMENT",
            StandardAction::PreviousHtmlElement => "ACTION_PREVIOUS_HTML_ELEMENT",
            StandardAction::Copy => "ACTION_COPY",
            StandardAction::Paste => "ACTION_PASTE",
            StandardAction::Cut => "ACTION_CUT",
            StandardAction::Undo => "ACTION_UNDO",
            StandardAction::Redo => "ACTION_REDO",
            StandardAction::ShowTooltip => "ACTION_SHOW_TOOLTIP",
            StandardAction::HideTooltip => "ACTION_HIDE_TOOLTIP",
            StandardAction::PressAndHold => "ACTION_PRESS_AND_HOLD",
            StandardAction::ShowTextSuggestions => "ACTION_SHOW_TEXT_SUGGESTIONS",
        }
    }

    pub fn from_symbolic_name(name: &str) -> Option<StandardAction> {
        StandardAction::ALL
            .iter()
            .copied()
            .find(|a| a.symbolic_name() == name)
    }
}

// ============================================================================
// NodeAction — one action exposed by a node
// ============================================================================

/// An action exposed by a node.
///
/// Host names are parsed once: a standard symbolic name becomes
/// [`NodeAction::Standard`], a name containing a marker becomes
/// [`NodeAction::Custom`], anything else is kept as
/// [`NodeAction::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeAction {
    Standard(StandardAction),
    Custom(String),
    Unrecognized(String),
}

impl NodeAction {
    pub fn parse(name: &str) -> NodeAction {
        if let Some(standard) = StandardAction::from_symbolic_name(name) {
            return NodeAction::Standard(standard);
        }

        let has_marker = ACTION_MARKERS.iter().any(|m| name.contains(m));
        if has_marker && !name.contains("null") {
            NodeAction::Custom(name.to_string())
        } else {
            NodeAction::Unrecognized(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeAction::Standard(a) => a.symbolic_name(),
            NodeAction::Custom(name) | NodeAction::Unrecognized(name) => name,
        }
    }
}

impl From<String> for NodeAction {
    fn from(name: String) -> Self {
        NodeAction::parse(&name)
    }
}

impl From<NodeAction> for String {
    fn from(action: NodeAction) -> Self {
        action.name().to_string()
    }
}

impl From<StandardAction> for NodeAction {
    fn from(action: StandardAction) -> Self {
        NodeAction::Standard(action)
    }
}

impl fmt::Display for NodeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
