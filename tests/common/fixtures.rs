use a11y_snapshot::actions::action_model::NodeAction;
use a11y_snapshot::host::dump::RawNode;
use a11y_snapshot::node::node_model::Rect;
use chrono::{NaiveDate, NaiveDateTime};

pub fn rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    Rect::new(left, top, right, bottom)
}

pub fn actions(names: &[&str]) -> Vec<NodeAction> {
    names.iter().map(|n| NodeAction::parse(n)).collect()
}

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(10, 30, 5)
        .unwrap()
}

/// Frame → [Button "OK", EditText #input1]
pub fn end_to_end_tree() -> RawNode {
    let button = RawNode {
        text: Some("OK".into()),
        clickable: true,
        bounds: rect(0, 0, 100, 40),
        ..RawNode::new("Button")
    };
    let edit = RawNode {
        view_id: Some("input1".into()),
        bounds: rect(0, 50, 100, 90),
        ..RawNode::new("EditText")
    };

    RawNode::new("Frame").with_child(button).with_child(edit)
}

/// Pre-order:
/// 0 FrameLayout
/// 1   LinearLayout #toolbar
/// 2     ImageButton (clickable, desc "Back")
/// 3     TextView "Settings"
///     <unavailable child>
/// 4   ScrollView (scrollable)
/// 5     EditText #email "user@example.com"
/// 6     CheckBox "Remember me" (clickable, checkable)
/// 7     Button "Sign in" (clickable)
pub fn settings_screen() -> RawNode {
    let back = RawNode {
        content_description: Some("Back".into()),
        clickable: true,
        bounds: rect(0, 0, 120, 120),
        ..RawNode::new("android.widget.ImageButton")
    };
    let title = RawNode {
        text: Some("Settings".into()),
        bounds: rect(120, 0, 600, 120),
        ..RawNode::new("android.widget.TextView")
    };
    let toolbar = RawNode {
        view_id: Some("com.example.app:id/toolbar".into()),
        bounds: rect(0, 0, 1080, 120),
        ..RawNode::new("android.widget.LinearLayout")
    }
    .with_child(back)
    .with_child(title);

    let email = RawNode {
        view_id: Some("com.example.app:id/email".into()),
        text: Some("user@example.com".into()),
        focusable: true,
        bounds: rect(40, 200, 1040, 320),
        actions: actions(&["ACTION_FOCUS", "ACTION_SET_TEXT", "ACTION_PASTE"]),
        ..RawNode::new("android.widget.EditText")
    };
    let remember = RawNode {
        text: Some("Remember me".into()),
        clickable: true,
        checkable: true,
        bounds: rect(40, 340, 1040, 420),
        ..RawNode::new("android.widget.CheckBox")
    };
    let sign_in = RawNode {
        text: Some("Sign in".into()),
        clickable: true,
        bounds: rect(40, 440, 1040, 560),
        actions: actions(&["ACTION_CLICK", "ACTION_FOCUS", "CUSTOM_VALIDATE"]),
        ..RawNode::new("android.widget.Button")
    };
    let scroll = RawNode {
        scrollable: true,
        bounds: rect(0, 120, 1080, 1920),
        ..RawNode::new("android.widget.ScrollView")
    }
    .with_child(email)
    .with_child(remember)
    .with_child(sign_in);

    let mut root = RawNode {
        package_name: Some("com.example.app".into()),
        bounds: rect(0, 0, 1080, 1920),
        ..RawNode::new("android.widget.FrameLayout")
    }
    .with_child(toolbar);
    root.children.push(None);
    root.with_child(scroll)
}

/// A single chain of `len` nested views.
pub fn chain(len: usize) -> RawNode {
    let mut node = RawNode::new("View");
    for _ in 1..len {
        node = RawNode::new("View").with_child(node);
    }
    node
}

/// Run `f` on a thread with room for walks over very deep trees.
pub fn with_large_stack<F>(f: F)
where
    F: FnOnce() + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}
