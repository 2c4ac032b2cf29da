use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::actions::action_model::NodeAction;
use crate::host::tree::NodeTree;
use crate::node::node_model::Rect;
use crate::snapshot::error::SnapshotError;

// ============================================================================
// Tree dump — a captured accessibility tree on disk
// ============================================================================

/// A captured window. `root` is absent when the host had no active window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeDump {
    #[serde(default)]
    pub root: Option<RawNode>,
}

impl TreeDump {
    pub fn into_tree(self) -> Option<NodeTree> {
        self.root.map(NodeTree::from_root)
    }
}

/// One node as captured from the host. Missing fields take the host's
/// defaults; a `null` child stands for a child the host could not produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub content_description: Option<String>,
    pub view_id: Option<String>,
    pub package_name: Option<String>,

    #[serde(default)]
    pub bounds: Rect,

    #[serde(default)]
    pub clickable: bool,
    #[serde(default)]
    pub focusable: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub visible_to_user: bool,
    #[serde(default)]
    pub checkable: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub scrollable: bool,
    #[serde(default)]
    pub long_clickable: bool,
    #[serde(default)]
    pub password: bool,
    #[serde(default)]
    pub selected: bool,

    #[serde(default)]
    pub actions: Vec<NodeAction>,

    #[serde(default)]
    pub children: Vec<Option<RawNode>>,
}

fn default_true() -> bool {
    true
}

impl Default for RawNode {
    fn default() -> Self {
        Self {
            class_name: None,
            text: None,
            content_description: None,
            view_id: None,
            package_name: None,
            bounds: Rect::default(),
            clickable: false,
            focusable: false,
            enabled: true,
            visible_to_user: true,
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

impl RawNode {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: Some(class_name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_child(mut self, child: RawNode) -> Self {
        self.children.push(Some(child));
        self
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Each node nests two YAML levels (the node map and its `children` list)
/// under the parser's 128-level cap.
const YAML_NODE_DEPTH_LIMIT: usize = 63;

/// Load a dump from a `.json`, `.yaml` or `.yml` file.
pub fn load_dump(path: &Path) -> Result<TreeDump, SnapshotError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| SnapshotError::io(format!("reading {display}"), e))?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json_dump(&content, &display),
        Some("yaml") | Some("yml") => parse_yaml_dump(&content, &display),
        _ => Err(SnapshotError::UnsupportedDump(display)),
    }
}

/// Parse a JSON dump. Nesting depth is not limited by the parser; the
/// stack grows on demand while deep trees are read.
pub fn parse_json_dump(content: &str, context: &str) -> Result<TreeDump, SnapshotError> {
    let json_error = |source: serde_json::Error| SnapshotError::Json {
        context: context.to_string(),
        source,
    };

    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let dump = TreeDump::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(json_error)?;
    deserializer.end().map_err(json_error)?;

    Ok(dump)
}

/// Parse a YAML dump. The YAML parser caps nesting at 128 levels, which is
/// about 63 nodes deep; deeper trees need a JSON dump.
pub fn parse_yaml_dump(content: &str, context: &str) -> Result<TreeDump, SnapshotError> {
    serde_yaml::from_str(content).map_err(|source| {
        let context = if source.to_string().contains("recursion limit exceeded") {
            format!("{context}: YAML dumps nest at most {YAML_NODE_DEPTH_LIMIT} nodes deep, use JSON for deeper trees")
        } else {
            context.to_string()
        };
        SnapshotError::Yaml { context, source }
    })
}
