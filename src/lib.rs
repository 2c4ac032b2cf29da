use std::path::Path;

use crate::{
    host::dump::load_dump,
    snapshot::{document::Document, error::SnapshotError, serializer::take_snapshot},
};

pub mod actions;
pub mod cli;
pub mod geometry;
pub mod host;
pub mod node;
pub mod output;
pub mod query;
pub mod snapshot;

/// Take a snapshot of a tree dump on disk: load, rebuild the host tree,
/// serialize. Fails with `RootUnavailable` when the dump has no root.
pub fn snapshot_file(path: &Path) -> Result<Document, SnapshotError> {
    let tree = load_dump(path)?.into_tree();
    take_snapshot(tree.as_ref().map(|t| t.root()))
}
