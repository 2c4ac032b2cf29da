use sha1::{Digest, Sha1};

use crate::output::xml::render_hierarchy;
use crate::snapshot::document::Document;

/// SHA-1 of the rendered hierarchy. Two snapshots of the same tree share a
/// fingerprint; the timestamp and statistics do not take part.
pub fn hierarchy_fingerprint(document: &Document) -> String {
    let mut hasher = Sha1::new();
    hasher.update(render_hierarchy(&document.hierarchy).as_bytes());
    format!("{:x}", hasher.finalize())
}
