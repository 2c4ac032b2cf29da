use std::path::Path;

use crate::cli::config::OutputSettings;
use crate::geometry::analyzer::{element_depth, element_path, is_element_visible};
use crate::host::dump::load_dump;
use crate::node::node_model::AccessibilityNode;
use crate::output::fingerprint::hierarchy_fingerprint;
use crate::output::format::render;
use crate::output::persist::save_document;
use crate::query::queries::Query;
use crate::snapshot::document::Statistics;
use crate::snapshot::error::SnapshotError;
use crate::snapshot_file;

// ============================================================================
// snapshot subcommand
// ============================================================================

pub fn cmd_snapshot(
    input: &str,
    settings: &OutputSettings,
    to_stdout: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = snapshot_file(Path::new(input))?;

    let stats = &document.statistics;
    eprintln!(
        "Captured {} elements ({} clickable, {} with text), fingerprint {}",
        stats.total_elements,
        stats.clickable_elements,
        stats.text_elements,
        hierarchy_fingerprint(&document)
    );

    if to_stdout {
        print!("{}", render(&document, settings.format)?);
    } else {
        let path = save_document(&document, &settings.dir, settings.format)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

// ============================================================================
// query subcommand
// ============================================================================

/// Print every match and return how many there were.
pub fn cmd_query(
    input: &str,
    query_name: &str,
    value: Option<&str>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let query = Query::parse(query_name, value)?;
    let tree = load_dump(Path::new(input))?
        .into_tree()
        .ok_or(SnapshotError::RootUnavailable)?;

    let matches = query.run(&tree.root());
    tracing::debug!(?query, matches = matches.len(), "query finished");

    for node in &matches {
        println!("{}", describe_match(node));
    }

    let count = matches.len();
    for node in matches {
        node.release();
    }
    Ok(count)
}

/// One line per match: path, depth, bounds, center and visibility.
pub fn describe_match<N: AccessibilityNode>(node: &N) -> String {
    let bounds = node.bounds();
    let center = bounds.center();
    format!(
        "{}  depth={} bounds=[{},{}][{},{}] center=({},{}) visible={}",
        element_path(node),
        element_depth(node),
        bounds.left,
        bounds.top,
        bounds.right,
        bounds.bottom,
        center.x,
        center.y,
        is_element_visible(node)
    )
}

// ============================================================================
// stats subcommand
// ============================================================================

pub fn cmd_stats(input: &str) -> Result<Statistics, Box<dyn std::error::Error>> {
    let tree = load_dump(Path::new(input))?
        .into_tree()
        .ok_or(SnapshotError::RootUnavailable)?;

    let stats = Statistics::collect(&tree.root());
    println!("totalElements: {}", stats.total_elements);
    println!("clickableElements: {}", stats.clickable_elements);
    println!("textElements: {}", stats.text_elements);

    Ok(stats)
}
