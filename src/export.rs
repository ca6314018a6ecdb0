//! JSON export: serialize a graph in the import schema.
//!
//! The output loads back through [`crate::import::validate`] unchanged, so a
//! dataset built in code (see [`crate::builder`]) can be shipped as a file
//! and imported later.
//!
//! ```text
//! GraphBuilder / GraphStore → export_json() → database.json
//!   → GraphStore::import()
//! ```

use std::io::Write;

use crate::sample::Sampler;
use crate::storage::{GraphStore, TraitGraph};
use crate::Result;

/// Write `graph` as pretty-printed JSON followed by a newline.
pub fn export_json(graph: &TraitGraph, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &graph.to_payload())?;
    writeln!(writer)?;
    tracing::debug!(traits = graph.trait_count(), links = graph.link_count(), "exported graph");
    Ok(())
}

/// Export the store's active graph. Writes an empty document when nothing
/// is loaded.
pub fn export_store<S: Sampler>(store: &GraphStore<S>, writer: &mut dyn Write) -> Result<()> {
    match store.snapshot() {
        Some(active) => export_json(active.graph(), writer),
        None => export_json(&TraitGraph::empty(), writer),
    }
}

/// Export to a `String`.
pub fn to_json_string(graph: &TraitGraph) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&graph.to_payload())?;
    out.push('\n');
    Ok(out)
}
