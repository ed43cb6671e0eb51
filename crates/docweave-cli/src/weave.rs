//! Weaving driver: file I/O around the core engine.
//!
//! The schema model arrives pre-parsed as JSON (the schema parser is a
//! separate tool); this module only loads it, runs the core pipeline,
//! and writes the documented output atomically. Any modeling error
//! aborts before the destination file is touched.

use anyhow::{Context, Result};
use docweave_core::{
    JavadocTarget, SchemaModel, WeaveConfig, WeaveReport, build_index, weave,
};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Weave documentation into `source`, writing to `output` (or back to
/// `source` when no output path is given).
pub fn run(schema: &str, source: &str, output: Option<&str>, config: WeaveConfig) -> Result<()> {
    let model = load_model(Path::new(schema))?;
    let target = JavadocTarget::new(config);
    let index = build_index(&model, &target)?;

    let input = fs::read_to_string(source)
        .with_context(|| format!("Failed to read generated source: {source}"))?;
    let (documented, report) = weave(&input, &index, &target);

    report_drift(&report);

    let destination = output.unwrap_or(source);
    write_atomic(Path::new(destination), &documented)
        .with_context(|| format!("Failed to write documented source: {destination}"))?;

    info!(
        destination,
        entries = report.total_entries,
        matched = report.matched_entries,
        "documented source written"
    );
    println!(
        "{destination}: {}/{} documentation entries woven",
        report.matched_entries, report.total_entries
    );
    Ok(())
}

/// Build the documentation index only: validates every schema type and
/// the uniqueness of every computed signature.
pub fn check(schema: &str, config: WeaveConfig) -> Result<()> {
    let model = load_model(Path::new(schema))?;
    let target = JavadocTarget::new(config);
    let index = build_index(&model, &target)?;

    println!(
        "{schema}: OK ({} entities, {} documentation entries)",
        model.entities.len(),
        index.len()
    );
    Ok(())
}

fn load_model(path: &Path) -> Result<SchemaModel> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema model: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse schema model: {}", path.display()))
}

/// Surface generator drift: entities whose computed signatures matched
/// nothing in the input would otherwise ship silently undocumented.
fn report_drift(report: &WeaveReport) {
    if report.is_complete() {
        return;
    }
    for entity in &report.unmatched_entities {
        warn!(entity, "no generated lines matched this entity");
    }
    eprintln!(
        "warning: {} of {} documentation entries matched no line ({} entities affected)",
        report.total_entries - report.matched_entries,
        report.total_entries,
        report.unmatched_entities.len()
    );
}

/// Write via a temp file in the destination directory so a failed run
/// never leaves a half-written output.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path)?;
    Ok(())
}
