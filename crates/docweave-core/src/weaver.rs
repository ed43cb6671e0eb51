//! Line weaver: streams the generated source and injects documentation.
//!
//! Strictly forward, single pass over the input lines. For each
//! physical line the weaver applies the target's drop rules, skip
//! filtering, and cosmetic fixups, then looks the line up in the
//! documentation index (class-qualified key first, plain line second)
//! and emits any matched documentation block immediately before the
//! (possibly replaced) line. Lines that look up nothing are emitted
//! unchanged; drift between the index and the input never fails the
//! run, it is reported through [`WeaveReport`].
//!
//! The only state carried across lines is the enclosing class name
//! (to disambiguate field signatures), a buffer of header lines that
//! must stay below injected documentation, and the accumulator for
//! declarations spanning several physical lines.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, warn};

use crate::index::DocumentationIndex;
use crate::target::DocTarget;

/// Post-run weaving diagnostics.
///
/// An index entry that never matched any input line means the upstream
/// generator's rendering drifted from the signatures this run
/// computed. That is tolerated (the affected lines stay undocumented)
/// but surfaced here for diagnosability.
#[derive(Debug, Clone)]
pub struct WeaveReport {
    /// Number of index entries registered for this run.
    pub total_entries: usize,

    /// Number of index entries that matched at least one input line.
    pub matched_entries: usize,

    /// Signatures that never matched, with their owning entity.
    pub unmatched: Vec<(String, String)>,

    /// Entities (and `<global>`) none of whose signatures matched.
    pub unmatched_entities: Vec<String>,
}

impl WeaveReport {
    /// Whether every registered entry matched an input line.
    pub fn is_complete(&self) -> bool {
        self.matched_entries == self.total_entries
    }
}

/// Accumulates a logical declaration spanning several physical lines.
struct MultilineSignature {
    /// Raw physical lines, kept for verbatim fallback at EOF.
    raw: Vec<String>,
}

impl MultilineSignature {
    fn new(first: String) -> Self {
        Self { raw: vec![first] }
    }

    fn push(&mut self, line: &str) {
        self.raw.push(line.to_string());
    }

    /// Assemble the canonical logical line: the first physical line
    /// keeps its indentation, continuations are trimmed and joined
    /// with single spaces, and spacing around the parameter list is
    /// normalized so the result matches the single-line rendering.
    fn assemble(&self) -> String {
        let mut assembled = self.raw[0].trim_end().to_string();
        for piece in &self.raw[1..] {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            assembled.push(' ');
            assembled.push_str(piece);
        }
        assembled
            .replace("( ", "(")
            .replace(" )", ")")
            .replace(" ,", ",")
    }
}

/// Weave documentation from `index` into `source`.
///
/// Returns the documented output and the post-run report. Weaving
/// itself cannot fail: unmatched lines and unmatched index entries are
/// fail-open by design.
pub fn weave<T: DocTarget + ?Sized>(
    source: &str,
    index: &DocumentationIndex,
    target: &T,
) -> (String, WeaveReport) {
    let mut out = String::new();
    let mut current_class = String::new();
    let mut pending_headers: Vec<String> = Vec::new();
    let mut pending_signature: Option<MultilineSignature> = None;
    let mut matched: HashSet<String> = HashSet::new();

    for raw_line in source.lines() {
        let line = raw_line.trim_end();

        if let Some(acc) = pending_signature.as_mut() {
            acc.push(line);
            if !line.contains(')') {
                continue;
            }
            let assembled = acc.assemble();
            pending_signature = None;
            emit_line(
                &assembled,
                index,
                target,
                &mut out,
                &mut current_class,
                &mut pending_headers,
                &mut matched,
            );
            continue;
        }

        if target.need_remove_line(line) {
            continue;
        }

        if target.need_skip_line(line) {
            flush_headers(&mut out, &mut pending_headers);
            out.push_str(line);
            out.push('\n');
            continue;
        }

        if target.is_header_line(line) {
            pending_headers.push(line.to_string());
            continue;
        }

        let fixed = target.fix_line(line);
        let fixed = fixed.trim_end();

        if fixed.contains('(') && !fixed.contains(')') {
            pending_signature = Some(MultilineSignature::new(fixed.to_string()));
            continue;
        }

        emit_line(
            fixed,
            index,
            target,
            &mut out,
            &mut current_class,
            &mut pending_headers,
            &mut matched,
        );
    }

    // Unterminated logical declaration at EOF: fall back to the raw lines.
    if let Some(acc) = pending_signature.take() {
        flush_headers(&mut out, &mut pending_headers);
        for piece in &acc.raw {
            out.push_str(piece);
            out.push('\n');
        }
    }
    flush_headers(&mut out, &mut pending_headers);

    let report = build_report(index, &matched);
    (out, report)
}

fn flush_headers(out: &mut String, pending_headers: &mut Vec<String>) {
    for header in pending_headers.drain(..) {
        out.push_str(&header);
        out.push('\n');
    }
}

/// Process one logical line: track the enclosing class, look up the
/// signature (class-qualified first), and emit documentation, buffered
/// headers, and the possibly replaced line.
fn emit_line<T: DocTarget + ?Sized>(
    line: &str,
    index: &DocumentationIndex,
    target: &T,
    out: &mut String,
    current_class: &mut String,
    pending_headers: &mut Vec<String>,
    matched: &mut HashSet<String>,
) {
    if let Some(class_name) = target.extract_class_name(line) {
        *current_class = class_name;
    }

    let qualified = format!("{current_class}{line}");
    let key = if index.contains(&qualified) {
        Some(qualified)
    } else if index.contains(line) {
        Some(line.to_string())
    } else {
        None
    };

    let Some(key) = key else {
        flush_headers(out, pending_headers);
        out.push_str(line);
        out.push('\n');
        return;
    };

    if let Some(entry) = index.doc(&key) {
        if !entry.doc.is_empty() {
            out.push_str(&entry.doc);
            out.push('\n');
        }
    }
    flush_headers(out, pending_headers);

    match index.replacement(&key) {
        Some(replacement) => out.push_str(replacement),
        None => out.push_str(line),
    }
    out.push('\n');

    matched.insert(key);
}

fn build_report(index: &DocumentationIndex, matched: &HashSet<String>) -> WeaveReport {
    let mut unmatched: Vec<(String, String)> = Vec::new();
    let mut owners: BTreeSet<&str> = BTreeSet::new();
    let mut matched_owners: BTreeSet<&str> = BTreeSet::new();

    for (signature, entry) in index.entries() {
        owners.insert(&entry.owner);
        if matched.contains(signature) {
            matched_owners.insert(&entry.owner);
        } else {
            unmatched.push((entry.owner.clone(), signature.to_string()));
        }
    }
    unmatched.sort();

    let unmatched_entities: Vec<String> = owners
        .difference(&matched_owners)
        .map(|owner| owner.to_string())
        .collect();

    for (owner, signature) in &unmatched {
        debug!(owner, signature, "documentation signature never matched");
    }
    if !unmatched_entities.is_empty() {
        warn!(
            entities = unmatched_entities.len(),
            "entities with zero matched lines: {}",
            unmatched_entities.join(", ")
        );
    }

    WeaveReport {
        total_entries: index.len(),
        matched_entries: index.len() - unmatched.len(),
        unmatched,
        unmatched_entities,
    }
}
