//! docweave-core - documentation weaving for schema-generated sources
//!
//! This crate weaves structural documentation into machine-generated
//! source code that mirrors an interface-definition schema. Given a
//! schema model (entities with described, typed fields) and the
//! undocumented source file an upstream generator rendered from that
//! schema, it produces a documented variant: every class, field, and
//! constructor gets a comment block derived from the schema text,
//! field names are normalized to the target naming convention, and
//! schema-only artifacts are filtered out.
//!
//! # Architecture
//!
//! The run is a two-stage pipeline, single-threaded and single-pass:
//!
//! ```text
//! Schema Model ─→ [build_index] ─→ DocumentationIndex
//!                                        │
//! Generated Source ─────────────→ [weave] ─→ Documented Source
//! ```
//!
//! - [`index::build_index`] simulates the upstream generator's exact
//!   rendering for every declaration and keys documentation blocks by
//!   that literal line text.
//! - [`weaver::weave`] streams the generated source line by line,
//!   dropping stale comments, rewriting known lines, and injecting
//!   matched documentation immediately before each matched line.
//! - [`target::DocTarget`] is the capability set a target-language
//!   flavor implements; [`target::JavadocTarget`] is the Java flavor.
//!
//! Lookups are exact string equality by design. When the upstream
//! rendering format drifts, affected lines are kept undocumented and
//! the drift is surfaced in [`weaver::WeaveReport`]; malformed schema
//! types, by contrast, abort the run before any output is produced.
//!
//! # Example
//!
//! ```
//! use docweave_core::{
//!     JavadocTarget, SchemaModel, WeaveConfig, build_index, weave,
//! };
//!
//! # fn main() -> docweave_core::WeaveResult<()> {
//! let model: SchemaModel = serde_json::from_str(
//!     r#"{ "entities": [] }"#,
//! ).expect("valid model");
//!
//! let target = JavadocTarget::new(WeaveConfig::default());
//! let index = build_index(&model, &target)?;
//! let (documented, report) = weave("public class TdApi {\n", &index, &target);
//!
//! assert!(documented.starts_with("/**"));
//! assert!(!report.is_complete()); // only one boilerplate line matched
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod naming;
pub mod target;
pub mod weaver;

pub use config::{ARRAY_ANNOTATION_MIN_VERSION, WeaveConfig};
pub use error::{WeaveError, WeaveResult};
pub use index::{DocumentationIndex, GLOBAL_OWNER, IndexBuilder, build_index};
pub use model::{Entity, EntityKind, Field, SchemaModel};
pub use target::{DocTarget, JavadocTarget};
pub use weaver::{WeaveReport, weave};
