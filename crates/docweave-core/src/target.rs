//! Target-language capability set.
//!
//! A [`DocTarget`] bundles everything the generic engine needs to know
//! about one target language flavor: how to escape documentation text,
//! how to map schema names and types, how to classify lines of the
//! generated source, and which exact signatures to register
//! documentation under. The generic driver
//! ([`build_index`](crate::index::build_index) and
//! [`weave`](crate::weaver::weave)) holds a reference to the
//! capability set and never inspects which variant it has.

use crate::error::WeaveResult;
use crate::index::IndexBuilder;
use crate::model::Field;

pub mod javadoc;

pub use javadoc::JavadocTarget;

/// Capabilities of one target-language documentation flavor.
pub trait DocTarget {
    // ------------------------------------------------------------------
    // Naming and type mapping
    // ------------------------------------------------------------------

    /// Escape description text for safe embedding in a comment block.
    fn escape_documentation(&self, doc: &str) -> String;

    /// Normalize a raw schema field name to the target convention.
    fn field_name(&self, name: &str) -> String;

    /// Map a schema type text to a target type name.
    ///
    /// Fails on malformed or disallowed schema types; the whole run
    /// aborts rather than emitting corrupted documentation.
    fn type_name(&self, ty: &str) -> WeaveResult<String>;

    /// Derive a target class name from a (possibly dotted) schema name.
    fn class_name(&self, ty: &str) -> String;

    /// Name of the implicit base class for types or functions.
    fn base_class_name(&self, is_function: bool) -> &'static str;

    // ------------------------------------------------------------------
    // Line classification
    // ------------------------------------------------------------------

    /// Whether the line must be discarded entirely (pre-existing
    /// comment lines and previously injected nullability artifacts;
    /// they are regenerated, which is what makes a second pass
    /// idempotent).
    fn need_remove_line(&self, line: &str) -> bool;

    /// Whether the line is not a documentation candidate and is
    /// emitted verbatim without any lookup.
    fn need_skip_line(&self, line: &str) -> bool;

    /// Whether the line is a structural header (e.g. an override
    /// marker) that must end up *below* an injected comment block.
    fn is_header_line(&self, line: &str) -> bool;

    /// Extract the class name if the line opens a class declaration.
    /// Used to qualify field signatures by their enclosing class.
    fn extract_class_name(&self, line: &str) -> Option<String>;

    /// Apply cosmetic fixups to a line before signature lookup.
    fn fix_line(&self, line: &str) -> String;

    // ------------------------------------------------------------------
    // Documentation registration
    // ------------------------------------------------------------------

    /// Register fixed, schema-independent boilerplate documentation.
    fn add_global_documentation(&self, builder: &mut IndexBuilder) -> WeaveResult<()>;

    /// Register documentation for an abstract base class.
    fn add_abstract_class_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        description: &str,
    ) -> WeaveResult<()>;

    /// Register documentation for a concrete class. Functions carry
    /// the mapped name of their return type.
    fn add_class_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        base_class_name: &str,
        description: &str,
        return_type: Option<&str>,
    ) -> WeaveResult<()>;

    /// Register documentation (and, where configured, a nullability
    /// replacement line) for one field.
    fn add_field_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        field: &Field,
    ) -> WeaveResult<()>;

    /// Register documentation for the no-argument constructor.
    fn add_default_constructor_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
    ) -> WeaveResult<()>;

    /// Register documentation for the all-fields constructor, listing
    /// every field in schema declaration order.
    fn add_full_constructor_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        fields: &[Field],
    ) -> WeaveResult<()>;
}
