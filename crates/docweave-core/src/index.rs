//! Documentation index: exact line signatures mapped to documentation
//! blocks and line replacements.
//!
//! The index is built once per run from the schema model by computing,
//! for every declaration, the exact literal line the upstream source
//! generator renders for it. Lookups during weaving are plain string
//! equality; if the generator's rendering format drifts, signatures
//! silently stop matching and the affected lines are kept undocumented
//! (fail-open). [`WeaveReport`](crate::weaver::WeaveReport) surfaces
//! that drift after the run.
//!
//! Field signatures are qualified by the enclosing class name (the
//! class name is prepended to the field line text) because the same
//! field declaration text can occur in several classes.

use std::collections::HashMap;

use crate::error::{WeaveError, WeaveResult};
use crate::model::SchemaModel;
use crate::target::DocTarget;

/// A documentation block registered for one signature.
#[derive(Debug, Clone)]
pub struct DocEntry {
    /// The comment block emitted immediately before the matched line.
    /// May be empty: the signature is then tracked but nothing is
    /// emitted (used for lines that only carry a replacement).
    pub doc: String,

    /// Schema entity the entry belongs to, or `<global>` for fixed
    /// boilerplate registered once per run.
    pub owner: String,
}

/// Immutable documentation index, queried read-only during weaving.
#[derive(Debug, Default)]
pub struct DocumentationIndex {
    docs: HashMap<String, DocEntry>,
    replacements: HashMap<String, String>,
}

impl DocumentationIndex {
    /// Look up the documentation entry for an exact signature.
    pub fn doc(&self, signature: &str) -> Option<&DocEntry> {
        self.docs.get(signature)
    }

    /// Look up the replacement line for an exact signature.
    pub fn replacement(&self, signature: &str) -> Option<&str> {
        self.replacements.get(signature).map(String::as_str)
    }

    /// Whether any entry (documentation or replacement) is registered
    /// under the signature.
    pub fn contains(&self, signature: &str) -> bool {
        self.docs.contains_key(signature) || self.replacements.contains_key(signature)
    }

    /// Number of documentation entries.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the index holds no documentation entries.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over all (signature, entry) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DocEntry)> {
        self.docs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Mutable builder handed to [`DocTarget`] registration hooks.
pub struct IndexBuilder {
    index: DocumentationIndex,
    owner: String,
}

/// Owner name used for schema-independent boilerplate entries.
pub const GLOBAL_OWNER: &str = "<global>";

impl IndexBuilder {
    /// Create an empty builder; entries are attributed to
    /// [`GLOBAL_OWNER`] until [`set_owner`](Self::set_owner) is called.
    pub fn new() -> Self {
        Self {
            index: DocumentationIndex::default(),
            owner: GLOBAL_OWNER.to_string(),
        }
    }

    /// Consume the builder, yielding the immutable index.
    pub fn finish(self) -> DocumentationIndex {
        self.index
    }

    /// Set the entity name attributed to subsequently added entries.
    pub fn set_owner(&mut self, owner: &str) {
        self.owner = owner.to_string();
    }

    /// Register a documentation block for an exact signature.
    ///
    /// Signatures must be unique within one run; a collision indicates
    /// a bug in signature construction and aborts index building.
    pub fn add_documentation(
        &mut self,
        signature: impl Into<String>,
        doc: impl Into<String>,
    ) -> WeaveResult<()> {
        let signature = signature.into();
        if let Some(existing) = self.index.docs.get(&signature) {
            return Err(WeaveError::SignatureCollision {
                signature,
                existing_owner: existing.owner.clone(),
                new_owner: self.owner.clone(),
            });
        }
        self.index.docs.insert(
            signature,
            DocEntry {
                doc: doc.into(),
                owner: self.owner.clone(),
            },
        );
        Ok(())
    }

    /// Register a replacement line for an exact signature.
    pub fn add_line_replacement(
        &mut self,
        signature: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.index
            .replacements
            .insert(signature.into(), replacement.into());
    }
}

/// Build the documentation index for a schema model.
///
/// Registers the target's fixed boilerplate once, then walks every
/// entity: class documentation (abstract or concrete), per-field
/// documentation, and default/full constructor documentation. Any
/// schema type error or signature collision aborts construction.
pub fn build_index<T: DocTarget + ?Sized>(
    model: &SchemaModel,
    target: &T,
) -> WeaveResult<DocumentationIndex> {
    let mut builder = IndexBuilder::new();

    target.add_global_documentation(&mut builder)?;

    for entity in &model.entities {
        builder.set_owner(&entity.name);
        let class_name = target.class_name(&entity.name);

        if entity.is_abstract() {
            target.add_abstract_class_documentation(&mut builder, &class_name, &entity.description)?;
            continue;
        }

        let base_class_name = match &entity.base {
            Some(base) => target.class_name(base),
            None => target.base_class_name(entity.is_function()).to_string(),
        };
        let return_type = entity.return_type().map(|ty| target.class_name(ty));
        target.add_class_documentation(
            &mut builder,
            &class_name,
            &base_class_name,
            &entity.description,
            return_type.as_deref(),
        )?;

        for field in &entity.fields {
            target.add_field_documentation(&mut builder, &class_name, field)?;
        }

        target.add_default_constructor_documentation(&mut builder, &class_name)?;

        // A zero-field full constructor would collide with the default
        // constructor signature.
        if !entity.fields.is_empty() {
            target.add_full_constructor_documentation(&mut builder, &class_name, &entity.fields)?;
        }
    }

    Ok(builder.finish())
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
