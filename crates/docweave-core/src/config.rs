//! Weaving configuration

use serde::{Deserialize, Serialize};

/// Minimum target platform version at which array-typed fields may
/// carry the nullability annotation.
pub const ARRAY_ANNOTATION_MIN_VERSION: u32 = 8;

/// Configuration for one weaving run.
///
/// Built once by the driver and threaded explicitly through index
/// construction and weaving; never ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaveConfig {
    /// Fully qualified name of the annotation type used to mark
    /// nullable fields (e.g. `org.jetbrains.annotations.Nullable`).
    /// Empty disables the nullability feature entirely.
    #[serde(default)]
    pub nullable_type: String,

    /// Literal annotation token inserted before nullable field types
    /// (e.g. `@Nullable`).
    #[serde(default)]
    pub nullable_annotation: String,

    /// Target platform version. Array-typed nullable fields are
    /// annotated only when this is at least
    /// [`ARRAY_ANNOTATION_MIN_VERSION`].
    #[serde(default = "default_java_version")]
    pub java_version: u32,
}

fn default_java_version() -> u32 {
    7
}

impl Default for WeaveConfig {
    fn default() -> Self {
        Self {
            nullable_type: String::new(),
            nullable_annotation: String::new(),
            java_version: default_java_version(),
        }
    }
}

impl WeaveConfig {
    /// Create a configuration, trimming both annotation strings.
    pub fn new(
        nullable_type: impl Into<String>,
        nullable_annotation: impl Into<String>,
        java_version: u32,
    ) -> Self {
        Self {
            nullable_type: nullable_type.into().trim().to_string(),
            nullable_annotation: nullable_annotation.into().trim().to_string(),
            java_version,
        }
    }

    /// Whether nullability markers are enabled at all.
    pub fn nullability_enabled(&self) -> bool {
        !self.nullable_type.is_empty()
    }
}
