//! Error types for documentation weaving

use thiserror::Error;

/// Result type alias for weaving operations
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Error type for weaving operations
///
/// All variants are fatal: the run aborts without persisting an output
/// file. Unmatched generated-source lines are deliberately *not* an
/// error; they are tolerated (fail-open) and surfaced through
/// [`WeaveReport`](crate::weaver::WeaveReport).
#[derive(Error, Debug)]
pub enum WeaveError {
    /// Malformed or disallowed schema type text
    #[error("wrong schema type `{ty}`: {reason}")]
    SchemaType { ty: String, reason: String },

    /// Two documentation entries computed the same literal signature
    #[error(
        "duplicate documentation signature `{signature}` (registered by `{existing_owner}`, \
         also computed for `{new_owner}`)"
    )]
    SignatureCollision {
        signature: String,
        existing_owner: String,
        new_owner: String,
    },
}

impl WeaveError {
    /// Shorthand for a schema type error
    pub fn schema_type(ty: impl Into<String>, reason: impl Into<String>) -> Self {
        WeaveError::SchemaType {
            ty: ty.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn schema_type___display___names_the_offending_type() {
        let err = WeaveError::schema_type("Int32", "target-language spelling");

        assert_eq!(
            err.to_string(),
            "wrong schema type `Int32`: target-language spelling"
        );
    }

    #[test]
    fn signature_collision___display___names_both_owners() {
        let err = WeaveError::SignatureCollision {
            signature: "    public static class Foo extends Object {".to_string(),
            existing_owner: "foo".to_string(),
            new_owner: "fooCopy".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("foo"));
        assert!(message.contains("fooCopy"));
        assert!(message.contains("public static class Foo"));
    }
}
