//! Naming convention utilities for documentation weaving.
//!
//! This module provides conversions between the schema's naming
//! conventions (snake_case identifiers, dot-separated type names) and
//! the target language's conventions (camelCase fields, PascalCase
//! concatenated class names).

/// Convert snake_case to camelCase.
///
/// Every `_x` two-character sequence, where `x` is an ASCII letter,
/// becomes the uppercase of `x`. Underscores not followed by a letter
/// are kept as-is, so the transform is total and safe to apply to
/// prose that merely mentions identifiers.
///
/// # Examples
///
/// ```
/// use docweave_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("chat_id"), "chatId");
/// assert_eq!(to_camel_case("last_name"), "lastName");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_alphabetic() {
                    result.extend(next.to_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}

/// Capitalize the first letter of a string, leaving the rest unchanged.
///
/// # Examples
///
/// ```
/// use docweave_core::naming::capitalize;
///
/// assert_eq!(capitalize("user"), "User");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Derive a target class name from a dotted schema type name.
///
/// Trailing whitespace, newlines, and semicolons are trimmed, then each
/// dot-separated segment is capitalized and the segments concatenated.
///
/// # Examples
///
/// ```
/// use docweave_core::naming::derive_class_name;
///
/// assert_eq!(derive_class_name("updateNewChat"), "UpdateNewChat");
/// assert_eq!(derive_class_name("td.foo.bar"), "TdFooBar");
/// assert_eq!(derive_class_name("chatMembers;\n"), "ChatMembers");
/// ```
pub fn derive_class_name(dotted: &str) -> String {
    dotted
        .trim_matches(|c: char| c == ';' || c == '\n' || c == ' ')
        .split('.')
        .map(capitalize)
        .collect()
}
