//! Javadoc target: weaves Javadoc blocks into a generated `TdApi.java`.
//!
//! Signatures registered here must reproduce the upstream Java source
//! generator's rendering byte-for-byte (four-space class indentation,
//! eight-space member indentation). That rendering format is an
//! explicit contract: if it drifts, lookups fail open and the run
//! reports the affected entities instead of corrupting the output.

use crate::config::{ARRAY_ANNOTATION_MIN_VERSION, WeaveConfig};
use crate::error::{WeaveError, WeaveResult};
use crate::index::IndexBuilder;
use crate::model::Field;
use crate::naming::{derive_class_name, to_camel_case};
use crate::target::DocTarget;

/// Java type spellings that must never appear as schema types.
const RESERVED_TARGET_SPELLINGS: &[&str] = &[
    "bool", "int", "long", "Int", "Long", "Int32", "Int53", "Int64", "Double", "String", "Bytes",
];

/// Render a Javadoc comment block at the given indentation.
///
/// Empty body lines become a bare `*` separator line.
fn doc_block<S: AsRef<str>>(indent: &str, body: &[S]) -> String {
    let mut out = format!("{indent}/**\n");
    for line in body {
        let line = line.as_ref();
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */"));
    out
}

/// The Java documentation flavor.
#[derive(Debug, Clone)]
pub struct JavadocTarget {
    config: WeaveConfig,
}

impl JavadocTarget {
    pub fn new(config: WeaveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WeaveConfig {
        &self.config
    }

    /// The import line the nullable-type import is attached to.
    const ARRAYS_IMPORT: &'static str = "import java.util.Arrays;";
}

impl DocTarget for JavadocTarget {
    fn escape_documentation(&self, doc: &str) -> String {
        let doc = doc
            .replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace("*/", "*&#47;");
        // Descriptions reference schema identifiers inline; carry them
        // over in the target naming convention.
        to_camel_case(&doc)
    }

    fn field_name(&self, name: &str) -> String {
        let name = name.strip_prefix("param_").unwrap_or(name);
        to_camel_case(name.trim())
    }

    fn type_name(&self, ty: &str) -> WeaveResult<String> {
        match ty {
            "Bool" => Ok("boolean".to_string()),
            "int32" => Ok("int".to_string()),
            "int53" | "int64" => Ok("long".to_string()),
            "double" => Ok(ty.to_string()),
            "string" => Ok("String".to_string()),
            "bytes" => Ok("byte[]".to_string()),
            _ if RESERVED_TARGET_SPELLINGS.contains(&ty) => Err(WeaveError::schema_type(
                ty,
                "target-language spelling is not a valid schema type",
            )),
            _ => {
                if let Some(rest) = ty.strip_prefix("vector") {
                    let inner = rest
                        .strip_prefix('<')
                        .and_then(|r| r.strip_suffix('>'))
                        .ok_or_else(|| WeaveError::schema_type(ty, "malformed vector subtype"))?;
                    return Ok(format!("{}[]", self.type_name(inner)?));
                }

                if ty.chars().any(|c| !c.is_ascii_alphanumeric() && c != '.') {
                    return Err(WeaveError::schema_type(
                        ty,
                        "illegal character in type reference",
                    ));
                }
                Ok(derive_class_name(ty))
            }
        }
    }

    fn class_name(&self, ty: &str) -> String {
        derive_class_name(ty)
    }

    fn base_class_name(&self, is_function: bool) -> &'static str {
        if is_function { "Function" } else { "Object" }
    }

    fn need_remove_line(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("/**")
            || trimmed.starts_with('*')
            || (self.config.nullability_enabled()
                && line
                    .find(&self.config.nullable_type)
                    .is_some_and(|pos| pos > 0))
    }

    fn need_skip_line(&self, line: &str) -> bool {
        let line = line.trim();
        !line.starts_with("public")
            && !(self.config.nullability_enabled() && line == Self::ARRAYS_IMPORT)
            && !self.is_header_line(line)
    }

    fn is_header_line(&self, line: &str) -> bool {
        line.trim() == "@Override"
    }

    fn extract_class_name(&self, line: &str) -> Option<String> {
        if line.find("public static class ").is_some_and(|pos| pos > 0) {
            return line.trim().split(' ').nth(3).map(str::to_string);
        }
        None
    }

    fn fix_line(&self, line: &str) -> String {
        if line.find("CONSTRUCTOR = ").is_some_and(|pos| pos > 0) {
            if let Some(eq) = line.find('=') {
                return line[..eq].to_string();
            }
        }

        if self.config.nullable_annotation.is_empty() {
            line.to_string()
        } else {
            line.replace(&format!("{} ", self.config.nullable_annotation), "")
        }
    }

    fn add_global_documentation(&self, builder: &mut IndexBuilder) -> WeaveResult<()> {
        builder.add_documentation(
            "public class TdApi {",
            doc_block(
                "",
                &[
                    "This class contains as static nested classes all other TDLib interface",
                    "type-classes and function-classes.",
                    "<p>",
                    "It has no inner classes, functions or public members.",
                ],
            ),
        )?;

        builder.add_documentation(
            "    public abstract static class Object {",
            doc_block(
                "    ",
                &["This class is a base class for all TDLib interface classes."],
            ),
        )?;

        builder.add_documentation(
            "        public abstract int getConstructor();",
            doc_block(
                "        ",
                &["@return identifier uniquely determining type of the object."],
            ),
        )?;

        builder.add_documentation(
            "        public String toString() {",
            doc_block("        ", &["@return string representation of the object."]),
        )?;

        builder.add_documentation(
            "    public abstract static class Function extends Object {",
            doc_block(
                "    ",
                &["This class is a base class for all TDLib interface function-classes."],
            ),
        )?;

        builder.add_documentation(
            "        public static final int CONSTRUCTOR",
            doc_block(
                "        ",
                &["Identifier uniquely determining type of the object."],
            ),
        )?;

        builder.add_documentation(
            "        public int getConstructor() {",
            doc_block("        ", &["@return this.CONSTRUCTOR"]),
        )?;

        if self.config.nullability_enabled() {
            builder.add_documentation(Self::ARRAYS_IMPORT, "")?;
            builder.add_line_replacement(
                Self::ARRAYS_IMPORT,
                format!(
                    "import {};\n{}",
                    self.config.nullable_type,
                    Self::ARRAYS_IMPORT
                ),
            );
        }

        Ok(())
    }

    fn add_abstract_class_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        description: &str,
    ) -> WeaveResult<()> {
        builder.add_documentation(
            format!("    public abstract static class {class_name} extends Object {{"),
            doc_block(
                "    ",
                &[
                    "This class is an abstract base class.".to_string(),
                    self.escape_documentation(description),
                ],
            ),
        )
    }

    fn add_class_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        base_class_name: &str,
        description: &str,
        return_type: Option<&str>,
    ) -> WeaveResult<()> {
        let mut body = vec![self.escape_documentation(description)];
        if let Some(ty) = return_type {
            body.push(String::new());
            body.push(format!("<p> Returns {{@link {ty} {ty}}} </p>"));
        }

        builder.add_documentation(
            format!("    public static class {class_name} extends {base_class_name} {{"),
            doc_block("    ", &body),
        )
    }

    fn add_field_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        field: &Field,
    ) -> WeaveResult<()> {
        let field_name = self.field_name(&field.name);
        let type_name = self.type_name(&field.ty)?;
        let field_info = self.escape_documentation(&field.description);

        // Field declaration text is not unique across classes; qualify
        // the signature with the enclosing class name.
        let full_line = format!("{class_name}        public {type_name} {field_name};");
        builder.add_documentation(full_line.clone(), doc_block("        ", &[field_info]))?;

        if field.nullable
            && !self.config.nullable_annotation.is_empty()
            && (self.config.java_version >= ARRAY_ANNOTATION_MIN_VERSION
                || !type_name.ends_with(']'))
        {
            builder.add_line_replacement(
                full_line,
                format!(
                    "        public {} {type_name} {field_name};",
                    self.config.nullable_annotation
                ),
            );
        }

        Ok(())
    }

    fn add_default_constructor_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
    ) -> WeaveResult<()> {
        builder.add_documentation(
            format!("        public {class_name}() {{"),
            doc_block("        ", &["Default constructor."]),
        )
    }

    fn add_full_constructor_documentation(
        &self,
        builder: &mut IndexBuilder,
        class_name: &str,
        fields: &[Field],
    ) -> WeaveResult<()> {
        let mut full_constructor = format!("        public {class_name}(");
        let mut body = vec![
            "Constructor for initialization of all fields.".to_string(),
            String::new(),
        ];

        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                full_constructor.push_str(", ");
            }
            let type_name = self.type_name(&field.ty)?;
            let field_name = self.field_name(&field.name);
            full_constructor.push_str(&format!("{type_name} {field_name}"));
            body.push(format!(
                "@param {field_name} {}",
                self.escape_documentation(&field.description)
            ));
        }
        full_constructor.push_str(") {");

        builder.add_documentation(full_constructor, doc_block("        ", &body))
    }
}
