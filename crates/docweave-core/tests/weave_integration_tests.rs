//! End-to-end weaving tests against a realistic generated source file.

#![allow(non_snake_case)]
#![allow(clippy::unwrap_used)]

use docweave_core::{
    Entity, EntityKind, Field, JavadocTarget, SchemaModel, WeaveConfig, WeaveError, build_index,
    weave,
};

fn field(name: &str, ty: &str, description: &str, nullable: bool) -> Field {
    Field {
        name: name.to_string(),
        ty: ty.to_string(),
        description: description.to_string(),
        nullable,
    }
}

/// A small schema: one abstract base, one concrete variant, one function.
fn model() -> SchemaModel {
    SchemaModel {
        entities: vec![
            Entity {
                name: "MessageContent".to_string(),
                description: "Contains the content of a message.".to_string(),
                kind: EntityKind::Type { is_abstract: true },
                base: None,
                fields: vec![],
            },
            Entity {
                name: "messageText".to_string(),
                description: "A text message.".to_string(),
                kind: EntityKind::Type { is_abstract: false },
                base: Some("MessageContent".to_string()),
                fields: vec![
                    field("text", "string", "Text of the message.", false),
                    field(
                        "entities",
                        "vector<textEntity>",
                        "Entities contained in the text.",
                        true,
                    ),
                ],
            },
            Entity {
                name: "getMessage".to_string(),
                description: "Returns information about a message.".to_string(),
                kind: EntityKind::Function {
                    return_type: "message".to_string(),
                },
                base: None,
                fields: vec![
                    field("param_chat_id", "int53", "Identifier of the chat_id owner.", false),
                    field("message_id", "int53", "Identifier of the message.", false),
                ],
            },
        ],
    }
}

const GENERATED: &str = r#"package org.drinkless.tdlib;

import java.util.Arrays;

public class TdApi {
    public abstract static class Object {
        public abstract int getConstructor();

        @Override
        public String toString() {
            return "Object";
        }
    }

    public abstract static class Function extends Object {
    }

    public abstract static class MessageContent extends Object {
    }

    public static class MessageText extends MessageContent {
        public String text;
        public TextEntity[] entities;

        public static final int CONSTRUCTOR = 1989037971;

        public MessageText() {
        }

        public MessageText(String text, TextEntity[] entities) {
            this.text = text;
            this.entities = entities;
        }

        @Override
        public int getConstructor() {
            return CONSTRUCTOR;
        }
    }

    public static class GetMessage extends Function {
        public long chatId;
        public long messageId;

        public static final int CONSTRUCTOR = -1821196160;

        public GetMessage() {
        }

        public GetMessage(long chatId, long messageId) {
            this.chatId = chatId;
            this.messageId = messageId;
        }

        @Override
        public int getConstructor() {
            return CONSTRUCTOR;
        }
    }
}
"#;

fn weave_with(config: WeaveConfig) -> (String, docweave_core::WeaveReport) {
    let target = JavadocTarget::new(config);
    let index = build_index(&model(), &target).unwrap();
    weave(GENERATED, &index, &target)
}

#[test]
fn weave___full_file___documents_every_entity() {
    let (out, report) = weave_with(WeaveConfig::default());

    // Global boilerplate.
    assert!(out.contains(" * This class contains as static nested classes all other TDLib interface\n"));
    assert!(out.contains("     * This class is a base class for all TDLib interface classes.\n"));
    assert!(out.contains("     * This class is a base class for all TDLib interface function-classes.\n"));
    assert!(out.contains("         * @return string representation of the object.\n"));
    assert!(out.contains("         * Identifier uniquely determining type of the object.\n"));
    assert!(out.contains("         * @return this.CONSTRUCTOR\n"));

    // Abstract base class.
    assert!(out.contains("     * This class is an abstract base class.\n"));
    assert!(out.contains("     * Contains the content of a message.\n"));

    // Concrete variant extends its abstract base, not Object.
    assert!(out.contains("    public static class MessageText extends MessageContent {\n"));
    assert!(out.contains("     * A text message.\n"));
    assert!(out.contains("         * Text of the message.\n"));

    // Function class documents its return type.
    assert!(out.contains("     * Returns information about a message.\n"));
    assert!(out.contains("     * <p> Returns {@link Message Message} </p>\n"));

    // Constructor docs.
    assert!(out.contains("         * Default constructor.\n"));
    assert!(out.contains("         * @param chatId Identifier of the chatId owner.\n"));
    assert!(out.contains("         * @param messageId Identifier of the message.\n"));

    // Constant declarations lose their initializers.
    assert!(!out.contains("= 1989037971"));
    assert!(!out.contains("= -1821196160"));

    // Every registered signature matched.
    assert!(report.is_complete(), "unmatched: {:?}", report.unmatched);
    assert!(report.unmatched_entities.is_empty());
}

#[test]
fn weave___full_file___keeps_structural_lines_verbatim() {
    let (out, _) = weave_with(WeaveConfig::default());

    assert!(out.contains("package org.drinkless.tdlib;\n"));
    assert!(out.contains("import java.util.Arrays;\n"));
    assert!(out.contains("            return CONSTRUCTOR;\n"));
    assert!(out.ends_with("}\n"));
}

#[test]
fn weave___override_marker___sits_between_doc_and_declaration() {
    let (out, _) = weave_with(WeaveConfig::default());

    let expected = "         * @return this.CONSTRUCTOR\n         */\n        @Override\n        public int getConstructor() {\n";
    assert!(out.contains(expected));
}

#[test]
fn weave___twice___produces_identical_output() {
    let config = WeaveConfig::new("org.jetbrains.annotations.Nullable", "@Nullable", 8);
    let target = JavadocTarget::new(config);
    let index = build_index(&model(), &target).unwrap();

    let (once, _) = weave(GENERATED, &index, &target);
    let (twice, report) = weave(&once, &index, &target);

    assert_eq!(once, twice);
    assert!(report.is_complete());
}

#[test]
fn weave___nullability_enabled___annotates_and_imports() {
    let config = WeaveConfig::new("org.jetbrains.annotations.Nullable", "@Nullable", 7);
    let (out, report) = weave_with(config);

    assert!(out.contains("import org.jetbrains.annotations.Nullable;\nimport java.util.Arrays;\n"));
    // entities is an array-typed field: below the version threshold it
    // stays unannotated even though it is nullable.
    assert!(out.contains("        public TextEntity[] entities;\n"));
    assert!(!out.contains("@Nullable TextEntity[]"));
    assert!(report.is_complete());
}

#[test]
fn weave___nullability_at_version_threshold___annotates_array_fields() {
    let config = WeaveConfig::new("org.jetbrains.annotations.Nullable", "@Nullable", 8);
    let (out, _) = weave_with(config);

    assert!(out.contains("        public @Nullable TextEntity[] entities;\n"));
}

#[test]
fn weave___multiline_constructor___assembles_all_parameters() {
    let source = r#"    public static class GetMessage extends Function {
        public GetMessage(
                long chatId,
                long messageId) {
            this.chatId = chatId;
            this.messageId = messageId;
        }
    }
"#;
    let target = JavadocTarget::new(WeaveConfig::default());
    let index = build_index(&model(), &target).unwrap();
    let (out, _) = weave(source, &index, &target);

    assert!(out.contains("         * Constructor for initialization of all fields.\n"));
    assert!(out.contains("        public GetMessage(long chatId, long messageId) {\n"));
}

#[test]
fn build_index___reserved_target_spelling___aborts() {
    let mut model = model();
    model.entities[1].fields[0].ty = "String".to_string();
    let target = JavadocTarget::new(WeaveConfig::default());

    let err = build_index(&model, &target).unwrap_err();

    assert!(matches!(err, WeaveError::SchemaType { .. }));
    assert!(err.to_string().contains("String"));
}

#[test]
fn build_index___duplicate_entity___reports_collision_with_both_names() {
    let mut model = model();
    let mut duplicate = model.entities[1].clone();
    duplicate.name = "message.text".to_string(); // same derived class name
    model.entities.push(duplicate);
    let target = JavadocTarget::new(WeaveConfig::default());

    let err = build_index(&model, &target).unwrap_err();

    match err {
        WeaveError::SignatureCollision {
            existing_owner,
            new_owner,
            ..
        } => {
            assert_eq!(existing_owner, "messageText");
            assert_eq!(new_owner, "message.text");
        }
        other => panic!("expected SignatureCollision, got {other}"),
    }
}
