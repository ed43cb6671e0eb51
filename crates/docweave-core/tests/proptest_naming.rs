//! Property-based tests for naming and type mapping.

#![allow(clippy::unwrap_used)]

use docweave_core::naming::{capitalize, derive_class_name, to_camel_case};
use docweave_core::{JavadocTarget, WeaveConfig};
use docweave_core::target::DocTarget;
use proptest::prelude::*;

fn target() -> JavadocTarget {
    JavadocTarget::new(WeaveConfig::default())
}

proptest! {
    /// Nesting `vector<...>` N levels deep yields exactly N array
    /// suffixes around the element type's own mapping.
    #[test]
    fn vector_nesting_maps_to_same_depth(depth in 0usize..8) {
        let mut ty = String::from("int32");
        for _ in 0..depth {
            ty = format!("vector<{ty}>");
        }

        let mapped = target().type_name(&ty).unwrap();

        prop_assert_eq!(mapped, format!("int{}", "[]".repeat(depth)));
    }

    /// Snake_case identifiers come out with no underscore followed by
    /// a letter, and converting twice is the same as converting once.
    #[test]
    fn camel_case_is_stable(s in "[a-z]{1,8}(_[a-z]{1,8}){0,4}") {
        let once = to_camel_case(&s);
        let twice = to_camel_case(&once);

        prop_assert_eq!(&once, &twice);
        let bytes = once.as_bytes();
        for i in 0..bytes.len().saturating_sub(1) {
            prop_assert!(
                !(bytes[i] == b'_' && bytes[i + 1].is_ascii_alphabetic()),
                "residual snake_case in {once}"
            );
        }
    }

    /// Class derivation concatenates one capitalized piece per dot
    /// segment, so the result length is the input minus its dots.
    #[test]
    fn class_name_consumes_every_segment(segments in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..5)) {
        let dotted = segments.join(".");

        let class_name = derive_class_name(&dotted);

        let expected: String = segments.iter().map(|s| capitalize(s)).collect();
        prop_assert_eq!(class_name, expected);
    }

    /// Schema entity references map through class derivation, so the
    /// mapped name never contains a dot.
    #[test]
    fn entity_reference_mapping_strips_dots(segments in prop::collection::vec("[a-z][a-z0-9]{0,6}", 1..4)) {
        let dotted = segments.join(".");
        prop_assume!(dotted != "double" && dotted != "string" && dotted != "bytes");
        prop_assume!(!dotted.starts_with("vector") && dotted != "int32"
            && dotted != "int53" && dotted != "int64" && dotted != "int" && dotted != "long" && dotted != "bool");

        let mapped = target().type_name(&dotted).unwrap();

        prop_assert!(!mapped.contains('.'));
        prop_assert!(mapped.chars().next().unwrap().is_ascii_uppercase());
    }
}
