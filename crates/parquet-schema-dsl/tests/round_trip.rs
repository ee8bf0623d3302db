use parquet_schema_dsl::{parse, print, print_with_indent, SchemaNode};

const FLAT: &str = include_str!("data/flat.schema");
const NESTED: &str = include_str!("data/nested.schema");
const SCENARIO: &str = include_str!("data/scenario.schema");

/// Helper: parse canonical text, print it, and require byte-identical output.
fn assert_round_trip(source: &str) -> SchemaNode {
    let root = parse(source).unwrap_or_else(|e| panic!("parse failed: {e}\n\nSource:\n{source}"));
    let printed = print(&root);
    assert_eq!(
        printed, source,
        "printed text differs from source\n\nPrinted:\n{printed}"
    );
    root
}

/// Collects every field id in depth-first order, `None` included.
fn field_ids(node: &SchemaNode, out: &mut Vec<(String, Option<i32>)>) {
    out.push((node.name().to_string(), node.field_id()));
    if let Some(group) = node.as_group() {
        for child in &group.children {
            field_ids(child, out);
        }
    }
}

#[test]
fn round_trip_flat_fixture() {
    let root = assert_round_trip(FLAT);
    assert_eq!(root.as_group().unwrap().children.len(), 13);
}

#[test]
fn round_trip_nested_fixture() {
    let root = assert_round_trip(NESTED);
    assert_eq!(root.depth(), 5);
}

#[test]
fn round_trip_scenario_fixture() {
    assert_round_trip(SCENARIO);
}

#[test]
fn round_trip_minimal() {
    assert_round_trip("required group schema {\n}\n");
}

#[test]
fn round_trip_optional_root() {
    assert_round_trip("optional group m {\n  repeated boolean flags;\n}\n");
}

#[test]
fn reprint_is_a_fixed_point() {
    for source in [FLAT, NESTED, SCENARIO] {
        let once = print(&parse(source).unwrap());
        let twice = print(&parse(&once).unwrap());
        assert_eq!(once, twice);
    }
}

#[test]
fn parsing_is_deterministic() {
    for source in [FLAT, NESTED, SCENARIO] {
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }
}

#[test]
fn field_ids_survive_round_trip() {
    let root = parse(FLAT).unwrap();
    let mut ids = Vec::new();
    field_ids(&root, &mut ids);

    assert!(ids.contains(&("flat_schema".to_string(), Some(1))));
    assert!(ids.contains(&("count".to_string(), Some(7))));
    assert!(ids.contains(&("digest".to_string(), Some(12))));
    assert!(ids.contains(&("tags".to_string(), Some(0))));
    assert!(ids.contains(&("imported_at".to_string(), Some(-3))));
    assert!(ids.contains(&("active".to_string(), None)));

    let printed = print(&root);
    assert!(printed.contains("optional int32 field_id=7 count;"));
}

#[test]
fn absent_field_id_is_never_printed() {
    let printed = print(&parse(SCENARIO).unwrap());
    assert!(!printed.contains("field_id"));
}

#[test]
fn field_id_is_normalized_on_print() {
    let root = parse("required group s {\n  required int32 field_id = 7 a;\n}\n").unwrap();
    assert_eq!(
        print(&root),
        "required group s {\n  required int32 field_id=7 a;\n}\n"
    );
}

#[test]
fn sugar_field_ids_round_trip() {
    let root = parse(NESTED).unwrap();
    let attributes = root.as_group().unwrap().child("attributes").unwrap();
    assert_eq!(attributes.field_id(), Some(4));
    let entry = attributes.as_group().unwrap().entry().unwrap();
    assert_eq!(entry.field_id, Some(9));
}

#[test]
fn round_trip_with_wider_indent() {
    let source = "required group schema {\n    optional group l (LIST) {\n        repeated group list {\n            required int32 element;\n        }\n    }\n}\n";
    let root = parse(source).unwrap();
    assert_eq!(print_with_indent(&root, 4), source);
}

#[test]
fn non_canonical_input_is_normalized() {
    let source = "REQUIRED group s { OPTIONAL BYTE_ARRAY n (utf8); optional group m (map) { repeated group key_value { required int32 k; required int32 v; } } }";
    assert_eq!(
        print(&parse(source).unwrap()),
        "required group s {\n  optional binary n (String);\n  optional group m (MAP) {\n    repeated group key_value {\n      required int32 k;\n      required int32 v;\n    }\n  }\n}\n"
    );
}
