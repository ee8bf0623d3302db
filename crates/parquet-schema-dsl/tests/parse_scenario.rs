use parquet_schema_core::types::{LogicalType, PhysicalType, Repetition, SchemaNode};
use parquet_schema_dsl::{parse, parse_with_options, DslError, ParseOptions, Tokenizer};

const SCENARIO: &str = include_str!("data/scenario.schema");

fn structural_reason(source: &str) -> String {
    match parse(source) {
        Err(DslError::StructuralError { reason, .. }) => reason,
        other => panic!("expected a structural error, got {other:?}"),
    }
}

fn map_with_entry_fields(fields: &str) -> String {
    format!(
        "required group s {{\n  optional group m (MAP) {{\n    repeated group key_value {{\n{fields}    }}\n  }}\n}}\n"
    )
}

fn list_with_entry_fields(fields: &str) -> String {
    format!(
        "required group s {{\n  optional group l (LIST) {{\n    repeated group list {{\n{fields}    }}\n  }}\n}}\n"
    )
}

#[test]
fn scenario_tree_shape() {
    let root = parse(SCENARIO).expect("scenario should parse");
    let SchemaNode::Group(root) = root else {
        panic!("root must be a group");
    };
    assert_eq!(root.name, "schema");
    assert_eq!(root.children.len(), 2);

    let a = root.children[0].as_primitive().unwrap();
    assert_eq!(a.name, "a");
    assert_eq!(a.physical_type, PhysicalType::Int32);
    assert_eq!(a.repetition, Repetition::Required);

    let b = root.children[1].as_group().unwrap();
    assert_eq!(b.name, "b");
    assert_eq!(b.repetition, Repetition::Optional);
    assert_eq!(b.logical_type, LogicalType::Map);
    assert_eq!(b.children.len(), 1);

    let kv = b.entry().unwrap();
    assert_eq!(kv.name, "key_value");
    assert_eq!(kv.repetition, Repetition::Repeated);
    assert_eq!(kv.children.len(), 2);

    let key = kv.children[0].as_primitive().unwrap();
    assert_eq!(key.name, "key");
    assert_eq!(key.physical_type, PhysicalType::ByteArray);
    assert_eq!(key.logical_type, LogicalType::String);
    assert_eq!(key.repetition, Repetition::Required);

    let value = kv.children[1].as_primitive().unwrap();
    assert_eq!(value.name, "value");
    assert_eq!(value.physical_type, PhysicalType::Int64);
    assert_eq!(value.repetition, Repetition::Optional);
}

#[test]
fn map_entry_with_one_child_rejected() {
    let reason = structural_reason(&map_with_entry_fields("      required binary key;\n"));
    assert!(reason.contains("exactly 2 children, found 1"), "{reason}");
}

#[test]
fn map_entry_with_three_children_rejected() {
    let reason = structural_reason(&map_with_entry_fields(
        "      required binary key;\n      optional int32 value;\n      optional int32 extra;\n",
    ));
    assert!(reason.contains("exactly 2 children, found 3"), "{reason}");
}

#[test]
fn list_entry_with_no_children_rejected() {
    let reason = structural_reason(&list_with_entry_fields(""));
    assert!(reason.contains("exactly 1 children, found 0"), "{reason}");
}

#[test]
fn list_entry_with_two_children_rejected() {
    let reason = structural_reason(&list_with_entry_fields(
        "      required int32 a;\n      required int32 b;\n",
    ));
    assert!(reason.contains("found 2"), "{reason}");
}

#[test]
fn repeated_list_element_rejected() {
    let reason = structural_reason(&list_with_entry_fields("      repeated int32 element;\n"));
    assert!(reason.contains("element"), "{reason}");
}

#[test]
fn repeated_map_group_rejected() {
    let source = "required group s {\n  repeated group m (MAP) {\n    repeated group key_value {\n      required int32 k;\n      required int32 v;\n    }\n  }\n}\n";
    let reason = structural_reason(source);
    assert!(reason.contains("must not be repeated"), "{reason}");
}

#[test]
fn list_entry_name_must_be_list() {
    let source = "required group s {\n  optional group l (LIST) {\n    repeated group items {\n      required int32 element;\n    }\n  }\n}\n";
    let reason = structural_reason(source);
    assert!(reason.contains("'list'"), "{reason}");
}

#[test]
fn map_entry_must_be_repeated() {
    let source = "required group s {\n  optional group m (MAP) {\n    optional group key_value {\n      required int32 k;\n      required int32 v;\n    }\n  }\n}\n";
    let err = parse(source).unwrap_err();
    let DslError::StructuralError { reason, location } = err else {
        panic!("expected a structural error, got {err:?}");
    };
    assert!(reason.contains("repeated group key_value"), "{reason}");
    assert!(reason.contains("found 'optional group'"), "{reason}");
    assert_eq!(location.line, 3);
}

#[test]
fn list_entry_must_be_repeated() {
    let source = "required group s {\n  optional group l (LIST) {\n    required group list {\n      required int32 element;\n    }\n  }\n}\n";
    let reason = structural_reason(source);
    assert!(reason.contains("repeated group list"), "{reason}");
    assert!(reason.contains("found 'required group'"), "{reason}");
}

#[test]
fn control_character_is_an_invalid_token() {
    let err = parse("required group s {\n  required int32 a\u{7};\n}\n").unwrap_err();
    let DslError::InvalidToken { text, location } = err else {
        panic!("expected an invalid token, got {err:?}");
    };
    assert_eq!(text, "\u{7}");
    assert_eq!(location.line, 2);
    assert_eq!(location.offset, 37);
}

#[test]
fn unknown_tokens_never_default() {
    assert!(matches!(
        parse("required group s {\n  mandatory int32 a;\n}\n"),
        Err(DslError::UnknownRepetition { .. })
    ));
    assert!(matches!(
        parse("required group s {\n  required varchar a;\n}\n"),
        Err(DslError::UnknownPhysicalType { .. })
    ));
    assert!(matches!(
        parse("required group s {\n  required binary a (Json);\n}\n"),
        Err(DslError::UnknownLogicalType { .. })
    ));
    assert!(matches!(
        parse("optionally group s {\n}\n"),
        Err(DslError::UnknownRepetition { .. })
    ));
}

#[test]
fn error_location_reports_line_and_partial_text() {
    let source = "required group schema {\n  required int32 a;\n  optional group b (MAP) {\n    repeated group key_value {\n      required binary key (Text);\n";
    let err = parse(source).unwrap_err();
    let location = err.location().expect("token errors carry a location");
    assert_eq!(location.line, 5);
    assert_eq!(location.line_text, "      required binary key (Text");
    assert_eq!(&source[location.offset..location.offset + 4], "Text");
    assert!(err.to_string().contains("line 5"));
}

#[test]
fn unexpected_token_reports_expected_and_found() {
    let err = parse("required group s [\n}\n").unwrap_err();
    match err {
        DslError::UnexpectedToken {
            expected, found, ..
        } => {
            assert_eq!(expected, vec!["{".to_string()]);
            assert_eq!(found, "[");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn incompatible_logical_type_rejected() {
    let reason = structural_reason(
        "required group s {\n  required int32 ts (Timestamp(isAdjustedToUTC=true, timeUnit=milliseconds));\n}\n",
    );
    assert!(reason.contains("int32"), "{reason}");
}

#[test]
fn deep_nesting_hits_limit() {
    let depth = 80;
    let mut source = String::from("required group g0 {\n");
    for i in 1..depth {
        source.push_str(&format!("required group g{i} {{\n"));
    }
    for _ in 0..depth {
        source.push_str("}\n");
    }

    let err = parse(&source).unwrap_err();
    assert!(matches!(err, DslError::NestingTooDeep { limit: 64, .. }));

    let relaxed = ParseOptions { max_depth: 100 };
    let root = parse_with_options(&source, &relaxed).unwrap();
    assert_eq!(root.depth(), depth);
}

#[test]
fn lookahead_peek_then_next() {
    let mut tokens = Tokenizer::new("required group\n  schema {");
    assert_eq!(tokens.next_token().unwrap().text, "required");

    let first = tokens.peek_token().unwrap();
    let second = tokens.peek_token().unwrap();
    assert_eq!(first, second);
    assert_eq!(tokens.location().line, 1);

    let next = tokens.next_token().unwrap();
    assert_eq!(next, first);
    assert_eq!(tokens.next_token().unwrap().text, "schema");
    assert_eq!(tokens.location().line, 2);
    assert_eq!(tokens.next_token().unwrap().text, "{");
    assert!(tokens.is_exhausted().unwrap());
}
