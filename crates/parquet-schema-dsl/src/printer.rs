use std::fmt;

use parquet_schema_core::types::{GroupNode, LogicalType, PrimitiveNode, SchemaNode};

/// Spaces per nesting level used by [`print`].
pub const DEFAULT_INDENT: usize = 2;

/// Print a schema tree to canonical text with 2-space indentation.
///
/// `MAP` and `LIST` groups are printed in their sugar form, so for any text
/// in canonical form `print(&parse(text)?) == text`.
///
/// # Panics
///
/// Panics if the tree is not one the parser could have produced, for example a
/// `MAP` group whose `key_value` entry does not have exactly two children.
pub fn print(root: &SchemaNode) -> String {
    print_with_indent(root, DEFAULT_INDENT)
}

/// Print a schema tree using `indent` spaces per nesting level.
pub fn print_with_indent(root: &SchemaNode, indent: usize) -> String {
    let mut output = String::new();
    print_node(root, &mut output, indent, 0);
    output
}

/// Write the canonical text of a schema tree into any formatter sink.
pub fn write_schema(out: &mut impl fmt::Write, root: &SchemaNode, indent: usize) -> fmt::Result {
    out.write_str(&print_with_indent(root, indent))
}

fn print_node(node: &SchemaNode, output: &mut String, indent: usize, depth: usize) {
    match node {
        SchemaNode::Group(group) => print_group(group, output, indent, depth),
        SchemaNode::Primitive(primitive) => print_primitive(primitive, output, indent, depth),
    }
}

fn print_field_id(field_id: Option<i32>, output: &mut String) {
    if let Some(id) = field_id {
        output.push_str(&format!(" field_id={id}"));
    }
}

fn print_group(group: &GroupNode, output: &mut String, indent: usize, depth: usize) {
    let pad = " ".repeat(indent * depth);

    let sugar = match group.logical_type {
        LogicalType::None => "",
        LogicalType::Map => " (MAP)",
        LogicalType::List => " (LIST)",
        other => panic!(
            "cannot print group '{}': logical type {other} is not valid on a group",
            group.name
        ),
    };
    if let Err(e) = group.validate_annotation() {
        panic!("cannot print group '{}': {e}", group.name);
    }

    output.push_str(&pad);
    output.push_str(group.repetition.keyword());
    output.push_str(" group");
    print_field_id(group.field_id, output);
    output.push(' ');
    output.push_str(&group.name);
    output.push_str(sugar);
    output.push_str(" {\n");

    // A MAP or LIST group's only child is its entry group, which prints as a
    // plain repeated group.
    for child in &group.children {
        print_node(child, output, indent, depth + 1);
    }

    output.push_str(&pad);
    output.push_str("}\n");
}

fn print_primitive(primitive: &PrimitiveNode, output: &mut String, indent: usize, depth: usize) {
    output.push_str(&" ".repeat(indent * depth));
    output.push_str(primitive.repetition.keyword());
    output.push(' ');
    output.push_str(primitive.physical_type.keyword());
    print_field_id(primitive.field_id, output);
    output.push(' ');
    output.push_str(&primitive.name);

    match primitive.logical_type {
        LogicalType::None => {}
        LogicalType::String => output.push_str(" (String)"),
        LogicalType::Timestamp(ts) => {
            output.push_str(&format!(
                " (Timestamp(isAdjustedToUTC={}, timeUnit={}",
                ts.is_adjusted_to_utc,
                ts.unit.keyword()
            ));
            if ts.is_from_converted_type {
                output.push_str(", is_from_converted_type=true");
            }
            output.push_str("))");
        }
        other => panic!(
            "cannot print primitive '{}': logical type {other} is not valid on a primitive",
            primitive.name
        ),
    }

    output.push_str(";\n");
}
