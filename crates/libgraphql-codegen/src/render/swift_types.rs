use crate::ir::InclusionPredicate;
use crate::operation::InclusionCondition;
use crate::render::RenderContext;
use crate::render::swift_writer::quoted;
use crate::types::TypeAnnotation;
use crate::Value;

/// The Swift type of a selected field.
///
/// `composite_name` is the name of the struct generated for the field's
/// sub-selections, used in place of the (composite) named type.
pub(crate) fn output_type(
    ctx: &RenderContext<'_>,
    annotation: &TypeAnnotation,
    composite_name: Option<&str>,
) -> String {
    let base = match annotation.list_item() {
        Some(item) => format!("[{}]", output_type(ctx, item, composite_name)),
        None => match composite_name {
            Some(composite_name) => composite_name.to_string(),
            None => named_type(ctx, annotation.innermost_type_name()),
        },
    };
    with_nullability(base, annotation.nullable())
}

/// The Swift type of an input value (an operation variable or an input
/// object field).
///
/// A nullable value at the top level is a `GraphQLNullable` so that an
/// explicit `null` can be told apart from an omitted value.
pub(crate) fn input_type(ctx: &RenderContext<'_>, annotation: &TypeAnnotation) -> String {
    if annotation.nullable() {
        format!("GraphQLNullable<{}>", nested_input_type(ctx, annotation, false))
    } else {
        nested_input_type(ctx, annotation, false)
    }
}

fn nested_input_type(
    ctx: &RenderContext<'_>,
    annotation: &TypeAnnotation,
    apply_nullability: bool,
) -> String {
    let base = match annotation.list_item() {
        Some(item) => format!("[{}]", nested_input_type(ctx, item, true)),
        None => named_type(ctx, annotation.innermost_type_name()),
    };
    if apply_nullability {
        with_nullability(base, annotation.nullable())
    } else {
        base
    }
}

/// The Swift type a named (non-composite) GraphQL type maps to.
pub(crate) fn named_type(ctx: &RenderContext<'_>, type_name: &str) -> String {
    match type_name {
        "Boolean" => "Bool".to_string(),
        "Float" => "Double".to_string(),
        "ID" | "String" => "String".to_string(),
        "Int" => "Int".to_string(),
        _ if ctx.ir().referenced_types().enums().contains_key(type_name) =>
            format!("GraphQLEnum<{}>", ctx.schema_type_ref(type_name)),
        _ => ctx.schema_type_ref(type_name),
    }
}

fn with_nullability(base: String, nullable: bool) -> String {
    if nullable {
        format!("{base}?")
    } else {
        base
    }
}

/// Make a field type optional, as needed for a conditionally included
/// field.
pub(crate) fn optional(swift_type: String) -> String {
    if swift_type.ends_with('?') {
        swift_type
    } else {
        format!("{swift_type}?")
    }
}

/// A GraphQL value as a Swift literal usable as a field argument or a
/// default value.
pub(crate) fn value_literal(value: &Value) -> String {
    match value {
        Value::Bool(value) => value.to_string(),
        Value::EnumValue(name) => quoted(name),
        Value::Float(value) => {
            let literal = value.to_string();
            if literal.contains(['.', 'e', 'E']) {
                literal
            } else {
                format!("{literal}.0")
            }
        },
        Value::Int(value) => value.to_string(),
        Value::List(values) => format!(
            "[{}]",
            values.iter().map(value_literal).collect::<Vec<_>>().join(", "),
        ),
        Value::Null => ".null".to_string(),
        Value::Object(entries) if entries.is_empty() => "[:]".to_string(),
        Value::Object(entries) => format!(
            "[{}]",
            entries.iter()
                .map(|(key, value)| format!("{}: {}", quoted(key), value_literal(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::String(value) => quoted(value),
        Value::VarRef(name) => format!(".variable({})", quoted(name)),
    }
}

/// An inclusion predicate as a Swift condition expression, e.g.
/// `"a" && !"b"` or `("a" && !"b") || "c"`.
pub(crate) fn inclusion_condition_expr(predicate: &InclusionPredicate) -> String {
    let multi_clause = predicate.clauses().len() > 1;
    predicate.clauses().iter().map(|clause| {
        let conjunction = clause.iter()
            .map(condition_expr)
            .collect::<Vec<_>>()
            .join(" && ");
        if multi_clause && clause.len() > 1 {
            format!("({conjunction})")
        } else {
            conjunction
        }
    }).collect::<Vec<_>>().join(" || ")
}

fn condition_expr(condition: &InclusionCondition) -> String {
    if condition.is_inverted() {
        format!("!{}", quoted(condition.variable()))
    } else {
        quoted(condition.variable())
    }
}
