use crate::ir::InputObject;
use crate::render::Composition;
use crate::render::naming;
use crate::render::RenderContext;
use crate::render::schema_type_file::render_schema_type_file;
use crate::render::swift_types;
use crate::render::swift_writer::quoted;

pub(crate) fn render_input_object(ctx: &RenderContext<'_>, input_object: &InputObject) -> String {
    let warn_on_deprecated =
        ctx.config().options.warnings_on_deprecated_usage == Composition::Include;
    let fields = input_object.fields().iter().map(|field| {
        let swift_type = swift_types::input_type(ctx, field.type_annotation());
        let default = match field.default_value() {
            Some(value) => format!(" = {}", swift_types::value_literal(value)),
            None if field.type_annotation().nullable() => " = nil".to_string(),
            None => String::new(),
        };
        (field, naming::escape_keyword(field.name()), swift_type, default)
    }).collect::<Vec<_>>();

    render_schema_type_file(ctx, |w| {
        w.doc_comment(input_object.description());
        w.block(format!("public struct {}: InputObject {{", input_object.name()), "}", |w| {
            w.line("public private(set) var __data: InputDict");
            w.blank();
            w.block("public init(_ data: InputDict) {", "}", |w| {
                w.line("__data = data");
            });

            if !fields.is_empty() {
                w.blank();
                w.line("public init(");
                w.indented(|w| {
                    let last = fields.len() - 1;
                    for (index, (_, name, swift_type, default)) in fields.iter().enumerate() {
                        let separator = if index == last { "" } else { "," };
                        w.line(format!("{name}: {swift_type}{default}{separator}"));
                    }
                });
                w.block(") {", "}", |w| {
                    w.line("__data = InputDict([");
                    w.indented(|w| {
                        let last = fields.len() - 1;
                        for (index, (field, name, _, _)) in fields.iter().enumerate() {
                            let separator = if index == last { "" } else { "," };
                            w.line(format!("{}: {name}{separator}", quoted(field.name())));
                        }
                    });
                    w.line("])");
                });
            }

            for (field, name, swift_type, _) in &fields {
                w.blank();
                w.doc_comment(field.description());
                if field.is_deprecated() && warn_on_deprecated {
                    w.line(format!(
                        "@available(*, deprecated, message: {})",
                        quoted(field.deprecation_reason().unwrap_or("No longer supported")),
                    ));
                }
                let key = quoted(field.name());
                w.block(format!("public var {name}: {swift_type} {{"), "}", |w| {
                    w.line(format!("get {{ __data[{key}] }}"));
                    w.line(format!("set {{ __data[{key}] = newValue }}"));
                });
            }
        });
    })
}
