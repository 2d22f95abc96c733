use crate::ir::CompositeType;
use crate::render::RenderContext;
use crate::render::schema_type_file::render_schema_type_file;
use crate::render::swift_writer::quoted;
use crate::render::swift_writer::SwiftWriter;
use crate::types::GraphQLTypeKind;

/// Render an Object, Interface, or Union type's schema metadata.
pub(crate) fn render_composite_type(
    ctx: &RenderContext<'_>,
    composite_type: &CompositeType,
) -> String {
    render_schema_type_file(ctx, |w| {
        w.doc_comment(composite_type.description());
        let name = composite_type.name();
        match composite_type.kind() {
            GraphQLTypeKind::Object => {
                w.block(format!("public final class {name}: Object {{"), "}", |w| {
                    w.line(format!(
                        "override public class var __typename: StaticString {{ {} }}",
                        quoted(name),
                    ));
                    let interfaces = composite_type.implemented_interfaces();
                    if !interfaces.is_empty() {
                        w.blank();
                        w.line(
                            "override public class var __implementedInterfaces: \
                            [Interface.Type]? { _implementedInterfaces }",
                        );
                        w.block(
                            "private static let _implementedInterfaces: [Interface.Type]? = [",
                            "]",
                            |w| type_list(w, ctx, interfaces),
                        );
                    }
                });
            },

            GraphQLTypeKind::Interface => {
                w.line(format!("public final class {name}: Interface {{}}"));
            },

            _ => {
                w.block(format!("public enum {name}: UnionType {{"), "}", |w| {
                    w.block(
                        "public static let possibleTypes: [Object.Type] = [",
                        "]",
                        |w| type_list(w, ctx, composite_type.possible_types()),
                    );
                });
            },
        }
    })
}

fn type_list(w: &mut SwiftWriter, ctx: &RenderContext<'_>, names: &[String]) {
    let last = names.len().saturating_sub(1);
    for (index, type_name) in names.iter().enumerate() {
        let separator = if index == last { "" } else { "," };
        w.line(format!("{}.self{separator}", ctx.schema_type_ref(type_name)));
    }
}
