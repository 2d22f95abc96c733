use crate::render::RenderContext;
use crate::render::swift_writer::quoted;
use crate::render::swift_writer::SwiftWriter;

/// Render the schema's metadata: the `SelectionSet`/`InlineFragment`
/// protocols generated selection sets conform to and the typename to object
/// type lookup.
pub(crate) fn render_schema_metadata(ctx: &RenderContext<'_>) -> String {
    let namespace = ctx.schema_namespace();
    let mut w = SwiftWriter::new();
    w.line("import ApolloAPI");
    w.blank();

    let protocol_prefix = if ctx.is_embedded_in_target() {
        format!("{namespace}_")
    } else {
        String::new()
    };
    w.line(format!(
        "public protocol {protocol_prefix}SelectionSet: ApolloAPI.SelectionSet & ApolloAPI.RootSelectionSet",
    ));
    w.line(format!("where Schema == {namespace}.Schema {{}}"));
    w.blank();
    w.line(format!(
        "public protocol {protocol_prefix}InlineFragment: ApolloAPI.SelectionSet & ApolloAPI.InlineFragment",
    ));
    w.line(format!("where Schema == {namespace}.Schema {{}}"));
    w.blank();

    if ctx.is_embedded_in_target() {
        w.block(format!("public enum {namespace} {{"), "}", |w| {
            w.line(format!("public typealias SelectionSet = {protocol_prefix}SelectionSet"));
            w.blank();
            w.line(format!("public typealias InlineFragment = {protocol_prefix}InlineFragment"));
            w.blank();
            render_schema_configuration(w, ctx);
        });
    } else {
        render_schema_configuration(&mut w, ctx);
    }

    w.finish()
}

fn render_schema_configuration(w: &mut SwiftWriter, ctx: &RenderContext<'_>) {
    let objects = ctx.ir().referenced_types().objects();
    w.block("public enum Schema: SchemaConfiguration {", "}", |w| {
        w.block(
            "public static func objectType(forTypename typename: String) -> Object.Type? {",
            "}",
            |w| {
                w.line("switch typename {");
                for object_name in objects.keys() {
                    w.line(format!(
                        "case {}: return {}.self",
                        quoted(object_name),
                        ctx.schema_type_ref(object_name),
                    ));
                }
                w.line("default: return nil");
                w.line("}");
            },
        );
    });
}
