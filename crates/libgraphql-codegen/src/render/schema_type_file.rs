use crate::render::RenderContext;
use crate::render::swift_writer::SwiftWriter;

/// Render a schema type file: the `ApolloAPI` import followed by `body`.
///
/// When the schema is embedded in the application's target, `body` is
/// declared inside an extension of the schema namespace.
pub(crate) fn render_schema_type_file(
    ctx: &RenderContext<'_>,
    body: impl FnOnce(&mut SwiftWriter),
) -> String {
    let mut w = SwiftWriter::new();
    w.line("import ApolloAPI");
    w.blank();
    if ctx.is_embedded_in_target() {
        w.block(format!("public extension {} {{", ctx.schema_namespace()), "}", body);
    } else {
        body(&mut w);
    }
    w.finish()
}
