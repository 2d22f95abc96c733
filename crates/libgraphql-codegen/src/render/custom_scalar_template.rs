use crate::ir::CustomScalar;
use crate::render::RenderContext;
use crate::render::schema_type_file::render_schema_type_file;

/// Custom scalars are generated as `String` aliases that applications may
/// replace with their own type.
pub(crate) fn render_custom_scalar(ctx: &RenderContext<'_>, scalar: &CustomScalar) -> String {
    render_schema_type_file(ctx, |w| {
        w.doc_comment(scalar.description());
        w.line(format!("public typealias {} = String", scalar.name()));
    })
}
