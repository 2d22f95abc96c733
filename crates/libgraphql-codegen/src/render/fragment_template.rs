use crate::ir::NamedFragment;
use crate::operation::fragment_source;
use crate::render::embedded_document;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::selection_set_template::SelectionSetTemplate;
use crate::render::swift_writer::SwiftWriter;

/// Renders a named fragment as a Swift struct conforming to `Fragment`.
///
/// A fragment is rendered once, no matter how many operations spread it.
pub(crate) struct FragmentTemplate<'a> {
    ctx: &'a RenderContext<'a>,
    fragment: &'a NamedFragment,
}
impl<'a> FragmentTemplate<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, fragment: &'a NamedFragment) -> Self {
        Self {
            ctx,
            fragment,
        }
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut w = SwiftWriter::new();
        for import in self.ctx.operation_imports() {
            w.line(import);
        }
        w.blank();

        let name = self.fragment.name();
        let source = fragment_source(
            self.fragment.definition(),
            self.ctx.config().experimental_features.legacy_safelisting_compatible_operations,
        );
        let selection_set_template = SelectionSetTemplate::new(self.ctx, name);
        w.try_block(
            format!(
                "public struct {name}: {}, Fragment {{",
                self.ctx.schema_type_ref("SelectionSet"),
            ),
            "}",
            |w| {
                embedded_document::render_static_string(
                    w,
                    self.ctx,
                    "fragmentDefinition",
                    source.as_str(),
                );
                w.blank();
                SelectionSetTemplate::render_data_boilerplate(w);
                w.blank();
                selection_set_template.render_body(w, self.fragment.root(), name)
            },
        )?;

        Ok(w.finish())
    }
}
