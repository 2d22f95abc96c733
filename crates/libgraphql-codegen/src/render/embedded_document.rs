//! GraphQL source text embedded in generated code as a Swift string
//! literal, formatted per
//! [`QueryStringLiteralFormat`](crate::render::QueryStringLiteralFormat).

use crate::render::QueryStringLiteralFormat;
use crate::render::RenderContext;
use crate::render::swift_writer;
use crate::render::swift_writer::SwiftWriter;

pub(crate) enum DocumentLiteral {
    /// Lines of a `"""` literal, not including the delimiters.
    Multiline(Vec<String>),
    SingleLine(String),
}
impl DocumentLiteral {
    pub fn new(ctx: &RenderContext<'_>, source: &str) -> Self {
        match ctx.config().options.query_string_literal_format {
            QueryStringLiteralFormat::Multiline =>
                Self::Multiline(swift_writer::multiline_literal_lines(source)),
            QueryStringLiteralFormat::SingleLine =>
                Self::SingleLine(swift_writer::quoted(&swift_writer::single_line(source))),
        }
    }
}

/// Write `public static var <property_name>: StaticString { ... }` holding
/// `source`.
pub(crate) fn render_static_string(
    w: &mut SwiftWriter,
    ctx: &RenderContext<'_>,
    property_name: &str,
    source: &str,
) {
    match DocumentLiteral::new(ctx, source) {
        DocumentLiteral::Multiline(lines) => {
            w.line(format!("public static var {property_name}: StaticString {{ \"\"\""));
            w.lines_indented_by(1, &lines);
            w.indented(|w| w.line("\"\"\" }"));
        },
        DocumentLiteral::SingleLine(literal) => {
            w.line(format!("public static var {property_name}: StaticString {{ {literal} }}"));
        },
    }
}
