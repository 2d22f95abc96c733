use crate::ir::EnumType;
use crate::render::CaseConversionStrategy;
use crate::render::Composition;
use crate::render::naming;
use crate::render::RenderContext;
use crate::render::schema_type_file::render_schema_type_file;
use crate::render::swift_writer::quoted;

pub(crate) fn render_enum(ctx: &RenderContext<'_>, enum_type: &EnumType) -> String {
    let options = &ctx.config().options;
    let include_deprecated = options.deprecated_enum_cases == Composition::Include;
    let warn_on_deprecated = options.warnings_on_deprecated_usage == Composition::Include;

    render_schema_type_file(ctx, |w| {
        w.doc_comment(enum_type.description());
        w.block(format!("public enum {}: String, EnumType {{", enum_type.name()), "}", |w| {
            for case in enum_type.cases() {
                if case.is_deprecated() && !include_deprecated {
                    continue;
                }

                w.doc_comment(case.description());
                if case.is_deprecated() && warn_on_deprecated {
                    w.line(format!(
                        "@available(*, deprecated, message: {})",
                        quoted(case.deprecation_reason().unwrap_or("No longer supported")),
                    ));
                }

                let case_name = match options.conversion_strategies.enum_cases {
                    CaseConversionStrategy::CamelCase => naming::enum_case_name(case.name()),
                    CaseConversionStrategy::None => case.name().to_string(),
                };
                if case_name == case.name() {
                    w.line(format!("case {}", naming::escape_keyword(&case_name)));
                } else {
                    w.line(format!(
                        "case {} = {}",
                        naming::escape_keyword(&case_name),
                        quoted(case.name()),
                    ));
                }
            }
        });
    })
}
