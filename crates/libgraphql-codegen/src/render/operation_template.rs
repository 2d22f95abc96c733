use crate::ir::Operation;
use crate::operation::operation_source;
use crate::operation::OperationKind;
use crate::render::embedded_document::DocumentLiteral;
use crate::render::naming;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::selection_set_template::SelectionSetTemplate;
use crate::render::swift_types;
use crate::render::swift_writer::quoted;
use crate::render::swift_writer::SwiftWriter;

/// Renders an operation as a Swift class holding its document, its
/// variables, and its `Data` selection set.
pub(crate) struct OperationTemplate<'a> {
    ctx: &'a RenderContext<'a>,
    operation: &'a Operation,
}
impl<'a> OperationTemplate<'a> {
    pub fn new(ctx: &'a RenderContext<'a>, operation: &'a Operation) -> Self {
        Self {
            ctx,
            operation,
        }
    }

    pub fn class_name(&self) -> String {
        naming::operation_class_name(self.operation.name(), self.operation.kind())
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut w = SwiftWriter::new();
        for import in self.ctx.operation_imports() {
            w.line(import);
        }
        w.blank();

        let class_name = self.class_name();
        let protocol = match self.operation.kind() {
            OperationKind::Mutation => "GraphQLMutation",
            OperationKind::Query => "GraphQLQuery",
            OperationKind::Subscription => "GraphQLSubscription",
        };
        w.try_block(format!("public class {class_name}: {protocol} {{"), "}", |w| {
            w.line(format!(
                "public static let operationName: String = {}",
                quoted(self.operation.name()),
            ));
            self.render_document(w);

            if !self.operation.variables().is_empty() {
                w.blank();
                self.render_variables(w);
            }

            w.blank();
            let scope_path = format!("{class_name}.Data");
            w.try_block(
                format!(
                    "public struct Data: {} {{",
                    self.ctx.schema_type_ref("SelectionSet"),
                ),
                "}",
                |w| {
                    SelectionSetTemplate::render_data_boilerplate(w);
                    w.blank();
                    SelectionSetTemplate::new(self.ctx, self.operation.name())
                        .render_body(w, self.operation.root(), scope_path.as_str())
                },
            )
        })?;

        Ok(w.finish())
    }

    fn render_document(&self, w: &mut SwiftWriter) {
        let source = operation_source(
            self.operation.definition(),
            self.ctx.config().experimental_features.legacy_safelisting_compatible_operations,
        );
        let fragments = self.operation.referenced_fragments().iter()
            .map(|fragment_name| format!("{fragment_name}.self"))
            .collect::<Vec<_>>();
        let fragments_arg = if fragments.is_empty() {
            None
        } else {
            Some(format!("fragments: [{}]", fragments.join(", ")))
        };
        let definition_suffix = if fragments_arg.is_some() { "," } else { "" };

        w.line("public static let document: DocumentType = .notPersisted(");
        w.indented(|w| {
            w.line("definition: .init(");
            w.indented(|w| {
                match DocumentLiteral::new(self.ctx, source.as_str()) {
                    DocumentLiteral::Multiline(lines) => {
                        w.line("\"\"\"");
                        w.lines_indented_by(0, &lines);
                        w.line(format!("\"\"\"{definition_suffix}"));
                    },
                    DocumentLiteral::SingleLine(literal) =>
                        w.line(format!("{literal}{definition_suffix}")),
                }
                if let Some(fragments_arg) = fragments_arg {
                    w.line(fragments_arg);
                }
            });
            w.line("))");
        });
    }

    fn render_variables(&self, w: &mut SwiftWriter) {
        let variables = self.operation.variables().iter().map(|variable| {
            let name = naming::escape_keyword(variable.name());
            let swift_type = swift_types::input_type(self.ctx, variable.type_annotation());
            let default = match variable.default_value() {
                Some(value) => format!(" = {}", swift_types::value_literal(value)),
                None if variable.type_annotation().nullable() => " = nil".to_string(),
                None => String::new(),
            };
            (variable.name(), name, swift_type, default)
        }).collect::<Vec<_>>();

        for (_, name, swift_type, _) in &variables {
            w.line(format!("public var {name}: {swift_type}"));
        }

        w.blank();
        w.line("public init(");
        w.indented(|w| {
            let last = variables.len() - 1;
            for (index, (_, name, swift_type, default)) in variables.iter().enumerate() {
                let separator = if index == last { "" } else { "," };
                w.line(format!("{name}: {swift_type}{default}{separator}"));
            }
        });
        w.block(") {", "}", |w| {
            for (_, name, _, _) in &variables {
                w.line(format!("self.{name} = {name}"));
            }
        });

        w.blank();
        w.block("public var __variables: Variables? { [", "] }", |w| {
            let last = variables.len() - 1;
            for (index, (graphql_name, name, _, _)) in variables.iter().enumerate() {
                let separator = if index == last { "" } else { "," };
                w.line(format!("{}: {name}{separator}", quoted(graphql_name)));
            }
        });
    }
}
