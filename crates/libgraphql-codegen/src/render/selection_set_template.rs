use crate::ir::DirectSelection;
use crate::ir::Field;
use crate::ir::InclusionPredicate;
use crate::ir::SelectionSet;
use crate::render::Composition;
use crate::render::naming;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::swift_types;
use crate::render::swift_writer::quoted;
use crate::render::swift_writer::SwiftWriter;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

const FRAGMENTS_STRUCT_NAME: &str = "Fragments";

type Result<T> = std::result::Result<T, RenderError>;

/// Renders an IR [`SelectionSet`] (and, recursively, every selection set
/// nested in it) as the body of a Swift struct.
pub(crate) struct SelectionSetTemplate<'a> {
    ctx: &'a RenderContext<'a>,
    entity_name: &'a str,
}
impl<'a> SelectionSetTemplate<'a> {
    /// `entity_name` is the operation or fragment being rendered; it is only
    /// used to report naming errors.
    pub fn new(ctx: &'a RenderContext<'a>, entity_name: &'a str) -> Self {
        Self {
            ctx,
            entity_name,
        }
    }

    /// The stored `data` property and initializer every selection set
    /// struct starts with.
    pub fn render_data_boilerplate(w: &mut SwiftWriter) {
        w.line("public let data: DataDict");
        w.line("public init(data: DataDict) { self.data = data }");
    }

    /// Render everything after the data boilerplate: the parent type, the
    /// selections, the accessors, and the nested structs.
    ///
    /// `scope_path` is the dotted path of the enclosing struct, e.g.
    /// `AllAnimalsQuery.Data.AllAnimal`.
    pub fn render_body(
        &self,
        w: &mut SwiftWriter,
        selection_set: &SelectionSet,
        scope_path: &str,
    ) -> Result<()> {
        let names = self.scope_names(selection_set, scope_path)?;

        let parent_type = selection_set.parent_type();
        w.line(format!(
            "public static var __parentType: ParentType {{ .{}({}.self) }}",
            parent_type.kind().name(),
            self.ctx.schema_type_ref(parent_type.name()),
        ));
        self.render_selections(w, selection_set, &names);

        let accessor_lines = self.accessor_lines(selection_set, &names);
        if !accessor_lines.is_empty() {
            w.blank();
            for line in accessor_lines {
                w.line(line);
            }
        }

        if !selection_set.fragments().is_empty() {
            w.blank();
            self.render_fragments_struct(w, selection_set);
        }

        for (response_key, field) in selection_set.fields() {
            let (Some(struct_name), Some(field_selection_set)) =
                (names.field_structs.get(response_key), field.selection_set())
            else {
                continue;
            };
            w.blank();
            w.line(format!("/// {struct_name}"));
            w.line("///");
            w.line(format!(
                "/// Parent Type: `{}`",
                field_selection_set.parent_type().name(),
            ));
            self.render_nested_struct(
                w,
                struct_name,
                &self.ctx.schema_type_ref("SelectionSet"),
                field_selection_set,
                scope_path,
            )?;
        }

        for type_case in selection_set.type_cases().values() {
            let struct_name = naming::type_case_struct_name(type_case.type_name());
            w.blank();
            w.line(format!("/// {struct_name}"));
            w.line("///");
            w.line(format!("/// Parent Type: `{}`", type_case.type_name()));
            self.render_nested_struct(
                w,
                struct_name.as_str(),
                &self.ctx.schema_type_ref("InlineFragment"),
                type_case.selection_set(),
                scope_path,
            )?;
        }

        Ok(())
    }

    fn render_nested_struct(
        &self,
        w: &mut SwiftWriter,
        struct_name: &str,
        conformance: &str,
        selection_set: &SelectionSet,
        enclosing_path: &str,
    ) -> Result<()> {
        let scope_path = format!("{enclosing_path}.{struct_name}");
        w.try_block(
            format!("public struct {struct_name}: {conformance} {{"),
            "}",
            |w| {
                Self::render_data_boilerplate(w);
                w.blank();
                self.render_body(w, selection_set, scope_path.as_str())
            },
        )
    }

    fn render_selections(
        &self,
        w: &mut SwiftWriter,
        selection_set: &SelectionSet,
        names: &ScopeNames,
    ) {
        let direct_selections = match selection_set.direct_selections() {
            Some(direct_selections) if !direct_selections.is_empty() => direct_selections,
            _ => return,
        };

        let selection_exprs = direct_selections.iter().filter_map(|direct| {
            let expr = match direct {
                DirectSelection::Field { response_key, .. } => {
                    let field = selection_set.field(response_key)?;
                    self.field_selection_expr(field, names)
                },
                DirectSelection::Fragment { name, .. } =>
                    format!(".fragment({name}.self)"),
                DirectSelection::TypeCase { type_name, .. } => format!(
                    ".inlineFragment({}.self)",
                    naming::type_case_struct_name(type_name),
                ),
            };
            Some(with_inclusion(direct.inclusion(), expr))
        }).collect::<Vec<_>>();

        w.block("public static var __selections: [Selection] { [", "] }", |w| {
            for expr in selection_exprs {
                w.line(format!("{expr},"));
            }
        });
    }

    fn field_selection_expr(&self, field: &Field, names: &ScopeNames) -> String {
        let mut args = vec![quoted(field.name())];
        if let Some(alias) = field.alias() {
            args.push(format!("alias: {}", quoted(alias)));
        }
        let swift_type = swift_types::output_type(
            self.ctx,
            field.type_annotation(),
            names.field_structs.get(field.response_key()).map(String::as_str),
        );
        args.push(format!("{swift_type}.self"));
        if !field.arguments().is_empty() {
            let arguments = field.arguments().iter()
                .map(|(name, value)| format!(
                    "{}: {}",
                    quoted(name),
                    swift_types::value_literal(value),
                ))
                .collect::<Vec<_>>()
                .join(", ");
            args.push(format!("arguments: [{arguments}]"));
        }
        format!(".field({})", args.join(", "))
    }

    fn accessor_lines(&self, selection_set: &SelectionSet, names: &ScopeNames) -> Vec<String> {
        let warn_on_deprecated =
            self.ctx.config().options.warnings_on_deprecated_usage == Composition::Include;

        let mut lines = vec![];
        for (response_key, field) in selection_set.fields() {
            if is_builtin_typename(field) {
                continue;
            }

            if let Some(description) = field.description() {
                let mut doc = SwiftWriter::new();
                doc.doc_comment(Some(description));
                lines.extend(doc.finish().lines().map(str::to_string));
            }
            if warn_on_deprecated && field.is_deprecated() {
                lines.push(format!(
                    "@available(*, deprecated, message: {})",
                    quoted(field.deprecation_reason().unwrap_or("No longer supported")),
                ));
            }

            let mut swift_type = swift_types::output_type(
                self.ctx,
                field.type_annotation(),
                names.field_structs.get(response_key).map(String::as_str),
            );
            if !field.inclusion().is_always() {
                swift_type = swift_types::optional(swift_type);
            }
            lines.push(format!(
                "public var {}: {swift_type} {{ data[{}] }}",
                naming::escape_keyword(response_key),
                quoted(response_key),
            ));
        }

        for type_case in selection_set.type_cases().values() {
            lines.push(format!(
                "public var {}: {}? {{ _asInlineFragment({}) }}",
                naming::type_case_accessor_name(type_case.type_name()),
                naming::type_case_struct_name(type_case.type_name()),
                if_argument(type_case.inclusion()),
            ));
        }

        if !selection_set.fragments().is_empty() {
            lines.push(format!(
                "public var fragments: {FRAGMENTS_STRUCT_NAME} {{ {FRAGMENTS_STRUCT_NAME}(data: data) }}",
            ));
        }

        lines
    }

    fn render_fragments_struct(&self, w: &mut SwiftWriter, selection_set: &SelectionSet) {
        w.block(
            format!("public struct {FRAGMENTS_STRUCT_NAME}: FragmentContainer {{"),
            "}",
            |w| {
                Self::render_data_boilerplate(w);
                w.blank();
                for fragment_use in selection_set.fragments().values() {
                    let is_conditional = !fragment_use.inclusion().is_always();
                    w.line(format!(
                        "public var {}: {}{} {{ _toFragment({}) }}",
                        naming::escape_keyword(&naming::first_lowercased(fragment_use.name())),
                        fragment_use.name(),
                        if is_conditional { "?" } else { "" },
                        if_argument(fragment_use.inclusion()),
                    ));
                }
            },
        );
    }

    /// Pick a struct name for every composite-typed field and make sure no
    /// two declarations or accessors in the scope share a name.
    fn scope_names(
        &self,
        selection_set: &SelectionSet,
        scope_path: &str,
    ) -> Result<ScopeNames> {
        let collision = |name: &str| RenderError::NameCollision {
            entity_name: self.entity_name.to_string(),
            name: name.to_string(),
            scope: scope_path.to_string(),
        };

        let mut taken_struct_names = selection_set.type_cases().keys()
            .map(|type_name| naming::type_case_struct_name(type_name))
            .collect::<HashSet<_>>();
        if !selection_set.fragments().is_empty() {
            taken_struct_names.insert(FRAGMENTS_STRUCT_NAME.to_string());
        }

        // Fields whose singular name is unique in the scope keep it; all
        // others fall back to their plural name. The outcome does not depend
        // on the order the fields were selected in.
        let composite_keys = selection_set.fields().iter()
            .filter(|(_, field)| field.selection_set().is_some())
            .map(|(response_key, _)| response_key.as_str())
            .collect::<Vec<_>>();
        let mut preferred_counts = HashMap::<String, usize>::new();
        for response_key in &composite_keys {
            *preferred_counts.entry(naming::field_struct_name(response_key)).or_default() += 1;
        }
        let keeps_preferred = |preferred: &String| {
            preferred_counts.get(preferred) == Some(&1)
                && !taken_struct_names.contains(preferred)
        };

        let mut field_structs = IndexMap::new();
        let mut fallback_keys = vec![];
        for response_key in &composite_keys {
            let preferred = naming::field_struct_name(response_key);
            if keeps_preferred(&preferred) {
                field_structs.insert(response_key.to_string(), preferred);
            } else {
                fallback_keys.push(*response_key);
            }
        }
        taken_struct_names.extend(field_structs.values().cloned());

        for response_key in fallback_keys {
            let fallback = naming::field_struct_fallback_name(response_key);
            if !taken_struct_names.insert(fallback.to_string()) {
                return Err(collision(fallback.as_str()));
            }
            field_structs.insert(response_key.to_string(), fallback);
        }

        let mut accessor_names = HashSet::new();
        let accessors = selection_set.fields().values()
            .filter(|field| !is_builtin_typename(field))
            .map(|field| field.response_key().to_string())
            .chain(selection_set.type_cases().keys().map(|type_name| {
                naming::type_case_accessor_name(type_name)
            }))
            .chain(
                (!selection_set.fragments().is_empty()).then(|| "fragments".to_string()),
            );
        for accessor in accessors {
            if !accessor_names.insert(accessor.to_string()) {
                return Err(collision(accessor.as_str()));
            }
        }

        Ok(ScopeNames {
            field_structs,
        })
    }
}

/// Declaration names chosen for one scope.
struct ScopeNames {
    field_structs: IndexMap<String, String>,
}

/// The implicit `__typename` every selection set already exposes.
fn is_builtin_typename(field: &Field) -> bool {
    field.name() == "__typename" && field.alias().is_none()
}

fn if_argument(inclusion: &InclusionPredicate) -> String {
    if inclusion.is_always() {
        String::new()
    } else {
        format!("if: {}", swift_types::inclusion_condition_expr(inclusion))
    }
}

fn with_inclusion(inclusion: &InclusionPredicate, expr: String) -> String {
    if inclusion.is_always() {
        expr
    } else {
        format!(
            ".include(if: {}, {expr})",
            swift_types::inclusion_condition_expr(inclusion),
        )
    }
}
