use crate::ast;
use crate::loc;
use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a schema definition or on a selection within a document.
///
/// A [`DirectiveAnnotation`] can be thought of as the name of some directive
/// paired with a set of named arguments ([`Value`]s).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    /// A map from ParameterName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`], in the order they were written.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }
}

pub(crate) struct DirectiveAnnotationBuilder;
impl DirectiveAnnotationBuilder {
    pub fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        ast_annots: &[ast::operation::Directive],
    ) -> Vec<DirectiveAnnotation> {
        ast_annots.iter().map(|ast_annot| DirectiveAnnotation {
            args: ast_annot.arguments.iter()
                .map(|(arg_name, arg_val)| (
                    arg_name.to_string(),
                    Value::from_ast(arg_val),
                ))
                .collect(),
            def_location: annotated_item_srcloc.with_ast_position(
                &ast_annot.position,
            ),
            directive_name: ast_annot.name.to_string(),
        }).collect()
    }
}

/// Indicates whether a schema element (field or enum value) was annotated
/// with `@deprecated`.
#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(Option<&'a str>),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => *reason,
            Self::NotDeprecated => None,
        }
    }
}
impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(directives: &'a Vec<DirectiveAnnotation>) -> Self {
        directives.iter()
            .find(|annot| annot.directive_name() == "deprecated")
            .map(|annot| DeprecationState::Deprecated(
                annot.args().get("reason").and_then(|reason| reason.as_str()),
            ))
            .unwrap_or(DeprecationState::NotDeprecated)
    }
}
