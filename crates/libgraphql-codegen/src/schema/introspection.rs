//! Loading of [introspection query](https://spec.graphql.org/October2021/#sec-Introspection)
//! results into the same schema types that SDL documents produce.
//!
//! Introspection carries no source positions, so every definition loaded
//! this way is located at [`SourceLocation::Introspection`](loc::SourceLocation::Introspection).

use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::Value;
use indexmap::IndexMap;
use serde::Deserialize;

/// Either a full introspection response or just its `data` member.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum IntrospectionDocument {
    Response { data: IntrospectionData },
    Data(IntrospectionData),
}
impl IntrospectionDocument {
    pub fn parse(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|err| err.to_string())
    }

    pub fn into_schema(self) -> IntrospectionSchema {
        match self {
            Self::Response { data } | Self::Data(data) => data.schema,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct IntrospectionSchema {
    pub query_type: Option<NamedTypeRef>,
    pub mutation_type: Option<NamedTypeRef>,
    pub subscription_type: Option<NamedTypeRef>,
    #[serde(default)]
    types: Vec<FullType>,
    #[serde(default)]
    directives: Vec<IntrospectionDirective>,
}
impl IntrospectionSchema {
    pub fn custom_directives(&self, srcloc: &loc::SourceLocation) -> Vec<Directive> {
        self.directives.iter()
            .map(|directive| Directive::Custom {
                def_location: srcloc.to_owned(),
                description: directive.description.to_owned(),
                name: directive.name.to_string(),
                params: parameters(srcloc, &directive.args),
            })
            .collect()
    }

    /// Convert every non-builtin, non-introspection type.
    pub fn types_to_graphql_types(&self, srcloc: &loc::SourceLocation) -> Vec<GraphQLType> {
        self.types.iter()
            .filter(|type_| !type_.name.starts_with("__"))
            .filter(|type_| GraphQLTypeKind::builtin_scalar(type_.name.as_str()).is_none())
            .map(|type_| type_.to_graphql_type(srcloc))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedTypeRef {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FullType {
    kind: TypeKind,
    name: String,
    description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<IntrospectionField>>,
    #[serde(default)]
    input_fields: Option<Vec<IntrospectionInputValue>>,
    #[serde(default)]
    interfaces: Option<Vec<NamedTypeRef>>,
    #[serde(default)]
    enum_values: Option<Vec<IntrospectionEnumValue>>,
    #[serde(default)]
    possible_types: Option<Vec<NamedTypeRef>>,
}
impl FullType {
    fn to_graphql_type(&self, srcloc: &loc::SourceLocation) -> GraphQLType {
        match self.kind {
            TypeKind::Enum => GraphQLType::Enum(Box::new(EnumType {
                def_location: srcloc.to_owned(),
                description: self.description.to_owned(),
                directives: vec![],
                name: self.name.to_string(),
                values: self.enum_values.iter().flatten()
                    .map(|value| (value.name.to_string(), EnumValue {
                        def_location: srcloc.to_owned(),
                        description: value.description.to_owned(),
                        directives: deprecation_directives(
                            srcloc,
                            value.is_deprecated,
                            value.deprecation_reason.as_deref(),
                        ),
                        name: value.name.to_string(),
                    }))
                    .collect(),
            })),

            TypeKind::InputObject => GraphQLType::InputObject(Box::new(InputObjectType {
                def_location: srcloc.to_owned(),
                description: self.description.to_owned(),
                directives: vec![],
                fields: self.input_fields.iter().flatten()
                    .map(|field| (field.name.to_string(), InputField {
                        def_location: srcloc.to_owned(),
                        default_value: field.parsed_default_value(),
                        description: field.description.to_owned(),
                        directives: vec![],
                        name: field.name.to_string(),
                        type_annotation: field.type_.to_type_annotation(srcloc),
                    }))
                    .collect(),
                name: self.name.to_string(),
            })),

            TypeKind::Interface =>
                GraphQLType::Interface(Box::new(InterfaceType(self.object_or_interface_data(srcloc)))),

            TypeKind::Object =>
                GraphQLType::Object(Box::new(ObjectType(self.object_or_interface_data(srcloc)))),

            TypeKind::Union => GraphQLType::Union(Box::new(UnionType {
                def_location: srcloc.to_owned(),
                description: self.description.to_owned(),
                directives: vec![],
                members: self.possible_types.iter().flatten()
                    .map(|member| (
                        member.name.to_string(),
                        NamedGraphQLTypeRef::new(member.name.as_str(), srcloc.to_owned()),
                    ))
                    .collect(),
                name: self.name.to_string(),
            })),

            // Wrapper kinds never appear as named types; treat anything
            // unexpected as an opaque custom scalar.
            TypeKind::Scalar | TypeKind::List | TypeKind::NonNull =>
                GraphQLType::Scalar(Box::new(ScalarType {
                    def_location: srcloc.to_owned(),
                    description: self.description.to_owned(),
                    directives: vec![],
                    name: self.name.to_string(),
                })),
        }
    }

    fn object_or_interface_data(&self, srcloc: &loc::SourceLocation) -> ObjectOrInterfaceTypeData {
        ObjectOrInterfaceTypeData {
            def_location: srcloc.to_owned(),
            description: self.description.to_owned(),
            directives: vec![],
            fields: self.fields.iter().flatten()
                .filter(|field| !field.name.starts_with("__"))
                .map(|field| (field.name.to_string(), Field {
                    def_location: srcloc.to_owned(),
                    description: field.description.to_owned(),
                    directives: deprecation_directives(
                        srcloc,
                        field.is_deprecated,
                        field.deprecation_reason.as_deref(),
                    ),
                    name: field.name.to_string(),
                    parameters: parameters(srcloc, &field.args),
                    type_annotation: field.type_.to_type_annotation(srcloc),
                }))
                .collect(),
            interfaces: self.interfaces.iter().flatten()
                .map(|iface| NamedGraphQLTypeRef::new(iface.name.as_str(), srcloc.to_owned()))
                .collect(),
            name: self.name.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionField {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
    #[serde(rename = "type")]
    type_: IntrospectionTypeRef,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionInputValue {
    name: String,
    description: Option<String>,
    #[serde(rename = "type")]
    type_: IntrospectionTypeRef,
    default_value: Option<String>,
}
impl IntrospectionInputValue {
    /// Introspection reports default values as GraphQL literal text.
    fn parsed_default_value(&self) -> Option<Value> {
        let literal = self.default_value.as_deref()?;
        let doc = ast::operation::parse(format!("{{ f(v: {literal}) }}").as_str()).ok()?;
        let ast::operation::Definition::Operation(
            ast::operation::OperationDefinition::SelectionSet(selection_set),
        ) = doc.definitions.first()? else {
            return None;
        };
        let ast::operation::Selection::Field(field) = selection_set.items.first()? else {
            return None;
        };
        field.arguments.first().map(|(_, value)| Value::from_ast(value))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntrospectionEnumValue {
    name: String,
    description: Option<String>,
    #[serde(default)]
    is_deprecated: bool,
    deprecation_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IntrospectionDirective {
    name: String,
    description: Option<String>,
    #[serde(default)]
    args: Vec<IntrospectionInputValue>,
}

#[derive(Debug, Deserialize)]
struct IntrospectionTypeRef {
    kind: TypeKind,
    name: Option<String>,
    #[serde(rename = "ofType")]
    of_type: Option<Box<IntrospectionTypeRef>>,
}
impl IntrospectionTypeRef {
    fn to_type_annotation(&self, srcloc: &loc::SourceLocation) -> TypeAnnotation {
        self.to_type_annotation_impl(srcloc, /* nullable = */ true)
    }

    fn to_type_annotation_impl(
        &self,
        srcloc: &loc::SourceLocation,
        nullable: bool,
    ) -> TypeAnnotation {
        match (self.kind, &self.of_type) {
            (TypeKind::NonNull, Some(inner)) =>
                inner.to_type_annotation_impl(srcloc, false),

            (TypeKind::List, Some(inner)) => TypeAnnotation::list(
                inner.to_type_annotation(srcloc),
                nullable,
                srcloc.to_owned(),
            ),

            _ => TypeAnnotation::named(
                self.name.as_deref().unwrap_or_default(),
                nullable,
                srcloc.to_owned(),
            ),
        }
    }
}

fn deprecation_directives(
    srcloc: &loc::SourceLocation,
    is_deprecated: bool,
    reason: Option<&str>,
) -> Vec<DirectiveAnnotation> {
    if !is_deprecated {
        return vec![];
    }
    let mut args = IndexMap::new();
    if let Some(reason) = reason {
        args.insert("reason".to_string(), Value::String(reason.to_string()));
    }
    vec![DirectiveAnnotation {
        args,
        def_location: srcloc.to_owned(),
        directive_name: "deprecated".to_string(),
    }]
}

fn parameters(
    srcloc: &loc::SourceLocation,
    args: &[IntrospectionInputValue],
) -> IndexMap<String, Parameter> {
    args.iter()
        .map(|arg| (arg.name.to_string(), Parameter {
            def_location: srcloc.to_owned(),
            default_value: arg.parsed_default_value(),
            name: arg.name.to_string(),
            type_annotation: arg.type_.to_type_annotation(srcloc),
        }))
        .collect()
}
