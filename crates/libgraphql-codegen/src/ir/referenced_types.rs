use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;
use crate::Value;
use std::collections::BTreeMap;

/// Schema-independent snapshot of an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(super) cases: Vec<EnumCase>,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumType {
    /// Cases in schema definition order.
    pub fn cases(&self) -> &[EnumCase] {
        &self.cases
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumCase {
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) is_deprecated: bool,
    pub(super) name: String,
}
impl EnumCase {
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Schema-independent snapshot of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObject {
    pub(super) description: Option<String>,
    pub(super) fields: Vec<InputField>,
    pub(super) name: String,
}
impl InputObject {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Fields in schema definition order.
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(super) default_value: Option<Value>,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) is_deprecated: bool,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// Schema-independent snapshot of an object, interface, or union type.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeType {
    pub(super) description: Option<String>,
    pub(super) implemented_interfaces: Vec<String>,
    pub(super) kind: GraphQLTypeKind,
    pub(super) name: String,
    pub(super) possible_types: Vec<String>,
}
impl CompositeType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Interfaces implemented by an object or interface type, directly or
    /// transitively, in sorted order.
    pub fn implemented_interfaces(&self) -> &[String] {
        &self.implemented_interfaces
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Object types a value of this type may be at runtime, in sorted order.
    pub fn possible_types(&self) -> &[String] {
        &self.possible_types
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomScalar {
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl CustomScalar {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Every non-built-in schema type the operations and fragments of a
/// document set depend on, deduplicated by name and grouped by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferencedTypes {
    pub(super) custom_scalars: BTreeMap<String, CustomScalar>,
    pub(super) enums: BTreeMap<String, EnumType>,
    pub(super) input_objects: BTreeMap<String, InputObject>,
    pub(super) interfaces: BTreeMap<String, CompositeType>,
    pub(super) objects: BTreeMap<String, CompositeType>,
    pub(super) unions: BTreeMap<String, CompositeType>,
}
impl ReferencedTypes {
    pub(super) fn from_schema_types<'schema>(
        schema: &'schema Schema,
        types: impl IntoIterator<Item = &'schema GraphQLType>,
    ) -> Self {
        let mut referenced = Self::default();
        for graphql_type in types {
            match graphql_type {
                GraphQLType::Enum(enum_type) => {
                    referenced.enums.insert(enum_type.name().to_string(), EnumType {
                        cases: enum_type.values().values().map(|value| {
                            let deprecation = value.deprecation_state();
                            EnumCase {
                                deprecation_reason: deprecation.reason().map(str::to_string),
                                description: value.description().map(str::to_string),
                                is_deprecated: deprecation.is_deprecated(),
                                name: value.name().to_string(),
                            }
                        }).collect(),
                        description: enum_type.description().map(str::to_string),
                        name: enum_type.name().to_string(),
                    });
                },

                GraphQLType::InputObject(input_type) => {
                    referenced.input_objects.insert(input_type.name().to_string(), InputObject {
                        description: input_type.description().map(str::to_string),
                        fields: input_type.fields().values().map(|field| {
                            let deprecation = field.deprecation_state();
                            InputField {
                                default_value: field.default_value().cloned(),
                                deprecation_reason: deprecation.reason().map(str::to_string),
                                description: field.description().map(str::to_string),
                                is_deprecated: deprecation.is_deprecated(),
                                name: field.name().to_string(),
                                type_annotation: field.type_annotation().to_owned(),
                            }
                        }).collect(),
                        name: input_type.name().to_string(),
                    });
                },

                GraphQLType::Interface(_) | GraphQLType::Object(_) | GraphQLType::Union(_) => {
                    let composite = composite_type(schema, graphql_type);
                    let target = match graphql_type.type_kind() {
                        GraphQLTypeKind::Interface => &mut referenced.interfaces,
                        GraphQLTypeKind::Object => &mut referenced.objects,
                        _ => &mut referenced.unions,
                    };
                    target.insert(composite.name.to_string(), composite);
                },

                GraphQLType::Scalar(scalar_type) => {
                    referenced.custom_scalars.insert(scalar_type.name().to_string(), CustomScalar {
                        description: scalar_type.description().map(str::to_string),
                        name: scalar_type.name().to_string(),
                    });
                },

                GraphQLType::Bool
                    | GraphQLType::Float
                    | GraphQLType::ID
                    | GraphQLType::Int
                    | GraphQLType::String
                    => (),
            }
        }
        referenced
    }

    pub fn custom_scalars(&self) -> &BTreeMap<String, CustomScalar> {
        &self.custom_scalars
    }

    pub fn enums(&self) -> &BTreeMap<String, EnumType> {
        &self.enums
    }

    pub fn input_objects(&self) -> &BTreeMap<String, InputObject> {
        &self.input_objects
    }

    pub fn interfaces(&self) -> &BTreeMap<String, CompositeType> {
        &self.interfaces
    }

    pub fn is_empty(&self) -> bool {
        self.custom_scalars.is_empty()
            && self.enums.is_empty()
            && self.input_objects.is_empty()
            && self.interfaces.is_empty()
            && self.objects.is_empty()
            && self.unions.is_empty()
    }

    pub fn objects(&self) -> &BTreeMap<String, CompositeType> {
        &self.objects
    }

    pub fn unions(&self) -> &BTreeMap<String, CompositeType> {
        &self.unions
    }
}

fn composite_type(schema: &Schema, graphql_type: &GraphQLType) -> CompositeType {
    let mut implemented_interfaces = schema
        .implemented_interface_names(graphql_type.name())
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    implemented_interfaces.sort();

    let possible_types = match graphql_type {
        GraphQLType::Object(_) => vec![],
        _ => schema.possible_types(graphql_type.name())
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    CompositeType {
        description: graphql_type.description().map(str::to_string),
        implemented_interfaces,
        kind: graphql_type.type_kind(),
        name: graphql_type.name().to_string(),
        possible_types,
    }
}
