use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::operation::OperationKind;
use crate::schema::introspection::IntrospectionDocument;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "deprecated",
    "include",
    "skip",
    "specifiedBy",
];

/// Utility for building a [Schema].
///
/// Any number of SDL strings, SDL files, and introspection results may be
/// loaded before calling [`SchemaBuilder::build()`]. Type extensions are
/// applied at build time, so an `extend type` may appear before (or in a
/// different file than) the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(loc::SourceLocation, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();

        for (ext_srcloc, ext) in std::mem::take(&mut self.pending_extensions) {
            self.apply_type_extension(ext_srcloc, ext)?;
        }
        self.types_map_builder.add_typename_fields();

        let types = self.types_map_builder.into_types_map()?;

        let resolve_root_type = |
            kind: OperationKind,
            explicit_def: Option<NamedTypeDefLocation>,
        | -> Result<Option<NamedGraphQLTypeRef>> {
            match explicit_def {
                Some(def) => match types.get(def.type_name.as_str()) {
                    Some(GraphQLType::Object(_)) => Ok(Some(
                        NamedGraphQLTypeRef::new(def.type_name, def.def_location),
                    )),
                    Some(non_obj_type) => Err(SchemaBuildError::InvalidRootOperationType {
                        operation: kind,
                        type_kind: non_obj_type.type_kind(),
                        type_name: def.type_name,
                        location: def.def_location,
                    }),
                    None => Err(SchemaBuildError::UndefinedRootOperationType {
                        operation: kind,
                        type_name: def.type_name,
                        location: def.def_location,
                    }),
                },

                None => match types.get(kind.default_root_type_name()) {
                    Some(GraphQLType::Object(obj_type)) => Ok(Some(
                        NamedGraphQLTypeRef::new(
                            obj_type.name(),
                            obj_type.def_location().to_owned(),
                        ),
                    )),
                    _ => Ok(None),
                },
            }
        };

        let query_type = resolve_root_type(OperationKind::Query, self.query_type.take())?
            .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            resolve_root_type(OperationKind::Mutation, self.mutation_type.take())?;
        let subscription_type =
            resolve_root_type(OperationKind::Subscription, self.subscription_type.take())?;

        log::debug!(
            "Built schema with {} types and {} directives",
            types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            query_type,
            mutation_type,
            subscription_type,
            typename_field: TypeBuilderHelpers::typename_field(),
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            subscription_type: None,
            types_map_builder: TypesMapBuilder::new(),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    /// Load SDL files. Files ending in `.json` are loaded as introspection
    /// results instead.
    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_source(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            let is_json = file_path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            self =
                if is_json {
                    self.load_introspection_json(Some(file_path), file_content.as_str())?
                } else {
                    self.load_str(Some(file_path), file_content.as_str())?
                };
        }
        Ok(self)
    }

    /// Load the result of an introspection query, either the full response
    /// (`{"data": {"__schema": ...}}`) or just its `data` member.
    pub fn load_introspection_json(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let srcloc = loc::SourceLocation::Introspection(
            file_path.map(|p| p.to_path_buf()),
        );
        let doc = IntrospectionDocument::parse(content)
            .map_err(|err| SchemaBuildError::IntrospectionParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err,
            })?;
        let schema = doc.into_schema();

        let root_types = [
            (OperationKind::Query, &schema.query_type),
            (OperationKind::Mutation, &schema.mutation_type),
            (OperationKind::Subscription, &schema.subscription_type),
        ];
        for (kind, root_type) in root_types {
            if let Some(root_type) = root_type {
                self.set_root_operation_type(kind, NamedTypeDefLocation {
                    def_location: srcloc.to_owned(),
                    type_name: root_type.name.to_string(),
                })?;
            }
        }

        for type_ in schema.types_to_graphql_types(&srcloc) {
            let type_name = type_.name().to_string();
            self.types_map_builder.add_new_type(type_name.as_str(), &srcloc, type_)?;
        }

        for directive in schema.custom_directives(&srcloc) {
            self.add_directive(directive)?;
        }

        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<&Path>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.map(|p| p.to_path_buf()),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path, def)?;
        }

        Ok(self)
    }

    fn add_directive(&mut self, directive: Directive) -> Result<()> {
        let directive_name = directive.name().to_string();
        if BUILTIN_DIRECTIVE_NAMES.contains(&directive_name.as_str()) {
            // Introspection results list the built-in directives alongside
            // custom ones.
            if matches!(directive.def_location(), loc::SourceLocation::Introspection(_)) {
                return Ok(());
            }
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name,
                location: directive.def_location().to_owned(),
            });
        }

        if directive_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: directive.def_location().to_owned(),
                directive_name,
            });
        }

        if let Some(existing) = self.directive_defs.get(directive_name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive_name.to_string(),
                location1: existing.def_location().to_owned(),
                location2: directive.def_location().to_owned(),
            });
        }

        self.directive_defs.insert(directive_name, directive);
        Ok(())
    }

    fn apply_type_extension(
        &mut self,
        ext_srcloc: loc::SourceLocation,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, expected_kind) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), GraphQLTypeKind::Enum),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), GraphQLTypeKind::InputObject),
            TypeExtension::Interface(ext) => (ext.name.to_string(), GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) => (ext.name.to_string(), GraphQLTypeKind::Object),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), GraphQLTypeKind::Scalar),
            TypeExtension::Union(ext) => (ext.name.to_string(), GraphQLTypeKind::Union),
        };

        let Some(type_) = self.types_map_builder.get_type_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc: ext_srcloc,
            });
        };

        match (type_, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.append(&mut TypeBuilderHelpers::directives_from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                TypeBuilderHelpers::enum_values_from_ast(
                    &ext_srcloc,
                    type_name.as_str(),
                    &ext.values,
                    &mut enum_type.values,
                )
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                inputobj_type.directives.append(&mut TypeBuilderHelpers::directives_from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                TypeBuilderHelpers::inputfields_from_ast(
                    &ext_srcloc,
                    type_name.as_str(),
                    &ext.fields,
                    &mut inputobj_type.fields,
                )
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                merge_object_or_interface_extension(
                    &mut iface_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.directives,
                    &ext.fields,
                ),

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
                merge_object_or_interface_extension(
                    &mut obj_type.0,
                    &ext_srcloc,
                    &ext.implements_interfaces,
                    &ext.directives,
                    &ext.fields,
                ),

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) => {
                scalar_type.directives.append(&mut TypeBuilderHelpers::directives_from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                Ok(())
            },

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.append(&mut TypeBuilderHelpers::directives_from_ast(
                    &ext_srcloc,
                    &ext.directives,
                ));
                add_union_members(union_type, &ext_srcloc, &ext.types)
            },

            (type_, _) => Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: type_.type_kind(),
                extension_kind: expected_kind,
                extension_loc: ext_srcloc,
            }),
        }
    }

    fn inject_missing_builtin_directives(&mut self) {
        for builtin in [
            Directive::Deprecated,
            Directive::Include,
            Directive::Skip,
            Directive::SpecifiedBy,
        ] {
            if !self.directive_defs.contains_key(builtin.name()) {
                self.directive_defs.insert(builtin.name().to_string(), builtin);
            }
        }
    }

    fn set_root_operation_type(
        &mut self,
        kind: OperationKind,
        typedef_loc: NamedTypeDefLocation,
    ) -> Result<()> {
        let slot = match kind {
            OperationKind::Query => &mut self.query_type,
            OperationKind::Mutation => &mut self.mutation_type,
            OperationKind::Subscription => &mut self.subscription_type,
        };
        if let Some(existing_typedef_loc) = slot.as_ref() {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: kind,
                location1: existing_typedef_loc.clone(),
                location2: typedef_loc,
            });
        }
        *slot = Some(typedef_loc);

        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let defined = [
            (OperationKind::Query, &self.query_type),
            (OperationKind::Mutation, &self.mutation_type),
            (OperationKind::Subscription, &self.subscription_type),
        ];
        for (idx, (kind1, def1)) in defined.iter().enumerate() {
            for (kind2, def2) in defined.iter().skip(idx + 1) {
                if let (Some(def1), Some(def2)) = (def1, def2) {
                    if def1.type_name == def2.type_name {
                        return Err(SchemaBuildError::NonUniqueOperationTypes {
                            reused_type_name: def1.type_name.to_owned(),
                            operation1: *kind1,
                            operation1_loc: def1.def_location.to_owned(),
                            operation2: *kind2,
                            operation2_loc: def2.def_location.to_owned(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                let pos = match &type_ext {
                    ast::schema::TypeExtension::Enum(ext) => ext.position,
                    ast::schema::TypeExtension::InputObject(ext) => ext.position,
                    ast::schema::TypeExtension::Interface(ext) => ext.position,
                    ast::schema::TypeExtension::Object(ext) => ext.position,
                    ast::schema::TypeExtension::Scalar(ext) => ext.position,
                    ast::schema::TypeExtension::Union(ext) => ext.position,
                };
                self.pending_extensions.push((
                    loc::SourceLocation::from_schema_ast_position(file_path, &pos),
                    type_ext,
                ));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );
        let params = def.arguments.iter()
            .map(|input_val| (
                input_val.name.to_string(),
                TypeBuilderHelpers::parameter_from_ast(&srcloc, input_val),
            ))
            .collect();
        self.add_directive(Directive::Custom {
            def_location: srcloc,
            description: def.description.to_owned(),
            name: def.name.to_string(),
            params,
        })
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let srcloc = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );
        let root_types = [
            (OperationKind::Query, schema_def.query),
            (OperationKind::Mutation, schema_def.mutation),
            (OperationKind::Subscription, schema_def.subscription),
        ];
        for (kind, type_name) in root_types {
            if let Some(type_name) = type_name {
                self.set_root_operation_type(kind, NamedTypeDefLocation {
                    def_location: srcloc.to_owned(),
                    type_name,
                })?;
            }
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (type_name, srcloc, type_) = match type_def {
            TypeDefinition::Enum(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                if def.values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoVariants {
                        type_name: def.name,
                        location: srcloc,
                    });
                }
                let mut values = IndexMap::new();
                TypeBuilderHelpers::enum_values_from_ast(
                    &srcloc,
                    def.name.as_str(),
                    &def.values,
                    &mut values,
                )?;
                (def.name.to_string(), srcloc.to_owned(), GraphQLType::Enum(Box::new(EnumType {
                    directives: TypeBuilderHelpers::directives_from_ast(&srcloc, &def.directives),
                    def_location: srcloc,
                    description: def.description,
                    name: def.name,
                    values,
                })))
            },

            TypeDefinition::InputObject(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut fields = IndexMap::new();
                TypeBuilderHelpers::inputfields_from_ast(
                    &srcloc,
                    def.name.as_str(),
                    &def.fields,
                    &mut fields,
                )?;
                (def.name.to_string(), srcloc.to_owned(), GraphQLType::InputObject(Box::new(InputObjectType {
                    directives: TypeBuilderHelpers::directives_from_ast(&srcloc, &def.directives),
                    def_location: srcloc,
                    description: def.description,
                    fields,
                    name: def.name,
                })))
            },

            TypeDefinition::Interface(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                if def.implements_interfaces.contains(&def.name) {
                    return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                        def_location: srcloc,
                        interface_name: def.name,
                    });
                }
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: srcloc.to_owned(),
                    description: def.description,
                    directives: vec![],
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name.to_string(),
                };
                merge_object_or_interface_extension(
                    &mut data,
                    &srcloc,
                    &def.implements_interfaces,
                    &def.directives,
                    &def.fields,
                )?;
                (def.name, srcloc, GraphQLType::Interface(Box::new(InterfaceType(data))))
            },

            TypeDefinition::Object(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut data = ObjectOrInterfaceTypeData {
                    def_location: srcloc.to_owned(),
                    description: def.description,
                    directives: vec![],
                    fields: IndexMap::new(),
                    interfaces: vec![],
                    name: def.name.to_string(),
                };
                merge_object_or_interface_extension(
                    &mut data,
                    &srcloc,
                    &def.implements_interfaces,
                    &def.directives,
                    &def.fields,
                )?;
                (def.name, srcloc, GraphQLType::Object(Box::new(ObjectType(data))))
            },

            TypeDefinition::Scalar(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                (def.name.to_string(), srcloc.to_owned(), GraphQLType::Scalar(Box::new(ScalarType {
                    directives: TypeBuilderHelpers::directives_from_ast(&srcloc, &def.directives),
                    def_location: srcloc,
                    description: def.description,
                    name: def.name,
                })))
            },

            TypeDefinition::Union(def) => {
                let srcloc = loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut union_type = UnionType {
                    directives: TypeBuilderHelpers::directives_from_ast(&srcloc, &def.directives),
                    def_location: srcloc.to_owned(),
                    description: def.description,
                    members: IndexMap::new(),
                    name: def.name.to_string(),
                };
                add_union_members(&mut union_type, &srcloc, &def.types)?;
                (def.name, srcloc, GraphQLType::Union(Box::new(union_type)))
            },
        };

        self.types_map_builder.add_new_type(type_name.as_str(), &srcloc, type_)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn add_union_members(
    union_type: &mut UnionType,
    srcloc: &loc::SourceLocation,
    member_names: &[String],
) -> Result<()> {
    for member_name in member_names {
        if let Some(existing_member) = union_type.members.get(member_name) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                type_name: union_type.name.to_string(),
                member_name: member_name.to_string(),
                member1: existing_member.ref_location().to_owned(),
                member2: srcloc.to_owned(),
            });
        }
        union_type.members.insert(
            member_name.to_string(),
            NamedGraphQLTypeRef::new(member_name, srcloc.to_owned()),
        );
    }
    Ok(())
}

fn merge_object_or_interface_extension(
    data: &mut ObjectOrInterfaceTypeData,
    srcloc: &loc::SourceLocation,
    implements_interfaces: &[String],
    directives: &[ast::schema::Directive],
    fields: &[ast::schema::Field],
) -> Result<()> {
    for iface_name in implements_interfaces {
        // Types must declare a unique list of interfaces they implement.
        //
        // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
        if data.interfaces.iter().any(|iface_ref| iface_ref.name() == iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: srcloc.to_owned(),
                duplicated_interface_name: iface_name.to_string(),
                type_name: data.name.to_string(),
            });
        }
        data.interfaces.push(NamedGraphQLTypeRef::new(iface_name, srcloc.to_owned()));
    }

    data.directives.append(&mut TypeBuilderHelpers::directives_from_ast(
        srcloc,
        directives,
    ));

    TypeBuilderHelpers::fielddefs_from_ast(
        srcloc,
        data.name.as_str(),
        fields,
        &mut data.fields,
    )
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types were defined with the name `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union lists `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
    },

    #[error("The `{type_name}` enum must define one or more unique values")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, but it is not defined")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_loc: loc::SourceLocation,
    },

    #[error("Failed to load introspection result: {err}")]
    IntrospectionParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` {} type with a {} type extension",
        type_kind.name(),
        extension_kind.name(),
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SourceLocation,
    },

    #[error("Custom directive names must not start with `__`: `@{directive_name}`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: `{param_name}` on \
        `{type_name}.{field_name}`"
    )]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type must be an object type, but \
        `{type_name}` is a {} type", type_kind.name(),
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_kind: GraphQLTypeKind,
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation1} and {operation2} root operations are defined with \
        the same GraphQL type (`{reused_type_name}`), but all root operations \
        must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation1_loc: loc::SourceLocation,
        operation2: OperationKind,
        operation2_loc: loc::SourceLocation,
    },

    #[error("Error parsing schema: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Attempted to redefine the built-in `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadSourceError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation} root operation type is declared as `{type_name}`, \
        but no such type is defined"
    )]
    UndefinedRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: loc::SourceLocation,
    },
}
impl SchemaBuildError {
    /// Where in the schema sources the problem was found, when that is known.
    pub fn location(&self) -> Option<loc::SourceLocation> {
        match self {
            Self::DuplicateDirectiveDefinition { location2: location, .. }
                | Self::DuplicateEnumValueDefinition { value_def2: location, .. }
                | Self::DuplicateFieldNameDefinition { field_def2: location, .. }
                | Self::DuplicateInterfaceImplementsDeclaration { def_location: location, .. }
                | Self::DuplicateTypeDefinition { def2: location, .. }
                | Self::DuplicatedUnionMember { member2: location, .. }
                | Self::EnumWithNoVariants { location, .. }
                | Self::ExtensionOfUndefinedType { extension_loc: location, .. }
                | Self::InvalidExtensionType { extension_loc: location, .. }
                | Self::InvalidDunderPrefixedDirectiveName { def_location: location, .. }
                | Self::InvalidDunderPrefixedFieldName { def_location: location, .. }
                | Self::InvalidDunderPrefixedParamName { def_location: location, .. }
                | Self::InvalidDunderPrefixedTypeName { def_location: location, .. }
                | Self::InvalidRootOperationType { location, .. }
                | Self::InvalidSelfImplementingInterface { def_location: location, .. }
                | Self::NonUniqueOperationTypes { operation2_loc: location, .. }
                | Self::RedefinitionOfBuiltinDirective { location, .. }
                | Self::UndefinedRootOperationType { location, .. }
                => Some(location.to_owned()),

            Self::DuplicateOperationDefinition { location2, .. } =>
                Some(location2.def_location.to_owned()),

            Self::IntrospectionParseError { file, .. } =>
                Some(loc::SourceLocation::Introspection(file.to_owned())),

            Self::ParseError { file: Some(file), .. } =>
                Some(loc::SourceLocation::Schema(loc::FilePosition {
                    col: 0,
                    file: Some(file.to_owned()),
                    line: 0,
                })),

            Self::TypeValidationErrors { errors } =>
                errors.first().map(|err| err.location().to_owned()),

            Self::NoQueryOperationTypeDefined
                | Self::ParseError { file: None, .. }
                | Self::SchemaFileReadError(_)
                => None,
        }
    }
}

/// Represents the location of a root operation type's declaration along with
/// the name of the type it declares.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
