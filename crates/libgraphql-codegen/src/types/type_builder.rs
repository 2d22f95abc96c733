use crate::ast;
use crate::directive_annotation::DirectiveAnnotationBuilder;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Conversions from `graphql_parser` schema definitions into the owned
/// [`types`](crate::types) representations shared by every kind of type
/// definition and type extension.
pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn directives_from_ast(
        srcloc: &loc::SourceLocation,
        ast_directives: &[ast::schema::Directive],
    ) -> Vec<DirectiveAnnotation> {
        DirectiveAnnotationBuilder::from_ast(srcloc, ast_directives)
    }

    pub fn enum_values_from_ast(
        type_srcloc: &loc::SourceLocation,
        type_name: &str,
        ast_values: &[ast::schema::EnumValue],
        values: &mut IndexMap<String, EnumValue>,
    ) -> Result<()> {
        for ast_value in ast_values {
            let value_srcloc = type_srcloc.with_ast_position(&ast_value.position);
            if let Some(existing_value) = values.get(ast_value.name.as_str()) {
                return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                    enum_name: type_name.to_string(),
                    value_name: ast_value.name.to_string(),
                    value_def1: existing_value.def_location().to_owned(),
                    value_def2: value_srcloc,
                });
            }
            values.insert(ast_value.name.to_string(), EnumValue {
                directives: Self::directives_from_ast(
                    &value_srcloc,
                    &ast_value.directives,
                ),
                def_location: value_srcloc,
                description: ast_value.description.to_owned(),
                name: ast_value.name.to_string(),
            });
        }
        Ok(())
    }

    /// Convert field definitions for an object or interface type, appending
    /// them to `fields` (which may already hold fields from the original
    /// definition when visiting an extension).
    pub fn fielddefs_from_ast(
        type_srcloc: &loc::SourceLocation,
        type_name: &str,
        ast_fields: &[ast::schema::Field],
        fields: &mut IndexMap<String, Field>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_srcloc = type_srcloc.with_ast_position(&ast_field.position);
            let field_name = ast_field.name.as_str();

            // https://spec.graphql.org/October2021/#sel-IAHZhCFDBDBABDl4L
            if field_name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_srcloc,
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = fields.get(field_name) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field_srcloc,
                });
            }

            let mut parameters = IndexMap::new();
            for ast_param in &ast_field.arguments {
                let param_name = ast_param.name.as_str();
                if param_name.starts_with("__") {
                    return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                        def_location: field_srcloc.with_ast_position(
                            &ast_param.position,
                        ),
                        field_name: field_name.to_string(),
                        param_name: param_name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }
                parameters.insert(
                    param_name.to_string(),
                    Self::parameter_from_ast(&field_srcloc, ast_param),
                );
            }

            fields.insert(field_name.to_string(), Field {
                directives: Self::directives_from_ast(
                    &field_srcloc,
                    &ast_field.directives,
                ),
                description: ast_field.description.to_owned(),
                name: field_name.to_string(),
                parameters,
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_srcloc,
                    &ast_field.field_type,
                ),
                def_location: field_srcloc,
            });
        }
        Ok(())
    }

    pub fn inputfields_from_ast(
        type_srcloc: &loc::SourceLocation,
        type_name: &str,
        ast_fields: &[ast::schema::InputValue],
        fields: &mut IndexMap<String, InputField>,
    ) -> Result<()> {
        for ast_field in ast_fields {
            let field_srcloc = type_srcloc.with_ast_position(&ast_field.position);
            let field_name = ast_field.name.as_str();
            if field_name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                    def_location: field_srcloc,
                    field_name: field_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }

            if let Some(existing_field) = fields.get(field_name) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: field_srcloc,
                });
            }

            fields.insert(field_name.to_string(), InputField {
                default_value: ast_field.default_value.as_ref().map(Value::from_ast),
                description: ast_field.description.to_owned(),
                directives: Self::directives_from_ast(
                    &field_srcloc,
                    &ast_field.directives,
                ),
                name: field_name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &field_srcloc,
                    &ast_field.value_type,
                ),
                def_location: field_srcloc,
            });
        }
        Ok(())
    }

    pub fn parameter_from_ast(
        parent_srcloc: &loc::SourceLocation,
        ast_param: &ast::schema::InputValue,
    ) -> Parameter {
        let param_srcloc = parent_srcloc.with_ast_position(&ast_param.position);
        Parameter {
            default_value: ast_param.default_value.as_ref().map(Value::from_ast),
            name: ast_param.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &param_srcloc,
                &ast_param.value_type,
            ),
            def_location: param_srcloc,
        }
    }

    /// The implicit `__typename: String!` meta-field every composite type
    /// can select.
    pub fn typename_field() -> Field {
        Field {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            directives: vec![],
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            type_annotation: TypeAnnotation::named(
                "String",
                /* nullable = */ false,
                loc::SourceLocation::GraphQLBuiltIn,
            ),
        }
    }
}
