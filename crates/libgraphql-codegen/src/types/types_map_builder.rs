use crate::loc;
use crate::schema::SchemaBuildError;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputObjectTypeValidator;
use crate::types::ObjectOrInterfaceTypeValidator;
use crate::types::TypeBuilderHelpers;
use crate::types::validate_union_type;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Accumulates the named types of a schema being built, then checks them
/// against each other once every definition and extension is in.
#[derive(Debug)]
pub(crate) struct TypesMapBuilder {
    types: HashMap<String, GraphQLType>,
}
impl TypesMapBuilder {
    pub fn new() -> Self {
        let builtin_scalars = [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ];
        Self {
            types: builtin_scalars.into_iter()
                .map(|scalar| (scalar.name().to_string(), scalar))
                .collect(),
        }
    }

    pub fn add_new_type(
        &mut self,
        type_name: &str,
        type_loc: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<(), SchemaBuildError> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: type_loc.to_owned(),
                type_name: type_name.to_string(),
            });
        }

        match self.types.entry(type_name.to_string()) {
            Entry::Occupied(existing) => Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: existing.get().def_location().to_owned(),
                def2: type_loc.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(type_);
                Ok(())
            },
        }
    }

    /// Object and interface types all answer `__typename`; it goes last.
    pub fn add_typename_fields(&mut self) {
        for type_ in self.types.values_mut() {
            let fields = match type_ {
                GraphQLType::Interface(iface) => &mut iface.0.fields,
                GraphQLType::Object(obj) => &mut obj.0.fields,
                _ => continue,
            };
            fields.entry("__typename".to_string())
                .or_insert_with(TypeBuilderHelpers::typename_field);
        }
    }

    pub fn get_type_mut(&mut self, type_name: &str) -> Option<&mut GraphQLType> {
        self.types.get_mut(type_name)
    }

    /// Check every type and hand back the finished map. All problems are
    /// reported together, ordered by type name.
    pub fn into_types_map(self) -> Result<HashMap<String, GraphQLType>, SchemaBuildError> {
        let errors = self.types.iter()
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .flat_map(|type_| self.validate_type(type_))
            .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(self.types)
        } else {
            Err(SchemaBuildError::TypeValidationErrors { errors })
        }
    }

    fn validate_type(&self, type_: &GraphQLType) -> Vec<TypeValidationError> {
        match type_ {
            GraphQLType::InputObject(input_obj) =>
                InputObjectTypeValidator::new(input_obj, &self.types).validate(),
            GraphQLType::Interface(iface) =>
                ObjectOrInterfaceTypeValidator::new(&iface.0, &self.types).validate(),
            GraphQLType::Object(obj) =>
                ObjectOrInterfaceTypeValidator::new(&obj.0, &self.types).validate(),
            GraphQLType::Union(union_type) =>
                validate_union_type(union_type, &self.types),
            GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String => vec![],
        }
    }
}
