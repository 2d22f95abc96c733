use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::InputObjectType;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Checks the fields of one input object: that their types exist and are
/// input types, and that the object cannot reach itself through a chain of
/// non-nullable, non-list fields (such a value could never be written).
pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a InputObjectType,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(
        type_: &'a InputObjectType,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        let type_ = self.type_;
        self.check_field_types();
        self.find_required_cycles(type_.name(), type_.fields(), &mut vec![]);
        self.errors
    }

    fn check_field_types(&mut self) {
        for (field_name, field) in self.type_.fields() {
            let annot = field.type_annotation();
            match self.types_map.get(annot.innermost_type_name()) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    location: annot.ref_location().to_owned(),
                    undefined_type_name: annot.innermost_type_name().to_string(),
                }),
                Some(field_type) if !field_type.is_input_type() =>
                    self.errors.push(TypeValidationError::InputFieldWithOutputType {
                        field_name: field_name.to_string(),
                        invalid_type_name: field_type.name().to_string(),
                        location: annot.ref_location().to_owned(),
                        parent_type_name: self.type_.name().to_string(),
                    }),
                Some(_) => (),
            }
        }
    }

    /// Depth-first over required input-object fields. `path` holds the
    /// `Type.field` steps taken so far.
    fn find_required_cycles(
        &mut self,
        type_name: &'a str,
        fields: &'a IndexMap<String, InputField>,
        path: &mut Vec<String>,
    ) {
        for (field_name, field) in fields {
            let annot = field.type_annotation();
            // A null or an empty list ends the chain.
            if annot.nullable() || annot.is_list() {
                continue;
            }
            let next_type_name = annot.innermost_type_name();
            let Some(GraphQLType::InputObject(next_type)) = self.types_map.get(next_type_name) else {
                continue;
            };

            let step = format!("{type_name}.{field_name}");
            if next_type_name == self.type_.name() {
                let mut circular_field_path = path.clone();
                circular_field_path.push(step);
                circular_field_path.push(next_type_name.to_string());
                self.errors.push(TypeValidationError::CircularInputFieldChain {
                    circular_field_path,
                    location: self.type_.def_location().to_owned(),
                });
                continue;
            }

            // Cycles not passing through this type are reported by the
            // types on them.
            let already_on_path = path.iter()
                .any(|visited| visited.split('.').next() == Some(next_type_name));
            if already_on_path || type_name == next_type_name {
                continue;
            }

            path.push(step);
            self.find_required_cycles(next_type_name, next_type.fields(), path);
            path.pop();
        }
    }
}
