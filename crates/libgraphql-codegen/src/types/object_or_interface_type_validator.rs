use crate::schema::TypeValidationError;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;

/// Checks one object or interface type: that it correctly implements every
/// interface it (transitively) claims, and that its fields and parameters
/// use types of the right direction.
pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types_map: &'a HashMap<String, GraphQLType>,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a ObjectOrInterfaceTypeData,
        types_map: &'a HashMap<String, GraphQLType>,
    ) -> Self {
        Self {
            errors: vec![],
            type_,
            types_map,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.check_interfaces();
        self.check_field_types();
        self.errors
    }

    /// Walks the interface graph breadth-first from the declared
    /// interfaces, visiting each interface once.
    ///
    /// https://spec.graphql.org/October2021/#IsValidImplementation()
    fn check_interfaces(&mut self) {
        let declared = self.type_.interface_names();
        let declared_set = declared.iter().copied().collect::<HashSet<_>>();
        let mut visited = HashSet::new();
        let mut pending = declared.iter()
            .map(|iface_name| (*iface_name, vec![]))
            .collect::<VecDeque<(&'a str, Vec<&'a str>)>>();

        while let Some((iface_name, via)) = pending.pop_front() {
            if !visited.insert(iface_name) {
                continue;
            }
            let Some(iface) = self.resolve_interface(iface_name, via.is_empty()) else {
                continue;
            };

            let mut path = via;
            path.push(iface_name);
            for parent_name in iface.interface_names() {
                if !declared_set.contains(parent_name) {
                    self.errors.push(TypeValidationError::MissingRecursiveInterfaceImplementation {
                        inheritance_path: path.iter().map(|name| name.to_string()).collect(),
                        location: self.type_.def_location().to_owned(),
                        missing_recursive_interface_name: parent_name.to_string(),
                        type_name: self.type_.name().to_string(),
                    });
                }
                pending.push_back((parent_name, path.clone()));
            }

            for (field_name, iface_field) in iface.fields() {
                self.check_interface_field(iface_name, field_name, iface_field);
            }
        }
    }

    /// Problems with an interface reached only through another interface
    /// are reported against that interface, not again here.
    fn resolve_interface(
        &mut self,
        iface_name: &str,
        report_problems: bool,
    ) -> Option<&'a InterfaceType> {
        let type_name = self.type_.name().to_string();
        let location = self.type_.def_location().to_owned();
        match self.types_map.get(iface_name) {
            Some(GraphQLType::Interface(iface)) => Some(iface),
            Some(other_type) => {
                if report_problems {
                    self.errors.push(TypeValidationError::ImplementsNonInterfaceType {
                        location,
                        non_interface_type_name: other_type.name().to_string(),
                        type_name,
                    });
                }
                None
            },
            None => {
                if report_problems {
                    self.errors.push(TypeValidationError::ImplementsUndefinedInterface {
                        location,
                        type_name,
                        undefined_interface_name: iface_name.to_string(),
                    });
                }
                None
            },
        }
    }

    fn check_interface_field(
        &mut self,
        iface_name: &str,
        field_name: &str,
        iface_field: &Field,
    ) {
        let type_name = self.type_.name();
        let Some(type_field) = self.type_.fields().get(field_name) else {
            self.errors.push(TypeValidationError::MissingInterfaceSpecifiedField {
                field_name: field_name.to_string(),
                interface_name: iface_name.to_string(),
                location: self.type_.def_location().to_owned(),
                type_name: type_name.to_string(),
            });
            return;
        };

        let iface_params = iface_field.parameters();
        let type_params = type_field.parameters();
        for (param_name, iface_param) in iface_params {
            let Some(type_param) = type_params.get(param_name) else {
                self.errors.push(TypeValidationError::MissingInterfaceFieldParameter {
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    location: type_field.def_location().to_owned(),
                    missing_parameter_name: param_name.to_string(),
                    type_name: type_name.to_string(),
                });
                continue;
            };

            let expected = iface_param.type_annotation();
            let actual = type_param.type_annotation();
            if !actual.is_equivalent_to(expected) {
                self.errors.push(TypeValidationError::InterfaceFieldParameterTypeMismatch {
                    expected_parameter_type: expected.to_owned(),
                    field_name: field_name.to_string(),
                    interface_name: iface_name.to_string(),
                    invalid_parameter_type: actual.to_owned(),
                    location: type_param.def_location().to_owned(),
                    parameter_name: param_name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }

        // Parameters the interface doesn't know about must be optional.
        let extra_required_params = type_params.iter()
            .filter(|(param_name, _)| !iface_params.contains_key(*param_name))
            .filter(|(_, param)| {
                !param.type_annotation().nullable() && param.default_value().is_none()
            });
        for (param_name, param) in extra_required_params {
            self.errors.push(TypeValidationError::RequiredParameterNotOnInterface {
                field_name: field_name.to_string(),
                interface_name: iface_name.to_string(),
                location: param.type_annotation().ref_location().to_owned(),
                parameter_name: param_name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let expected = iface_field.type_annotation();
        let actual = type_field.type_annotation();
        if !actual.is_subtype_of_impl(self.types_map, expected) {
            self.errors.push(TypeValidationError::InterfaceFieldTypeMismatch {
                expected_field_type: expected.to_owned(),
                field_name: field_name.to_string(),
                interface_name: iface_name.to_string(),
                invalid_field_type: actual.to_owned(),
                location: actual.ref_location().to_owned(),
                type_name: type_name.to_string(),
            });
        }
    }

    fn check_field_types(&mut self) {
        let type_name = self.type_.name();
        for (field_name, field) in self.type_.fields() {
            let annot = field.type_annotation();
            match self.types_map.get(annot.innermost_type_name()) {
                None => self.errors.push(TypeValidationError::UndefinedTypeName {
                    location: annot.ref_location().to_owned(),
                    undefined_type_name: annot.innermost_type_name().to_string(),
                }),
                Some(field_type) if !field_type.is_output_type() =>
                    self.errors.push(TypeValidationError::OutputFieldWithInputType {
                        field_name: field_name.to_string(),
                        input_type_name: field_type.name().to_string(),
                        location: annot.ref_location().to_owned(),
                        parent_type_name: type_name.to_string(),
                    }),
                Some(_) => (),
            }

            for (param_name, param) in field.parameters() {
                let annot = param.type_annotation();
                match self.types_map.get(annot.innermost_type_name()) {
                    None => self.errors.push(TypeValidationError::UndefinedTypeName {
                        location: annot.ref_location().to_owned(),
                        undefined_type_name: annot.innermost_type_name().to_string(),
                    }),
                    Some(param_type) if !param_type.is_input_type() =>
                        self.errors.push(TypeValidationError::ParameterWithOutputType {
                            location: annot.ref_location().to_owned(),
                            output_type_name: param_type.name().to_string(),
                            parameter_name: param_name.to_string(),
                        }),
                    Some(_) => (),
                }
            }
        }
    }
}
