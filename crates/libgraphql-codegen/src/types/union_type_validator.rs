use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::UnionType;
use std::collections::HashMap;

/// Union members must all be defined object types, and there must be at
/// least one.
pub(super) fn validate_union_type(
    union_type: &UnionType,
    types_map: &HashMap<String, GraphQLType>,
) -> Vec<TypeValidationError> {
    if union_type.members.is_empty() {
        return vec![TypeValidationError::EmptyUnion {
            location: union_type.def_location().to_owned(),
            union_type_name: union_type.name().to_string(),
        }];
    }

    union_type.members.iter()
        .filter_map(|(member_name, member_ref)| {
            let location = member_ref.ref_location().to_owned();
            match types_map.get(member_name) {
                Some(GraphQLType::Object(_)) => None,
                Some(member_type) => Some(TypeValidationError::InvalidUnionMemberTypeKind {
                    invalid_member_type_kind: member_type.type_kind(),
                    invalid_member_type_name: member_name.to_string(),
                    location,
                    union_type_name: union_type.name().to_string(),
                }),
                None => Some(TypeValidationError::UndefinedTypeName {
                    location,
                    undefined_type_name: member_name.to_string(),
                }),
            }
        })
        .collect()
}
