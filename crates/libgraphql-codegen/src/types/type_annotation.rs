use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use std::collections::HashMap;

/// The declared type of a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter),
/// [`InputField`](crate::types::InputField), or
/// [`Variable`](crate::operation::Variable): a named type wrapped in zero or
/// more lists, with nullability recorded at every level.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAnnotation {
    nullable: bool,
    ref_location: loc::SourceLocation,
    wrapped: Wrapped,
}

#[derive(Clone, Debug, PartialEq)]
enum Wrapped {
    List(Box<TypeAnnotation>),
    Named(String),
}

impl TypeAnnotation {
    pub(crate) fn from_ast_type(
        location: &loc::SourceLocation,
        ast_type: &ast::operation::Type,
    ) -> Self {
        match ast_type {
            ast::operation::Type::ListType(item) => Self::list(
                Self::from_ast_type(location, item),
                true,
                location.to_owned(),
            ),
            ast::operation::Type::NamedType(name) => Self::named(
                name,
                true,
                location.to_owned(),
            ),
            ast::operation::Type::NonNullType(inner) => Self {
                nullable: false,
                ..Self::from_ast_type(location, inner)
            },
        }
    }

    pub(crate) fn list(
        item: TypeAnnotation,
        nullable: bool,
        location: loc::SourceLocation,
    ) -> Self {
        Self {
            nullable,
            ref_location: location,
            wrapped: Wrapped::List(Box::new(item)),
        }
    }

    pub(crate) fn named(
        type_name: impl AsRef<str>,
        nullable: bool,
        location: loc::SourceLocation,
    ) -> Self {
        Self {
            nullable,
            ref_location: location,
            wrapped: Wrapped::Named(type_name.as_ref().to_string()),
        }
    }

    /// Name of the type at the bottom of every list wrapper.
    pub fn innermost_type_name(&self) -> &str {
        match &self.wrapped {
            Wrapped::List(item) => item.innermost_type_name(),
            Wrapped::Named(name) => name.as_str(),
        }
    }

    /// Look up the innermost named type in `schema`.
    pub fn innermost_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.types.get(self.innermost_type_name())
    }

    /// Same shape, nullability, and innermost name. Locations are ignored.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        if self.nullable != other.nullable {
            return false;
        }
        match (&self.wrapped, &other.wrapped) {
            (Wrapped::List(a), Wrapped::List(b)) => a.is_equivalent_to(b),
            (Wrapped::Named(a), Wrapped::Named(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self.wrapped, Wrapped::List(_))
    }

    /// Whether a value of this type may appear wherever `other` is expected
    /// (e.g. `Dog!` where `Animal` is expected).
    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        self.is_subtype_of_impl(&schema.types, other)
    }

    pub(super) fn is_subtype_of_impl(
        &self,
        types_map: &HashMap<String, GraphQLType>,
        other: &Self,
    ) -> bool {
        if self.nullable && !other.nullable {
            return false;
        }
        match (&self.wrapped, &other.wrapped) {
            (Wrapped::List(a), Wrapped::List(b)) =>
                a.is_subtype_of_impl(types_map, b),
            (Wrapped::Named(a), Wrapped::Named(b)) =>
                named_type_is_subtype(types_map, a, b),
            _ => false,
        }
    }

    /// The annotation of each list item, if this is a list.
    pub fn list_item(&self) -> Option<&TypeAnnotation> {
        match &self.wrapped {
            Wrapped::List(item) => Some(item),
            Wrapped::Named(_) => None,
        }
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

fn named_type_is_subtype(
    types_map: &HashMap<String, GraphQLType>,
    sub_name: &str,
    super_name: &str,
) -> bool {
    let (Some(sub_type), Some(super_type)) = (
        types_map.get(sub_name),
        types_map.get(super_name),
    ) else {
        return false;
    };
    if sub_name == super_name {
        return true;
    }

    match (sub_type, super_type) {
        (GraphQLType::Interface(sub), GraphQLType::Interface(_)) =>
            sub.interface_names().contains(&super_name),
        (GraphQLType::Object(sub), GraphQLType::Interface(_)) =>
            sub.interface_names().contains(&super_name),
        (GraphQLType::Object(_), GraphQLType::Union(union_type)) =>
            union_type.member_type_names().contains(&sub_name),
        _ => false,
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.wrapped {
            Wrapped::List(item) => write!(f, "[{item}]")?,
            Wrapped::Named(name) => f.write_str(name)?,
        }
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}
