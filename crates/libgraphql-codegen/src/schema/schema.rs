use crate::operation::OperationKind;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;

/// Represents a fully typechecked and immutable GraphQL schema.
///
/// Once built, a [`Schema`] is only ever read from, so it can be shared
/// across threads while documents are parsed and compiled against it.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) query_type: NamedGraphQLTypeRef,
    pub(crate) mutation_type: Option<NamedGraphQLTypeRef>,
    pub(crate) subscription_type: Option<NamedGraphQLTypeRef>,
    pub(crate) typename_field: Field,
    pub(crate) types: HashMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns a [`HashMap<String, GraphQLType>`] containing all types defined
    /// within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &HashMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Look up the [`Field`] named `field_name` that can be selected on the
    /// type named `parent_type_name`.
    ///
    /// Union types define no fields of their own, but `__typename` can still
    /// be selected on them.
    pub fn field_on(&self, parent_type_name: &str, field_name: &str) -> Option<&Field> {
        match self.types.get(parent_type_name)? {
            GraphQLType::Interface(iface) => iface.fields().get(field_name),
            GraphQLType::Object(obj) => obj.fields().get(field_name),
            GraphQLType::Union(_) if field_name == "__typename" =>
                Some(&self.typename_field),
            _ => None,
        }
    }

    /// Indicates if the type named `type_name` is used as one of this
    /// schema's root operation types.
    pub fn is_root_operation_type(&self, type_name: &str) -> bool {
        self.query_type.name() == type_name
            || self.mutation_type.as_ref().is_some_and(|t| t.name() == type_name)
            || self.subscription_type.as_ref().is_some_and(|t| t.name() == type_name)
    }

    /// Indicates if the type named `type_name` is a sub-type of (or is the
    /// same type as) the type named `super_type_name`.
    ///
    /// A type is a sub-type of an interface if it declares that it implements
    /// the interface (directly or through an interface it implements), and a
    /// sub-type of a union if it is declared as a member of the union.
    pub fn is_subtype(&self, type_name: &str, super_type_name: &str) -> bool {
        if type_name == super_type_name {
            return true;
        }

        match self.types.get(super_type_name) {
            Some(GraphQLType::Interface(_)) =>
                self.implemented_interface_names(type_name)
                    .contains(super_type_name),
            Some(GraphQLType::Union(union_type)) =>
                union_type.members.contains_key(type_name),
            _ => false,
        }
    }

    /// The names of every interface the type named `type_name` implements,
    /// following each implemented interface's own `implements` list.
    pub fn implemented_interface_names(&self, type_name: &str) -> HashSet<&str> {
        let mut found = HashSet::new();
        let mut pending = vec![type_name];
        while let Some(next_type_name) = pending.pop() {
            let iface_names = match self.types.get(next_type_name) {
                Some(GraphQLType::Interface(iface)) => iface.interface_names(),
                Some(GraphQLType::Object(obj)) => obj.interface_names(),
                _ => continue,
            };
            for iface_name in iface_names {
                if found.insert(iface_name) {
                    pending.push(iface_name);
                }
            }
        }
        found
    }

    /// The names of all object types a value of the type named `type_name`
    /// could be at runtime, in sorted order.
    pub fn possible_types(&self, type_name: &str) -> BTreeSet<&str> {
        match self.types.get(type_name) {
            Some(GraphQLType::Object(obj)) => BTreeSet::from([obj.name()]),
            Some(GraphQLType::Union(union_type)) =>
                union_type.members.keys().map(|name| name.as_str()).collect(),
            Some(GraphQLType::Interface(_)) =>
                self.types.values()
                    .filter_map(|type_| type_.as_object())
                    .filter(|obj| self.is_subtype(obj.name(), type_name))
                    .map(|obj| obj.name())
                    .collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Returns this [`Schema`]'s Mutation[^note] root operation type (if one was
    /// defined).
    ///
    /// [^note] GraphQL [defines an object type named "Mutation" as the
    /// _default_ Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { ... }` block may name a different type instead.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// Returns this [`Schema`]'s Query root operation type.
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.query_type.deref(self).ok()
    }

    /// The name of this [`Schema`]'s Query root operation type.
    pub fn query_type_name(&self) -> &str {
        self.query_type.name()
    }

    /// Returns the root operation type used by operations of the given
    /// [`OperationKind`].
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Query => self.query_type(),
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one
    /// was defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.as_ref()
            .and_then(|named_ref| named_ref.deref(self).ok())
    }

    /// Look up a type by name.
    pub fn type_named(&self, type_name: &str) -> Option<&GraphQLType> {
        self.types.get(type_name)
    }
}
