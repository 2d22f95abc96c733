/// Similar to [`Operation`](crate::operation::Operation), except without the
/// corresponding metadata. Useful when representing a group or category of
/// [`Operation`](crate::operation::Operation)s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The keyword used to declare an operation of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }

    /// The name of the root operation type used when a schema doesn't
    /// declare one explicitly in a `schema { ... }` block.
    pub fn default_root_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_root_type_name())
    }
}
