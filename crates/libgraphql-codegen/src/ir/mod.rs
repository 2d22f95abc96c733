mod field;
mod inclusion_predicate;
mod ir;
mod ir_build_error;
mod ir_builder;
mod named_fragment;
mod operation;
mod referenced_types;
mod selection_set;

pub use field::Field;
pub use inclusion_predicate::InclusionPredicate;
pub use ir::Ir;
pub use ir_build_error::IrBuildError;
pub use ir_build_error::MergeConflictReason;
pub use ir_builder::IrBuilder;
pub use named_fragment::NamedFragment;
pub use operation::Operation;
pub use referenced_types::CompositeType;
pub use referenced_types::CustomScalar;
pub use referenced_types::EnumCase;
pub use referenced_types::EnumType;
pub use referenced_types::InputField;
pub use referenced_types::InputObject;
pub use referenced_types::ReferencedTypes;
pub use selection_set::DirectSelection;
pub use selection_set::FragmentUse;
pub use selection_set::ParentType;
pub use selection_set::ScopeKind;
pub use selection_set::SelectionSet;
pub use selection_set::TypeCase;
