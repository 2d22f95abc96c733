mod compilation_result;
mod document_build_error;
mod document_set_builder;
mod field_selection;
mod fragment;
mod fragment_builder;
mod fragment_registry;
mod fragment_registry_builder;
mod fragment_spread;
mod inclusion_condition;
mod inline_fragment;
mod operation;
mod operation_builder;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_builder;
mod source_text;
mod variable;

pub use compilation_result::CompilationResult;
pub use document_build_error::DocumentBuildError;
pub use document_set_builder::DocumentSetBuilder;
pub use field_selection::FieldSelection;
pub use fragment::Fragment;
pub use fragment::NamedFragmentRef;
use fragment_builder::FragmentBuilder;
pub use fragment_registry::FragmentRegistry;
pub use fragment_registry_builder::FragmentRegistryBuilder;
pub use fragment_spread::FragmentSpread;
pub use inclusion_condition::InclusionCondition;
pub use inline_fragment::InlineFragment;
pub use operation::Operation;
use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
use selection_set_builder::SelectionSetBuilder;
pub use source_text::fragment_source;
pub use source_text::operation_source;
pub use variable::Variable;

#[cfg(test)]
mod tests;
