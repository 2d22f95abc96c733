mod document_set_builder_tests;
mod fragment_registry_builder_tests;
