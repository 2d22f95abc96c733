mod entity_tests;
mod operation_template_tests;
mod schema_type_template_tests;
mod utils;
