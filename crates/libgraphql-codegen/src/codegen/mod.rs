mod codegen_error;
mod codegen_request;
mod generate;
mod generated_output;

pub use codegen_error::CodegenError;
pub use codegen_error::CodegenErrorKind;
pub use codegen_request::CodegenRequest;
pub use codegen_request::SchemaSource;
pub use codegen_request::SourceText;
pub use generate::generate;
pub use generated_output::GeneratedOutput;

#[cfg(test)]
mod tests;
