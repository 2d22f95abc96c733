use crate::ir;
use crate::ir::Ir;
use crate::operation::OperationKind;
use crate::render::composite_type_template::render_composite_type;
use crate::render::custom_scalar_template::render_custom_scalar;
use crate::render::enum_template::render_enum;
use crate::render::fragment_template::FragmentTemplate;
use crate::render::input_object_template::render_input_object;
use crate::render::naming;
use crate::render::operation_template::OperationTemplate;
use crate::render::OperationsLocation;
use crate::render::RenderContext;
use crate::render::RenderError;
use crate::render::schema_metadata_template::render_schema_metadata;
use crate::types::GraphQLTypeKind;
use std::path::Path;
use std::path::PathBuf;

const FILE_EXTENSION: &str = "graphql.swift";

/// One generated file's worth of IR: an operation, a fragment, a referenced
/// schema type, or the schema metadata.
#[derive(Clone, Copy, Debug)]
pub enum Entity<'ir> {
    CustomScalar(&'ir ir::CustomScalar),
    Enum(&'ir ir::EnumType),
    Fragment(&'ir ir::NamedFragment),
    InputObject(&'ir ir::InputObject),
    Interface(&'ir ir::CompositeType),
    Object(&'ir ir::CompositeType),
    Operation(&'ir ir::Operation),
    SchemaMetadata,
    Union(&'ir ir::CompositeType),
}
impl<'ir> Entity<'ir> {
    /// Every entity of `ir`, schema types first, each group sorted by name.
    pub fn all(ir: &'ir Ir) -> Vec<Self> {
        let types = ir.referenced_types();
        let mut entities = vec![Self::SchemaMetadata];
        entities.extend(types.objects().values().map(Self::Object));
        entities.extend(types.interfaces().values().map(Self::Interface));
        entities.extend(types.unions().values().map(Self::Union));
        entities.extend(types.enums().values().map(Self::Enum));
        entities.extend(types.input_objects().values().map(Self::InputObject));
        entities.extend(types.custom_scalars().values().map(Self::CustomScalar));
        entities.extend(ir.fragments().values().map(Self::Fragment));
        entities.extend(ir.operations().values().map(Self::Operation));
        entities
    }

    pub fn name(&self) -> &'ir str {
        match self {
            Self::CustomScalar(scalar) => scalar.name(),
            Self::Enum(enum_type) => enum_type.name(),
            Self::Fragment(fragment) => fragment.name(),
            Self::InputObject(input_object) => input_object.name(),
            Self::Interface(composite)
                | Self::Object(composite)
                | Self::Union(composite)
                => composite.name(),
            Self::Operation(operation) => operation.name(),
            Self::SchemaMetadata => "SchemaMetadata",
        }
    }

    /// Where the entity's file goes, per the configured schema types path
    /// and operations location.
    pub fn output_path(&self, ctx: &RenderContext<'_>) -> PathBuf {
        let output = &ctx.config().output;
        let schema_dir = output.schema_types.path.join("Schema");

        match self {
            Self::CustomScalar(_)
                | Self::Enum(_)
                | Self::InputObject(_)
                | Self::Interface(_)
                | Self::Object(_)
                | Self::Union(_) => {
                let subdir = self.type_kind()
                    .and_then(|kind| kind.schema_types_dir())
                    .unwrap_or_default();
                schema_dir.join(subdir).join(file_name(self.name()))
            },
            Self::SchemaMetadata => schema_dir.join(file_name("SchemaMetadata")),

            Self::Fragment(fragment) => operations_dir(
                ctx,
                "Fragments",
                fragment.source_file(),
            ).join(file_name(fragment.name())),

            Self::Operation(operation) => operations_dir(
                ctx,
                match operation.kind() {
                    OperationKind::Mutation => "Mutations",
                    OperationKind::Query => "Queries",
                    OperationKind::Subscription => "Subscriptions",
                },
                operation.source_file(),
            ).join(file_name(&naming::operation_class_name(
                operation.name(),
                operation.kind(),
            ))),
        }
    }

    /// The kind of schema type this entity generates, if it is one.
    pub fn type_kind(&self) -> Option<GraphQLTypeKind> {
        match self {
            Self::CustomScalar(_) => Some(GraphQLTypeKind::Scalar),
            Self::Enum(_) => Some(GraphQLTypeKind::Enum),
            Self::InputObject(_) => Some(GraphQLTypeKind::InputObject),
            Self::Interface(_) => Some(GraphQLTypeKind::Interface),
            Self::Object(_) => Some(GraphQLTypeKind::Object),
            Self::Union(_) => Some(GraphQLTypeKind::Union),
            Self::Fragment(_) | Self::Operation(_) | Self::SchemaMetadata => None,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        Ok(match self {
            Self::CustomScalar(scalar) => render_custom_scalar(ctx, scalar),
            Self::Enum(enum_type) => render_enum(ctx, enum_type),
            Self::Fragment(fragment) => FragmentTemplate::new(ctx, fragment).render()?,
            Self::InputObject(input_object) => render_input_object(ctx, input_object),
            Self::Interface(composite)
                | Self::Object(composite)
                | Self::Union(composite)
                => render_composite_type(ctx, composite),
            Self::Operation(operation) => OperationTemplate::new(ctx, operation).render()?,
            Self::SchemaMetadata => render_schema_metadata(ctx),
        })
    }
}

fn file_name(name: &str) -> String {
    format!("{name}.{FILE_EXTENSION}")
}

fn operations_dir(
    ctx: &RenderContext<'_>,
    group_dir: &str,
    source_file: Option<&Path>,
) -> PathBuf {
    let output = &ctx.config().output;
    match &output.operations {
        OperationsLocation::Absolute { path } => path.join(group_dir),

        OperationsLocation::InSchemaModule => {
            let module_path = output.schema_types.path.as_path();
            if group_dir == "Fragments" {
                module_path.join(group_dir)
            } else {
                module_path.join("Operations").join(group_dir)
            }
        },

        OperationsLocation::Relative { subpath } => {
            let source_dir = source_file
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_default();
            match subpath {
                Some(subpath) => source_dir.join(subpath),
                None => source_dir,
            }
        },
    }
}
