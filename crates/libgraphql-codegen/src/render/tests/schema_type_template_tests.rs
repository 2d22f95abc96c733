use crate::ir::Ir;
use crate::render::CaseConversionStrategy;
use crate::render::CodegenConfig;
use crate::render::Composition;
use crate::render::Entity;
use crate::render::RenderContext;
use crate::render::tests::utils::build_ir;
use crate::render::tests::utils::module_type;
use crate::render::tests::utils::test_config;
use indoc::indoc;

const SCHEMA: &str = indoc! {r#"
    type Query {
      animal(filter: AnimalFilter): Animal
      search: SearchResult
    }

    "An animal."
    interface Animal {
      species: String!
    }

    type Dog implements Animal {
      species: String!
      size: Size
    }

    type Cat implements Animal {
      species: String!
    }

    union SearchResult = Dog

    enum Size {
      SMALL
      EXTRA_LARGE
      LEGACY @deprecated(reason: "Use SMALL.")
    }

    "A calendar date."
    scalar Date

    input AnimalFilter {
      species: String
      bornAfter: Date
      size: Size! = SMALL
    }
"#};

const DOCUMENT: &str = indoc! {"
    query Animal($filter: AnimalFilter) {
      animal(filter: $filter) {
        species
      }
      search {
        __typename
      }
    }
"};

fn render_named(config: &CodegenConfig, ir: &Ir, name: &str) -> String {
    let ctx = RenderContext::new(config, ir).unwrap();
    let entity = Entity::all(ir)
        .into_iter()
        .find(|entity| entity.name() == name)
        .unwrap_or_else(|| panic!("no entity named `{name}`"));
    entity.render(&ctx).unwrap()
}

#[test]
fn enum_cases_are_camel_cased_with_raw_values() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "Size");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public enum Size: String, EnumType {
          case small = "SMALL"
          case extraLarge = "EXTRA_LARGE"
          @available(*, deprecated, message: "Use SMALL.")
          case legacy = "LEGACY"
        }
    "#});
}

#[test]
fn enum_cases_keep_schema_names_without_conversion() {
    let mut config = test_config();
    config.options.conversion_strategies.enum_cases = CaseConversionStrategy::None;
    config.options.warnings_on_deprecated_usage = Composition::Exclude;
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&config, &ir, "Size");

    assert_eq!(actual, indoc! {"
        import ApolloAPI

        public enum Size: String, EnumType {
          case SMALL
          case EXTRA_LARGE
          case LEGACY
        }
    "});
}

#[test]
fn excluded_deprecated_enum_cases_are_omitted() {
    let mut config = test_config();
    config.options.deprecated_enum_cases = Composition::Exclude;
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&config, &ir, "Size");

    assert!(!actual.contains("legacy"));
    assert!(!actual.contains("@available"));
    assert!(actual.contains("  case extraLarge = \"EXTRA_LARGE\"\n"));
}

#[test]
fn input_object_renders_initializer_and_accessors() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "AnimalFilter");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public struct AnimalFilter: InputObject {
          public private(set) var __data: InputDict

          public init(_ data: InputDict) {
            __data = data
          }

          public init(
            species: GraphQLNullable<String> = nil,
            bornAfter: GraphQLNullable<TestSchema.Date> = nil,
            size: GraphQLEnum<TestSchema.Size> = "SMALL"
          ) {
            __data = InputDict([
              "species": species,
              "bornAfter": bornAfter,
              "size": size
            ])
          }

          public var species: GraphQLNullable<String> {
            get { __data["species"] }
            set { __data["species"] = newValue }
          }

          public var bornAfter: GraphQLNullable<TestSchema.Date> {
            get { __data["bornAfter"] }
            set { __data["bornAfter"] = newValue }
          }

          public var size: GraphQLEnum<TestSchema.Size> {
            get { __data["size"] }
            set { __data["size"] = newValue }
          }
        }
    "#});
}

#[test]
fn object_lists_implemented_interfaces() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "Dog");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public final class Dog: Object {
          override public class var __typename: StaticString { "Dog" }

          override public class var __implementedInterfaces: [Interface.Type]? { _implementedInterfaces }
          private static let _implementedInterfaces: [Interface.Type]? = [
            TestSchema.Animal.self
          ]
        }
    "#});
}

#[test]
fn object_without_interfaces_only_declares_typename() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "Query");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public final class Query: Object {
          override public class var __typename: StaticString { "Query" }
        }
    "#});
}

#[test]
fn interface_renders_description_and_class() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "Animal");

    assert_eq!(actual, indoc! {"
        import ApolloAPI

        /// An animal.
        public final class Animal: Interface {}
    "});
}

#[test]
fn union_lists_possible_types() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "SearchResult");

    assert_eq!(actual, indoc! {"
        import ApolloAPI

        public enum SearchResult: UnionType {
          public static let possibleTypes: [Object.Type] = [
            TestSchema.Dog.self
          ]
        }
    "});
}

#[test]
fn custom_scalar_is_a_string_alias() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "Date");

    assert_eq!(actual, indoc! {"
        import ApolloAPI

        /// A calendar date.
        public typealias Date = String
    "});
}

#[test]
fn schema_types_embedded_in_target_extend_the_namespace() {
    let mut config = test_config();
    config.output.schema_types.module_type =
        module_type("embeddedInTarget", Some("MyApplicationTarget"));
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&config, &ir, "Date");

    assert_eq!(actual, indoc! {"
        import ApolloAPI

        public extension TestSchema {
          /// A calendar date.
          public typealias Date = String
        }
    "});
}

#[test]
fn schema_metadata_maps_every_referenced_object() {
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&test_config(), &ir, "SchemaMetadata");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public protocol SelectionSet: ApolloAPI.SelectionSet & ApolloAPI.RootSelectionSet
        where Schema == TestSchema.Schema {}

        public protocol InlineFragment: ApolloAPI.SelectionSet & ApolloAPI.InlineFragment
        where Schema == TestSchema.Schema {}

        public enum Schema: SchemaConfiguration {
          public static func objectType(forTypename typename: String) -> Object.Type? {
            switch typename {
            case "Cat": return TestSchema.Cat.self
            case "Dog": return TestSchema.Dog.self
            case "Query": return TestSchema.Query.self
            default: return nil
            }
          }
        }
    "#});
}

#[test]
fn embedded_schema_metadata_declares_namespace_enum() {
    let mut config = test_config();
    config.output.schema_types.module_type =
        module_type("embeddedInTarget", Some("MyApplicationTarget"));
    let ir = build_ir(SCHEMA, DOCUMENT);

    let actual = render_named(&config, &ir, "SchemaMetadata");

    assert!(actual.contains(indoc! {"
        public protocol TestSchema_SelectionSet: ApolloAPI.SelectionSet & ApolloAPI.RootSelectionSet
        where Schema == TestSchema.Schema {}
    "}));
    assert!(actual.contains(indoc! {"
        public enum TestSchema {
          public typealias SelectionSet = TestSchema_SelectionSet

          public typealias InlineFragment = TestSchema_InlineFragment

          public enum Schema: SchemaConfiguration {
    "}));
}
