use crate::render::QueryStringLiteralFormat;
use crate::render::tests::utils::assert_lines_at;
use crate::render::tests::utils::build_ir;
use crate::render::tests::utils::indent;
use crate::render::tests::utils::render_operation;
use crate::render::tests::utils::test_config;
use indoc::indoc;

const ANIMAL_SCHEMA: &str = indoc! {"
    type Query {
      allAnimals: [Animal!]
      animal(id: ID!, first: Int, size: Size): Animal
    }

    type Mutation {
      addAnimal(species: String!): Animal
    }

    type Animal {
      species: String!
    }

    enum Size {
      SMALL
      LARGE
    }
"};

#[test]
fn renders_complete_query() {
    let ir = build_ir(ANIMAL_SCHEMA, indoc! {"
        query AllAnimals {
          allAnimals {
            species
          }
        }
    "});

    let actual = render_operation(&test_config(), &ir, "AllAnimals");

    assert_eq!(actual, indoc! {r#"
        import ApolloAPI

        public class AllAnimalsQuery: GraphQLQuery {
          public static let operationName: String = "AllAnimals"
          public static let document: DocumentType = .notPersisted(
            definition: .init(
              """
              query AllAnimals {
                allAnimals {
                  species
                }
              }
              """
            ))

          public struct Data: TestSchema.SelectionSet {
            public let data: DataDict
            public init(data: DataDict) { self.data = data }

            public static var __parentType: ParentType { .Object(TestSchema.Query.self) }
            public static var __selections: [Selection] { [
              .field("allAnimals", [AllAnimal]?.self),
            ] }

            public var allAnimals: [AllAnimal]? { data["allAnimals"] }

            /// AllAnimal
            ///
            /// Parent Type: `Animal`
            public struct AllAnimal: TestSchema.SelectionSet {
              public let data: DataDict
              public init(data: DataDict) { self.data = data }

              public static var __parentType: ParentType { .Object(TestSchema.Animal.self) }
              public static var __selections: [Selection] { [
                .field("species", String.self),
                .field("__typename", String.self),
              ] }

              public var species: String { data["species"] }
            }
          }
        }
    "#});
}

#[test]
fn operation_name_with_kind_suffix_is_not_suffixed_twice() {
    let ir = build_ir(ANIMAL_SCHEMA, "query AllAnimalsQuery { allAnimals { species } }");

    let actual = render_operation(&test_config(), &ir, "AllAnimalsQuery");

    assert_lines_at(&actual, "public class AllAnimalsQuery: GraphQLQuery {", 3);
}

#[test]
fn mutation_renders_mutation_class_with_arguments() {
    let ir = build_ir(
        ANIMAL_SCHEMA,
        "mutation AddAnimal { addAnimal(species: \"cat\") { species } }",
    );

    let actual = render_operation(&test_config(), &ir, "AddAnimal");

    assert_lines_at(&actual, "public class AddAnimalMutation: GraphQLMutation {", 3);
    assert!(actual.contains(
        "      .field(\"addAnimal\", AddAnimal?.self, arguments: [\"species\": \"cat\"]),\n",
    ));
    assert!(actual.contains(
        "    public static var __parentType: ParentType { .Object(TestSchema.Mutation.self) }\n",
    ));
}

#[test]
fn variables_render_properties_initializer_and_variables_dict() {
    let ir = build_ir(ANIMAL_SCHEMA, indoc! {"
        query Animal($id: ID!, $first: Int = 10, $size: Size) {
          animal(id: $id, first: $first, size: $size) {
            species
          }
        }
    "});

    let actual = render_operation(&test_config(), &ir, "Animal");

    assert_lines_at(&actual, "public class AnimalQuery: GraphQLQuery {", 3);
    assert!(actual.contains(&indent(indoc! {r#"
        public var id: String
        public var first: GraphQLNullable<Int>
        public var size: GraphQLNullable<GraphQLEnum<TestSchema.Size>>

        public init(
          id: String,
          first: GraphQLNullable<Int> = 10,
          size: GraphQLNullable<GraphQLEnum<TestSchema.Size>> = nil
        ) {
          self.id = id
          self.first = first
          self.size = size
        }

        public var __variables: Variables? { [
          "id": id,
          "first": first,
          "size": size
        ] }

        public struct Data: TestSchema.SelectionSet {
    "#}, 1)));
    assert!(actual.contains(
        "      .field(\"animal\", Animal?.self, arguments: [\
        \"id\": .variable(\"id\"), \
        \"first\": .variable(\"first\"), \
        \"size\": .variable(\"size\")]),\n",
    ));
}

#[test]
fn spread_fragments_are_listed_in_document() {
    let ir = build_ir(ANIMAL_SCHEMA, indoc! {"
        query AllAnimals {
          allAnimals {
            ...AnimalDetails
          }
        }

        fragment AnimalDetails on Animal {
          species
        }
    "});

    let actual = render_operation(&test_config(), &ir, "AllAnimals");

    assert!(actual.contains(&indent(indoc! {r#"
        public static let document: DocumentType = .notPersisted(
          definition: .init(
            """
            query AllAnimals {
              allAnimals {
                ...AnimalDetails
              }
            }
            """,
            fragments: [AnimalDetails.self]
          ))
    "#}, 1)));
    assert!(actual.contains("        .fragment(AnimalDetails.self),\n"));
}

#[test]
fn single_line_format_collapses_operation_document() {
    let mut config = test_config();
    config.options.query_string_literal_format = QueryStringLiteralFormat::SingleLine;
    let ir = build_ir(ANIMAL_SCHEMA, "query AllAnimals {\n  allAnimals {\n    species\n  }\n}");

    let actual = render_operation(&config, &ir, "AllAnimals");

    assert_lines_at(&actual, "      \"query AllAnimals { allAnimals { species } }\"", 6);
    assert_lines_at(&actual, "    ))", 7);
}

#[test]
fn legacy_safelisting_adds_typename_to_nested_selections_only() {
    let mut config = test_config();
    config.experimental_features.legacy_safelisting_compatible_operations = true;
    let ir = build_ir(ANIMAL_SCHEMA, "query AllAnimals { allAnimals { species } }");

    let actual = render_operation(&config, &ir, "AllAnimals");

    assert!(actual.contains(&indent(indoc! {"
        query AllAnimals {
          allAnimals {
            species
            __typename
          }
        }
    "}, 3)));
}
