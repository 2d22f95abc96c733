use crate::operation::OperationKind;
use heck::ToLowerCamelCase;

const SWIFT_KEYWORDS: &[&str] = &[
    "Any", "Protocol", "Self", "Type", "as", "associatedtype", "break",
    "case", "catch", "class", "continue", "default", "defer", "deinit", "do",
    "else", "enum", "extension", "fallthrough", "false", "fileprivate",
    "for", "func", "guard", "if", "import", "in", "init", "inout",
    "internal", "is", "let", "nil", "operator", "private", "protocol",
    "public", "repeat", "rethrows", "return", "self", "static", "struct",
    "subscript", "super", "switch", "throw", "throws", "true", "try",
    "typealias", "var", "where", "while",
];

/// Wrap `name` in backticks if it is a reserved word in Swift.
pub(crate) fn escape_keyword(name: &str) -> String {
    if SWIFT_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

pub(crate) fn first_lowercased(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub(crate) fn first_uppercased(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The Swift case name of a GraphQL enum value under the camelCase
/// conversion strategy, e.g. `LARGE_DOG` -> `largeDog`.
pub(crate) fn enum_case_name(value_name: &str) -> String {
    value_name.to_lower_camel_case()
}

/// The class name of an operation: its name plus its kind, unless the name
/// already ends with it (`AllAnimals` -> `AllAnimalsQuery`, but
/// `AllAnimalsQuery` stays as it is).
pub(crate) fn operation_class_name(name: &str, kind: OperationKind) -> String {
    let suffix = kind.default_root_type_name();
    if name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

/// The name of the accessor for a type case, e.g. `asDog`.
pub(crate) fn type_case_accessor_name(type_name: &str) -> String {
    format!("as{}", first_uppercased(type_name))
}

/// The name of the struct for a type case, e.g. `AsDog`.
pub(crate) fn type_case_struct_name(type_name: &str) -> String {
    format!("As{}", first_uppercased(type_name))
}

/// The preferred struct name for the selections of a composite-typed field:
/// the singular of its response key, e.g. `allAnimals` -> `AllAnimal`.
pub(crate) fn field_struct_name(response_key: &str) -> String {
    first_uppercased(&singularize(response_key))
}

/// The fallback struct name for a composite-typed field whose singular name
/// is already taken.
pub(crate) fn field_struct_fallback_name(response_key: &str) -> String {
    first_uppercased(response_key)
}

fn singularize(word: &str) -> String {
    const UNCHANGED_SUFFIXES: &[&str] = &["ss", "us", "is"];
    if UNCHANGED_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "xes", "ches", "shes", "zes"] {
        if word.ends_with(suffix) && word.len() > suffix.len() {
            return word[..word.len() - 2].to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
