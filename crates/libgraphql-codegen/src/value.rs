use crate::ast;
use indexmap::IndexMap;

/// A schema-independent argument or default value.
///
/// Values compare structurally: two `$id` references are equal regardless of
/// where in a document they were written, which is what field-merging needs
/// when it compares the arguments of two selections.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    VarRef(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    EnumValue(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub fn as_var_name(&self) -> Option<&str> {
        if let Self::VarRef(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::Value) -> Self {
        match ast_value {
            ast::Value::Variable(var_name) =>
                Value::VarRef(var_name.to_string()),

            ast::Value::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            ast::Value::Float(value) =>
                Value::Float(*value),

            ast::Value::String(value) =>
                Value::String(value.clone()),

            ast::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::Value::Null =>
                Value::Null,

            ast::Value::Enum(value) =>
                Value::EnumValue(value.to_string()),

            ast::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            // graphql_parser stores object entries in a BTreeMap, so
            // they arrive here already sorted by key.
            ast::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }

    /// Render this value using GraphQL literal syntax.
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::VarRef(name) => format!("${name}"),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:?}"),
            Self::String(s) => format!("{s:?}"),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::EnumValue(name) => name.to_string(),
            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|v| v.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(k, v)| format!("{k}: {}", v.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }

    /// Every variable name referenced anywhere within this value.
    pub fn variable_names(&self) -> Vec<&str> {
        match self {
            Self::VarRef(name) => vec![name.as_str()],
            Self::List(values) =>
                values.iter().flat_map(|v| v.variable_names()).collect(),
            Self::Object(entries) =>
                entries.values().flat_map(|v| v.variable_names()).collect(),
            _ => vec![],
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
