use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::DocumentBuildError;
use crate::Value;

/// A runtime gate on a selection derived from an `@include(if: $var)` or
/// `@skip(if: $var)` annotation.
///
/// `@skip(if: $var)` is represented as an inverted condition on `$var`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InclusionCondition {
    pub(crate) variable: String,
    pub(crate) inverted: bool,
}
impl InclusionCondition {
    pub fn include(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            inverted: false,
        }
    }

    /// `true` when the selection is present only while the variable is
    /// `false` (i.e. it came from `@skip`).
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn skip(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            inverted: true,
        }
    }

    pub fn variable(&self) -> &str {
        self.variable.as_str()
    }
}
impl std::fmt::Display for InclusionCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.inverted {
            write!(f, "!${}", self.variable)
        } else {
            write!(f, "${}", self.variable)
        }
    }
}

/// Derive the [`InclusionCondition`]s implied by a selection's directive
/// annotations.
///
/// Literal conditions are resolved right away: `@include(if: true)` and
/// `@skip(if: false)` contribute nothing, while `@include(if: false)` and
/// `@skip(if: true)` exclude the selection entirely, in which case `None` is
/// returned.
pub(crate) fn inclusion_conditions_from_directives(
    directives: &[DirectiveAnnotation],
) -> Result<Option<Vec<InclusionCondition>>, DocumentBuildError> {
    let mut conditions = vec![];
    for annot in directives {
        let inverted = match annot.directive_name() {
            "include" => false,
            "skip" => true,
            _ => continue,
        };

        match annot.args().get("if") {
            Some(Value::Bool(value)) => {
                if *value == inverted {
                    return Ok(None);
                }
            },

            Some(Value::VarRef(var_name)) => {
                let condition = InclusionCondition {
                    variable: var_name.to_string(),
                    inverted,
                };
                if !conditions.contains(&condition) {
                    conditions.push(condition);
                }
            },

            _ => return Err(invalid_argument(annot.def_location(), annot.directive_name())),
        }
    }

    conditions.sort();
    Ok(Some(conditions))
}

fn invalid_argument(
    location: &loc::SourceLocation,
    directive_name: &str,
) -> DocumentBuildError {
    DocumentBuildError::InvalidInclusionConditionArgument {
        directive_name: directive_name.to_string(),
        location: location.to_owned(),
    }
}
