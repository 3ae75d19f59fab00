//! Case conversion: camelCase, dot.case and kebab-case.
//!
//! The converters take `&str` and are total. Values that arrive without a
//! static type (entries of a batch file) go through [`convert_value`], which
//! rejects anything that is not a string with [`CaseError::InvalidArgument`].
mod camel;
mod dot;
mod kebab;
mod words;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use camel::to_camel_case;
pub use dot::to_dot_case;
pub use kebab::to_kebab_case;
pub use words::split_words;

pub use crate::error::CaseError;

/// Target case convention.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    #[default]
    #[serde(alias = "camelCase")]
    #[value(alias = "camelCase")]
    Camel,
    /// `hello.world`
    #[serde(alias = "dot.case")]
    #[value(alias = "dot.case")]
    Dot,
    /// `hello-world`
    #[serde(alias = "kebab-case")]
    #[value(alias = "kebab-case")]
    Kebab,
}

impl Case {
    /// Every case, in declaration order.
    pub const ALL: [Self; 3] = [Self::Camel, Self::Dot, Self::Kebab];

    /// Convert `input` to this case.
    #[must_use]
    pub fn convert(self, input: &str) -> String {
        match self {
            Self::Camel => to_camel_case(input),
            Self::Dot => to_dot_case(input),
            Self::Kebab => to_kebab_case(input),
        }
    }

    /// Short lowercase name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Dot => "dot",
            Self::Kebab => "kebab",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert a dynamically typed value, failing unless it is a string.
///
/// # Errors
///
/// Returns [`CaseError::InvalidArgument`] for null, booleans, numbers,
/// arrays and objects.
pub fn convert_value(case: Case, value: &Value) -> Result<String, CaseError> {
    value
        .as_str()
        .map(|input| case.convert(input))
        .ok_or_else(|| CaseError::InvalidArgument {
            found: value_kind(value),
        })
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
