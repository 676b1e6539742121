// Boolean literal tables
//
// Decoding accepts every known synonym regardless of which encoding a
// field uses on output; only the exact, case-sensitive literals below are
// recognized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CodecError;

/// Which string pair represents a boolean field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolEncoding {
    /// `"yes"` / `"no"`
    YesNo,
    /// `"enabled"` / `"disabled"`
    EnabledDisabled,
    /// `"true"` / `"false"`
    TrueFalse,
}

impl BoolEncoding {
    /// The `(true, false)` literal pair for this encoding.
    pub const fn literals(self) -> (&'static str, &'static str) {
        match self {
            Self::YesNo => ("yes", "no"),
            Self::EnabledDisabled => ("enabled", "disabled"),
            Self::TrueFalse => ("true", "false"),
        }
    }

    pub const fn encode(self, value: bool) -> &'static str {
        let (on, off) = self.literals();
        if value { on } else { off }
    }
}

/// Decode a wire literal into a boolean.
///
/// `"yes"`, `"enabled"`, `"true"` map to `true`; `"no"`, `"disabled"`,
/// `"false"` and the empty string map to `false`. Anything else is an
/// [`CodecError::UnrecognizedBooleanLiteral`].
pub fn decode_flag(field: &'static str, literal: &str) -> Result<bool, CodecError> {
    match literal {
        "yes" | "enabled" | "true" => Ok(true),
        "no" | "disabled" | "false" | "" => Ok(false),
        other => Err(CodecError::UnrecognizedBooleanLiteral {
            field,
            literal: other.to_owned(),
        }),
    }
}

/// Decode an optional wire flag; an absent field reads as `false`.
pub fn decode_optional_flag(
    field: &'static str,
    literal: Option<&FlagLiteral>,
) -> Result<bool, CodecError> {
    literal.map_or(Ok(false), |lit| lit.decode(field))
}

/// The JSON value found in a boolean slot of a wire struct.
///
/// Devices normally send a string literal, some endpoints send a real JSON
/// boolean, and anything else is kept so the mismatch can be reported with
/// its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagLiteral {
    Bool(bool),
    Text(String),
    Other(Value),
}

impl FlagLiteral {
    pub fn encode(value: bool, encoding: BoolEncoding) -> Self {
        Self::Text(encoding.encode(value).to_owned())
    }

    pub fn decode(&self, field: &'static str) -> Result<bool, CodecError> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::Text(literal) => decode_flag(field, literal),
            Self::Other(value) => Err(CodecError::TypeConversionMismatch {
                field,
                source_kind: json_kind(value),
                dest_kind: "bool",
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
