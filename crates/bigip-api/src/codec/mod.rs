// Domain <-> wire conversion for iControl REST resources
//
// The REST API spells booleans as strings, and the spelling depends on the
// resource and the field: `"yes"`/`"no"`, `"enabled"`/`"disabled"` or
// `"true"`/`"false"`. Each resource pairs an idiomatic domain struct with a
// wire struct and converts between them field by field through
// `WireCodec`. This module holds the shared pieces: the literal tables,
// the error taxonomy, and the byte-level entry points.

mod flag;

pub use flag::{BoolEncoding, FlagLiteral, decode_flag, decode_optional_flag};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure converting between a domain value and its wire form.
///
/// Every variant is terminal for the call that produced it; the domain
/// value under construction is dropped and never handed back half-filled.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A wire boolean literal outside the recognized synonym set.
    #[error("field '{field}': unrecognized boolean literal {literal:?}")]
    UnrecognizedBooleanLiteral { field: &'static str, literal: String },

    /// The wire value has a JSON kind that no rule converts to the domain kind.
    #[error("field '{field}': cannot convert {source_kind} to {dest_kind}")]
    TypeConversionMismatch {
        field: &'static str,
        source_kind: &'static str,
        dest_kind: &'static str,
    },

    /// The payload is not valid JSON for the resource's wire shape.
    #[error("malformed wire format: {0}")]
    MalformedWireFormat(#[source] serde_json::Error),

    /// JSON encoding of the wire shape failed.
    #[error("failed to encode wire format: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// A resource with a distinct JSON transport shape.
///
/// `to_wire` cannot fail: every flag field names its encoding in the
/// conversion itself. `from_wire` builds a fresh domain value and returns
/// the first conversion error it meets.
pub trait WireCodec: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn to_wire(&self) -> Self::Wire;

    fn from_wire(wire: Self::Wire) -> Result<Self, CodecError>;
}

/// Encode a domain value to its JSON wire bytes.
pub fn to_wire_bytes<T: WireCodec>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(&value.to_wire()).map_err(CodecError::Serialization)
}

/// Decode JSON wire bytes into a domain value.
pub fn from_wire_bytes<T: WireCodec>(bytes: &[u8]) -> Result<T, CodecError> {
    let wire: T::Wire = serde_json::from_slice(bytes).map_err(CodecError::MalformedWireFormat)?;
    T::from_wire(wire)
}

/// Decode an already-parsed JSON value (e.g. one collection item).
pub fn from_wire_value<T: WireCodec>(value: serde_json::Value) -> Result<T, CodecError> {
    let wire: T::Wire = serde_json::from_value(value).map_err(CodecError::MalformedWireFormat)?;
    T::from_wire(wire)
}

/// Implement `Serialize`/`Deserialize` for a domain type by routing through
/// its `WireCodec` shape, so the type nests correctly inside other serde
/// structures (collection envelopes, CLI output).
macro_rules! impl_wire_serde {
    ($domain:ty) => {
        impl ::serde::Serialize for $domain {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(
                    &$crate::codec::WireCodec::to_wire(self),
                    serializer,
                )
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $domain {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let wire = <<$domain as $crate::codec::WireCodec>::Wire as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                <$domain as $crate::codec::WireCodec>::from_wire(wire)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use impl_wire_serde;
