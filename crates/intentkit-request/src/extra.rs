//! Typed payload values
//!
//! Every extra carried by a [`Request`](crate::Request) is an [`ExtraValue`]:
//! a closed union with one variant per supported [`ExtraKind`]. Values enter
//! through `From` conversions, so the kind tag always follows the Rust type
//! the caller passed in.

use crate::error::ExtraError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Closed set of payload kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraKind {
    /// UTF-8 string
    String,
    /// 32-bit signed integer
    Int,
    /// Boolean
    Boolean,
    /// 64-bit float
    Double,
    /// 32-bit float
    Float,
    /// 64-bit signed integer
    Long,
    /// Single character
    Char,
    /// 16-bit signed integer
    Short,
    /// 8-bit signed integer
    Byte,
    /// Structured value carried as JSON
    Serializable,
    /// Text sequence, tagged apart from plain strings
    CharSequence,
}

impl ExtraKind {
    /// Every kind, in declaration order
    pub const ALL: [ExtraKind; 11] = [
        ExtraKind::String,
        ExtraKind::Int,
        ExtraKind::Boolean,
        ExtraKind::Double,
        ExtraKind::Float,
        ExtraKind::Long,
        ExtraKind::Char,
        ExtraKind::Short,
        ExtraKind::Byte,
        ExtraKind::Serializable,
        ExtraKind::CharSequence,
    ];

    /// Stable lowercase name, matching the serialized tag
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraKind::String => "string",
            ExtraKind::Int => "int",
            ExtraKind::Boolean => "boolean",
            ExtraKind::Double => "double",
            ExtraKind::Float => "float",
            ExtraKind::Long => "long",
            ExtraKind::Char => "char",
            ExtraKind::Short => "short",
            ExtraKind::Byte => "byte",
            ExtraKind::Serializable => "serializable",
            ExtraKind::CharSequence => "char_sequence",
        }
    }
}

impl Display for ExtraKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text sequence payload
///
/// Wraps a `String` so that text passed as a sequence keeps the
/// [`ExtraKind::CharSequence`] tag instead of collapsing into
/// [`ExtraKind::String`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharSequence(String);

impl CharSequence {
    /// Wrap text as a sequence
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CharSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharSequence {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for CharSequence {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for CharSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single tagged payload value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ExtraValue {
    /// UTF-8 string
    String(String),
    /// 32-bit signed integer
    Int(i32),
    /// Boolean
    Boolean(bool),
    /// 64-bit float
    Double(#[serde(with = "non_finite::double")] f64),
    /// 32-bit float
    Float(#[serde(with = "non_finite::float")] f32),
    /// 64-bit signed integer
    Long(i64),
    /// Single character
    Char(char),
    /// 16-bit signed integer
    Short(i16),
    /// 8-bit signed integer
    Byte(i8),
    /// Structured value carried as JSON
    Serializable(serde_json::Value),
    /// Text sequence
    CharSequence(CharSequence),
}

impl ExtraValue {
    /// Kind tag of this value
    #[must_use]
    pub fn kind(&self) -> ExtraKind {
        match self {
            ExtraValue::String(_) => ExtraKind::String,
            ExtraValue::Int(_) => ExtraKind::Int,
            ExtraValue::Boolean(_) => ExtraKind::Boolean,
            ExtraValue::Double(_) => ExtraKind::Double,
            ExtraValue::Float(_) => ExtraKind::Float,
            ExtraValue::Long(_) => ExtraKind::Long,
            ExtraValue::Char(_) => ExtraKind::Char,
            ExtraValue::Short(_) => ExtraKind::Short,
            ExtraValue::Byte(_) => ExtraKind::Byte,
            ExtraValue::Serializable(_) => ExtraKind::Serializable,
            ExtraValue::CharSequence(_) => ExtraKind::CharSequence,
        }
    }

    /// Encode any serializable value as a [`ExtraValue::Serializable`]
    ///
    /// # Errors
    ///
    /// Returns [`ExtraError::Encode`] when the value has no JSON
    /// representation (for example a map with non-string keys).
    pub fn serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, ExtraError> {
        serde_json::to_value(value)
            .map(ExtraValue::Serializable)
            .map_err(ExtraError::Encode)
    }

    /// Borrow textual content of `String` and `CharSequence` values
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtraValue::String(s) => Some(s),
            ExtraValue::CharSequence(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Float payloads that JSON numbers cannot hold
///
/// Finite values stay plain numbers. NaN and the infinities are written as
/// the strings `"NaN"`, `"inf"` and `"-inf"` and read back from them.
mod non_finite {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INFINITY: &str = "inf";
    const NEG_INFINITY: &str = "-inf";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Number(T),
        Text(String),
    }

    macro_rules! float_codec {
        ($module:ident, $ty:ident, $serialize:ident) => {
            pub(super) mod $module {
                use super::*;

                #[allow(clippy::trivially_copy_pass_by_ref)]
                pub(in crate::extra) fn serialize<S: Serializer>(
                    value: &$ty,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    if value.is_nan() {
                        serializer.serialize_str(NAN)
                    } else if value.is_infinite() {
                        serializer.serialize_str(if value.is_sign_positive() {
                            INFINITY
                        } else {
                            NEG_INFINITY
                        })
                    } else {
                        serializer.$serialize(*value)
                    }
                }

                pub(in crate::extra) fn deserialize<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<$ty, D::Error> {
                    match Repr::<$ty>::deserialize(deserializer)? {
                        Repr::Number(value) => Ok(value),
                        Repr::Text(text) => match text.as_str() {
                            NAN => Ok($ty::NAN),
                            INFINITY => Ok($ty::INFINITY),
                            NEG_INFINITY => Ok($ty::NEG_INFINITY),
                            other => Err(de::Error::invalid_value(
                                Unexpected::Str(other),
                                &"a number, \"NaN\", \"inf\" or \"-inf\"",
                            )),
                        },
                    }
                }
            }
        };
    }

    float_codec!(double, f64, serialize_f64);
    float_codec!(float, f32, serialize_f32);
}

/// Types that can be read back out of an [`ExtraValue`]
pub trait FromExtra: Sized {
    /// Kind this type is stored under
    const KIND: ExtraKind;

    /// Extract a copy of the value when the kinds match
    fn from_extra(value: &ExtraValue) -> Option<Self>;
}

macro_rules! extra_conversions {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ExtraValue {
                fn from(value: $ty) -> Self {
                    ExtraValue::$variant(value)
                }
            }

            impl FromExtra for $ty {
                const KIND: ExtraKind = ExtraKind::$variant;

                #[allow(clippy::clone_on_copy)]
                fn from_extra(value: &ExtraValue) -> Option<Self> {
                    match value {
                        ExtraValue::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

extra_conversions! {
    String => String,
    i32 => Int,
    bool => Boolean,
    f64 => Double,
    f32 => Float,
    i64 => Long,
    char => Char,
    i16 => Short,
    i8 => Byte,
    serde_json::Value => Serializable,
    CharSequence => CharSequence,
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        ExtraValue::String(value.to_owned())
    }
}
