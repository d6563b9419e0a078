//! Record and enumeration machinery shared by every model.
//!
//! Responsibilities:
//! - Declare records with [`shape!`]: optional wire-named fields, fluent
//!   `with_*` builders, diagnostic rendering, structural equality and hashing.
//! - Declare closed string enumerations with [`string_enum!`].
//! - Back keyed-mapping helpers with [`insert_unique`].
//!
//! Does NOT handle:
//! - Constraint checking (declared per field via `#[validate(...)]`, run on demand).
//! - Transport or request signing.
//!
//! Invariants:
//! - Every record field is `Option<T>`; unset fields are omitted from JSON and
//!   from the rendered string.
//! - Rendering is deterministic: fields appear in declaration order, maps in key order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Common surface of every record declared with [`shape!`].
pub trait Shape {
    /// Service-side name of the record.
    const SHAPE_NAME: &'static str;

    /// Returns true when no field is set.
    fn is_empty(&self) -> bool;
}

/// Value rendering used by the record `Display` implementations.
pub trait RenderValue {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl RenderValue for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_render_display!(String, bool, i32, i64, Score);

impl RenderValue for DateTime<Utc> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl<T: RenderValue> RenderValue for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<K: RenderValue, V: RenderValue> RenderValue for BTreeMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.render(f)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes `{Name: value,Name: value}` for the set fields of a record.
pub struct RenderFields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> RenderFields<'a, 'b> {
    pub fn begin(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    pub fn field<T: RenderValue>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.first {
            self.f.write_str(",")?;
        }
        self.first = false;
        write!(self.f, "{name}: ")?;
        value.render(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Floating-point score with bitwise equality and hashing.
///
/// Lets records holding confidence scores or durations derive `Eq` and `Hash`.
/// Converts from `f32` only; callers holding an `f64` narrow it themselves.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(pub f32);

impl Score {
    pub fn get(self) -> f32 {
        self.0
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Score {}

impl Hash for Score {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f32> for Score {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Insert into a keyed mapping, creating it on first use.
///
/// # Errors
///
/// Returns [`ModelError::DuplicateKey`] if `key` is already present; the
/// existing entry is left untouched.
pub fn insert_unique<K, V>(
    map: &mut Option<BTreeMap<K, V>>,
    field: &'static str,
    key: K,
    value: V,
) -> crate::Result<()>
where
    K: Ord + fmt::Display,
{
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(existing) => Err(ModelError::DuplicateKey {
            field,
            key: existing.key().to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(value);
            Ok(())
        }
    }
}

/// Declare a record of optional, wire-named fields.
///
/// # Usage
/// ```ignore
/// shape! {
///     /// Where a transcript was written.
///     pub struct Transcript {
///         transcript_file_uri / with_transcript_file_uri: String => "TranscriptFileUri",
///     }
/// }
/// ```
///
/// Each entry is `field / builder: Type => "WireName"`; the field is stored as
/// `Option<Type>`. Field attributes (docs, `#[validate(...)]`, extra
/// `#[serde(...)]`) are passed through.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident / $with:ident : $ty:ty => $wire:literal,
            )*
        }
    ) => {
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::validator::Validate,
        )]
        #[serde(default)]
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Create a record with every field unset.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Set `", $wire, "` and return the updated record.")]
                pub fn $with(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::shape::Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);

            fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut fields = $crate::shape::RenderFields::begin(f)?;
                $(fields.field($wire, &self.$field)?;)*
                fields.finish()
            }
        }

        impl $crate::shape::RenderValue for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub(crate) use shape;

/// Enumerations declared with [`string_enum!`].
pub trait WireEnum {
    /// Returns true for a value outside the enumeration this client knows.
    fn is_unknown(&self) -> bool;
}

impl<T: WireEnum + ?Sized> WireEnum for &T {
    fn is_unknown(&self) -> bool {
        (**self).is_unknown()
    }
}

impl<T: WireEnum> WireEnum for Vec<T> {
    fn is_unknown(&self) -> bool {
        self.iter().any(WireEnum::is_unknown)
    }
}

/// Declare a closed enumeration serialized as its exact wire string.
///
/// Parsing with `FromStr` is strict. Deserializing a value this client does
/// not know yields `Unknown` holding the raw string, which serializes back
/// unchanged, so newer service responses keep parsing and re-encoding.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// Value this client does not recognize, as sent on the wire.
            Unknown(String),
        }

        impl $name {
            /// Wire string of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(raw) => raw,
                }
            }

            /// Every wire string the service defines for this enumeration.
            pub fn values() -> &'static [&'static str] {
                &[$($wire),+]
            }

            /// Lenient conversion used for service responses.
            pub fn from_wire(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl $crate::shape::WireEnum for $name {
            fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                match value {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::ModelError::UnknownVariant {
                        type_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                Ok(Self::from_wire(&value))
            }
        }

        impl $crate::shape::RenderValue for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use string_enum;
