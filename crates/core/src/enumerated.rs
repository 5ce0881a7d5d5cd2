//! Shared contract for closed sets of named units and levels
//!
//! Every enumerated type carries three string forms:
//! - **canonical**: lowercase token used for serialization and parsing
//! - **abbreviated**: short symbol for compact display (optional)
//! - **presentation**: human-readable text, not meant to be parsed back
//!
//! Parsing is always case-insensitive and never trims whitespace, since for
//! some abbreviations (the `" rad"` angle suffix) a leading space is part of
//! the token.

use crate::error::{ToolkitError, ToolkitResult};
use std::fmt;

/// A closed, ordered set of variants with a canonical string form.
pub trait EnumeratedUnit: Copy + Eq + fmt::Debug + 'static {
    /// Name used in diagnostics, e.g. `"AngleUnit"`.
    const TYPE_NAME: &'static str;

    /// All variants in declaration order.
    const VARIANTS: &'static [Self];

    /// Fallback used when input is absent.
    fn default_value() -> Self;

    /// Lowercase serialization token.
    fn to_canonical_string(self) -> &'static str;

    /// Parse against canonical tokens, ignoring ASCII case.
    ///
    /// Absent input is a defined case and yields [`Self::default_value`].
    ///
    /// # Errors
    /// Returns [`ToolkitError::InvalidArgument`] when `text` is present but
    /// matches no variant.
    fn canonical_value_of(text: Option<&str>) -> ToolkitResult<Self> {
        let Some(text) = text else {
            return Ok(Self::default_value());
        };

        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.to_canonical_string().eq_ignore_ascii_case(text))
            .ok_or_else(|| ToolkitError::no_match(Self::TYPE_NAME, text))
    }

    /// Zero-based declaration index.
    ///
    /// Every variant must appear in [`Self::VARIANTS`]; debug builds panic on
    /// one that does not.
    fn ordinal(self) -> u32 {
        let index = Self::VARIANTS.iter().position(|&variant| variant == self);
        debug_assert!(
            index.is_some(),
            "{self:?} missing from {}::VARIANTS",
            Self::TYPE_NAME
        );
        index.map_or(0, |index| index as u32)
    }

    /// Resolve a declaration index back into a variant.
    ///
    /// # Errors
    /// Returns [`ToolkitError::UnexpectedVariant`] for an ordinal outside the
    /// closed set.
    fn from_ordinal(ordinal: u32) -> ToolkitResult<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::VARIANTS.get(index))
            .copied()
            .ok_or_else(|| ToolkitError::UnexpectedVariant {
                type_name: Self::TYPE_NAME,
                variant: ordinal.to_string(),
            })
    }
}

/// Enumerated types that also have a short symbol form.
pub trait AbbreviatedUnit: EnumeratedUnit {
    /// Short display symbol.
    fn to_abbreviated_string(self) -> &'static str;

    /// Forgiving parse against abbreviated tokens.
    ///
    /// Unrecognized or absent input falls back to the default variant.
    fn abbreviated_value_of(text: Option<&str>) -> Self {
        text.and_then(|text| {
            Self::VARIANTS
                .iter()
                .copied()
                .find(|variant| variant.to_abbreviated_string().eq_ignore_ascii_case(text))
        })
        .unwrap_or_else(Self::default_value)
    }
}

/// Implements `FromStr` and serde over the canonical string of each type.
macro_rules! canonical_string_impls {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::std::str::FromStr for $ty {
                type Err = $crate::error::ToolkitError;

                fn from_str(text: &str) -> Result<Self, Self::Err> {
                    <$ty as $crate::enumerated::EnumeratedUnit>::canonical_value_of(Some(text))
                }
            }

            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    serializer.serialize_str(
                        $crate::enumerated::EnumeratedUnit::to_canonical_string(*self),
                    )
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    text.parse().map_err(::serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use canonical_string_impls;
