//! Security classification levels
//!
//! The textual form of a level separates words with a space rather than an
//! underscore (`TOP SECRET`). Existing serialized data uses that spelling,
//! so both `Display` and the canonical token keep it.

use crate::enumerated::{canonical_string_impls, AbbreviatedUnit, EnumeratedUnit};
use std::fmt;

/// Classification level, least to most restricted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ClassificationLevel {
    #[default]
    Unclassified,
    Confidential,
    Secret,
    TopSecret,
}

impl EnumeratedUnit for ClassificationLevel {
    const TYPE_NAME: &'static str = "ClassificationLevel";
    const VARIANTS: &'static [Self] = &[
        Self::Unclassified,
        Self::Confidential,
        Self::Secret,
        Self::TopSecret,
    ];

    fn default_value() -> Self {
        Self::default()
    }

    fn to_canonical_string(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Confidential => "confidential",
            Self::Secret => "secret",
            Self::TopSecret => "top secret",
        }
    }
}

impl AbbreviatedUnit for ClassificationLevel {
    fn to_abbreviated_string(self) -> &'static str {
        self.to_canonical_string()
    }

    /// Forgiving parse that also accepts the underscore spelling `top_secret`
    fn abbreviated_value_of(text: Option<&str>) -> Self {
        match text {
            Some(text) if text.eq_ignore_ascii_case("top_secret") => Self::TopSecret,
            Some(text) => Self::VARIANTS
                .iter()
                .copied()
                .find(|level| level.to_abbreviated_string().eq_ignore_ascii_case(text))
                .unwrap_or_else(Self::default_value),
            None => Self::default_value(),
        }
    }
}

impl ClassificationLevel {
    /// Upper-case variant name with spaces between words
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Confidential => "CONFIDENTIAL",
            Self::Secret => "SECRET",
            Self::TopSecret => "TOP SECRET",
        }
    }

    /// Title-cased form for display in dialogs and banners
    #[must_use]
    pub fn to_presentation_string(self) -> &'static str {
        match self {
            Self::Unclassified => "Unclassified",
            Self::Confidential => "Confidential",
            Self::Secret => "Secret",
            Self::TopSecret => "Top Secret",
        }
    }
}

canonical_string_impls!(ClassificationLevel);

impl fmt::Display for ClassificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
