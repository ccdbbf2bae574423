use serde::{Deserialize, Serialize};

/// Languages the storefront serves.
///
/// Uzbek is the canonical source-of-truth language: administrative input
/// arrives in Uzbek and the other variants are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Uz,
    Ru,
    En,
}

impl Language {
    /// Parses a request language code. Unrecognized codes fall back to
    /// Uzbek, the storefront default.
    pub fn from_code(code: &str) -> Self {
        match code {
            "uz" => Language::Uz,
            "ru" => Language::Ru,
            "en" => Language::En,
            _ => Language::Uz,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Uz => "uz",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

/// A translatable attribute cluster: the legacy base field plus up to three
/// language-suffixed variants of the same content.
///
/// The base field predates multilingual support and is kept populated by the
/// write path for older readers; entities created before the split may carry
/// only the base text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub base: Option<String>,
    pub uz: Option<String>,
    pub ru: Option<String>,
    pub en: Option<String>,
}

impl LocalizedText {
    /// Cluster holding canonical Uzbek text only.
    pub fn uz(text: impl Into<String>) -> Self {
        LocalizedText {
            uz: Some(text.into()),
            ..Default::default()
        }
    }

    fn variant(&self, language: Language) -> Option<&str> {
        match language {
            Language::Uz => self.uz.as_deref(),
            Language::Ru => self.ru.as_deref(),
            Language::En => self.en.as_deref(),
        }
    }

    /// Best available text for `language`: the requested variant, then the
    /// Uzbek variant, then the legacy base field, then the empty string.
    ///
    /// Whitespace-only variants count as missing at every rung. A variant
    /// left blank on purpose and one not yet translated fall through alike.
    pub fn resolve(&self, language: Language) -> &str {
        let candidates = [
            self.variant(language),
            self.uz.as_deref(),
            self.base.as_deref(),
        ];

        for candidate in candidates.into_iter().flatten() {
            if !candidate.trim().is_empty() {
                return candidate;
            }
        }

        ""
    }
}

/// Attribute bases occurring across the translatable entity set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAttribute {
    Name,
    Description,
    Material,
    Warranty,
    Title,
    Content,
    Text,
    Address,
    WorkingHours,
}

/// Implemented by every entity carrying translatable attribute clusters.
///
/// Returning `None` means the entity type has no such attribute; resolution
/// treats that as empty text, not an error.
pub trait Localized {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText>;
}

/// Resolves `attribute` on any translatable entity.
///
/// Total over its inputs: a missing attribute or an untranslated cluster
/// resolves to the empty string rather than failing.
pub fn resolve_text<E>(entity: &E, attribute: TextAttribute, language: Language) -> String
where
    E: Localized + ?Sized,
{
    entity
        .localized_field(attribute)
        .map(|field| field.resolve(language).to_string())
        .unwrap_or_default()
}
