use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid locale '{0}', expected a language tag like 'en' or 'en-US'")]
pub struct LocaleParseError(String);

/// Language tag used to select report text, e.g. `en` or `fr-FR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            region: None,
        }
    }

    pub fn english() -> Self {
        Self::new("en")
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    #[allow(dead_code)]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => write!(f, "{}", self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();

        let language_ok = (2..=3).contains(&language.len())
            && language.chars().all(|c| c.is_ascii_alphabetic());
        let region_ok = region.map_or(true, |r| {
            (2..=3).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
        });
        if !language_ok || !region_ok || parts.next().is_some() {
            return Err(LocaleParseError(s.to_string()));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region: region.map(|r| r.to_ascii_uppercase()),
        })
    }
}

/// Human-readable text with per-language overrides. Resolution matches on
/// the language component only and falls back to the default text, so an
/// unsupported locale never fails.
#[derive(Debug, Clone)]
pub struct Localized {
    default_text: String,
    translations: HashMap<String, String>,
}

impl Localized {
    pub fn new(default_text: &str) -> Self {
        Self {
            default_text: default_text.to_string(),
            translations: HashMap::new(),
        }
    }

    pub fn with(mut self, language: &str, text: &str) -> Self {
        self.translations
            .insert(language.to_ascii_lowercase(), text.to_string());
        self
    }

    pub fn resolve(&self, locale: &Locale) -> &str {
        self.translations
            .get(locale.language())
            .map(String::as_str)
            .unwrap_or(&self.default_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_only() {
        let locale: Locale = "en".parse().unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), None);
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn test_parse_language_and_region() {
        let locale: Locale = "fr_fr".parse().unwrap();
        assert_eq!(locale.language(), "fr");
        assert_eq!(locale.region(), Some("FR"));
        assert_eq!(locale.to_string(), "fr-FR");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Locale>().is_err());
        assert!("e".parse::<Locale>().is_err());
        assert!("english".parse::<Locale>().is_err());
        assert!("en-US-x".parse::<Locale>().is_err());
        assert!("12".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(Locale::default(), Locale::english());
    }

    #[test]
    fn test_localized_resolves_translation() {
        let text = Localized::new("Dependencies").with("fr", "Dépendances");
        assert_eq!(text.resolve(&Locale::new("fr")), "Dépendances");
        assert_eq!(text.resolve(&"fr-FR".parse().unwrap()), "Dépendances");
    }

    #[test]
    fn test_localized_falls_back_to_default() {
        let text = Localized::new("Dependencies").with("fr", "Dépendances");
        assert_eq!(text.resolve(&Locale::new("sw")), "Dependencies");
        assert_eq!(text.resolve(&Locale::english()), "Dependencies");
    }
}
