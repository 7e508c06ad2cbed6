//! Target languages offered by the interactive form.

use crate::error::ValidationError;
use crate::ui::Style;

/// Languages the form offers, in display order. Matching is case-sensitive.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "Urdu",
    "Arabic",
    "Bengali",
    "Chinese",
    "Dutch",
    "French",
    "German",
    "Hindi",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Pashto",
    "Persian",
    "Portuguese",
    "Punjabi",
    "Russian",
    "Spanish",
    "Swahili",
    "Turkish",
];

/// Language selected when the form is first shown.
pub const DEFAULT_LANGUAGE: &str = "Urdu";

/// Prints all supported target languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages"));
    for lang in SUPPORTED_LANGUAGES {
        if *lang == DEFAULT_LANGUAGE {
            println!("  {} {}", Style::value(lang), Style::default_marker());
        } else {
            println!("  {}", Style::value(lang));
        }
    }
}

/// Checks that `lang` is one of [`SUPPORTED_LANGUAGES`].
pub fn validate_language(lang: &str) -> Result<(), ValidationError> {
    if lang.trim().is_empty() {
        return Err(ValidationError::EmptyTargetLanguage);
    }
    if SUPPORTED_LANGUAGES.contains(&lang) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedLanguage(lang.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("Urdu").is_ok());
        assert!(validate_language("French").is_ok());
        assert!(validate_language("Chinese").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert_eq!(
            validate_language("Klingon"),
            Err(ValidationError::UnsupportedLanguage("Klingon".to_string()))
        );
        assert_eq!(
            validate_language("french"),
            Err(ValidationError::UnsupportedLanguage("french".to_string()))
        ); // Case sensitive
        assert_eq!(
            validate_language("  "),
            Err(ValidationError::EmptyTargetLanguage)
        );
    }

    #[test]
    fn test_default_language_is_supported() {
        assert_eq!(SUPPORTED_LANGUAGES.first(), Some(&DEFAULT_LANGUAGE));
    }
}
