//! Individual validation rule implementations.
//!
//! Rules return `Ok(())` on success or the [`ValidationError`] naming the
//! constraint that failed. Lengths are counted in characters, not bytes.

use super::{ValidationConfig, ValidationError, ValidationResult};
use regex::Regex;
use std::sync::LazyLock;

/// Category values a post may carry.
pub const POST_CATEGORIES: [&str; 2] = ["Fiction", "Non-Fiction"];

/// Validates that an author name is not blank.
///
/// Uniqueness needs a storage lookup and is checked by
/// [`crate::author::services::validate_name`].
///
/// # Errors
///
/// Returns [`ValidationError::EmptyAuthorName`] when the name is empty after
/// trimming.
pub fn validate_author_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

/// Validates that a phone number contains exactly the configured number of
/// digits once every other character is discarded.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhoneNumber`] when the digit count
/// differs from [`ValidationConfig::phone_number_digits`].
///
/// # Examples
///
/// ```
/// use blogrecords::validation::{ValidationConfig, rules::validate_phone_number};
///
/// let config = ValidationConfig::default();
/// assert!(validate_phone_number("(555) 123-4567", &config).is_ok());
/// assert!(validate_phone_number("555-1234", &config).is_err());
/// ```
pub fn validate_phone_number(phone_number: &str, config: &ValidationConfig) -> ValidationResult<()> {
    let actual = phone_digits(phone_number).chars().count();
    if actual != config.phone_number_digits {
        return Err(ValidationError::InvalidPhoneNumber {
            expected: config.phone_number_digits,
            actual,
        });
    }
    Ok(())
}

/// Decimal digits (`Nd`) plus the `Numeric_Type=Digit` code points:
/// superscripts, subscripts, circled and parenthesised digits, and the
/// Ethiopic, Kharoshthi, Rumi, and Brahmi digit forms.
const DIGIT_CLASS: &str = concat!(
    r"[\p{Nd}",
    r"\x{B2}\x{B3}\x{B9}\x{1369}-\x{1371}\x{19DA}\x{2070}\x{2074}-\x{2079}",
    r"\x{2080}-\x{2089}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
    r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}",
    r"\x{278A}-\x{2792}\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}",
    r"\x{1F100}-\x{1F10A}]",
);

static DIGIT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(DIGIT_CLASS).ok());

/// Returns the digit characters of a phone number in input order.
///
/// Any Unicode digit counts, not only ASCII `0-9`: fullwidth `５`,
/// Arabic-Indic `٥`, and superscript `²` are all kept.
#[must_use]
pub fn phone_digits(phone_number: &str) -> String {
    match DIGIT_RE.as_ref() {
        Some(pattern) => pattern
            .find_iter(phone_number)
            .map(|found| found.as_str())
            .collect(),
        None => phone_number.chars().filter(char::is_ascii_digit).collect(),
    }
}

/// Validates that a post title contains at least one marker phrase.
///
/// Matching is a case-sensitive substring search.
///
/// # Errors
///
/// Returns [`ValidationError::MissingClickbaitPhrase`] when no configured
/// phrase occurs in the title.
pub fn validate_title(title: &str, config: &ValidationConfig) -> ValidationResult<()> {
    let has_phrase = config
        .clickbait_phrases
        .iter()
        .any(|phrase| title.contains(phrase.as_str()));
    if !has_phrase {
        return Err(ValidationError::MissingClickbaitPhrase(
            config.clickbait_phrases.clone(),
        ));
    }
    Ok(())
}

/// Validates the minimum length of post content.
///
/// Empty content counts as absent and is accepted.
///
/// # Errors
///
/// Returns [`ValidationError::ContentTooShort`] when the content is non-empty
/// and shorter than [`ValidationConfig::min_content_chars`].
pub fn validate_content(content: &str, config: &ValidationConfig) -> ValidationResult<()> {
    let actual = content.chars().count();
    if actual > 0 && actual < config.min_content_chars {
        return Err(ValidationError::ContentTooShort {
            min: config.min_content_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates the maximum length of a post summary.
///
/// # Errors
///
/// Returns [`ValidationError::SummaryTooLong`] when the summary exceeds
/// [`ValidationConfig::max_summary_chars`].
pub fn validate_summary(summary: &str, config: &ValidationConfig) -> ValidationResult<()> {
    let actual = summary.chars().count();
    if actual > config.max_summary_chars {
        return Err(ValidationError::SummaryTooLong {
            max: config.max_summary_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates that a category is one of [`POST_CATEGORIES`].
///
/// The comparison is exact: no trimming or case folding.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidCategory`] for any other value.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if !POST_CATEGORIES.contains(&category) {
        return Err(ValidationError::InvalidCategory(category.to_owned()));
    }
    Ok(())
}
