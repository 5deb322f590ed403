//! Tunable limits for the record validation rules.

use serde::Deserialize;

/// Default marker phrases a post title must contain one of.
pub const DEFAULT_CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Configuration for the validation rules.
///
/// The defaults are the production rules. The marker phrases and the
/// minimum content length look like assignment fixtures rather than general
/// business rules, so they are kept here rather than hard-coded in the rules.
///
/// # Examples
///
/// ```
/// use blogrecords::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_content_chars, 250);
/// assert_eq!(config.phone_number_digits, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Case-sensitive substrings of which a title must contain at least one.
    pub clickbait_phrases: Vec<String>,
    /// Minimum character count for non-empty post content.
    pub min_content_chars: usize,
    /// Maximum character count for a post summary.
    pub max_summary_chars: usize,
    /// Exact number of digits an author phone number must contain.
    pub phone_number_digits: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            clickbait_phrases: DEFAULT_CLICKBAIT_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_owned())
                .collect(),
            min_content_chars: 250,
            max_summary_chars: 250,
            phone_number_digits: 10,
        }
    }
}
