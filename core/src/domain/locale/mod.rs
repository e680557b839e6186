use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod catalog;

pub use catalog::MessageId;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hi,
    Or,
}

impl Locale {
    /// Parse a BCP-47-ish tag ("hi", "hi-IN", "or-IN"). Anything
    /// unrecognized falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.to_ascii_lowercase();
        if lower.starts_with("hi") {
            Locale::Hi
        } else if lower.starts_with("or") {
            Locale::Or
        } else {
            Locale::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Or => "or",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_tags() {
        assert_eq!(Locale::from_tag("hi-IN"), Locale::Hi);
        assert_eq!(Locale::from_tag("or"), Locale::Or);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::En);
    }
}
