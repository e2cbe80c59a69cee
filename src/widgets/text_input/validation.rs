//! Per-keystroke character validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Punctuation accepted by the default rule, next to ASCII letters and digits.
pub const ACCEPTED_PUNCTUATION: &str = ".\"#$%&'()*+,-/:;<=>?@[\\]^_`{|}~";

/// Named validation rules, selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharRule {
    Any,
    #[default]
    Printable,
    Digits,
    Alphanumeric,
}

impl CharRule {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            CharRule::Any => true,
            CharRule::Printable => ch.is_ascii_alphanumeric() || ACCEPTED_PUNCTUATION.contains(ch),
            CharRule::Digits => ch.is_ascii_digit(),
            CharRule::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }
}

/// Predicate over a single character, fixed when the field is built.
pub struct CharValidator(Box<dyn Fn(char) -> bool>);

impl CharValidator {
    pub fn custom(predicate: impl Fn(char) -> bool + 'static) -> Self {
        Self(Box::new(predicate))
    }

    pub fn accepts(&self, ch: char) -> bool {
        (self.0)(ch)
    }
}

impl From<CharRule> for CharValidator {
    fn from(rule: CharRule) -> Self {
        Self::custom(move |ch| rule.accepts(ch))
    }
}

impl Default for CharValidator {
    fn default() -> Self {
        CharRule::default().into()
    }
}

impl fmt::Debug for CharValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CharValidator(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_matches_the_accepted_set() {
        for ch in ['a', 'Z', '7', '.', '"', '\\', '[', ']', '~', '@'] {
            assert!(CharRule::Printable.accepts(ch), "{ch:?} should pass");
        }
        for ch in [' ', '!', '\t', '\r', 'é', '😀'] {
            assert!(!CharRule::Printable.accepts(ch), "{ch:?} should fail");
        }
    }

    #[test]
    fn digits_only() {
        assert!(CharRule::Digits.accepts('0'));
        assert!(!CharRule::Digits.accepts('a'));
        assert!(!CharRule::Digits.accepts('-'));
    }

    #[test]
    fn custom_predicate() {
        let vowels = CharValidator::custom(|c| "aeiou".contains(c));
        assert!(vowels.accepts('e'));
        assert!(!vowels.accepts('x'));
    }

    #[test]
    fn rule_parses_from_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            rule: CharRule,
        }
        let parsed: Wrapper = toml::from_str("rule = \"digits\"").unwrap();
        assert_eq!(parsed.rule, CharRule::Digits);
    }
}
