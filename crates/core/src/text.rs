//! Optional text.
//!
//! Form posts and API payloads routinely omit text fields. `Text` folds "absent"
//! into "empty" at the boundary so domain rules only ever see a string.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Owned text where an absent value and an empty string are the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub struct Text(String);

impl Text {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl ValueObject for Text {}

impl core::fmt::Display for Text {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<S: Into<String>> From<Option<S>> for Text {
    fn from(value: Option<S>) -> Self {
        value.map(|s| Self(s.into())).unwrap_or_default()
    }
}

impl From<Text> for String {
    fn from(value: Text) -> Self {
        value.0
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_equal() {
        assert_eq!(Text::from(None::<String>), Text::from(""));
        assert_eq!(Text::from(None::<&str>), Text::empty());
        assert!(Text::from(None::<&str>).is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let text = Text::from("ação");
        assert_eq!(text.char_len(), 4);
        assert_eq!(text.as_str().len(), 6);
    }

    #[test]
    fn null_deserializes_as_empty() {
        let text: Text = serde_json::from_str("null").unwrap();
        assert!(text.is_empty());

        let text: Text = serde_json::from_str("\"Chair\"").unwrap();
        assert_eq!(text.as_str(), "Chair");
    }
}
