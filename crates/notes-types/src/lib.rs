//! # Notes Types
//!
//! Validated text types shared by the notes crates.

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input text had zero length
    #[error("Text cannot be empty")]
    Empty,
    /// The input text is longer than the permitted number of characters
    #[error("Text cannot be more than {max} characters")]
    TooLong { max: usize },
}

/// A string type that guarantees non-empty content.
///
/// The wrapped `String` has at least one character. Whitespace counts: `" "` is
/// valid text. The input is kept verbatim, never trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted into a `String`
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the input is not zero-length,
    /// or `Err(TextError::Empty)` otherwise.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    /// Creates a new `NonEmptyText` that is at most `max_chars` long.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn with_max_chars(input: impl Into<String>, max_chars: usize) -> Result<Self, TextError> {
        let text = Self::new(input)?;
        if text.char_count() > max_chars {
            return Err(TextError::TooLong { max: max_chars });
        }
        Ok(text)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of Unicode scalar values in the text.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(s).map_err(serde::de::Error::custom)
    }
}
