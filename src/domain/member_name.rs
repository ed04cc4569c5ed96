//! MemberName value object.

use super::errors::NameError;
use super::normalize::trim_text;
use serde::{Serialize, Serializer};
use std::fmt;

/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A trimmed, non-empty member name (person or company).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    /// # Errors
    ///
    /// `NameError::Empty` for blank input, `NameError::TooLong` beyond
    /// [`MAX_NAME_LEN`] characters.
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = trim_text(name);
        if name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(NameError::TooLong {
                max: MAX_NAME_LEN,
                got: len,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for MemberName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
