// ABOUTME: Image reference parsing into repository and tag.
// ABOUTME: Splits on the last colon; a missing tag defaults to "latest".

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseImageRefError {
    #[error("image reference cannot be empty")]
    Empty,
}

/// A parsed image reference.
///
/// The reference string is split on the last `:` into repository and tag.
/// A suffix containing `/` is a registry port, not a tag, so `reg:5000/app`
/// parses as a repository with the default tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    repository: String,
    tag: String,
}

impl ImageRef {
    pub fn parse(input: &str) -> Result<Self, ParseImageRefError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseImageRefError::Empty);
        }

        let (repository, tag) = match input.rsplit_once(':') {
            Some((before, after)) if !after.contains('/') && !after.is_empty() => {
                (before.to_string(), after.to_string())
            }
            _ => (input.to_string(), "latest".to_string()),
        };

        Ok(Self { repository, tag })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
