//! Configurable string cleaner
//!
//! Whitespace here is Unicode `White_Space` plus the ASCII information
//! separators U+001C..=U+001F.

use crate::error::Result;
use crate::value::Value;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Options for [`TextNormalizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizerConfig {
    /// Convert text to lowercase
    pub lowercase: bool,
    /// Replace every whitespace run with a single space
    pub collapse_spaces: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            collapse_spaces: true,
        }
    }
}

impl NormalizerConfig {
    /// Set whether output is lowercased
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set whether whitespace runs collapse to one space
    pub fn with_collapse_spaces(mut self, collapse_spaces: bool) -> Self {
        self.collapse_spaces = collapse_spaces;
        self
    }
}

/// Stateless string cleaner
///
/// The configuration is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Create a normalizer with the given options
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The options this normalizer was built with
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Clean one input, which must be a string
    ///
    /// Strips surrounding whitespace, then collapses whitespace runs if
    /// enabled, then lowercases if enabled.
    pub fn clean(&self, s: impl Into<Value>) -> Result<String> {
        let value = s.into();
        Ok(self.clean_str(value.as_str()?))
    }

    /// Clean a string that is already known to be text
    pub fn clean_str(&self, s: &str) -> String {
        let trimmed = s.trim_matches(is_separator);

        let mut out = if self.config.collapse_spaces {
            let mut joined = String::with_capacity(trimmed.len());
            let words = trimmed.split(is_separator).filter(|w| !w.is_empty());
            for (i, word) in words.enumerate() {
                if i > 0 {
                    joined.push(' ');
                }
                joined.push_str(word);
            }
            joined
        } else {
            String::from(trimmed)
        };

        if self.config.lowercase {
            out = out.to_lowercase();
        }
        out
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
