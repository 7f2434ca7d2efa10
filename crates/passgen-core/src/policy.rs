//! Generation policy: which characters are eligible and how they are drawn.
//!
//! A [`Policy`] is a plain value built by the caller for each request (or
//! reused). [`Policy::default`] is the recommended configuration; nothing in
//! this crate holds a shared, mutable default.

use serde::{Deserialize, Serialize};

use crate::error::PasswordError;

/// Length used when a policy leaves `length` at zero.
pub const DEFAULT_PASSWORD_LENGTH: usize = 24;

/// Options controlling character-set construction and sampling.
///
/// Decodes from camelCase JSON. Missing keys take their [`Policy::default`]
/// value, so `{"symbols": false}` is a complete document.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include common symbols (`~!@#$%^&*-=+`).
    pub symbols: bool,
    /// Include the extended symbol set (brackets, quotes, slashes...).
    /// Implies the common symbols.
    pub extended_symbols: bool,
    /// Drop look-alike letters and digits (`ijlo`, `IJLO`, `01`).
    pub exclude_similar: bool,
    /// Explicit character set. When non-empty, every class flag and
    /// `exclude_similar` are ignored.
    pub character_set: Option<String>,
    /// Allow a character to appear more than once in the output.
    pub allow_duplicates: bool,
    /// Requested output length. Zero means [`DEFAULT_PASSWORD_LENGTH`].
    pub length: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            extended_symbols: true,
            exclude_similar: true,
            character_set: None,
            allow_duplicates: true,
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl Policy {
    /// A policy with every class disabled, no override and no length.
    ///
    /// Useful as a starting point when only one or two classes are wanted;
    /// it is invalid until at least one class or an override is set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
            extended_symbols: false,
            exclude_similar: false,
            character_set: None,
            allow_duplicates: true,
            length: 0,
        }
    }

    /// Decode a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::InvalidPolicy`] if the document is not valid
    /// JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, PasswordError> {
        serde_json::from_str(json).map_err(|e| PasswordError::InvalidPolicy(e.to_string()))
    }

    /// The override character set, if one is set and non-empty.
    #[must_use]
    pub fn override_set(&self) -> Option<&str> {
        self.character_set.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns `true` if at least one character class is enabled.
    #[must_use]
    pub const fn has_any_class(&self) -> bool {
        self.lowercase || self.uppercase || self.digits || self.symbols || self.extended_symbols
    }

    /// Check that the policy can produce a character set.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::EmptyPolicy`] when no class is enabled and no
    /// override is given.
    pub fn validate(&self) -> Result<(), PasswordError> {
        if self.has_any_class() || self.override_set().is_some() {
            Ok(())
        } else {
            Err(PasswordError::EmptyPolicy)
        }
    }

    /// Output length after defaulting.
    #[must_use]
    pub const fn effective_length(&self) -> usize {
        if self.length == 0 {
            DEFAULT_PASSWORD_LENGTH
        } else {
            self.length
        }
    }
}
