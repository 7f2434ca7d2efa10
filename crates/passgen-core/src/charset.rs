//! Character-set construction from a [`Policy`].
//!
//! Classes are appended in a fixed order: lowercase, uppercase, digits,
//! common symbols, extended symbols. Look-alike exclusion applies only to the
//! letter and digit classes. Characters shared between classes are kept once
//! per class; no class shares a character with another in the fixed tables.

use std::collections::HashSet;
use std::fmt;

use crate::error::PasswordError;
use crate::policy::Policy;

// Character classes
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "~!@#$%^&*-=+";
pub const EXTENDED_SYMBOLS: &str = "`()_{}[]\\|:;\"'<>,.?/";

// Look-alikes removed by `exclude_similar`
pub const SIMILAR_LOWERCASE: &str = "ijlo";
pub const SIMILAR_UPPERCASE: &str = "IJLO";
pub const SIMILAR_DIGITS: &str = "01";

/// Ordered pool of characters eligible for sampling.
///
/// Immutable once built. Indexing is by character, not byte, so override sets
/// may contain any Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Use `chars` verbatim, in order, repeats included.
    #[must_use]
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }

    /// Number of characters, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Number of distinct characters.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.chars.iter().collect::<HashSet<_>>().len()
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl From<&str> for CharacterSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Derive the character set described by `policy`.
///
/// A non-empty override is returned as-is. Otherwise the enabled classes are
/// concatenated in order; the extended-symbol flag also pulls in the common
/// symbols, which are never appended twice.
///
/// # Errors
///
/// Returns [`PasswordError::EmptyPolicy`] if no class is enabled and no
/// override is given.
pub fn build(policy: &Policy) -> Result<CharacterSet, PasswordError> {
    policy.validate()?;

    if let Some(set) = policy.override_set() {
        return Ok(CharacterSet::new(set));
    }

    let mut chars: Vec<char> = Vec::new();

    if policy.lowercase {
        push_class(&mut chars, LOWERCASE, policy.exclude_similar, SIMILAR_LOWERCASE);
    }
    if policy.uppercase {
        push_class(&mut chars, UPPERCASE, policy.exclude_similar, SIMILAR_UPPERCASE);
    }
    if policy.digits {
        push_class(&mut chars, DIGITS, policy.exclude_similar, SIMILAR_DIGITS);
    }
    if policy.symbols || policy.extended_symbols {
        chars.extend(SYMBOLS.chars());
    }
    if policy.extended_symbols {
        chars.extend(EXTENDED_SYMBOLS.chars());
    }

    Ok(CharacterSet { chars })
}

fn push_class(out: &mut Vec<char>, class: &str, exclude_similar: bool, similar: &str) {
    out.extend(
        class
            .chars()
            .filter(|c| !(exclude_similar && similar.contains(*c))),
    );
}
