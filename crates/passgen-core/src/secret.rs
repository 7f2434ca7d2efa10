//! Zeroize-on-drop container for generated passwords.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

/// A generated password.
///
/// Wraps [`SecretString`], so the backing memory is zeroed on drop and
/// `Debug` never prints the value. Call [`GeneratedPassword::expose`] only
/// where the plaintext is actually needed.
pub struct GeneratedPassword {
    inner: SecretString,
}

impl GeneratedPassword {
    /// Copy an assembled buffer into an exact-size secret.
    ///
    /// The buffer's capacity may exceed its length, and shrinking it in place
    /// would free the old allocation unwiped. Copying leaves the original to
    /// `Zeroizing`, which clears the whole capacity on drop.
    pub(crate) fn from_buffer(buf: Zeroizing<String>) -> Self {
        Self {
            inner: SecretString::new(Box::<str>::from(buf.as_str())),
        }
    }

    /// Expose the plaintext password.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.inner.expose_secret()
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratedPassword(***)")
    }
}
