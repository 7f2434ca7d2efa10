//! Policy-bound password generator.
//!
//! A [`Generator`] validates its [`Policy`] and derives the character set
//! exactly once; every call then samples that fixed set. The plain methods use
//! `OsRng`; the `*_with_rng` variants accept any cryptographic RNG.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::charset::{self, CharacterSet};
use crate::error::PasswordError;
use crate::policy::Policy;
use crate::sampler;
use crate::secret::GeneratedPassword;

/// Generates passwords from a fixed, pre-built character set.
#[derive(Debug, Clone)]
pub struct Generator {
    charset: CharacterSet,
    length: usize,
    allow_duplicates: bool,
}

impl Generator {
    /// Build a generator for `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::EmptyPolicy`] if the policy enables no class
    /// and gives no override.
    pub fn new(policy: &Policy) -> Result<Self, PasswordError> {
        let charset = charset::build(policy)?;
        let length = policy.effective_length();
        tracing::debug!(
            charset_len = charset.len(),
            length,
            allow_duplicates = policy.allow_duplicates,
            custom_charset = policy.override_set().is_some(),
            "password generator configured"
        );
        Ok(Self {
            charset,
            length,
            allow_duplicates: policy.allow_duplicates,
        })
    }

    /// Build a generator for [`Policy::default`].
    ///
    /// # Errors
    ///
    /// Never fails for the default policy; the `Result` mirrors [`Generator::new`].
    pub fn with_default_policy() -> Result<Self, PasswordError> {
        Self::new(&Policy::default())
    }

    #[must_use]
    pub const fn character_set(&self) -> &CharacterSet {
        &self.charset
    }

    /// Length used by [`Generator::generate`] and [`Generator::generate_many`].
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Generate one password of the policy's length.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if the OS RNG fails.
    pub fn generate(&self) -> Result<GeneratedPassword, PasswordError> {
        self.generate_with_rng(&mut OsRng)
    }

    /// Generate `count` passwords of the policy's length. All or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if the OS RNG fails.
    pub fn generate_many(&self, count: usize) -> Result<Vec<GeneratedPassword>, PasswordError> {
        self.generate_many_with_rng(&mut OsRng, count)
    }

    /// Generate one password of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if the OS RNG fails.
    pub fn generate_with_length(&self, length: usize) -> Result<GeneratedPassword, PasswordError> {
        self.generate_with_length_with_rng(&mut OsRng, length)
    }

    /// Generate `count` passwords of `length` characters. All or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if the OS RNG fails.
    pub fn generate_many_with_length(
        &self,
        count: usize,
        length: usize,
    ) -> Result<Vec<GeneratedPassword>, PasswordError> {
        self.generate_many_with_length_with_rng(&mut OsRng, count, length)
    }

    /// [`Generator::generate`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if `rng` fails.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<GeneratedPassword, PasswordError>
    where
        R: RngCore + CryptoRng,
    {
        self.generate_with_length_with_rng(rng, self.length)
    }

    /// [`Generator::generate_many`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if `rng` fails.
    pub fn generate_many_with_rng<R>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<GeneratedPassword>, PasswordError>
    where
        R: RngCore + CryptoRng,
    {
        self.generate_many_with_length_with_rng(rng, count, self.length)
    }

    /// [`Generator::generate_with_length`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if `rng` fails.
    pub fn generate_with_length_with_rng<R>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<GeneratedPassword, PasswordError>
    where
        R: RngCore + CryptoRng,
    {
        sampler::generate(rng, &self.charset, length, self.allow_duplicates)
    }

    /// [`Generator::generate_many_with_length`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::RandomSourceFailure`] if `rng` fails.
    pub fn generate_many_with_length_with_rng<R>(
        &self,
        rng: &mut R,
        count: usize,
        length: usize,
    ) -> Result<Vec<GeneratedPassword>, PasswordError>
    where
        R: RngCore + CryptoRng,
    {
        sampler::generate_many(rng, &self.charset, length, count, self.allow_duplicates)
    }
}
