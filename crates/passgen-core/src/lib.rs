//! `passgen-core` — Random password generation.
//!
//! Builds a character set from a [`Policy`] and samples it with a
//! cryptographic RNG using rejection sampling, so every character is drawn
//! uniformly. No I/O, no global state; the caller owns the policy and the
//! returned [`GeneratedPassword`] values.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod policy;

pub mod charset;

pub mod secret;
pub mod sampler;

pub mod generator;

pub use charset::{build, CharacterSet};
pub use error::PasswordError;
pub use generator::Generator;
pub use policy::{Policy, DEFAULT_PASSWORD_LENGTH};
pub use sampler::{generate, generate_many, uniform_index};
pub use secret::GeneratedPassword;
