//! Uniform sampling of a [`CharacterSet`] into passwords.
//!
//! All randomness goes through [`uniform_index`], which draws 64-bit values
//! with `try_fill_bytes` and rejects the tail above the largest multiple of
//! the range. Random-source errors surface as
//! [`PasswordError::RandomSourceFailure`] and are never retried.

use std::num::NonZeroU64;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::charset::CharacterSet;
use crate::error::PasswordError;
use crate::secret::GeneratedPassword;

/// Draw an index uniformly from `0..bound`.
///
/// # Errors
///
/// - [`PasswordError::EmptyCharacterSet`] if `bound` is zero.
/// - [`PasswordError::RandomSourceFailure`] if the random source fails.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let range = u64::try_from(bound)
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or(PasswordError::EmptyCharacterSet)?;

    // Largest multiple of `range` representable; draws at or above it are biased.
    let zone = u64::MAX.wrapping_sub(u64::MAX % range);

    loop {
        let value = next_u64(rng)?;
        if value < zone {
            // value % range < bound, and bound is a usize: no truncation.
            #[allow(clippy::cast_possible_truncation)]
            return Ok((value % range) as usize);
        }
    }
}

/// Generate one password of `length` characters from `set`.
///
/// With `allow_duplicates`, characters are drawn independently with
/// replacement. Without it, distinct characters are drawn until the output
/// holds `min(length, set.distinct_len())` of them, in draw order.
///
/// # Errors
///
/// - [`PasswordError::EmptyCharacterSet`] if `set` is empty.
/// - [`PasswordError::RandomSourceFailure`] if the random source fails.
pub fn generate<R>(
    rng: &mut R,
    set: &CharacterSet,
    length: usize,
    allow_duplicates: bool,
) -> Result<GeneratedPassword, PasswordError>
where
    R: RngCore + CryptoRng,
{
    if set.is_empty() {
        return Err(PasswordError::EmptyCharacterSet);
    }

    let buf = if allow_duplicates {
        with_replacement(rng, set, length)?
    } else {
        without_replacement(rng, set, length)?
    };
    Ok(GeneratedPassword::from_buffer(buf))
}

/// Generate `count` passwords with [`generate`].
///
/// Stops at the first failure; passwords generated before it are dropped
/// (and zeroized), never returned.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_many<R>(
    rng: &mut R,
    set: &CharacterSet,
    length: usize,
    count: usize,
    allow_duplicates: bool,
) -> Result<Vec<GeneratedPassword>, PasswordError>
where
    R: RngCore + CryptoRng,
{
    (0..count)
        .map(|_| generate(rng, set, length, allow_duplicates))
        .collect()
}

fn with_replacement<R>(
    rng: &mut R,
    set: &CharacterSet,
    length: usize,
) -> Result<Zeroizing<String>, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let chars = set.as_slice();
    let mut buf = buffer_for(chars, length);
    for _ in 0..length {
        buf.push(chars[uniform_index(rng, chars.len())?]);
    }
    Ok(buf)
}

fn without_replacement<R>(
    rng: &mut R,
    set: &CharacterSet,
    length: usize,
) -> Result<Zeroizing<String>, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let target = length.min(set.distinct_len());
    if target < length {
        tracing::debug!(
            requested = length,
            effective = target,
            "unique-character password clamped to character set size"
        );
    }

    // Each pick removes every occurrence of the chosen character, so the pool
    // still holds a fresh character on each of the `target` iterations.
    let mut pool = Zeroizing::new(set.as_slice().to_vec());
    let mut buf = buffer_for(set.as_slice(), target);
    for _ in 0..target {
        let picked = pool[uniform_index(rng, pool.len())?];
        pool.retain(|&c| c != picked);
        buf.push(picked);
    }
    Ok(buf)
}

/// Pre-size the output so pushes never reallocate and leave stray copies
/// behind. Capacity can exceed the final length for mixed-width sets.
fn buffer_for(chars: &[char], length: usize) -> Zeroizing<String> {
    let width = chars.iter().map(|c| c.len_utf8()).max().unwrap_or(1);
    Zeroizing::new(String::with_capacity(length.saturating_mul(width)))
}

fn next_u64<R>(rng: &mut R) -> Result<u64, PasswordError>
where
    R: RngCore + CryptoRng,
{
    let mut bytes = [0u8; 8];
    rng.try_fill_bytes(&mut bytes).map_err(|e| {
        tracing::warn!("secure random source failed: {e}");
        PasswordError::RandomSourceFailure(e.to_string())
    })?;
    Ok(u64::from_le_bytes(bytes))
}
