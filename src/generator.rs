//! Random password generation.

use rand::Rng;

use crate::error::{AccountError, Result};

/// Characters eligible for generated passwords: ASCII lowercase, ASCII
/// uppercase, ASCII punctuation, ASCII digits (94 symbols).
pub const PASSWORD_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~0123456789";

/// Effective maximum length when the caller passes 0 for "no maximum".
pub const DEFAULT_MAX_LENGTH: usize = 45;

/// Generate a random password with a length drawn uniformly from
/// `[min_length, max_length]`.
///
/// A `max_length` of 0 means "no maximum" and is treated as
/// [`DEFAULT_MAX_LENGTH`]. After that substitution the bounds must satisfy
/// `min_length <= max_length` or the call fails with
/// [`AccountError::InvalidRange`]. Each character is drawn independently and
/// uniformly from [`PASSWORD_ALPHABET`].
pub fn create_password<R: Rng>(min_length: usize, max_length: usize, rng: &mut R) -> Result<String> {
    let max_length = if max_length == 0 {
        DEFAULT_MAX_LENGTH
    } else {
        max_length
    };

    if min_length > max_length {
        return Err(AccountError::InvalidRange {
            min: min_length,
            max: max_length,
        });
    }

    let length = rng.gen_range(min_length..=max_length);
    let alphabet = PASSWORD_ALPHABET.as_bytes();

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let index = rng.gen_range(0..alphabet.len());
        password.push(alphabet[index] as char);
    }

    Ok(password)
}

/// Parse a user-typed length bound.
///
/// Surrounding whitespace is ignored; anything that does not parse as a
/// non-negative integer (including negative numbers) is
/// [`AccountError::InputFormat`] carrying the offending text.
pub fn parse_length(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| AccountError::InputFormat(trimmed.to_string()))
}
