//! Numeric password encoding.
//!
//! The record never stores password characters; it stores the output of
//! [`string_to_number`], a one-way transform onto arbitrary-precision
//! integers.

use crate::error::{AccountError, Result};
use num_bigint::BigUint;

/// Encode a character sequence as a single non-negative integer.
///
/// Each character contributes the decimal representation of its Unicode
/// code point, concatenated in input order, and the concatenation is parsed
/// as one integer: `"ab"` encodes as 9798 (97 then 98). Character
/// boundaries are not preserved, so distinct inputs can share an encoding;
/// the transform is not invertible and callers must not rely on decoding.
///
/// Empty input is outside the domain and returns
/// [`AccountError::EmptyPassword`].
pub fn string_to_number(text: &str) -> Result<BigUint> {
    if text.is_empty() {
        return Err(AccountError::EmptyPassword);
    }

    let mut digits = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        digits.push_str(&(ch as u32).to_string());
    }

    // digits is non-empty and all ASCII decimal, so the parse holds.
    digits
        .parse::<BigUint>()
        .map_err(|_| AccountError::Other(format!("unparseable digit string: {digits}")))
}
