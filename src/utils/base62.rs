//! Base62 encoding of numeric identifiers into short codes.
//!
//! The alphabet is digits, then lowercase letters, then uppercase letters.
//! The ordering is fixed; codes already handed out depend on it.

/// The 62 symbols, indexed by digit value.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric base of the encoding.
pub const BASE: u64 = 62;

/// `u64::MAX` needs 11 base62 digits.
const MAX_DIGITS: usize = 11;

/// Errors returned by [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Cannot decode an empty string")]
    Empty,

    #[error("Value does not fit in 64 bits")]
    Overflow,
}

/// Encodes a non-negative integer as a minimal-length base62 string.
///
/// The most significant digit comes first and there is no padding, so
/// `encode(0)` is `"0"` and `encode(62)` is `"10"`.
///
/// # Examples
///
/// ```
/// use tinylink::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "Z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut buf = [0u8; MAX_DIGITS];
    let mut start = MAX_DIGITS;

    while n > 0 {
        start -= 1;
        buf[start] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[start..].iter().map(|&b| b as char).collect()
}

/// Decodes a base62 string back into its integer value.
///
/// Leading `'0'` digits are accepted and ignored, so `decode("007")` is `7`.
///
/// # Errors
///
/// - [`DecodeError::Empty`] for the empty string
/// - [`DecodeError::InvalidCharacter`] if any character is outside [`ALPHABET`]
/// - [`DecodeError::Overflow`] if the value exceeds `u64::MAX`
///
/// # Examples
///
/// ```
/// use tinylink::utils::base62::{decode, DecodeError};
///
/// assert_eq!(decode("10"), Ok(62));
/// assert!(matches!(decode("a-b"), Err(DecodeError::InvalidCharacter { .. })));
/// ```
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    if s.is_empty() {
        return Err(DecodeError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |acc, (position, character)| {
        let digit =
            digit_value(character).ok_or(DecodeError::InvalidCharacter { character, position })?;

        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::Overflow)
    })
}

/// Returns `true` if `s` is exactly what [`encode`] produces for some value.
///
/// Rejects strings with foreign characters, redundant leading zeros,
/// and values outside the 64-bit range.
pub fn is_canonical(s: &str) -> bool {
    decode(s).is_ok_and(|n| encode(n) == s)
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(value)
}
