//! Deterministic slug derivation.
//!
//! A slug is the IEEE CRC-32 checksum of the canonical URL, written in base 62
//! with a fixed number of digits. The same canonical URL always yields the same
//! slug.
//!
//! Distinct URLs whose checksums collide share a slug; the later save overwrites
//! the earlier record. No collision detection is performed.

/// Digits, lowercase, uppercase. The index of a symbol is its digit value.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u32 = ALPHABET.len() as u32;

/// Computes the 32-bit checksum a slug is derived from.
pub fn checksum(canonical_url: &str) -> u32 {
    crc32fast::hash(canonical_url.as_bytes())
}

/// Encodes `number` as exactly `length` base-62 digits, most significant first.
///
/// Small numbers come out left-padded with `0`; numbers that need more than
/// `length` digits keep only their lowest `length` digits.
pub fn encode_base62(mut number: u32, length: usize) -> String {
    let mut encoded = vec!['0'; length];

    for slot in encoded.iter_mut().rev() {
        *slot = ALPHABET[(number % BASE) as usize] as char;
        number /= BASE;
    }

    encoded.into_iter().collect()
}

/// Derives the slug for a canonical URL.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug("http://example.com", 6);
/// assert_eq!(slug, "3W7xJW");
/// ```
pub fn generate_slug(canonical_url: &str, length: usize) -> String {
    encode_base62(checksum(canonical_url), length)
}
