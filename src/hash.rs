use std::ops::Range;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use winnow::ascii::hex_uint;
use winnow::error::ContextError;
use winnow::Parser;

/// Hashes a string to a 32-bit integer using the first 8 hex digits of its MD5 digest.
pub(crate) fn hash_to_int(input: &str) -> u32 {
    let hex = hex_digest::<Md5>(input);
    hex_window(&hex, 0..8)
}

/// Derives a gradient angle in `0..360` from the first 4 hex digits of the SHA-1 digest.
pub(crate) fn angle_from_str(input: &str) -> u16 {
    let hex = hex_digest::<Sha1>(input);
    (hex_window(&hex, 0..4) % 360) as u16
}

/// Derives two hues in `0..360` from disjoint 6-digit windows of the SHA-256 digest.
pub(crate) fn dual_hue(input: &str) -> (u16, u16) {
    let hex = hex_digest::<Sha256>(input);
    (
        (hex_window(&hex, 0..6) % 360) as u16,
        (hex_window(&hex, 6..12) % 360) as u16,
    )
}

/// Lowercase hex rendering of the digest of the string's UTF-8 bytes.
fn hex_digest<D: Digest>(input: &str) -> String {
    D::digest(input.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

// Windows are at most 8 digits and always lie inside the digest, so this never
// falls back to zero in practice.
fn hex_window(hex: &str, range: Range<usize>) -> u32 {
    hex.get(range)
        .and_then(|window| hex_uint::<_, u32, ContextError>.parse(window).ok())
        .unwrap_or_default()
}
