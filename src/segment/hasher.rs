//! Content hashing for pixel-exact tile deduplication

use image::RgbaImage;
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 fingerprint of a tile's canonical pixel bytes
///
/// Buffers are canonicalized to 8-bit RGBA before hashing, so two tiles
/// decoded through different paths still compare equal when their visible
/// content matches. An absent digest (zero-sized buffer) has no
/// `ContentDigest` at all and therefore never compares equal to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Hex rendering of the digest bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Digest an RGBA pixel buffer, or `None` for a zero-sized buffer
///
/// The `None` case covers failed extractions; leaving those without a
/// digest keeps them out of every duplicate group, including each other's.
pub fn digest_pixels(pixels: &RgbaImage) -> Option<ContentDigest> {
    if pixels.width() == 0 || pixels.height() == 0 {
        return None;
    }

    let mut hasher = Sha256::new();
    hasher.update(pixels.as_raw());
    Some(ContentDigest(hasher.finalize().into()))
}
