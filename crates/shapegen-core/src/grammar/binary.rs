//! Packed grammar files: a `SHPG` magic, a format version byte, then the
//! lowered grammar encoded with postcard.

use super::json::GrammarError;
use super::types::Grammar;

const MAGIC: &[u8; 4] = b"SHPG";

/// Bumped whenever the lowered grammar types change shape.
pub(crate) const FORMAT_VERSION: u8 = 1;

impl Grammar {
    /// Decode a packed grammar, rejecting foreign files and other format versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        let payload = bytes
            .strip_prefix(MAGIC.as_slice())
            .ok_or(GrammarError::NotPacked)?;
        let (&version, payload) = payload.split_first().ok_or(GrammarError::NotPacked)?;
        if version != FORMAT_VERSION {
            return Err(GrammarError::Version {
                found: version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(postcard::from_bytes(payload)?)
    }

    /// Encode the lowered grammar as a packed file.
    pub fn to_binary(&self) -> Result<Vec<u8>, GrammarError> {
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(MAGIC);
        out.push(FORMAT_VERSION);
        postcard::to_extend(self, out).map_err(GrammarError::from)
    }
}
