//! The decoding core: token splitting, base64url decoding with padding
//! repair, and JSON canonicalization of the header and payload.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JWT: expected 2 or 3 dot-separated segments, got {0}")]
    InvalidTokenStructure(usize),
    #[error("failed to decode header")]
    Header(#[source] SegmentError),
    #[error("failed to decode payload")]
    Payload(#[source] SegmentError),
}

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("invalid base64")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("invalid JSON")]
    MalformedJson(#[source] serde_json::Error),
    #[error("top-level JSON is not an object")]
    InvalidClaimsShape,
}

/// A decoded claims object. Backed by a BTree map, so serialization is
/// deterministic with lexicographic key order.
pub type Claims = Map<String, Value>;

#[derive(Debug)]
pub struct Jwt {
    pub header: Claims,
    pub payload: Claims,
}

impl FromStr for Jwt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();

        // 2 segments (unsigned) or 3 (signed). The signature, if present,
        // is never decoded.
        if parts.len() != 2 && parts.len() != 3 {
            return Err(Error::InvalidTokenStructure(parts.len()));
        }

        let header = decode_segment(parts[0]).map_err(Error::Header)?;
        let payload = decode_segment(parts[1]).map_err(Error::Payload)?;

        Ok(Jwt { header, payload })
    }
}

/// Decode one base64url segment into its claims object.
pub fn decode_segment(segment: &str) -> Result<Claims, SegmentError> {
    let bytes = decode_base64url(segment)?;
    canonicalize(&bytes)
}

/// JWT segments are base64url without padding; repair the padding before
/// handing the segment to the padded URL-safe engine.
fn decode_base64url(segment: &str) -> Result<Vec<u8>, SegmentError> {
    let pad = (4 - segment.len() % 4) % 4;
    let mut padded = String::with_capacity(segment.len() + pad);
    padded.push_str(segment);
    for _ in 0..pad {
        padded.push('=');
    }
    Ok(URL_SAFE.decode(padded.as_bytes())?)
}

/// Parse raw JSON bytes into a claims object, rejecting anything whose
/// top level is not a key-value mapping.
fn canonicalize(bytes: &[u8]) -> Result<Claims, SegmentError> {
    let value: Value = serde_json::from_slice(bytes).map_err(SegmentError::MalformedJson)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SegmentError::InvalidClaimsShape),
    }
}
