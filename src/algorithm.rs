//! Registry of the HMAC algorithms Hawk credentials may select.

use crate::error::HawkError;

/// Digest backing an [`Algorithm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Digest {
    Sha1,
    Sha256,
}

/// An immutable HMAC algorithm record. The MAC length is intrinsic to the
/// algorithm, not configurable.
#[derive(Debug, PartialEq, Eq)]
pub struct Algorithm {
    name: &'static str,
    pub(crate) digest: Digest,
    mac_len: usize,
}

impl Algorithm {
    /// The wire name credentials select this algorithm by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw MAC output length in bytes, before base64 encoding.
    pub fn mac_len(&self) -> usize {
        self.mac_len
    }
}

/// HMAC-SHA-256, the Hawk default.
pub static SHA256: Algorithm = Algorithm {
    name: "sha256",
    digest: Digest::Sha256,
    mac_len: 32,
};

/// HMAC-SHA-1, kept for interoperability with legacy deployments.
pub static SHA1: Algorithm = Algorithm {
    name: "sha1",
    digest: Digest::Sha1,
    mac_len: 20,
};

static ALGORITHMS: [&Algorithm; 2] = [&SHA256, &SHA1];

/// Look up an algorithm by its exact, case-sensitive wire name.
pub fn algorithm_by_name(name: &str) -> Result<&'static Algorithm, HawkError> {
    ALGORITHMS
        .iter()
        .find(|algorithm| algorithm.name == name)
        .copied()
        .ok_or_else(|| HawkError::UnknownAlgorithm(name.to_owned()))
}
