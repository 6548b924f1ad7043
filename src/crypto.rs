//! The signing engine: HMAC computation, nonce generation and the
//! fixed-time comparator used for every MAC check.

use hmac::{Hmac, Mac};
use ring::rand::{SecureRandom, SystemRandom};
use sha1::Sha1;
use sha2::Sha256;

use crate::algorithm::{Algorithm, Digest};
use crate::b64;
use crate::error::HawkError;

/// Number of random bytes drawn for a nonce; the wire form is twice as
/// many hex characters.
pub const NONCE_BYTES: usize = 6;

/// The cryptographic operations this crate requires.
pub trait Crypto {
    /// Sign `payload` with HMAC under the given algorithm and key.
    fn hmac_sign(
        &self,
        algorithm: &Algorithm,
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, HawkError>;

    /// Fill `output` with bytes from a cryptographically strong source.
    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), HawkError>;
}

/// Implementation over the `hmac` crate, with `ring` providing the
/// random number generation.
pub struct CryptoImpl;

impl Crypto for CryptoImpl {
    fn hmac_sign(
        &self,
        algorithm: &Algorithm,
        key: &[u8],
        payload: &[u8],
    ) -> Result<Vec<u8>, HawkError> {
        match algorithm.digest {
            Digest::Sha256 => {
                let mut mac: Hmac<Sha256> =
                    Hmac::new_from_slice(key).map_err(|_| HawkError::Crypto)?;
                mac.update(payload);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Digest::Sha1 => {
                let mut mac: Hmac<Sha1> =
                    Hmac::new_from_slice(key).map_err(|_| HawkError::Crypto)?;
                mac.update(payload);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }

    fn rand_bytes(&self, output: &mut [u8]) -> Result<(), HawkError> {
        let rng = SystemRandom::new();
        rng.fill(output).map_err(|_| HawkError::Crypto)
    }
}

/// Sign a base string and return the MAC in its base64 wire form.
pub fn sign(algorithm: &Algorithm, key: &[u8], base: &str) -> Result<String, HawkError> {
    let mac = CryptoImpl.hmac_sign(algorithm, key, base.as_bytes())?;
    debug_assert_eq!(mac.len(), algorithm.mac_len());
    Ok(b64::encode(&mac))
}

/// Generate a fresh hex-encoded nonce from [`NONCE_BYTES`] random bytes.
pub fn generate_nonce() -> Result<String, HawkError> {
    let mut raw = [0u8; NONCE_BYTES];
    CryptoImpl.rand_bytes(&mut raw)?;
    Ok(hex::encode(raw))
}

/// Time-invariant byte equality. Unequal lengths compare unequal; equal
/// lengths are XOR-folded over every byte so the running time does not
/// depend on where the first difference lies.
pub fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
