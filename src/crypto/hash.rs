use std::sync::Arc;

use log::{debug, trace, warn};
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::error::DigestError;

pub const SHA256_ALGORITHM: &str = "SHA-256";
pub const DIGEST_LEN: usize = 32;

pub type DigestBytes = [u8; DIGEST_LEN];

/// A source of SHA-256 digests, handed to [`DigestEngine`] at construction.
///
/// Implementations must be `Send + Sync` so one engine can serve parallel
/// callers. Every call owns its own hashing context.
pub trait DigestProvider: Send + Sync {
    /// Name the provider answers to, e.g. `"SHA-256"`.
    fn algorithm(&self) -> &str;

    fn digest(&self, data: &[u8]) -> Result<DigestBytes, DigestError>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for Arc<P> {
    fn algorithm(&self) -> &str {
        (**self).algorithm()
    }

    fn digest(&self, data: &[u8]) -> Result<DigestBytes, DigestError> {
        (**self).digest(data)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Box<P> {
    fn algorithm(&self) -> &str {
        (**self).algorithm()
    }

    fn digest(&self, data: &[u8]) -> Result<DigestBytes, DigestError> {
        (**self).digest(data)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Provider;

impl DigestProvider for Sha256Provider {
    fn algorithm(&self) -> &str {
        SHA256_ALGORITHM
    }

    fn digest(&self, data: &[u8]) -> Result<DigestBytes, DigestError> {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&hasher.finalize());
        Ok(out)
    }
}

/// Stands in for an environment that lacks the algorithm. Every call fails.
#[derive(Debug, Clone)]
pub struct UnavailableProvider {
    algorithm: String,
}

impl UnavailableProvider {
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self { algorithm: algorithm.into() }
    }
}

impl DigestProvider for UnavailableProvider {
    fn algorithm(&self) -> &str {
        &self.algorithm
    }

    fn digest(&self, _data: &[u8]) -> Result<DigestBytes, DigestError> {
        Err(DigestError::UnavailableAlgorithm(self.algorithm.clone()))
    }
}

/// Maps text to a 256-bit non-negative integer.
///
/// The text is hashed as its UTF-8 bytes and the 32-byte digest is read as a
/// big-endian unsigned integer, so the result always lies in `[0, 2^256)`.
#[derive(Debug, Clone)]
pub struct DigestEngine<P = Sha256Provider> {
    provider: P,
}

impl DigestEngine<Sha256Provider> {
    pub fn sha256() -> Self {
        Self::new(Sha256Provider)
    }
}

impl Default for DigestEngine<Sha256Provider> {
    fn default() -> Self {
        Self::sha256()
    }
}

impl<P: DigestProvider> DigestEngine<P> {
    pub fn new(provider: P) -> Self {
        debug!("digest engine using provider {}", provider.algorithm());
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn compute_digest(&self, text: &str) -> Result<BigUint, DigestError> {
        self.compute_digest_bytes(text.as_bytes())
    }

    /// Same contract as [`compute_digest`](Self::compute_digest) for input
    /// that is already encoded.
    pub fn compute_digest_bytes(&self, data: &[u8]) -> Result<BigUint, DigestError> {
        let digest = self.hash(data)?;
        Ok(BigUint::from_bytes_be(&digest))
    }

    pub fn digest_bytes(&self, text: &str) -> Result<DigestBytes, DigestError> {
        self.hash(text.as_bytes())
    }

    pub fn digest_hex(&self, text: &str) -> Result<String, DigestError> {
        Ok(hex::encode(self.hash(text.as_bytes())?))
    }

    fn hash(&self, data: &[u8]) -> Result<DigestBytes, DigestError> {
        match self.provider.digest(data) {
            Ok(digest) => {
                trace!("{} over {} bytes", self.provider.algorithm(), data.len());
                Ok(digest)
            }
            Err(err) => {
                warn!("digest failed: {err}");
                Err(err)
            }
        }
    }
}

pub fn compute_digest(text: &str) -> Result<BigUint, DigestError> {
    DigestEngine::sha256().compute_digest(text)
}

pub fn sha256_hex(input: &str) -> Result<String, DigestError> {
    DigestEngine::sha256().digest_hex(input)
}
