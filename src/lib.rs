//! SHA-256 content digests returned as unsigned integers, for use as
//! content-derived identifiers in credential and identity systems.

pub mod cli;
pub mod crypto;
pub mod error;
pub mod value;

pub use crypto::{compute_digest, DigestEngine, DigestProvider, ProviderRegistry, Sha256Provider};
pub use error::DigestError;
