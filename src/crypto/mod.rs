pub mod hash;
pub mod registry;

pub use self::hash::{
    compute_digest, sha256_hex, DigestBytes, DigestEngine, DigestProvider, Sha256Provider,
    UnavailableProvider, DIGEST_LEN, SHA256_ALGORITHM,
};
pub use self::registry::ProviderRegistry;
