use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The execution environment has no implementation of the named algorithm.
    #[error("digest algorithm unavailable: {0}")]
    UnavailableAlgorithm(String),

    /// A value of the wrong kind reached the value adapter.
    #[error("expected a {expected} value, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
