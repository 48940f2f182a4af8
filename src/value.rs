//! Adapter between the digest engine and a generic value-interchange layer.
//!
//! The engine works on `&str` and `BigUint`; callers that pass values around
//! as tagged [`Value`]s go through [`Sha256Function`].

use num_bigint::{BigInt, Sign};

use crate::crypto::hash::{DigestEngine, DigestProvider, Sha256Provider};
use crate::error::DigestError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(BigInt),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ValueFactory;

impl ValueFactory {
    pub fn string(&self, s: impl Into<String>) -> Value {
        Value::Str(s.into())
    }

    pub fn integer(&self, i: impl Into<BigInt>) -> Value {
        Value::Int(i.into())
    }

    /// Reads `bytes` as a big-endian magnitude. The result is never negative.
    pub fn unsigned_from_be_bytes(&self, bytes: &[u8]) -> Value {
        Value::Int(BigInt::from_bytes_be(Sign::Plus, bytes))
    }
}

#[derive(Debug, Clone)]
pub struct Sha256Function<P = Sha256Provider> {
    factory: ValueFactory,
    engine: DigestEngine<P>,
}

impl Default for Sha256Function<Sha256Provider> {
    fn default() -> Self {
        Self::new(ValueFactory, DigestEngine::sha256())
    }
}

impl<P: DigestProvider> Sha256Function<P> {
    pub fn new(factory: ValueFactory, engine: DigestEngine<P>) -> Self {
        Self { factory, engine }
    }

    pub fn call(&self, arg: &Value) -> Result<Value, DigestError> {
        let text = arg.as_str().ok_or(DigestError::TypeMismatch {
            expected: "str",
            found: arg.kind(),
        })?;
        let digest = self.engine.digest_bytes(text)?;
        Ok(self.factory.unsigned_from_be_bytes(&digest))
    }
}
