use crate::error::InvalidIdError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Required length of a graph hash
pub const GRAPH_HASH_LEN: usize = 10;

/// Token identifying a saved graph on the calculator service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GraphHash(String);

impl GraphHash {
    /// Accept a caller-supplied token; it must be exactly 10 characters.
    ///
    /// Length is counted in UTF-16 code units, the way the service measures
    /// it, so a character outside the Basic Multilingual Plane counts twice.
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidIdError> {
        let s = s.into();
        let found = s.encode_utf16().count();
        if found != GRAPH_HASH_LEN {
            return Err(InvalidIdError {
                expected: GRAPH_HASH_LEN,
                found,
            });
        }
        Ok(Self(s))
    }

    /// Generate a random token of lowercase ASCII letters
    pub fn generate() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let hash: String = (0..GRAPH_HASH_LEN)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GraphHash {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GraphHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
