//! SHA-256 hashing used for every derived identifier

use crate::bytes::Bytes32;
use sha2::{Digest, Sha256};

/// Hash `data` in one shot
pub fn sha256(data: &[u8]) -> Bytes32 {
    Bytes32::new(Sha256::digest(data).into())
}

/// Incremental hasher for preimages assembled from several fields
#[derive(Clone, Default)]
pub struct Hasher(Sha256);

impl Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data.as_ref());
    }

    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.input(data);
        self
    }

    pub fn digest(self) -> Bytes32 {
        Bytes32::new(self.0.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_digest() {
        // SHA-256 of the empty string
        let expected: Bytes32 = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            .parse()
            .unwrap();
        assert_eq!(sha256(&[]), expected);
        assert_eq!(Hasher::new().digest(), expected);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let one_shot = sha256(b"loader bytecode");
        let chained = Hasher::new().chain(b"loader ").chain(b"bytecode").digest();
        assert_eq!(one_shot, chained);
    }
}
