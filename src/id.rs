use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Deref;

// AccountId identifies a principal known to the registry.
// It is a 20 byte address-shaped identifier supplied by the external
// execution substrate; the all-zero value is the null identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 20]);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(self.0))
    }
}

impl Ord for AccountId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for AccountId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        AccountId([0; 20])
    }
}

impl Deref for AccountId {
    type Target = [u8; 20];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AccountId {
    pub fn new(bytes: [u8; 20]) -> Self {
        AccountId(bytes)
    }

    /// Create an AccountId from raw bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        AccountId(bytes)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// The all-zero null identity, used as the "from" side of a mint
    pub fn null() -> Self {
        AccountId::default()
    }

    /// True if this is the null identity
    pub fn is_null(&self) -> bool {
        self.0 == [0; 20]
    }

    /// Derive a deterministic AccountId from seed material.
    ///
    /// Hashes a domain separator plus all seeds with SHA-256 and keeps
    /// the first 20 bytes, so the same seeds always map to the same id.
    pub fn derive(seeds: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();

        // Domain separator
        hasher.update(b"LiquidAccess_Account");

        for seed in seeds {
            hasher.update(seed);
        }

        let digest = hasher.finalize();
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&digest[..20]);
        AccountId(bytes)
    }

    /// Create a random AccountId for testing
    pub fn random() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        // Timestamp plus a process-wide counter as basis for uniqueness
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
            .to_le_bytes();
        let nonce = COUNTER.fetch_add(1, Ordering::Relaxed).to_le_bytes();

        Self::derive(&[&now, &nonce])
    }
}

/// TokenId identifies a minted token. Opaque to the registry beyond
/// equality; uniqueness across the registry is enforced at mint time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct TokenId(u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token:{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(raw: u64) -> Self {
        TokenId(raw)
    }
}

impl TokenId {
    pub fn new(raw: u64) -> Self {
        TokenId(raw)
    }

    /// Get the raw numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let a = AccountId::derive(&[b"merchant", b"alice"]);
        let b = AccountId::derive(&[b"merchant", b"alice"]);
        assert_eq!(a, b);

        // Different seeds produce a different id
        let c = AccountId::derive(&[b"merchant", b"bob"]);
        assert_ne!(a, c);

        // Derived ids are never the null identity
        assert!(!a.is_null());
    }

    #[test]
    fn test_random_ids_differ() {
        let a = AccountId::random();
        let b = AccountId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_null_identity() {
        let null = AccountId::null();
        assert!(null.is_null());
        assert_eq!(null, AccountId::default());
        assert_eq!(*null, [0u8; 20]);
    }

    #[test]
    fn test_display_prefixes() {
        let id = AccountId::new([0xab; 20]);
        assert!(id.to_string().starts_with("acct:abab"));

        let token = TokenId::new(22);
        assert_eq!(token.to_string(), "token:22");
    }

    #[test]
    fn test_token_id_round_trip() {
        let token = TokenId::from(7);
        assert_eq!(token.value(), 7);
        assert_eq!(token, TokenId::new(7));
    }
}
