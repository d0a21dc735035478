use crate::error::RegistryError;
use crate::id::{AccountId, TokenId};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Transfer-style notification emitted when a token is minted.
///
/// A mint is modeled as a transfer from the null identity to the
/// recipient. The registry returns the notice from `mint` instead of
/// performing I/O itself; delivery to the external event-log sink is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferNotice {
    /// Sending side; the null identity for mints
    pub from: AccountId,

    /// Receiving account
    pub to: AccountId,

    /// The token that changed hands
    pub token_id: TokenId,

    /// Timestamp when the transition was applied (unix seconds)
    pub timestamp: u64,
}

impl TransferNotice {
    /// Build a mint notice (from = null identity)
    pub fn mint(to: AccountId, token_id: TokenId) -> Self {
        TransferNotice {
            from: AccountId::null(),
            to,
            token_id,
            timestamp: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// True if this notice describes a mint
    pub fn is_mint(&self) -> bool {
        self.from.is_null()
    }

    /// JSON payload for external event-log sinks
    pub fn to_json(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Sink receiving transfer notices.
///
/// The external substrate supplies the real sink; `MemoryEventSink`
/// covers tests and embedded use.
pub trait EventSink {
    /// Record a notice
    ///
    /// # Parameters
    /// * `notice` - The transfer notice to record
    ///
    /// # Returns
    /// Ok(()) if successful, Err otherwise
    fn record(&self, notice: &TransferNotice) -> Result<(), RegistryError>;
}

/// In-memory event sink keeping notices in arrival order
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    notices: Mutex<Vec<TransferNotice>>,
}

impl MemoryEventSink {
    /// Create a new in-memory event sink
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot copy of all recorded notices, oldest first
    pub fn notices(&self) -> Vec<TransferNotice> {
        self.notices.lock().expect("event sink poisoned").clone()
    }

    /// Number of recorded notices
    pub fn len(&self) -> usize {
        self.notices.lock().expect("event sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, notice: &TransferNotice) -> Result<(), RegistryError> {
        self.notices
            .lock()
            .map_err(|_| RegistryError::Other("event sink poisoned".to_string()))?
            .push(notice.clone());
        Ok(())
    }
}
