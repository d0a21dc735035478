pub mod denylist;
pub mod error;
pub mod events;
pub mod id;
pub mod registry;
pub mod roles;

// Re-export the main types for convenience
pub use denylist::Denylist;
pub use error::RegistryError;
pub use events::{EventSink, MemoryEventSink, TransferNotice};
pub use id::{AccountId, TokenId};
pub use registry::{Registry, RegistryConfig, SupplyAccess};
pub use roles::Role;
