use crate::denylist::Denylist;
use crate::error::RegistryError;
use crate::events::{EventSink, TransferNotice};
use crate::id::{AccountId, TokenId};
use crate::roles::Role;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Visibility policy for the supply counter.
///
/// The observed deployments gate `total_supply` behind the owner's
/// privilege; whether that is intended design is unsettled, so the
/// policy is configurable rather than fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SupplyAccess {
    /// Anyone may read the supply counter
    Public,

    /// Only the owner or an admin-role account may read it
    #[default]
    Privileged,
}

/// Constructor parameters for a registry.
///
/// All fields are fixed at deployment; there is no post-construction
/// mutation path for any of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Collection name (e.g. "Liquid Access")
    pub name: String,

    /// Collection ticker symbol (e.g. "LA")
    pub symbol: String,

    /// Advisory initial supply figure; not enforced against mints
    pub initial_supply_hint: u64,

    /// Display name of the merchant this registry serves
    pub merchant_label: String,

    /// Who may read the supply counter
    pub supply_access: SupplyAccess,
}

impl RegistryConfig {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        initial_supply_hint: u64,
        merchant_label: impl Into<String>,
    ) -> Self {
        RegistryConfig {
            name: name.into(),
            symbol: symbol.into(),
            initial_supply_hint,
            merchant_label: merchant_label.into(),
            supply_access: SupplyAccess::default(),
        }
    }

    /// Override the supply visibility policy
    pub fn with_supply_access(mut self, access: SupplyAccess) -> Self {
        self.supply_access = access;
        self
    }
}

/// Access-control token registry for a single merchant.
///
/// Holds ownership, two independent denylists (token ids and
/// accounts), per-account role assignments, and per-account token
/// sequences in mint order. All state lives in this struct; callers
/// inject it explicitly, so the registry is testable without an
/// external execution harness.
///
/// Every mutating operation checks authorization first and either
/// fully applies or fails with state untouched. Serialization of
/// concurrent submissions is the external substrate's concern; the
/// registry itself is a plain sequential state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// The deploying account; holds maximal privilege
    owner: AccountId,

    /// Immutable deployment parameters
    config: RegistryConfig,

    /// Flagged token ids (storage and query only; no enforcement)
    token_denylist: Denylist<TokenId>,

    /// Flagged accounts, independent of the token denylist
    account_denylist: Denylist<AccountId>,

    /// Role assignments; unset accounts hold Role::None
    roles: HashMap<AccountId, Role>,

    /// Per-account token sequences in mint order
    tokens: HashMap<AccountId, Vec<TokenId>>,

    /// Owner of each minted token; also the uniqueness domain for mints
    token_owners: HashMap<TokenId, AccountId>,
}

impl Registry {
    /// Create a registry. The deployer becomes the owner.
    pub fn new(config: RegistryConfig, deployer: AccountId) -> Self {
        debug!(
            "registry created: merchant={} owner={}",
            config.merchant_label, deployer
        );
        Registry {
            owner: deployer,
            config,
            token_denylist: Denylist::new(),
            account_denylist: Denylist::new(),
            roles: HashMap::new(),
            tokens: HashMap::new(),
            token_owners: HashMap::new(),
        }
    }

    // ---- Access control guard ----

    /// Check that `caller` may perform an operation gated at `required`.
    ///
    /// Passes when the caller is the owner or holds a role at least as
    /// high as `required`. Has no side effect beyond the decision.
    pub fn require_authorized(
        &self,
        caller: AccountId,
        required: Role,
    ) -> Result<(), RegistryError> {
        if caller == self.owner || self.role_of(caller) >= required {
            return Ok(());
        }
        warn!("rejected call from {}: requires {:?}", caller, required);
        Err(RegistryError::Unauthorized { caller, required })
    }

    // Owner-only gate; roles do not substitute for ownership here.
    fn require_owner(&self, caller: AccountId) -> Result<(), RegistryError> {
        if caller == self.owner {
            return Ok(());
        }
        warn!("rejected owner-only call from {}", caller);
        Err(RegistryError::Unauthorized {
            caller,
            required: Role::Admin,
        })
    }

    // ---- Denylist management ----

    /// Flag a token id. Idempotent; authorized callers only.
    pub fn add_token_to_denylist(
        &mut self,
        caller: AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller, Role::Admin)?;
        if self.token_denylist.insert(token_id) {
            debug!("{} denylisted by {}", token_id, caller);
        }
        Ok(())
    }

    /// Clear a token id. Idempotent; authorized callers only.
    pub fn remove_token_from_denylist(
        &mut self,
        caller: AccountId,
        token_id: TokenId,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller, Role::Admin)?;
        if self.token_denylist.remove(&token_id) {
            debug!("{} cleared from denylist by {}", token_id, caller);
        }
        Ok(())
    }

    /// Membership query; no authorization required
    pub fn is_token_denylisted(&self, token_id: TokenId) -> bool {
        self.token_denylist.contains(&token_id)
    }

    /// Flag an account. Idempotent; authorized callers only.
    pub fn add_account_to_denylist(
        &mut self,
        caller: AccountId,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller, Role::Admin)?;
        if self.account_denylist.insert(account) {
            debug!("{} denylisted by {}", account, caller);
        }
        Ok(())
    }

    /// Clear an account. Idempotent; authorized callers only.
    pub fn remove_account_from_denylist(
        &mut self,
        caller: AccountId,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        self.require_authorized(caller, Role::Admin)?;
        if self.account_denylist.remove(&account) {
            debug!("{} cleared from denylist by {}", account, caller);
        }
        Ok(())
    }

    /// Membership query; no authorization required
    pub fn is_account_denylisted(&self, account: AccountId) -> bool {
        self.account_denylist.contains(&account)
    }

    // ---- Token issuance ----

    /// Mint `token_id` to `recipient`.
    ///
    /// Fails with `DuplicateToken` if the id was ever minted before,
    /// leaving state untouched. On success the id is appended to the
    /// recipient's sequence and a Transfer-style notice (from the null
    /// identity) is returned for the caller to deliver to its event
    /// sink.
    pub fn mint(
        &mut self,
        caller: AccountId,
        recipient: AccountId,
        token_id: TokenId,
    ) -> Result<TransferNotice, RegistryError> {
        self.require_authorized(caller, Role::Admin)?;

        if self.token_owners.contains_key(&token_id) {
            warn!("mint of {} rejected: already minted", token_id);
            return Err(RegistryError::DuplicateToken(token_id));
        }

        self.token_owners.insert(token_id, recipient);
        self.tokens.entry(recipient).or_default().push(token_id);

        debug!("{} minted to {} by {}", token_id, recipient, caller);
        Ok(TransferNotice::mint(recipient, token_id))
    }

    /// Mint and forward the resulting notice to `sink`.
    ///
    /// The state transition is applied before delivery; a sink failure
    /// surfaces to the caller but does not roll the mint back.
    pub fn mint_with_sink(
        &mut self,
        caller: AccountId,
        recipient: AccountId,
        token_id: TokenId,
        sink: &dyn EventSink,
    ) -> Result<TransferNotice, RegistryError> {
        let notice = self.mint(caller, recipient, token_id)?;
        sink.record(&notice)?;
        Ok(notice)
    }

    /// Tokens held by `account`, in mint order. Empty if none minted.
    pub fn tokens_of(&self, account: AccountId) -> &[TokenId] {
        self.tokens.get(&account).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of tokens held by `account`
    pub fn balance_of(&self, account: AccountId) -> usize {
        self.tokens_of(account).len()
    }

    /// Owner of a minted token; `NotFound` for ids never minted
    pub fn owner_of(&self, token_id: TokenId) -> Result<AccountId, RegistryError> {
        self.token_owners
            .get(&token_id)
            .copied()
            .ok_or_else(|| RegistryError::NotFound(format!("{} has not been minted", token_id)))
    }

    /// Count of minted tokens, gated by the supply visibility policy
    pub fn total_supply(&self, caller: AccountId) -> Result<u64, RegistryError> {
        if self.config.supply_access == SupplyAccess::Privileged {
            self.require_authorized(caller, Role::Admin)?;
        }
        Ok(self.token_owners.len() as u64)
    }

    // ---- Role assignment ----

    /// Assign `role` to `account`, overwriting any prior assignment.
    ///
    /// Owner-only: holding an admin role does not extend to granting
    /// roles to others.
    pub fn set_role(
        &mut self,
        caller: AccountId,
        account: AccountId,
        role: Role,
    ) -> Result<(), RegistryError> {
        self.require_owner(caller)?;
        if role == Role::None {
            self.roles.remove(&account);
        } else {
            self.roles.insert(account, role);
        }
        debug!("{} assigned {:?} by {}", account, role, caller);
        Ok(())
    }

    /// Current role of `account`; `Role::None` if never assigned
    pub fn role_of(&self, account: AccountId) -> Role {
        self.roles.get(&account).copied().unwrap_or_default()
    }

    // ---- Query surface ----

    /// The deploying account
    pub fn owner_account(&self) -> AccountId {
        self.owner
    }

    /// Merchant display name fixed at deployment
    pub fn merchant_name(&self) -> &str {
        &self.config.merchant_label
    }

    /// Collection name fixed at deployment
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Collection symbol fixed at deployment
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    // ---- Snapshot handoff ----

    /// Serialize the full registry state for the external substrate
    pub fn snapshot(&self) -> Result<Vec<u8>, RegistryError> {
        Ok(bincode::serialize(self)?)
    }

    /// Rebuild a registry from a `snapshot` payload
    pub fn restore(bytes: &[u8]) -> Result<Self, RegistryError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
