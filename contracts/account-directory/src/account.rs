//! Account record and the summary served to frontends.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Directory entry owned by a single address.
///
/// Only `subscriptions_enabled` and the two edge lists change after
/// creation. Both lists keep insertion order and never hold the same id
/// twice.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    /// Address the account is bound to.
    pub owner: Address,

    /// Name chosen at creation.
    pub display_name: String,

    /// Whether new subscribers are accepted.
    pub subscriptions_enabled: bool,

    /// Ids of the accounts subscribed to this one.
    pub subscribers: Vec<u64>,

    /// Ids of the accounts this one is subscribed to.
    pub subscribed_to: Vec<u64>,

    /// Collectible minted to the owner when the account was created.
    pub asset_id: u64,

    /// Ledger sequence of the creation.
    pub created_at: u32,
}

/// Aggregate view of an account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountSummary {
    pub display_name: String,
    pub enabled: bool,
    pub subscriber_count: u32,
    pub subscribed_count: u32,
}

impl Account {
    pub fn new(e: &Env, owner: Address, display_name: String, asset_id: u64) -> Self {
        Self {
            owner,
            display_name,
            subscriptions_enabled: true,
            subscribers: Vec::new(e),
            subscribed_to: Vec::new(e),
            asset_id,
            created_at: e.ledger().sequence(),
        }
    }

    /// Returns false if `account_id` was already a subscriber.
    pub fn add_subscriber(&mut self, account_id: u64) -> bool {
        insert_unique(&mut self.subscribers, account_id)
    }

    /// Returns false if `account_id` was not a subscriber.
    pub fn remove_subscriber(&mut self, account_id: u64) -> bool {
        remove_item(&mut self.subscribers, account_id)
    }

    /// Returns false if this account already followed `account_id`.
    pub fn add_subscription(&mut self, account_id: u64) -> bool {
        insert_unique(&mut self.subscribed_to, account_id)
    }

    /// Returns false if this account did not follow `account_id`.
    pub fn remove_subscription(&mut self, account_id: u64) -> bool {
        remove_item(&mut self.subscribed_to, account_id)
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            display_name: self.display_name.clone(),
            enabled: self.subscriptions_enabled,
            subscriber_count: self.subscribers.len(),
            subscribed_count: self.subscribed_to.len(),
        }
    }
}

fn insert_unique(ids: &mut Vec<u64>, account_id: u64) -> bool {
    if ids.contains(account_id) {
        return false;
    }
    ids.push_back(account_id);
    true
}

fn remove_item(ids: &mut Vec<u64>, account_id: u64) -> bool {
    match ids.first_index_of(account_id) {
        Some(index) => {
            ids.remove(index);
            true
        }
        None => false,
    }
}
