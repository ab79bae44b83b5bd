//! Storage layout and repository functions of the directory.
//!
//! Accounts live in persistent storage keyed by their sequential id, with
//! the owner index as a secondary key. Configuration and the id counter
//! live in instance storage. Lookups return `Option`; turning a miss into
//! an error is left to the caller.

use soroban_sdk::{contracttype, Address, Env};

use crate::{account::Account, errors::DirectoryError};

/// Storage keys for the directory contract.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DirectoryKey {
    /// Contract administrator address.
    Admin,

    /// Contract minting the account collectibles.
    AssetIssuer,

    /// Number of accounts ever created, also the last allocated id.
    AccountCount,

    /// Maps account id to the Account record.
    Account(u64),

    /// Maps owner Address to account id.
    /// Used to enforce one account per owner.
    Owner(Address),
}

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(e: &Env, key: &DirectoryKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, ACCOUNT_LIFETIME_THRESHOLD, ACCOUNT_BUMP_AMOUNT);
}

pub fn read_admin(e: &Env) -> Option<Address> {
    bump_instance(e);
    e.storage().instance().get(&DirectoryKey::Admin)
}

pub fn write_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DirectoryKey::Admin, admin);
}

pub fn read_asset_issuer(e: &Env) -> Option<Address> {
    bump_instance(e);
    e.storage().instance().get(&DirectoryKey::AssetIssuer)
}

pub fn write_asset_issuer(e: &Env, issuer: &Address) {
    e.storage().instance().set(&DirectoryKey::AssetIssuer, issuer);
}

pub fn account_count(e: &Env) -> u64 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DirectoryKey::AccountCount)
        .unwrap_or(0)
}

pub fn find_account_id(e: &Env, owner: &Address) -> Option<u64> {
    let key = DirectoryKey::Owner(owner.clone());
    let account_id = e.storage().persistent().get(&key)?;
    bump_persistent(e, &key);
    Some(account_id)
}

pub fn find_account(e: &Env, account_id: u64) -> Option<Account> {
    let key = DirectoryKey::Account(account_id);
    let account = e.storage().persistent().get(&key)?;
    bump_persistent(e, &key);
    Some(account)
}

pub fn save_account(e: &Env, account_id: u64, account: &Account) {
    let key = DirectoryKey::Account(account_id);
    e.storage().persistent().set(&key, account);
    bump_persistent(e, &key);
}

/// Writes both ends of a subscription edge.
pub fn save_pair(
    e: &Env,
    subscriber_id: u64,
    subscriber: &Account,
    target_id: u64,
    target: &Account,
) {
    save_account(e, subscriber_id, subscriber);
    save_account(e, target_id, target);
}

/// Allocates the next id and stores `account` under it together with its
/// owner index entry.
///
/// Nothing is written when the owner already has an account or the id
/// space is exhausted.
pub fn insert_account(e: &Env, account: &Account) -> Result<u64, DirectoryError> {
    let owner_key = DirectoryKey::Owner(account.owner.clone());
    if e.storage().persistent().has(&owner_key) {
        return Err(DirectoryError::AlreadyExists);
    }

    let account_id = account_count(e)
        .checked_add(1)
        .ok_or(DirectoryError::AccountIdsDepleted)?;

    save_account(e, account_id, account);
    e.storage().persistent().set(&owner_key, &account_id);
    bump_persistent(e, &owner_key);
    e.storage().instance().set(&DirectoryKey::AccountCount, &account_id);

    Ok(account_id)
}
