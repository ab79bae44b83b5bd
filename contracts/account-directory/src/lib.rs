#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String, Vec};

contractmeta!(key = "Description", val = "Account Directory");

mod account;
mod contract;
pub mod errors;
mod events;
pub mod issuer;
mod storage;


pub use account::{Account, AccountSummary};

#[contract]
pub struct AccountDirectory;

/// Registry binding each owner address to one account, and the mirrored
/// subscription graph between those accounts.
///
/// Accounts cannot be deleted or renamed. Every failing call is rolled back
/// as a whole, so a subscription edge is always present on both of its
/// accounts or on neither.
pub trait AccountDirectoryTrait {

    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `admin` - Account allowed to configure and upgrade the directory.
    /// * `asset_issuer` - Contract minting the account collectibles, if
    ///   already deployed.
    fn __constructor(e: &Env, admin: Address, asset_issuer: Option<Address>);

    /// Points the directory at a new asset issuer. Admin only.
    ///
    /// # Events
    ///
    /// * topics - `["asset_issuer_updated", admin: Address]`
    /// * data - `[issuer: Address]`
    fn set_asset_issuer(e: &Env, issuer: Address);

    /// Replaces the contract code. Admin only.
    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Create the account of `owner`.
    ///
    /// A collectible labelled with `display_name` is minted to `owner`
    /// through the asset issuer. If the mint fails, no account is created.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Address the account is bound to. Must authorize.
    /// * `display_name` - Name shown for the account.
    ///
    /// # Returns
    ///
    /// The id of the new account.
    ///
    /// # Errors
    ///
    /// * `AlreadyExists` - `owner` already has an account.
    /// * `CollectionNotFound` - no asset issuer configured or usable.
    /// * `PaymentInvalid` - `owner` cannot pay for the collectible.
    /// * `AccountIdsDepleted` - every account id is in use.
    ///
    /// Any other contract error of the issuer is raised unchanged.
    ///
    /// # Events
    ///
    /// * topics - `["account_created", owner: Address]`
    /// * data - `[account_id: u64, display_name: String]`
    fn create_account(e: &Env, owner: Address, display_name: String) -> u64;

    /// Subscribe the account of `subscriber` to the account of `target`.
    ///
    /// Subscribing again to the same target changes nothing.
    ///
    /// # Errors
    ///
    /// * `SelfSubscription` - `subscriber` and `target` are the same.
    /// * `NotFound` - either side has no account.
    /// * `SubscriptionDisabled` - `target` does not accept subscribers.
    ///
    /// # Events
    ///
    /// * topics - `["subscribed", subscriber_id: u64]`
    /// * data - `[target_id: u64]`
    fn subscribe(e: &Env, subscriber: Address, target: Address);

    /// Remove the subscription of `subscriber` to `target`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - either side has no account.
    /// * `NotSubscribed` - `subscriber` does not follow `target`.
    ///
    /// # Events
    ///
    /// * topics - `["unsubscribed", subscriber_id: u64]`
    /// * data - `[target_id: u64]`
    fn unsubscribe(e: &Env, subscriber: Address, target: Address);

    /// Accept or refuse new subscribers. Existing subscribers are kept.
    ///
    /// # Errors
    ///
    /// * `NotFound` - `owner` has no account.
    /// * `NotOwner` - the account is not recorded as owned by `owner`.
    ///
    /// # Events
    ///
    /// * topics - `["subscription_toggled", account_id: u64]`
    /// * data - `[enabled: bool]`
    fn set_subscription_enabled(e: &Env, owner: Address, enabled: bool);

    /// Returns whether `owner` has an account. Never fails.
    fn account_exists(e: &Env, owner: Address) -> bool;

    /// Returns the account id of `owner`.
    fn get_account_id(e: &Env, owner: Address) -> u64;

    /// Returns the full account record of `owner`.
    fn get_account(e: &Env, owner: Address) -> Account;

    /// Returns the account record stored under `account_id`.
    fn get_account_by_id(e: &Env, account_id: u64) -> Account;

    /// Returns the ids subscribed to `owner`, oldest first.
    fn get_subscribers(e: &Env, owner: Address) -> Vec<u64>;

    /// Returns the ids `owner` is subscribed to, oldest first.
    fn get_subscribed_to(e: &Env, owner: Address) -> Vec<u64>;

    fn is_subscription_enabled(e: &Env, owner: Address) -> bool;

    fn get_account_summary(e: &Env, owner: Address) -> AccountSummary;

    /// Returns the number of accounts created so far.
    fn account_count(e: &Env) -> u64;

    fn asset_issuer(e: &Env) -> Option<Address>;

    fn admin(e: &Env) -> Address;
}
