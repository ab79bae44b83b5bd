//! Owner registry and subscription graph

use soroban_sdk::{contractimpl, log, panic_with_error, Address, BytesN, Env, String, Vec};
use crate::{
    account::{Account, AccountSummary},
    errors::DirectoryError,
    events, issuer, storage,
    AccountDirectory, AccountDirectoryArgs, AccountDirectoryClient, AccountDirectoryTrait,
};

fn require_admin(e: &Env) -> Address {
    let admin = storage::read_admin(e)
        .unwrap_or_else(|| panic_with_error!(e, DirectoryError::NotFound));
    admin.require_auth();
    admin
}

fn resolve_id(e: &Env, owner: &Address) -> u64 {
    storage::find_account_id(e, owner)
        .unwrap_or_else(|| panic_with_error!(e, DirectoryError::NotFound))
}

fn load(e: &Env, account_id: u64) -> Account {
    storage::find_account(e, account_id)
        .unwrap_or_else(|| panic_with_error!(e, DirectoryError::NotFound))
}

fn resolve(e: &Env, owner: &Address) -> (u64, Account) {
    let account_id = resolve_id(e, owner);
    (account_id, load(e, account_id))
}

#[contractimpl]
impl AccountDirectoryTrait for AccountDirectory {

    fn __constructor(e: &Env, admin: Address, asset_issuer: Option<Address>) {
        storage::write_admin(e, &admin);
        if let Some(issuer) = asset_issuer {
            storage::write_asset_issuer(e, &issuer);
        }
    }

    fn set_asset_issuer(e: &Env, issuer: Address) {
        let admin = require_admin(e);

        storage::write_asset_issuer(e, &issuer);

        events::AssetIssuerUpdated { admin, issuer }.publish(e);
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        require_admin(e);

        e.deployer().update_current_contract_wasm(wasm_hash);
    }

    fn create_account(e: &Env, owner: Address, display_name: String) -> u64 {
        owner.require_auth();
        storage::bump_instance(e);

        if storage::find_account_id(e, &owner).is_some() {
            panic_with_error!(e, DirectoryError::AlreadyExists);
        }

        let issuer = storage::read_asset_issuer(e)
            .unwrap_or_else(|| panic_with_error!(e, DirectoryError::CollectionNotFound));
        let asset_id = issuer::mint_collectible(e, &issuer, &owner, &display_name);

        let account = Account::new(e, owner.clone(), display_name.clone(), asset_id);
        let account_id = storage::insert_account(e, &account)
            .unwrap_or_else(|error| panic_with_error!(e, error));

        log!(e, "account created", account_id, asset_id);
        events::AccountCreated { owner, account_id, display_name }.publish(e);

        account_id
    }

    fn subscribe(e: &Env, subscriber: Address, target: Address) {
        subscriber.require_auth();
        storage::bump_instance(e);

        if subscriber == target {
            panic_with_error!(e, DirectoryError::SelfSubscription);
        }

        let (subscriber_id, mut subscriber_account) = resolve(e, &subscriber);
        let (target_id, mut target_account) = resolve(e, &target);

        // Both sides are staged and only written once the target accepted.
        if !target_account.subscriptions_enabled {
            panic_with_error!(e, DirectoryError::SubscriptionDisabled);
        }

        subscriber_account.add_subscription(target_id);
        target_account.add_subscriber(subscriber_id);
        storage::save_pair(e, subscriber_id, &subscriber_account, target_id, &target_account);

        log!(e, "subscribed", subscriber_id, target_id);
        events::Subscribed { subscriber_id, target_id }.publish(e);
    }

    fn unsubscribe(e: &Env, subscriber: Address, target: Address) {
        subscriber.require_auth();
        storage::bump_instance(e);

        let (subscriber_id, mut subscriber_account) = resolve(e, &subscriber);
        let (target_id, mut target_account) = resolve(e, &target);

        if !subscriber_account.remove_subscription(target_id) {
            panic_with_error!(e, DirectoryError::NotSubscribed);
        }
        // The reverse entry is dropped if present; its absence is not an error.
        target_account.remove_subscriber(subscriber_id);

        storage::save_pair(e, subscriber_id, &subscriber_account, target_id, &target_account);

        log!(e, "unsubscribed", subscriber_id, target_id);
        events::Unsubscribed { subscriber_id, target_id }.publish(e);
    }

    fn set_subscription_enabled(e: &Env, owner: Address, enabled: bool) {
        owner.require_auth();
        storage::bump_instance(e);

        let (account_id, mut account) = resolve(e, &owner);
        if account.owner != owner {
            panic_with_error!(e, DirectoryError::NotOwner);
        }

        account.subscriptions_enabled = enabled;
        storage::save_account(e, account_id, &account);

        log!(e, "subscriptions toggled", account_id, enabled);
        events::SubscriptionToggled { account_id, enabled }.publish(e);
    }

    fn account_exists(e: &Env, owner: Address) -> bool {
        storage::find_account_id(e, &owner).is_some()
    }

    fn get_account_id(e: &Env, owner: Address) -> u64 {
        resolve_id(e, &owner)
    }

    fn get_account(e: &Env, owner: Address) -> Account {
        resolve(e, &owner).1
    }

    fn get_account_by_id(e: &Env, account_id: u64) -> Account {
        load(e, account_id)
    }

    fn get_subscribers(e: &Env, owner: Address) -> Vec<u64> {
        resolve(e, &owner).1.subscribers
    }

    fn get_subscribed_to(e: &Env, owner: Address) -> Vec<u64> {
        resolve(e, &owner).1.subscribed_to
    }

    fn is_subscription_enabled(e: &Env, owner: Address) -> bool {
        resolve(e, &owner).1.subscriptions_enabled
    }

    fn get_account_summary(e: &Env, owner: Address) -> AccountSummary {
        resolve(e, &owner).1.summary()
    }

    fn account_count(e: &Env) -> u64 {
        storage::account_count(e)
    }

    fn asset_issuer(e: &Env) -> Option<Address> {
        storage::read_asset_issuer(e)
    }

    fn admin(e: &Env) -> Address {
        storage::read_admin(e)
            .unwrap_or_else(|| panic_with_error!(e, DirectoryError::NotFound))
    }
}
