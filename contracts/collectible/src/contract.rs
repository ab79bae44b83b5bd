//! Paid collectible collection

use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, token, Address, Env, String};
use crate::{errors::CollectibleError, events, Collectible, CollectibleArgs, CollectibleClient, CollectibleTrait};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const TOKEN_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const TOKEN_LIFETIME_THRESHOLD: u32 = TOKEN_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum CollectibleStorageKey {
    Admin,
    Name,
    Symbol,
    URI,
    PaymentToken,
    MintPrice,
    Supply,
    Owner(u64),
    Label(u64),
    Balance(Address),
}

fn instance_get<V>(e: &Env, key: &CollectibleStorageKey) -> V
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    bump_instance(e);
    e.storage()
        .instance()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, CollectibleError::CollectionNotFound))
}

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_token<V>(e: &Env, key: &CollectibleStorageKey) -> V
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = e
        .storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| panic_with_error!(e, CollectibleError::NonExistentToken));
    e.storage()
        .persistent()
        .extend_ttl(key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
    value
}

fn write_persistent<V>(e: &Env, key: &CollectibleStorageKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
}

fn read_balance(e: &Env, owner: &Address) -> u32 {
    let key = CollectibleStorageKey::Balance(owner.clone());
    match e.storage().persistent().get(&key) {
        Some(balance) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, TOKEN_LIFETIME_THRESHOLD, TOKEN_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, owner: &Address, balance: u32) {
    write_persistent(e, &CollectibleStorageKey::Balance(owner.clone()), &balance);
}

#[contractimpl]
impl CollectibleTrait for Collectible {

    fn __constructor(
        e: &Env,
        admin: Address,
        name: String,
        symbol: String,
        uri: String,
        payment_token: Address,
        mint_price: i128,
    ) {
        if mint_price < 0 {
            panic_with_error!(e, CollectibleError::PaymentInvalid);
        }

        e.storage().instance().set(&CollectibleStorageKey::Admin, &admin);

        e.storage().instance().set(&CollectibleStorageKey::Name, &name);
        e.storage().instance().set(&CollectibleStorageKey::Symbol, &symbol);
        e.storage().instance().set(&CollectibleStorageKey::URI, &uri);
        e.storage().instance().set(&CollectibleStorageKey::PaymentToken, &payment_token);
        e.storage().instance().set(&CollectibleStorageKey::MintPrice, &mint_price);
        e.storage().instance().set(&CollectibleStorageKey::Supply, &0u64);
    }

    fn mint(e: &Env, to: Address, label: String) -> u64 {
        to.require_auth();

        let treasury: Address = instance_get(e, &CollectibleStorageKey::Admin);
        let payment_token: Address = instance_get(e, &CollectibleStorageKey::PaymentToken);
        let price: i128 = instance_get(e, &CollectibleStorageKey::MintPrice);
        let supply: u64 = instance_get(e, &CollectibleStorageKey::Supply);

        let token_id = supply
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(e, CollectibleError::TokenIDsAreDepleted));

        if price > 0 {
            let payment = token::TokenClient::new(e, &payment_token);
            if payment.balance(&to) < price {
                panic_with_error!(e, CollectibleError::PaymentInvalid);
            }
            payment.transfer(&to, &treasury, &price);
        }

        let balance = read_balance(e, &to)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(e, CollectibleError::MathOverflow));

        write_persistent(e, &CollectibleStorageKey::Owner(token_id), &to);
        write_persistent(e, &CollectibleStorageKey::Label(token_id), &label);
        write_balance(e, &to, balance);
        e.storage().instance().set(&CollectibleStorageKey::Supply, &token_id);

        log!(e, "collectible minted", token_id, price);
        events::Mint { to, token_id }.publish(e);

        token_id
    }

    fn transfer(e: &Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        bump_instance(e);

        let owner: Address = read_token(e, &CollectibleStorageKey::Owner(token_id));
        if owner != from {
            panic_with_error!(e, CollectibleError::IncorrectOwner);
        }

        if from != to {
            let from_balance = read_balance(e, &from)
                .checked_sub(1)
                .unwrap_or_else(|| panic_with_error!(e, CollectibleError::MathOverflow));
            let to_balance = read_balance(e, &to)
                .checked_add(1)
                .unwrap_or_else(|| panic_with_error!(e, CollectibleError::MathOverflow));

            write_balance(e, &from, from_balance);
            write_balance(e, &to, to_balance);
            write_persistent(e, &CollectibleStorageKey::Owner(token_id), &to);
        }

        events::Transfer { from, to, token_id }.publish(e);
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        read_balance(e, &owner)
    }

    fn owner_of(e: &Env, token_id: u64) -> Address {
        read_token(e, &CollectibleStorageKey::Owner(token_id))
    }

    fn name(e: &Env) -> String {
        instance_get(e, &CollectibleStorageKey::Name)
    }

    fn symbol(e: &Env) -> String {
        instance_get(e, &CollectibleStorageKey::Symbol)
    }

    fn token_uri(e: &Env, token_id: u64) -> String {
        let _: Address = read_token(e, &CollectibleStorageKey::Owner(token_id));
        instance_get(e, &CollectibleStorageKey::URI)
    }

    fn token_label(e: &Env, token_id: u64) -> String {
        read_token(e, &CollectibleStorageKey::Label(token_id))
    }

    fn total_supply(e: &Env) -> u64 {
        instance_get(e, &CollectibleStorageKey::Supply)
    }

    fn mint_price(e: &Env) -> i128 {
        instance_get(e, &CollectibleStorageKey::MintPrice)
    }

    fn payment_token(e: &Env) -> Address {
        instance_get(e, &CollectibleStorageKey::PaymentToken)
    }
}
