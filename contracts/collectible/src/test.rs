extern crate std;

use soroban_sdk::{
    testutils::{storage::Persistent as _, Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Error, String,
};
use crate::{contract::CollectibleStorageKey, errors::CollectibleError, Collectible, CollectibleClient};

const PRICE: i128 = 100;

struct Setup<'a> {
    admin: Address,
    payment: TokenClient<'a>,
    payment_admin: StellarAssetClient<'a>,
    client: CollectibleClient<'a>,
}

fn setup<'a>(e: &Env, price: i128) -> Setup<'a> {
    let admin = Address::generate(e);
    let issuer = Address::generate(e);
    let sac = e.register_stellar_asset_contract_v2(issuer);

    let address = e.register(
        Collectible,
        (
            &admin,
            &String::from_str(e, "TestCollectible"),
            &String::from_str(e, "TCOL"),
            &String::from_str(e, "https://example.com/collectible/"),
            &sac.address(),
            &price,
        ),
    );

    Setup {
        admin,
        payment: TokenClient::new(e, &sac.address()),
        payment_admin: StellarAssetClient::new(e, &sac.address()),
        client: CollectibleClient::new(e, &address),
    }
}

#[test]
fn test_metadata() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, PRICE);

    assert_eq!(s.client.name(), String::from_str(&e, "TestCollectible"));
    assert_eq!(s.client.symbol(), String::from_str(&e, "TCOL"));
    assert_eq!(s.client.mint_price(), PRICE);
    assert_eq!(s.client.payment_token(), s.payment.address);
    assert_eq!(s.client.total_supply(), 0);
}

#[test]
fn test_mint_charges_price_and_assigns_sequential_ids() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, PRICE);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);
    s.payment_admin.mint(&alice, &250);
    s.payment_admin.mint(&bob, &100);

    let first = s.client.mint(&alice, &String::from_str(&e, "alice"));
    let second = s.client.mint(&bob, &String::from_str(&e, "bob"));

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(s.client.total_supply(), 2);

    assert_eq!(s.client.owner_of(&first), alice);
    assert_eq!(s.client.owner_of(&second), bob);
    assert_eq!(s.client.token_label(&first), String::from_str(&e, "alice"));
    assert_eq!(
        s.client.token_uri(&second),
        String::from_str(&e, "https://example.com/collectible/")
    );

    assert_eq!(s.client.balance(&alice), 1);
    assert_eq!(s.client.balance(&bob), 1);

    assert_eq!(s.payment.balance(&alice), 150);
    assert_eq!(s.payment.balance(&bob), 0);
    assert_eq!(s.payment.balance(&s.admin), 2 * PRICE);
}

#[test]
fn test_mint_without_funds_fails() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, PRICE);
    let alice = Address::generate(&e);
    s.payment_admin.mint(&alice, &(PRICE - 1));

    let result = s.client.try_mint(&alice, &String::from_str(&e, "alice"));
    assert_eq!(result, Err(Ok(Error::from(CollectibleError::PaymentInvalid))));

    assert_eq!(s.client.total_supply(), 0);
    assert_eq!(s.client.balance(&alice), 0);
    assert_eq!(s.payment.balance(&alice), PRICE - 1);
}

#[test]
fn test_free_mint_needs_no_funds() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, 0);
    let alice = Address::generate(&e);

    let token_id = s.client.mint(&alice, &String::from_str(&e, "alice"));

    assert_eq!(token_id, 1);
    assert_eq!(s.client.owner_of(&token_id), alice);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_negative_price_is_rejected() {
    let e = Env::default();
    setup(&e, -1);
}

#[test]
fn test_transfer() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, 0);
    let alice = Address::generate(&e);
    let bob = Address::generate(&e);

    let token_id = s.client.mint(&alice, &String::from_str(&e, "alice"));
    s.client.transfer(&alice, &bob, &token_id);

    assert_eq!(s.client.owner_of(&token_id), bob);
    assert_eq!(s.client.balance(&alice), 0);
    assert_eq!(s.client.balance(&bob), 1);
}

#[test]
fn test_transfer_by_non_owner_fails() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, 0);
    let alice = Address::generate(&e);
    let mallory = Address::generate(&e);

    let token_id = s.client.mint(&alice, &String::from_str(&e, "alice"));

    let result = s.client.try_transfer(&mallory, &mallory, &token_id);
    assert_eq!(result, Err(Ok(Error::from(CollectibleError::IncorrectOwner))));
    assert_eq!(s.client.owner_of(&token_id), alice);
}

#[test]
fn test_unknown_token() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, 0);

    assert_eq!(s.client.try_owner_of(&7), Err(Ok(Error::from(CollectibleError::NonExistentToken))));
    assert_eq!(s.client.try_token_uri(&7), Err(Ok(Error::from(CollectibleError::NonExistentToken))));
    assert_eq!(s.client.try_token_label(&7), Err(Ok(Error::from(CollectibleError::NonExistentToken))));
}

#[test]
fn test_balance_read_extends_ttl() {
    let e = Env::default();
    e.mock_all_auths();

    let s = setup(&e, 0);
    let alice = Address::generate(&e);
    s.client.mint(&alice, &String::from_str(&e, "alice"));

    e.ledger().with_mut(|li| li.sequence_number += 2 * 17280);
    assert_eq!(s.client.balance(&alice), 1);

    let ttl = e.as_contract(&s.client.address, || {
        e.storage()
            .persistent()
            .get_ttl(&CollectibleStorageKey::Balance(alice.clone()))
    });
    assert_eq!(ttl, 30 * 17280);
}
