#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String};

contractmeta!(key = "Description", val = "Account Directory Collectible");

mod contract;
pub mod errors;
mod events;

#[cfg(test)]
mod test;

#[contract]
pub struct Collectible;

pub trait CollectibleTrait {

    /// Creates the collection.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `admin` - Account receiving mint payments.
    /// * `name` - Collection name.
    /// * `symbol` - Collection symbol.
    /// * `uri` - Base URI shared by every token of the collection.
    /// * `payment_token` - Stellar asset contract the mint price is paid in.
    /// * `mint_price` - Fixed price charged per mint, in the asset's base unit.
    ///
    /// # Notes
    ///
    /// Panics with `PaymentInvalid` if `mint_price` is negative.
    fn __constructor(
        e: &Env,
        admin: Address,
        name: String,
        symbol: String,
        uri: String,
        payment_token: Address,
        mint_price: i128,
    );

    /// Mint a collectible to `to`, charging the collection's mint price.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `to` - Account of the token's owner, also the payer.
    /// * `label` - Label recorded against the token.
    ///
    /// # Returns
    ///
    /// The newly assigned token id. Ids start at 1 and are sequential.
    ///
    /// # Events
    ///
    /// * topics - `["mint", to: Address]`
    /// * data - `[token_id: u64]`
    fn mint(e: &Env, to: Address, label: String) -> u64;

    /// Transfers `token_id` token from `from` to `to`.
    ///
    /// WARNING: Note that the caller is responsible to confirm that the
    /// recipient is capable of receiving the token or else it may be
    /// permanently lost.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `from` - Account of the sender.
    /// * `to` - Account of the recipient.
    /// * `token_id` - Token id as a number.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u64]`
    fn transfer(e: &Env, from: Address, to: Address, token_id: u64);

    /// Returns the number of tokens in `owner`'s account.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `owner` - Account of the token's owner.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the address of the owner of the given `token_id`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_id` - Token id as a number.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn owner_of(e: &Env, token_id: u64) -> Address;

    /// Returns the token collection name.
    fn name(e: &Env) -> String;

    /// Returns the token collection symbol.
    fn symbol(e: &Env) -> String;

    /// Returns the Uniform Resource Identifier (URI) for `token_id` token.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_uri(e: &Env, token_id: u64) -> String;

    /// Returns the label the token was minted with.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_label(e: &Env, token_id: u64) -> String;

    /// Returns the number of tokens minted so far.
    fn total_supply(e: &Env) -> u64;

    /// Returns the price charged per mint.
    fn mint_price(e: &Env) -> i128;

    /// Returns the asset contract mints are paid in.
    fn payment_token(e: &Env) -> Address;
}
