//! Client side of the asset issuer collaborator.

use soroban_sdk::{
    contractclient, contracterror, panic_with_error,
    xdr::{ScErrorCode, ScErrorType},
    Address, Env, Error, String,
};

use crate::errors::DirectoryError;

/// Error codes an asset issuer is expected to fail `mint` with.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum IssuerError {
    CollectionNotFound = 300,
    PaymentInvalid = 301,
}

/// Interface of the contract minting one collectible per new account.
#[contractclient(name = "AssetIssuerClient")]
pub trait AssetIssuer {
    /// Mints a collectible labelled `label` to `to` and returns its id.
    ///
    /// Fails with `IssuerError::PaymentInvalid` if `to` cannot pay, or
    /// `IssuerError::CollectionNotFound` if the collection is not set up.
    fn mint(e: Env, to: Address, label: String) -> u64;
}

/// Mints the account collectible through `issuer`.
///
/// The issuer's own codes map onto `PaymentInvalid` and
/// `CollectionNotFound`, and so does an issuer address with no contract or
/// no `mint` behind it. Other contract errors of the issuer are raised
/// unchanged. Host failures (authorization, budget) cannot be raised from a
/// contract, so the call is repeated without a trap for them to surface.
pub fn mint_collectible(e: &Env, issuer: &Address, to: &Address, label: &String) -> u64 {
    let client = AssetIssuerClient::new(e, issuer);
    let error: Error = match client.try_mint(to, label) {
        Ok(Ok(asset_id)) => return asset_id,
        Ok(Err(_)) => panic_with_error!(e, DirectoryError::CollectionNotFound),
        Err(Ok(error)) => error,
        Err(Err(_)) => return client.mint(to, label),
    };

    if error.is_type(ScErrorType::Contract) {
        match error.get_code() {
            code if code == IssuerError::PaymentInvalid as u32 => {
                panic_with_error!(e, DirectoryError::PaymentInvalid)
            }
            code if code == IssuerError::CollectionNotFound as u32 => {
                panic_with_error!(e, DirectoryError::CollectionNotFound)
            }
            _ => panic_with_error!(e, error),
        }
    }

    if error.is_code(ScErrorCode::MissingValue) {
        panic_with_error!(e, DirectoryError::CollectionNotFound);
    }

    client.mint(to, label)
}
