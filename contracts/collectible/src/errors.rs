use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectibleError {
    /// Indicates the collection metadata was never set.
    CollectionNotFound = 300,
    /// Indicates the payer cannot cover the mint price, or the price itself
    /// is invalid.
    PaymentInvalid = 301,
    /// Indicates a non-existent `token_id`.
    NonExistentToken = 302,
    /// Indicates an error related to the ownership over a particular token.
    /// Used in transfers.
    IncorrectOwner = 303,
    /// Indicates overflow when adding two values
    MathOverflow = 304,
    /// Indicates all possible `token_id`s are already in use.
    TokenIDsAreDepleted = 305,
}
