use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DirectoryError {
    /// Indicates the owner already has an account.
    AlreadyExists = 100,
    /// Indicates an owner or account id with no account behind it.
    NotFound = 101,
    /// Indicates the caller is not the recorded owner of the account.
    NotOwner = 102,
    /// Indicates the target account does not accept new subscribers.
    SubscriptionDisabled = 103,
    /// Indicates the caller is not subscribed to the target.
    NotSubscribed = 104,
    /// Indicates an account tried to subscribe to itself.
    SelfSubscription = 105,
    /// Indicates the owner could not pay for the account collectible.
    PaymentInvalid = 106,
    /// Indicates no usable asset issuer is configured.
    CollectionNotFound = 107,
    /// Indicates all possible account ids are already in use.
    AccountIdsDepleted = 108,
}
