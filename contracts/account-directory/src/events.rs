use soroban_sdk::{Address, String, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountCreated {
    #[topic]
    pub owner: Address,
    pub account_id: u64,
    pub display_name: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Subscribed {
    #[topic]
    pub subscriber_id: u64,
    pub target_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unsubscribed {
    #[topic]
    pub subscriber_id: u64,
    pub target_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubscriptionToggled {
    #[topic]
    pub account_id: u64,
    pub enabled: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetIssuerUpdated {
    #[topic]
    pub admin: Address,
    pub issuer: Address,
}
