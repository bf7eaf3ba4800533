use soroban_sdk::{Address, contractevent};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProductRegistered {
    #[topic]
    pub owner: Address,
    pub product_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub product_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationUpdated {
    #[topic]
    pub product_id: u64,
    pub recorded_at: u64,
}
