use soroban_sdk::{contracttype, Address, String, Vec};

/// One checkpoint in a product's journey.
///
/// Coordinates are degrees scaled by 1_000_000 (six decimal digits), signed.
/// The timestamp is the ledger close time of the recording transaction, never
/// client input.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocationEntry {
    pub latitude: i64,
    pub longitude: i64,
    pub timestamp: u64,
    pub description: String,
}

/// A registered product and its full provenance.
///
/// Everything except `owner` and `location_history` is fixed at registration.
/// `location_history` is append-only, in submission order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub category: String,
    pub manufacturer: String,
    pub manufacturing_date: u64,
    pub owner: Address,
    pub location_history: Vec<LocationEntry>,
}
