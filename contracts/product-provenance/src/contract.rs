//! Registry and ledger operations.

use soroban_sdk::{contractimpl, Address, Env, String, Vec};

use crate::errors::ContractError;
use crate::types::{LocationEntry, Product};
use crate::{events, storage, ProvenanceContract, ProductProvenance, ProductProvenanceArgs, ProductProvenanceClient};

// Degrees scaled by 1e6.
const MAX_LATITUDE: i64 = 90_000_000;
const MAX_LONGITUDE: i64 = 180_000_000;

#[contractimpl]
impl ProvenanceContract for ProductProvenance {

    fn register_product(
        e: &Env,
        caller: Address,
        name: String,
        description: String,
        category: String,
        manufacturer: String,
        manufacturing_date: u64,
    ) -> u64 {
        caller.require_auth();

        let product_id = storage::allocate_product_id(e);
        let product = Product {
            name,
            description,
            category,
            manufacturer,
            manufacturing_date,
            owner: caller.clone(),
            location_history: Vec::new(e),
        };
        storage::write_product(e, product_id, &product);
        storage::index_add(e, &caller, product_id);

        events::ProductRegistered { owner: caller, product_id }.publish(e);

        product_id
    }

    fn transfer_ownership(
        e: &Env,
        caller: Address,
        product_id: u64,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        // The contract itself can never sign, so a product sent here would be
        // stuck forever.
        if new_owner == e.current_contract_address() {
            return Err(ContractError::InvalidNewOwner);
        }

        let mut product = storage::require_owner(e, product_id, &caller)?;

        storage::index_remove(e, &product.owner, product_id);
        product.owner = new_owner.clone();
        storage::write_product(e, product_id, &product);
        storage::index_add(e, &new_owner, product_id);

        events::OwnershipTransferred { from: caller, to: new_owner, product_id }.publish(e);

        Ok(())
    }

    fn update_location(
        e: &Env,
        caller: Address,
        product_id: u64,
        latitude: i64,
        longitude: i64,
        description: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if latitude < -MAX_LATITUDE
            || latitude > MAX_LATITUDE
            || longitude < -MAX_LONGITUDE
            || longitude > MAX_LONGITUDE
        {
            return Err(ContractError::InvalidInput);
        }

        let mut product = storage::require_owner(e, product_id, &caller)?;

        let recorded_at = e.ledger().timestamp();
        product.location_history.push_back(LocationEntry {
            latitude,
            longitude,
            timestamp: recorded_at,
            description,
        });
        storage::write_product(e, product_id, &product);

        events::LocationUpdated { product_id, recorded_at }.publish(e);

        Ok(())
    }

    fn get_product(e: &Env, product_id: u64) -> Result<Product, ContractError> {
        storage::read_product(e, product_id).ok_or(ContractError::ProductNotFound)
    }

    fn get_owner_products(e: &Env, owner: Address) -> Vec<u64> {
        storage::owned_products(e, &owner)
    }

    fn product_count(e: &Env) -> u64 {
        storage::product_count(e)
    }
}
