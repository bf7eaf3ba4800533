//! Storage keys and access paths for the registry and ownership index.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::Product;

// Ledgers close roughly every 5 seconds.
const DAY_IN_LEDGERS: u32 = 17280;
const EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const TTL_THRESHOLD: u32 = EXTEND_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
pub enum DataKey {
    /// Total products ever registered; also the id allocator. Ids are dense,
    /// starting at 1, never reused.
    ProductCount,
    Product(u64),
    OwnerProducts(Address),
}

pub fn allocate_product_id(e: &Env) -> u64 {
    let count: u64 = e
        .storage()
        .instance()
        .get(&DataKey::ProductCount)
        .unwrap_or(0);
    let product_id = count + 1;
    e.storage().instance().set(&DataKey::ProductCount, &product_id);
    e.storage().instance().extend_ttl(TTL_THRESHOLD, EXTEND_AMOUNT);
    product_id
}

pub fn product_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::ProductCount)
        .unwrap_or(0)
}

pub fn read_product(e: &Env, product_id: u64) -> Option<Product> {
    e.storage().persistent().get(&DataKey::Product(product_id))
}

pub fn write_product(e: &Env, product_id: u64, product: &Product) {
    let key = DataKey::Product(product_id);
    e.storage().persistent().set(&key, product);
    e.storage().persistent().extend_ttl(&key, TTL_THRESHOLD, EXTEND_AMOUNT);
}

/// Shared owner gate for every mutating operation on an existing product.
/// Unknown id beats a wrong caller: `ProductNotFound` is checked first.
pub fn require_owner(e: &Env, product_id: u64, caller: &Address) -> Result<Product, ContractError> {
    let product = read_product(e, product_id).ok_or(ContractError::ProductNotFound)?;
    if product.owner != *caller {
        return Err(ContractError::NotAuthorized);
    }
    Ok(product)
}

pub fn owned_products(e: &Env, owner: &Address) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::OwnerProducts(owner.clone()))
        .unwrap_or_else(|| Vec::new(e))
}

// All ownership-index mutation funnels through here; registration and
// transfer must never touch the index entry directly.
fn write_index(e: &Env, owner: &Address, ids: &Vec<u64>) {
    let key = DataKey::OwnerProducts(owner.clone());
    e.storage().persistent().set(&key, ids);
    e.storage().persistent().extend_ttl(&key, TTL_THRESHOLD, EXTEND_AMOUNT);
}

pub fn index_add(e: &Env, owner: &Address, product_id: u64) {
    let mut ids = owned_products(e, owner);
    ids.push_back(product_id);
    write_index(e, owner, &ids);
}

pub fn index_remove(e: &Env, owner: &Address, product_id: u64) {
    let mut ids = owned_products(e, owner);
    if let Some(position) = ids.first_index_of(product_id) {
        ids.remove(position);
    }
    write_index(e, owner, &ids);
}
