#![no_std]

use soroban_sdk::{contract, contractmeta, Env, Address, String, Vec};

contractmeta!(key = "Description", val = "Product registry and provenance ledger");

mod contract;

mod errors;
mod events;
mod storage;
mod types;

pub use errors::ContractError;
pub use types::{LocationEntry, Product};

#[contract]
pub struct ProductProvenance;

pub trait ProvenanceContract {

    /// Register a new product, with the caller as its first owner.
    ///
    /// Identifiers are assigned sequentially starting at 1 and are never
    /// reused. Every field besides the owner is immutable from this point on.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - Account registering the product; becomes the owner and
    ///   must authorize the call.
    /// * `name` - Product name.
    /// * `description` - Free-text description.
    /// * `category` - Free-text category.
    /// * `manufacturer` - Free-text manufacturer name.
    /// * `manufacturing_date` - Whole-second Unix timestamp of manufacture.
    ///
    /// # Returns
    ///
    /// The id assigned to the new product.
    ///
    /// # Events
    ///
    /// * topics - `["product_registered", owner: Address]`
    /// * data - `[product_id: u64]`
    fn register_product(
        e: &Env,
        caller: Address,
        name: String,
        description: String,
        category: String,
        manufacturer: String,
        manufacturing_date: u64,
    ) -> u64;

    /// Transfer a product to a new owner.
    ///
    /// Only the current owner may transfer. The id moves between the two
    /// accounts' owned-product sets in the same transaction that rewrites the
    /// owner field, so the index never disagrees with the record.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `caller` - The current owner; must authorize the call.
    /// * `product_id` - Id of the product to transfer.
    /// * `new_owner` - Account receiving the product.
    ///
    /// # Errors
    ///
    /// * `ProductNotFound` - `product_id` was never registered.
    /// * `NotAuthorized` - `caller` is not the current owner.
    /// * `InvalidNewOwner` - `new_owner` is the contract's own address.
    ///
    /// # Events
    ///
    /// * topics - `["ownership_transferred", from: Address, to: Address]`
    /// * data - `[product_id: u64]`
    fn transfer_ownership(
        e: &Env,
        caller: Address,
        product_id: u64,
        new_owner: Address,
    ) -> Result<(), ContractError>;

    /// Append a location checkpoint to a product's history.
    ///
    /// Owner-only. Coordinates are degrees scaled by 1_000_000; the entry's
    /// timestamp is the ledger close time, not client input. History is
    /// append-only and keeps submission order.
    ///
    /// # Errors
    ///
    /// * `ProductNotFound` - `product_id` was never registered.
    /// * `NotAuthorized` - `caller` is not the current owner.
    /// * `InvalidInput` - coordinates outside ±90°/±180° scaled.
    fn update_location(
        e: &Env,
        caller: Address,
        product_id: u64,
        latitude: i64,
        longitude: i64,
        description: String,
    ) -> Result<(), ContractError>;

    /// Return a product with its full location history.
    ///
    /// Public read; provenance is verifiable by any party while writes stay
    /// owner-gated. Cost grows with history length.
    ///
    /// # Errors
    ///
    /// * `ProductNotFound` - `product_id` was never registered.
    fn get_product(e: &Env, product_id: u64) -> Result<Product, ContractError>;

    /// Return the ids currently owned by `owner`; empty if none.
    fn get_owner_products(e: &Env, owner: Address) -> Vec<u64>;

    /// Total products ever registered. Ids are dense, so valid ids are
    /// exactly `1..=product_count`.
    fn product_count(e: &Env) -> u64;
}
