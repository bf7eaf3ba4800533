use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Indicates a product id that was never registered.
    ProductNotFound = 100,
    /// Indicates the caller is not the product's current owner.
    /// Used in transfers and location updates.
    NotAuthorized = 101,
    /// Indicates a transfer target that can never act as an owner
    /// (the contract's own address).
    InvalidNewOwner = 102,
    /// Indicates a latitude or longitude outside the valid scaled range.
    InvalidInput = 103,
}
