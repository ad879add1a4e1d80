//! Read access to the materialized ledger: the unspent outputs of an address,
//! already joined with their acceptance data, and the selected tip blue score.

mod errors;
mod memory;
mod outpoint;
mod snapshot;
mod store;

pub mod prelude {
    pub use super::errors::{StoreError, StoreErrorPredicates, StoreResult, StoreResultUnitExt};
    pub use super::memory::MemoryUtxoStore;
    pub use super::outpoint::TransactionOutpoint;
    pub use super::snapshot::{UtxoSnapshot, UtxoSnapshotEntry};
    pub use super::store::UtxoStore;
}
