use kasparov_hashes::Hash;
use smallvec::SmallVec;

/// Represents the ID of a Kaspa transaction
pub type TransactionId = Hash;

/// Used as the underlying type for script public key data, optimized for the common p2pk script size (34).
pub type ScriptVec = SmallVec<[u8; 36]>;

/// Index of an output within its transaction
pub type TransactionIndexType = u32;
