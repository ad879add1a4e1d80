//! # UTXO status
//!
//! Turns the unspent outputs of an address, as read from the ledger, into
//! chain relative facts: the number of confirmations of each output, whether
//! it was created by a coinbase transaction and whether it can currently be
//! spent under the coinbase maturity rule of the network.
//!
//! Evaluation is a pure function of its inputs. All rows of a batch are
//! judged against a single selected tip snapshot, and a single malformed row
//! fails the whole batch.

pub mod errors;
pub mod evaluator;
pub mod model;

pub use errors::{UtxoStatusError, UtxoStatusResult};
pub use evaluator::{confirmations, evaluate, evaluate_row, is_spendable};
pub use model::{AcceptanceStatus, ChainTip, NetworkRule, UtxoJudgment, UtxoRow};
