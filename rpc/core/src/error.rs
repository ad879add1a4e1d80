use kasparov_addresses::AddressError;
use kasparov_database::prelude::StoreError;
use kasparov_utxostatus::UtxoStatusError;
use thiserror::Error;

pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

pub const INVALID_ADDRESS_MESSAGE: &str = "The given address is not a valid address";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error occurred";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Invalid address {0:?}: {1}")]
    InvalidAddress(String, #[source] AddressError),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    UtxoStatusError(#[from] UtxoStatusError),
}

impl RpcError {
    /// Errors caused by the request itself rather than by the server state
    pub fn is_client_error(&self) -> bool {
        matches!(self, RpcError::InvalidAddress(..))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            RpcError::InvalidAddress(..) => STATUS_UNPROCESSABLE_ENTITY,
            RpcError::StoreError(_) | RpcError::UtxoStatusError(_) => STATUS_INTERNAL_SERVER_ERROR,
        }
    }

    /// The message a client is allowed to see. Internal failures never leak their details.
    pub fn client_message(&self) -> &'static str {
        match self {
            RpcError::InvalidAddress(..) => INVALID_ADDRESS_MESSAGE,
            RpcError::StoreError(_) | RpcError::UtxoStatusError(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

pub type RpcResult<T> = std::result::Result<T, crate::RpcError>;
