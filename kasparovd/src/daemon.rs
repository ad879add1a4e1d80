use crate::args::{Args, ArgsError};
use kasparov_core::{error, info};
use kasparov_database::prelude::{MemoryUtxoStore, StoreError};
use kasparov_rpc_core::{RpcError, RpcTransactionOutputResponse};
use kasparov_rpc_service::service::UtxoService;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaemonError {
    #[error(transparent)]
    ArgsError(#[from] ArgsError),

    #[error("Failed loading the ledger snapshot: {0}")]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    RpcError(#[from] RpcError),

    #[error("Failed starting the async runtime: {0}")]
    RuntimeError(#[from] std::io::Error),
}

impl DaemonError {
    /// What gets reported to the user. Request failures only expose their client facing message.
    pub fn user_message(&self) -> String {
        match self {
            DaemonError::RpcError(err) => err.client_message().to_string(),
            err => err.to_string(),
        }
    }
}

pub type DaemonResult<T> = std::result::Result<T, DaemonError>;

/// Loads the snapshot named by `args` and lists the unspent outputs of the requested address.
pub async fn get_utxos_by_address(args: &Args) -> DaemonResult<Vec<RpcTransactionOutputResponse>> {
    let params = args.params()?;
    let address = args.address()?;
    let snapshot = args.snapshot()?;

    info!("Serving the {} ledger snapshot {}", params.network_name(), snapshot);
    let store = MemoryUtxoStore::load_snapshot(snapshot)?;
    let service = UtxoService::new(Arc::new(store), params);
    Ok(service.get_utxos_by_address(address).await?)
}

/// Blocking entry point of the daemon.
pub fn run(args: &Args) -> DaemonResult<Vec<RpcTransactionOutputResponse>> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let result = runtime.block_on(get_utxos_by_address(args));
    if let Err(err) = &result {
        // Request failures were already logged by the service
        if !matches!(err, DaemonError::RpcError(_)) {
            error!("{}", err);
        }
    }
    result
}
