use crate::{
    network::NetworkType,
    subnets::{SUBNETWORK_ID_COINBASE, SubnetworkId},
};
use kasparov_addresses::Prefix;

/// Consensus parameters of a network which are relevant to inspecting its ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub net: NetworkType,

    /// Prefix of the addresses belonging to this network
    pub prefix: Prefix,

    /// Minimum number of confirmations (in blue score units) a coinbase
    /// output must accumulate before it can be spent
    pub coinbase_maturity: u64,

    /// The subnetwork marking a transaction as the coinbase transaction of its block
    pub coinbase_subnetwork_id: SubnetworkId,
}

impl Params {
    pub fn network_name(&self) -> String {
        format!("kaspa-{}", self.net)
    }

    pub fn coinbase_maturity(&self) -> u64 {
        self.coinbase_maturity
    }
}

impl From<NetworkType> for Params {
    fn from(value: NetworkType) -> Self {
        match value {
            NetworkType::Mainnet => MAINNET_PARAMS,
            NetworkType::Testnet => TESTNET_PARAMS,
            NetworkType::Devnet => DEVNET_PARAMS,
            NetworkType::Simnet => SIMNET_PARAMS,
        }
    }
}

pub const MAINNET_PARAMS: Params = Params {
    net: NetworkType::Mainnet,
    prefix: Prefix::Mainnet,
    coinbase_maturity: 100,
    coinbase_subnetwork_id: SUBNETWORK_ID_COINBASE,
};

pub const TESTNET_PARAMS: Params = Params {
    net: NetworkType::Testnet,
    prefix: Prefix::Testnet,
    coinbase_maturity: 100,
    coinbase_subnetwork_id: SUBNETWORK_ID_COINBASE,
};

pub const SIMNET_PARAMS: Params = Params {
    net: NetworkType::Simnet,
    prefix: Prefix::Simnet,
    coinbase_maturity: 100,
    coinbase_subnetwork_id: SUBNETWORK_ID_COINBASE,
};

pub const DEVNET_PARAMS: Params = Params {
    net: NetworkType::Devnet,
    prefix: Prefix::Devnet,
    coinbase_maturity: 100,
    coinbase_subnetwork_id: SUBNETWORK_ID_COINBASE,
};
