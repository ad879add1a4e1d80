pub type RpcHash = kasparov_hashes::Hash;
