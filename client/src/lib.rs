pub mod rpc;

pub use rpc::{
    errors::RpcError, rpc_connection::RpcConnection, solana_rpc::SolanaRpcConnection,
    test_rpc::ProgramTestRpcConnection,
};
