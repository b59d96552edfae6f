use std::fmt::{Debug, Display, Formatter};

use async_trait::async_trait;
use log::debug;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::rpc::{errors::RpcError, rpc_connection::RpcConnection};

pub enum SolanaRpcUrl {
    Testnet,
    Devnet,
    Localnet,
    Custom(String),
}

impl Display for SolanaRpcUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            SolanaRpcUrl::Testnet => "https://api.testnet.solana.com".to_string(),
            SolanaRpcUrl::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaRpcUrl::Localnet => "http://localhost:8899".to_string(),
            SolanaRpcUrl::Custom(url) => url.clone(),
        };
        write!(f, "{}", str)
    }
}

/// Live ledger connection backed by a blocking `RpcClient`. The payer is
/// generated on construction and must be funded (`airdrop_lamports`) before
/// it can pay for rent or fees.
pub struct SolanaRpcConnection {
    pub client: RpcClient,
    pub payer: Keypair,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SolanaRpcConnection {{ url: {:?} }}", self.client.url())
    }
}

impl SolanaRpcConnection {
    pub fn new_with_payer<U: ToString>(
        url: U,
        payer: Keypair,
        commitment_config: Option<CommitmentConfig>,
    ) -> Self {
        let commitment_config = commitment_config.unwrap_or_else(CommitmentConfig::confirmed);
        let client = RpcClient::new_with_commitment(url.to_string(), commitment_config);
        Self { client, payer }
    }
}

#[async_trait]
impl RpcConnection for SolanaRpcConnection {
    fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self
    where
        Self: Sized,
    {
        Self::new_with_payer(url, Keypair::new(), commitment_config)
    }

    fn get_payer(&self) -> &Keypair {
        &self.payer
    }

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        let account = self
            .client
            .get_account_with_commitment(&address, self.client.commitment())?;
        Ok(account.value)
    }

    async fn get_balance(&mut self, pubkey: &Pubkey) -> Result<u64, RpcError> {
        self.client.get_balance(pubkey).map_err(RpcError::from)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &mut self,
        data_len: usize,
    ) -> Result<u64, RpcError> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .map_err(RpcError::from)
    }

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError> {
        self.client.get_latest_blockhash().map_err(RpcError::from)
    }

    async fn process_transaction(
        &mut self,
        transaction: Transaction,
    ) -> Result<Signature, RpcError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: true,
            ..RpcSendTransactionConfig::default()
        };
        let signature = self
            .client
            .send_transaction_with_config(&transaction, config)?;
        let mut confirmed = false;
        while !confirmed {
            confirmed = self.client.confirm_transaction(&signature)?;
        }
        debug!("confirmed transaction {}", signature);
        Ok(signature)
    }

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        let signature = self.client.request_airdrop(to, lamports)?;
        let mut confirmed = false;
        while !confirmed {
            confirmed = self.client.confirm_transaction(&signature)?;
        }
        Ok(signature)
    }
}
