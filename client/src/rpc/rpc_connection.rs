use std::fmt::Debug;

use async_trait::async_trait;
use borsh::BorshDeserialize;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

use crate::rpc::errors::RpcError;

/// Connection to the ledger used by every provisioning step. Each submission
/// blocks the caller until the ledger confirms or rejects the transaction;
/// failures propagate unchanged, nothing is retried.
#[async_trait]
pub trait RpcConnection: Send + Sync + Debug {
    fn new<U: ToString>(url: U, commitment_config: Option<CommitmentConfig>) -> Self
    where
        Self: Sized;

    /// The funded signer that pays rent and transaction fees.
    fn get_payer(&self) -> &Keypair;

    async fn get_account(&mut self, address: Pubkey) -> Result<Option<Account>, RpcError>;

    async fn get_balance(&mut self, pubkey: &Pubkey) -> Result<u64, RpcError>;

    async fn get_minimum_balance_for_rent_exemption(
        &mut self,
        data_len: usize,
    ) -> Result<u64, RpcError>;

    async fn get_latest_blockhash(&mut self) -> Result<Hash, RpcError>;

    /// Submits the transaction and waits for confirmation. All instructions
    /// execute atomically in order or the whole transaction is rejected.
    async fn process_transaction(&mut self, transaction: Transaction)
        -> Result<Signature, RpcError>;

    async fn airdrop_lamports(
        &mut self,
        to: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError>;

    async fn create_and_send_transaction<'a>(
        &'a mut self,
        instructions: &'a [Instruction],
        payer: &'a Pubkey,
        signers: &'a [&'a Keypair],
    ) -> Result<Signature, RpcError> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(payer), signers, blockhash);
        self.process_transaction(transaction).await
    }

    /// Reads back an anchor account, skipping the 8 byte discriminator.
    async fn get_anchor_account<T: BorshDeserialize>(
        &mut self,
        pubkey: &Pubkey,
    ) -> Result<Option<T>, RpcError> {
        match self.get_account(*pubkey).await? {
            Some(account) => {
                if account.data.len() < 8 {
                    return Err(RpcError::CustomError(format!(
                        "account {} too short for an anchor discriminator",
                        pubkey
                    )));
                }
                let data = T::deserialize(&mut &account.data[8..]).map_err(RpcError::from)?;
                Ok(Some(data))
            }
            None => Ok(None),
        }
    }
}
