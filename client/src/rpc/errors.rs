use std::io;

use solana_client::client_error::ClientError;
use solana_program_test::BanksClientError;
use solana_sdk::{program_error::ProgramError, transaction::TransactionError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("BanksError: {0}")]
    BanksError(#[from] BanksClientError),

    #[error("TransactionError: {0}")]
    TransactionError(#[from] TransactionError),

    #[error("ClientError: {0}")]
    ClientError(#[from] ClientError),

    #[error("IoError: {0}")]
    IoError(#[from] io::Error),

    #[error("ProgramError: {0}")]
    ProgramError(#[from] ProgramError),

    #[error("Error: `{0}`")]
    CustomError(String),
}
