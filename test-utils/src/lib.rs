use gacha_client::rpc::{errors::RpcError, rpc_connection::RpcConnection};
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
    transaction::Transaction,
};

pub mod assert_token;
pub mod spl;
pub mod test_env;

/// Transfers lamports from the connection payer to `destination_pubkey`.
pub async fn airdrop_lamports<R: RpcConnection>(
    rpc: &mut R,
    destination_pubkey: &Pubkey,
    lamports: u64,
) -> Result<(), RpcError> {
    let transfer_instruction =
        system_instruction::transfer(&rpc.get_payer().pubkey(), destination_pubkey, lamports);
    let latest_blockhash = rpc.get_latest_blockhash().await?;
    let payer = rpc.get_payer().insecure_clone();
    let transaction = Transaction::new_signed_with_payer(
        &[transfer_instruction],
        Some(&payer.pubkey()),
        &[&payer],
        latest_blockhash,
    );
    rpc.process_transaction(transaction).await?;
    Ok(())
}

/// Allocate-and-fund instruction for a fresh account owned by `id`. The new
/// account keypair must co-sign the transaction.
pub fn create_account_instruction(
    payer: &Pubkey,
    size: usize,
    rent: u64,
    id: &Pubkey,
    keypair: &Keypair,
) -> Instruction {
    system_instruction::create_account(payer, &keypair.pubkey(), rent, size as u64, id)
}
