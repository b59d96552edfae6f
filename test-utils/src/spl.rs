use gacha_client::rpc::{errors::RpcError, rpc_connection::RpcConnection};
use log::info;
use solana_sdk::{
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address_with_program_id;
use spl_token_2022::{
    extension::{
        confidential_transfer::instruction::initialize_mint as initialize_confidential_transfer_mint,
        ExtensionType,
    },
    instruction::initialize_mint2,
    solana_zk_token_sdk::zk_token_elgamal::pod::ElGamalPubkey as PodElGamalPubkey,
    state::Mint,
};

use crate::create_account_instruction;

/// Creates and initializes a fungible token mint under `token_program_id`.
///
/// One transaction, two instructions: allocate-and-fund the account at the
/// rent-exempt minimum for `Mint::LEN`, then initialize it with the given
/// decimals and authority and no freeze authority. Signed by the payer and
/// the fresh mint keypair.
pub async fn create_mint<R: RpcConnection>(
    rpc: &mut R,
    authority: &Pubkey,
    decimals: u8,
    payer: &Keypair,
    token_program_id: &Pubkey,
) -> Result<Pubkey, RpcError> {
    let mint_keypair = Keypair::new();
    let mint_pubkey = mint_keypair.pubkey();

    let mint_rent = rpc
        .get_minimum_balance_for_rent_exemption(Mint::LEN)
        .await?;
    let account_create_ix = create_account_instruction(
        &payer.pubkey(),
        Mint::LEN,
        mint_rent,
        token_program_id,
        &mint_keypair,
    );
    // The token-2022 builders accept both token program ids.
    let initialize_mint_ix = initialize_mint2(
        token_program_id,
        &mint_pubkey,
        authority,
        None,
        decimals,
    )?;

    rpc.create_and_send_transaction(
        &[account_create_ix, initialize_mint_ix],
        &payer.pubkey(),
        &[payer, &mint_keypair],
    )
    .await?;

    info!("created mint {} under {}", mint_pubkey, token_program_id);
    Ok(mint_pubkey)
}

/// `create_mint` specialized to the token-2022 program.
pub async fn create_mint_2022<R: RpcConnection>(
    rpc: &mut R,
    authority: &Pubkey,
    decimals: u8,
    payer: &Keypair,
) -> Result<Pubkey, RpcError> {
    create_mint(rpc, authority, decimals, payer, &spl_token_2022::id()).await
}

/// Creates a token-2022 mint with the confidential transfer extension.
///
/// The account is sized and funded for the base mint layout plus the
/// extension block. All three instructions run in one atomic transaction;
/// the extension must be initialized before the base mint, which finalizes
/// the account layout.
pub async fn create_confidential_transfer_mint<R: RpcConnection>(
    rpc: &mut R,
    authority: &Pubkey,
    decimals: u8,
    payer: &Keypair,
    auto_approve_new_accounts: bool,
    auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
) -> Result<Pubkey, RpcError> {
    let mint_keypair = Keypair::new();
    let mint_pubkey = mint_keypair.pubkey();

    let space = ExtensionType::try_calculate_account_len::<Mint>(&[
        ExtensionType::ConfidentialTransferMint,
    ])?;
    let mint_rent = rpc.get_minimum_balance_for_rent_exemption(space).await?;

    let account_create_ix = create_account_instruction(
        &payer.pubkey(),
        space,
        mint_rent,
        &spl_token_2022::id(),
        &mint_keypair,
    );
    let initialize_extension_ix = initialize_confidential_transfer_mint(
        &spl_token_2022::id(),
        &mint_pubkey,
        Some(*authority),
        auto_approve_new_accounts,
        auditor_elgamal_pubkey,
    )?;
    let initialize_mint_ix = initialize_mint2(
        &spl_token_2022::id(),
        &mint_pubkey,
        authority,
        None,
        decimals,
    )?;

    rpc.create_and_send_transaction(
        &[account_create_ix, initialize_extension_ix, initialize_mint_ix],
        &payer.pubkey(),
        &[payer, &mint_keypair],
    )
    .await?;

    info!(
        "created confidential transfer mint {} ({} bytes, {} lamports)",
        mint_pubkey, space, mint_rent
    );
    Ok(mint_pubkey)
}

/// Canonical token account address for a (mint, owner) pair. Pure
/// derivation; the address space differs per token program.
pub fn get_associated_token_address(
    mint: &Pubkey,
    owner: &Pubkey,
    token_program_id: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program_id)
}

/// Derives and, if absent, creates the associated token account of `owner`
/// for `mint`. Idempotent: an existing account is returned unchanged and no
/// transaction is issued.
///
/// Owners must be on-curve; associated accounts for program-derived owners
/// are refused before the ledger is touched.
pub async fn create_associated_token_account<R: RpcConnection>(
    rpc: &mut R,
    mint: &Pubkey,
    owner: &Pubkey,
    payer: &Keypair,
    token_program_id: &Pubkey,
) -> Result<Pubkey, RpcError> {
    if !owner.is_on_curve() {
        return Err(RpcError::CustomError(format!(
            "refusing to create an associated token account for off-curve owner {}",
            owner
        )));
    }

    let ata_pubkey = get_associated_token_address(mint, owner, token_program_id);
    if rpc.get_account(ata_pubkey).await?.is_some() {
        info!("associated token account {} already exists", ata_pubkey);
        return Ok(ata_pubkey);
    }

    let create_ata_ix = spl_associated_token_account::instruction::create_associated_token_account(
        &payer.pubkey(),
        owner,
        mint,
        token_program_id,
    );
    rpc.create_and_send_transaction(&[create_ata_ix], &payer.pubkey(), &[payer])
        .await?;

    info!("created associated token account {}", ata_pubkey);
    Ok(ata_pubkey)
}

/// `create_associated_token_account` specialized to the token-2022 program.
/// Derivation uses the same program id, so the resulting address lives in
/// the token-2022 address space.
pub async fn create_associated_token_account_2022<R: RpcConnection>(
    rpc: &mut R,
    mint: &Pubkey,
    owner: &Pubkey,
    payer: &Keypair,
) -> Result<Pubkey, RpcError> {
    create_associated_token_account(rpc, mint, owner, payer, &spl_token_2022::id()).await
}
