use gacha_client::rpc::rpc_connection::RpcConnection;
use solana_sdk::pubkey::Pubkey;
use spl_token_2022::{
    extension::{
        confidential_transfer::ConfidentialTransferMint, BaseStateWithExtensions,
        StateWithExtensions,
    },
    solana_zk_token_sdk::zk_token_elgamal::pod::ElGamalPubkey as PodElGamalPubkey,
    state::Mint,
};

/// Asserts the on-ledger base state of a mint: decimals, mint authority,
/// no freeze authority, owned by the expected token program.
pub async fn assert_mint<R: RpcConnection>(
    rpc: &mut R,
    mint: &Pubkey,
    authority: &Pubkey,
    decimals: u8,
    token_program_id: &Pubkey,
) {
    let account = rpc
        .get_account(*mint)
        .await
        .unwrap()
        .expect("mint account not found");
    assert_eq!(account.owner, *token_program_id);

    let state = StateWithExtensions::<Mint>::unpack(&account.data).unwrap();
    assert!(state.base.is_initialized);
    assert_eq!(state.base.decimals, decimals);
    assert_eq!(state.base.mint_authority, Some(*authority).into());
    assert!(state.base.freeze_authority.is_none());
}

/// Asserts the confidential transfer extension block of a token-2022 mint.
pub async fn assert_confidential_transfer_mint<R: RpcConnection>(
    rpc: &mut R,
    mint: &Pubkey,
    authority: &Pubkey,
    auto_approve_new_accounts: bool,
    auditor_elgamal_pubkey: Option<PodElGamalPubkey>,
) {
    let account = rpc
        .get_account(*mint)
        .await
        .unwrap()
        .expect("mint account not found");
    assert_eq!(account.owner, spl_token_2022::id());

    let state = StateWithExtensions::<Mint>::unpack(&account.data).unwrap();
    let extension = state
        .get_extension::<ConfidentialTransferMint>()
        .expect("mint is missing the ConfidentialTransferMint extension");

    assert_eq!(
        Option::<Pubkey>::from(extension.authority),
        Some(*authority)
    );
    assert_eq!(
        bool::from(extension.auto_approve_new_accounts),
        auto_approve_new_accounts
    );
    assert_eq!(
        Option::<PodElGamalPubkey>::from(extension.auditor_elgamal_pubkey),
        auditor_elgamal_pubkey
    );
}
