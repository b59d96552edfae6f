use gacha_client::rpc::{errors::RpcError, rpc_connection::RpcConnection};
use gacha_sdk::get_game_config_pubkey;
use gacha_test_utils::{
    airdrop_lamports,
    assert_token::{assert_confidential_transfer_mint, assert_mint},
    spl::{
        create_associated_token_account, create_associated_token_account_2022,
        create_confidential_transfer_mint, create_mint, create_mint_2022,
        get_associated_token_address,
    },
    test_env::setup_program_test,
};
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signer},
};

#[tokio::test]
async fn test_create_mint() {
    let _ = env_logger::try_init();
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();

    let mint = create_mint(&mut rpc, &authority.pubkey(), 6, &payer, &spl_token::id())
        .await
        .unwrap();
    assert_mint(&mut rpc, &mint, &authority.pubkey(), 6, &spl_token::id()).await;
}

#[tokio::test]
async fn test_create_mint_with_fresh_funded_payer() {
    let mut rpc = setup_program_test().await;
    let payer = Keypair::new();
    airdrop_lamports(&mut rpc, &payer.pubkey(), 10 * LAMPORTS_PER_SOL)
        .await
        .unwrap();
    let authority = Keypair::new();

    let mint = create_mint(&mut rpc, &authority.pubkey(), 0, &payer, &spl_token::id())
        .await
        .unwrap();
    assert_mint(&mut rpc, &mint, &authority.pubkey(), 0, &spl_token::id()).await;
}

#[tokio::test]
async fn test_create_mint_2022() {
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();

    let mint = create_mint_2022(&mut rpc, &authority.pubkey(), 9, &payer)
        .await
        .unwrap();
    assert_mint(&mut rpc, &mint, &authority.pubkey(), 9, &spl_token_2022::id()).await;
}

#[tokio::test]
async fn test_create_confidential_transfer_mint() {
    let _ = env_logger::try_init();
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();

    let mint =
        create_confidential_transfer_mint(&mut rpc, &authority.pubkey(), 6, &payer, true, None)
            .await
            .unwrap();

    assert_mint(&mut rpc, &mint, &authority.pubkey(), 6, &spl_token_2022::id()).await;
    assert_confidential_transfer_mint(&mut rpc, &mint, &authority.pubkey(), true, None).await;
}

#[tokio::test]
async fn test_create_associated_token_account_is_idempotent() {
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();
    let owner = Keypair::new();

    let mint = create_mint(&mut rpc, &authority.pubkey(), 6, &payer, &spl_token::id())
        .await
        .unwrap();

    let first = create_associated_token_account(
        &mut rpc,
        &mint,
        &owner.pubkey(),
        &payer,
        &spl_token::id(),
    )
    .await
    .unwrap();
    assert_eq!(
        first,
        get_associated_token_address(&mint, &owner.pubkey(), &spl_token::id())
    );
    let created = rpc.get_account(first).await.unwrap().unwrap();

    // Second call must return the same address without touching the account.
    let second = create_associated_token_account(
        &mut rpc,
        &mint,
        &owner.pubkey(),
        &payer,
        &spl_token::id(),
    )
    .await
    .unwrap();
    assert_eq!(first, second);
    let after_second = rpc.get_account(second).await.unwrap().unwrap();
    assert_eq!(created, after_second);
}

#[tokio::test]
async fn test_create_associated_token_account_2022() {
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();
    let owner = Keypair::new();

    let mint = create_mint_2022(&mut rpc, &authority.pubkey(), 6, &payer)
        .await
        .unwrap();
    let ata = create_associated_token_account_2022(&mut rpc, &mint, &owner.pubkey(), &payer)
        .await
        .unwrap();

    assert_eq!(
        ata,
        get_associated_token_address(&mint, &owner.pubkey(), &spl_token_2022::id())
    );
    let account = rpc.get_account(ata).await.unwrap().unwrap();
    assert_eq!(account.owner, spl_token_2022::id());
}

#[tokio::test]
async fn test_create_associated_token_account_rejects_off_curve_owner() {
    let mut rpc = setup_program_test().await;
    let payer = rpc.get_payer().insecure_clone();
    let authority = Keypair::new();

    let mint = create_mint(&mut rpc, &authority.pubkey(), 6, &payer, &spl_token::id())
        .await
        .unwrap();

    // The game config PDA has no private key and is off-curve by construction.
    let off_curve_owner = get_game_config_pubkey();
    assert!(!off_curve_owner.is_on_curve());

    let result = create_associated_token_account(
        &mut rpc,
        &mint,
        &off_curve_owner,
        &payer,
        &spl_token::id(),
    )
    .await;
    assert!(matches!(result, Err(RpcError::CustomError(_))));

    // Nothing was created at the would-be address.
    let ata = get_associated_token_address(&mint, &off_curve_owner, &spl_token::id());
    assert!(rpc.get_account(ata).await.unwrap().is_none());
}
