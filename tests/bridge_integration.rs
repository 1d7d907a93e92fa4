//! Bridge Round-Trip Integration Test
//!
//! Drives a native-coin deposit and exit against running main-chain and
//! schain nodes with deployed IMA contracts.
//!
//! ## Setup
//!
//! Requires a live test deployment. Set these environment variables:
//!
//! - `MAINNET_RPC_URL` - main-chain RPC (e.g., http://localhost:8545)
//! - `MAINNET_ABI` - path to the main-chain deployment registry JSON
//! - `SCHAIN_RPC_URL` - schain RPC (e.g., http://localhost:8546)
//! - `SCHAIN_ABI` - path to the schain deployment registry JSON
//! - `SCHAIN_NAME` - registered schain name
//! - `TEST_PRIVATE_KEY` - funded test account key
//!
//! ## Running
//!
//! ```bash
//! MAINNET_RPC_URL=http://localhost:8545 \
//! MAINNET_ABI=./mainnet.json \
//! SCHAIN_RPC_URL=http://localhost:8546 \
//! SCHAIN_ABI=./schain.json \
//! SCHAIN_NAME=test-schain \
//! TEST_PRIVATE_KEY=0x... \
//! cargo test --test bridge_integration -- --ignored --nocapture
//! ```

use std::time::Duration;

use alloy::primitives::U256;
use ima_client::{
    keys, DeploymentRegistry, MainnetChain, PollSpec, SchainChain, SubmissionOptions,
};

/// Everything the round-trip needs, loaded from the environment.
struct TestContext {
    mainnet: MainnetChain,
    schain: SchainChain,
    options: SubmissionOptions,
    account: alloy::primitives::Address,
}

impl TestContext {
    fn setup() -> Result<Self, String> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| {
                format!(
                    "{name} not set. Required: MAINNET_RPC_URL, MAINNET_ABI, \
                     SCHAIN_RPC_URL, SCHAIN_ABI, SCHAIN_NAME, TEST_PRIVATE_KEY"
                )
            })
        };

        let mainnet_registry = DeploymentRegistry::load(var("MAINNET_ABI")?)
            .map_err(|e| format!("mainnet registry: {e}"))?;
        let schain_registry = DeploymentRegistry::load(var("SCHAIN_ABI")?)
            .map_err(|e| format!("schain registry: {e}"))?;

        let mainnet = MainnetChain::new(&var("MAINNET_RPC_URL")?, &mainnet_registry)
            .map_err(|e| format!("mainnet connect: {e}"))?;
        let schain = SchainChain::new(&var("SCHAIN_RPC_URL")?, &var("SCHAIN_NAME")?, &schain_registry)
            .map_err(|e| format!("schain connect: {e}"))?;

        let key = var("TEST_PRIVATE_KEY")?;
        let account = keys::derive_address(&key).map_err(|e| format!("bad key: {e}"))?;
        let options = SubmissionOptions::with_key(format!("{account:#x}"), key);

        tracing::info!(
            schain = %schain.name(),
            account = %account,
            "Test context ready"
        );

        Ok(Self {
            mainnet,
            schain,
            options,
            account,
        })
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}

#[tokio::test]
#[ignore = "requires live deployment: MAINNET_RPC_URL, MAINNET_ABI, SCHAIN_RPC_URL, SCHAIN_ABI, SCHAIN_NAME, TEST_PRIVATE_KEY"]
async fn test_eth_deposit_arrives_on_schain() {
    init_tracing();

    let ctx = match TestContext::setup() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Skipping: {e}");
            return;
        }
    };

    let amount = U256::from(10u64).pow(U256::from(15)); // 0.001 coin
    let before = ctx
        .schain
        .eth
        .eth_erc20_balance(ctx.account)
        .await
        .expect("schain balance query should succeed");

    let receipt = ctx
        .mainnet
        .eth
        .deposit(ctx.schain.name(), &ctx.options.clone().value(amount))
        .await
        .expect("deposit should succeed");
    assert!(receipt.status(), "deposit receipt should be successful");

    let spec = PollSpec {
        interval: Duration::from_secs(2),
        max_attempts: 60,
    };
    let changed = ctx
        .schain
        .eth
        .wait_eth_erc20_balance_change(ctx.account, before, &spec)
        .await
        .expect("balance polling should not error");
    assert!(changed, "wrapped-coin balance never changed on the schain");

    let after = ctx
        .schain
        .eth
        .eth_erc20_balance(ctx.account)
        .await
        .expect("schain balance query should succeed");
    assert!(after > before, "expected balance to grow, {before} -> {after}");
}

#[tokio::test]
#[ignore = "requires live deployment: MAINNET_RPC_URL, MAINNET_ABI, SCHAIN_RPC_URL, SCHAIN_ABI, SCHAIN_NAME, TEST_PRIVATE_KEY"]
async fn test_community_pool_recharge_and_withdraw() {
    init_tracing();

    let ctx = match TestContext::setup() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("Skipping: {e}");
            return;
        }
    };

    let amount = U256::from(10u64).pow(U256::from(15));
    let before = ctx
        .mainnet
        .community_pool
        .balance(ctx.account, ctx.schain.name())
        .await
        .expect("pool balance query should succeed");

    let receipt = ctx
        .mainnet
        .community_pool
        .recharge_user_wallet(
            ctx.schain.name(),
            ctx.account,
            &ctx.options.clone().value(amount),
        )
        .await
        .expect("recharge should succeed");
    assert!(receipt.status());

    let after = ctx
        .mainnet
        .community_pool
        .balance(ctx.account, ctx.schain.name())
        .await
        .expect("pool balance query should succeed");
    assert_eq!(after, before + amount);

    let receipt = ctx
        .mainnet
        .community_pool
        .withdraw_funds(ctx.schain.name(), amount, &ctx.options)
        .await
        .expect("withdraw should succeed");
    assert!(receipt.status());
}
