use std::collections::BTreeMap;

use reqwest::Proxy;

use crate::{
    airdrop_api::{
        api::{get_claim, get_claim_from},
        schemas::{ClaimErrorCode, ClaimResult},
        transaction::{build_transaction, TransactionDescriptor},
    },
    config::Config,
    utils::{
        constants::{ADDRESSES_FILE_PATH, TRANSACTIONS_FILE_PATH},
        files::{read_file_lines, write_json},
        misc::pretty_sleep,
    },
};

pub async fn check_claims(config: &Config) -> eyre::Result<()> {
    let addresses = read_addresses().await?;

    let results = collect_claims(&addresses, config).await?;
    let claimable = results.iter().filter(|(_, r)| r.is_success()).count();

    tracing::info!("{claimable}/{} addresses can claim", results.len());

    let network_errors = results
        .iter()
        .filter_map(|(_, r)| r.error())
        .filter(|e| e.code == ClaimErrorCode::NetworkError)
        .count();

    if network_errors > 0 {
        tracing::warn!("{network_errors} requests failed on the network, check them again later");
    }

    Ok(())
}

pub async fn build_transactions(config: &Config) -> eyre::Result<()> {
    let addresses = read_addresses().await?;

    let results = collect_claims(&addresses, config).await?;
    let transactions = claim_transactions(&results);

    if transactions.is_empty() {
        tracing::warn!("No claimable addresses, nothing to write");
        return Ok(());
    }

    write_json(TRANSACTIONS_FILE_PATH, &transactions).await?;

    tracing::info!(
        "Saved {} transactions to `{TRANSACTIONS_FILE_PATH}`",
        transactions.len()
    );

    Ok(())
}

async fn read_addresses() -> eyre::Result<Vec<String>> {
    let addresses = read_file_lines(ADDRESSES_FILE_PATH).await?;

    if addresses.is_empty() {
        eyre::bail!("No addresses found in `{ADDRESSES_FILE_PATH}`");
    }

    Ok(addresses)
}

async fn fetch_claim(address: &str, config: &Config, proxy: Option<&Proxy>) -> ClaimResult {
    match config.api_url.as_deref() {
        Some(base_url) => get_claim_from(base_url, &config.airdrop_id, address, proxy).await,
        None => get_claim(&config.airdrop_id, address, config.testnet, proxy).await,
    }
}

async fn collect_claims(
    addresses: &[String],
    config: &Config,
) -> eyre::Result<Vec<(String, ClaimResult)>> {
    if config.airdrop_id.trim().is_empty() {
        eyre::bail!("AIRDROP_ID is not set in the config");
    }

    let proxy = config.proxy()?;

    let mut results = Vec::with_capacity(addresses.len());

    for (i, address) in addresses.iter().enumerate() {
        tracing::info!("Wallet address: `{address}`");

        let result = fetch_claim(address, config, proxy.as_ref()).await;
        log_result(&result);
        results.push((address.clone(), result));

        if i + 1 < addresses.len() {
            pretty_sleep(config.request_sleep_range).await;
        }
    }

    Ok(results)
}

fn log_result(result: &ClaimResult) {
    match result {
        ClaimResult::Success { .. } => match result.info() {
            Ok(info) => tracing::info!(
                "Jetton {} | available: {} | claimed: {} | total: {}",
                info.jetton,
                info.available_jetton_amount,
                info.claimed_jetton_amount,
                info.total_jetton_amount
            ),
            Err(e) => tracing::warn!("Unexpected claim info: {e}"),
        },
        ClaimResult::Failure { error, .. } => {
            tracing::warn!("{}: {}", error.code, error.message)
        }
    }
}

fn claim_transactions(
    results: &[(String, ClaimResult)],
) -> BTreeMap<String, TransactionDescriptor> {
    results
        .iter()
        .filter(|(_, result)| result.is_success())
        .filter_map(|(address, result)| match result.claim() {
            Ok(claim) => Some((address.clone(), build_transaction(&claim))),
            Err(e) => {
                tracing::warn!("Skipping `{address}`, claim message is unusable: {e}");
                None
            }
        })
        .collect()
}
