use reqwest::{Method, Proxy};
use serde_json::Value;

use crate::utils::fetch::{send_http_request, RequestParams};

use super::{
    classifier::classify,
    constants::{api_url, CLAIM_PATH},
    schemas::ClaimResult,
};

pub fn claim_endpoint(base_url: &str, address: &str) -> String {
    format!("{}{}/{}", base_url.trim_end_matches('/'), CLAIM_PATH, address)
}

pub async fn get_claim(
    airdrop_id: &str,
    address: &str,
    testnet: bool,
    proxy: Option<&Proxy>,
) -> ClaimResult {
    get_claim_from(api_url(testnet), airdrop_id, address, proxy).await
}

pub async fn get_claim_from(
    base_url: &str,
    airdrop_id: &str,
    address: &str,
    proxy: Option<&Proxy>,
) -> ClaimResult {
    let url = claim_endpoint(base_url, address);

    tracing::debug!("Fetching claim: {url}?id={airdrop_id}");

    let query_args = [("id", airdrop_id)].into_iter().collect();

    let request_params = RequestParams {
        url: &url,
        method: Method::GET,
        body: None::<Value>,
        query_args: Some(query_args),
        proxy,
        headers: None,
    };

    match send_http_request::<Value>(request_params).await {
        Ok(response) => classify(response.status.as_u16(), response.body),
        Err(e) => {
            tracing::debug!("Claim request for `{address}` failed: {e}");
            ClaimResult::network_error()
        }
    }
}
