pub const MAINNET_API_URL: &str = "https://mainnet-airdrop.tonapi.io";

pub const TESTNET_API_URL: &str = "https://testnet-airdrop.tonapi.io";

pub const CLAIM_PATH: &str = "/v2/airdrop/claim";

// seconds a built transaction stays valid
pub const TX_VALIDITY_SECS: u64 = 300;

pub fn api_url(testnet: bool) -> &'static str {
    if testnet {
        TESTNET_API_URL
    } else {
        MAINNET_API_URL
    }
}
