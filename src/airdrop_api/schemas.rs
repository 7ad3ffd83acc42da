use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferMessage {
    pub mode: u8,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_init: Option<String>,
    pub payload: String,
    pub amount: String,
}

/// Reserved by the API for vesting schedules. Carries no fields yet.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VestingParameters {}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClaimInfo {
    pub jetton: String,
    pub available_jetton_amount: String,
    pub total_jetton_amount: String,
    pub claimed_jetton_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_parameters: Option<VestingParameters>,
}

/// Claimable state plus the message that moves the available amount to the claimer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    #[serde(flatten)]
    pub info: ClaimInfo,
    #[serde(rename = "claim_message")]
    pub transfer_message: TransferMessage,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClaimErrorCode {
    NotFound,
    TooEarly,
    AlreadyClaimed,
    Locked,
    BlockchainOverload,
    UnknownError,
    NetworkError,
}

impl ClaimErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::TooEarly => "too_early",
            Self::AlreadyClaimed => "already_claimed",
            Self::Locked => "locked",
            Self::BlockchainOverload => "blockchain_overload",
            Self::UnknownError => "unknown_error",
            Self::NetworkError => "network_error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Airdrop not found or not processed yet",
            Self::TooEarly => "The nearest vesting date has not arrived yet",
            Self::AlreadyClaimed => "All Jettons have already been claimed",
            Self::Locked => "Airdrop is locked by admin",
            Self::BlockchainOverload => "Blockchain is currently overloaded",
            Self::UnknownError => "Unknown error occurred",
            Self::NetworkError => "Network error. Please try again later.",
        }
    }
}

impl std::fmt::Display for ClaimErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClaimError {
    pub code: ClaimErrorCode,
    pub message: String,
}

impl From<ClaimErrorCode> for ClaimError {
    fn from(code: ClaimErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
        }
    }
}

/// Outcome of one claim request.
///
/// On success both views hold the response body exactly as received; `info()` and
/// `claim()` give typed access to it.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimResult {
    Success {
        info: serde_json::Value,
        claim: serde_json::Value,
    },
    Failure {
        info: Option<serde_json::Value>,
        error: ClaimError,
    },
}

impl ClaimResult {
    pub fn success(body: serde_json::Value) -> Self {
        Self::Success {
            info: body.clone(),
            claim: body,
        }
    }

    pub fn failure(info: Option<serde_json::Value>, code: ClaimErrorCode) -> Self {
        Self::Failure {
            info,
            error: code.into(),
        }
    }

    pub fn network_error() -> Self {
        Self::failure(None, ClaimErrorCode::NetworkError)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn info(&self) -> eyre::Result<ClaimInfo> {
        match self {
            Self::Success { info, .. } => Ok(ClaimInfo::deserialize(info)?),
            Self::Failure { error, .. } => eyre::bail!("{}: {}", error.code, error.message),
        }
    }

    pub fn claim(&self) -> eyre::Result<Claim> {
        match self {
            Self::Success { claim, .. } => Ok(Claim::deserialize(claim)?),
            Self::Failure { error, .. } => eyre::bail!("{}: {}", error.code, error.message),
        }
    }

    pub fn error(&self) -> Option<&ClaimError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }
}

#[derive(Serialize)]
struct ClaimResultJson<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    claim: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a ClaimError>,
}

impl Serialize for ClaimResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let json = match self {
            Self::Success { info, claim } => ClaimResultJson {
                success: true,
                info: Some(info),
                claim: Some(claim),
                error: None,
            },
            Self::Failure { info, error } => ClaimResultJson {
                success: false,
                info: info.as_ref(),
                claim: None,
                error: Some(error),
            },
        };

        json.serialize(serializer)
    }
}
