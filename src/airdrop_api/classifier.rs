use serde_json::Value;

use super::schemas::{ClaimErrorCode, ClaimResult};

const STATUS_OK: u16 = 200;

const STATUS_ERRORS: &[(u16, ClaimErrorCode)] = &[
    (404, ClaimErrorCode::NotFound),
    (425, ClaimErrorCode::TooEarly),
    (409, ClaimErrorCode::AlreadyClaimed),
    (423, ClaimErrorCode::Locked),
    (429, ClaimErrorCode::BlockchainOverload),
];

pub fn error_code_for_status(status: u16) -> ClaimErrorCode {
    STATUS_ERRORS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, code)| *code)
        .unwrap_or(ClaimErrorCode::UnknownError)
}

/// Maps an API status and JSON body to a claim result. Never fails.
///
/// The body is kept as received on both branches.
pub fn classify(status: u16, body: Value) -> ClaimResult {
    if status == STATUS_OK {
        ClaimResult::success(body)
    } else {
        ClaimResult::failure(Some(body), error_code_for_status(status))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::airdrop_api::schemas::ClaimError;

    fn claim_body() -> Value {
        json!({
            "jetton": "X",
            "available_jetton_amount": "100",
            "total_jetton_amount": "100",
            "claimed_jetton_amount": "0",
            "claim_message": {
                "mode": 3,
                "address": "A",
                "payload": "P",
                "amount": "100"
            }
        })
    }

    #[test]
    fn ok_status_yields_claim_and_info_from_same_body() {
        let result = classify(200, claim_body());

        assert_eq!(
            result,
            ClaimResult::Success {
                info: claim_body(),
                claim: claim_body(),
            }
        );

        let info = result.info().unwrap();
        let claim = result.claim().unwrap();

        assert_eq!(info, claim.info);
        assert_eq!(info.jetton, "X");
        assert_eq!(info.available_jetton_amount, "100");
        assert_eq!(info.total_jetton_amount, "100");
        assert_eq!(info.claimed_jetton_amount, "0");
        assert_eq!(claim.transfer_message.mode, 3);
        assert_eq!(claim.transfer_message.address, "A");
        assert_eq!(claim.transfer_message.payload, "P");
        assert_eq!(claim.transfer_message.amount, "100");
        assert_eq!(claim.transfer_message.state_init, None);
    }

    #[test]
    fn success_serializes_body_under_both_names() {
        let value = serde_json::to_value(classify(200, claim_body())).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["info"], claim_body());
        assert_eq!(value["claim"], claim_body());
    }

    #[test]
    fn ok_body_keeps_unknown_keys() {
        let mut body = claim_body();
        body["unlock_time"] = json!(12345);

        let value = serde_json::to_value(classify(200, body.clone())).unwrap();

        assert_eq!(value["info"], body);
        assert_eq!(value["claim"], body);
    }

    #[test]
    fn known_statuses_map_to_fixed_errors() {
        let cases = [
            (404, "not_found", "Airdrop not found or not processed yet"),
            (425, "too_early", "The nearest vesting date has not arrived yet"),
            (409, "already_claimed", "All Jettons have already been claimed"),
            (423, "locked", "Airdrop is locked by admin"),
            (429, "blockchain_overload", "Blockchain is currently overloaded"),
        ];

        for (status, code, message) in cases {
            let body = json!({ "error": format!("status {status}") });
            let result = classify(status, body.clone());

            let ClaimResult::Failure { info, error } = result else {
                panic!("expected failure for {status}");
            };

            assert_eq!(info, Some(body));
            assert_eq!(error.code.as_str(), code);
            assert_eq!(error.message, message);
        }
    }

    #[test]
    fn other_statuses_are_unknown_errors() {
        for status in [0, 201, 204, 301, 400, 401, 403, 410, 500, 502, 503] {
            let result = classify(status, json!({}));

            assert_eq!(
                result.error(),
                Some(&ClaimError {
                    code: ClaimErrorCode::UnknownError,
                    message: "Unknown error occurred".to_string(),
                }),
                "status {status}"
            );
        }
    }

    #[test]
    fn already_claimed_passes_empty_body_through() {
        let value = serde_json::to_value(classify(409, json!({}))).unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "info": {},
                "error": {
                    "code": "already_claimed",
                    "message": "All Jettons have already been claimed"
                }
            })
        );
    }

    #[test]
    fn non_object_body_is_passed_through_on_failure() {
        let result = classify(500, json!("Internal Server Error"));

        assert_eq!(
            result,
            ClaimResult::Failure {
                info: Some(json!("Internal Server Error")),
                error: ClaimErrorCode::UnknownError.into(),
            }
        );
    }

    #[test]
    fn ok_status_is_success_whatever_the_body() {
        let bodies = [
            json!({
                "jetton": "X",
                "available_jetton_amount": "100",
                "total_jetton_amount": "100",
                "claimed_jetton_amount": "0"
            }),
            json!({
                "jetton": "X",
                "available_jetton_amount": 100,
                "total_jetton_amount": "100",
                "claimed_jetton_amount": "0",
                "claim_message": { "mode": 3, "address": "A", "payload": "P", "amount": "100" }
            }),
        ];

        for body in bodies {
            let result = classify(200, body.clone());

            assert_eq!(result, ClaimResult::success(body));
            assert!(result.claim().is_err());
        }
    }
}
