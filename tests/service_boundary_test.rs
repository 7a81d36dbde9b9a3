use httpmock::prelude::*;
use std::time::Duration;
use steam_overlap::{handle_compare, CompareEngine, CompareRequest, SteamClient};

const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v0001/";

fn engine_for(server: &MockServer) -> CompareEngine<SteamClient> {
    let client = SteamClient::new(server.base_url(), "test-key", Duration::from_secs(5)).unwrap();
    CompareEngine::with_defaults(client)
}

fn library_mock(server: &MockServer, steam_id: &str, appids: &[u32]) {
    let games: Vec<serde_json::Value> = appids
        .iter()
        .map(|appid| serde_json::json!({ "appid": appid, "name": format!("Game {}", appid) }))
        .collect();
    server.mock(|when, then| {
        when.method(GET)
            .path(OWNED_GAMES_PATH)
            .query_param("steamid", steam_id);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "response": { "games": games } }));
    });
}

#[tokio::test]
async fn test_compare_request_round_trip() {
    let server = MockServer::start();
    library_mock(&server, "111", &[10, 20]);
    library_mock(&server, "222", &[20, 30]);

    let request: CompareRequest = serde_json::from_value(serde_json::json!({
        "accountIdentifiers": ["111", "222"],
        "displayNames": ["Alice", "Bob"]
    }))
    .unwrap();

    let response = handle_compare(&engine_for(&server), request).await.unwrap();

    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["games"][0]["game"]["appid"], 20);
    assert_eq!(body["games"][0]["ownerCount"], 2);
    assert_eq!(
        body["games"][0]["owners"],
        serde_json::json!(["Alice", "Bob"])
    );
}

#[tokio::test]
async fn test_too_few_accounts_yields_error_payload() {
    let server = MockServer::start();
    let request = CompareRequest {
        account_identifiers: vec!["111".to_string()],
        display_names: vec!["Alice".to_string()],
    };

    let error = handle_compare(&engine_for(&server), request)
        .await
        .unwrap_err();

    let body = serde_json::to_value(&error).unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("at least 2 accounts"));
}

#[tokio::test]
async fn test_unreadable_library_yields_short_error_payload() {
    let server = MockServer::start();
    library_mock(&server, "111", &[10]);
    server.mock(|when, then| {
        when.method(GET)
            .path(OWNED_GAMES_PATH)
            .query_param("steamid", "999");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "response": {} }));
    });

    let request = CompareRequest {
        account_identifiers: vec!["111".to_string(), "999".to_string()],
        display_names: vec!["Alice".to_string(), "Bob".to_string()],
    };

    let error = handle_compare(&engine_for(&server), request)
        .await
        .unwrap_err();

    // Short user-facing message only, no URLs or internal detail.
    assert!(error.error.contains("game library"));
    assert!(!error.error.contains("http"));
}
