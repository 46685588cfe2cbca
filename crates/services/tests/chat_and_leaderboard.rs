use std::sync::Arc;

use edumate_core::ApiBase;
use edumate_core::model::{ChatRole, Username};
use serde_json::json;
use services::api::ScriptedTransport;
use services::{AppServices, ChatError, LeaderboardError};
use storage::repository::Storage;

fn harness() -> (AppServices, Arc<ScriptedTransport>) {
    let transport = Arc::new(ScriptedTransport::new());
    let services = AppServices::new(
        &Storage::in_memory(),
        ApiBase::explicit("http://127.0.0.1:8080").unwrap(),
        transport.clone(),
    );
    (services, transport)
}

#[tokio::test]
async fn anonymous_chat_sends_placeholder_identity() {
    let (services, transport) = harness();
    transport.push_response(200, r#"{"reply": "Hello!"}"#);

    let reply = services.chat().send("hi there").await.unwrap();

    assert_eq!(reply, "Hello!");
    let sent = transport.requests();
    assert_eq!(sent[0].url, "http://127.0.0.1:8080/api/chat");
    assert_eq!(
        sent[0].body,
        Some(json!({"username": "anonymous", "message": "hi there"}))
    );
}

#[tokio::test]
async fn chat_uses_session_identity() {
    let (services, transport) = harness();
    services
        .session()
        .set(&Username::new("ana").unwrap())
        .await
        .unwrap();
    transport.push_response(200, "{}");

    let reply = services.chat().send("hello").await.unwrap();

    assert_eq!(reply, "");
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({"username": "ana", "message": "hello"}))
    );
}

#[tokio::test]
async fn chat_failure_details() {
    let (services, transport) = harness();
    transport.push_response(500, r#"{"error": "Model overloaded"}"#);
    transport.push_response(502, "Bad Gateway");
    transport.push_unreachable();

    let err = services.chat().send("a").await.unwrap_err();
    assert_eq!(err.detail(), "Model overloaded");
    let err = services.chat().send("b").await.unwrap_err();
    assert_eq!(err.detail(), "Failed to send chat.");
    let err = services.chat().send("c").await.unwrap_err();
    assert!(matches!(err, ChatError::Transport(_)));
    assert_eq!(err.detail(), "Could not reach the server.");
}

#[tokio::test]
async fn history_maps_roles() {
    let (services, transport) = harness();
    services
        .session()
        .set(&Username::new("ana").unwrap())
        .await
        .unwrap();
    transport.push_response(
        200,
        r#"{"history": [
            {"role": "user", "message": "hi", "created_at": "2024-01-01"},
            {"role": "bot", "message": "hello", "created_at": "2024-01-01"}
        ]}"#,
    );

    let transcript = services.chat().history().await.unwrap();

    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[0].role, ChatRole::User);
    assert_eq!(transcript.turns()[1].role, ChatRole::Bot);
    assert_eq!(
        transport.requests()[0].url,
        "http://127.0.0.1:8080/api/chat/history/ana"
    );
}

#[tokio::test]
async fn history_path_escapes_reserved_characters() {
    let (services, transport) = harness();
    let cases = [
        ("ana#1", "http://127.0.0.1:8080/api/chat/history/ana%231"),
        ("a/b", "http://127.0.0.1:8080/api/chat/history/a%2Fb"),
        ("who?x", "http://127.0.0.1:8080/api/chat/history/who%3Fx"),
    ];

    for (name, expected) in cases {
        services
            .session()
            .set(&Username::new(name).unwrap())
            .await
            .unwrap();
        transport.push_response(200, r#"{"history": []}"#);
        services.chat().history().await.unwrap();

        let sent = transport.requests();
        let url = &sent.last().unwrap().url;
        assert_eq!(url, expected);
        assert!(!url.contains('#') && !url.contains('?'));
    }
}

#[tokio::test]
async fn anonymous_history_is_empty_without_request() {
    let (services, transport) = harness();

    let transcript = services.chat().history().await.unwrap();

    assert!(transcript.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn leaderboard_ranks_in_server_order() {
    let (services, transport) = harness();
    transport.push_response(
        200,
        r#"{"leaders": [
            {"username": "budi", "total_score": 12},
            {"username": "ana", "total_score": 9.6}
        ]}"#,
    );

    let entries = services.leaderboard().top().await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].rank, entries[0].username.as_str()), (1, "budi"));
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].total_score, 10);
}

#[tokio::test]
async fn leaderboard_error_status() {
    let (services, transport) = harness();
    transport.push_response(500, "");

    let err = services.leaderboard().top().await.unwrap_err();

    assert!(matches!(err, LeaderboardError::HttpStatus(500)));
}
