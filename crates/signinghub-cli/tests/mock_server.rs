//! CLI tests against a mock SigningHub server.
//!
//! Each test runs the built binary with its own HOME so session files never
//! touch the developer's real data directory.

mod common;

use common::{
    mount_authenticate, run_cli_with_env, run_cli_with_env_failure, run_cli_with_env_success,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_login_status_logout() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = server.uri();

    mount_authenticate(&server, "cli-access-token").await;
    Mock::given(method("POST"))
        .and(path("/v4/logout"))
        .and(header("authorization", "Bearer cli-access-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(&["auth", "login"], home.path(), &url);
    assert!(stdout.contains("Logged in successfully"));

    let status = run_cli_with_env_success(&["auth", "status"], home.path(), &url);
    assert!(status.contains(&url));
    assert!(status.contains("Expired: no"));
    assert!(status.contains("Refresh token: yes"));

    let stdout = run_cli_with_env_success(&["auth", "logout"], home.path(), &url);
    assert!(stdout.contains("Logged out"));

    let stderr = run_cli_with_env_failure(&["auth", "status"], home.path(), &url);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_sends_client_credentials() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .and(body_string_contains("client_id=cli-test-client"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": 60
        })))
        .expect(1)
        .mount(&server)
        .await;

    run_cli_with_env_success(&["auth", "login"], home.path(), &server.uri());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = server.uri();

    Mock::given(method("POST"))
        .and(path("/authenticate"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Unknown client"
        })))
        .mount(&server)
        .await;

    let stderr = run_cli_with_env_failure(&["auth", "login"], home.path(), &url);
    assert!(stderr.contains("Failed to login"));

    // Nothing is persisted after a failed login
    let stderr = run_cli_with_env_failure(&["auth", "status"], home.path(), &url);
    assert!(stderr.contains("No active session"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_prints_profile() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = server.uri();

    mount_authenticate(&server, "cli-access-token").await;
    Mock::given(method("GET"))
        .and(path("/v4/settings/profile"))
        .and(header("authorization", "Bearer cli-access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_email": "alice@example.com"
        })))
        .mount(&server)
        .await;

    run_cli_with_env_success(&["auth", "login"], home.path(), &url);
    let stdout = run_cli_with_env_success(&["auth", "whoami"], home.path(), &url);
    assert!(stdout.contains("alice@example.com"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_package_create_and_download() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let url = server.uri();
    let document = [0x25u8, 0x50, 0x44, 0x46, 0x00, 0xff];

    mount_authenticate(&server, "cli-access-token").await;
    Mock::given(method("POST"))
        .and(path("/v4/packages"))
        .and(body_string_contains("Contract"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "package_id": 201080 })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/packages/201080/documents/7"))
        .and(header("accept", "application/octet-stream"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(document.to_vec(), "application/octet-stream"),
        )
        .mount(&server)
        .await;

    run_cli_with_env_success(&["auth", "login"], home.path(), &url);

    let stdout = run_cli_with_env_success(&["package", "create", "Contract"], home.path(), &url);
    assert!(stdout.contains("201080"));

    let target = home.path().join("contract.pdf");
    let target_arg = target.to_str().unwrap();
    run_cli_with_env_success(
        &["package", "download", "201080", "7", "--output", target_arg],
        home.path(),
        &url,
    );
    assert_eq!(std::fs::read(&target).unwrap(), document);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_package_command_requires_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run_cli_with_env(&["package", "workflow", "1"], home.path(), &server.uri());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No active session"));
    assert!(server.received_requests().await.unwrap().is_empty());
}
