// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GitHub store behaviour against a mocked contents API.

use quire_config::GithubConfig;
use quire_core::traits::StoreAdapter;
use quire_core::{QuireError, StoreErrorKind};
use quire_store_github::GithubStore;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILE_PATH: &str = "/repos/user/website/contents/notes/hello.md";

fn test_store(server: &MockServer) -> GithubStore {
    GithubStore::new(&GithubConfig {
        base_url: server.uri(),
        user: "user".into(),
        repo: "website".into(),
        branch: "main".into(),
        token: Some("abc123".into()),
    })
    .unwrap()
}

fn store_kind(err: &QuireError) -> StoreErrorKind {
    err.store_kind().expect("store error")
}

async fn mount_metadata(server: &MockServer, sha: &str, content: &str) {
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .and(query_param("ref", "main"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": sha,
            "content": content,
            "encoding": "base64"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_sends_token_branch_and_base64() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .and(header("authorization", "token abc123"))
        .and(header("accept", "application/vnd.github.raw"))
        .and(body_partial_json(json!({
            "branch": "main",
            "content": "aGVsbG8=",
            "message": "create: hello"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    test_store(&server)
        .create_file("notes/hello.md", b"hello", "create: hello")
        .await
        .unwrap();
}

#[tokio::test]
async fn large_payload_uses_metadata_negotiation() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let content = vec![b'x'; 1_000_001];
    test_store(&server)
        .create_file("notes/hello.md", &content, "create: large")
        .await
        .unwrap();
}

#[tokio::test]
async fn create_over_existing_file_conflicts() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid request.\n\n\"sha\" wasn't supplied."
        })))
        .mount(&server)
        .await;

    let err = test_store(&server)
        .create_file("notes/hello.md", b"hello", "create")
        .await
        .unwrap_err();
    assert_eq!(store_kind(&err), StoreErrorKind::Conflict);
    let QuireError::Store(inner) = err else {
        panic!("expected store error");
    };
    assert_eq!(inner.plugin, "GitHub store");
    assert_eq!(inner.status, Some(422));
}

#[tokio::test]
async fn validation_failure_is_backend_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid request.\n\n\"content\" is not a valid base64 string."
        })))
        .mount(&server)
        .await;

    let err = test_store(&server)
        .create_file("notes/hello.md", b"hello", "create")
        .await
        .unwrap_err();
    assert_eq!(store_kind(&err), StoreErrorKind::BackendUnavailable);
}

#[tokio::test]
async fn read_decodes_wrapped_base64() {
    let server = MockServer::start().await;
    mount_metadata(&server, "abc", "aGVs\nbG8g\nd29y\nbGQ=\n").await;

    let content = test_store(&server).read_file("notes/hello.md").await.unwrap();
    assert_eq!(content, b"hello world");
}

#[tokio::test]
async fn read_large_file_falls_back_to_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "abc",
            "content": "",
            "encoding": "none"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .and(header("accept", "application/vnd.github.raw"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"raw bytes".to_vec()))
        .mount(&server)
        .await;

    let content = test_store(&server).read_file("notes/hello.md").await.unwrap();
    assert_eq!(content, b"raw bytes");
}

#[tokio::test]
async fn read_missing_file_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;

    let err = test_store(&server).read_file("notes/hello.md").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "GitHub store: not found: Not Found");
}

#[tokio::test]
async fn update_reads_sha_then_sends_it() {
    let server = MockServer::start().await;
    mount_metadata(&server, "sha-1", "b2xk").await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .and(body_partial_json(json!({ "sha": "sha-1", "content": "bmV3" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    test_store(&server)
        .update_file("notes/hello.md", b"new", "update")
        .await
        .unwrap();
}

#[tokio::test]
async fn update_with_stale_sha_conflicts() {
    let server = MockServer::start().await;
    mount_metadata(&server, "sha-1", "b2xk").await;
    Mock::given(method("PUT"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "notes/hello.md does not match sha-1"
        })))
        .mount(&server)
        .await;

    let err = test_store(&server)
        .update_file("notes/hello.md", b"new", "update")
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert!(err.to_string().contains("does not match"));
}

#[tokio::test]
async fn delete_sends_sha_and_branch() {
    let server = MockServer::start().await;
    mount_metadata(&server, "sha-2", "b2xk").await;
    Mock::given(method("DELETE"))
        .and(path(FILE_PATH))
        .and(body_partial_json(json!({
            "branch": "main",
            "sha": "sha-2",
            "message": "delete: hello"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    test_store(&server)
        .delete_file("notes/hello.md", "delete: hello")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_missing_file_is_not_found_without_write() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_store(&server)
        .delete_file("notes/hello.md", "delete")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn auth_failure_is_backend_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FILE_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let err = test_store(&server).read_file("notes/hello.md").await.unwrap_err();
    assert_eq!(store_kind(&err), StoreErrorKind::BackendUnavailable);
    assert!(err.to_string().ends_with("Bad credentials"));
}

#[tokio::test]
async fn transport_failure_is_backend_unavailable() {
    let store = GithubStore::new(&GithubConfig {
        base_url: "http://127.0.0.1:1".into(),
        user: "user".into(),
        repo: "website".into(),
        branch: "main".into(),
        token: Some("abc123".into()),
    })
    .unwrap();

    let err = store.read_file("notes/hello.md").await.unwrap_err();
    assert_eq!(store_kind(&err), StoreErrorKind::BackendUnavailable);
    let QuireError::Store(inner) = err else {
        panic!("expected store error");
    };
    assert_eq!(inner.status, None);
}
