#![allow(clippy::unwrap_used)]
// Integration tests for `BigIpClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bigip_api::{
    BigIpClient, CodecError, Credentials, DataGroup, DataGroupRecord, DataGroupType, Error,
    Folder, Monitor, MonitorKind, Policy, PolicyRule, PolicyRuleAction, VirtualAddress,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn secret(value: &str) -> SecretString {
    value.to_string().into()
}

async fn setup() -> (MockServer, BigIpClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BigIpClient::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials::basic("admin", secret("admin-pass")),
    );
    (server, client)
}

async fn setup_token() -> (MockServer, BigIpClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BigIpClient::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials::token("netops", secret("netops-pass")),
    );
    (server, client)
}

fn tm_path(suffix: &str) -> String {
    format!("/mgmt/tm/{suffix}")
}

// ── Authentication tests ────────────────────────────────────────────

#[tokio::test]
async fn test_basic_auth_on_every_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("sys/folder")))
        .and(basic_auth("admin", "admin-pass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:sys:folder:foldercollectionstate",
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folders = client.list_folders().await.unwrap();
    assert!(folders.is_empty());
    assert!(!client.has_token());
}

#[tokio::test]
async fn test_token_login_then_header() {
    let (server, client) = setup_token().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .and(body_partial_json(json!({
            "username": "netops",
            "password": "netops-pass",
            "loginProviderName": "tmos"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "netops",
            "token": { "token": "TOKEN123", "timeout": 1200 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/virtual-address/~Common~10.0.0.10")))
        .and(header("X-F5-Auth-Token", "TOKEN123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "10.0.0.10",
            "partition": "Common",
            "fullPath": "/Common/10.0.0.10",
            "address": "10.0.0.10",
            "arp": "enabled",
            "enabled": "yes"
        })))
        .expect(2)
        .mount(&server)
        .await;

    // The second call reuses the token instead of logging in again.
    let first = client.get_virtual_address("/Common/10.0.0.10").await.unwrap();
    let second = client.get_virtual_address("/Common/10.0.0.10").await.unwrap();
    assert_eq!(first, second);
    assert!(first.arp);
    assert!(first.enabled);
    assert!(client.has_token());
}

#[tokio::test]
async fn test_token_login_failure() {
    let (server, client) = setup_token().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": 401,
            "message": "Authentication failed."
        })))
        .mount(&server)
        .await;

    let result = client.list_data_groups().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
    assert!(result.unwrap_err().is_auth_expired());
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let (server, client) = setup_token().await;

    Mock::given(method("POST"))
        .and(path("/mgmt/shared/authn/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": { "token": "TOKEN456" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/mgmt/shared/authz/tokens/TOKEN456"))
        .and(header("X-F5-Auth-Token", "TOKEN456"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.login().await.unwrap();
    assert!(client.has_token());

    client.logout().await.unwrap();
    assert!(!client.has_token());

    // Nothing left to revoke.
    client.logout().await.unwrap();
}

// ── Data group tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_data_groups() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/data-group/internal")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:ltm:data-group:internal:internalcollectionstate",
            "items": [
                {
                    "name": "allowed_hosts",
                    "partition": "Common",
                    "fullPath": "/Common/allowed_hosts",
                    "type": "string",
                    "records": [{ "name": "api.example.com", "data": "pool_api" }]
                },
                {
                    "name": "blocked_nets",
                    "partition": "Common",
                    "fullPath": "/Common/blocked_nets",
                    "type": "ip"
                }
            ]
        })))
        .mount(&server)
        .await;

    let groups = client.list_data_groups().await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].kind, Some(DataGroupType::String));
    assert_eq!(groups[0].records.len(), 1);
    assert_eq!(groups[1].kind, Some(DataGroupType::Ip));
    assert!(groups[1].records.is_empty());
}

#[tokio::test]
async fn test_create_data_group_sends_wire_shape() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(tm_path("ltm/data-group/internal")))
        .and(body_partial_json(json!({
            "name": "allowed_hosts",
            "type": "string",
            "records": [{ "name": "api.example.com", "data": "pool_api" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "allowed_hosts",
            "partition": "Common",
            "fullPath": "/Common/allowed_hosts",
            "generation": 42,
            "type": "string",
            "records": [{ "name": "api.example.com", "data": "pool_api" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let group = DataGroup {
        name: "allowed_hosts".into(),
        kind: Some(DataGroupType::String),
        records: vec![DataGroupRecord::new("api.example.com", Some("pool_api".into()))],
        ..DataGroup::default()
    };
    let created = client.create_data_group(&group).await.unwrap();

    assert_eq!(created.full_path.as_deref(), Some("/Common/allowed_hosts"));
    assert_eq!(created.generation, Some(42));
}

#[tokio::test]
async fn test_delete_data_group_encodes_full_path() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(tm_path("ltm/data-group/internal/~Common~allowed_hosts")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_data_group("/Common/allowed_hosts").await.unwrap();
}

#[tokio::test]
async fn test_not_found_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/data-group/internal/~Common~missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "message": "01020036:3: The requested value list (/Common/missing) was not found.",
            "errorStack": []
        })))
        .mount(&server)
        .await;

    let err = client.get_data_group("/Common/missing").await.unwrap_err();

    assert!(err.is_not_found(), "expected not found, got: {err:?}");
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("01020036:3"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── Virtual address tests ───────────────────────────────────────────

#[tokio::test]
async fn test_modify_virtual_address_sends_literals() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(tm_path("ltm/virtual-address/~Common~10.0.0.10")))
        .and(body_partial_json(json!({
            "arp": "enabled",
            "autoDelete": "false",
            "enabled": "no",
            "floating": "disabled",
            "icmpEcho": "enabled",
            "inheritedTrafficGroup": "yes"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "10.0.0.10",
            "fullPath": "/Common/10.0.0.10",
            "arp": "enabled",
            "autoDelete": "false",
            "enabled": "no",
            "floating": "disabled",
            "icmpEcho": "enabled",
            "inheritedTrafficGroup": "true"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let addr = VirtualAddress {
        name: "10.0.0.10".into(),
        arp: true,
        icmp_echo: true,
        inherited_traffic_group: true,
        ..VirtualAddress::default()
    };
    let updated = client
        .modify_virtual_address("/Common/10.0.0.10", &addr)
        .await
        .unwrap();

    assert!(updated.arp);
    assert!(!updated.enabled);
    assert!(updated.inherited_traffic_group);
}

#[tokio::test]
async fn test_unrecognized_literal_in_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/virtual-address")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "10.0.0.10", "enabled": "yes" },
                { "name": "10.0.0.11", "enabled": "sometimes" }
            ]
        })))
        .mount(&server)
        .await;

    let err = client.list_virtual_addresses().await.unwrap_err();

    assert!(
        matches!(
            err,
            Error::Codec(CodecError::UnrecognizedBooleanLiteral { field: "enabled", .. })
        ),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_mistyped_item_fails_like_single_get() {
    let (server, client) = setup().await;
    let bad_item = json!({ "name": "10.0.0.11", "connectionLimit": "lots" });

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/virtual-address")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "name": "10.0.0.10", "connectionLimit": 0 }, bad_item.clone()]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/virtual-address/10.0.0.11")))
        .respond_with(ResponseTemplate::new(200).set_body_json(bad_item))
        .mount(&server)
        .await;

    let list_err = client.list_virtual_addresses().await.unwrap_err();
    let get_err = client.get_virtual_address("10.0.0.11").await.unwrap_err();

    for err in [list_err, get_err] {
        assert!(
            matches!(err, Error::Codec(CodecError::MalformedWireFormat(_))),
            "got: {err:?}"
        );
    }
}

// ── Monitor tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_monitor_kind_selects_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/monitor/tcp-half-open")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "name": "tcp_half_open",
                "fullPath": "/Common/tcp_half_open",
                "interval": 5,
                "timeout": 16,
                "manualResume": "disabled",
                "transparent": "disabled"
            }]
        })))
        .mount(&server)
        .await;

    let monitors = client.list_monitors(MonitorKind::TcpHalfOpen).await.unwrap();

    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].interval, Some(5));
    assert!(!monitors[0].manual_resume);
}

#[tokio::test]
async fn test_create_monitor_renames_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(tm_path("ltm/monitor/http")))
        .and(body_partial_json(json!({
            "name": "http_app",
            "defaultsFrom": "/Common/http",
            "send": "GET /health HTTP/1.0\r\n\r\n",
            "recv": "200 OK",
            "manualResume": "enabled",
            "reverse": "disabled"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "http_app",
            "fullPath": "/Common/http_app",
            "defaultsFrom": "/Common/http",
            "manualResume": "enabled"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let monitor = Monitor {
        name: "http_app".into(),
        parent_monitor: Some("/Common/http".into()),
        send: Some("GET /health HTTP/1.0\r\n\r\n".into()),
        receive: Some("200 OK".into()),
        manual_resume: true,
        ..Monitor::default()
    };
    let created = client.create_monitor(MonitorKind::Http, &monitor).await.unwrap();

    assert_eq!(created.parent_monitor.as_deref(), Some("/Common/http"));
    assert!(created.manual_resume);
}

// ── Folder tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_folder_sends_true_false() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(tm_path("sys/folder")))
        .and(body_partial_json(json!({
            "name": "app",
            "partition": "Common",
            "hidden": "false",
            "noRefCheck": "true"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "app",
            "partition": "Common",
            "fullPath": "/Common/app",
            "hidden": "false",
            "noRefCheck": "true",
            "inheritedDeviceGroup": "true",
            "inheritedTrafficGroup": "true"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folder = Folder {
        name: "app".into(),
        partition: Some("Common".into()),
        no_ref_check: true,
        ..Folder::default()
    };
    let created = client.create_folder(&folder).await.unwrap();

    assert!(created.no_ref_check);
    assert!(created.inherited_device_group);
    assert!(!created.hidden);
}

// ── Policy tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_policy_expands_subcollections() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/policy/~Common~api_routing")))
        .and(query_param("expandSubcollections", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "api_routing",
            "partition": "Common",
            "fullPath": "/Common/api_routing",
            "strategy": "/Common/first-match",
            "rulesReference": {
                "link": "https://localhost/mgmt/tm/ltm/policy/~Common~api_routing/rules",
                "isSubcollection": true,
                "items": [{
                    "name": "api",
                    "ordinal": 0,
                    "actionsReference": {
                        "isSubcollection": true,
                        "items": [{ "name": "0", "forward": true, "request": true, "select": true, "pool": "/Common/pool_api" }]
                    }
                }]
            }
        })))
        .mount(&server)
        .await;

    let policy = client.get_policy("/Common/api_routing").await.unwrap();

    assert_eq!(policy.rules.len(), 1);
    assert_eq!(policy.rules[0].actions[0].pool.as_deref(), Some("/Common/pool_api"));
    assert!(policy.rules[0].conditions.is_empty());
}

#[tokio::test]
async fn test_create_policy_drafts_then_publishes() {
    let (server, client) = setup().await;

    // Both POSTs name the draft; the publish command is matched first.
    Mock::given(method("POST"))
        .and(path(tm_path("ltm/policy")))
        .and(body_partial_json(json!({ "name": "/Common/Drafts/api_routing" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "api_routing",
            "partition": "Common",
            "subPath": "Drafts",
            "fullPath": "/Common/Drafts/api_routing"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(tm_path("ltm/policy")))
        .and(body_partial_json(json!({
            "command": "publish",
            "name": "/Common/Drafts/api_routing"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "tm:ltm:policy:policystate",
            "command": "publish",
            "name": "/Common/Drafts/api_routing"
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(tm_path("ltm/policy/~Common~api_routing")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "api_routing",
            "partition": "Common",
            "fullPath": "/Common/api_routing",
            "rulesReference": {
                "items": [{ "name": "api", "ordinal": 0 }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policy = Policy {
        name: "api_routing".into(),
        partition: Some("Common".into()),
        rules: vec![PolicyRule {
            name: "api".into(),
            actions: vec![PolicyRuleAction {
                name: "0".into(),
                forward: true,
                request: true,
                select: true,
                pool: Some("/Common/pool_api".into()),
                ..PolicyRuleAction::default()
            }],
            ..PolicyRule::default()
        }],
        ..Policy::default()
    };
    let published = client.create_policy(&policy).await.unwrap();

    assert_eq!(published.full_path.as_deref(), Some("/Common/api_routing"));
    assert_eq!(published.rules.len(), 1);
}

// ── Error handling tests ────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_is_transient() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("sys/folder/~Common")))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client.get_folder("/Common").await.unwrap_err();

    assert!(err.is_transient(), "got: {err:?}");
    assert!(matches!(err, Error::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_invalid_collection_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(tm_path("sys/folder")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let result = client.list_folders().await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}
