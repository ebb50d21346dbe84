use super::*;
use crate::api_error::{ApiError, FormErrorNode};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct RecordedCall {
    method: String,
    path: String,
    body: Option<Value>,
}

enum StubResponse {
    Success(Vec<u8>),
    ApiStatus(u16),
}

/// Counting transport double: records every call and serves a canned
/// response.
struct StubTransport {
    calls: Mutex<Vec<RecordedCall>>,
    response: StubResponse,
}

impl StubTransport {
    fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: StubResponse::Success(body.as_bytes().to_vec()),
        })
    }

    fn api_error(status: u16) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: StubResponse::ApiStatus(status),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Vec<u8>, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });
        match &self.response {
            StubResponse::Success(data) => Ok(data.clone()),
            StubResponse::ApiStatus(status) => {
                Err(ClientError::Api(ApiError::new(*status, FormErrorNode::default())))
            }
        }
    }
}

fn basic_params() -> BasicAlertParams {
    BasicAlertParams {
        name: "Brand watch".to_string(),
        included_keywords: vec!["lemlist".to_string()],
        languages: vec!["en".to_string()],
        sources: vec!["web".to_string()],
        ..BasicAlertParams::default()
    }
}

const CREATED_ALERT: &str = r#"{"alert": {"id": "alert-1", "name": "Brand watch", "query": {"type": "basic", "included_keywords": ["lemlist"]}, "languages": ["en"], "sources": ["web"]}}"#;

#[tokio::test]
async fn test_create_basic_alert_success() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

    let alert = client.create_basic_alert(basic_params()).await.unwrap();
    assert_eq!(alert.id, "alert-1");
    assert_eq!(alert.query.query_type, "basic");

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/accounts/acc-1/alerts");
}

#[tokio::test]
async fn test_create_basic_alert_forces_basic_query_type() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

    client.create_basic_alert(basic_params()).await.unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["query"]["type"], "basic");
}

#[tokio::test]
async fn test_create_basic_alert_uses_default_group_id() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-default");

    client.create_basic_alert(basic_params()).await.unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["group_id"], "grp-default");
}

#[tokio::test]
async fn test_create_basic_alert_request_group_overrides_default() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-default");

    let params = BasicAlertParams {
        group_id: Some("grp-override".to_string()),
        ..basic_params()
    };
    client.create_basic_alert(params).await.unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["group_id"], "grp-override");
}

#[tokio::test]
async fn test_create_basic_alert_missing_account_id_fails_locally() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "", "grp-1");

    let err = client.create_basic_alert(basic_params()).await.unwrap_err();
    match err {
        ClientError::Context { operation, source } => {
            assert_eq!(operation, "create basic alert");
            assert!(matches!(*source, ClientError::MissingAccountId));
        }
        other => panic!("expected context-tagged error, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_create_basic_alert_missing_group_id_fails_locally() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let err = client.create_basic_alert(basic_params()).await.unwrap_err();
    assert_eq!(err.to_string(), "create basic alert: group ID is required");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_create_basic_alert_empty_request_group_falls_back() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-default");

    let params = BasicAlertParams {
        group_id: Some(String::new()),
        ..basic_params()
    };
    client.create_basic_alert(params).await.unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["group_id"], "grp-default");
}

#[tokio::test]
async fn test_create_basic_alert_local_validation() {
    let cases = [
        (
            BasicAlertParams {
                name: String::new(),
                ..basic_params()
            },
            "alert name is required",
        ),
        (
            BasicAlertParams {
                included_keywords: vec![],
                ..basic_params()
            },
            "at least one included keyword is required",
        ),
        (
            BasicAlertParams {
                languages: vec![],
                ..basic_params()
            },
            "at least one language is required",
        ),
        (
            BasicAlertParams {
                sources: vec![],
                ..basic_params()
            },
            "at least one source is required",
        ),
        (
            BasicAlertParams {
                sources: vec!["usenet".to_string()],
                ..basic_params()
            },
            "invalid source type: usenet",
        ),
    ];

    for (params, expected) in cases {
        let transport = StubTransport::ok(CREATED_ALERT);
        let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

        let err = client.create_basic_alert(params).await.unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected {expected:?} in {err}"
        );
        assert_eq!(transport.call_count(), 0, "no network call for {expected:?}");
    }
}

#[tokio::test]
async fn test_create_basic_alert_propagates_api_error_with_context() {
    let transport = StubTransport::api_error(400);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

    let err = client.create_basic_alert(basic_params()).await.unwrap_err();
    assert!(err.to_string().starts_with("create basic alert: "));
    assert_eq!(err.as_api().unwrap().status_code, 400);
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_create_advanced_alert_builds_advanced_query() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

    let params = AdvancedAlertParams {
        name: "Spaceflight".to_string(),
        query_string: "(NASA OR SpaceX) AND NOT spam".to_string(),
        ..AdvancedAlertParams::default()
    };
    client.create_advanced_alert(params).await.unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body["query"]["type"], "advanced");
    assert_eq!(body["query"]["query_string"], "(NASA OR SpaceX) AND NOT spam");
    assert!(body["query"].get("included_keywords").is_none());
}

#[tokio::test]
async fn test_create_advanced_alert_requires_query_string() {
    let transport = StubTransport::ok(CREATED_ALERT);
    let client = MentionClient::new(transport.clone(), "acc-1", "grp-1");

    let params = AdvancedAlertParams {
        name: "Spaceflight".to_string(),
        ..AdvancedAlertParams::default()
    };
    let err = client.create_advanced_alert(params).await.unwrap_err();
    assert!(err.to_string().contains("query string is required"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_get_app_data() {
    let transport = StubTransport::ok(
        r#"{"alert_languages": {"en": {"name": "English"}}, "alert_countries": {"US": "United States"}, "alert_sources": {"web": {"name": "Web"}}}"#,
    );
    let client = MentionClient::new(transport.clone(), "", "");

    let app_data = client.get_app_data().await.unwrap();
    assert_eq!(app_data.alert_languages["en"].name, "English");

    let calls = transport.calls();
    assert_eq!(calls[0].method, "GET");
    assert_eq!(calls[0].path, "/app/data");
    assert!(calls[0].body.is_none());
}

#[tokio::test]
async fn test_get_app_data_error_context() {
    let transport = StubTransport::api_error(500);
    let client = MentionClient::new(transport, "", "");

    let err = client.get_app_data().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "get app data: API request failed (HTTP 500)"
    );
}

#[tokio::test]
async fn test_get_account() {
    let transport = StubTransport::ok(
        r#"{"account": {"id": "acc-9", "subscription": {"advanced_query_access": true}}}"#,
    );
    let client = MentionClient::new(transport.clone(), "", "");

    let account = client.get_account().await.unwrap();
    assert_eq!(account.id, "acc-9");
    assert!(account.subscription.advanced_query_access);
    assert_eq!(transport.calls()[0].path, "/accounts/me");
}

#[tokio::test]
async fn test_list_alerts_builds_pagination_query() {
    let transport = StubTransport::ok(r#"{"alerts": []}"#);
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    client
        .list_alerts(Some(50), Some("cur-2".to_string()))
        .await
        .unwrap();

    assert_eq!(
        transport.calls()[0].path,
        "/accounts/acc-1/alerts?limit=50&cursor=cur-2"
    );
}

#[tokio::test]
async fn test_list_alerts_without_filters_has_no_query_string() {
    let transport = StubTransport::ok(r#"{"alerts": []}"#);
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    client.list_alerts(None, None).await.unwrap();
    assert_eq!(transport.calls()[0].path, "/accounts/acc-1/alerts");
}

#[tokio::test]
async fn test_get_alert_requires_alert_id() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let err = client.get_alert("").await.unwrap_err();
    assert!(err.to_string().contains("alert ID is required"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_update_alert_rebuilds_basic_query() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let params = UpdateAlertParams {
        name: Some("Renamed".to_string()),
        query_type: Some("basic".to_string()),
        included_keywords: vec!["rust".to_string()],
        ..UpdateAlertParams::default()
    };
    client.update_alert("alert-1", params).await.unwrap();

    let call = transport.calls()[0].clone();
    assert_eq!(call.method, "PUT");
    assert_eq!(call.path, "/accounts/acc-1/alerts/alert-1");
    let body = call.body.unwrap();
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["query"]["type"], "basic");
    assert_eq!(body["query"]["included_keywords"][0], "rust");
}

#[tokio::test]
async fn test_update_alert_advanced_requires_query_string() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let params = UpdateAlertParams {
        query_type: Some("advanced".to_string()),
        ..UpdateAlertParams::default()
    };
    let err = client.update_alert("alert-1", params).await.unwrap_err();
    assert!(err.to_string().contains("query string is required"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_update_alert_rejects_unknown_query_type() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let params = UpdateAlertParams {
        query_type: Some("fuzzy".to_string()),
        ..UpdateAlertParams::default()
    };
    let err = client.update_alert("alert-1", params).await.unwrap_err();
    assert!(err.to_string().contains("unsupported query type: fuzzy"));
}

#[tokio::test]
async fn test_update_alert_omits_unset_fields() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    client
        .update_alert("alert-1", UpdateAlertParams::default())
        .await
        .unwrap();

    let body = transport.calls()[0].body.clone().unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn test_pause_and_unpause_paths() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    client.pause_alert("alert-1").await.unwrap();
    client.unpause_alert("alert-1").await.unwrap();

    let calls = transport.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/accounts/acc-1/alerts/alert-1/pause");
    assert_eq!(calls[1].path, "/accounts/acc-1/alerts/alert-1/unpause");
}

#[tokio::test]
async fn test_fetch_mentions_builds_filter_query() {
    let transport = StubTransport::ok(r#"{"mentions": []}"#);
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let filters = MentionFilters {
        limit: Some(5),
        folder: Some("inbox".to_string()),
        tone: vec![-1, 1],
        languages: vec!["en".to_string()],
        ..MentionFilters::default()
    };
    client.fetch_mentions("alert-1", filters).await.unwrap();

    let path = transport.calls()[0].path.clone();
    assert!(path.starts_with("/accounts/acc-1/alerts/alert-1/mentions?"));
    assert!(path.contains("limit=5"));
    assert!(path.contains("folder=inbox"));
    assert!(path.contains("tone=-1"));
    assert!(path.contains("tone=1"));
    assert!(path.contains("languages=en"));
}

#[tokio::test]
async fn test_fetch_mentions_without_filters() {
    let transport = StubTransport::ok(r#"{"mentions": []}"#);
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    client
        .fetch_mentions("alert-1", MentionFilters::default())
        .await
        .unwrap();
    assert_eq!(
        transport.calls()[0].path,
        "/accounts/acc-1/alerts/alert-1/mentions"
    );
}

#[tokio::test]
async fn test_fetch_alert_stats_requires_alert_ids() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let err = client
        .fetch_alert_stats(StatsParams::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("at least one alert ID is required"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_fetch_alert_stats_query_encoding() {
    let transport = StubTransport::ok("{}");
    let client = MentionClient::new(transport.clone(), "acc-1", "");

    let params = StatsParams {
        alerts: vec!["a1".to_string(), "a2".to_string()],
        from: Some("2024-01-01".to_string()),
        country_stats: Some(CountryStats::Flag(true)),
        tones: vec![0],
        ..StatsParams::default()
    };
    client.fetch_alert_stats(params).await.unwrap();

    let path = transport.calls()[0].path.clone();
    assert!(path.starts_with("/accounts/acc-1/stats?"));
    assert!(path.contains("alerts%5B%5D=a1"));
    assert!(path.contains("alerts%5B%5D=a2"));
    assert!(path.contains("from=2024-01-01"));
    assert!(path.contains("country_stats=10"));
    assert!(path.contains("tones%5B%5D=0"));
}

#[tokio::test]
async fn test_fetch_alert_stats_country_stats_variants() {
    for (value, expected) in [
        (CountryStats::Flag(true), "country_stats=10"),
        (CountryStats::Flag(false), "country_stats=0"),
        (CountryStats::Count(25), "country_stats=25"),
    ] {
        let transport = StubTransport::ok("{}");
        let client = MentionClient::new(transport.clone(), "acc-1", "");

        let params = StatsParams {
            alerts: vec!["a1".to_string()],
            country_stats: Some(value),
            ..StatsParams::default()
        };
        client.fetch_alert_stats(params).await.unwrap();
        assert!(transport.calls()[0].path.contains(expected));
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let transport = StubTransport::ok("not json");
    let client = MentionClient::new(transport, "acc-1", "grp-1");

    let err = client.create_basic_alert(basic_params()).await.unwrap_err();
    match err {
        ClientError::Context { source, .. } => {
            assert!(matches!(*source, ClientError::Decode(_)));
        }
        other => panic!("expected context-tagged decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_success_body_yields_zero_value_alert() {
    let transport = StubTransport::ok("");
    let client = MentionClient::new(transport, "acc-1", "grp-1");

    let alert = client.create_basic_alert(basic_params()).await.unwrap();
    assert!(alert.id.is_empty());
}
