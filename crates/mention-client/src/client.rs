//! Domain client for the Mention API.
//!
//! Each operation is a thin composition over [`Transport`]: pre-flight
//! checks, path construction, then decode. Preconditions fail locally
//! before any network call; every failure carries the operation's context
//! tag.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::ClientError;
use crate::models::{
    is_valid_source, Account, AccountResponse, Alert, AppData, CreateAlertRequest,
    CreateAlertResponse, Query,
};
use crate::transport::{decode_body, Transport};

/// Parameters for creating a basic (keyword) alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicAlertParams {
    pub name: String,

    #[serde(default)]
    pub included_keywords: Vec<String>,

    #[serde(default)]
    pub required_keywords: Vec<String>,

    #[serde(default)]
    pub excluded_keywords: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub group_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub blocked_sites: Vec<String>,

    #[serde(default)]
    pub noise_detection: Option<bool>,
}

/// Parameters for creating an advanced (boolean query) alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvancedAlertParams {
    pub name: String,

    pub query_string: String,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub group_id: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub blocked_sites: Vec<String>,

    #[serde(default)]
    pub noise_detection: Option<bool>,
}

/// Parameters for updating an alert. Only set fields are sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlertParams {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    /// `"basic"` or `"advanced"`; when set, the query object is rebuilt
    /// from the matching fields below.
    #[serde(default)]
    pub query_type: Option<String>,

    #[serde(default)]
    pub included_keywords: Vec<String>,

    #[serde(default)]
    pub required_keywords: Vec<String>,

    #[serde(default)]
    pub excluded_keywords: Vec<String>,

    #[serde(default)]
    pub query_string: Option<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub blocked_sites: Vec<String>,

    #[serde(default)]
    pub noise_detection: Option<bool>,
}

/// Filters for fetching mentions of an alert.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentionFilters {
    #[serde(default)]
    pub since_id: Option<i64>,

    #[serde(default)]
    pub before_date: Option<String>,

    #[serde(default)]
    pub not_before_date: Option<String>,

    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub unread: Option<bool>,

    #[serde(default)]
    pub favorite: Option<bool>,

    #[serde(default)]
    pub folder: Option<String>,

    /// -1 = negative, 0 = neutral, 1 = positive.
    #[serde(default)]
    pub tone: Vec<i32>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub include_children: Option<bool>,

    #[serde(default)]
    pub sort: Option<String>,

    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub q: Option<String>,

    #[serde(default)]
    pub cursor: Option<String>,
}

/// Parameters for the alert statistics endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsParams {
    pub alerts: Vec<String>,

    #[serde(default)]
    pub from: Option<String>,

    #[serde(default)]
    pub to: Option<String>,

    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub interval: Option<String>,

    #[serde(default)]
    pub favorite: Option<bool>,

    #[serde(default)]
    pub important: Option<bool>,

    #[serde(default)]
    pub week_day_stats: Option<bool>,

    #[serde(default)]
    pub week_day_by_hour_stats: Option<bool>,

    #[serde(default)]
    pub influencers: Option<bool>,

    #[serde(default)]
    pub reach_per_interval_stats: Option<bool>,

    #[serde(default, rename = "author_influence.score")]
    pub author_influence_score: Option<bool>,

    #[serde(default)]
    pub tones: Vec<i32>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub countries: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub country_stats: Option<CountryStats>,
}

/// Country aggregation: a flag (top 10 / off) or an explicit count.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CountryStats {
    Flag(bool),
    Count(u32),
}

impl CountryStats {
    fn as_param(&self) -> String {
        match self {
            CountryStats::Flag(true) => "10".to_string(),
            CountryStats::Flag(false) => "0".to_string(),
            CountryStats::Count(n) => n.to_string(),
        }
    }
}

/// Client for the Mention API domain operations.
///
/// Holds no mutable state: an account identifier, a default group
/// identifier, and a shared transport handle. Safe to share across
/// concurrent callers.
pub struct MentionClient {
    transport: Arc<dyn Transport>,
    account_id: String,
    group_id: String,
}

impl MentionClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        account_id: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            account_id: account_id.into(),
            group_id: group_id.into(),
        }
    }

    fn require_account_id(&self) -> Result<&str, ClientError> {
        if self.account_id.is_empty() {
            return Err(ClientError::MissingAccountId);
        }
        Ok(&self.account_id)
    }

    /// Request-level group ID overrides the configured default; both empty
    /// is a local failure.
    fn resolve_group_id(&self, requested: Option<String>) -> Result<String, ClientError> {
        let group_id = requested
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| self.group_id.clone());
        if group_id.is_empty() {
            return Err(ClientError::MissingGroupId);
        }
        Ok(group_id)
    }

    /// Create a basic keyword alert.
    pub async fn create_basic_alert(&self, params: BasicAlertParams) -> Result<Alert, ClientError> {
        self.create_basic_alert_inner(params)
            .await
            .map_err(|e| e.context("create basic alert"))
    }

    async fn create_basic_alert_inner(&self, params: BasicAlertParams) -> Result<Alert, ClientError> {
        let account_id = self.require_account_id()?.to_string();
        let group_id = self.resolve_group_id(params.group_id)?;

        if params.name.is_empty() {
            return Err(ClientError::Validation("alert name is required".to_string()));
        }
        if params.included_keywords.is_empty() {
            return Err(ClientError::Validation(
                "at least one included keyword is required".to_string(),
            ));
        }
        if params.languages.is_empty() {
            return Err(ClientError::Validation(
                "at least one language is required".to_string(),
            ));
        }
        if params.sources.is_empty() {
            return Err(ClientError::Validation(
                "at least one source is required".to_string(),
            ));
        }
        for source in &params.sources {
            if !is_valid_source(source) {
                return Err(ClientError::Validation(format!(
                    "invalid source type: {source}"
                )));
            }
        }

        let request = CreateAlertRequest {
            name: params.name,
            query: Query::basic(
                params.included_keywords,
                params.required_keywords,
                params.excluded_keywords,
            ),
            languages: params.languages,
            countries: params.countries,
            sources: params.sources,
            group_id: Some(group_id),
            description: params.description,
            color: params.color,
            blocked_sites: params.blocked_sites,
            noise_detection: params.noise_detection,
        };

        info!(name = %request.name, "creating basic alert");
        let alert = self.post_alert(&account_id, &request).await?;
        info!(id = %alert.id, "created alert");
        Ok(alert)
    }

    /// Create an advanced alert from a boolean query string.
    pub async fn create_advanced_alert(
        &self,
        params: AdvancedAlertParams,
    ) -> Result<Alert, ClientError> {
        self.create_advanced_alert_inner(params)
            .await
            .map_err(|e| e.context("create advanced alert"))
    }

    async fn create_advanced_alert_inner(
        &self,
        params: AdvancedAlertParams,
    ) -> Result<Alert, ClientError> {
        let account_id = self.require_account_id()?.to_string();
        let group_id = self.resolve_group_id(params.group_id)?;

        if params.name.is_empty() {
            return Err(ClientError::Validation("alert name is required".to_string()));
        }
        if params.query_string.is_empty() {
            return Err(ClientError::Validation(
                "query string is required".to_string(),
            ));
        }

        let request = CreateAlertRequest {
            name: params.name,
            query: Query::advanced(params.query_string),
            languages: params.languages,
            countries: params.countries,
            sources: params.sources,
            group_id: Some(group_id),
            description: params.description,
            color: params.color,
            blocked_sites: params.blocked_sites,
            noise_detection: params.noise_detection,
        };

        info!(name = %request.name, "creating advanced alert");
        let alert = self.post_alert(&account_id, &request).await?;
        info!(id = %alert.id, "created alert");
        Ok(alert)
    }

    async fn post_alert(
        &self,
        account_id: &str,
        request: &CreateAlertRequest,
    ) -> Result<Alert, ClientError> {
        let body = serde_json::to_value(request)
            .map_err(|e| ClientError::Serialization(e.to_string()))?;
        let path = format!("/accounts/{account_id}/alerts");
        let data = self.transport.execute("POST", &path, Some(body)).await?;
        let response: CreateAlertResponse = decode_body(&data)?;
        Ok(response.alert)
    }

    /// Fetch the selectable alert options snapshot.
    pub async fn get_app_data(&self) -> Result<AppData, ClientError> {
        self.get_app_data_inner()
            .await
            .map_err(|e| e.context("get app data"))
    }

    async fn get_app_data_inner(&self) -> Result<AppData, ClientError> {
        let data = self.transport.execute("GET", "/app/data", None).await?;
        decode_body(&data)
    }

    /// Fetch the authenticated account.
    pub async fn get_account(&self) -> Result<Account, ClientError> {
        self.get_account_inner()
            .await
            .map_err(|e| e.context("get account info"))
    }

    async fn get_account_inner(&self) -> Result<Account, ClientError> {
        let data = self.transport.execute("GET", "/accounts/me", None).await?;
        let response: AccountResponse = decode_body(&data)?;
        Ok(response.account)
    }

    /// List alerts with optional pagination.
    pub async fn list_alerts(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Value, ClientError> {
        self.list_alerts_inner(limit, cursor)
            .await
            .map_err(|e| e.context("list alerts"))
    }

    async fn list_alerts_inner(
        &self,
        limit: Option<u32>,
        cursor: Option<String>,
    ) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?;

        let mut pairs = Vec::new();
        if let Some(limit) = limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(cursor) = cursor {
            pairs.push(("cursor".to_string(), cursor));
        }

        let path = format!("/accounts/{account_id}/alerts{}", build_query(&pairs));
        let data = self.transport.execute("GET", &path, None).await?;
        decode_body(&data)
    }

    /// Fetch a single alert.
    pub async fn get_alert(&self, alert_id: &str) -> Result<Value, ClientError> {
        self.get_alert_inner(alert_id)
            .await
            .map_err(|e| e.context("get alert"))
    }

    async fn get_alert_inner(&self, alert_id: &str) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?;
        require_alert_id(alert_id)?;

        let path = format!("/accounts/{account_id}/alerts/{alert_id}");
        let data = self.transport.execute("GET", &path, None).await?;
        decode_body(&data)
    }

    /// Update an alert; only the provided fields are sent.
    pub async fn update_alert(
        &self,
        alert_id: &str,
        params: UpdateAlertParams,
    ) -> Result<Value, ClientError> {
        self.update_alert_inner(alert_id, params)
            .await
            .map_err(|e| e.context("update alert"))
    }

    async fn update_alert_inner(
        &self,
        alert_id: &str,
        params: UpdateAlertParams,
    ) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?.to_string();
        require_alert_id(alert_id)?;

        let mut body = serde_json::Map::new();
        if let Some(name) = params.name {
            body.insert("name".to_string(), Value::String(name));
        }
        if let Some(description) = params.description {
            body.insert("description".to_string(), Value::String(description));
        }
        if let Some(color) = params.color {
            body.insert("color".to_string(), Value::String(color));
        }
        if !params.languages.is_empty() {
            body.insert("languages".to_string(), serde_json::json!(params.languages));
        }
        if !params.countries.is_empty() {
            body.insert("countries".to_string(), serde_json::json!(params.countries));
        }
        if !params.sources.is_empty() {
            body.insert("sources".to_string(), serde_json::json!(params.sources));
        }
        if !params.blocked_sites.is_empty() {
            body.insert(
                "blocked_sites".to_string(),
                serde_json::json!(params.blocked_sites),
            );
        }
        if let Some(noise_detection) = params.noise_detection {
            body.insert("noise_detection".to_string(), Value::Bool(noise_detection));
        }

        match params.query_type.as_deref() {
            Some("basic") => {
                let query = Query::basic(
                    params.included_keywords,
                    params.required_keywords,
                    params.excluded_keywords,
                );
                body.insert(
                    "query".to_string(),
                    serde_json::to_value(query)
                        .map_err(|e| ClientError::Serialization(e.to_string()))?,
                );
            }
            Some("advanced") => {
                let query_string = params.query_string.filter(|q| !q.is_empty()).ok_or_else(|| {
                    ClientError::Validation(
                        "query string is required for advanced queries".to_string(),
                    )
                })?;
                body.insert(
                    "query".to_string(),
                    serde_json::to_value(Query::advanced(query_string))
                        .map_err(|e| ClientError::Serialization(e.to_string()))?,
                );
            }
            Some(other) => {
                return Err(ClientError::Validation(format!(
                    "unsupported query type: {other}"
                )));
            }
            None => {}
        }

        info!(alert_id, "updating alert");
        let path = format!("/accounts/{account_id}/alerts/{alert_id}");
        let data = self
            .transport
            .execute("PUT", &path, Some(Value::Object(body)))
            .await?;
        decode_body(&data)
    }

    /// Pause monitoring for an alert.
    pub async fn pause_alert(&self, alert_id: &str) -> Result<Value, ClientError> {
        self.toggle_alert(alert_id, "pause")
            .await
            .map_err(|e| e.context("pause alert"))
    }

    /// Resume monitoring for a paused alert.
    pub async fn unpause_alert(&self, alert_id: &str) -> Result<Value, ClientError> {
        self.toggle_alert(alert_id, "unpause")
            .await
            .map_err(|e| e.context("unpause alert"))
    }

    async fn toggle_alert(&self, alert_id: &str, action: &str) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?;
        require_alert_id(alert_id)?;

        info!(alert_id, action, "toggling alert");
        let path = format!("/accounts/{account_id}/alerts/{alert_id}/{action}");
        let data = self.transport.execute("POST", &path, None).await?;
        decode_body(&data)
    }

    /// Fetch mentions for an alert with optional filters.
    pub async fn fetch_mentions(
        &self,
        alert_id: &str,
        filters: MentionFilters,
    ) -> Result<Value, ClientError> {
        self.fetch_mentions_inner(alert_id, filters)
            .await
            .map_err(|e| e.context("fetch mentions"))
    }

    async fn fetch_mentions_inner(
        &self,
        alert_id: &str,
        filters: MentionFilters,
    ) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?;
        require_alert_id(alert_id)?;

        let mut pairs = Vec::new();
        push_opt(&mut pairs, "since_id", filters.since_id);
        push_opt(&mut pairs, "before_date", filters.before_date);
        push_opt(&mut pairs, "not_before_date", filters.not_before_date);
        push_opt(&mut pairs, "limit", filters.limit);
        push_opt(&mut pairs, "source", filters.source);
        push_opt(&mut pairs, "unread", filters.unread);
        push_opt(&mut pairs, "favorite", filters.favorite);
        push_opt(&mut pairs, "folder", filters.folder);
        push_all(&mut pairs, "tone", &filters.tone);
        push_all(&mut pairs, "countries", &filters.countries);
        push_all(&mut pairs, "languages", &filters.languages);
        push_opt(&mut pairs, "include_children", filters.include_children);
        push_opt(&mut pairs, "sort", filters.sort);
        push_opt(&mut pairs, "timezone", filters.timezone);
        push_opt(&mut pairs, "q", filters.q);
        push_opt(&mut pairs, "cursor", filters.cursor);

        let path = format!(
            "/accounts/{account_id}/alerts/{alert_id}/mentions{}",
            build_query(&pairs)
        );
        let data = self.transport.execute("GET", &path, None).await?;
        decode_body(&data)
    }

    /// Fetch aggregated statistics for one or more alerts.
    pub async fn fetch_alert_stats(&self, params: StatsParams) -> Result<Value, ClientError> {
        self.fetch_alert_stats_inner(params)
            .await
            .map_err(|e| e.context("fetch alert stats"))
    }

    async fn fetch_alert_stats_inner(&self, params: StatsParams) -> Result<Value, ClientError> {
        let account_id = self.require_account_id()?;
        if params.alerts.is_empty() {
            return Err(ClientError::Validation(
                "at least one alert ID is required".to_string(),
            ));
        }

        let mut pairs = Vec::new();
        push_all(&mut pairs, "alerts[]", &params.alerts);
        push_opt(&mut pairs, "from", params.from);
        push_opt(&mut pairs, "to", params.to);
        push_opt(&mut pairs, "timezone", params.timezone);
        push_opt(&mut pairs, "interval", params.interval);
        push_opt(&mut pairs, "favorite", params.favorite);
        push_opt(&mut pairs, "important", params.important);
        push_opt(&mut pairs, "week_day_stats", params.week_day_stats);
        push_opt(
            &mut pairs,
            "week_day_by_hour_stats",
            params.week_day_by_hour_stats,
        );
        push_opt(&mut pairs, "influencers", params.influencers);
        push_opt(
            &mut pairs,
            "reach_per_interval_stats",
            params.reach_per_interval_stats,
        );
        push_opt(
            &mut pairs,
            "author_influence.score",
            params.author_influence_score,
        );
        push_all(&mut pairs, "tones[]", &params.tones);
        push_all(&mut pairs, "languages[]", &params.languages);
        push_all(&mut pairs, "sources[]", &params.sources);
        push_all(&mut pairs, "countries[]", &params.countries);
        push_all(&mut pairs, "tags[]", &params.tags);
        if let Some(country_stats) = &params.country_stats {
            pairs.push(("country_stats".to_string(), country_stats.as_param()));
        }

        let path = format!("/accounts/{account_id}/stats{}", build_query(&pairs));
        let data = self.transport.execute("GET", &path, None).await?;
        decode_body(&data)
    }
}

fn require_alert_id(alert_id: &str) -> Result<(), ClientError> {
    if alert_id.is_empty() {
        return Err(ClientError::Validation("alert ID is required".to_string()));
    }
    Ok(())
}

fn push_opt<T: ToString>(pairs: &mut Vec<(String, String)>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((key.to_string(), value.to_string()));
    }
}

fn push_all<T: ToString>(pairs: &mut Vec<(String, String)>, key: &str, values: &[T]) {
    for value in values {
        pairs.push((key.to_string(), value.to_string()));
    }
}

fn build_query(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    format!("?{}", serializer.finish())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
