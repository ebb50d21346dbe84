//! Wire models for the Mention API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source types the upstream accepts for keyword alerts.
pub const VALID_SOURCES: [&str; 12] = [
    "web",
    "news",
    "blogs",
    "forums",
    "twitter",
    "facebook",
    "instagram",
    "linkedin",
    "youtube",
    "reddit",
    "pinterest",
    "tiktok",
];

pub fn is_valid_source(source: &str) -> bool {
    VALID_SOURCES.contains(&source)
}

/// Alert query. `basic` queries carry keyword lists, `advanced` queries a
/// boolean query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(rename = "type")]
    pub query_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_keywords: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<String>,
}

impl Query {
    pub fn basic(
        included_keywords: Vec<String>,
        required_keywords: Vec<String>,
        excluded_keywords: Vec<String>,
    ) -> Self {
        Self {
            query_type: "basic".to_string(),
            included_keywords,
            required_keywords,
            excluded_keywords,
            query_string: None,
        }
    }

    pub fn advanced(query_string: impl Into<String>) -> Self {
        Self {
            query_type: "advanced".to_string(),
            query_string: Some(query_string.into()),
            ..Self::default()
        }
    }
}

/// A monitoring alert. Created only by the upstream API; never mutated
/// locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub query: Query,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /accounts/{id}/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    pub name: String,

    pub query: Query,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub countries: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocked_sites: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_detection: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAlertResponse {
    #[serde(default)]
    pub alert: Alert,
}

/// Selectable alert options: language code -> language, country code ->
/// display name, source code -> source. Read-only snapshot, fetched per
/// call and never cached here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub alert_languages: HashMap<String, Language>,

    #[serde(default)]
    pub alert_countries: HashMap<String, String>,

    #[serde(default)]
    pub alert_sources: HashMap<String, Source>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub icons: HashMap<String, String>,

    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountResponse {
    #[serde(default)]
    pub account: Account,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub subscription: Subscription,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub advanced_query_access: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,
}
