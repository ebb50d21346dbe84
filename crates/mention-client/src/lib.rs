//! # Mention Client
//!
//! Authenticated HTTP client for the Mention web-monitoring API.
//!
//! The [`transport`] module owns the request/response lifecycle and decodes
//! upstream failures into the [`ApiError`] taxonomy; [`client`] exposes the
//! narrow domain operations on top of it; [`format`] renders any failure
//! into a single human-readable string for tool callers.

pub mod api_error;
pub mod client;
pub mod error;
pub mod format;
pub mod models;
pub mod transport;

pub use api_error::{ApiError, FormErrorNode};
pub use client::{
    AdvancedAlertParams, BasicAlertParams, CountryStats, MentionClient, MentionFilters,
    StatsParams, UpdateAlertParams,
};
pub use error::ClientError;
pub use format::{format_error, truncate};
pub use models::{
    Account, AccountResponse, Alert, AppData, CreateAlertRequest, CreateAlertResponse, Group,
    Language, Query, Source, Subscription,
};
pub use transport::{decode_body, HttpTransport, Transport};
