//! REST backend client

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use activityhub_core::config::BackendConfig;

use crate::error::ClientError;

pub(crate) const ACTIVITIES_PATH: &str = "/actividades";
pub(crate) const EVIDENCE_PATH: &str = "/evidencias";
pub(crate) const NOTIFICATIONS_PATH: &str = "/notificaciones";
pub(crate) const MARK_ALL_READ_PATH: &str = "/notificaciones/leer-todas";

pub(crate) fn participation_path(activity_id: i64) -> String {
    format!("/participaciones/actividad/{activity_id}")
}

pub(crate) fn notification_path(id: i64) -> String {
    format!("{NOTIFICATIONS_PATH}/{id}")
}

pub(crate) fn mark_read_path(id: i64) -> String {
    format!("{NOTIFICATIONS_PATH}/{id}/leida")
}

/// HTTP client for the ActivityHub REST backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl BackendClient {
    /// Create a new client from configuration
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Absolute URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON list. 404 is reported as [`ClientError::NotFound`].
    pub async fn get_list(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        let response = self.request(Method::GET, path).send().await?;
        let status = response.status();
        check_status(status, path)?;

        let body: Value = response.json().await?;
        into_list(body, path)
    }

    /// GET a JSON list, treating a missing endpoint as an empty list
    pub async fn get_list_or_empty(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        match self.get_list(path).await {
            Err(ClientError::NotFound(_)) => {
                tracing::debug!("Endpoint {} not found, using empty list", path);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Send a body-less request and ignore the response body
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ClientError> {
        let response = self.request(method, path).send().await?;
        check_status(response.status(), path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.client.request(method, self.url(path));
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn check_status(status: StatusCode, path: &str) -> Result<(), ClientError> {
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound(path.to_string()));
    }
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        });
    }
    Ok(())
}

/// Accept a bare array or an object wrapping it under `data`/`Data`
fn into_list(body: Value, path: &str) -> Result<Vec<Value>, ClientError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut obj) => match obj.remove("data").or_else(|| obj.remove("Data")) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ClientError::UnexpectedPayload(path.to_string())),
        },
        Value::Null => Ok(Vec::new()),
        _ => Err(ClientError::UnexpectedPayload(path.to_string())),
    }
}
