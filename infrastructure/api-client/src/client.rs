use std::{sync::Arc, time::Duration};

use domain_maintenance::model::vo::Session;
use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::{config::ApiConfig, error::ApiError};

/// Backend client. Every call carries the bearer token of its session, and a
/// 401 answer signs the session out.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: Url, session: Arc<Session>) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn from_config(config: &ApiConfig, session: Arc<Session>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self::new(http, base_url(config.base_url())?, session))
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        self.send(self.http.get(self.endpoint(path)?)).await
    }

    pub(crate) async fn get_with<Q, T>(&self, path: &str, query: &Q) -> anyhow::Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.get(self.endpoint(path)?).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> anyhow::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.post(self.endpoint(path)?).json(body)).await
    }

    /// POST without a body, for action endpoints.
    pub(crate) async fn post_action<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        self.send(self.http.post(self.endpoint(path)?)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> anyhow::Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.put(self.endpoint(path)?).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> anyhow::Result<T> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url().path());
        if status == StatusCode::UNAUTHORIZED {
            warn!("Backend rejected the session token, signing out.");
            self.session.clear().await;
            return Err(ApiError::Unauthorized.into());
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body).into());
        }
        Ok(response.json().await?)
    }
}

/// Base url with a trailing slash so that joined paths keep any prefix.
fn base_url(raw: &str) -> anyhow::Result<Url> {
    let raw = raw.trim();
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}
