use async_trait::async_trait;
use commentdeck_core::config::SidebarConfig;
use commentdeck_core::error::{CommentDeckError, Result};
use commentdeck_core::models::SiteRecord;
use serde::Deserialize;
use tracing::debug;

/// Response envelope of `GET /api/v2/sites`. Extra fields (`count`, ...) are
/// ignored; the record array is handed back as-is.
#[derive(Debug, Deserialize)]
struct SitesResponse {
    sites: Vec<SiteRecord>,
}

/// Admin API surface the sidebar consumes.
///
/// One operation for now: fetch the current site collection. Session and
/// server identity are ambient, captured at client construction.
#[async_trait]
pub trait SiteApi: Send + Sync {
    async fn site_get(&self) -> Result<Vec<SiteRecord>>;
}

/// Thin reqwest wrapper over the comment server's admin API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &SidebarConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.server_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SiteApi for ApiClient {
    async fn site_get(&self) -> Result<Vec<SiteRecord>> {
        let url = self.endpoint("/api/v2/sites");
        debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CommentDeckError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SitesResponse = response.json().await?;
        debug!("Fetched {} sites from {}", body.sites.len(), url);
        Ok(body.sites)
    }
}
