/// VK wall client using reqwest
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};
use url::Url;

use super::PublishGateway;
use crate::config::VkConfig;
use crate::error::PublishError;
use crate::models::PostReceipt;

/// Posts to a wall through the VK `wall.post` method.
///
/// Posts on behalf of the community (`from_group=1`). One request per call.
#[derive(Clone)]
pub struct VkWall {
    access_token: Option<String>,
    api_url: Url,
    api_version: String,
    client: Client,
}

impl std::fmt::Debug for VkWall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VkWall")
            .field("api_url", &self.api_url.as_str())
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct WallPostResponse {
    #[serde(default)]
    response: Option<WallPostBody>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct WallPostBody {
    #[serde(default)]
    post_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

impl VkWall {
    /// Create a client for the configured VK endpoint
    pub fn new(config: &VkConfig, timeout: Duration) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PublishError::Transport {
                detail: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            access_token: config.access_token.clone(),
            api_url: config.api_url.clone(),
            api_version: config.api_version.clone(),
            client,
        })
    }
}

impl PublishGateway for VkWall {
    async fn publish(&self, text: &str, owner_id: i64) -> Result<PostReceipt, PublishError> {
        let Some(access_token) = self.access_token.as_deref() else {
            error!("VK_ACCESS_TOKEN not found");
            return Err(PublishError::MissingCredential("VK_ACCESS_TOKEN"));
        };

        info!(
            "Posting to VK wall {} ({} characters)",
            owner_id,
            text.chars().count()
        );

        let owner_id = owner_id.to_string();
        let params = [
            ("message", text),
            ("owner_id", owner_id.as_str()),
            ("from_group", "1"),
            ("access_token", access_token),
            ("v", self.api_version.as_str()),
        ];

        let response = self
            .client
            .post(self.api_url.clone())
            .form(&params)
            .send()
            .await
            .map_err(|e| PublishError::Transport {
                detail: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| PublishError::Transport {
            detail: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            error!("VK API HTTP error: status {}", status.as_u16());
            return Err(PublishError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: WallPostResponse =
            serde_json::from_str(&body).map_err(|e| PublishError::Transport {
                detail: format!("failed to parse response: {}", e),
            })?;

        if let Some(api_error) = parsed.error {
            error!(
                "VK API returned error {}: {}",
                api_error.error_code, api_error.error_msg
            );
            return Err(PublishError::ApiLevel {
                code: api_error.error_code,
                message: api_error.error_msg,
            });
        }

        let post_id = parsed
            .response
            .and_then(|body| body.post_id)
            .ok_or_else(|| PublishError::Transport {
                detail: "no post_id in response".to_string(),
            })?;

        info!("Posted to VK wall, post id {}", post_id);
        Ok(PostReceipt { post_id })
    }
}
