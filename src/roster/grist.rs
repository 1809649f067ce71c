/// Grist roster client using reqwest
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use super::RosterSource;
use crate::config::GristConfig;
use crate::error::FetchError;
use crate::models::RosterRecord;

/// Reads table rows through the Grist REST API.
///
/// One request per call, no retries.
#[derive(Clone)]
pub struct GristRoster {
    api_key: Option<String>,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for GristRoster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GristRoster")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Option<Vec<Value>>,
}

impl GristRoster {
    /// Create a client for the configured Grist server
    pub fn new(config: &GristConfig, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                detail: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            client,
        })
    }

    fn records_url(&self, doc_id: &str, table_id: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport {
                detail: format!("base URL cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(["api", "docs", doc_id, "tables", table_id, "records"]);
        Ok(url)
    }
}

impl RosterSource for GristRoster {
    async fn fetch(&self, doc_id: &str, table_id: &str) -> Result<Vec<RosterRecord>, FetchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("GRIST_API_KEY not found");
            return Err(FetchError::MissingCredential("GRIST_API_KEY"));
        };

        if doc_id.trim().is_empty() || table_id.trim().is_empty() {
            return Err(FetchError::Transport {
                detail: "document id and table id are required".to_string(),
            });
        }

        let url = self.records_url(doc_id, table_id)?;
        info!("Fetching roster from Grist table {}/{}", doc_id, table_id);

        let response = self
            .client
            .get(url)
            .bearer_auth(api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                detail: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| FetchError::Transport {
            detail: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            error!("Grist API error: status {}", status.as_u16());
            return Err(FetchError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecordsResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Transport {
                detail: format!("failed to parse response: {}", e),
            })?;

        let records: Vec<RosterRecord> = parsed
            .records
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<RosterRecord>(raw) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("Ignoring unreadable roster row: {}", e);
                    None
                }
            })
            .collect();

        info!("Fetched {} roster record(s)", records.len());
        Ok(records)
    }
}
