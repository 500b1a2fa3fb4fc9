use reqwest::header::{ACCEPT, AUTHORIZATION};
use scraper_core::{Channel, ClientError, Transcript};
use scraper_logging::{scraper_debug, scraper_warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::http::{describe_transport_error, HttpSettings};

const CHANNELS_TABLE: &str = "channels";
const TRANSCRIPTS_TABLE: &str = "transcripts";

/// Read-only access to the record store. No ordering is promised; an empty
/// table yields an empty vector.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_channels(&self) -> Result<Vec<Channel>, ClientError>;

    /// Transcripts whose `channel_id` equals `channel_id` exactly.
    async fn list_transcripts(&self, channel_id: &str) -> Result<Vec<Transcript>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`RecordStore`] over the store's PostgREST interface (`/rest/v1/{table}`).
#[derive(Debug, Clone)]
pub struct RestRecordStore {
    rest_root: Url,
    api_key: String,
    client: reqwest::Client,
}

impl RestRecordStore {
    pub fn new(
        store_url: &str,
        api_key: impl Into<String>,
        settings: &HttpSettings,
    ) -> Result<Self, ClientError> {
        let trimmed = store_url.trim().trim_end_matches('/');
        let rest_root = Url::parse(&format!("{trimmed}/rest/v1/")).map_err(|err| {
            ClientError::Configuration(format!("invalid store URL '{trimmed}': {err}"))
        })?;
        let client = settings.build_client().map_err(|err| {
            ClientError::Configuration(format!("failed to build HTTP client: {err}"))
        })?;
        Ok(Self {
            rest_root,
            api_key: api_key.into(),
            client,
        })
    }

    fn table_url(&self, table: &str, filters: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = self
            .rest_root
            .join(table)
            .map_err(|err| ClientError::Store(format!("invalid table URL: {err}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", "*");
            for (column, value) in filters {
                query.append_pair(column, value);
            }
        }
        Ok(url)
    }

    async fn select<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ClientError> {
        scraper_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ClientError::Store(describe_transport_error(&err)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ClientError::Store(describe_transport_error(&err)))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<StoreErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("store returned {status}"));
            scraper_warn!("Store query failed with {}: {}", status, message);
            return Err(ClientError::Store(message));
        }

        // PostgREST answers `null` rather than `[]` in some proxy setups.
        let rows: Option<Vec<T>> = serde_json::from_slice(&bytes)
            .map_err(|err| ClientError::Store(format!("malformed store response: {err}")))?;
        Ok(rows.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl RecordStore for RestRecordStore {
    async fn list_channels(&self) -> Result<Vec<Channel>, ClientError> {
        let url = self.table_url(CHANNELS_TABLE, &[])?;
        self.select(url).await
    }

    async fn list_transcripts(&self, channel_id: &str) -> Result<Vec<Transcript>, ClientError> {
        let url = self.table_url(TRANSCRIPTS_TABLE, &[("channel_id", format!("eq.{channel_id}"))])?;
        self.select(url).await
    }
}
