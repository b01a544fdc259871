//! HTTP client for the MIMIC-IV statistics API.
//!
//! Every endpoint is plain fetch-and-decode: no retries, no caching. The base
//! URL comes from [`Settings`], never from module state.

pub mod error;
pub mod types;

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};
use urlencoding::encode;

pub use error::{ApiError, LOAD_FAILED};
pub use types::{
    Admission, ChatMessage, Diagnosis, HealthStatus, Patient, PatientList, PatientRecord,
    Procedure,
};

use crate::{
    charts::{
        age::AgeDistributionEnvelope, heatmap::HeatmapEnvelope, DashboardStats, HeatmapCell,
        IcuStay, IcuStayEnvelope, TransferGraph,
    },
    config::Settings,
    hierarchy::{medications::MedicationsEnvelope, MedicationRoute, TreeEnvelope, TreeNode},
};

use self::{
    error::detail_from_body,
    types::{ChatReply, ChatRequest, SummaryReply},
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    health_timeout: Duration,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let raw = format!("{}/", settings.api_base_url.trim_end_matches('/'));
        let base = Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw.clone()))?;
        let http = Client::builder()
            .user_agent(concat!("mimic-insight/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|source| ApiError::Transport {
                endpoint: raw,
                source,
            })?;
        Ok(Self {
            http,
            base,
            health_timeout: settings.health_timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve an API path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let path = path.trim_start_matches('/');
        self.base
            .join(path)
            .map_err(|_| ApiError::InvalidUrl(format!("{}{path}", self.base)))
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint("health")?;
        let request = self.http.get(url.clone()).timeout(self.health_timeout);
        let response = send(request, &url).await?;
        decode(response, &url).await
    }

    /// `true` when the API answers its health probe in time.
    pub async fn is_up(&self) -> bool {
        match self.health().await {
            Ok(_) => true,
            Err(err) => {
                warn!(%err, "health probe failed");
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("api/dashboard/stats", &[]).await
    }

    /// Diagnosis hierarchy, pre-filtered upstream at `min_count`.
    #[instrument(skip(self))]
    pub async fn diagnosis_icicle(&self, min_count: u64) -> Result<TreeNode, ApiError> {
        let min_count = min_count.to_string();
        let envelope: TreeEnvelope = self
            .get_json(
                "api/charts/diagnosis-icicle",
                &[("min_count", min_count.as_str())],
            )
            .await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self))]
    pub async fn medications(&self) -> Result<Vec<MedicationRoute>, ApiError> {
        let envelope: MedicationsEnvelope = self
            .get_json("api/charts/medications-sunburst", &[])
            .await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self))]
    pub async fn transfers(&self) -> Result<TransferGraph, ApiError> {
        self.get_json("api/charts/hospital-transfers-chord", &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn age_distribution(
        &self,
        detailed: bool,
    ) -> Result<AgeDistributionEnvelope, ApiError> {
        let detailed = if detailed { "true" } else { "false" };
        self.get_json("api/charts/age-distribution", &[("detailed", detailed)])
            .await
    }

    #[instrument(skip(self))]
    pub async fn admission_heatmap(&self) -> Result<Vec<HeatmapCell>, ApiError> {
        let envelope: HeatmapEnvelope = self.get_json("api/charts/admission-heatmap", &[]).await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self))]
    pub async fn icu_stays(&self) -> Result<Vec<IcuStay>, ApiError> {
        let envelope: IcuStayEnvelope = self.get_json("api/charts/icu-stay-duration", &[]).await?;
        Ok(envelope.data)
    }

    /// Look up one patient by the identifier typed into the search box.
    #[instrument(skip(self))]
    pub async fn patient(&self, subject_id: &str) -> Result<PatientRecord, ApiError> {
        let path = format!("api/patients/{}", encode(subject_id.trim()));
        self.get_json(&path, &[]).await
    }

    #[instrument(skip(self))]
    pub async fn patients(&self, limit: usize) -> Result<PatientList, ApiError> {
        let limit = limit.to_string();
        self.get_json("api/patients/", &[("limit", limit.as_str())])
            .await
    }

    /// Send the whole conversation; the reply is the assistant's next turn.
    #[instrument(skip(self, history), fields(turns = history.len()))]
    pub async fn chat(&self, history: &[ChatMessage]) -> Result<String, ApiError> {
        let reply: ChatReply = self.post_json("chat/", &ChatRequest { history }).await?;
        Ok(reply.response)
    }

    #[instrument(skip(self, record), fields(subject_id = record.patient.subject_id))]
    pub async fn summarize_patient(&self, record: &PatientRecord) -> Result<String, ApiError> {
        let reply: SummaryReply = self.post_json("api/summary/patient", record).await?;
        Ok(reply.summary)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().copied());
        }
        let response = send(self.http.get(url.clone()), &url).await?;
        decode(response, &url).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        let response = send(self.http.post(url.clone()).json(body), &url).await?;
        decode(response, &url).await
    }
}

async fn send(request: reqwest::RequestBuilder, url: &Url) -> Result<Response, ApiError> {
    debug!(%url, "requesting");
    request.send().await.map_err(|source| ApiError::Transport {
        endpoint: url.path().to_string(),
        source,
    })
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ApiError> {
    let endpoint = url.path().to_string();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| ApiError::Transport {
            endpoint: endpoint.clone(),
            source,
        })?;
    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
            detail: detail_from_body(&body),
        });
    }
    serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
}
