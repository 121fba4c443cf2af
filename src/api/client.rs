//! API client
//!
//! Typed accessors over the resource table, plus the session identifiers
//! discovered along the way.

use super::resources::{self, Resource};
use crate::auth::Authenticator;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::models::{decode_all, decode_first, decode_records, ApiEndpoint, ClientInfo, Record};
use crate::template::{render_path, PathParams};
use crate::types::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifiers seen in earlier responses, kept for reuse.
///
/// These are last-seen values, not authoritative state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIds {
    pub client_id: Option<String>,
    pub connector_id: Option<String>,
    pub file_id: Option<String>,
    pub property_id: Option<String>,
}

/// Client for the OpsInsights API
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    session: SessionIds,
}

impl ApiClient {
    /// Create a client for the authenticator's service
    pub fn new(authenticator: Arc<Authenticator>) -> Result<Self> {
        Self::with_config(authenticator, HttpClientConfig::default())
    }

    /// Create a client with custom transport settings
    pub fn with_config(authenticator: Arc<Authenticator>, config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::with_config(authenticator, config)?,
            session: SessionIds::default(),
        })
    }

    /// The authenticator supplying bearer tokens
    pub fn authenticator(&self) -> &Arc<Authenticator> {
        self.http.authenticator()
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Issue a request below `/api/v1` and return the envelope as received
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Envelope> {
        self.http.request(method, path, body).await
    }

    /// GET a path below `/api/v1`
    pub async fn get(&self, path: &str) -> Result<Envelope> {
        self.http.get(path).await
    }

    /// POST a raw JSON body to a path below `/api/v1`
    pub async fn post(&self, path: &str, body: &Value) -> Result<Envelope> {
        self.http.post(path, body).await
    }

    // ========================================================================
    // Generic fetch engine
    // ========================================================================

    /// Fetch a resource and narrow its data with `narrow`.
    ///
    /// The data reaches `narrow` only when the envelope reports
    /// `success` with status code 200.
    pub async fn fetch_with<T, F>(
        &self,
        resource: &Resource,
        params: &PathParams,
        narrow: F,
    ) -> Result<T>
    where
        F: FnOnce(Vec<Value>) -> Result<T>,
    {
        let path = render_path(resource.template, params)?;
        debug!(resource = resource.name, %path, "Fetching resource");

        let envelope = self.http.get(&path).await?;
        if !envelope.is_ok() {
            warn!(
                resource = resource.name,
                success = envelope.success,
                status_code = envelope.status_code,
                "Service reported a failure"
            );
        }

        narrow(envelope.into_data(resource.name)?)
    }

    /// Fetch a resource as a list of records
    pub async fn fetch(&self, resource: &Resource, params: &PathParams) -> Result<Vec<Record>> {
        self.fetch_with(resource, params, decode_records).await
    }

    /// Fetch a client/connector scoped resource as a list of records
    pub async fn fetch_scoped(
        &self,
        resource: &Resource,
        client_id: &str,
        connector_id: &str,
        value: &str,
    ) -> Result<Vec<Record>> {
        let params = resource.params(client_id, connector_id, value);
        self.fetch(resource, &params).await
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Look up the caller's own client account.
    ///
    /// Caches the client ID and the first connector ID.
    pub async fn my_client_info(&mut self) -> Result<ClientInfo> {
        let info: ClientInfo = self
            .fetch_with(&resources::CLIENT_INFO, &PathParams::new(), |data| {
                decode_first(data, "client info")
            })
            .await?;

        self.session.client_id = Some(info.client_id.clone());
        if let Some(connector_id) = info.first_connector_id() {
            self.session.connector_id = Some(connector_id.to_string());
        }

        Ok(info)
    }

    /// List every endpoint the service offers
    pub async fn list_api_endpoints(&self) -> Result<Vec<ApiEndpoint>> {
        self.fetch_with(&resources::ENDPOINT_CATALOG, &PathParams::new(), |data| {
            decode_all(data, "endpoint")
        })
        .await
    }

    /// Find files by property address
    pub async fn file_lookup_by_address(
        &mut self,
        address: &str,
        client_id: &str,
        connector_id: &str,
    ) -> Result<Vec<Record>> {
        let records = self
            .fetch_scoped(&resources::FILE_BY_ADDRESS, client_id, connector_id, address)
            .await?;
        self.remember_file(&records);
        Ok(records)
    }

    /// Look a file up by its file ID
    pub async fn file_lookup_by_file_id(
        &mut self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        let records = self
            .fetch_scoped(&resources::FILE_BY_ID, client_id, connector_id, file_id)
            .await?;
        self.remember_file(&records);
        Ok(records)
    }

    /// Find files by the lender's loan number
    pub async fn file_lookup_by_lender_loan_number(
        &mut self,
        client_id: &str,
        connector_id: &str,
        loan_number: &str,
    ) -> Result<Vec<Record>> {
        let records = self
            .fetch_scoped(
                &resources::FILE_BY_LENDER_NUMBER,
                client_id,
                connector_id,
                loan_number,
            )
            .await?;
        self.remember_file(&records);
        Ok(records)
    }

    pub async fn file_partners(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::FILE_PARTNERS, client_id, connector_id, file_id)
            .await
    }

    pub async fn buyer_info(
        &self,
        client_id: &str,
        connector_id: &str,
        buyer_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::BUYER_INFO, client_id, connector_id, buyer_id)
            .await
    }

    pub async fn disbursement_info(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::DISBURSEMENT_INFO, client_id, connector_id, file_id)
            .await
    }

    /// Look a property up by its property ID; caches the property ID
    pub async fn property_info(
        &mut self,
        client_id: &str,
        connector_id: &str,
        property_id: &str,
    ) -> Result<Vec<Record>> {
        let records = self
            .fetch_scoped(&resources::PROPERTY_INFO, client_id, connector_id, property_id)
            .await?;
        if let Some(id) = records.first().and_then(|r| r.text("property_id")) {
            self.session.property_id = Some(id);
        }
        Ok(records)
    }

    pub async fn recording_info(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::RECORDING_INFO, client_id, connector_id, file_id)
            .await
    }

    pub async fn seller_info(
        &self,
        client_id: &str,
        connector_id: &str,
        seller_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::SELLER_INFO, client_id, connector_id, seller_id)
            .await
    }

    pub async fn settlement_fees(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::SETTLEMENT_FEES, client_id, connector_id, file_id)
            .await
    }

    pub async fn settlement_info(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::SETTLEMENT_INFO, client_id, connector_id, file_id)
            .await
    }

    pub async fn policy_info(
        &self,
        client_id: &str,
        connector_id: &str,
        file_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::POLICY_INFO, client_id, connector_id, file_id)
            .await
    }

    /// Find referral agents by name (custom endpoint)
    pub async fn referral_agent_lookup(
        &self,
        client_id: &str,
        connector_id: &str,
        name: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(&resources::REFERRAL_AGENT_LOOKUP, client_id, connector_id, name)
            .await
    }

    /// Sales volume summary for a referral agent (custom endpoint)
    pub async fn referral_agent_sales_volume(
        &self,
        client_id: &str,
        connector_id: &str,
        agent_id: &str,
    ) -> Result<Vec<Record>> {
        self.fetch_scoped(
            &resources::REFERRAL_AGENT_SALES_VOLUME,
            client_id,
            connector_id,
            agent_id,
        )
        .await
    }

    // ========================================================================
    // Session identifiers
    // ========================================================================

    /// All cached identifiers
    pub fn session(&self) -> &SessionIds {
        &self.session
    }

    /// Client ID cached by [`ApiClient::my_client_info`]
    pub fn client_id(&self) -> Option<&str> {
        self.session.client_id.as_deref()
    }

    /// Connector ID cached by [`ApiClient::my_client_info`]
    pub fn connector_id(&self) -> Option<&str> {
        self.session.connector_id.as_deref()
    }

    /// File ID from the most recent file lookup that returned one
    pub fn file_id(&self) -> Option<&str> {
        self.session.file_id.as_deref()
    }

    /// Property ID from the most recent property lookup that returned one
    pub fn property_id(&self) -> Option<&str> {
        self.session.property_id.as_deref()
    }

    fn remember_file(&mut self, records: &[Record]) {
        if let Some(id) = records.first().and_then(|r| r.text("file_id")) {
            self.session.file_id = Some(id);
        }
    }
}
