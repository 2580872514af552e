//! Reqwest-based gateway client

use kesspay_core::{
    validate_create_order, validate_query_order, CreateOrderRequest, GatewayResponse, OrderData,
    QueryOrderRequest, Signable,
};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::error::WebPayHttpError;

/// Single gateway endpoint every service posts to; the `service` field of the
/// request selects the operation.
pub const GATEWAY_PATH: &str = "/api/mch/v1/gateway";

/// Client for the KessPay WebPay gateway
///
/// Validates and signs each request, posts it as JSON with HTTP basic auth,
/// and parses the `success`/`data` envelope.
///
/// # Example
///
/// ```ignore
/// use kesspay_core::CreateOrderRequest;
/// use kesspay_http::{GatewayConfig, WebPayClient};
///
/// let client = WebPayClient::new(GatewayConfig::from_env()?);
///
/// let order = CreateOrderRequest::new("958689692346", "TR5673455626", 16.5, "USD");
/// let response = client.create_order(order).await?;
/// ```
pub struct WebPayClient {
    client: Client,
    config: GatewayConfig,
}

impl WebPayClient {
    /// Create a client with the default reqwest settings (30 s timeout).
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap(),
            config,
        }
    }

    /// Create a client with custom reqwest settings.
    pub fn with_client(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// The configured gateway base URL.
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Seller code from the configuration, for callers building orders.
    pub fn seller_code(&self) -> &str {
        &self.config.seller_code
    }

    /// Create a preorder and obtain the buyer's payment link.
    pub async fn create_order(
        &self,
        order: CreateOrderRequest,
    ) -> Result<GatewayResponse<OrderData>, WebPayHttpError> {
        validate_create_order(&order)?;
        self.execute(order).await
    }

    /// Query an order's payment status by merchant order id.
    pub async fn query_order(
        &self,
        out_trade_no: impl Into<String>,
    ) -> Result<GatewayResponse<OrderData>, WebPayHttpError> {
        let query = QueryOrderRequest::new(out_trade_no);
        validate_query_order(&query)?;
        self.execute(query).await
    }

    /// Sign a request and post it to the gateway endpoint.
    async fn execute<T>(&self, mut request: T) -> Result<GatewayResponse<OrderData>, WebPayHttpError>
    where
        T: Signable + Serialize,
    {
        kesspay_sign::sign(&mut request, &self.config.secret_key)?;

        let url = format!("{}{}", self.config.api_url, GATEWAY_PATH);
        tracing::debug!(url = %url, "posting signed gateway request");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .json(&request)
            .send()
            .await?;

        let envelope: GatewayResponse<OrderData> = response.json().await?;
        tracing::debug!(success = %envelope.success, "gateway responded");

        Ok(envelope)
    }
}
