//! Wire types for the KessPay WebPay gateway.
//!
//! Field names follow the gateway's JSON contract exactly; every request kind
//! carries a fixed `service` name, the `sign`/`sign_type` pair, and its
//! business fields. Responses arrive wrapped in a `success`/`data` envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signable::{SignField, Signable, SIGN_TYPE_MD5};

/// Gateway service name for creating a preorder.
pub const SERVICE_CREATE_ORDER: &str = "webpay.acquire.createorder";

/// Gateway service name for querying an order's payment status.
pub const SERVICE_QUERY_ORDER: &str = "webpay.acquire.queryorder";

/// Request to create a preorder and obtain a payment link for the buyer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderRequest {
    /// Gateway service name.
    pub service: String,

    /// Generated signature based on `sign_type` and the API secret key.
    /// Absent until the request is signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,

    /// Signature scheme, always `MD5` for this gateway.
    pub sign_type: String,

    pub seller_code: String,

    /// Unique merchant order id.
    pub out_trade_no: String,

    /// Order title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Total amount with two decimals.
    pub total_amount: f64,

    /// Currency code, e.g. `USD` or `KHR`.
    pub currency: String,

    /// Product detail lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<OrderDetail>,
}

impl CreateOrderRequest {
    /// Build an unsigned order request with the required business fields.
    pub fn new(
        seller_code: impl Into<String>,
        out_trade_no: impl Into<String>,
        total_amount: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            service: SERVICE_CREATE_ORDER.to_string(),
            sign: None,
            sign_type: SIGN_TYPE_MD5.to_string(),
            seller_code: seller_code.into(),
            out_trade_no: out_trade_no.into(),
            body: None,
            total_amount,
            currency: currency.into(),
            detail: Vec::new(),
        }
    }

    /// Set the order title.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a product detail line.
    pub fn with_detail(mut self, line: OrderDetail) -> Self {
        self.detail.push(line);
        self
    }
}

impl Signable for CreateOrderRequest {
    fn sign_type(&self) -> &str {
        &self.sign_type
    }

    fn sign(&self) -> Option<&str> {
        self.sign.as_deref()
    }

    fn set_sign(&mut self, signature: String) {
        self.sign = Some(signature);
    }

    fn sign_fields(&self) -> Vec<SignField<'_>> {
        let mut fields = vec![
            SignField::text("service", &self.service),
            SignField::text("sign_type", &self.sign_type),
            SignField::text("seller_code", &self.seller_code),
            SignField::text("out_trade_no", &self.out_trade_no),
            SignField::number("total_amount", self.total_amount),
            SignField::text("currency", &self.currency),
            SignField::collection("detail"),
        ];
        if let Some(body) = &self.body {
            fields.push(SignField::text("body", body));
        }
        fields
    }
}

/// Request to check an order's payment status.
///
/// The gateway reports three states: `WAITING` after the preorder is created,
/// `SUCCESS` once the buyer paid, `CLOSED` when the order expired unpaid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryOrderRequest {
    /// Gateway service name.
    pub service: String,

    /// Generated signature based on `sign_type` and the API secret key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,

    /// Signature scheme, always `MD5` for this gateway.
    pub sign_type: String,

    /// Unique merchant order id.
    pub out_trade_no: String,
}

impl QueryOrderRequest {
    pub fn new(out_trade_no: impl Into<String>) -> Self {
        Self {
            service: SERVICE_QUERY_ORDER.to_string(),
            sign: None,
            sign_type: SIGN_TYPE_MD5.to_string(),
            out_trade_no: out_trade_no.into(),
        }
    }
}

impl Signable for QueryOrderRequest {
    fn sign_type(&self) -> &str {
        &self.sign_type
    }

    fn sign(&self) -> Option<&str> {
        self.sign.as_deref()
    }

    fn set_sign(&mut self, signature: String) {
        self.sign = Some(signature);
    }

    fn sign_fields(&self) -> Vec<SignField<'_>> {
        vec![
            SignField::text("service", &self.service),
            SignField::text("sign_type", &self.sign_type),
            SignField::text("out_trade_no", &self.out_trade_no),
        ]
    }
}

/// One product line within an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetail {
    /// Product id.
    pub no: String,

    /// Product name.
    pub name: String,

    /// Unit price.
    pub price: String,

    /// Unit quantity.
    pub qty: String,

    /// Unit discount.
    pub discount: f64,
}

/// Envelope every gateway response arrives in.
///
/// The gateway reports success as the string `"true"`/`"false"`; the wire
/// form is kept as-is rather than coerced to a bool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayResponse<T> {
    pub success: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> GatewayResponse<T> {
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Waiting,
    Success,
    Closed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OrderStatus::Waiting => "WAITING",
            OrderStatus::Success => "SUCCESS",
            OrderStatus::Closed => "CLOSED",
        })
    }
}

/// Order payload returned by both the create and query services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderData {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mch_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub out_trade_no: String,

    /// Gateway transaction id; null until the buyer pays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Total amount, echoed back as a string.
    pub total_amount: String,

    pub currency: String,

    pub status: OrderStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub detail: Vec<OrderDetail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Link the buyer follows to complete payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}
