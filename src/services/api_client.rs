// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================
// No business logic here, just requests against the loan-tracker backend.
// List responses are returned as raw JSON because the backend answers with
// several shapes; normalization lives in loan_service.
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::{CreateLoanRequest, CreateUserRequest, CreateUserResponse, UpdateLoanRequest};

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            token,
        }
    }

    fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// POST /user/create-account (unauthenticated)
    pub async fn create_account(
        &self,
        request: &CreateUserRequest,
    ) -> Result<CreateUserResponse, String> {
        let url = format!("{}/user/create-account", self.base_url);
        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<CreateUserResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// POST /payable/loan
    pub async fn create_loan(&self, request: &CreateLoanRequest) -> Result<Value, String> {
        let url = format!("{}/payable/loan", self.base_url);
        let mut builder = Request::post(&url);
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let response = builder
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// GET /payable/loan-list/{phoneNumber}
    pub async fn loan_list(&self, phone_number: &str) -> Result<Value, String> {
        self.get_json(&format!("{}/payable/loan-list/{}", self.base_url, phone_number))
            .await
    }

    /// GET /payable/receivable-list/{phoneNumber}
    pub async fn receivable_list(&self, phone_number: &str) -> Result<Value, String> {
        self.get_json(&format!(
            "{}/payable/receivable-list/{}",
            self.base_url, phone_number
        ))
        .await
    }

    /// PATCH /payable/update-loan/{transactionId}, with an optional
    /// `fullPay=true` query flag.
    pub async fn update_loan(
        &self,
        transaction_id: &str,
        request: &UpdateLoanRequest,
        full_pay: bool,
    ) -> Result<Value, String> {
        let mut url = format!("{}/payable/update-loan/{}", self.base_url, transaction_id);
        if full_pay {
            url.push_str("?fullPay=true");
        }

        let mut builder = Request::patch(&url);
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let response = builder
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn get_json(&self, url: &str) -> Result<Value, String> {
        let mut builder = Request::get(url);
        if let Some(bearer) = self.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}
