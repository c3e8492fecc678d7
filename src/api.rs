// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The remote source of truth for accounts, payments and payers.

use reqwest::Method;
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, CONNECTION_ERROR};
use crate::models::{AccountsPage, PayableAccount, PaymentRequest, User};
use crate::period::Period;
use crate::session::Session;
use crate::utils::http_client;

/// Operations the controllers consume. Every call is a suspension point;
/// nothing else in the core blocks.
pub trait PayablesApi {
    /// `GET payable-accounts?period=P`
    fn fetch_accounts(&self, period: Period) -> Result<AccountsPage, ApiError>;

    /// `POST payable-accounts {name}`
    fn create_account(&self, name: &str) -> Result<PayableAccount, ApiError>;

    /// `POST payable-accounts/{id}/payments`
    fn pay_account(
        &self,
        account_id: i64,
        req: &PaymentRequest,
    ) -> Result<PayableAccount, ApiError>;

    /// `PUT payable-accounts/{id}/payments/{payment_id}`
    fn update_payment(
        &self,
        account_id: i64,
        payment_id: i64,
        req: &PaymentRequest,
    ) -> Result<(), ApiError>;

    /// `GET users`
    fn fetch_users(&self) -> Result<Vec<User>, ApiError>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Serialize)]
struct CreateAccountBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
    device_name: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

pub struct HttpApi {
    client: reqwest::blocking::Client,
    base_url: String,
    session: Session,
}

impl HttpApi {
    pub fn new(config: &Config, session: Session) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!(method = method.as_str(), path, "api request");
        let rb = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        match self.session.token() {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    fn send_json<T: DeserializeOwned>(&self, rb: RequestBuilder) -> Result<T, ApiError> {
        let resp = check_status(rb.send()?)?;
        Ok(resp.json::<T>()?)
    }

    /// Exchanges credentials for a bearer token.
    pub fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = LoginBody {
            email,
            password,
            device_name: "cli",
        };
        let res: LoginResponse = self.send_json(self.request(Method::POST, "login").json(&body))?;
        Ok(res.token)
    }
}

/// Maps a non-2xx response to the server's `message`, falling back to the
/// status reason phrase.
fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body: Option<serde_json::Value> = resp.json().ok();
    let message = body
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .or(status.canonical_reason())
        .unwrap_or(CONNECTION_ERROR)
        .to_string();
    warn!(status = status.as_u16(), %message, "api request rejected");
    Err(ApiError::new(message))
}

impl PayablesApi for HttpApi {
    fn fetch_accounts(&self, period: Period) -> Result<AccountsPage, ApiError> {
        let rb = self
            .request(Method::GET, "payable-accounts")
            .query(&[("period", period.to_string())]);
        self.send_json(rb)
    }

    fn create_account(&self, name: &str) -> Result<PayableAccount, ApiError> {
        let rb = self
            .request(Method::POST, "payable-accounts")
            .json(&CreateAccountBody { name });
        let env: Envelope<PayableAccount> = self.send_json(rb)?;
        Ok(env.data)
    }

    fn pay_account(
        &self,
        account_id: i64,
        req: &PaymentRequest,
    ) -> Result<PayableAccount, ApiError> {
        let path = format!("payable-accounts/{account_id}/payments");
        let env: Envelope<PayableAccount> =
            self.send_json(self.request(Method::POST, &path).json(req))?;
        Ok(env.data)
    }

    fn update_payment(
        &self,
        account_id: i64,
        payment_id: i64,
        req: &PaymentRequest,
    ) -> Result<(), ApiError> {
        let path = format!("payable-accounts/{account_id}/payments/{payment_id}");
        check_status(self.request(Method::PUT, &path).json(req).send()?)?;
        Ok(())
    }

    fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        let env: Envelope<Vec<User>> = self.send_json(self.request(Method::GET, "users"))?;
        Ok(env.data)
    }
}
