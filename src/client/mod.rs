//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;

use crate::domain::{
    ApiKey, MessageType, ReserveTime, SendOutcome, SendSms, SenderId, UserId, ValidationError,
};
use crate::transport::{SendForm, decode_send_json, encode_send_form};

const DEFAULT_ENDPOINT: &str = "https://apis.aligo.in";
const SEND_PATH: &str = "/send/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
const DEFAULT_USER_AGENT: &str = concat!("SMS-Send-KR-Aligo/", env!("CARGO_PKG_VERSION"));

const REASON_TEXT_NEEDED: &str = "text is needed";
const REASON_TO_NEEDED: &str = "to is needed";
const REASON_UNKNOWN_ERROR: &str = "unknown error";
const REASON_BAD_RESPONSE: &str = "cannot get valid response for POST request";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: std::fmt::Debug + Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned when constructing an [`AligoClient`].
///
/// Construction is the only fallible step in this crate: a failed send is
/// reported through [`SendOutcome`], never raised.
pub enum ConfigError {
    /// A required credential or default failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The underlying HTTP client could not be constructed.
    #[error("http client error: {0}")]
    Http(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone)]
/// Builder for [`AligoClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// the default message tier and delay.
pub struct AligoClientBuilder {
    user_id: String,
    api_key: String,
    sender: String,
    message_type: MessageType,
    delay: u32,
    endpoint: String,
    user_agent: String,
    timeout: Duration,
}

impl AligoClientBuilder {
    /// Create a builder with the default endpoint, a 3 second timeout, and
    /// SMS as the default tier.
    pub fn new(
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            api_key: api_key.into(),
            sender: sender.into(),
            message_type: MessageType::default(),
            delay: 0,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Default message tier applied when a request carries no override.
    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Default send delay in seconds; `0` means send immediately.
    pub fn delay(mut self, seconds: u32) -> Self {
        self.delay = seconds;
        self
    }

    /// Override the Aligo base URL (a trailing slash is tolerated).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the HTTP timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build an [`AligoClient`].
    ///
    /// Validation is ordered: account id, then api key, then sender. No
    /// network or I/O happens here.
    pub fn build(self) -> Result<AligoClient, ConfigError> {
        let user_id = UserId::new(self.user_id)?;
        let api_key = ApiKey::new(self.api_key)?;
        let sender = SenderId::new(self.sender)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| ConfigError::Http(Box::new(err)))?;

        Ok(AligoClient {
            user_id,
            api_key,
            sender,
            message_type: self.message_type,
            delay: self.delay,
            send_url: send_url(&self.endpoint),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn send_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), SEND_PATH)
}

#[derive(Debug, Clone)]
/// High-level Aligo client.
///
/// Holds the validated credentials and per-client defaults, immutable after
/// construction; cloning shares the underlying HTTP client, and concurrent
/// sends from independent callers are safe. By default it posts to
/// `https://apis.aligo.in/send/`.
pub struct AligoClient {
    user_id: UserId,
    api_key: ApiKey,
    sender: SenderId,
    message_type: MessageType,
    delay: u32,
    send_url: String,
    http: Arc<dyn HttpTransport>,
}

impl AligoClient {
    /// Create a client with all defaults.
    ///
    /// For more customization, use [`AligoClient::builder`].
    pub fn new(
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::builder(user_id, api_key, sender).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        user_id: impl Into<String>,
        api_key: impl Into<String>,
        sender: impl Into<String>,
    ) -> AligoClientBuilder {
        AligoClientBuilder::new(user_id, api_key, sender)
    }

    /// Send one message through Aligo.
    ///
    /// This never returns `Err`: every failure mode comes back as a
    /// [`SendOutcome`] with `success: false` and a populated `reason` —
    /// missing text or recipient (checked before any network activity),
    /// transport failure ("unknown error"), an unparseable body, or a
    /// vendor-reported negative `result_code` (the vendor's `message` text).
    ///
    /// Reserved sends: an absolute `reserve_at` epoch wins over a positive
    /// `delay`; either is converted to the KST calendar fields Aligo
    /// expects. With neither, the message goes out immediately.
    pub async fn send(&self, request: &SendSms) -> SendOutcome {
        if request.text().is_empty() {
            return SendOutcome::fail(REASON_TEXT_NEEDED, None);
        }
        if request.to().is_empty() {
            return SendOutcome::fail(REASON_TO_NEEDED, None);
        }

        let options = request.options();
        let sender = options.from.as_ref().unwrap_or(&self.sender);
        let message_type = options.message_type.unwrap_or(self.message_type);
        let delay = options.delay.unwrap_or(self.delay);

        let reserve = match options.reserve_at {
            Some(epoch) => ReserveTime::from_epoch(epoch),
            None if delay > 0 => Some(ReserveTime::after_delay(Utc::now(), delay)),
            None => None,
        };

        let params = encode_send_form(&SendForm {
            key: &self.api_key,
            user_id: &self.user_id,
            receiver: request.to(),
            sender,
            subject: options.subject.as_deref(),
            text: request.text(),
            message_type,
            reserve,
        });

        let response = match self.http.post_form(&self.send_url, params).await {
            Ok(response) => response,
            Err(err) => {
                return SendOutcome::fail(
                    REASON_UNKNOWN_ERROR,
                    Some(Value::String(err.to_string())),
                );
            }
        };

        if !(200..=299).contains(&response.status) {
            return SendOutcome::fail(REASON_UNKNOWN_ERROR, non_empty_body(response.body));
        }

        let reply = match decode_send_json(&response.body) {
            Ok(reply) => reply,
            Err(_) => {
                return SendOutcome::fail(REASON_BAD_RESPONSE, non_empty_body(response.body));
            }
        };

        if reply.result_code.is_success() {
            SendOutcome::ok(Some(reply.raw))
        } else {
            SendOutcome::fail(reply.message.unwrap_or_default(), Some(reply.raw))
        }
    }
}

fn non_empty_body(body: String) -> Option<Value> {
    if body.trim().is_empty() {
        None
    } else {
        Some(Value::String(body))
    }
}
