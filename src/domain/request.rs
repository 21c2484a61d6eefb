use crate::domain::value::{MessageType, SenderId};

#[derive(Debug, Clone, Default)]
/// Per-message overrides and extras for [`SendSms`].
///
/// Every field falls back to the client's configured default when `None`.
pub struct SendOptions {
    /// Override the configured sender id.
    pub from: Option<SenderId>,
    /// Override the configured message tier.
    pub message_type: Option<MessageType>,
    /// Override the configured send delay, in seconds.
    pub delay: Option<u32>,
    /// Message title, meaningful only for LMS sends. Silently dropped when
    /// the resolved tier is SMS (Aligo accepts a title only for LMS).
    pub subject: Option<String>,
    /// Absolute Unix timestamp for a reserved send. Takes precedence over
    /// `delay` when both are present.
    pub reserve_at: Option<i64>,
}

#[derive(Debug, Clone)]
/// One outbound message.
///
/// `to` and `text` are plain strings: emptiness is reported by
/// [`AligoClient::send`](crate::client::AligoClient::send) as a failed
/// [`SendOutcome`](crate::domain::SendOutcome) rather than rejected here, so
/// the dispatch layer always gets a uniform result record.
pub struct SendSms {
    to: String,
    text: String,
    options: SendOptions,
}

impl SendSms {
    /// Create a request with default options.
    pub fn new(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            options: SendOptions::default(),
        }
    }

    /// Create a request with explicit options.
    pub fn with_options(
        to: impl Into<String>,
        text: impl Into<String>,
        options: SendOptions,
    ) -> Self {
        Self {
            to: to.into(),
            text: text.into(),
            options,
        }
    }

    /// Recipient phone number as provided.
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Message body as provided.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Per-message overrides.
    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}
