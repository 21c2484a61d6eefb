use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ApiKey, MessageType, ReserveTime, ResultCode, SenderId, UserId};

const RECEIVER_FIELD: &str = "receiver";
const TITLE_FIELD: &str = "title";
const MSG_FIELD: &str = "msg";
const MESSAGE_FIELD: &str = "message";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no readable result_code")]
    MissingResultCode,
}

/// Fields of one `/send/` call after client defaults have been merged in.
#[derive(Debug, Clone)]
pub struct SendForm<'a> {
    pub key: &'a ApiKey,
    pub user_id: &'a UserId,
    pub receiver: &'a str,
    pub sender: &'a SenderId,
    pub subject: Option<&'a str>,
    pub text: &'a str,
    pub message_type: MessageType,
    pub reserve: Option<ReserveTime>,
}

/// Encode the Aligo `/send/` form body.
///
/// Empty values are omitted entirely; Aligo treats absent and empty fields
/// identically, and omission avoids ambiguity. The title is attached only
/// for LMS sends.
pub fn encode_send_form(form: &SendForm<'_>) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    params.push((ApiKey::FIELD.to_owned(), form.key.as_str().to_owned()));
    params.push((UserId::FIELD.to_owned(), form.user_id.as_str().to_owned()));
    params.push((RECEIVER_FIELD.to_owned(), form.receiver.to_owned()));
    params.push((SenderId::FIELD.to_owned(), form.sender.as_str().to_owned()));

    if form.message_type == MessageType::Lms {
        if let Some(subject) = form.subject.filter(|s| !s.is_empty()) {
            params.push((TITLE_FIELD.to_owned(), subject.to_owned()));
        }
    }

    params.push((MSG_FIELD.to_owned(), form.text.to_owned()));
    params.push((
        MessageType::FIELD.to_owned(),
        form.message_type.as_wire().to_owned(),
    ));

    if let Some(reserve) = form.reserve {
        params.push((ReserveTime::DATE_FIELD.to_owned(), reserve.rdate()));
        params.push((ReserveTime::TIME_FIELD.to_owned(), reserve.rtime()));
    }

    params
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
// Aligo serializes result_code as a number or a numeric string depending on
// the endpoint revision.
enum TransportCode {
    Number(i64),
    String(String),
}

impl TransportCode {
    fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(value) => i32::try_from(*value).ok(),
            Self::String(value) => value.trim().parse().ok(),
        }
    }
}

/// Decoded `/send/` response.
#[derive(Debug, Clone, PartialEq)]
pub struct SendReply {
    pub result_code: ResultCode,
    pub message: Option<String>,
    /// The full parsed body; extra vendor fields (`msg_id`, `success_cnt`,
    /// ...) pass through here.
    pub raw: Value,
}

/// Decode the Aligo `/send/` JSON response.
pub fn decode_send_json(body: &str) -> Result<SendReply, TransportError> {
    let raw: Value = serde_json::from_str(body)?;

    let code = raw
        .get(ResultCode::FIELD)
        .cloned()
        .and_then(|value| serde_json::from_value::<TransportCode>(value).ok())
        .and_then(|code| code.as_i32())
        .ok_or(TransportError::MissingResultCode)?;

    let message = raw
        .get(MESSAGE_FIELD)
        .and_then(Value::as_str)
        .map(str::to_owned);

    Ok(SendReply {
        result_code: ResultCode::new(code),
        message,
        raw,
    })
}
