//! Typed Rust client for the Aligo SMS HTTP API.
//!
//! [Aligo](https://smartsms.aligo.in) is a Korean SMS gateway. This crate
//! wraps its `/send/` endpoint: a domain layer of strong types, a transport
//! layer for the form/JSON wire format, and a small client layer performing
//! one POST per send.
//!
//! Send failures are reported, not raised: [`AligoClient::send`] always
//! resolves to a [`SendOutcome`] record with `success`, `reason`, and the
//! parsed vendor body in `detail`. Construction of the client is the only
//! fallible step.
//!
//! ```rust,no_run
//! use aligo::{AligoClient, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), aligo::ConfigError> {
//!     let client = AligoClient::new("my_id", "api-key", "025550100")?;
//!     let outcome = client.send(&SendSms::new("01012345678", "hello")).await;
//!     if !outcome.success {
//!         eprintln!("send failed: {}", outcome.reason);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{AligoClient, AligoClientBuilder, ConfigError};
pub use domain::{
    ApiKey, MessageType, PhoneNumber, ReserveTime, ResultCode, SendOptions, SendOutcome, SendSms,
    SenderId, UserId, ValidationError,
};
